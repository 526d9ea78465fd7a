pub mod projection;
pub mod readiness;
