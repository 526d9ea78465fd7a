pub mod error;
pub mod format;
pub mod types;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "readiness")]
pub mod readiness;

pub use error::NestEggError;
pub use types::*;

/// Standard result type for all nestegg operations
pub type NestEggResult<T> = Result<T, NestEggError>;
