use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read piped JSON from stdin straight into the command's input shape
/// (projection parameters or survey answers).
///
/// Returns `Ok(None)` when stdin is a TTY or the pipe is empty, so that
/// flag-based invocation still works without piped data.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = serde_json::from_str(trimmed).map_err(|e| format!("invalid JSON on stdin: {e}"))?;
    Ok(Some(parsed))
}
