//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::MAX_TIMEOUT_SECS;

/// Parse and validate a per-invocation timeout in seconds.
pub fn parse_timeout(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number of seconds"))?;

    if value == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    if value > MAX_TIMEOUT_SECS {
        return Err(format!(
            "timeout must be at most {MAX_TIMEOUT_SECS} seconds, got {value}"
        ));
    }

    Ok(value)
}
