//! Validation utilities.

use crate::{GatepassError, GatepassResult};

/// Validates that a caller-supplied value is not blank (not empty after
/// trimming).
///
/// Argument validation runs before any cache traffic, so malformed input
/// fails fast without touching the network.
pub fn require_non_blank(field: &'static str, value: &str) -> GatepassResult<()> {
    if value.trim().is_empty() {
        return Err(GatepassError::invalid_argument(format!(
            "{} must not be blank",
            field
        )));
    }
    Ok(())
}
