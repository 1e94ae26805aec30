//! Input validation applied before any parser runs.

use crate::error::{ConvertError, ConvertResult};

/// Reject empty or whitespace-only input.
///
/// Runs before any parser so the user sees a clear message instead of a
/// cryptic syntax error from, say, a JSON parser fed an empty string.
pub fn require_non_empty(input: &str) -> ConvertResult<()> {
    if input.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    Ok(())
}
