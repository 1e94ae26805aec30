//! Input size ceiling.
//!
//! The converters themselves run in time proportional to input size and
//! impose no cap; bounding worst-case latency is the caller's job. The CLI
//! is that caller and checks the ceiling here before dispatching.

use crate::error::{ConvertError, ConvertResult};

/// Default input ceiling for the CLI: 10 MB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Reject input longer than `limit` bytes.
pub fn check_input_size(input: &str, limit: usize) -> ConvertResult<()> {
    if input.len() > limit {
        return Err(ConvertError::InputTooLarge {
            size: input.len(),
            limit,
        });
    }
    Ok(())
}

/// Parse a size limit string such as "512KB", "10MB", "1GB", or a bare
/// byte count. `None` yields the default ceiling.
pub fn parse_size_limit(limit: Option<&str>) -> Result<usize, String> {
    let Some(text) = limit else {
        return Ok(DEFAULT_MAX_INPUT_BYTES);
    };
    let text = text.trim();
    let parse_scaled = |digits: &str, scale: f64| {
        digits
            .trim()
            .parse::<f64>()
            .map(|n| (n * scale) as usize)
            .map_err(|_| format!("invalid size limit '{text}'"))
    };
    if let Some(digits) = text.strip_suffix("GB") {
        parse_scaled(digits, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(digits) = text.strip_suffix("MB") {
        parse_scaled(digits, 1024.0 * 1024.0)
    } else if let Some(digits) = text.strip_suffix("KB") {
        parse_scaled(digits, 1024.0)
    } else if let Some(digits) = text.strip_suffix('B') {
        parse_scaled(digits, 1.0)
    } else {
        text.parse::<usize>()
            .map_err(|_| format!("invalid size limit '{text}'"))
    }
}
