//! textconv - plain-text data format converter
//!
//! Converts between TXT, CSV, JSON, YAML, and Markdown according to a fixed
//! compatibility matrix. Conversions are pure, synchronous string-to-string
//! functions with no I/O and no shared state; anything not in the matrix is
//! rejected rather than guessed.

pub mod cli;
pub mod convert;
pub mod error;
pub mod format;
pub mod validation;

// Re-export commonly used types
pub use convert::{convert, convert_outcome, ConvertOutcome, ConvertRequest};
pub use error::{ConvertError, ConvertResult, ErrorKind};
pub use format::{is_supported_format, supported_targets, TextFormat};

/// Convert `input_text` from one format to another.
pub fn convert_text(
    input_text: &str,
    from: TextFormat,
    to: TextFormat,
) -> ConvertResult<String> {
    convert(&ConvertRequest::new(input_text, from, to))
}
