//! Error types for text format conversion.

use crate::format::TextFormat;

/// Discriminant for the error taxonomy.
///
/// Callers branch on this instead of matching message text, so wording can
/// change without breaking anyone. `UnsupportedConversion` is deliberately
/// separate from `Format`: the input may be perfectly valid in its own
/// format, the pair is just not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input rejected before parsing (empty, or over the caller's size cap).
    Validation,
    /// Source text is malformed for the declared format, or its shape does
    /// not fit the target format.
    Format,
    /// The (from, to) pair is not in the compatibility matrix.
    UnsupportedConversion,
    /// Parsed fine but could not be re-emitted in the target format.
    Serialization,
}

/// Error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("input is empty; provide text before converting")]
    EmptyInput,

    #[error("input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("{message}")]
    Format { format: TextFormat, message: String },

    #[error("conversion {} → {} is not supported", .from.label(), .to.label())]
    Unsupported { from: TextFormat, to: TextFormat },

    #[error("could not serialize value as {}: {message}", .format.label())]
    Serialize { format: TextFormat, message: String },
}

impl ConvertError {
    pub fn format(format: TextFormat, message: impl Into<String>) -> Self {
        Self::Format {
            format,
            message: message.into(),
        }
    }

    pub fn serialize(format: TextFormat, message: impl Into<String>) -> Self {
        Self::Serialize {
            format,
            message: message.into(),
        }
    }

    pub fn unsupported(from: TextFormat, to: TextFormat) -> Self {
        Self::Unsupported { from, to }
    }

    /// The taxonomy kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::InputTooLarge { .. } => ErrorKind::Validation,
            Self::Format { .. } => ErrorKind::Format,
            Self::Unsupported { .. } => ErrorKind::UnsupportedConversion,
            Self::Serialize { .. } => ErrorKind::Serialization,
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
