//! Text format conversion: request/outcome types and the dispatcher.

pub mod csv;
pub mod engine;
pub mod json;
pub mod limits;
pub mod markdown;
pub mod yaml;

pub use engine::convert;

use crate::error::{ConvertError, ErrorKind};
use crate::format::TextFormat;

/// A single conversion call. Built per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input_text: String,
    pub from: TextFormat,
    pub to: TextFormat,
}

impl ConvertRequest {
    pub fn new(input_text: impl Into<String>, from: TextFormat, to: TextFormat) -> Self {
        Self {
            input_text: input_text.into(),
            from,
            to,
        }
    }
}

/// Tagged success/failure carrier for callers that want the result as a
/// value instead of a `Result`, e.g. a UI layer that renders either the
/// output text or a message. Success never carries an error and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    Ok { output_text: String },
    Failed { kind: ErrorKind, message: String },
}

impl ConvertOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub fn output_text(&self) -> Option<&str> {
        match self {
            Self::Ok { output_text } => Some(output_text),
            Self::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Failed { message, .. } => Some(message),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Ok { .. } => None,
            Self::Failed { kind, .. } => Some(*kind),
        }
    }
}

impl From<Result<String, ConvertError>> for ConvertOutcome {
    fn from(result: Result<String, ConvertError>) -> Self {
        match result {
            Ok(output_text) => Self::Ok { output_text },
            Err(err) => Self::Failed {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Run a conversion and fold the result into a [`ConvertOutcome`]. No error
/// or panic escapes this entry point.
pub fn convert_outcome(request: &ConvertRequest) -> ConvertOutcome {
    convert(request).into()
}
