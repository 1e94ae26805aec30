//! JSON parsing and pretty-printing.
//!
//! With `serde_json`'s `preserve_order` feature the pretty output keeps the
//! key order of the source structure, so converting back and forth does not
//! shuffle fields.

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};
use crate::format::TextFormat;

/// Parse a JSON document. Any valid JSON value is accepted, including bare
/// scalars and arrays.
pub fn parse_json(input: &str) -> ConvertResult<Value> {
    serde_json::from_str(input)
        .map_err(|err| ConvertError::format(TextFormat::Json, format!("invalid JSON: {err}")))
}

/// Pretty-print a value as JSON with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> ConvertResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| ConvertError::serialize(TextFormat::Json, err.to_string()))
}
