//! YAML parsing and emission.
//!
//! Parsing accepts a single YAML document and normalizes it into a
//! `serde_json::Value` tree so the other converters share one value shape.
//! Emission goes through `serde_yaml`, which serializes by value and
//! therefore never writes `&anchor`/`*alias` references, even when the
//! source document used them.

use serde_json::{Map, Number, Value};

use crate::error::{ConvertError, ConvertResult};
use crate::format::TextFormat;

/// Parse a single-document YAML input into a JSON value tree.
pub fn parse_yaml(input: &str) -> ConvertResult<Value> {
    let doc: serde_yaml::Value = serde_yaml::from_str(input)
        .map_err(|err| ConvertError::format(TextFormat::Yaml, format!("invalid YAML: {err}")))?;
    Ok(yaml_to_json(doc))
}

/// Emit a value as YAML with 2-space indentation.
pub fn to_yaml(value: &Value) -> ConvertResult<String> {
    serde_yaml::to_string(value)
        .map_err(|err| ConvertError::serialize(TextFormat::Yaml, err.to_string()))
}

/// Normalize a `serde_yaml::Value` into a `serde_json::Value`.
///
/// Non-string mapping keys are rendered to their YAML scalar text, and
/// tagged values collapse to their payload. Numbers outside the JSON range
/// (NaN, infinities) become null, matching what a JSON round-trip would do.
fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(num) => {
            if let Some(i) = num.as_i64() {
                Value::Number(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Value::Number(Number::from(u))
            } else if let Some(f) = num.as_f64() {
                Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_json).collect())
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, val) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    other => serde_yaml::to_string(&other)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                };
                object.insert(key, yaml_to_json(val));
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}
