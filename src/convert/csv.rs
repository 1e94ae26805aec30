//! CSV ↔ JSON conversion.
//!
//! CSV→JSON treats the first row as the header and keeps every cell a
//! string; no type inference, so numeric-looking cells stay quoted in the
//! output. JSON→CSV only accepts flat objects: nested objects or arrays are
//! rejected instead of flattened.

use csv::{ReaderBuilder, WriterBuilder};
use serde_json::{Map, Value};

use crate::convert::json::{parse_json, to_json_pretty};
use crate::error::{ConvertError, ConvertResult};
use crate::format::TextFormat;

/// Convert CSV text into a pretty-printed JSON array of objects.
pub fn csv_to_json_text(input: &str) -> ConvertResult<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.trim().as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(invalid_csv)?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    if headers.iter().all(|header| header.is_empty()) {
        return Err(ConvertError::format(
            TextFormat::Csv,
            "CSV is missing a header row; the first row must name the columns",
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(invalid_csv)?;
        let mut row = Map::new();
        for (idx, header) in headers.iter().enumerate() {
            // Columns with a blank header name carry no key and are dropped.
            if header.is_empty() {
                continue;
            }
            let cell = record.get(idx).unwrap_or("");
            row.insert(header.clone(), Value::String(cell.to_string()));
        }
        rows.push(Value::Object(row));
    }
    if rows.is_empty() {
        return Err(ConvertError::format(
            TextFormat::Csv,
            "CSV has no data rows after the header",
        ));
    }

    to_json_pretty(&Value::Array(rows))
}

/// Convert JSON text (an object or an array of flat objects) into CSV.
///
/// The header is the union of all row keys in first-seen order; rows
/// missing a key emit an empty cell. Fields are only quoted when the
/// writer's default rules require it (embedded delimiters, quotes,
/// newlines).
pub fn json_text_to_csv(input: &str) -> ConvertResult<String> {
    let value = parse_json(input)?;

    let rows: Vec<Map<String, Value>> = match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => {
            let mut rows = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => rows.push(map),
                    _ => return Err(shape_error()),
                }
            }
            rows
        }
        _ => return Err(shape_error()),
    };
    if rows.is_empty() {
        return Err(ConvertError::format(
            TextFormat::Json,
            "JSON array is empty; there is no data to export as CSV",
        ));
    }

    let mut headers: Vec<String> = Vec::new();
    for row in &rows {
        for (key, cell) in row {
            if matches!(cell, Value::Object(_) | Value::Array(_)) {
                return Err(ConvertError::format(
                    TextFormat::Json,
                    format!(
                        "field \"{key}\" holds a nested object or array; \
                         flattening is not supported for CSV export"
                    ),
                ));
            }
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        return Err(ConvertError::format(
            TextFormat::Json,
            "JSON objects have no fields; there is nothing to export as CSV",
        ));
    }

    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(&headers).map_err(csv_write_error)?;
    for row in &rows {
        let record: Vec<String> = headers
            .iter()
            .map(|header| row.get(header).map(scalar_cell).unwrap_or_default())
            .collect();
        writer.write_record(&record).map_err(csv_write_error)?;
    }
    writer.flush().map_err(|err| csv_io_error(err.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|err| csv_io_error(err.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|err| csv_io_error(err.to_string()))?;
    Ok(text.trim_end().to_string())
}

/// Render a scalar JSON value as a CSV cell. Null becomes an empty cell.
fn scalar_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested values are rejected before any cell is rendered.
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

fn shape_error() -> ConvertError {
    ConvertError::format(
        TextFormat::Json,
        "JSON must be an object or an array of objects to export as CSV",
    )
}

fn invalid_csv(err: csv::Error) -> ConvertError {
    ConvertError::format(TextFormat::Csv, format!("invalid CSV: {err}"))
}

fn csv_write_error(err: csv::Error) -> ConvertError {
    ConvertError::serialize(TextFormat::Csv, err.to_string())
}

fn csv_io_error(message: String) -> ConvertError {
    ConvertError::serialize(TextFormat::Csv, message)
}
