//! Unit tests for the CSV ↔ JSON conversion pair.

use pretty_assertions::assert_eq;
use serde_json::json;
use textconv::{convert_text, ErrorKind, TextFormat};

#[test]
fn csv_rows_become_objects_keyed_by_header() {
    let out = convert_text("a,b\n1,2\n3,4", TextFormat::Csv, TextFormat::Json).unwrap();
    assert_eq!(
        out,
        "[\n  {\n    \"a\": \"1\",\n    \"b\": \"2\"\n  },\n  {\n    \"a\": \"3\",\n    \"b\": \"4\"\n  }\n]"
    );
}

#[test]
fn numeric_cells_stay_strings() {
    let out = convert_text("n\n42", TextFormat::Csv, TextFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, json!([{ "n": "42" }]));
}

#[test]
fn blank_lines_are_skipped() {
    let out = convert_text("a,b\n\n1,2\n\n", TextFormat::Csv, TextFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, json!([{ "a": "1", "b": "2" }]));
}

#[test]
fn quoted_fields_keep_embedded_delimiters() {
    let out = convert_text("a,b\n\"1,5\",2", TextFormat::Csv, TextFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value, json!([{ "a": "1,5", "b": "2" }]));
}

#[test]
fn ragged_rows_are_a_format_error() {
    let err = convert_text("a,b\n1", TextFormat::Csv, TextFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("invalid CSV"));
}

#[test]
fn header_without_data_is_rejected() {
    let err = convert_text("a,b", TextFormat::Csv, TextFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("no data rows"));
}

#[test]
fn array_of_objects_becomes_csv() {
    let out = convert_text(
        r#"[{"a":1,"b":"x"},{"a":2,"b":"y"}]"#,
        TextFormat::Json,
        TextFormat::Csv,
    )
    .unwrap();
    assert_eq!(out, "a,b\n1,x\n2,y");
}

#[test]
fn bare_object_becomes_a_single_row() {
    let out = convert_text(r#"{"a":1,"b":"x"}"#, TextFormat::Json, TextFormat::Csv).unwrap();
    assert_eq!(out, "a,b\n1,x");
}

#[test]
fn header_is_the_union_of_row_keys_in_first_seen_order() {
    let out = convert_text(
        r#"[{"b":1,"a":2},{"a":3,"c":4}]"#,
        TextFormat::Json,
        TextFormat::Csv,
    )
    .unwrap();
    assert_eq!(out, "b,a,c\n1,2,\n,3,4");
}

#[test]
fn cells_with_delimiters_are_quoted_on_export() {
    let out = convert_text(r#"[{"a":"1,5"}]"#, TextFormat::Json, TextFormat::Csv).unwrap();
    assert_eq!(out, "a\n\"1,5\"");
}

#[test]
fn empty_array_is_rejected() {
    let err = convert_text("[]", TextFormat::Json, TextFormat::Csv).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("empty"));
}

#[test]
fn arrays_of_scalars_are_rejected() {
    let err = convert_text("[1,2,3]", TextFormat::Json, TextFormat::Csv).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("array of objects"));
}

#[test]
fn nested_values_are_rejected_not_flattened() {
    let err = convert_text(
        r#"[{"a":{"x":1}}]"#,
        TextFormat::Json,
        TextFormat::Csv,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("nested"));
}

#[test]
fn csv_json_round_trip_preserves_rows() {
    let original = "a,b\n1,x\n2,y";
    let json_text = convert_text(original, TextFormat::Csv, TextFormat::Json).unwrap();
    let back = convert_text(&json_text, TextFormat::Json, TextFormat::Csv).unwrap();
    assert_eq!(back, original);
}
