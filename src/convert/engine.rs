//! The conversion dispatcher.

use crate::convert::{csv, json, markdown, yaml, ConvertRequest};
use crate::error::{ConvertError, ConvertResult};
use crate::format::TextFormat;
use crate::validation::require_non_empty;

/// Convert a request's input text from one format to another.
///
/// Order of operations: the non-empty gate runs first, then same-format
/// requests pass through without touching a parser (identity conversion
/// never fails, even for malformed content), then the fixed set of pair
/// handlers. Pairs outside the compatibility matrix are rejected with an
/// unsupported-conversion error rather than attempted.
pub fn convert(request: &ConvertRequest) -> ConvertResult<String> {
    require_non_empty(&request.input_text)?;

    let input = request.input_text.as_str();
    if request.from == request.to {
        return Ok(input.to_string());
    }

    match (request.from, request.to) {
        (TextFormat::Json, TextFormat::Yaml) => {
            let value = json::parse_json(input)?;
            yaml::to_yaml(&value)
        }
        (TextFormat::Yaml, TextFormat::Json) => {
            let value = yaml::parse_yaml(input)?;
            json::to_json_pretty(&value)
        }
        (TextFormat::Csv, TextFormat::Json) => csv::csv_to_json_text(input),
        (TextFormat::Json, TextFormat::Csv) => csv::json_text_to_csv(input),
        (TextFormat::Txt, TextFormat::Md) => Ok(markdown::text_to_markdown(input)),
        (TextFormat::Md, TextFormat::Txt) => Ok(markdown::markdown_to_text(input)),
        (from, to) => Err(ConvertError::unsupported(from, to)),
    }
}
