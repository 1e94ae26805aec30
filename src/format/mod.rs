//! Text format tags and the compatibility matrix.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The plain-text formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Txt,
    Csv,
    Json,
    Yaml,
    Md,
}

impl TextFormat {
    /// All supported formats, in display order.
    pub const ALL: [TextFormat; 5] = [
        TextFormat::Txt,
        TextFormat::Csv,
        TextFormat::Json,
        TextFormat::Yaml,
        TextFormat::Md,
    ];

    /// Lowercase tag used on the wire and in CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Txt => "txt",
            TextFormat::Csv => "csv",
            TextFormat::Json => "json",
            TextFormat::Yaml => "yaml",
            TextFormat::Md => "md",
        }
    }

    /// Uppercase label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            TextFormat::Txt => "TXT",
            TextFormat::Csv => "CSV",
            TextFormat::Json => "JSON",
            TextFormat::Yaml => "YAML",
            TextFormat::Md => "Markdown",
        }
    }

    /// Parse a format tag, accepting surrounding whitespace and any casing.
    pub fn parse_tag(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "txt" | "text" => Some(TextFormat::Txt),
            "csv" => Some(TextFormat::Csv),
            "json" => Some(TextFormat::Json),
            "yaml" | "yml" => Some(TextFormat::Yaml),
            "md" | "markdown" => Some(TextFormat::Md),
            _ => None,
        }
    }

    /// Infer a format from a file extension.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::parse_tag(ext)
    }

    /// Target formats this format can convert to, including itself.
    ///
    /// The table is intentionally asymmetric: TXT reaches only itself and
    /// Markdown, never the structured formats, because there is no mapping
    /// rule worth guessing for free-form text.
    pub fn targets(&self) -> &'static [TextFormat] {
        match self {
            TextFormat::Json => &[TextFormat::Json, TextFormat::Yaml, TextFormat::Csv],
            TextFormat::Yaml => &[TextFormat::Yaml, TextFormat::Json],
            TextFormat::Csv => &[TextFormat::Csv, TextFormat::Json],
            TextFormat::Txt => &[TextFormat::Txt, TextFormat::Md],
            TextFormat::Md => &[TextFormat::Md, TextFormat::Txt],
        }
    }

    /// Whether this format can be converted to `to`.
    pub fn can_convert_to(&self, to: TextFormat) -> bool {
        self.targets().contains(&to)
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target formats available for `from`, as UI layers consume it.
pub fn supported_targets(from: TextFormat) -> &'static [TextFormat] {
    from.targets()
}

/// Whether a raw string names a supported format.
pub fn is_supported_format(value: &str) -> bool {
    TextFormat::parse_tag(value).is_some()
}
