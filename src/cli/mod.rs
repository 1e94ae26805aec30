//! Command-line interface module.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use crate::format::TextFormat;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "textconv")]
#[command(about = "Convert between plain-text data formats (TXT, CSV, JSON, YAML, Markdown)")]
#[command(version)]
pub struct Args {
    /// Input text or path to an input file
    #[arg()]
    pub input: Option<String>,

    /// Source format (inferred from the input file extension when omitted)
    #[arg(short, long, value_enum)]
    pub from: Option<TextFormat>,

    /// Target format (inferred from the output file extension when omitted)
    #[arg(short, long, value_enum)]
    pub to: Option<TextFormat>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read input from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Maximum input size (e.g. 512KB, 10MB; default: 10MB)
    #[arg(long)]
    pub max_input_size: Option<String>,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Subcommands for inspecting the converter
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the supported target formats for a source format
    Targets {
        /// Source format
        #[arg(value_enum)]
        from: TextFormat,
    },
    /// List all supported formats
    Formats,
}

/// Where the input text comes from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Literal text passed on the command line
    Text(String),
    /// A file path
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Decide how to treat the positional argument: an existing file is
    /// read from disk, anything else is literal input text.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        if args.stdin {
            return Ok(Self::Stdin);
        }
        match &args.input {
            Some(input) => {
                let path = PathBuf::from(input);
                if path.is_file() {
                    Ok(Self::File(path))
                } else {
                    Ok(Self::Text(input.clone()))
                }
            }
            None => Err(anyhow::anyhow!(
                "no input provided; pass text, a file path, or --stdin"
            )),
        }
    }

    /// Read the input text from this source.
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|err| {
                    anyhow::anyhow!("failed to read {}: {err}", path.display())
                })
            }
            Self::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    /// Source format inferred from a file extension, if any.
    pub fn format_hint(&self) -> Option<TextFormat> {
        match self {
            Self::File(path) => TextFormat::from_extension(path),
            _ => None,
        }
    }

    /// Human-readable description for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Text(_) => "string input".to_string(),
            Self::File(path) => format!("file: {}", path.display()),
            Self::Stdin => "standard input".to_string(),
        }
    }
}
