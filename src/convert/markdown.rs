//! Markdown ↔ plain-text conversion.
//!
//! TXT→MD is the identity: plain text is already valid Markdown source.
//! MD→TXT is a best-effort stripper, not a compliant Markdown parser. It
//! runs a fixed sequence of pure rewrite passes, and the sequence is a
//! contract: code fences are removed before the line-marker passes so fence
//! delimiters never get mistaken for list or quote markers, and the link
//! pass runs before the image pass per the documented order. Nested or
//! malformed constructs may leave residual markup; the stripper never
//! fails.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static FENCE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"```[a-zA-Z0-9_-]*\n?").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+").unwrap());
static BOLD_STARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static BOLD_UNDERSCORES: Lazy<Regex> = Lazy::new(|| Regex::new(r"__([^_]+)__").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*> ?").unwrap());
static UNORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*[-*][ \t]+").unwrap());
static ORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*\d+\.[ \t]+").unwrap());
static EXTRA_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Plain text passes through unchanged; it is already Markdown.
pub fn text_to_markdown(input: &str) -> String {
    input.to_string()
}

/// Strip Markdown syntax, keeping the readable text. Never fails.
pub fn markdown_to_text(input: &str) -> String {
    let out = strip_code_fences(input);
    let out = strip_inline_code(&out);
    let out = strip_links(&out);
    let out = strip_images(&out);
    let out = strip_headings(&out);
    let out = strip_emphasis(&out);
    let out = strip_blockquotes(&out);
    let out = strip_list_markers(&out);
    let out = collapse_blank_lines(&out);
    out.trim().to_string()
}

/// Remove triple-backtick fences (with optional language tag), keeping the
/// inner content.
fn strip_code_fences(input: &str) -> String {
    FENCED_BLOCK
        .replace_all(input, |caps: &regex::Captures<'_>| {
            FENCE_MARKER.replace_all(&caps[0], "").replace("```", "")
        })
        .into_owned()
}

fn strip_inline_code(input: &str) -> String {
    INLINE_CODE.replace_all(input, "$1").into_owned()
}

/// `[text](url)` becomes `text`.
fn strip_links(input: &str) -> String {
    LINK.replace_all(input, "$1").into_owned()
}

/// `![alt](url)` becomes `alt`. With the link pass already applied, this
/// only fires for images with an empty alt text.
fn strip_images(input: &str) -> String {
    IMAGE.replace_all(input, "$1").into_owned()
}

fn strip_headings(input: &str) -> String {
    HEADING.replace_all(input, "").into_owned()
}

fn strip_emphasis(input: &str) -> String {
    let out = BOLD_STARS.replace_all(input, "$1");
    let out = ITALIC_STAR.replace_all(&out, "$1");
    let out = BOLD_UNDERSCORES.replace_all(&out, "$1");
    ITALIC_UNDERSCORE.replace_all(&out, "$1").into_owned()
}

fn strip_blockquotes(input: &str) -> String {
    BLOCKQUOTE.replace_all(input, "").into_owned()
}

fn strip_list_markers(input: &str) -> String {
    let out = UNORDERED_MARKER.replace_all(input, "");
    ORDERED_MARKER.replace_all(&out, "").into_owned()
}

/// Collapse runs of three or more newlines to exactly two.
fn collapse_blank_lines(input: &str) -> String {
    EXTRA_BLANK_LINES.replace_all(input, "\n\n").into_owned()
}
