//! Unit tests for the Markdown ↔ plain-text pair.

use pretty_assertions::assert_eq;
use textconv::{convert_text, TextFormat};

fn md_to_txt(input: &str) -> String {
    convert_text(input, TextFormat::Md, TextFormat::Txt).unwrap()
}

#[test]
fn txt_to_md_is_the_identity() {
    let input = "just some text\nwith * stars and # hashes";
    let out = convert_text(input, TextFormat::Txt, TextFormat::Md).unwrap();
    assert_eq!(out, input);
}

#[test]
fn headings_and_emphasis_are_stripped() {
    assert_eq!(md_to_txt("# Title\n**bold** text"), "Title\nbold text");
    assert_eq!(md_to_txt("### Deep heading"), "Deep heading");
    assert_eq!(md_to_txt("_italic_ and __bold__"), "italic and bold");
}

#[test]
fn code_fences_keep_their_content() {
    assert_eq!(md_to_txt("```rust\nlet x = 1;\n```"), "let x = 1;");
    // the closing fence's newline survives, leaving a blank line
    assert_eq!(md_to_txt("before\n```\ninner\n```\nafter"), "before\ninner\n\nafter");
}

#[test]
fn inline_code_keeps_its_content() {
    assert_eq!(md_to_txt("run `cargo check` now"), "run cargo check now");
}

#[test]
fn links_keep_text_and_drop_urls() {
    assert_eq!(
        md_to_txt("see [the docs](https://example.com)"),
        "see the docs"
    );
}

#[test]
fn blockquotes_lose_their_markers() {
    assert_eq!(md_to_txt("> quoted line\n> another"), "quoted line\nanother");
}

#[test]
fn list_markers_are_stripped() {
    assert_eq!(md_to_txt("- first\n- second\n1. third"), "first\nsecond\nthird");
}

#[test]
fn blank_line_runs_collapse_to_one_blank_line() {
    assert_eq!(md_to_txt("para one\n\n\n\npara two"), "para one\n\npara two");
}

#[test]
fn result_is_trimmed() {
    assert_eq!(md_to_txt("\n\n# Title\n\n"), "Title");
}

#[test]
fn stripping_never_fails_even_for_malformed_markup() {
    for input in ["```", "***", "[broken](", "![", "> ", "#"] {
        assert!(convert_text(input, TextFormat::Md, TextFormat::Txt).is_ok());
    }
}
