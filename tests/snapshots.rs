//! Snapshot tests for parsedtext output.
//!
//! These tests capture the JSON, tree, and rendered output of the tokenizer.
//! Run with `cargo insta review` to update snapshots.

use crossterm::style::Color;
use parsedtext_ansi::Style;
use parsedtext_parser::{parse, ParseResult, PatternDescriptor};
use parsedtext_render::{outline, RenderStyle, Renderer};

/// Helper to build descriptors from regex sources.
fn patterns(sources: &[&str]) -> Vec<PatternDescriptor> {
    sources
        .iter()
        .map(|s| PatternDescriptor::from_source(s).unwrap())
        .collect()
}

/// Helper to render with a fixed palette, escapes made printable.
fn render(result: &ParseResult, palette: Vec<Color>) -> String {
    let style = RenderStyle {
        children: Style::new(),
        palette,
    };
    let mut output = Vec::new();
    Renderer::with_style(&mut output, style).render(result).unwrap();
    format!("{:?}", String::from_utf8(output).unwrap())
}

// =============================================================================
// JSON Snapshots
// =============================================================================

#[test]
fn test_snapshot_json_nested() {
    let mut descriptors = patterns(&[r"\[[^\]]*\]", r"@\w+"]);
    descriptors[0] = descriptors[0].clone().with_prop("bold", true);
    let result = parse("see [@bob]", &descriptors);

    insta::assert_snapshot!(serde_json::to_string_pretty(&result).unwrap(), @r#"
    {
      "text": "see {{TOKEN-0-0}}",
      "tokens": {
        "TOKEN-0-0": {
          "text": "[{{TOKEN-1-1}}]",
          "props": {
            "bold": true
          }
        },
        "TOKEN-1-1": {
          "text": "@bob",
          "props": {}
        }
      }
    }
    "#);
}

// =============================================================================
// Tree Snapshots
// =============================================================================

#[test]
fn test_snapshot_tree_insertion_order() {
    let result = parse("[x] (x [x])", &patterns(&[r"\(.*?\)", r"\[.*?\]", "x"]));

    insta::assert_snapshot!(outline(&result), @r#"
    TOKEN-1-2
      "["
      TOKEN-2-5
        "x"
      "]"
    " "
    TOKEN-0-0
      "("
      TOKEN-2-3
        "x"
      " "
      TOKEN-1-1
        "["
        TOKEN-2-4
          "x"
        "]"
      ")"
    "#);
}

// =============================================================================
// Render Snapshots
// =============================================================================

#[test]
fn test_snapshot_render_single() {
    let result = parse("hi @ann", &patterns(&[r"@\w+"]));
    insta::assert_snapshot!(render(&result, vec![Color::Red]), @r#""hi \u{1b}[91m@ann\u{1b}[0m""#);
}

#[test]
fn test_snapshot_render_nested() {
    let result = parse("[a@b]", &patterns(&[r"\[.*\]", r"@\w"]));
    insta::assert_snapshot!(
        render(&result, vec![Color::Blue, Color::Green]),
        @r#""\u{1b}[94m[a\u{1b}[0m\u{1b}[92m@b\u{1b}[0m\u{1b}[94m]\u{1b}[0m""#
    );
}
