//! Marker grammar.
//!
//! Text returned by the tokenizer embeds tokens as `{{TOKEN-i-n}}`. This
//! module scans for that exact grammar and rebuilds the source from a
//! [`ParseResult`].

use std::ops::Range;
use std::sync::LazyLock;

use parsedtext_core::{ParseResult, TokenName};
use regex::Regex;

use crate::tree::build_tree;

/// Regex matching one embedded marker; group 1 is the token name.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(TOKEN-[0-9]+-[0-9]+)\}\}").unwrap());

/// A piece of marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text between markers
    Text(&'a str),
    /// A marker referencing a token
    Marker(TokenName),
}

/// Byte ranges and names of every well-formed marker in `text`.
///
/// Marker-shaped text whose numbers do not fit a `usize` is skipped.
pub(crate) fn marker_positions(text: &str) -> impl Iterator<Item = (Range<usize>, TokenName)> + '_ {
    MARKER_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps[1].parse::<TokenName>().ok()?;
        Some((whole.range(), name))
    })
}

/// Split text into literal runs and markers, in order.
///
/// # Example
///
/// ```
/// use parsedtext_parser::{segments, Segment, TokenName};
///
/// let parts = segments("a {{TOKEN-0-1}}!");
/// assert_eq!(
///     parts,
///     vec![
///         Segment::Text("a "),
///         Segment::Marker(TokenName::new(0, 1)),
///         Segment::Text("!"),
///     ]
/// );
/// ```
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last_end = 0;

    for (range, name) in marker_positions(text) {
        if range.start > last_end {
            out.push(Segment::Text(&text[last_end..range.start]));
        }
        out.push(Segment::Marker(name));
        last_end = range.end;
    }

    if last_end < text.len() {
        out.push(Segment::Text(&text[last_end..]));
    }

    out
}

/// Token names referenced directly by markers in `text`.
pub fn find_markers(text: &str) -> Vec<TokenName> {
    segments(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Marker(name) => Some(name),
            Segment::Text(_) => None,
        })
        .collect()
}

/// Rebuild the source text by expanding every marker with its token's
/// text, recursively.
///
/// The output equals the original source up to any `render_text`
/// transformations, provided the source held no marker-shaped text of its
/// own. Markers naming unknown tokens are kept literally.
pub fn reconstruct(result: &ParseResult) -> String {
    build_tree(result).iter().map(|n| n.plain_text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, PatternDescriptor};

    fn pat(source: &str) -> PatternDescriptor {
        PatternDescriptor::from_source(source).unwrap()
    }

    #[test]
    fn test_segments_plain() {
        assert_eq!(segments("no markers"), vec![Segment::Text("no markers")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_segments_adjacent_markers() {
        assert_eq!(
            segments("{{TOKEN-0-0}}{{TOKEN-1-1}}"),
            vec![
                Segment::Marker(TokenName::new(0, 0)),
                Segment::Marker(TokenName::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_segments_ignores_near_misses() {
        let text = "{TOKEN-0-0} {{TOKEN-0}} {{token-0-0}}";
        assert_eq!(segments(text), vec![Segment::Text(text)]);
    }

    #[test]
    fn test_oversized_numbers_stay_literal() {
        let text = "{{TOKEN-0-99999999999999999999999999}}";
        assert_eq!(segments(text), vec![Segment::Text(text)]);
    }

    #[test]
    fn test_find_markers() {
        let result = parse("hello foo and foo", &[pat("foo")]);
        assert_eq!(
            find_markers(&result.text),
            vec![TokenName::new(0, 0), TokenName::new(0, 1)]
        );
    }

    #[test]
    fn test_reconstruct_nested() {
        let source = "hi [@bob and @willy] @ann";
        let result = parse(source, &[pat(r"\[[^\]]*\]"), pat(r"@\w+"), pat("o")]);
        assert_eq!(reconstruct(&result), source);
    }

    #[test]
    fn test_reconstruct_wrapped_earlier_token() {
        let source = "see http://foo.bar now";
        let result = parse(source, &[pat("bar"), pat(r"https?://\S+")]);
        assert_eq!(result.tokens["TOKEN-1-1"].text, "http://foo.{{TOKEN-0-0}}");
        assert_eq!(reconstruct(&result), source);
    }

    #[test]
    fn test_reconstruct_applies_render_text() {
        let patterns = [pat(r"\[(@[^:]+):([^\]]+)\]").with_template("$1")];
        let result = parse("Mention [@michel:561316513]", &patterns);
        assert_eq!(reconstruct(&result), "Mention @michel");
    }
}
