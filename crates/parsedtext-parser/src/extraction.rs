//! The tokenizer.
//!
//! Patterns are applied one after another. For each pattern the tokenizer
//! collects the active spans (the text of every token created so far, in
//! creation order, followed by the top-level text) and sweeps the pattern
//! over each of them. Every match becomes a token and is replaced by its
//! marker. Tokens created during a pattern's pass are not spans of that
//! same pass.

use log::{debug, trace};
use parsedtext_core::{ParseResult, Token, TokenMap};
use regex::Captures;

use crate::pattern::PatternDescriptor;

/// A text buffer a pattern is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Text of the token at this position of the token map
    Token(usize),
    /// The top-level text
    Root,
}

/// Spans a pattern is applied to, in application order.
///
/// Existing tokens come first, in creation order; the top-level text is
/// always last.
pub fn active_spans(tokens: &TokenMap) -> Vec<Span> {
    (0..tokens.len())
        .map(Span::Token)
        .chain(std::iter::once(Span::Root))
        .collect()
}

/// Tokenizer over one source text and an ordered pattern list.
#[derive(Debug, Clone, Copy)]
pub struct TextExtraction<'a> {
    text: &'a str,
    patterns: &'a [PatternDescriptor],
}

impl<'a> TextExtraction<'a> {
    /// Create a tokenizer.
    pub fn new(text: &'a str, patterns: &'a [PatternDescriptor]) -> Self {
        Self { text, patterns }
    }

    /// Create a tokenizer with no patterns; [`parse`](Self::parse) returns
    /// the text unchanged.
    pub fn without_patterns(text: &'a str) -> Self {
        Self { text, patterns: &[] }
    }

    /// Run every pattern and return the marker text plus the token map.
    pub fn parse(&self) -> ParseResult {
        let mut tokens = TokenMap::new();
        let mut text = self.text.to_string();

        for (pattern_index, pattern) in self.patterns.iter().enumerate() {
            let spans = active_spans(&tokens);
            let before = tokens.len();

            for span in spans {
                match span {
                    Span::Token(position) => tokens.rewrite_text(position, |old, tokens| {
                        sweep(pattern, pattern_index, old, tokens)
                    }),
                    Span::Root => text = sweep(pattern, pattern_index, &text, &mut tokens),
                }
            }

            debug!(
                "pattern {} (/{}/) produced {} token(s)",
                pattern_index,
                pattern.pattern().as_str(),
                tokens.len() - before
            );
        }

        ParseResult { text, tokens }
    }
}

/// Tokenize `text` with `patterns`.
///
/// # Example
///
/// ```
/// use parsedtext_parser::{parse, PatternDescriptor};
///
/// let result = parse("abcdef", &[PatternDescriptor::from_source("abcdef").unwrap()]);
/// assert_eq!(result.text, "{{TOKEN-0-0}}");
/// assert_eq!(result.tokens["TOKEN-0-0"].text, "abcdef");
/// ```
pub fn parse(text: &str, patterns: &[PatternDescriptor]) -> ParseResult {
    TextExtraction::new(text, patterns).parse()
}

/// Replace every match of `pattern` in `haystack` with a new token's marker.
///
/// Matches are found left to right on the unmodified `haystack`.
fn sweep(
    pattern: &PatternDescriptor,
    pattern_index: usize,
    haystack: &str,
    tokens: &mut TokenMap,
) -> String {
    pattern
        .pattern()
        .replace_all(haystack, |caps: &Captures<'_>| {
            let name = tokens.next_name(pattern_index);
            let text = pattern.token_text(caps);
            let props = pattern.bind_props(&text, pattern_index);
            trace!("{} <- {:?}", name, text);
            tokens.push(Token { name, text, props });
            name.marker()
        })
        .into_owned()
}
