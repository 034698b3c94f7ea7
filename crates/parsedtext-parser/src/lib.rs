//! Parsedtext Parser
//!
//! This crate implements the recursive, multi-pattern tokenizer.
//!
//! Given a source string and an ordered list of [`PatternDescriptor`]s, the
//! tokenizer replaces every match with a `{{TOKEN-i-n}}` marker and records
//! the matched text plus the pattern's props in a flat token map. Patterns
//! run in priority order, and every pattern also runs over the text of
//! tokens created by earlier patterns, so tokens can nest.
//!
//! # Example
//!
//! ```
//! use parsedtext_parser::{parse, PatternDescriptor};
//!
//! let patterns = vec![PatternDescriptor::from_source("bar").unwrap()];
//! let result = parse("foo.bar, bar", &patterns);
//!
//! assert_eq!(result.text, "foo.{{TOKEN-0-0}}, {{TOKEN-0-1}}");
//! assert_eq!(result.tokens["TOKEN-0-1"].text, "bar");
//! ```
//!
//! # Modules
//!
//! - [`pattern`] - Pattern descriptors and text renderers
//! - [`extraction`] - The tokenizer itself
//! - [`marker`] - Marker grammar and reconstruction
//! - [`tree`] - Nested display tree built from a parse result

pub mod extraction;
pub mod marker;
pub mod pattern;
pub mod tree;

pub use extraction::{active_spans, parse, Span, TextExtraction};
pub use marker::{find_markers, reconstruct, segments, Segment};
pub use pattern::{compile, PatternDescriptor, RenderFn, RenderText};
pub use tree::{build_tree, Node};

pub use parsedtext_core::{
    BoundCallback, ParseResult, ParsedTextError, Prop, Props, Result, Token, TokenMap, TokenName,
    TokenProp, Value,
};
