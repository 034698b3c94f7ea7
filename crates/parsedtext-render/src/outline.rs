//! Indented text dump of the display tree, one node per line.

use std::fmt::Write;

use parsedtext_core::{ParseResult, TokenProp};
use parsedtext_parser::{build_tree, Node};

/// Dump the display tree of `result`.
///
/// # Example
///
/// ```
/// use parsedtext_parser::{parse, PatternDescriptor};
/// use parsedtext_render::outline;
///
/// let result = parse("hi @ann", &[PatternDescriptor::from_source(r"@\w+").unwrap()]);
/// assert_eq!(outline(&result), "\"hi \"\nTOKEN-0-0\n  \"@ann\"\n");
/// ```
pub fn outline(result: &ParseResult) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &build_tree(result), 0);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node<'_>], depth: usize) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            Node::Text(text) => {
                let _ = writeln!(out, "{}{:?}", indent, text);
            }
            Node::Token { token, children } => {
                let _ = write!(out, "{}{}", indent, token.name);
                for (key, prop) in &token.props {
                    match prop {
                        TokenProp::Value(v) => {
                            let _ = write!(out, " {}={}", key, v);
                        }
                        TokenProp::Callback(_) => {
                            let _ = write!(out, " {}=<callback>", key);
                        }
                    }
                }
                out.push('\n');
                write_nodes(out, children, depth + 1);
            }
        }
    }
}
