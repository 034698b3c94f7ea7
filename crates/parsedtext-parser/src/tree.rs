//! Nested display tree.
//!
//! The tokenizer output is flat; nesting lives in the markers embedded in
//! token text. [`build_tree`] resolves those markers recursively into a tree
//! that a renderer can walk.

use parsedtext_core::{ParseResult, Token, TokenMap};

use crate::marker::marker_positions;

/// One node of the display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// Literal text
    Text(&'a str),
    /// A token, with its own text resolved into children
    Token {
        /// The token this node stands for
        token: &'a Token,
        /// Resolved content of the token's text
        children: Vec<Node<'a>>,
    },
}

impl Node<'_> {
    /// Concatenated text of this node with every marker expanded.
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text(s) => (*s).to_string(),
            Node::Token { children, .. } => children.iter().map(Node::plain_text).collect(),
        }
    }

    /// Depth of the deepest token below this node (a text node is 0).
    pub fn depth(&self) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Token { children, .. } => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Resolve the result's top-level text into a tree.
///
/// Any marker naming an existing token is expanded, including markers of
/// tokens older than the enclosing one: a later pattern can wrap the marker
/// of an earlier token. A token is never expanded inside itself, so marker
/// text that was already in the source (and may point back at an enclosing
/// token) stays literal and the walk terminates. Markers of unknown tokens
/// stay literal too.
pub fn build_tree(result: &ParseResult) -> Vec<Node<'_>> {
    let mut expanding = vec![false; result.tokens.len()];
    resolve(&result.text, &result.tokens, &mut expanding)
}

/// `expanding[n]` is set while the token with sequence `n` is being resolved.
fn resolve<'a>(text: &'a str, tokens: &'a TokenMap, expanding: &mut [bool]) -> Vec<Node<'a>> {
    let mut nodes = Vec::new();
    let mut literal_start = 0;

    for (range, name) in marker_positions(text) {
        let Some(token) = tokens.get(&name).filter(|_| !expanding[name.sequence]) else {
            // unresolved markers stay part of the surrounding literal run
            continue;
        };

        if range.start > literal_start {
            nodes.push(Node::Text(&text[literal_start..range.start]));
        }
        expanding[name.sequence] = true;
        let children = resolve(&token.text, tokens, expanding);
        expanding[name.sequence] = false;
        nodes.push(Node::Token { token, children });
        literal_start = range.end;
    }

    if literal_start < text.len() {
        nodes.push(Node::Text(&text[literal_start..]));
    }

    nodes
}
