//! Tokens and the parse result.

use std::ops::Index;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::name::TokenName;
use crate::prop::{TokenProp, TokenProps};

/// One matched span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Unique name of this token
    pub name: TokenName,
    /// Rendered text; may contain markers of tokens created later
    pub text: String,
    /// Metadata copied and bound from the owning pattern
    pub props: TokenProps,
}

impl Token {
    /// Look up a prop by key.
    pub fn prop(&self, key: &str) -> Option<&TokenProp> {
        self.props.get(key)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Token", 2)?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("props", &self.props)?;
        s.end()
    }
}

/// Flat, creation-ordered collection of tokens.
///
/// Exactly one token is created per sequence number, so the position of a
/// token in the map equals its sequence number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenMap {
    tokens: Vec<Token>,
}

impl TokenMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token was created.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Name the next token for the given pattern would receive.
    pub fn next_name(&self, pattern_index: usize) -> TokenName {
        TokenName::new(pattern_index, self.tokens.len())
    }

    /// Append a token created with [`next_name`](Self::next_name).
    pub fn push(&mut self, token: Token) {
        debug_assert_eq!(token.name.sequence, self.tokens.len());
        self.tokens.push(token);
    }

    /// Get a token by name.
    pub fn get(&self, name: &TokenName) -> Option<&Token> {
        self.tokens
            .get(name.sequence)
            .filter(|t| t.name.pattern_index == name.pattern_index)
    }

    /// Get a token by its string name (`TOKEN-i-n`).
    pub fn get_str(&self, name: &str) -> Option<&Token> {
        name.parse::<TokenName>().ok().and_then(|n| self.get(&n))
    }

    /// Whether a token with this name exists.
    pub fn contains(&self, name: &TokenName) -> bool {
        self.get(name).is_some()
    }

    /// Iterate tokens in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterate token names in creation order.
    pub fn names(&self) -> impl Iterator<Item = TokenName> + '_ {
        self.tokens.iter().map(|t| t.name)
    }

    /// Rewrite the text of the token at `position`.
    ///
    /// The closure receives the current text and the map itself, so it can
    /// create new tokens while the old text is being replaced.
    pub fn rewrite_text<F>(&mut self, position: usize, f: F)
    where
        F: FnOnce(&str, &mut TokenMap) -> String,
    {
        let old = std::mem::take(&mut self.tokens[position].text);
        let new = f(&old, self);
        self.tokens[position].text = new;
    }
}

impl Index<&str> for TokenMap {
    type Output = Token;

    fn index(&self, name: &str) -> &Token {
        self.get_str(name)
            .unwrap_or_else(|| panic!("no token named {}", name))
    }
}

impl Index<&TokenName> for TokenMap {
    type Output = Token;

    fn index(&self, name: &TokenName) -> &Token {
        self.get(name)
            .unwrap_or_else(|| panic!("no token named {}", name))
    }
}

impl<'a> IntoIterator for &'a TokenMap {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for TokenMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for token in &self.tokens {
            map.serialize_entry(&token.name, token)?;
        }
        map.end()
    }
}

/// Output of one tokenizer call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    /// Source text with every matched span replaced by its marker
    pub text: String,
    /// Every token created during the call
    pub tokens: TokenMap,
}

impl ParseResult {
    /// A result with no tokens.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens: TokenMap::new(),
        }
    }
}
