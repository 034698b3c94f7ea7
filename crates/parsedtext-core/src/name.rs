//! Token names.
//!
//! Every token produced by a parse is addressed by a [`TokenName`] of the
//! form `TOKEN-<patternIndex>-<sequenceNumber>`. The pattern index is the
//! 0-based position of the owning pattern; the sequence number comes from a
//! counter shared by all patterns of one parse call.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParsedTextError;

/// Prefix shared by every token name.
pub const TOKEN_PREFIX: &str = "TOKEN";

/// Opening delimiter of an embedded marker.
pub const MARKER_OPEN: &str = "{{";

/// Closing delimiter of an embedded marker.
pub const MARKER_CLOSE: &str = "}}";

/// Unique identifier of a token inside one [`ParseResult`](crate::ParseResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenName {
    /// Index of the pattern that produced the token
    pub pattern_index: usize,
    /// Position in the parse-wide creation sequence
    pub sequence: usize,
}

impl TokenName {
    /// Create a token name.
    pub fn new(pattern_index: usize, sequence: usize) -> Self {
        Self {
            pattern_index,
            sequence,
        }
    }

    /// The marker embedded in text in place of this token: `{{TOKEN-i-n}}`.
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_core::TokenName;
    /// assert_eq!(TokenName::new(0, 3).marker(), "{{TOKEN-0-3}}");
    /// ```
    pub fn marker(&self) -> String {
        format!("{}{}{}", MARKER_OPEN, self, MARKER_CLOSE)
    }
}

impl fmt::Display for TokenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", TOKEN_PREFIX, self.pattern_index, self.sequence)
    }
}

impl FromStr for TokenName {
    type Err = ParsedTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsedTextError::config(format!("invalid token name `{}`", s));

        let rest = s
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(invalid)?;
        let (index, sequence) = rest.split_once('-').ok_or_else(invalid)?;

        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(index) || !all_digits(sequence) {
            return Err(invalid());
        }

        Ok(Self {
            pattern_index: index.parse().map_err(|_| invalid())?,
            sequence: sequence.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for TokenName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TokenName::new(2, 17).to_string(), "TOKEN-2-17");
    }

    #[test]
    fn test_marker() {
        assert_eq!(TokenName::new(1, 0).marker(), "{{TOKEN-1-0}}");
    }

    #[test]
    fn test_parse() {
        let name: TokenName = "TOKEN-3-42".parse().unwrap();
        assert_eq!(name, TokenName::new(3, 42));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "TOKEN", "TOKEN-1", "TOKEN-a-1", "TOKEN-1-", "TOKEN-+1-2", "token-1-2", "TOKEN-1-2-3"] {
            assert!(bad.parse::<TokenName>().is_err(), "accepted {:?}", bad);
        }
    }
}
