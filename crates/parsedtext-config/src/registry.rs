//! Named pattern registry.
//!
//! Callers can refer to common patterns by name (`url`, `phone`, `email`)
//! instead of writing a regex. Asking for a name the registry does not know
//! is a configuration error.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use parsedtext_core::{ParsedTextError, Result};
use parsedtext_parser::compile;
use regex::Regex;

/// Regex source for URLs (`http://`, `https://`, `www.`), case-insensitive.
pub const URL_PATTERN: &str =
    r"(https?://|www\.)[-a-zA-Z0-9@:%._\+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_\+.~#?&/=]*)";

/// Regex source for phone numbers.
pub const PHONE_PATTERN: &str = r"[\+]?[(]?[0-9]{3}[)]?[-\s\.]?[0-9]{3}[-\s\.]?[0-9]{4,7}";

/// Regex source for email addresses.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

/// The patterns shipped with parsedtext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinPattern {
    /// Web addresses
    Url,
    /// Phone numbers
    Phone,
    /// Email addresses
    Email,
}

impl BuiltinPattern {
    /// Every built-in pattern.
    pub const ALL: [BuiltinPattern; 3] = [Self::Url, Self::Phone, Self::Email];

    /// Registry name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Regex source.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Url => URL_PATTERN,
            Self::Phone => PHONE_PATTERN,
            Self::Email => EMAIL_PATTERN,
        }
    }

    /// Whether the pattern matches case-insensitively.
    pub fn case_insensitive(&self) -> bool {
        matches!(self, Self::Url)
    }
}

impl fmt::Display for BuiltinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinPattern {
    type Err = ParsedTextError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| unsupported(s))
    }
}

fn unsupported(name: &str) -> ParsedTextError {
    ParsedTextError::config(format!("{} is not a supported type", name))
}

/// A named pattern held by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    source: String,
    case_insensitive: bool,
}

/// Maps pattern names to regex sources.
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    entries: BTreeMap<String, Entry>,
}

impl PatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every [`BuiltinPattern`].
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_config::PatternRegistry;
    ///
    /// let registry = PatternRegistry::with_builtins();
    /// assert!(registry.resolve("url").is_ok());
    /// assert!(registry.resolve("fax").is_err());
    /// ```
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinPattern::ALL {
            registry.entries.insert(
                builtin.name().to_string(),
                Entry {
                    source: builtin.source().to_string(),
                    case_insensitive: builtin.case_insensitive(),
                },
            );
        }
        registry
    }

    /// Register (or replace) a named pattern.
    ///
    /// Fails with [`ParsedTextError::MalformedPattern`] if the source does
    /// not compile.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        case_insensitive: bool,
    ) -> Result<()> {
        let source = source.into();
        compile(&source, case_insensitive)?;
        self.entries.insert(
            name.into(),
            Entry {
                source,
                case_insensitive,
            },
        );
        Ok(())
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Compile the pattern registered under `name`.
    ///
    /// # Errors
    ///
    /// [`ParsedTextError::Configuration`] if the name is unknown.
    pub fn resolve(&self, name: &str) -> Result<Regex> {
        let entry = self.entries.get(name).ok_or_else(|| unsupported(name))?;
        compile(&entry.source, entry.case_insensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = PatternRegistry::with_builtins();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["email", "phone", "url"]);
    }

    #[test]
    fn test_builtin_from_str() {
        assert_eq!("phone".parse::<BuiltinPattern>().unwrap(), BuiltinPattern::Phone);
        let err = "fax".parse::<BuiltinPattern>().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: fax is not a supported type");
    }

    #[test]
    fn test_unknown_name_is_configuration_error() {
        let err = PatternRegistry::with_builtins().resolve("hashtag").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("hashtag is not a supported type"));
    }

    #[test]
    fn test_register_custom() {
        let mut registry = PatternRegistry::with_builtins();
        registry.register("hashtag", r"#\w+", false).unwrap();
        assert!(registry.contains("hashtag"));
        assert!(registry.resolve("hashtag").unwrap().is_match("#rust"));
    }

    #[test]
    fn test_register_malformed() {
        let mut registry = PatternRegistry::new();
        let err = registry.register("bad", "(", false).unwrap_err();
        assert!(matches!(err, ParsedTextError::MalformedPattern { .. }));
        assert!(!registry.contains("bad"));
    }

    #[test]
    fn test_url_matches() {
        let re = PatternRegistry::with_builtins().resolve("url").unwrap();
        let found: Vec<&str> = re
            .find_iter("see https://website.bz and WWW.Example.COM/path?q=1")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, ["https://website.bz", "WWW.Example.COM/path?q=1"]);
    }

    #[test]
    fn test_phone_matches() {
        let re = PatternRegistry::with_builtins().resolve("phone").unwrap();
        assert!(re.is_match("call (555) 123-4567"));
        assert!(re.is_match("+555.123.4567"));
        assert!(!re.is_match("call 12-34"));
    }

    #[test]
    fn test_email_matches() {
        let re = PatternRegistry::with_builtins().resolve("email").unwrap();
        let m = re.find("write to ada@example.org today").unwrap();
        assert_eq!(m.as_str(), "ada@example.org");
    }
}
