//! Parse rules.
//!
//! A [`RuleConfig`] is the serializable form of a pattern descriptor: it
//! names either a registry type or a raw regex, plus an optional render
//! template and plain-value props.

use std::collections::BTreeMap;

use log::debug;
use parsedtext_core::{ParsedTextError, Result, Value};
use parsedtext_parser::{compile, PatternDescriptor};
use serde::{Deserialize, Serialize};

use crate::registry::PatternRegistry;

/// One configured parse rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleConfig {
    /// Name of a registry pattern; takes precedence over `pattern`
    #[serde(default, rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Raw regex source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Match `pattern` case-insensitively (ignored for registry types)
    #[serde(default)]
    pub case_insensitive: bool,

    /// Render template, e.g. `"$1"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,

    /// Props attached to every token of this rule
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Value>,
}

impl RuleConfig {
    /// A rule referring to a registry pattern.
    pub fn of_type(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// A rule with a raw regex.
    pub fn of_pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Attach a prop.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Build the descriptor for this rule.
    ///
    /// # Errors
    ///
    /// - [`ParsedTextError::Configuration`] if the type is unknown or the
    ///   rule has neither a type nor a pattern
    /// - [`ParsedTextError::MalformedPattern`] if the regex does not compile
    pub fn to_descriptor(&self, registry: &PatternRegistry) -> Result<PatternDescriptor> {
        let regex = match (&self.kind, &self.pattern) {
            (Some(kind), _) => registry.resolve(kind)?,
            (None, Some(pattern)) => compile(pattern, self.case_insensitive)?,
            (None, None) => {
                return Err(ParsedTextError::config(
                    "parse rule needs either a type or a pattern",
                ))
            }
        };

        let mut descriptor = PatternDescriptor::new(regex);
        if let Some(template) = &self.render {
            descriptor = descriptor.with_template(template.clone());
        }
        for (key, value) in &self.props {
            descriptor = descriptor.with_prop(key.clone(), value.clone());
        }
        Ok(descriptor)
    }
}

/// Build descriptors for every rule, in order.
///
/// Fails on the first rule that cannot be resolved.
pub fn resolve_rules(
    rules: &[RuleConfig],
    registry: &PatternRegistry,
) -> Result<Vec<PatternDescriptor>> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| -> Result<PatternDescriptor> {
            let descriptor = rule.to_descriptor(registry)?;
            debug!("rule {} -> /{}/", index, descriptor.pattern().as_str());
            Ok(descriptor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsedtext_core::Prop;

    #[test]
    fn test_type_rule() {
        let registry = PatternRegistry::with_builtins();
        let d = RuleConfig::of_type("email").to_descriptor(&registry).unwrap();
        assert!(d.pattern().is_match("a@b.cd"));
    }

    #[test]
    fn test_type_overrides_pattern() {
        let registry = PatternRegistry::with_builtins();
        let rule = RuleConfig {
            kind: Some("phone".to_string()),
            pattern: Some("never".to_string()),
            ..RuleConfig::default()
        };
        let d = rule.to_descriptor(&registry).unwrap();
        assert!(d.pattern().is_match("555-123-4567"));
        assert!(!d.pattern().is_match("never"));
    }

    #[test]
    fn test_unknown_type() {
        let registry = PatternRegistry::with_builtins();
        let err = RuleConfig::of_type("fax").to_descriptor(&registry).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_pattern() {
        let registry = PatternRegistry::with_builtins();
        let err = RuleConfig::default().to_descriptor(&registry).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_malformed_pattern() {
        let registry = PatternRegistry::with_builtins();
        let err = RuleConfig::of_pattern("a(").to_descriptor(&registry).unwrap_err();
        assert!(matches!(err, ParsedTextError::MalformedPattern { .. }));
    }

    #[test]
    fn test_props_and_render() {
        let registry = PatternRegistry::new();
        let mut rule = RuleConfig::of_pattern(r"#(\w+)").with_prop("color", "cyan");
        rule.render = Some("$1".to_string());
        let d = rule.to_descriptor(&registry).unwrap();

        assert!(matches!(d.props().get("color"), Some(Prop::Value(Value::String(c))) if c == "cyan"));
        assert!(d.render_text().is_some());
    }

    #[test]
    fn test_case_insensitive_pattern() {
        let registry = PatternRegistry::new();
        let mut rule = RuleConfig::of_pattern("todo");
        rule.case_insensitive = true;
        assert!(rule.to_descriptor(&registry).unwrap().pattern().is_match("TODO"));
    }

    #[test]
    fn test_resolve_rules_stops_at_first_error() {
        let registry = PatternRegistry::with_builtins();
        let rules = [RuleConfig::of_type("url"), RuleConfig::of_type("nope")];
        assert!(resolve_rules(&rules, &registry).is_err());
        assert_eq!(resolve_rules(&rules[..1], &registry).unwrap().len(), 1);
    }

    #[test]
    fn test_toml_shape() {
        let rule: RuleConfig = toml::from_str(
            r#"
            Pattern = "\\[(@[^:]+):([^\\]]+)\\]"
            Render = "$1"
            Props = { color = "blue", bold = true }
            "#,
        )
        .unwrap();
        assert_eq!(rule.pattern.as_deref(), Some(r"\[(@[^:]+):([^\]]+)\]"));
        assert_eq!(rule.props["bold"], Value::Bool(true));
    }
}
