//! Pattern descriptors.
//!
//! A [`PatternDescriptor`] is one matching rule: a compiled regex, an
//! optional [`RenderText`] that rewrites the matched text before it is
//! stored, and a map of typed props attached to every token it produces.

use std::fmt;
use std::sync::Arc;

use parsedtext_core::{ParsedTextError, Prop, Props, Result, TokenProps};
use regex::{Captures, Regex, RegexBuilder};

/// Renderer invoked as `render(matched_text, groups)`.
///
/// `groups[0]` is the whole match, `groups[n]` the n-th capture group
/// (`None` when the group did not participate).
pub type RenderFn = Arc<dyn Fn(&str, &[Option<&str>]) -> String + Send + Sync>;

/// How a match is turned into token text.
#[derive(Clone)]
pub enum RenderText {
    /// Arbitrary function of the match and its capture groups
    Function(RenderFn),
    /// Replacement template using `$1` / `${name}` group references
    Template(String),
}

impl RenderText {
    /// Render the text for one match.
    pub fn render(&self, caps: &Captures<'_>) -> String {
        match self {
            RenderText::Function(f) => {
                let groups: Vec<Option<&str>> =
                    caps.iter().map(|m| m.map(|m| m.as_str())).collect();
                f(&caps[0], &groups)
            }
            RenderText::Template(template) => {
                let mut dst = String::new();
                caps.expand(template, &mut dst);
                dst
            }
        }
    }
}

impl fmt::Debug for RenderText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderText::Function(_) => f.write_str("Function(..)"),
            RenderText::Template(t) => f.debug_tuple("Template").field(t).finish(),
        }
    }
}

/// Compile a pattern source the way the tokenizer expects it.
///
/// Patterns are compiled in multi-line mode, so `^` and `$` match at line
/// boundaries. Compile failures surface as
/// [`ParsedTextError::MalformedPattern`].
pub fn compile(source: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(source)
        .multi_line(true)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source_err| ParsedTextError::MalformedPattern {
            pattern: source.to_string(),
            source: source_err,
        })
}

/// One matching rule.
#[derive(Debug, Clone)]
pub struct PatternDescriptor {
    pattern: Regex,
    render_text: Option<RenderText>,
    props: Props,
}

impl PatternDescriptor {
    /// Create a descriptor from an already compiled regex.
    pub fn new(pattern: Regex) -> Self {
        Self {
            pattern,
            render_text: None,
            props: Props::new(),
        }
    }

    /// Compile `source` (multi-line mode) into a descriptor.
    ///
    /// # Example
    ///
    /// ```
    /// use parsedtext_parser::PatternDescriptor;
    /// assert!(PatternDescriptor::from_source(r"\d+").is_ok());
    /// assert!(PatternDescriptor::from_source(r"(").is_err());
    /// ```
    pub fn from_source(source: &str) -> Result<Self> {
        compile(source, false).map(Self::new)
    }

    /// Set a function renderer.
    pub fn with_render_text<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &[Option<&str>]) -> String + Send + Sync + 'static,
    {
        self.render_text = Some(RenderText::Function(Arc::new(f)));
        self
    }

    /// Set a template renderer (`"$1"`, `"${name}"`).
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.render_text = Some(RenderText::Template(template.into()));
        self
    }

    /// Set or clear the renderer.
    pub fn set_render_text(&mut self, render_text: Option<RenderText>) {
        self.render_text = render_text;
    }

    /// Attach a prop.
    pub fn with_prop(mut self, key: impl Into<String>, prop: impl Into<Prop>) -> Self {
        self.props.insert(key.into(), prop.into());
        self
    }

    /// Attach a callback prop, invoked later as `f(token_text, pattern_index)`.
    pub fn with_callback<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, usize) + Send + Sync + 'static,
    {
        self.with_prop(key, Prop::callback(f))
    }

    /// The compiled regex.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The renderer, if any.
    pub fn render_text(&self) -> Option<&RenderText> {
        self.render_text.as_ref()
    }

    /// The configured props.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Mutable access to the configured props.
    pub fn props_mut(&mut self) -> &mut Props {
        &mut self.props
    }

    /// Token text for one match: rendered if a renderer is set, raw otherwise.
    pub(crate) fn token_text(&self, caps: &Captures<'_>) -> String {
        match &self.render_text {
            Some(render) => render.render(caps),
            None => caps[0].to_string(),
        }
    }

    /// Props for a token with the given final text.
    pub(crate) fn bind_props(&self, text: &str, pattern_index: usize) -> TokenProps {
        self.props
            .iter()
            .map(|(key, prop)| (key.clone(), prop.bind(text, pattern_index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parsedtext_core::{TokenProp, Value};

    const MENTION: &str = r"\[(@[^:]+):([^\]]+)\]";

    #[test]
    fn test_multi_line_anchors() {
        let re = compile(r"^b$", false).unwrap();
        assert_eq!(re.find_iter("a\nb\nc").count(), 1);
    }

    #[test]
    fn test_case_insensitive() {
        let re = compile("abc", true).unwrap();
        assert!(re.is_match("ABC"));
        assert!(!compile("abc", false).unwrap().is_match("ABC"));
    }

    #[test]
    fn test_malformed_pattern() {
        let err = PatternDescriptor::from_source("[unclosed").unwrap_err();
        match err {
            ParsedTextError::MalformedPattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_function_render_receives_groups() {
        let p = PatternDescriptor::from_source(MENTION)
            .unwrap()
            .with_render_text(|matched, groups| {
                assert_eq!(matched, "[@michel:561316513]");
                assert_eq!(groups[0], Some("[@michel:561316513]"));
                assert_eq!(groups[2], Some("561316513"));
                format!("^^{}^^", groups[1].unwrap_or_default())
            });
        let caps = p.pattern().captures("Mention [@michel:561316513]").unwrap();
        assert_eq!(p.token_text(&caps), "^^@michel^^");
    }

    #[test]
    fn test_template_render() {
        let p = PatternDescriptor::from_source(MENTION)
            .unwrap()
            .with_template("<$1>");
        let caps = p.pattern().captures("[@ada:1]").unwrap();
        assert_eq!(p.token_text(&caps), "<@ada>");
    }

    #[test]
    fn test_raw_text_without_renderer() {
        let p = PatternDescriptor::from_source(MENTION).unwrap();
        let caps = p.pattern().captures("x [@ada:1] y").unwrap();
        assert_eq!(p.token_text(&caps), "[@ada:1]");
    }

    #[test]
    fn test_bind_props() {
        let p = PatternDescriptor::from_source("x")
            .unwrap()
            .with_prop("color", "red")
            .with_callback("on_press", |_, _| {});
        let props = p.bind_props("x", 4);

        assert_eq!(props["color"], TokenProp::Value(Value::from("red")));
        let cb = props["on_press"].as_callback().unwrap();
        assert_eq!(cb.text(), "x");
        assert_eq!(cb.pattern_index(), 4);
    }
}
