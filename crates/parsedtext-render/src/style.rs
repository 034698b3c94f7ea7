//! Token styles.
//!
//! A token's style is its pattern's palette color overlaid with whatever
//! its props ask for. Recognized prop keys: `color`, `background`, `bold`,
//! `italic`, `underline`, `dim`, `strikethrough`. Other props are ignored.

use crossterm::style::Color;
use log::warn;
use parsedtext_ansi::{parse_color, Style};
use parsedtext_config::{StyleConfig, TextStyle};
use parsedtext_core::{Token, TokenProps};

/// Render style configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStyle {
    /// Style of all text, inside and outside tokens
    pub children: Style,
    /// Token colors, indexed by pattern index
    pub palette: Vec<Color>,
}

impl RenderStyle {
    /// Create from the style section of a config.
    pub fn from_config(config: &StyleConfig) -> Self {
        let palette = match &config.palette {
            Some(names) => names.iter().filter_map(|n| color_or_warn(n)).collect(),
            None => parsedtext_config::DEFAULT_PALETTE
                .iter()
                .filter_map(|n| parse_color(n))
                .collect(),
        };

        Self {
            children: text_style(&config.children),
            palette,
        }
    }

    /// Style of one token, not including inherited styles.
    pub fn token_style(&self, token: &Token) -> Style {
        let mut style = Style::new();
        if !self.palette.is_empty() {
            style = style.fg(self.palette[token.name.pattern_index % self.palette.len()]);
        }
        style.overlay(&props_style(&token.props))
    }
}

/// Style requested by a token's props.
pub fn props_style(props: &TokenProps) -> Style {
    let mut style = Style::new();
    let value = |key: &str| props.get(key).and_then(|p| p.as_value());
    let flag = |key: &str| value(key).and_then(|v| v.as_bool()).unwrap_or(false);

    if let Some(color) = value("color").and_then(|v| v.as_str()).and_then(color_or_warn) {
        style = style.fg(color);
    }
    if let Some(color) = value("background").and_then(|v| v.as_str()).and_then(color_or_warn) {
        style = style.bg(color);
    }
    if flag("bold") {
        style = style.bold();
    }
    if flag("italic") {
        style = style.italic();
    }
    if flag("underline") {
        style = style.underline();
    }
    if flag("dim") {
        style = style.dim();
    }
    if flag("strikethrough") {
        style = style.strikethrough();
    }
    style
}

/// Convert a configured text style.
pub fn text_style(config: &TextStyle) -> Style {
    let mut style = Style::new();
    if let Some(color) = config.color.as_deref().and_then(color_or_warn) {
        style = style.fg(color);
    }
    if let Some(color) = config.background.as_deref().and_then(color_or_warn) {
        style = style.bg(color);
    }
    if config.bold == Some(true) {
        style = style.bold();
    }
    if config.italic == Some(true) {
        style = style.italic();
    }
    if config.underline == Some(true) {
        style = style.underline();
    }
    if config.dim == Some(true) {
        style = style.dim();
    }
    style
}

fn color_or_warn(name: &str) -> Option<Color> {
    let color = parse_color(name);
    if color.is_none() {
        warn!("ignoring unknown color {:?}", name);
    }
    color
}
