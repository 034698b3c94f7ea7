//! Style configuration.
//!
//! Controls how the terminal renderer highlights tokens: a base style for
//! plain text and a palette cycled by pattern index for tokens that carry
//! no color of their own.

use serde::{Deserialize, Serialize};

/// A text style as written in the config file.
///
/// Every field is optional so partial overrides merge cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextStyle {
    /// Foreground color name or `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color name or `#rrggbb`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Bold text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Italic text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Underlined text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    /// Dim text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<bool>,
}

impl TextStyle {
    /// Merge another style into this one; fields set in `other` win.
    pub fn merge(&mut self, other: &TextStyle) {
        if other.color.is_some() {
            self.color.clone_from(&other.color);
        }
        if other.background.is_some() {
            self.background.clone_from(&other.background);
        }
        self.bold = other.bold.or(self.bold);
        self.italic = other.italic.or(self.italic);
        self.underline = other.underline.or(self.underline);
        self.dim = other.dim.or(self.dim);
    }
}

/// Token colors used when the config does not set a palette.
pub const DEFAULT_PALETTE: [&str; 5] = ["cyan", "green", "magenta", "yellow", "blue"];

/// Style configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StyleConfig {
    /// Style of text outside and inside tokens.
    #[serde(default)]
    pub children: TextStyle,

    /// Token colors, indexed by pattern index modulo the palette length.
    /// Default: [`DEFAULT_PALETTE`]; an empty list disables palette colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

impl StyleConfig {
    /// Merge another StyleConfig into this one.
    ///
    /// A palette set in `other` replaces this one; the children style
    /// merges field by field.
    pub fn merge(&mut self, other: &StyleConfig) {
        self.children.merge(&other.children);
        if other.palette.is_some() {
            self.palette.clone_from(&other.palette);
        }
    }

    /// Palette color for a pattern index.
    pub fn palette_color(&self, pattern_index: usize) -> Option<&str> {
        match &self.palette {
            None => Some(DEFAULT_PALETTE[pattern_index % DEFAULT_PALETTE.len()]),
            Some(palette) if palette.is_empty() => None,
            Some(palette) => Some(palette[pattern_index % palette.len()].as_str()),
        }
    }
}
