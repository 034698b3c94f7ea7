//! Composable text styles.

use crossterm::style::{Attribute, Color};

use crate::codes::{sgr, RESET};

/// Represents a complete text style with colors and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground color
    pub fg: Option<Color>,
    /// Background color
    pub bg: Option<Color>,
    /// Text attributes (bold, italic, etc.)
    pub attributes: Vec<Attribute>,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, attr: Attribute) -> Self {
        if !self.attributes.contains(&attr) {
            self.attributes.push(attr);
        }
        self
    }

    /// Make the text bold.
    pub fn bold(self) -> Self {
        self.attr(Attribute::Bold)
    }

    /// Make the text italic.
    pub fn italic(self) -> Self {
        self.attr(Attribute::Italic)
    }

    /// Make the text underlined.
    pub fn underline(self) -> Self {
        self.attr(Attribute::Underlined)
    }

    /// Make the text dim.
    pub fn dim(self) -> Self {
        self.attr(Attribute::Dim)
    }

    /// Apply strikethrough.
    pub fn strikethrough(self) -> Self {
        self.attr(Attribute::CrossedOut)
    }

    /// Whether this style changes nothing.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Layer `other` on top of this style.
    ///
    /// Colors set in `other` win; attributes accumulate.
    ///
    /// # Example
    ///
    /// ```
    /// use crossterm::style::Color;
    /// use parsedtext_ansi::Style;
    ///
    /// let base = Style::new().fg(Color::Grey).bold();
    /// let merged = base.overlay(&Style::new().fg(Color::Blue).underline());
    /// assert_eq!(merged.fg, Some(Color::Blue));
    /// assert_eq!(merged.attributes.len(), 2);
    /// ```
    pub fn overlay(&self, other: &Style) -> Style {
        let mut out = self.clone();
        if other.fg.is_some() {
            out.fg = other.fg;
        }
        if other.bg.is_some() {
            out.bg = other.bg;
        }
        for attr in &other.attributes {
            out = out.attr(*attr);
        }
        out
    }

    /// Convert to ANSI escape sequence.
    pub fn to_ansi(&self) -> String {
        let mut codes = Vec::new();

        for attr in &self.attributes {
            let code = match attr {
                Attribute::Bold => "1",
                Attribute::Dim => "2",
                Attribute::Italic => "3",
                Attribute::Underlined => "4",
                Attribute::Reverse => "7",
                Attribute::CrossedOut => "9",
                _ => continue,
            };
            codes.push(code.to_string());
        }

        if let Some(fg) = self.fg.and_then(|c| color_code(c, false)) {
            codes.push(fg);
        }
        if let Some(bg) = self.bg.and_then(|c| color_code(c, true)) {
            codes.push(bg);
        }

        if codes.is_empty() {
            String::new()
        } else {
            sgr(&codes.join(";"))
        }
    }

    /// Wrap `text` in this style, resetting afterwards.
    pub fn paint(&self, text: &str) -> String {
        if self.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.to_ansi(), text, RESET)
        }
    }
}

/// SGR parameter for a color, foreground or background.
fn color_code(color: Color, background: bool) -> Option<String> {
    let offset = if background { 10 } else { 0 };
    let base = match color {
        Color::Rgb { r, g, b } => {
            let lead = if background { 48 } else { 38 };
            return Some(format!("{};2;{};{};{}", lead, r, g, b));
        }
        Color::AnsiValue(n) => {
            let lead = if background { 48 } else { 38 };
            return Some(format!("{};5;{}", lead, n));
        }
        Color::Black => 30,
        Color::DarkRed => 31,
        Color::DarkGreen => 32,
        Color::DarkYellow => 33,
        Color::DarkBlue => 34,
        Color::DarkMagenta => 35,
        Color::DarkCyan => 36,
        Color::Grey => 37,
        Color::DarkGrey => 90,
        Color::Red => 91,
        Color::Green => 92,
        Color::Yellow => 93,
        Color::Blue => 94,
        Color::Magenta => 95,
        Color::Cyan => 96,
        Color::White => 97,
        Color::Reset => return None,
    };
    Some((base + offset).to_string())
}
