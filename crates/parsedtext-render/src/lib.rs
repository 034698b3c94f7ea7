//! Parsedtext Render
//!
//! This crate renders a parse result to a terminal. It walks the display
//! tree built from the result's markers and highlights every token with
//! ANSI styles taken from the token's props and the configured palette.
//!
//! # Example
//!
//! ```
//! use parsedtext_parser::{parse, PatternDescriptor};
//! use parsedtext_render::Renderer;
//!
//! let result = parse("see @ann", &[PatternDescriptor::from_source(r"@\w+").unwrap()]);
//!
//! let mut output = Vec::new();
//! Renderer::plain(&mut output).render(&result).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "see @ann");
//! ```

pub mod outline;
pub mod style;

pub use outline::outline;
pub use style::{props_style, text_style, RenderStyle};

use std::io::{self, Write};

use log::trace;
use parsedtext_ansi::codes::RESET;
use parsedtext_ansi::Style;
use parsedtext_core::ParseResult;
use parsedtext_parser::{build_tree, Node};

/// Terminal renderer for parse results.
pub struct Renderer<W: Write> {
    /// Output writer
    writer: W,
    /// Render style
    style: RenderStyle,
    /// Write text without escape sequences
    plain: bool,
    /// Style currently in effect on the terminal
    active: Style,
}

impl<W: Write> Renderer<W> {
    /// Create a new renderer with default style.
    pub fn new(writer: W) -> Self {
        Self::with_style(writer, RenderStyle::from_config(&Default::default()))
    }

    /// Create a renderer with custom style.
    pub fn with_style(writer: W, style: RenderStyle) -> Self {
        Self {
            writer,
            style,
            plain: false,
            active: Style::new(),
        }
    }

    /// Create a renderer that writes the reconstructed text only.
    pub fn plain(writer: W) -> Self {
        let mut r = Self::with_style(writer, RenderStyle::default());
        r.plain = true;
        r
    }

    /// Set the render style.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Enable or disable plain mode.
    pub fn set_plain(&mut self, plain: bool) {
        self.plain = plain;
    }

    /// Render one parse result.
    ///
    /// The terminal style is always reset at the end.
    pub fn render(&mut self, result: &ParseResult) -> io::Result<()> {
        let tree = build_tree(result);
        let base = self.style.children.clone();
        self.render_nodes(&tree, &base)?;
        self.finish()
    }

    /// Flush the output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the renderer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render_nodes(&mut self, nodes: &[Node<'_>], inherited: &Style) -> io::Result<()> {
        for node in nodes {
            match node {
                Node::Text(text) => self.write_text(text, inherited)?,
                Node::Token { token, children } => {
                    let style = inherited.overlay(&self.style.token_style(token));
                    trace!("render {} with {:?}", token.name, style);
                    self.render_nodes(children, &style)?;
                }
            }
        }
        Ok(())
    }

    /// Write text in `style`, switching the terminal style only when it
    /// differs from the active one.
    fn write_text(&mut self, text: &str, style: &Style) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if !self.plain && *style != self.active {
            if !self.active.is_empty() {
                write!(self.writer, "{}", RESET)?;
            }
            write!(self.writer, "{}", style.to_ansi())?;
            self.active = style.clone();
        }
        write!(self.writer, "{}", text)
    }

    fn finish(&mut self) -> io::Result<()> {
        if !self.active.is_empty() {
            write!(self.writer, "{}", RESET)?;
            self.active = Style::new();
        }
        Ok(())
    }
}

/// Render a result to a string.
pub fn render_to_string(result: &ParseResult, style: RenderStyle) -> String {
    let mut renderer = Renderer::with_style(Vec::new(), style);
    renderer
        .render(result)
        .expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&renderer.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;
    use parsedtext_ansi::utils::visible;
    use parsedtext_parser::{parse, reconstruct, PatternDescriptor};

    fn pat(source: &str) -> PatternDescriptor {
        PatternDescriptor::from_source(source).unwrap()
    }

    fn red_only() -> RenderStyle {
        RenderStyle {
            children: Style::new(),
            palette: vec![Color::Red],
        }
    }

    #[test]
    fn test_plain_matches_reconstruct() {
        let result = parse("hi [@bob and @willy] @ann", &[pat(r"\[[^\]]*\]"), pat(r"@\w+")]);
        let mut out = Vec::new();
        Renderer::plain(&mut out).render(&result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), reconstruct(&result));
    }

    #[test]
    fn test_later_token_wrapping_earlier_marker() {
        let style = RenderStyle {
            children: Style::new(),
            palette: vec![Color::Red, Color::Blue],
        };
        let result = parse("http://foo.bar", &[pat("bar"), pat(r"https?://\S+")]);
        let out = render_to_string(&result, style);
        assert!(out.starts_with("\x1b[94mhttp://foo."));
        assert!(out.contains("\x1b[91mbar\x1b[0m"));
        assert_eq!(visible(&out), "http://foo.bar");

        let mut plain = Vec::new();
        Renderer::plain(&mut plain).render(&result).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "http://foo.bar");
    }

    #[test]
    fn test_token_is_colored() {
        let result = parse("a foo b", &[pat("foo")]);
        let out = render_to_string(&result, red_only());
        assert_eq!(out, "a \x1b[91mfoo\x1b[0m b");
    }

    #[test]
    fn test_enclosing_style_restored_after_nested_token() {
        let style = RenderStyle {
            children: Style::new(),
            palette: vec![Color::Red, Color::Blue],
        };
        let result = parse("[x@y]", &[pat(r"\[.*\]"), pat(r"@\w")]);
        let out = render_to_string(&result, style);
        assert_eq!(out, "\x1b[91m[x\x1b[0m\x1b[94m@y\x1b[0m\x1b[91m]\x1b[0m");
        assert_eq!(visible(&out), "[x@y]");
    }

    #[test]
    fn test_props_layer_over_parent() {
        let patterns = [
            pat(r"\[.*\]").with_prop("bold", true),
            pat(r"@\w").with_prop("color", "green"),
        ];
        let result = parse("[@y]", &patterns);
        let out = render_to_string(&result, RenderStyle::default());
        assert_eq!(out, "\x1b[1m[\x1b[0m\x1b[1;92m@y\x1b[0m\x1b[1m]\x1b[0m");
    }

    #[test]
    fn test_children_style_wraps_everything() {
        let style = RenderStyle {
            children: Style::new().dim(),
            palette: Vec::new(),
        };
        let result = parse("plain", &[]);
        assert_eq!(render_to_string(&result, style), "\x1b[2mplain\x1b[0m");
    }

    #[test]
    fn test_no_tokens_no_escapes() {
        let result = parse("nothing here", &[pat("zzz")]);
        assert_eq!(render_to_string(&result, red_only()), "nothing here");
    }
}
