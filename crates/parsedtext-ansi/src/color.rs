//! Color parsing.
//!
//! Token props name colors either by crossterm color name (`"red"`,
//! `"dark_blue"`, `"grey"`) or by hex (`"#ff8000"`).

use crossterm::style::Color;

/// Split `#rrggbb` (or `rrggbb`) into RGB components.
fn hex2rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Parse a color name or hex string.
///
/// # Example
///
/// ```
/// use crossterm::style::Color;
/// use parsedtext_ansi::parse_color;
///
/// assert_eq!(parse_color("blue"), Some(Color::Blue));
/// assert_eq!(parse_color("#000080"), Some(Color::Rgb { r: 0, g: 0, b: 128 }));
/// assert_eq!(parse_color("not-a-color"), None);
/// ```
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.starts_with('#') {
        return hex2rgb(spec).map(|(r, g, b)| Color::Rgb { r, g, b });
    }
    Color::try_from(spec).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("dark_green"), Some(Color::DarkGreen));
        assert_eq!(parse_color(" grey "), Some(Color::Grey));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            parse_color("#87ceeb"),
            Some(Color::Rgb {
                r: 0x87,
                g: 0xce,
                b: 0xeb
            })
        );
        assert_eq!(parse_color("#zzzzzz"), None);
    }

    #[test]
    fn test_hex2rgb() {
        assert_eq!(hex2rgb("#ff8000"), Some((255, 128, 0)));
        assert_eq!(hex2rgb("ff8000"), Some((255, 128, 0)));
        assert_eq!(hex2rgb("#fff"), None);
        assert_eq!(hex2rgb("#ffé00"), None);
    }
}
