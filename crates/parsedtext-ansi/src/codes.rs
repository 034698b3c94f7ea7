//! ANSI escape code constants.

/// Control sequence introducer.
pub const CSI: &str = "\x1b[";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Build a Select Graphic Rendition sequence from `;`-joined parameters.
///
/// # Example
///
/// ```
/// use parsedtext_ansi::codes::sgr;
/// assert_eq!(sgr("1;91"), "\x1b[1;91m");
/// ```
pub fn sgr(params: &str) -> String {
    format!("{}{}m", CSI, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_is_sgr_zero() {
        assert_eq!(sgr("0"), RESET);
    }
}
