//! ANSI text utilities.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for all ANSI escape sequences including OSC.
pub const ANSIESCAPE: &str = r"\x1b(?:\[[0-9;?]*[a-zA-Z]|\][0-9]*;;.*?\\|\))";

/// Compiled regex for ANSIESCAPE pattern.
static ANSIESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ANSIESCAPE).unwrap());

/// Remove all ANSI escape sequences from text.
///
/// # Example
///
/// ```
/// use parsedtext_ansi::utils::visible;
/// let text = "\x1b[1mBold\x1b[0m text";
/// assert_eq!(visible(text), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANSIESCAPE_RE.replace_all(text, "").to_string()
}
