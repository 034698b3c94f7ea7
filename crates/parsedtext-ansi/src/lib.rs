//! Parsedtext ANSI
//!
//! This crate provides ANSI escape code utilities used to highlight
//! tokens in terminal output.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants
//! - [`color`] - Color name and hex parsing
//! - [`style`] - Composable text styles
//! - [`utils`] - Text utilities (ANSI stripping)
//!
//! # Example
//!
//! ```
//! use parsedtext_ansi::{Style, utils};
//!
//! let style = Style::new().bold();
//! let text = format!("{}bold text{}", style.to_ansi(), parsedtext_ansi::codes::RESET);
//!
//! assert_eq!(utils::visible(&text), "bold text");
//! ```

pub mod codes;
pub mod color;
pub mod style;
pub mod utils;

pub use color::parse_color;
pub use style::Style;
