//! ANSI text processing utilities.
//!
//! This module provides functions for working with styled text:
//! wrapping text in descriptors, visible length calculation and escape
//! code extraction.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

use crate::codes::RESET;
use crate::color::Color;
use crate::font::Font;

/// Regex pattern for SGR escape sequences.
pub const ESCAPE: &str = r"\x1b\[[0-9;]*m";

/// Regex pattern for any CSI escape sequence.
pub const ANSIESCAPE: &str = r"\x1b\[[0-9;?]*[a-zA-Z]";

static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ESCAPE).unwrap());

static ANSIESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ANSIESCAPE).unwrap());

/// Wrap `text` in a color and a font, followed by a reset.
///
/// # Example
///
/// ```
/// use tesc_ansi::{paint, Color, Font};
/// use tesc_core::{Face, Style};
///
/// let text = paint("hi", &Color::from(Face::Red), &Font::new(Style::BOLD));
/// assert_eq!(text, "\x1b[31m\x1b[1;23;24mhi\x1b[0m");
/// ```
pub fn paint(text: &str, color: &Color, font: &Font) -> String {
    format!("{}{}{}{}", color, font, text, RESET)
}

/// Remove all ANSI escape sequences from text.
///
/// # Example
///
/// ```
/// use tesc_ansi::utils::visible;
/// let text = "\x1b[1;23;24mBold\x1b[0m text";
/// assert_eq!(visible(text), "Bold text");
/// ```
pub fn visible(text: &str) -> String {
    ANSIESCAPE_RE.replace_all(text, "").to_string()
}

/// Calculate the visible display width of text.
///
/// Escape sequences are removed and the rest is measured with Unicode
/// character widths, so CJK characters count double.
///
/// # Example
///
/// ```
/// use tesc_ansi::utils::visible_length;
/// assert_eq!(visible_length("\x1b[31mHello\x1b[0m"), 5);
/// assert_eq!(visible_length("你好"), 4);
/// ```
pub fn visible_length(text: &str) -> usize {
    visible(text).width()
}

/// Extract all SGR escape codes from text, in order.
///
/// # Example
///
/// ```
/// use tesc_ansi::utils::extract_ansi_codes;
/// let codes = extract_ansi_codes("\x1b[31;44mX\x1b[0m");
/// assert_eq!(codes, vec!["\x1b[31;44m", "\x1b[0m"]);
/// ```
pub fn extract_ansi_codes(text: &str) -> Vec<String> {
    ESCAPE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse the numeric parameters of one SGR code.
///
/// A bare `ESC[m` has no parameters.
///
/// # Example
///
/// ```
/// use tesc_ansi::utils::parse_sgr_params;
/// assert_eq!(parse_sgr_params("\x1b[1;4;23m"), vec![1, 4, 23]);
/// assert!(parse_sgr_params("\x1b[m").is_empty());
/// ```
pub fn parse_sgr_params(code: &str) -> Vec<u32> {
    let inner = code.trim_start_matches("\x1b[").trim_end_matches('m');

    inner
        .split(';')
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesc_core::{Back, Face, Style};

    #[test]
    fn test_paint() {
        let color = Color::new(Face::Green, Back::Black);
        let font = Font::default();
        assert_eq!(
            paint("ok", &color, &font),
            "\x1b[32;40m\x1b[22;23;24mok\x1b[0m"
        );
    }

    #[test]
    fn test_visible() {
        assert_eq!(visible("\x1b[1;23;24mBold\x1b[0m"), "Bold");
        assert_eq!(visible("No codes"), "No codes");
        assert_eq!(visible("\x1b[mEmpty"), "Empty");
        assert_eq!(visible("\x1b[2JCleared"), "Cleared");
    }

    #[test]
    fn test_visible_of_paint() {
        let painted = paint("styled", &Color::from(Back::Red), &Font::new(Style::all()));
        assert_eq!(visible(&painted), "styled");
        assert_eq!(visible_length(&painted), 6);
    }

    #[test]
    fn test_visible_length() {
        assert_eq!(visible_length("\x1b[1mHello\x1b[0m"), 5);
        assert_eq!(visible_length("Hello"), 5);
        assert_eq!(visible_length(""), 0);
    }

    #[test]
    fn test_extract_ansi_codes() {
        let codes = extract_ansi_codes("\x1b[97mA\x1b[1;3;4mB\x1b[0m");
        assert_eq!(codes, vec!["\x1b[97m", "\x1b[1;3;4m", "\x1b[0m"]);
        assert!(extract_ansi_codes("plain").is_empty());
    }

    #[test]
    fn test_parse_sgr_params() {
        assert_eq!(parse_sgr_params("\x1b[0m"), vec![0]);
        assert_eq!(parse_sgr_params("\x1b[31;44m"), vec![31, 44]);
        assert_eq!(parse_sgr_params("\x1b[107m"), vec![107]);
    }
}
