//! The font descriptor.
//!
//! A [`Font`] always emits one code per attribute channel (bold, italic,
//! underline): the channel's "on" code when its bit is set, its "off"
//! code otherwise. The three codes are written in ascending order so the
//! output does not depend on how the style was assembled.

use std::fmt;
use std::io;

use tesc_core::{join_styles, Style};

use crate::codes::{
    sgr, BOLD_OFF, BOLD_ON, ITALIC_OFF, ITALIC_ON, UNDERLINE_OFF, UNDERLINE_ON,
};

/// Console font style manipulator.
///
/// # Example
///
/// ```
/// use tesc_ansi::Font;
/// use tesc_core::Style;
///
/// assert_eq!(Font::default().to_string(), "\x1b[22;23;24m");
/// assert_eq!(Font::new(Style::BOLD).to_string(), "\x1b[1;23;24m");
/// assert_eq!(Font::new(Style::BOLD | Style::UNDERLINE).to_string(), "\x1b[1;4;23m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Font {
    style: Style,
}

impl Font {
    /// Create a font from a (possibly joined) style.
    pub const fn new(style: Style) -> Self {
        Self { style }
    }

    /// Create a font from any number of styles; none means normal.
    pub fn from_styles<I>(styles: I) -> Self
    where
        I: IntoIterator<Item = Style>,
    {
        Self::new(join_styles(styles))
    }

    /// The resolved style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Check whether this font includes `query`.
    ///
    /// See [`Style::includes`] for the normal/normal rule.
    pub fn test(&self, query: Style) -> bool {
        self.style.includes(query)
    }

    /// The three SGR parameters, sorted ascending.
    pub fn codes(&self) -> [u8; 3] {
        let pick = |bit: Style, on: u8, off: u8| if self.style.contains(bit) { on } else { off };
        let mut codes = [
            pick(Style::BOLD, BOLD_ON, BOLD_OFF),
            pick(Style::ITALIC, ITALIC_ON, ITALIC_OFF),
            pick(Style::UNDERLINE, UNDERLINE_ON, UNDERLINE_OFF),
        ];
        sort3(&mut codes);
        codes
    }

    /// Write the escape sequence to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

/// Three-element compare-and-swap network.
fn sort3(codes: &mut [u8; 3]) {
    if codes[0] > codes[1] {
        codes.swap(0, 1);
    }
    if codes[1] > codes[2] {
        codes.swap(1, 2);
        if codes[0] > codes[1] {
            codes.swap(0, 1);
        }
    }
}

impl From<Style> for Font {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sgr(&self.codes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal() {
        assert_eq!(Font::default().to_string(), "\x1b[22;23;24m");
        assert_eq!(Font::new(Style::NORMAL).to_string(), "\x1b[22;23;24m");
        assert_eq!(Font::from_styles([]).to_string(), "\x1b[22;23;24m");
    }

    #[test]
    fn test_single_attributes() {
        assert_eq!(Font::new(Style::BOLD).to_string(), "\x1b[1;23;24m");
        assert_eq!(Font::new(Style::ITALIC).to_string(), "\x1b[3;22;24m");
        assert_eq!(Font::new(Style::UNDERLINE).to_string(), "\x1b[4;22;23m");
    }

    #[test]
    fn test_combined_attributes() {
        assert_eq!(
            Font::new(Style::BOLD | Style::UNDERLINE).to_string(),
            "\x1b[1;4;23m"
        );
        assert_eq!(
            Font::new(Style::ITALIC | Style::UNDERLINE).to_string(),
            "\x1b[3;4;22m"
        );
        assert_eq!(Font::new(Style::all()).to_string(), "\x1b[1;3;4m");
    }

    #[test]
    fn test_codes_sorted_for_every_style() {
        for bits in 0..=7u8 {
            let style = Style::from_bits(bits).unwrap();
            let codes = Font::new(style).codes();
            assert!(codes[0] <= codes[1] && codes[1] <= codes[2], "{:?}", codes);
        }
    }

    #[test]
    fn test_sort3_all_orders() {
        let orders = [
            [1, 3, 4],
            [1, 4, 3],
            [3, 1, 4],
            [3, 4, 1],
            [4, 1, 3],
            [4, 3, 1],
        ];
        for order in orders {
            let mut codes = order;
            sort3(&mut codes);
            assert_eq!(codes, [1, 3, 4]);
        }
    }

    #[test]
    fn test_from_styles_order_independent() {
        let a = Font::from_styles([Style::UNDERLINE, Style::BOLD]);
        let b = Font::from_styles([Style::BOLD, Style::UNDERLINE]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_containment() {
        assert!(Font::default().test(Style::NORMAL));
        let italic = Font::new(Style::ITALIC);
        assert!(italic.test(Style::ITALIC));
        assert!(!italic.test(Style::BOLD | Style::ITALIC));
        assert!(!italic.test(Style::BOLD));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        Font::new(Style::BOLD).write_to(&mut out).unwrap();
        assert_eq!(out, b"\x1b[1;23;24m");
    }
}
