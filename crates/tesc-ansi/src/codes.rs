//! ANSI escape code constants.
//!
//! This module provides the raw SGR pieces the descriptors are built
//! from.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// Separator between SGR parameters.
pub const SGR_SEP: &str = ";";

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Bold on.
pub const BOLD_ON: u8 = 1;

/// Bold off (normal intensity).
pub const BOLD_OFF: u8 = 22;

/// Italic on.
pub const ITALIC_ON: u8 = 3;

/// Italic off.
pub const ITALIC_OFF: u8 = 23;

/// Underline on.
pub const UNDERLINE_ON: u8 = 4;

/// Underline off.
pub const UNDERLINE_OFF: u8 = 24;

/// Build an SGR sequence from a list of parameters.
///
/// An empty list yields the bare `ESC[m`.
///
/// # Example
///
/// ```
/// use tesc_ansi::codes::sgr;
/// assert_eq!(sgr(&[31, 44]), "\x1b[31;44m");
/// assert_eq!(sgr(&[]), "\x1b[m");
/// ```
pub fn sgr(params: &[u8]) -> String {
    let joined = params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(SGR_SEP);
    format!("{}{}{}", CSI, joined, SGR_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        assert_eq!(RESET, "\x1b[0m");
        assert_eq!(sgr(&[0]), RESET);
    }

    #[test]
    fn test_sgr() {
        assert_eq!(sgr(&[1, 23, 24]), "\x1b[1;23;24m");
        assert_eq!(sgr(&[97]), "\x1b[97m");
    }
}
