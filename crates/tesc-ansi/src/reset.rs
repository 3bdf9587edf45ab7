//! The reset manipulator.

use std::fmt;
use std::io;

use crate::codes::RESET;

/// Reverts every attribute to the terminal default.
///
/// Resetting never touches a [`crate::StyleState`]; the recorded style
/// survives so it can be applied again later.
///
/// ```
/// use tesc_ansi::Reset;
/// assert_eq!(format!("{}done{}", Reset, Reset), "\x1b[0mdone\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reset;

impl fmt::Display for Reset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RESET)
    }
}

/// Write the reset sequence to `out`.
pub fn reset<W: io::Write>(out: &mut W) -> io::Result<()> {
    out.write_all(RESET.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_display() {
        assert_eq!(Reset.to_string(), "\x1b[0m");
    }

    #[test]
    fn test_reset_write() {
        let mut out = Vec::new();
        reset(&mut out).unwrap();
        reset(&mut out).unwrap();
        assert_eq!(out, b"\x1b[0m\x1b[0m");
    }
}
