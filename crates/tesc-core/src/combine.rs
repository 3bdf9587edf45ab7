//! Joining color and style requests.
//!
//! A foreground and a background join into a [`ColorPair`] regardless of
//! argument order; two styles join into their union.
//!
//! ```
//! use tesc_core::{combine, Back, ColorPair, Face, Style};
//!
//! assert_eq!(Face::Red | Back::Blue, Back::Blue | Face::Red);
//! assert_eq!(combine(Back::Blue, Face::Red), ColorPair::new(Face::Red, Back::Blue));
//! assert_eq!(combine(Style::BOLD, Style::ITALIC), Style::BOLD | Style::ITALIC);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

use crate::enums::{Back, Face, Style};

/// A joined foreground/background request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorPair {
    /// Foreground color
    pub face: Face,
    /// Background color
    pub back: Back,
}

impl ColorPair {
    /// Create a new pair.
    pub const fn new(face: Face, back: Back) -> Self {
        Self { face, back }
    }
}

impl From<(Face, Back)> for ColorPair {
    fn from((face, back): (Face, Back)) -> Self {
        Self::new(face, back)
    }
}

impl From<(Back, Face)> for ColorPair {
    fn from((back, face): (Back, Face)) -> Self {
        Self::new(face, back)
    }
}

impl BitOr<Back> for Face {
    type Output = ColorPair;

    fn bitor(self, back: Back) -> ColorPair {
        ColorPair::new(self, back)
    }
}

impl BitOr<Face> for Back {
    type Output = ColorPair;

    fn bitor(self, face: Face) -> ColorPair {
        face | self
    }
}

/// Join two compatible requests.
///
/// Works for `Face`/`Back` in either order and for two `Style`s.
pub fn combine<A, B>(a: A, b: B) -> A::Output
where
    A: BitOr<B>,
{
    a | b
}

/// Join any number of styles; an empty list yields normal.
pub fn join_styles<I>(styles: I) -> Style
where
    I: IntoIterator<Item = Style>,
{
    styles.into_iter().fold(Style::NORMAL, |acc, style| acc | style)
}
