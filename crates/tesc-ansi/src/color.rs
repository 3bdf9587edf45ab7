//! The color descriptor.
//!
//! A [`Color`] holds a resolved foreground/background pair and writes
//! itself as a single SGR sequence. A channel set to `None` is omitted.

use std::fmt;
use std::io;

use tesc_core::{Back, ColorPair, Face};

use crate::codes::sgr;

/// What a [`Color`] is built from.
///
/// A single-channel request leaves the other channel to whoever resolves
/// it: [`Color::from`] uses `None`, a [`crate::StyleState`] uses the last
/// recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRequest {
    /// Foreground only
    Face(Face),
    /// Background only
    Back(Back),
    /// Both channels
    Pair(ColorPair),
}

impl ColorRequest {
    /// Resolve against `fallback` for any channel the request leaves open.
    pub fn resolve(self, fallback: ColorPair) -> ColorPair {
        match self {
            ColorRequest::Face(face) => ColorPair::new(face, fallback.back),
            ColorRequest::Back(back) => ColorPair::new(fallback.face, back),
            ColorRequest::Pair(pair) => pair,
        }
    }
}

impl From<Face> for ColorRequest {
    fn from(face: Face) -> Self {
        ColorRequest::Face(face)
    }
}

impl From<Back> for ColorRequest {
    fn from(back: Back) -> Self {
        ColorRequest::Back(back)
    }
}

impl From<ColorPair> for ColorRequest {
    fn from(pair: ColorPair) -> Self {
        ColorRequest::Pair(pair)
    }
}

/// The 4-bit console text colorizer.
///
/// # Example
///
/// ```
/// use tesc_ansi::Color;
/// use tesc_core::{Back, Face};
///
/// assert_eq!(Color::from(Face::Red).to_string(), "\x1b[31m");
/// assert_eq!(Color::from(Face::Red | Back::Blue).to_string(), "\x1b[31;44m");
/// assert_eq!(Color::default().to_string(), "\x1b[m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    face: Face,
    back: Back,
}

impl Color {
    /// Create a color from both channels.
    pub const fn new(face: Face, back: Back) -> Self {
        Self { face, back }
    }

    /// Foreground channel.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Background channel.
    pub fn back(&self) -> Back {
        self.back
    }

    /// Both channels as a pair.
    pub fn pair(&self) -> ColorPair {
        ColorPair::new(self.face, self.back)
    }

    /// True if neither channel has an effect.
    pub fn is_empty(&self) -> bool {
        self.face.is_none() && self.back.is_none()
    }

    /// The SGR parameters this color emits, at most two.
    pub fn codes(&self) -> Vec<u8> {
        [self.face.code(), self.back.code()]
            .into_iter()
            .filter(|&code| code != 0)
            .collect()
    }

    /// Write the escape sequence to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl From<ColorPair> for Color {
    fn from(pair: ColorPair) -> Self {
        Self::new(pair.face, pair.back)
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Self {
        Self::new(face, Back::None)
    }
}

impl From<Back> for Color {
    fn from(back: Back) -> Self {
        Self::new(Face::None, back)
    }
}

impl From<ColorRequest> for Color {
    fn from(request: ColorRequest) -> Self {
        request.resolve(ColorPair::default()).into()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Zero-valued channels have no effect, so codes() leaves them out
        f.write_str(&sgr(&self.codes()))
    }
}
