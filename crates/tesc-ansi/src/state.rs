//! Recorded style state.
//!
//! A [`StyleState`] remembers the last color and font built through it.
//! Single-channel color requests keep the other channel's recorded value,
//! and [`StyleState::current_font`] replays the last recorded style, e.g.
//! after a [`crate::Reset`].
//!
//! The state is a plain value owned by the caller. For process-wide
//! semantics see [`crate::global`].

use tesc_core::{join_styles, Back, ColorPair, Face, Style};

use crate::color::{Color, ColorRequest};
use crate::font::Font;

/// The most recently applied color channels and font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleState {
    face: Face,
    back: Back,
    style: Style,
}

impl StyleState {
    /// Create a state with no colors and a normal font.
    pub const fn new() -> Self {
        Self {
            face: Face::None,
            back: Back::None,
            style: Style::NORMAL,
        }
    }

    /// Build a color, filling open channels from and recording into this state.
    ///
    /// # Example
    ///
    /// ```
    /// use tesc_ansi::StyleState;
    /// use tesc_core::{Back, Face};
    ///
    /// let mut state = StyleState::new();
    /// state.color(Back::Blue);
    /// assert_eq!(state.color(Face::Red).to_string(), "\x1b[31;44m");
    /// ```
    pub fn color(&mut self, request: impl Into<ColorRequest>) -> Color {
        let pair = request.into().resolve(self.pair());
        self.face = pair.face;
        self.back = pair.back;
        Color::from(pair)
    }

    /// Build a font and record its style.
    pub fn font(&mut self, style: Style) -> Font {
        self.style = style;
        Font::new(style)
    }

    /// Build a font from several styles and record the joined style.
    pub fn font_from<I>(&mut self, styles: I) -> Font
    where
        I: IntoIterator<Item = Style>,
    {
        self.font(join_styles(styles))
    }

    /// The recorded color, without changing anything.
    pub fn current_color(&self) -> Color {
        Color::from(self.pair())
    }

    /// The recorded font, without changing anything.
    pub fn current_font(&self) -> Font {
        Font::new(self.style)
    }

    /// Recorded foreground.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Recorded background.
    pub fn back(&self) -> Back {
        self.back
    }

    /// Recorded font style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Containment query against the recorded style.
    pub fn test_style(&self, query: Style) -> bool {
        self.style.includes(query)
    }

    fn pair(&self) -> ColorPair {
        ColorPair::new(self.face, self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reset;

    #[test]
    fn test_initial_state() {
        let state = StyleState::new();
        assert_eq!(state, StyleState::default());
        assert_eq!(state.face(), Face::None);
        assert_eq!(state.back(), Back::None);
        assert_eq!(state.style(), Style::NORMAL);
        assert!(state.test_style(Style::NORMAL));
    }

    #[test]
    fn test_color_records_pair() {
        let mut state = StyleState::new();
        let color = state.color(Face::Red | Back::Blue);
        assert_eq!(color.to_string(), "\x1b[31;44m");
        assert_eq!(state.face(), Face::Red);
        assert_eq!(state.back(), Back::Blue);
    }

    #[test]
    fn test_single_channel_keeps_other() {
        let mut state = StyleState::new();
        state.color(Face::Green | Back::White);

        let color = state.color(Face::Cyan);
        assert_eq!(color, Color::new(Face::Cyan, Back::White));

        let color = state.color(Back::None);
        assert_eq!(color, Color::new(Face::Cyan, Back::None));
        assert_eq!(color.to_string(), "\x1b[36m");
    }

    #[test]
    fn test_font_records_style() {
        let mut state = StyleState::new();
        let font = state.font(Style::ITALIC);
        assert_eq!(font.to_string(), "\x1b[3;22;24m");
        assert!(state.test_style(Style::ITALIC));
        assert!(!state.test_style(Style::BOLD | Style::ITALIC));
    }

    #[test]
    fn test_font_from() {
        let mut state = StyleState::new();
        state.font_from([Style::UNDERLINE, Style::BOLD]);
        assert_eq!(state.style(), Style::BOLD | Style::UNDERLINE);
        state.font_from([]);
        assert_eq!(state.style(), Style::NORMAL);
    }

    #[test]
    fn test_reset_keeps_recorded_state() {
        let mut state = StyleState::new();
        state.color(Face::Yellow);
        state.font(Style::BOLD);
        let before = state;

        let output = format!("{}", Reset);
        assert_eq!(output, "\x1b[0m");
        assert_eq!(state, before);

        assert_eq!(state.current_font().to_string(), "\x1b[1;23;24m");
        assert_eq!(state.current_color().to_string(), "\x1b[33m");
    }
}
