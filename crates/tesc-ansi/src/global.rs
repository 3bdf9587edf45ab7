//! Process-wide recorded style.
//!
//! A single [`StyleState`] shared by the whole process, for callers that
//! want every color and font to be recorded without carrying a state
//! around. Access is serialized through a mutex.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tesc_core::{Back, Face, Style};

use crate::color::{Color, ColorRequest};
use crate::font::Font;
use crate::state::StyleState;

static STATE: Mutex<StyleState> = Mutex::new(StyleState::new());

// StyleState is plain data, so a panic while holding the lock cannot
// leave it half-written.
fn lock() -> MutexGuard<'static, StyleState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build a color through the shared state. See [`StyleState::color`].
pub fn color(request: impl Into<ColorRequest>) -> Color {
    lock().color(request)
}

/// Build a font through the shared state. See [`StyleState::font`].
pub fn font(style: Style) -> Font {
    lock().font(style)
}

/// The recorded color.
pub fn current_color() -> Color {
    lock().current_color()
}

/// The recorded font.
pub fn current_font() -> Font {
    lock().current_font()
}

/// Recorded foreground.
pub fn face() -> Face {
    lock().face()
}

/// Recorded background.
pub fn back() -> Back {
    lock().back()
}

/// Recorded font style.
pub fn style() -> Style {
    lock().style()
}

/// Containment query against the recorded style.
pub fn test_style(query: Style) -> bool {
    lock().test_style(query)
}

/// Copy of the whole shared state.
pub fn snapshot() -> StyleState {
    *lock()
}

/// Swap in a new shared state, returning the previous one.
pub fn replace(state: StyleState) -> StyleState {
    std::mem::replace(&mut *lock(), state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reset;

    // One test only: the state is shared by every test in this binary.
    #[test]
    fn test_global_lifecycle() {
        let saved = replace(StyleState::new());

        assert_eq!(face(), Face::None);
        assert_eq!(back(), Back::None);
        assert!(test_style(Style::NORMAL));

        assert_eq!(color(Back::Red).to_string(), "\x1b[41m");
        assert_eq!(color(Face::Green).to_string(), "\x1b[32;41m");
        assert_eq!(font(Style::UNDERLINE).to_string(), "\x1b[4;22;23m");

        let before = snapshot();
        assert_eq!(Reset.to_string(), "\x1b[0m");
        assert_eq!(snapshot(), before);

        assert_eq!(face(), Face::Green);
        assert_eq!(back(), Back::Red);
        assert_eq!(style(), Style::UNDERLINE);
        assert_eq!(current_color(), Color::new(Face::Green, Back::Red));
        assert_eq!(current_font().to_string(), "\x1b[4;22;23m");

        replace(saved);
    }
}
