//! Named style presets.
//!
//! A preset bundles a foreground, a background and a font style under
//! a name, e.g. `error` or `link`:
//!
//! ```toml
//! [presets.error]
//! Face  = "red"
//! Style = "BOLD"
//! ```

use serde::{Deserialize, Serialize};
use tesc_ansi::{Color, Font, StyleState};
use tesc_core::{Back, ColorPair, Face, Style};

/// One named (face, back, style) triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Preset {
    /// Foreground color. Default: none
    #[serde(default)]
    pub face: Face,

    /// Background color. Default: none
    #[serde(default)]
    pub back: Back,

    /// Font style by name, e.g. `"bold|underline"`. Default: normal
    #[serde(default)]
    pub style: Style,
}

impl Preset {
    /// Create a new preset.
    pub fn new(face: Face, back: Back, style: Style) -> Self {
        Self { face, back, style }
    }

    /// The color channels as a pair.
    pub fn pair(&self) -> ColorPair {
        ColorPair::new(self.face, self.back)
    }

    /// The color descriptor for this preset.
    pub fn color(&self) -> Color {
        Color::from(self.pair())
    }

    /// The font descriptor for this preset.
    pub fn font(&self) -> Font {
        Font::new(self.style)
    }

    /// Build both descriptors through `state`, recording them.
    pub fn apply(&self, state: &mut StyleState) -> (Color, Font) {
        (state.color(self.pair()), state.font(self.style))
    }
}
