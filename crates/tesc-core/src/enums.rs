//! Color and font style enumerations.
//!
//! [`Face`] and [`Back`] are closed sets of 3/4-bit ANSI colors for the
//! foreground and background channels. Each variant carries its SGR code
//! as the discriminant, with `None` (code 0) meaning "leave this channel
//! alone". [`Style`] is a bit set of font attributes.

use bitflags::bitflags;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TescError;

macro_rules! color_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $kind:literal {
            $($variant:ident = $code:literal => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        #[repr(u8)]
        pub enum $name {
            /// No effect on this channel
            #[default]
            None = 0,
            $(
                #[doc = concat!("`", $text, "` (SGR ", stringify!($code), ")")]
                $variant = $code,
            )+
        }

        impl $name {
            /// Every value, `None` first, then base colors, then bright colors.
            pub const ALL: &'static [$name] = &[$name::None, $($name::$variant),+];

            /// The SGR code of this color, 0 for `None`.
            pub const fn code(self) -> u8 {
                self as u8
            }

            /// Look up a color by its SGR code.
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    0 => Some($name::None),
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Canonical kebab-case name, e.g. `"bright-red"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $name::None => "none",
                    $($name::$variant => $text,)+
                }
            }

            /// True for `None`.
            pub const fn is_none(self) -> bool {
                matches!(self, $name::None)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = TescError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|color| color.name() == wanted)
                    .ok_or_else(|| TescError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

color_enum! {
    /// Text foreground color.
    pub enum Face: "face" {
        Black = 30 => "black",
        Red = 31 => "red",
        Green = 32 => "green",
        Yellow = 33 => "yellow",
        Blue = 34 => "blue",
        Magenta = 35 => "magenta",
        Cyan = 36 => "cyan",
        White = 37 => "white",
        BrightBlack = 90 => "bright-black",
        BrightRed = 91 => "bright-red",
        BrightGreen = 92 => "bright-green",
        BrightYellow = 93 => "bright-yellow",
        BrightBlue = 94 => "bright-blue",
        BrightMagenta = 95 => "bright-magenta",
        BrightCyan = 96 => "bright-cyan",
        BrightWhite = 97 => "bright-white",
    }
}

color_enum! {
    /// Text background color.
    pub enum Back: "back" {
        Black = 40 => "black",
        Red = 41 => "red",
        Green = 42 => "green",
        Yellow = 43 => "yellow",
        Blue = 44 => "blue",
        Magenta = 45 => "magenta",
        Cyan = 46 => "cyan",
        White = 47 => "white",
        BrightBlack = 100 => "bright-black",
        BrightRed = 101 => "bright-red",
        BrightGreen = 102 => "bright-green",
        BrightYellow = 103 => "bright-yellow",
        BrightBlue = 104 => "bright-blue",
        BrightMagenta = 105 => "bright-magenta",
        BrightCyan = 106 => "bright-cyan",
        BrightWhite = 107 => "bright-white",
    }
}

bitflags! {
    /// Font style.
    ///
    /// The bits are not SGR codes; they exist so that styles can be joined
    /// with `|`. The font descriptor maps each bit to its set/cancel code.
    ///
    /// In configuration files a style is written by name, e.g.
    /// `"bold|underline"`, with `"normal"` or `""` for no attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Style: u8 {
        const BOLD = 1;
        const ITALIC = 2;
        const UNDERLINE = 4;
    }
}

impl Style {
    /// No attributes.
    pub const NORMAL: Style = Style::empty();

    /// Containment query.
    ///
    /// A normal style includes the normal query; otherwise every bit of
    /// `query` must be set in `self`.
    ///
    /// ```
    /// use tesc_core::Style;
    ///
    /// assert!(Style::NORMAL.includes(Style::NORMAL));
    /// assert!(Style::ITALIC.includes(Style::ITALIC));
    /// assert!(!Style::ITALIC.includes(Style::BOLD | Style::ITALIC));
    /// ```
    pub fn includes(self, query: Style) -> bool {
        if self.is_empty() && query.is_empty() {
            return true;
        }
        self.contains(query)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("normal");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(&name.to_ascii_lowercase())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = TescError;

    /// Parses `normal`, `bold`, `italic`, `underline` and any
    /// combination joined by `|`, `,` or `+`. Blank input is normal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style::NORMAL;
        if s.trim().is_empty() {
            return Ok(style);
        }
        for part in s.split(['|', ',', '+']) {
            style |= match part.trim().to_ascii_lowercase().as_str() {
                "normal" => Style::NORMAL,
                "bold" => Style::BOLD,
                "italic" => Style::ITALIC,
                "underline" => Style::UNDERLINE,
                _ => {
                    return Err(TescError::UnknownName {
                        kind: "style",
                        name: s.to_string(),
                    })
                }
            };
        }
        Ok(style)
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Names only, so no value outside the three known bits can be read.
impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
