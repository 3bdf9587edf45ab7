//! Tesc ANSI
//!
//! This crate turns the style model of `tesc-core` into ANSI escape
//! sequences.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants
//! - [`color`] - The color descriptor
//! - [`font`] - The font descriptor
//! - [`reset`] - The reset manipulator
//! - [`state`] - Caller-owned recorded style
//! - [`global`] - Process-wide recorded style
//! - [`utils`] - Text processing utilities (painting, visible length, etc.)
//!
//! # Example
//!
//! ```
//! use tesc_ansi::{Color, Font, Reset};
//! use tesc_core::{Back, Face, Style};
//!
//! let color = Color::from(Face::Red | Back::Blue);
//! let font = Font::new(Style::BOLD | Style::UNDERLINE);
//! let line = format!("{}{}warning{}", color, font, Reset);
//! assert_eq!(line, "\x1b[31;44m\x1b[1;4;23mwarning\x1b[0m");
//! ```

pub mod codes;
pub mod color;
pub mod font;
pub mod global;
pub mod reset;
pub mod state;
pub mod utils;

pub use color::{Color, ColorRequest};
pub use font::Font;
pub use reset::{reset, Reset};
pub use state::StyleState;
pub use utils::{extract_ansi_codes, paint, parse_sgr_params, visible, visible_length};
