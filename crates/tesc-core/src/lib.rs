//! Tesc Core
//!
//! This crate provides the style model, combinators and error definitions
//! for the tesc console text stylizer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Face`], [`Back`], [`Style`] - Foreground, background and font style values
//! - [`Brighten`], [`BrightPolicy`] - Bright color variants
//! - [`ColorPair`], [`combine`] - Joining requests into one descriptor input
//! - [`TescError`] - Error types

pub mod bright;
pub mod combine;
pub mod enums;
pub mod error;

pub use bright::{bright, BrightPolicy, Brighten, BRIGHT_OFFSET};
pub use combine::{combine, join_styles, ColorPair};
pub use enums::{Back, Face, Style};
pub use error::{Result, TescError};
