//! Bright (high intensity) color variants.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Back, Face};
use crate::error::{Result, TescError};

/// Distance between a base color code and its bright variant.
pub const BRIGHT_OFFSET: u8 = 60;

/// What to do when asked to brighten a color that is already bright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightPolicy {
    /// Fail with [`TescError::AlreadyBright`]
    #[default]
    Strict,
    /// Return the color unchanged
    Saturate,
}

impl fmt::Display for BrightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrightPolicy::Strict => write!(f, "strict"),
            BrightPolicy::Saturate => write!(f, "saturate"),
        }
    }
}

/// A color channel with bright variants.
pub trait Brighten: Copy {
    /// Channel name used in error messages.
    const CHANNEL: &'static str;
    /// Lowest code of the bright range.
    const THRESHOLD: u8;

    /// SGR code, 0 for none.
    fn sgr(self) -> u8;
    /// Inverse of [`Brighten::sgr`].
    fn from_sgr(code: u8) -> Option<Self>;

    /// Brighten under the given policy.
    ///
    /// `None` has no bright variant and comes back unchanged under
    /// either policy.
    fn brighten(self, policy: BrightPolicy) -> Result<Self> {
        let code = self.sgr();
        if code == 0 {
            return Ok(self);
        }
        if code >= Self::THRESHOLD {
            return match policy {
                BrightPolicy::Strict => Err(TescError::AlreadyBright {
                    channel: Self::CHANNEL,
                    code,
                }),
                BrightPolicy::Saturate => Ok(self),
            };
        }
        Ok(Self::from_sgr(code + BRIGHT_OFFSET).unwrap_or(self))
    }

    /// Strict brightening.
    ///
    /// ```
    /// use tesc_core::{Brighten, Face};
    ///
    /// assert_eq!(Face::Red.bright().unwrap(), Face::BrightRed);
    /// assert!(Face::BrightRed.bright().is_err());
    /// ```
    fn bright(self) -> Result<Self> {
        self.brighten(BrightPolicy::Strict)
    }

    /// Saturating brightening, never fails.
    fn bright_or_self(self) -> Self {
        self.brighten(BrightPolicy::Saturate).unwrap_or(self)
    }
}

impl Brighten for Face {
    const CHANNEL: &'static str = "Foreground";
    const THRESHOLD: u8 = 90;

    fn sgr(self) -> u8 {
        self.code()
    }

    fn from_sgr(code: u8) -> Option<Self> {
        Face::from_code(code)
    }
}

impl Brighten for Back {
    const CHANNEL: &'static str = "Background";
    const THRESHOLD: u8 = 100;

    fn sgr(self) -> u8 {
        self.code()
    }

    fn from_sgr(code: u8) -> Option<Self> {
        Back::from_code(code)
    }
}

/// Brighten any color channel under `policy`.
pub fn bright<C: Brighten>(color: C, policy: BrightPolicy) -> Result<C> {
    color.brighten(policy)
}
