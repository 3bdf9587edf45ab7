//! Brightness configuration.

use serde::{Deserialize, Serialize};
use tesc_core::BrightPolicy;

/// The `[bright]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrightConfig {
    /// What brightening an already bright color does.
    /// Left unset, the strict policy applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<BrightPolicy>,
}

impl BrightConfig {
    /// The effective policy.
    pub fn policy(&self) -> BrightPolicy {
        self.policy.unwrap_or_default()
    }

    /// Merge another BrightConfig into this one.
    ///
    /// Only values actually present in `other` are taken, so a partial
    /// override file leaves the rest alone.
    pub fn merge(&mut self, other: &BrightConfig) {
        if other.policy.is_some() {
            self.policy = other.policy;
        }
    }
}
