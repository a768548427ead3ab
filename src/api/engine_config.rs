use serde::{Deserialize, Serialize};

use crate::core::RevealSequence;
use crate::error::{SplashError, SplashResult};
use crate::interaction::{NavCollapseConfig, ScrollAnimationConfig};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load page
/// behavior setup without inventing their own ad-hoc format. Defaults mirror
/// the stock page: collapse past 50 px, 1500 ms expo anchor scroll, and the
/// staggered title reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEngineConfig {
    #[serde(default = "default_nav_collapse")]
    pub nav_collapse: NavCollapseConfig,
    #[serde(default = "default_anchor_scroll")]
    pub anchor_scroll: ScrollAnimationConfig,
    #[serde(default = "default_reveal")]
    pub reveal: RevealSequence,
}

impl PageEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the navbar collapse tuning.
    #[must_use]
    pub fn with_nav_collapse(mut self, config: NavCollapseConfig) -> Self {
        self.nav_collapse = config;
        self
    }

    /// Sets the anchor scroll animation tuning.
    #[must_use]
    pub fn with_anchor_scroll(mut self, config: ScrollAnimationConfig) -> Self {
        self.anchor_scroll = config;
        self
    }

    /// Sets the reveal choreography.
    #[must_use]
    pub fn with_reveal(mut self, sequence: RevealSequence) -> Self {
        self.reveal = sequence;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> SplashResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SplashError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SplashResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SplashError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for PageEngineConfig {
    fn default() -> Self {
        Self {
            nav_collapse: default_nav_collapse(),
            anchor_scroll: default_anchor_scroll(),
            reveal: default_reveal(),
        }
    }
}

fn default_nav_collapse() -> NavCollapseConfig {
    NavCollapseConfig::default()
}

fn default_anchor_scroll() -> ScrollAnimationConfig {
    ScrollAnimationConfig::default()
}

fn default_reveal() -> RevealSequence {
    RevealSequence::default()
}
