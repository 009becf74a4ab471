//! Switcher configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use tabgrid_navigation::ColumnBreakpoints;
use tabgrid_overlay::CardLimits;

use crate::error::SwitcherError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Bound on every directory request
    pub request_timeout_ms: u64,
    /// Viewport width → grid column count
    pub columns: ColumnBreakpoints,
    /// Card text limits
    pub cards: CardLimits,
}

impl SwitcherConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;

        tracing::info!(path = %path.display(), "Loaded switcher config");

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_ms == 0 {
            return Err(SwitcherError::Config(
                "request_timeout_ms must be positive".to_string(),
            ));
        }

        self.columns
            .validate()
            .map_err(|e| SwitcherError::Config(e.to_string()))?;

        // Room for at least one character before the ellipsis
        if self.cards.title < 4 || self.cards.url < 4 {
            return Err(SwitcherError::Config(
                "card text limits must be at least 4".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 2000,
            columns: ColumnBreakpoints::default(),
            cards: CardLimits::default(),
        }
    }
}
