//! Tab State Machine
//!
//! ```text
//! Active ⇄ Background
//!    ↓         ↓
//!       Closed
//! ```
//!
//! A window has at most one `Active` tab. `Closed` is terminal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Tab is the focused tab of its window
    Active,
    /// Tab is open but not focused
    Background,
    /// Tab has been removed from its window
    Closed,
}

impl TabState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: TabState) -> bool {
        match (self, target) {
            (TabState::Active, TabState::Background) => true,
            (TabState::Background, TabState::Active) => true,
            (TabState::Active, TabState::Closed) => true,
            (TabState::Background, TabState::Closed) => true,
            // Nothing leaves Closed, not even a no-op
            (TabState::Closed, _) => false,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TabState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Active => "active",
            TabState::Background => "background",
            TabState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(TabState::Active),
            "background" => Ok(TabState::Background),
            "closed" => Ok(TabState::Closed),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}
