//! Tab data structure

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::descriptor::TabDescriptor;
use crate::error::TabError;
use crate::state::TabState;
use crate::Result;

/// Opaque tab identifier, stable for the lifetime of the tab
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Browser window identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u32);

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Window this tab lives in
    pub window_id: WindowId,
    /// Current URL
    pub url: String,
    /// Page title, empty until the page reports one
    pub title: String,
    /// Favicon URL if available
    pub favicon_url: Option<String>,
    /// Preview image reference, if one was captured
    pub snapshot: Option<String>,
    /// Current state in the state machine
    pub state: TabState,
}

impl Tab {
    pub fn new(window_id: WindowId, url: String) -> Result<Self> {
        validate_url(&url)?;

        Ok(Self {
            id: TabId::generate(),
            window_id,
            url,
            title: String::new(),
            favicon_url: None,
            snapshot: None,
            state: TabState::Background,
        })
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: TabState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            tab_id = %self.id,
            from = %self.state,
            to = %new_state,
            "Tab state transition"
        );

        self.state = new_state;
        Ok(())
    }

    /// Mark tab as the focused tab of its window
    pub fn activate(&mut self) -> Result<()> {
        self.transition_to(TabState::Active)
    }

    /// Move tab to background
    pub fn blur(&mut self) -> Result<()> {
        if self.state == TabState::Active {
            self.transition_to(TabState::Background)
        } else {
            Ok(())
        }
    }

    pub fn close(&mut self) -> Result<()> {
        self.transition_to(TabState::Closed)
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_favicon(&mut self, url: Option<String>) {
        self.favicon_url = url;
    }

    pub fn set_snapshot(&mut self, snapshot: Option<String>) {
        self.snapshot = snapshot;
    }

    /// Snapshot of this tab as the switcher sees it
    pub fn describe(&self, order: usize) -> TabDescriptor {
        TabDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            icon_ref: self.favicon_url.clone(),
            preview_ref: self.snapshot.clone(),
            is_active: self.state.is_active(),
            order,
        }
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(TabError::InvalidUrl("URL cannot be empty".to_string()));
    }
    Url::parse(url).map_err(|e| TabError::InvalidUrl(format!("{}: {}", url, e)))?;
    Ok(())
}
