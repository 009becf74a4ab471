//! Card view-model for one grid cell

use serde::{Deserialize, Serialize};
use tabgrid_tabs::{TabDescriptor, TabId};

use crate::truncate::truncate;

/// Display limits applied when building cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardLimits {
    pub title: usize,
    pub url: usize,
    /// Shown in place of an empty title
    pub untitled_label: String,
}

impl Default for CardLimits {
    fn default() -> Self {
        Self {
            title: 50,
            url: 60,
            untitled_label: "Untitled".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabCard {
    pub id: TabId,
    /// Truncated title for the card face
    pub title: String,
    /// Untruncated title for hover / long-form display
    pub full_title: String,
    pub url: String,
    pub full_url: String,
    pub icon_ref: Option<String>,
    pub preview_ref: Option<String>,
    pub selected: bool,
}

impl TabCard {
    pub fn new(tab: &TabDescriptor, selected: bool, limits: &CardLimits) -> Self {
        let title = if tab.title.is_empty() {
            limits.untitled_label.as_str()
        } else {
            tab.title.as_str()
        };

        Self {
            id: tab.id.clone(),
            title: truncate(title, limits.title),
            full_title: tab.title.clone(),
            url: truncate(&tab.url, limits.url),
            full_url: tab.url.clone(),
            icon_ref: tab.icon_ref.clone(),
            preview_ref: tab.preview_ref.clone(),
            selected,
        }
    }

    /// Image to show in the preview area; falls back to the icon
    pub fn preview_or_icon(&self) -> Option<&str> {
        self.preview_ref.as_deref().or(self.icon_ref.as_deref())
    }
}
