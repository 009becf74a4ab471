//! Tab descriptor as carried in a `ListTabs` reply

use serde::{Deserialize, Serialize};

use crate::tab::TabId;

/// One open tab as known to the overlay.
///
/// Field names on the wire follow the message format of the background
/// process (`favIconUrl`, `screenshot`, `active`, `index`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Small icon image reference
    #[serde(rename = "favIconUrl", default)]
    pub icon_ref: Option<String>,
    /// Preview image reference; `None` means "use icon fallback"
    #[serde(rename = "screenshot", default)]
    pub preview_ref: Option<String>,
    /// Whether this tab was focused in its window at snapshot time
    #[serde(rename = "active", default)]
    pub is_active: bool,
    /// Position in the snapshot
    #[serde(rename = "index", default)]
    pub order: usize,
}
