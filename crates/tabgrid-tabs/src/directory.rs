//! Tab directory contract
//!
//! One trait method per request kind, plus the closed request union used when
//! requests have to travel as data (across a channel or over the wire).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::descriptor::TabDescriptor;
use crate::tab::TabId;
use crate::Result;

/// The authoritative owner of the open tabs.
#[async_trait]
pub trait TabDirectory: Send + Sync {
    /// Ordered tabs of the current window. An empty list is a valid answer.
    async fn list_tabs(&self) -> Result<Vec<TabDescriptor>>;

    async fn activate_tab(&self, tab_id: &TabId) -> Result<()>;

    async fn close_tab(&self, tab_id: &TabId) -> Result<()>;
}

/// A request to the directory, tagged by `command` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum DirectoryRequest {
    #[serde(rename = "GET_TABS")]
    ListTabs,
    #[serde(rename = "SWITCH_TAB")]
    ActivateTab {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    #[serde(rename = "CLOSE_TAB")]
    CloseTab {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
}

/// Successful outcome of a [`DirectoryRequest`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryReply {
    Tabs(Vec<TabDescriptor>),
    Activated,
    Closed,
}

impl DirectoryRequest {
    /// Wire names of every known command
    pub const COMMANDS: [&'static str; 3] = ["GET_TABS", "SWITCH_TAB", "CLOSE_TAB"];

    pub fn command(&self) -> &'static str {
        match self {
            DirectoryRequest::ListTabs => "GET_TABS",
            DirectoryRequest::ActivateTab { .. } => "SWITCH_TAB",
            DirectoryRequest::CloseTab { .. } => "CLOSE_TAB",
        }
    }

    /// Run this request against a directory
    pub async fn dispatch(&self, directory: &dyn TabDirectory) -> Result<DirectoryReply> {
        match self {
            DirectoryRequest::ListTabs => directory.list_tabs().await.map(DirectoryReply::Tabs),
            DirectoryRequest::ActivateTab { tab_id } => directory
                .activate_tab(tab_id)
                .await
                .map(|_| DirectoryReply::Activated),
            DirectoryRequest::CloseTab { tab_id } => directory
                .close_tab(tab_id)
                .await
                .map(|_| DirectoryReply::Closed),
        }
    }
}
