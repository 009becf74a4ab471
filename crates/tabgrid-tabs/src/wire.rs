//! JSON wire format between the page and the background process

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::descriptor::TabDescriptor;
use crate::directory::{DirectoryRequest, TabDirectory};
use crate::error::TabError;
use crate::tab::TabId;
use crate::Result;

/// `{ "success": bool, "tabs"?: [...], "error"?: string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WireResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            tabs: None,
            error: None,
        }
    }

    pub fn with_tabs(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            success: true,
            tabs: Some(tabs),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tabs: None,
            error: Some(error.into()),
        }
    }

    /// Treat `success: false` as a rejection
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(TabError::Rejected(
                self.error.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }

    /// A successful response that is missing its tab list is still a failure
    pub fn into_tabs(self) -> Result<Vec<TabDescriptor>> {
        self.into_result()?
            .tabs
            .ok_or_else(|| TabError::Transport("response carried no tab list".to_string()))
    }
}

/// A [`TabDirectory`] that reaches a [`Background`] through serialized
/// messages, exactly as a page-side script would.
pub struct LocalTransport {
    background: Background,
}

impl LocalTransport {
    pub fn new(background: Background) -> Self {
        Self { background }
    }

    async fn round_trip(&self, request: &DirectoryRequest) -> Result<WireResponse> {
        let outbound = serde_json::to_string(request)?;
        tracing::trace!(command = request.command(), "Sending directory message");

        let inbound = self.background.handle_message(&outbound);
        Ok(serde_json::from_str(&inbound)?)
    }
}

#[async_trait]
impl TabDirectory for LocalTransport {
    async fn list_tabs(&self) -> Result<Vec<TabDescriptor>> {
        self.round_trip(&DirectoryRequest::ListTabs)
            .await?
            .into_tabs()
    }

    async fn activate_tab(&self, tab_id: &TabId) -> Result<()> {
        self.round_trip(&DirectoryRequest::ActivateTab {
            tab_id: tab_id.clone(),
        })
        .await?
        .into_result()
        .map(|_| ())
    }

    async fn close_tab(&self, tab_id: &TabId) -> Result<()> {
        self.round_trip(&DirectoryRequest::CloseTab {
            tab_id: tab_id.clone(),
        })
        .await?
        .into_result()
        .map(|_| ())
    }
}
