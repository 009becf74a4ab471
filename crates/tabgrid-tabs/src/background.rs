//! Background service
//!
//! Answers directory requests against a [`TabStore`] and routes the global
//! toggle hotkey to whichever page currently has focus.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::descriptor::TabDescriptor;
use crate::directory::{DirectoryRequest, TabDirectory};
use crate::error::TabError;
use crate::store::TabStore;
use crate::tab::TabId;
use crate::wire::WireResponse;
use crate::Result;

/// Hotkey command name that opens or closes the switcher
pub const TOGGLE_COMMAND: &str = "toggle-tab-switcher";

/// Messages the background pushes to a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMessage {
    ToggleSwitcher,
}

pub struct Background {
    store: TabStore,
    /// Page-side listeners keyed by the tab they live in
    responders: Arc<RwLock<HashMap<TabId, UnboundedSender<HostMessage>>>>,
}

impl Background {
    pub fn new(store: TabStore) -> Self {
        Self {
            store,
            responders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn store(&self) -> &TabStore {
        &self.store
    }

    /// Register the listener living in `tab_id`
    pub fn register_responder(&self, tab_id: TabId, sender: UnboundedSender<HostMessage>) {
        tracing::debug!(tab_id = %tab_id, "Registered responder");
        self.responders.write().insert(tab_id, sender);
    }

    pub fn unregister_responder(&self, tab_id: &TabId) {
        self.responders.write().remove(tab_id);
    }

    /// Handle a global keyboard command. Returns whether a page received it;
    /// a toggle with no listening page is dropped.
    pub fn on_command(&self, command: &str) -> bool {
        if command != TOGGLE_COMMAND {
            tracing::debug!(command, "Ignoring unknown hotkey command");
            return false;
        }

        let Some(target) = self
            .store
            .focused_window()
            .and_then(|window| self.store.active_tab(window))
        else {
            tracing::debug!("No focused tab for toggle");
            return false;
        };

        let delivered = match self.responders.read().get(&target.id) {
            Some(sender) => sender.send(HostMessage::ToggleSwitcher).is_ok(),
            None => false,
        };

        if !delivered {
            // The page went away or never loaded a listener
            self.responders.write().remove(&target.id);
            tracing::debug!(tab_id = %target.id, "Switcher not ready on this tab");
        }

        delivered
    }

    /// Answer one request
    pub fn handle(&self, request: &DirectoryRequest) -> WireResponse {
        let outcome = match request {
            DirectoryRequest::ListTabs => {
                return WireResponse::with_tabs(self.current_window_tabs());
            }
            DirectoryRequest::ActivateTab { tab_id } => self.store.activate_tab(tab_id).map(|_| ()),
            DirectoryRequest::CloseTab { tab_id } => self.store.close_tab(tab_id).map(|_| ()),
        };

        match outcome {
            Ok(()) => WireResponse::ok(),
            Err(e) => {
                tracing::error!(command = request.command(), error = %e, "Directory request failed");
                WireResponse::err(e.to_string())
            }
        }
    }

    /// Answer one serialized request with a serialized response
    pub fn handle_message(&self, raw: &str) -> String {
        let response = match parse_request(raw) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                tracing::warn!(error = %e, "Rejected directory message");
                match e {
                    TabError::UnknownCommand(_) => WireResponse::err("Unknown command"),
                    other => WireResponse::err(other.to_string()),
                }
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(r#"{{"success":false,"error":"{}"}}"#, e.to_string().replace('"', "'"))
        })
    }

    /// Tabs of the focused window. Lookup problems degrade to an empty list,
    /// which the switcher reports as "no tabs".
    fn current_window_tabs(&self) -> Vec<TabDescriptor> {
        let Some(window) = self.store.focused_window() else {
            tracing::warn!("No focused window");
            return Vec::new();
        };

        match self.store.describe_window(window) {
            Ok(tabs) => {
                tracing::debug!(count = tabs.len(), "Returning tabs");
                tabs
            }
            Err(e) => {
                tracing::error!(error = %e, "Error getting tabs");
                Vec::new()
            }
        }
    }
}

fn parse_request(raw: &str) -> Result<DirectoryRequest> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let command = value
        .get("command")
        .and_then(|c| c.as_str())
        .unwrap_or_default();
    if !DirectoryRequest::COMMANDS.contains(&command) {
        return Err(TabError::UnknownCommand(command.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

impl Clone for Background {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            responders: Arc::clone(&self.responders),
        }
    }
}

#[async_trait]
impl TabDirectory for Background {
    async fn list_tabs(&self) -> Result<Vec<TabDescriptor>> {
        Ok(self.current_window_tabs())
    }

    async fn activate_tab(&self, tab_id: &TabId) -> Result<()> {
        self.store.activate_tab(tab_id).map(|_| ())
    }

    async fn close_tab(&self, tab_id: &TabId) -> Result<()> {
        self.store.close_tab(tab_id).map(|_| ())
    }
}
