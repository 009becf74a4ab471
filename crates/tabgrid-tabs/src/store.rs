//! Tab Store
//!
//! In-memory registry of windows and their ordered tabs.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::TabDescriptor;
use crate::error::TabError;
use crate::tab::{Tab, TabId, WindowId};
use crate::Result;

#[derive(Debug, Default)]
struct StoreInner {
    tabs: HashMap<TabId, Tab>,
    /// Windows in creation order, each with its ordered tab ids
    windows: Vec<(WindowId, Vec<TabId>)>,
    focused_window: Option<WindowId>,
    next_window_id: u32,
}

impl StoreInner {
    fn window_order(&self, window_id: WindowId) -> Result<&Vec<TabId>> {
        self.windows
            .iter()
            .find(|(id, _)| *id == window_id)
            .map(|(_, order)| order)
            .ok_or(TabError::WindowNotFound(window_id))
    }

    fn window_order_mut(&mut self, window_id: WindowId) -> Result<&mut Vec<TabId>> {
        self.windows
            .iter_mut()
            .find(|(id, _)| *id == window_id)
            .map(|(_, order)| order)
            .ok_or(TabError::WindowNotFound(window_id))
    }

    fn tab_mut(&mut self, tab_id: &TabId) -> Result<&mut Tab> {
        self.tabs
            .get_mut(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))
    }

    fn active_in(&self, window_id: WindowId) -> Option<TabId> {
        self.window_order(window_id).ok().and_then(|order| {
            order
                .iter()
                .find(|id| self.tabs.get(*id).is_some_and(|t| t.state.is_active()))
                .cloned()
        })
    }

    fn activate(&mut self, tab_id: &TabId) -> Result<Tab> {
        let window_id = self
            .tabs
            .get(tab_id)
            .map(|t| t.window_id)
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))?;

        if let Some(current) = self.active_in(window_id) {
            if &current != tab_id {
                self.tab_mut(&current)?.blur()?;
            }
        }

        let tab = self.tab_mut(tab_id)?;
        tab.activate()?;
        let tab = tab.clone();
        self.focused_window = Some(window_id);
        Ok(tab)
    }
}

pub struct TabStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl TabStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                next_window_id: 1,
                ..StoreInner::default()
            })),
        }
    }

    /// Open a new, empty window and focus it
    pub fn open_window(&self) -> WindowId {
        let mut inner = self.inner.write();
        let window_id = WindowId(inner.next_window_id);
        inner.next_window_id += 1;
        inner.windows.push((window_id, Vec::new()));
        inner.focused_window = Some(window_id);

        tracing::info!(window_id = %window_id, "Opened window");

        window_id
    }

    pub fn focused_window(&self) -> Option<WindowId> {
        self.inner.read().focused_window
    }

    /// Append a tab to a window. The first tab of a window becomes active,
    /// later ones open in the background.
    pub fn open_tab(&self, window_id: WindowId, url: String, title: String) -> Result<Tab> {
        let mut tab = Tab::new(window_id, url)?;
        tab.set_title(title);

        let mut inner = self.inner.write();
        let first = inner.window_order(window_id)?.is_empty();
        if first {
            tab.activate()?;
        }

        inner.window_order_mut(window_id)?.push(tab.id.clone());
        inner.tabs.insert(tab.id.clone(), tab.clone());

        tracing::info!(tab_id = %tab.id, url = %tab.url, window_id = %window_id, "Opened tab");

        Ok(tab)
    }

    pub fn get_tab(&self, tab_id: &TabId) -> Result<Tab> {
        self.inner
            .read()
            .tabs
            .get(tab_id)
            .cloned()
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))
    }

    pub fn set_tab_favicon(&self, tab_id: &TabId, favicon_url: Option<String>) -> Result<Tab> {
        let mut inner = self.inner.write();
        let tab = inner.tab_mut(tab_id)?;
        tab.set_favicon(favicon_url);
        Ok(tab.clone())
    }

    pub fn set_tab_snapshot(&self, tab_id: &TabId, snapshot: Option<String>) -> Result<Tab> {
        let mut inner = self.inner.write();
        let tab = inner.tab_mut(tab_id)?;
        tab.set_snapshot(snapshot);
        Ok(tab.clone())
    }

    /// Ordered tabs of a window
    pub fn window_tabs(&self, window_id: WindowId) -> Result<Vec<Tab>> {
        let inner = self.inner.read();
        let order = inner.window_order(window_id)?;
        Ok(order
            .iter()
            .filter_map(|id| inner.tabs.get(id).cloned())
            .collect())
    }

    pub fn active_tab(&self, window_id: WindowId) -> Option<Tab> {
        let inner = self.inner.read();
        inner
            .active_in(window_id)
            .and_then(|id| inner.tabs.get(&id).cloned())
    }

    /// Snapshot of a window in directory order
    pub fn describe_window(&self, window_id: WindowId) -> Result<Vec<TabDescriptor>> {
        Ok(self
            .window_tabs(window_id)?
            .iter()
            .enumerate()
            .map(|(order, tab)| tab.describe(order))
            .collect())
    }

    /// Focus a tab: blurs the previously active tab of the same window and
    /// brings the window to front.
    pub fn activate_tab(&self, tab_id: &TabId) -> Result<Tab> {
        let tab = self.inner.write().activate(tab_id)?;
        tracing::info!(tab_id = %tab_id, window_id = %tab.window_id, "Activated tab");
        Ok(tab)
    }

    /// Remove a tab. When the active tab closes, the tab that slides into its
    /// position (or the new last tab) becomes active. Window focus is left
    /// alone.
    pub fn close_tab(&self, tab_id: &TabId) -> Result<Tab> {
        let mut inner = self.inner.write();

        let mut tab = inner
            .tabs
            .get(tab_id)
            .cloned()
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))?;
        let was_active = tab.state.is_active();
        let position = inner
            .window_order(tab.window_id)?
            .iter()
            .position(|id| id == tab_id);
        tab.close()?;

        inner.tabs.remove(tab_id);
        let order = inner.window_order_mut(tab.window_id)?;
        order.retain(|id| id != tab_id);

        let successor = match position {
            Some(position) if was_active && !order.is_empty() => {
                Some(order[position.min(order.len() - 1)].clone())
            }
            _ => None,
        };

        if let Some(successor) = successor {
            inner.tab_mut(&successor)?.activate()?;
        }

        tracing::info!(tab_id = %tab_id, window_id = %tab.window_id, "Closed tab");

        Ok(tab)
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
