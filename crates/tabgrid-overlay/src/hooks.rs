//! Callbacks the controller hands to a mounted presenter

use tabgrid_tabs::TabId;

use crate::gesture::Gesture;

pub type ItemHook = Box<dyn Fn(TabId) + Send + Sync>;
pub type Hook = Box<dyn Fn() + Send + Sync>;

/// Capabilities a presenter may invoke while mounted
pub struct OverlayHooks {
    /// Switch to this tab
    pub on_item_activate: ItemHook,
    /// Close this tab
    pub on_item_dismiss: ItemHook,
    /// Dismiss the overlay without switching
    pub on_dismiss_all: Hook,
    /// Retry after an error
    pub on_retry: Hook,
}

impl OverlayHooks {
    /// Route a user gesture to the matching hook
    pub fn dispatch(&self, gesture: Gesture) {
        tracing::trace!(?gesture, "Overlay gesture");

        match gesture {
            Gesture::Click(id) => (self.on_item_activate)(id),
            // The dismiss control sits on the card; it must never also activate
            Gesture::ClickDismissControl(id) | Gesture::AuxClick(id) => (self.on_item_dismiss)(id),
            Gesture::Escape => (self.on_dismiss_all)(),
            Gesture::Retry => (self.on_retry)(),
        }
    }
}

impl std::fmt::Debug for OverlayHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayHooks").finish_non_exhaustive()
    }
}
