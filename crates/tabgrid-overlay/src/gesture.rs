//! Pointer and in-overlay key gestures

use tabgrid_tabs::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Primary click on a card
    Click(TabId),
    /// Click on a card's dismiss control
    ClickDismissControl(TabId),
    /// Auxiliary (middle) button on a card
    AuxClick(TabId),
    /// Escape pressed while the overlay has focus
    Escape,
    /// Retry button on the error view
    Retry,
}
