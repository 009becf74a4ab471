//! Events consumed by the controller and requests it emits

use tabgrid_navigation::KeyInput;
use tabgrid_tabs::{DirectoryReply, DirectoryRequest, HostMessage, TabId};

use crate::error::SwitcherError;

/// Identifies one outbound request. `epoch` is the session generation that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub epoch: u64,
    pub serial: u64,
}

/// A directory request the host has to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub ticket: Ticket,
    pub request: DirectoryRequest,
}

/// What a mounted overlay asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    Activate(TabId),
    Dismiss(TabId),
    DismissAll,
    Retry,
}

#[derive(Debug)]
pub enum SwitcherEvent {
    /// Global hotkey
    Toggle,
    /// Key press while the page has focus
    Key(KeyInput),
    /// Raised through the overlay hooks of session `epoch`
    Overlay { epoch: u64, action: OverlayAction },
    /// Completion of an outbound request
    Reply {
        ticket: Ticket,
        result: Result<DirectoryReply, SwitcherError>,
    },
    /// Stop the runtime
    Shutdown,
}

impl From<HostMessage> for SwitcherEvent {
    fn from(message: HostMessage) -> Self {
        match message {
            HostMessage::ToggleSwitcher => SwitcherEvent::Toggle,
        }
    }
}

impl From<KeyInput> for SwitcherEvent {
    fn from(key: KeyInput) -> Self {
        SwitcherEvent::Key(key)
    }
}
