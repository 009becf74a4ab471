//! TabGrid Tab Directory
//!
//! The directory owns the authoritative list of open tabs. The switcher only
//! ever talks to it through three requests:
//! - `ListTabs`: ordered snapshot of the focused window
//! - `ActivateTab`: focus a tab (and its window)
//! - `CloseTab`: remove a tab
//!
//! [`Background`] is the in-process stand-in for the privileged process that
//! answers those requests and routes the global toggle hotkey.

mod background;
mod descriptor;
mod directory;
mod error;
mod state;
mod store;
mod tab;
mod wire;

pub use background::{Background, HostMessage, TOGGLE_COMMAND};
pub use descriptor::TabDescriptor;
pub use directory::{DirectoryReply, DirectoryRequest, TabDirectory};
pub use error::TabError;
pub use state::TabState;
pub use store::TabStore;
pub use tab::{Tab, TabId, WindowId};
pub use wire::{LocalTransport, WireResponse};

pub type Result<T> = std::result::Result<T, TabError>;
