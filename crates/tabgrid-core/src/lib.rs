//! TabGrid Core
//!
//! The switcher controller and everything it needs to run: configuration,
//! the per-open session, the viewport signal and the tokio event loop that
//! connects keyboard input, overlay gestures and the tab directory.

mod config;
mod controller;
mod error;
mod event;
mod runtime;
mod session;
mod viewport;

pub use config::SwitcherConfig;
pub use controller::{SwitcherController, SwitcherState};
pub use error::SwitcherError;
pub use event::{OverlayAction, Outbound, SwitcherEvent, Ticket};
pub use runtime::SwitcherRuntime;
pub use session::SwitcherSession;
pub use viewport::{FixedViewport, Viewport, ViewportHandle};

// Re-export the pieces hosts wire together
pub use tabgrid_navigation::{ColumnBreakpoints, Key, KeyInput, NavCommand, SwitcherCommand};
pub use tabgrid_overlay::{
    CardLimits, Gesture, GestureHandle, OverlayHooks, Presentation, Presenter, TextPresenter,
};
pub use tabgrid_tabs::{
    Background, DirectoryReply, DirectoryRequest, HostMessage, LocalTransport, TabDescriptor,
    TabDirectory, TabError, TabId, TabStore, TOGGLE_COMMAND,
};

pub type Result<T> = std::result::Result<T, SwitcherError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
