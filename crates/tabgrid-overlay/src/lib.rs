//! TabGrid Overlay
//!
//! Rendering contract between the switcher controller and whatever draws the
//! grid. The controller mounts a [`Presenter`] with an [`OverlayHooks`]
//! capability struct, hands it [`Presentation`]s, and unmounts it when the
//! session ends. Presenters never hold on to hooks after unmount.

mod card;
mod gesture;
mod hooks;
mod presentation;
mod presenter;
mod text;
mod truncate;

pub use card::{CardLimits, TabCard};
pub use gesture::Gesture;
pub use hooks::OverlayHooks;
pub use presentation::Presentation;
pub use presenter::Presenter;
pub use text::{GestureHandle, TextPresenter};
pub use truncate::{truncate, ELLIPSIS};
