//! Presenter trait

use crate::hooks::OverlayHooks;
use crate::presentation::Presentation;

/// Something that can draw the switcher.
///
/// Lifecycle per session: `mount` → any number of `render` → `unmount`.
/// `unmount` must release every resource and drop the hooks so nothing from
/// a finished session can call back into the controller.
pub trait Presenter {
    fn mount(&mut self, hooks: OverlayHooks);

    fn render(&mut self, presentation: &Presentation);

    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;
}
