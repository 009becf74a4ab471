//! Plain-text presenter
//!
//! Draws each presentation as a text frame, one line per grid row:
//!
//! ```text
//! Tabs 2/5
//! [ Inbox ] [>Docs<] [ News ] [ Maps ]
//! [ Music ]
//! ```

use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

use crate::gesture::Gesture;
use crate::hooks::OverlayHooks;
use crate::presentation::Presentation;
use crate::presenter::Presenter;

type HookSlot = Arc<RwLock<Option<OverlayHooks>>>;

pub struct TextPresenter<W: Write> {
    out: W,
    hooks: HookSlot,
    frame: Option<String>,
    renders: usize,
}

/// Input side of a [`TextPresenter`], usable from another task while the
/// presenter itself is owned by the controller
#[derive(Clone)]
pub struct GestureHandle {
    hooks: HookSlot,
}

impl GestureHandle {
    /// Deliver a user gesture. Dropped when nothing is mounted.
    pub fn gesture(&self, gesture: Gesture) -> bool {
        match self.hooks.read().as_ref() {
            Some(hooks) => {
                hooks.dispatch(gesture);
                true
            }
            None => {
                tracing::debug!(?gesture, "Gesture with no mounted overlay");
                false
            }
        }
    }
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            hooks: Arc::new(RwLock::new(None)),
            frame: None,
            renders: 0,
        }
    }

    /// Frame currently on screen, if mounted
    pub fn frame(&self) -> Option<&str> {
        self.frame.as_deref()
    }

    /// Number of frames drawn since creation
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn gesture_handle(&self) -> GestureHandle {
        GestureHandle {
            hooks: Arc::clone(&self.hooks),
        }
    }

    pub fn gesture(&self, gesture: Gesture) -> bool {
        self.gesture_handle().gesture(gesture)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(presentation: &Presentation) -> String {
        match presentation {
            Presentation::Grid {
                cards,
                selected_index,
                columns,
            } => {
                let mut lines = vec![format!("Tabs {}/{}", selected_index + 1, cards.len())];
                for row in cards.chunks((*columns).max(1)) {
                    let cells: Vec<String> = row
                        .iter()
                        .map(|card| {
                            if card.selected {
                                format!("[>{}<]", card.title)
                            } else {
                                format!("[ {} ]", card.title)
                            }
                        })
                        .collect();
                    lines.push(cells.join(" "));
                }
                lines.join("\n")
            }
            Presentation::Error { message } => format!("! {}\n[ Retry ]", message),
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn mount(&mut self, hooks: OverlayHooks) {
        *self.hooks.write() = Some(hooks);
    }

    fn render(&mut self, presentation: &Presentation) {
        let frame = Self::draw(presentation);

        if let Err(e) = writeln!(self.out, "{}\n", frame) {
            tracing::warn!(error = %e, "Failed to write overlay frame");
        }

        self.frame = Some(frame);
        self.renders += 1;
    }

    fn unmount(&mut self) {
        self.hooks.write().take();
        self.frame = None;
        let _ = self.out.flush();
    }

    fn is_mounted(&self) -> bool {
        self.hooks.read().is_some()
    }
}
