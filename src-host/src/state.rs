//! Host state: the simulated browser window and the switcher's inputs
use anyhow::{Context, Result};
use tokio::sync::mpsc::UnboundedSender;

use tabgrid_core::{
    Background, Gesture, GestureHandle, SwitcherEvent, TabDescriptor, TabId, TabStore,
    ViewportHandle, TOGGLE_COMMAND,
};

use crate::cli::TabSeed;
use crate::commands::HostCommand;

pub struct HostState {
    background: Background,
    viewport: ViewportHandle,
    gestures: GestureHandle,
    events: UnboundedSender<SwitcherEvent>,
}

impl HostState {
    pub fn new(
        background: Background,
        viewport: ViewportHandle,
        gestures: GestureHandle,
        events: UnboundedSender<SwitcherEvent>,
    ) -> Self {
        Self {
            background,
            viewport,
            gestures,
            events,
        }
    }

    /// Open one window holding `tabs`
    pub fn seed(store: &TabStore, tabs: &[TabSeed]) -> Result<Vec<TabId>> {
        let window = store.open_window();
        let mut ids = Vec::with_capacity(tabs.len());

        for seed in tabs {
            let tab = store
                .open_tab(window, seed.url.clone(), seed.title.clone())
                .with_context(|| format!("cannot open tab {}", seed.url))?;
            if seed.icon.is_some() {
                store.set_tab_favicon(&tab.id, seed.icon.clone())?;
            }
            if seed.preview.is_some() {
                store.set_tab_snapshot(&tab.id, seed.preview.clone())?;
            }
            ids.push(tab.id);
        }

        Ok(ids)
    }

    /// Run one command. Returns `false` once the host should stop.
    pub fn execute(&self, command: HostCommand) -> Result<bool> {
        match command {
            HostCommand::Key(input) => self.send(SwitcherEvent::Key(input))?,
            HostCommand::Toggle => {
                if !self.background.on_command(TOGGLE_COMMAND) {
                    tracing::info!("Toggle dropped, no page is listening");
                }
            }
            HostCommand::Click(n) => self.gesture(n, Gesture::Click),
            HostCommand::Close(n) => self.gesture(n, Gesture::ClickDismissControl),
            HostCommand::Middle(n) => self.gesture(n, Gesture::AuxClick),
            HostCommand::Retry => {
                self.gestures.gesture(Gesture::Retry);
            }
            HostCommand::Width(width) => {
                self.viewport.set_width(width);
                tracing::info!(width, "Viewport resized");
            }
            HostCommand::List => {
                for tab in self.window_tabs() {
                    let marker = if tab.is_active { '*' } else { ' ' };
                    println!("{} {}. {} <{}>", marker, tab.order + 1, tab.title, tab.url);
                }
            }
            HostCommand::Quit => {
                self.send(SwitcherEvent::Shutdown)?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn gesture(&self, card: usize, gesture: impl FnOnce(TabId) -> Gesture) {
        match self.window_tabs().into_iter().nth(card - 1) {
            Some(tab) => {
                self.gestures.gesture(gesture(tab.id));
            }
            None => tracing::info!(card, "No such card"),
        }
    }

    fn window_tabs(&self) -> Vec<TabDescriptor> {
        let store = self.background.store();
        store
            .focused_window()
            .and_then(|window| store.describe_window(window).ok())
            .unwrap_or_default()
    }

    fn send(&self, event: SwitcherEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| anyhow::anyhow!("switcher runtime has stopped"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_tab_arg;
    use tabgrid_core::{Key, KeyInput, TextPresenter};
    use tokio::sync::mpsc::unbounded_channel;

    fn state() -> (HostState, tokio::sync::mpsc::UnboundedReceiver<SwitcherEvent>, Vec<TabId>) {
        let store = TabStore::new();
        let ids = HostState::seed(
            &store,
            &[
                parse_tab_arg("A|https://a.example|https://a.example/icon.png"),
                parse_tab_arg("B|https://b.example"),
            ],
        )
        .unwrap();

        let (tx, rx) = unbounded_channel();
        let presenter = TextPresenter::new(Vec::new());
        let state = HostState::new(
            Background::new(store),
            ViewportHandle::new(1280),
            presenter.gesture_handle(),
            tx,
        );
        (state, rx, ids)
    }

    #[test]
    fn test_seed_rejects_bad_url() {
        let store = TabStore::new();
        assert!(HostState::seed(&store, &[parse_tab_arg("X|not a url")]).is_err());
    }

    #[test]
    fn test_seed_carries_icon() {
        let (state, _rx, ids) = state();
        let tabs = state.window_tabs();

        assert_eq!(tabs[0].id, ids[0]);
        assert_eq!(tabs[0].icon_ref.as_deref(), Some("https://a.example/icon.png"));
        assert!(tabs[1].icon_ref.is_none());
    }

    #[test]
    fn test_keys_reach_the_runtime() {
        let (state, mut rx, _) = state();

        assert!(state.execute(HostCommand::Key(KeyInput::new(Key::Enter))).unwrap());

        assert!(matches!(rx.try_recv(), Ok(SwitcherEvent::Key(k)) if k.key == Key::Enter));
    }

    #[test]
    fn test_toggle_routes_to_registered_page() {
        let (state, _rx, ids) = state();
        let (host_tx, mut host_rx) = unbounded_channel();
        state.background.register_responder(ids[0].clone(), host_tx);

        state.execute(HostCommand::Toggle).unwrap();

        assert!(host_rx.try_recv().is_ok());
    }

    #[test]
    fn test_quit_stops() {
        let (state, mut rx, _) = state();

        assert!(!state.execute(HostCommand::Quit).unwrap());
        assert!(matches!(rx.try_recv(), Ok(SwitcherEvent::Shutdown)));
    }

    #[test]
    fn test_gesture_without_overlay_is_dropped() {
        let (state, mut rx, _) = state();

        state.execute(HostCommand::Click(1)).unwrap();
        state.execute(HostCommand::Click(9)).unwrap();

        assert!(rx.try_recv().is_err());
    }
}
