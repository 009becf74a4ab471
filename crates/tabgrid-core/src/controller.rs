//! Switcher controller
//!
//! Owns the overlay state machine. The controller never waits on anything:
//! every directory request leaves through the outbox as an [`Outbound`] and
//! its completion comes back later as a [`SwitcherEvent::Reply`]. Discarding
//! a session bumps the epoch, which makes every reply and hook call issued
//! for the old session stale.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

use tabgrid_navigation::{KeyInput, SwitcherCommand};
use tabgrid_overlay::{OverlayHooks, Presentation, Presenter};
use tabgrid_tabs::{DirectoryReply, DirectoryRequest, TabDescriptor, TabError, TabId};

use crate::config::SwitcherConfig;
use crate::error::SwitcherError;
use crate::event::{OverlayAction, Outbound, SwitcherEvent, Ticket};
use crate::session::SwitcherSession;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitcherState {
    Hidden,
    Loading,
    Visible,
    Error,
}

impl SwitcherState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitcherState::Hidden => "hidden",
            SwitcherState::Loading => "loading",
            SwitcherState::Visible => "visible",
            SwitcherState::Error => "error",
        }
    }
}

impl std::fmt::Display for SwitcherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an in-flight request was for
#[derive(Debug, Clone)]
enum Pending {
    Load,
    Activate(TabId),
    Close(TabId),
}

pub struct SwitcherController<P: Presenter> {
    presenter: P,
    viewport: Arc<dyn Viewport>,
    config: SwitcherConfig,
    /// Where overlay hooks post their actions
    events: UnboundedSender<SwitcherEvent>,
    state: SwitcherState,
    session: Option<SwitcherSession>,
    epoch: u64,
    serial: u64,
    pending: HashMap<Ticket, Pending>,
    listening: bool,
    outbox: Vec<Outbound>,
}

impl<P: Presenter> SwitcherController<P> {
    pub fn new(
        presenter: P,
        viewport: Arc<dyn Viewport>,
        config: SwitcherConfig,
        events: UnboundedSender<SwitcherEvent>,
    ) -> Self {
        Self {
            presenter,
            viewport,
            config,
            events,
            state: SwitcherState::Hidden,
            session: None,
            epoch: 0,
            serial: 0,
            pending: HashMap::new(),
            listening: false,
            outbox: Vec::new(),
        }
    }

    /// Start accepting keyboard input
    pub fn init(&mut self) {
        self.listening = true;
        tracing::info!("Switcher controller initialized");
    }

    /// Stop accepting keyboard input and close anything that is open
    pub fn cleanup(&mut self) {
        self.listening = false;
        self.hide();
        tracing::info!("Switcher controller cleaned up");
    }

    /// Feed one event and collect the requests it produced
    pub fn handle(&mut self, event: SwitcherEvent) -> Vec<Outbound> {
        match event {
            SwitcherEvent::Toggle => self.toggle(),
            SwitcherEvent::Key(input) => {
                self.on_key(input);
            }
            SwitcherEvent::Overlay { epoch, action } => self.on_overlay(epoch, action),
            SwitcherEvent::Reply { ticket, result } => self.on_reply(ticket, result),
            SwitcherEvent::Shutdown => self.cleanup(),
        }

        self.take_outbound()
    }

    /// Requests queued since the last call
    pub fn take_outbound(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.outbox)
    }

    /// Open when hidden, force-close otherwise
    pub fn toggle(&mut self) {
        if self.state == SwitcherState::Hidden {
            self.open();
        } else {
            self.hide();
        }
    }

    /// Handle a key press. Returns whether the key was consumed.
    pub fn on_key(&mut self, input: KeyInput) -> bool {
        if !self.listening {
            return false;
        }

        let command = input.command();

        match self.state {
            SwitcherState::Visible => {
                tracing::trace!(key = %input, ?command, "Switcher key");
                self.apply(command);
                true
            }
            SwitcherState::Error if command == SwitcherCommand::Dismiss => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> SwitcherState {
        self.state
    }

    pub fn session(&self) -> Option<&SwitcherSession> {
        self.session.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn config(&self) -> &SwitcherConfig {
        &self.config
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Number of requests still awaiting a reply
    pub fn pending_requests(&self) -> usize {
        self.pending.len()
    }

    /// Grid width for the current viewport
    pub fn columns(&self) -> usize {
        self.config.columns.columns_for(self.viewport.width())
    }

    fn apply(&mut self, command: SwitcherCommand) {
        match command {
            SwitcherCommand::Navigate(nav) => {
                // Linear moves ignore the grid width
                let columns = if nav.is_vertical() { self.columns() } else { 1 };
                if let Some(session) = self.session.as_mut() {
                    session.navigate(nav, columns);
                }
                self.render();
            }
            SwitcherCommand::CloseSelected => {
                if let Some(tab_id) = self.selected_id() {
                    self.request_close(tab_id);
                }
            }
            SwitcherCommand::ActivateSelected => {
                if let Some(tab_id) = self.selected_id() {
                    self.request_activate(tab_id);
                }
            }
            SwitcherCommand::Dismiss => self.hide(),
        }
    }

    fn on_overlay(&mut self, epoch: u64, action: OverlayAction) {
        if epoch != self.epoch || self.session.is_none() {
            tracing::debug!(epoch, current = self.epoch, ?action, "Ignoring stale overlay action");
            return;
        }

        match (self.state, action) {
            (SwitcherState::Visible, OverlayAction::Activate(tab_id)) => {
                if self.session_contains(&tab_id) {
                    self.request_activate(tab_id);
                }
            }
            (SwitcherState::Visible, OverlayAction::Dismiss(tab_id)) => {
                if self.session_contains(&tab_id) {
                    self.request_close(tab_id);
                }
            }
            (SwitcherState::Visible | SwitcherState::Error, OverlayAction::DismissAll) => {
                self.hide()
            }
            (SwitcherState::Error, OverlayAction::Retry) => {
                tracing::info!("Retrying tab load");
                self.open();
            }
            (state, action) => {
                tracing::debug!(%state, ?action, "Overlay action ignored in this state");
            }
        }
    }

    fn on_reply(&mut self, ticket: Ticket, result: Result<DirectoryReply, SwitcherError>) {
        if ticket.epoch != self.epoch {
            tracing::debug!(epoch = ticket.epoch, serial = ticket.serial, "Ignoring late reply");
            return;
        }
        let Some(pending) = self.pending.remove(&ticket) else {
            tracing::debug!(serial = ticket.serial, "Ignoring reply with no pending request");
            return;
        };

        match pending {
            Pending::Load => self.on_tabs_loaded(result),
            Pending::Activate(tab_id) => {
                match result {
                    Ok(_) => tracing::info!(tab_id = %tab_id, "Switched tab"),
                    Err(e) => tracing::warn!(tab_id = %tab_id, error = %e, "Tab switch failed"),
                }
                self.hide();
            }
            Pending::Close(tab_id) => match result {
                Ok(DirectoryReply::Closed) => self.on_tab_closed(&tab_id),
                Ok(other) => {
                    tracing::warn!(tab_id = %tab_id, ?other, "Unexpected reply to close");
                    self.open();
                }
                Err(e) => {
                    tracing::warn!(tab_id = %tab_id, error = %e, "Tab close failed, reloading");
                    self.open();
                }
            },
        }
    }

    fn on_tabs_loaded(&mut self, result: Result<DirectoryReply, SwitcherError>) {
        let tabs = match result {
            Ok(DirectoryReply::Tabs(tabs)) => tabs,
            Ok(other) => {
                let e = TabError::Transport(format!("unexpected reply to tab list: {:?}", other));
                self.show_error(e.into());
                return;
            }
            Err(e) => {
                self.show_error(e);
                return;
            }
        };

        match tabs.len() {
            0 => self.show_error(SwitcherError::EmptyResult),
            1 => {
                tracing::debug!("Single tab, nothing to switch to");
                self.hide();
            }
            _ => self.show_grid(tabs),
        }
    }

    fn on_tab_closed(&mut self, tab_id: &TabId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.remove(tab_id).is_none() {
            return;
        }

        tracing::info!(tab_id = %tab_id, remaining = session.len(), "Closed tab");

        if session.too_small() {
            self.hide();
        } else {
            self.render();
        }
    }

    /// Tear down whatever is open and start loading a fresh snapshot
    fn open(&mut self) {
        self.discard_session();

        self.session = Some(SwitcherSession::loading(self.epoch));
        self.set_state(SwitcherState::Loading);
        self.request(DirectoryRequest::ListTabs, Pending::Load);
    }

    fn hide(&mut self) {
        self.discard_session();
        self.set_state(SwitcherState::Hidden);
    }

    fn discard_session(&mut self) {
        if self.presenter.is_mounted() {
            self.presenter.unmount();
        }
        self.session = None;
        self.pending.clear();
        self.epoch += 1;
    }

    fn show_grid(&mut self, tabs: Vec<TabDescriptor>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.populate(tabs);
        session.set_visible(true);

        tracing::info!(tabs = session.len(), selected = session.selected_index(), "Showing tabs");

        self.mount();
        self.set_state(SwitcherState::Visible);
        self.render();
    }

    fn show_error(&mut self, error: SwitcherError) {
        tracing::warn!(error = %error, "Tab load failed");

        if let Some(session) = self.session.as_mut() {
            session.set_visible(false);
        }

        self.mount();
        self.set_state(SwitcherState::Error);
        self.presenter.render(&Presentation::error(error.user_message()));
    }

    fn render(&mut self) {
        let Some(session) = self.session.as_ref().filter(|s| s.is_visible()) else {
            return;
        };

        let presentation = Presentation::grid(
            session.tabs(),
            session.selected_index(),
            self.columns(),
            &self.config.cards,
        );
        self.presenter.render(&presentation);
    }

    fn mount(&mut self) {
        if !self.presenter.is_mounted() {
            let hooks = overlay_hooks(&self.events, self.epoch);
            self.presenter.mount(hooks);
        }
    }

    fn request_activate(&mut self, tab_id: TabId) {
        self.request(
            DirectoryRequest::ActivateTab {
                tab_id: tab_id.clone(),
            },
            Pending::Activate(tab_id),
        );
    }

    fn request_close(&mut self, tab_id: TabId) {
        self.request(
            DirectoryRequest::CloseTab {
                tab_id: tab_id.clone(),
            },
            Pending::Close(tab_id),
        );
    }

    fn request(&mut self, request: DirectoryRequest, pending: Pending) {
        self.serial += 1;
        let ticket = Ticket {
            epoch: self.epoch,
            serial: self.serial,
        };

        tracing::debug!(
            command = request.command(),
            epoch = ticket.epoch,
            serial = ticket.serial,
            "Directory request"
        );

        self.pending.insert(ticket, pending);
        self.outbox.push(Outbound { ticket, request });
    }

    fn selected_id(&self) -> Option<TabId> {
        self.session
            .as_ref()
            .and_then(|s| s.selected_tab())
            .map(|t| t.id.clone())
    }

    fn session_contains(&self, tab_id: &TabId) -> bool {
        self.session.as_ref().is_some_and(|s| s.contains(tab_id))
    }

    fn set_state(&mut self, state: SwitcherState) {
        if self.state != state {
            tracing::debug!(from = %self.state, to = %state, epoch = self.epoch, "Switcher state");
            self.state = state;
        }
    }
}

/// Hooks for one session; each posts back into the event channel tagged with
/// the session's epoch
fn overlay_hooks(events: &UnboundedSender<SwitcherEvent>, epoch: u64) -> OverlayHooks {
    fn post(events: &UnboundedSender<SwitcherEvent>, epoch: u64, action: OverlayAction) {
        if events.send(SwitcherEvent::Overlay { epoch, action }).is_err() {
            tracing::debug!("Overlay action after controller shut down");
        }
    }

    let activate = events.clone();
    let dismiss = events.clone();
    let dismiss_all = events.clone();
    let retry = events.clone();

    OverlayHooks {
        on_item_activate: Box::new(move |id: TabId| post(&activate, epoch, OverlayAction::Activate(id))),
        on_item_dismiss: Box::new(move |id: TabId| post(&dismiss, epoch, OverlayAction::Dismiss(id))),
        on_dismiss_all: Box::new(move || post(&dismiss_all, epoch, OverlayAction::DismissAll)),
        on_retry: Box::new(move || post(&retry, epoch, OverlayAction::Retry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tabgrid_navigation::Key;
    use tabgrid_overlay::{Gesture, TextPresenter};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    use crate::viewport::{FixedViewport, ViewportHandle};

    type Controller = SwitcherController<TextPresenter<Vec<u8>>>;

    fn tabs(count: usize, active: Option<usize>) -> Vec<TabDescriptor> {
        (0..count)
            .map(|i| TabDescriptor {
                id: TabId::from(format!("t{}", i)),
                title: format!("Tab {}", i),
                url: format!("https://t{}.example", i),
                icon_ref: None,
                preview_ref: None,
                is_active: Some(i) == active,
                order: i,
            })
            .collect()
    }

    fn controller_with(
        viewport: Arc<dyn Viewport>,
    ) -> (Controller, UnboundedReceiver<SwitcherEvent>) {
        let (tx, rx) = unbounded_channel();
        let mut controller = SwitcherController::new(
            TextPresenter::new(Vec::new()),
            viewport,
            SwitcherConfig::default(),
            tx,
        );
        controller.init();
        (controller, rx)
    }

    fn controller() -> (Controller, UnboundedReceiver<SwitcherEvent>) {
        controller_with(Arc::new(FixedViewport(1000)))
    }

    fn reply(ticket: Ticket, result: Result<DirectoryReply, SwitcherError>) -> SwitcherEvent {
        SwitcherEvent::Reply { ticket, result }
    }

    /// Toggle and answer the tab list with `tabs`
    fn open_with(controller: &mut Controller, tabs: Vec<TabDescriptor>) {
        let out = controller.handle(SwitcherEvent::Toggle);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].request, DirectoryRequest::ListTabs);

        let out = controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Tabs(tabs))));
        assert!(out.is_empty());
    }

    fn key(controller: &mut Controller, key: Key) -> Vec<Outbound> {
        controller.handle(SwitcherEvent::Key(KeyInput::new(key)))
    }

    fn selected(controller: &Controller) -> usize {
        controller.session().unwrap().selected_index()
    }

    #[test]
    fn test_toggle_loads_and_shows_grid() {
        let (mut controller, _rx) = controller();
        assert_eq!(controller.state(), SwitcherState::Hidden);

        let out = controller.handle(SwitcherEvent::Toggle);
        assert_eq!(controller.state(), SwitcherState::Loading);
        assert!(!controller.presenter().is_mounted());
        assert!(!controller.session().unwrap().is_visible());

        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Tabs(tabs(5, Some(2))))));

        assert_eq!(controller.state(), SwitcherState::Visible);
        assert!(controller.presenter().is_mounted());
        assert!(controller.session().unwrap().is_visible());
        assert_eq!(selected(&controller), 2);
        assert!(controller.presenter().frame().unwrap().starts_with("Tabs 3/5"));
    }

    #[test]
    fn test_no_active_tab_selects_first() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, None));
        assert_eq!(selected(&controller), 0);
    }

    #[test]
    fn test_single_tab_hides_silently() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(1, Some(0)));

        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(controller.session().is_none());
        assert_eq!(controller.presenter().render_count(), 0);
    }

    #[test]
    fn test_empty_list_shows_error() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, Vec::new());

        assert_eq!(controller.state(), SwitcherState::Error);
        assert!(!controller.session().unwrap().is_visible());
        assert!(controller
            .presenter()
            .frame()
            .unwrap()
            .contains("No tabs available."));
    }

    #[test]
    fn test_load_timeout_shows_error() {
        let (mut controller, _rx) = controller();
        let out = controller.handle(SwitcherEvent::Toggle);

        controller.handle(reply(
            out[0].ticket,
            Err(SwitcherError::CommunicationTimeout(Duration::from_millis(2000))),
        ));

        assert_eq!(controller.state(), SwitcherState::Error);
        assert!(controller
            .presenter()
            .frame()
            .unwrap()
            .contains("Connection timeout. Please try again."));
    }

    #[test]
    fn test_grid_navigation_at_width_1000() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(5, Some(0)));

        key(&mut controller, Key::ArrowDown);
        assert_eq!(selected(&controller), 4);
        key(&mut controller, Key::ArrowDown);
        assert_eq!(selected(&controller), 0);
    }

    #[test]
    fn test_two_tabs_next_wraps() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(2, Some(0)));

        key(&mut controller, Key::Tab);
        assert_eq!(selected(&controller), 1);
        key(&mut controller, Key::Tab);
        assert_eq!(selected(&controller), 0);

        controller.handle(SwitcherEvent::Key(KeyInput::shifted(Key::Tab)));
        assert_eq!(selected(&controller), 1);
    }

    #[test]
    fn test_columns_follow_viewport_resize() {
        let viewport = ViewportHandle::new(800);
        let (mut controller, _rx) = controller_with(Arc::new(viewport.clone()));
        open_with(&mut controller, tabs(12, Some(0)));

        key(&mut controller, Key::ArrowDown);
        assert_eq!(selected(&controller), 3);

        viewport.set_width(1400);
        key(&mut controller, Key::ArrowDown);
        assert_eq!(selected(&controller), 8);
    }

    #[test]
    fn test_keys_ignored_unless_visible_and_listening() {
        let (mut controller, _rx) = controller();
        assert!(!controller.on_key(KeyInput::new(Key::Tab)));

        controller.handle(SwitcherEvent::Toggle);
        assert!(!controller.on_key(KeyInput::new(Key::Enter)));
        assert_eq!(controller.take_outbound().len(), 0);

        let (tx, _rx) = unbounded_channel();
        let mut uninitialized = SwitcherController::new(
            TextPresenter::new(Vec::new()),
            Arc::new(FixedViewport(1000)),
            SwitcherConfig::default(),
            tx,
        );
        let out = uninitialized.handle(SwitcherEvent::Toggle);
        uninitialized.handle(reply(out[0].ticket, Ok(DirectoryReply::Tabs(tabs(3, None)))));
        assert_eq!(uninitialized.state(), SwitcherState::Visible);
        assert!(!uninitialized.on_key(KeyInput::new(Key::Tab)));
    }

    #[test]
    fn test_escape_dismisses_and_drops_hooks() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));
        let handle = controller.presenter().gesture_handle();

        assert!(controller.on_key(KeyInput::new(Key::Escape)));

        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(!controller.presenter().is_mounted());
        assert!(controller.presenter().frame().is_none());
        assert!(!handle.gesture(Gesture::Click(TabId::from("t1"))));
    }

    #[test]
    fn test_enter_activates_then_hides_on_reply() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(4, Some(0)));
        key(&mut controller, Key::ArrowRight);

        let out = key(&mut controller, Key::Enter);
        assert_eq!(
            out[0].request,
            DirectoryRequest::ActivateTab {
                tab_id: TabId::from("t1")
            }
        );
        assert_eq!(controller.state(), SwitcherState::Visible);

        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Activated)));
        assert_eq!(controller.state(), SwitcherState::Hidden);
    }

    #[test]
    fn test_failed_activation_still_hides() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(4, Some(0)));

        let out = key(&mut controller, Key::Enter);
        controller.handle(reply(
            out[0].ticket,
            Err(TabError::Rejected("No tab with id".to_string()).into()),
        ));

        assert_eq!(controller.state(), SwitcherState::Hidden);
    }

    #[test]
    fn test_delete_removes_after_confirmation() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(5, Some(3)));

        let out = key(&mut controller, Key::Delete);
        assert_eq!(
            out[0].request,
            DirectoryRequest::CloseTab {
                tab_id: TabId::from("t3")
            }
        );
        assert_eq!(controller.session().unwrap().len(), 5);

        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Closed)));

        let session = controller.session().unwrap();
        assert_eq!(session.len(), 4);
        assert_eq!(session.selected_index(), 2);
        assert_eq!(controller.state(), SwitcherState::Visible);
        assert!(controller.presenter().frame().unwrap().starts_with("Tabs 3/4"));
    }

    #[test]
    fn test_close_down_to_one_tab_hides() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(2, Some(0)));

        let out = key(&mut controller, Key::Delete);
        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Closed)));

        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(!controller.presenter().is_mounted());
    }

    #[test]
    fn test_close_failure_restarts_session() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));
        let first_epoch = controller.session().unwrap().epoch();

        let out = key(&mut controller, Key::Delete);
        let out = controller.handle(reply(
            out[0].ticket,
            Err(SwitcherError::CommunicationTimeout(Duration::from_millis(2000))),
        ));

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].request, DirectoryRequest::ListTabs);
        assert_eq!(controller.state(), SwitcherState::Loading);
        assert!(controller.session().unwrap().epoch() > first_epoch);
        assert!(!controller.presenter().is_mounted());
    }

    #[test]
    fn test_rejected_close_restarts_session() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));

        let out = key(&mut controller, Key::Delete);
        let out = controller.handle(reply(
            out[0].ticket,
            Err(TabError::Rejected("Tab is pinned".to_string()).into()),
        ));

        assert_eq!(out[0].request, DirectoryRequest::ListTabs);
        assert_eq!(controller.state(), SwitcherState::Loading);
    }

    #[test]
    fn test_late_reply_after_toggle_is_ignored() {
        let (mut controller, _rx) = controller();
        let first = controller.handle(SwitcherEvent::Toggle);

        // Second toggle while loading hides immediately
        controller.handle(SwitcherEvent::Toggle);
        assert_eq!(controller.state(), SwitcherState::Hidden);

        controller.handle(reply(first[0].ticket, Ok(DirectoryReply::Tabs(tabs(4, Some(0))))));

        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(controller.session().is_none());
        assert_eq!(controller.presenter().render_count(), 0);
    }

    #[test]
    fn test_reply_from_previous_session_is_ignored() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));

        let close = key(&mut controller, Key::Delete);
        controller.handle(SwitcherEvent::Toggle);
        let reload = controller.handle(SwitcherEvent::Toggle);
        controller.handle(reply(reload[0].ticket, Ok(DirectoryReply::Tabs(tabs(3, Some(0))))));

        controller.handle(reply(close[0].ticket, Ok(DirectoryReply::Closed)));

        assert_eq!(controller.session().unwrap().len(), 3);
    }

    #[test]
    fn test_dismiss_gesture_closes_that_tab_only() {
        let (mut controller, mut rx) = controller();
        open_with(&mut controller, tabs(4, Some(0)));

        let handle = controller.presenter().gesture_handle();
        assert!(handle.gesture(Gesture::ClickDismissControl(TabId::from("t2"))));

        let event = rx.try_recv().unwrap();
        assert!(rx.try_recv().is_err());

        let out = controller.handle(event);
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].request,
            DirectoryRequest::CloseTab {
                tab_id: TabId::from("t2")
            }
        );

        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Closed)));
        assert_eq!(controller.session().unwrap().len(), 3);
        assert_eq!(selected(&controller), 0);
    }

    #[test]
    fn test_click_activates() {
        let (mut controller, mut rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));

        controller
            .presenter()
            .gesture(Gesture::Click(TabId::from("t2")));
        let out = controller.handle(rx.try_recv().unwrap());

        assert_eq!(
            out[0].request,
            DirectoryRequest::ActivateTab {
                tab_id: TabId::from("t2")
            }
        );
    }

    #[test]
    fn test_stale_hook_is_ignored() {
        let (mut controller, mut rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));
        controller.presenter().gesture(Gesture::Click(TabId::from("t1")));
        let stale = rx.try_recv().unwrap();

        controller.handle(SwitcherEvent::Toggle);
        open_with(&mut controller, tabs(3, Some(0)));

        assert!(controller.handle(stale).is_empty());
        assert_eq!(controller.state(), SwitcherState::Visible);
    }

    #[test]
    fn test_retry_from_error() {
        let (mut controller, mut rx) = controller();
        open_with(&mut controller, Vec::new());

        controller.presenter().gesture(Gesture::Retry);
        let out = controller.handle(rx.try_recv().unwrap());

        assert_eq!(out[0].request, DirectoryRequest::ListTabs);
        assert_eq!(controller.state(), SwitcherState::Loading);

        controller.handle(reply(out[0].ticket, Ok(DirectoryReply::Tabs(tabs(2, Some(1))))));
        assert_eq!(controller.state(), SwitcherState::Visible);
    }

    #[test]
    fn test_error_only_accepts_escape() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, Vec::new());

        assert!(!controller.on_key(KeyInput::new(Key::Tab)));
        assert_eq!(controller.state(), SwitcherState::Error);

        assert!(controller.on_key(KeyInput::new(Key::Escape)));
        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(!controller.presenter().is_mounted());
    }

    #[test]
    fn test_cleanup_hides_and_stops_listening() {
        let (mut controller, _rx) = controller();
        open_with(&mut controller, tabs(3, Some(0)));

        controller.handle(SwitcherEvent::Shutdown);

        assert_eq!(controller.state(), SwitcherState::Hidden);
        assert!(!controller.is_listening());
        assert_eq!(controller.pending_requests(), 0);
    }
}
