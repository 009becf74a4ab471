//! Switcher runtime
//!
//! A tokio event loop around one [`SwitcherController`]. Keys, overlay
//! actions, host toggles and directory replies all arrive on the same
//! channel; every outbound request runs in its own task under the configured
//! timeout and posts its completion back to that channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use tabgrid_overlay::Presenter;
use tabgrid_tabs::{HostMessage, TabDirectory};

use crate::config::SwitcherConfig;
use crate::controller::SwitcherController;
use crate::error::SwitcherError;
use crate::event::{Outbound, SwitcherEvent};
use crate::viewport::Viewport;

pub struct SwitcherRuntime<P: Presenter> {
    controller: SwitcherController<P>,
    directory: Arc<dyn TabDirectory>,
    timeout: Duration,
    events_tx: UnboundedSender<SwitcherEvent>,
    events_rx: UnboundedReceiver<SwitcherEvent>,
    host_rx: Option<UnboundedReceiver<HostMessage>>,
}

impl<P: Presenter> SwitcherRuntime<P> {
    pub fn new(
        presenter: P,
        directory: Arc<dyn TabDirectory>,
        viewport: Arc<dyn Viewport>,
        config: SwitcherConfig,
    ) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        let timeout = config.request_timeout();
        let controller = SwitcherController::new(presenter, viewport, config, events_tx.clone());

        Self {
            controller,
            directory,
            timeout,
            events_tx,
            events_rx,
            host_rx: None,
        }
    }

    /// Channel for keys, toggles and shutdown
    pub fn sender(&self) -> UnboundedSender<SwitcherEvent> {
        self.events_tx.clone()
    }

    /// Channel a background service can register as this page's responder
    pub fn attach_host(&mut self) -> UnboundedSender<HostMessage> {
        let (tx, rx) = unbounded_channel();
        self.host_rx = Some(rx);
        tx
    }

    pub fn controller(&self) -> &SwitcherController<P> {
        &self.controller
    }

    /// Process events until shutdown. Hands the controller back afterwards.
    pub async fn run(mut self) -> SwitcherController<P> {
        self.controller.init();

        while let Some(event) = self.next_event().await {
            let shutdown = matches!(event, SwitcherEvent::Shutdown);

            for outbound in self.controller.handle(event) {
                self.spawn_request(outbound);
            }

            if shutdown {
                break;
            }
        }

        if self.controller.is_listening() {
            self.controller.cleanup();
        }

        tracing::info!("Switcher runtime stopped");
        self.controller
    }

    async fn next_event(&mut self) -> Option<SwitcherEvent> {
        loop {
            let Some(host) = self.host_rx.as_mut() else {
                return self.events_rx.recv().await;
            };

            tokio::select! {
                event = self.events_rx.recv() => return event,
                message = host.recv() => {
                    if let Some(message) = message {
                        return Some(message.into());
                    }
                    tracing::debug!("Host channel closed");
                }
            }

            self.host_rx = None;
        }
    }

    fn spawn_request(&self, outbound: Outbound) {
        let directory = Arc::clone(&self.directory);
        let events = self.events_tx.clone();
        let limit = self.timeout;

        tokio::spawn(async move {
            let Outbound { ticket, request } = outbound;

            let result = match tokio::time::timeout(limit, request.dispatch(directory.as_ref())).await
            {
                Ok(Ok(reply)) => Ok(reply),
                Ok(Err(e)) => Err(SwitcherError::CommunicationFailure(e)),
                Err(_) => {
                    tracing::warn!(
                        command = request.command(),
                        serial = ticket.serial,
                        "Directory request timed out"
                    );
                    Err(SwitcherError::CommunicationTimeout(limit))
                }
            };

            if events.send(SwitcherEvent::Reply { ticket, result }).is_err() {
                tracing::debug!(serial = ticket.serial, "Reply after runtime stopped");
            }
        });
    }
}
