//! TabGrid - Command-line host
//!
//! Runs the switcher against an in-process background service and draws the
//! overlay as text frames on stdout. Commands are read from stdin, one per
//! line: key names (`Tab`, `Shift+Tab`, `down`, `Enter`, ...), `toggle`,
//! `click N`, `close N`, `middle N`, `retry`, `width W`, `tabs` and `quit`.

mod cli;
mod commands;
mod state;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::Cli;
use commands::HostCommand;
use state::HostState;
use tabgrid_core::{
    Background, LocalTransport, SwitcherConfig, SwitcherRuntime, TabStore, TextPresenter,
    ViewportHandle,
};

pub async fn run() -> anyhow::Result<()> {
    // Initialize logging
    tabgrid_core::init_logging();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SwitcherConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => SwitcherConfig::default(),
    };

    let tabs = if cli.tabs.is_empty() {
        cli::default_tabs()
    } else {
        cli.tabs.iter().map(|raw| cli::parse_tab_arg(raw)).collect()
    };

    let store = TabStore::new();
    let tab_ids = HostState::seed(&store, &tabs)?;
    let background = Background::new(store);

    let viewport = ViewportHandle::new(cli.width);
    let presenter = TextPresenter::new(std::io::stdout());
    let gestures = presenter.gesture_handle();

    let mut runtime = SwitcherRuntime::new(
        presenter,
        Arc::new(LocalTransport::new(background.clone())),
        Arc::new(viewport.clone()),
        config,
    );
    let events = runtime.sender();

    // Every page of the window runs the switcher
    let host = runtime.attach_host();
    for tab_id in tab_ids {
        background.register_responder(tab_id, host.clone());
    }

    let task = tokio::spawn(runtime.run());
    let state = HostState::new(background, viewport, gestures, events);

    tracing::info!(tabs = tabs.len(), width = cli.width, "TabGrid started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut running = true;

    while running {
        let Some(line) = lines.next_line().await? else {
            // stdin closed
            state.execute(HostCommand::Quit)?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<HostCommand>() {
            Ok(command) => running = state.execute(command)?,
            Err(e) => tracing::warn!(input = %line.trim(), error = %e, "Unrecognized command"),
        }
    }

    let controller = task.await?;
    tracing::info!(state = %controller.state(), "TabGrid stopped");

    Ok(())
}
