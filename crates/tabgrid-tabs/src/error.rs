//! Tab directory error types

use thiserror::Error;

use crate::tab::{TabId, WindowId};

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Window not found: {0}")]
    WindowNotFound(WindowId),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
