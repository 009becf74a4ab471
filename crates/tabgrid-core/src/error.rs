//! Switcher error types

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitcherError {
    #[error("No response within {0:?}")]
    CommunicationTimeout(Duration),

    #[error("Communication failure: {0}")]
    CommunicationFailure(#[from] tabgrid_tabs::TabError),

    #[error("Directory returned no tabs")]
    EmptyResult,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwitcherError {
    /// Message shown on the error overlay
    pub fn user_message(&self) -> &'static str {
        match self {
            SwitcherError::CommunicationTimeout(_) => "Connection timeout. Please try again.",
            SwitcherError::EmptyResult => "No tabs available.",
            _ => "Failed to load tabs. Please try again.",
        }
    }
}
