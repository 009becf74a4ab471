//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid grid layout: {0}")]
    InvalidLayout(String),
}
