//! Switcher commands produced by keyboard input

use serde::{Deserialize, Serialize};

use crate::grid;

/// A selection move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavCommand {
    Next,
    Previous,
    Up,
    Down,
}

impl NavCommand {
    /// Whether this move depends on the grid column count
    pub fn is_vertical(&self) -> bool {
        matches!(self, NavCommand::Up | NavCommand::Down)
    }

    /// Apply the move. `columns` is only consulted by vertical moves.
    pub fn apply(&self, selected: usize, len: usize, columns: usize) -> usize {
        match self {
            NavCommand::Next => grid::next(selected, len),
            NavCommand::Previous => grid::previous(selected, len),
            NavCommand::Down => grid::down(selected, len, columns),
            NavCommand::Up => grid::up(selected, len, columns),
        }
    }
}

/// Everything the keyboard can ask of a visible switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitcherCommand {
    Navigate(NavCommand),
    CloseSelected,
    ActivateSelected,
    Dismiss,
}
