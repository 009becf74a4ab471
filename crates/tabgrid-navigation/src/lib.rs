//! TabGrid Navigation
//!
//! Selection arithmetic over the switcher grid:
//! - `next` / `previous`: linear, wrapping over the whole list
//! - `down` / `up`: one row at a time, wrapping to the first / last row
//!
//! The column count comes from the viewport width through
//! [`ColumnBreakpoints`] and is looked up again on every vertical move.

mod command;
mod error;
mod grid;
mod keys;

pub use command::{NavCommand, SwitcherCommand};
pub use error::NavigationError;
pub use grid::{down, next, previous, up, ColumnBreakpoints};
pub use keys::{Key, KeyInput};

pub type Result<T> = std::result::Result<T, NavigationError>;
