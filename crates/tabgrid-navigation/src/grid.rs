//! Grid geometry and selection moves
//!
//! All moves are no-ops on lists of 0 or 1 items and always return an index
//! inside `0..len` otherwise.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::Result;

/// Width thresholds that decide how many cards fit on a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnBreakpoints {
    /// Widths below this use `narrow_columns`
    pub narrow_below: u32,
    /// Widths below this (and not narrow) use `medium_columns`
    pub medium_below: u32,
    pub narrow_columns: usize,
    pub medium_columns: usize,
    pub wide_columns: usize,
}

impl ColumnBreakpoints {
    /// Column count for a viewport width
    pub fn columns_for(&self, width: u32) -> usize {
        if width < self.narrow_below {
            self.narrow_columns
        } else if width < self.medium_below {
            self.medium_columns
        } else {
            self.wide_columns
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.narrow_below >= self.medium_below {
            return Err(NavigationError::InvalidLayout(format!(
                "breakpoints must increase ({} >= {})",
                self.narrow_below, self.medium_below
            )));
        }

        if [self.narrow_columns, self.medium_columns, self.wide_columns].contains(&0) {
            return Err(NavigationError::InvalidLayout(
                "column counts must be at least 1".to_string(),
            ));
        }

        if self.narrow_columns > self.medium_columns || self.medium_columns > self.wide_columns {
            return Err(NavigationError::InvalidLayout(
                "column counts must not shrink as the width grows".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ColumnBreakpoints {
    fn default() -> Self {
        Self {
            narrow_below: 900,
            medium_below: 1200,
            narrow_columns: 3,
            medium_columns: 4,
            wide_columns: 5,
        }
    }
}

/// Forward one item, wrapping to the start
pub fn next(selected: usize, len: usize) -> usize {
    if len <= 1 {
        return selected;
    }
    (selected + 1) % len
}

/// Back one item, wrapping to the end
pub fn previous(selected: usize, len: usize) -> usize {
    if len <= 1 {
        return selected;
    }
    (selected % len + len - 1) % len
}

/// Down one row. Past the last row, jumps to the same column of the first
/// row, clamped to the last index when that column does not exist.
pub fn down(selected: usize, len: usize, columns: usize) -> usize {
    if len <= 1 {
        return selected;
    }
    let columns = columns.max(1);

    let candidate = selected.saturating_add(columns);
    let target = if candidate >= len {
        (selected % columns).min(len - 1)
    } else {
        candidate
    };

    target.min(len - 1)
}

/// Up one row. Above the first row, jumps to the same column of the last
/// row, clamped to the last index when the last row is short.
pub fn up(selected: usize, len: usize, columns: usize) -> usize {
    if len <= 1 {
        return selected;
    }
    let columns = columns.max(1);

    let target = match selected.checked_sub(columns) {
        Some(candidate) => candidate,
        None => {
            let last_row_start = ((len - 1) / columns) * columns;
            (last_row_start + selected % columns).min(len - 1)
        }
    };

    target.min(len - 1)
}
