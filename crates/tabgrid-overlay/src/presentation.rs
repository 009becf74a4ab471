//! What the overlay is asked to show

use tabgrid_tabs::TabDescriptor;

use crate::card::{CardLimits, TabCard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Tab grid with exactly one selected card
    Grid {
        cards: Vec<TabCard>,
        selected_index: usize,
        columns: usize,
    },
    /// Failure message with a retry affordance
    Error { message: String },
}

impl Presentation {
    pub fn grid(
        tabs: &[TabDescriptor],
        selected_index: usize,
        columns: usize,
        limits: &CardLimits,
    ) -> Self {
        let cards = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabCard::new(tab, index == selected_index, limits))
            .collect();

        Presentation::Grid {
            cards,
            selected_index,
            columns: columns.max(1),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Presentation::Error {
            message: message.into(),
        }
    }

    pub fn selected_card(&self) -> Option<&TabCard> {
        match self {
            Presentation::Grid {
                cards,
                selected_index,
                ..
            } => cards.get(*selected_index),
            Presentation::Error { .. } => None,
        }
    }
}
