//! Switcher session
//!
//! Lives from the moment the overlay starts opening until it closes. The tab
//! snapshot is taken once and only shrinks through local close operations.

use tabgrid_navigation::NavCommand;
use tabgrid_tabs::{TabDescriptor, TabId};

#[derive(Debug, Clone)]
pub struct SwitcherSession {
    /// Generation this session belongs to; replies tagged with another epoch
    /// are stale
    epoch: u64,
    tabs: Vec<TabDescriptor>,
    selected_index: usize,
    visible: bool,
}

impl SwitcherSession {
    /// A session that is still waiting for its tab snapshot
    pub fn loading(epoch: u64) -> Self {
        Self {
            epoch,
            tabs: Vec::new(),
            selected_index: 0,
            visible: false,
        }
    }

    /// Take the snapshot and select the active tab (or the first one)
    pub fn populate(&mut self, tabs: Vec<TabDescriptor>) {
        self.selected_index = tabs.iter().position(|t| t.is_active).unwrap_or(0);
        self.tabs = tabs;
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_tab(&self) -> Option<&TabDescriptor> {
        self.tabs.get(self.selected_index)
    }

    pub fn contains(&self, tab_id: &TabId) -> bool {
        self.tabs.iter().any(|t| &t.id == tab_id)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Move the selection. `columns` only matters for up/down.
    pub fn navigate(&mut self, command: NavCommand, columns: usize) -> usize {
        self.selected_index = command.apply(self.selected_index, self.tabs.len(), columns);
        self.selected_index
    }

    /// Drop a tab from the snapshot and re-derive the selection. Returns the
    /// index it had, or `None` if it was not in the snapshot.
    pub fn remove(&mut self, tab_id: &TabId) -> Option<usize> {
        let index = self.tabs.iter().position(|t| &t.id == tab_id)?;
        self.tabs.remove(index);

        if index <= self.selected_index && self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.clamp_selection();

        Some(index)
    }

    /// Nothing left to switch to
    pub fn too_small(&self) -> bool {
        self.tabs.len() <= 1
    }

    fn clamp_selection(&mut self) {
        self.selected_index = match self.tabs.len() {
            0 => 0,
            len => self.selected_index.min(len - 1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn session(count: usize, active: Option<usize>) -> SwitcherSession {
        let mut session = SwitcherSession::loading(1);
        session.populate(tabs(count, active));
        session
    }

    #[test]
    fn test_selects_active_tab() {
        assert_eq!(session(5, Some(3)).selected_index(), 3);
        assert_eq!(session(5, None).selected_index(), 0);
    }

    #[test]
    fn test_remove_before_selection_shifts_left() {
        let mut session = session(5, Some(3));

        assert_eq!(session.remove(&TabId::from("t1")), Some(1));
        assert_eq!(session.selected_index(), 2);
        assert_eq!(session.selected_tab().unwrap().id, TabId::from("t3"));
    }

    #[test]
    fn test_remove_selected_moves_to_previous() {
        let mut session = session(5, Some(3));

        session.remove(&TabId::from("t3"));
        assert_eq!(session.selected_index(), 2);
        assert_eq!(session.selected_tab().unwrap().id, TabId::from("t2"));
    }

    #[test]
    fn test_remove_selected_first_stays_at_zero() {
        let mut session = session(3, Some(0));

        session.remove(&TabId::from("t0"));
        assert_eq!(session.selected_index(), 0);
        assert_eq!(session.selected_tab().unwrap().id, TabId::from("t1"));
    }

    #[test]
    fn test_remove_after_selection_keeps_it() {
        let mut session = session(5, Some(1));

        session.remove(&TabId::from("t4"));
        assert_eq!(session.selected_index(), 1);
    }

    #[test]
    fn test_remove_unknown_tab() {
        let mut session = session(3, None);
        assert_eq!(session.remove(&TabId::from("nope")), None);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_selection_stays_in_bounds_after_any_removal() {
        for count in 1..8 {
            for selected in 0..count {
                for removed in 0..count {
                    let mut session = session(count, Some(selected));
                    session.remove(&TabId::from(format!("t{}", removed)));

                    if !session.is_empty() {
                        assert!(session.selected_index() < session.len());
                    }
                    assert_eq!(session.too_small(), session.len() <= 1);
                }
            }
        }
    }

    #[test]
    fn test_navigate() {
        let mut session = session(5, Some(0));
        assert_eq!(session.navigate(NavCommand::Down, 4), 4);
        assert_eq!(session.navigate(NavCommand::Down, 4), 0);
        assert_eq!(session.navigate(NavCommand::Previous, 4), 4);
    }
}
