use tracing::debug;

use crate::models::AboutTab;

/// Which about-page section is showing and which team bio is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutState {
    selected_tab: AboutTab,
    expanded_member: Option<usize>,
}

impl AboutState {
    pub fn selected_tab(&self) -> AboutTab {
        self.selected_tab
    }

    pub fn expanded_member(&self) -> Option<usize> {
        self.expanded_member
    }

    pub fn select_tab(&mut self, tab: AboutTab) {
        self.selected_tab = tab;
    }

    pub fn cycle_tab(&mut self, offset: isize) {
        let len = AboutTab::ALL.len() as isize;
        let idx = (self.selected_tab.index() as isize + offset).rem_euclid(len);
        self.select_tab(AboutTab::ALL[idx as usize]);
    }

    /// Expand a team member's bio, or collapse it when it is already open.
    /// At most one bio is open at a time; indexes past `team_len` are ignored.
    pub fn toggle_member(&mut self, index: usize, team_len: usize) {
        if index >= team_len {
            return;
        }
        self.expanded_member = if self.expanded_member == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(expanded = ?self.expanded_member, "team member toggled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mission_with_nothing_expanded() {
        let about = AboutState::default();
        assert_eq!(about.selected_tab(), AboutTab::Mission);
        assert_eq!(about.expanded_member(), None);
    }

    #[test]
    fn toggle_member_expands_one_at_a_time() {
        let mut about = AboutState::default();
        about.toggle_member(1, 4);
        assert_eq!(about.expanded_member(), Some(1));
        about.toggle_member(2, 4);
        assert_eq!(about.expanded_member(), Some(2));
        about.toggle_member(2, 4);
        assert_eq!(about.expanded_member(), None);
    }

    #[test]
    fn out_of_range_member_is_ignored() {
        let mut about = AboutState::default();
        about.toggle_member(0, 4);
        about.toggle_member(9, 4);
        assert_eq!(about.expanded_member(), Some(0));
    }

    #[test]
    fn tabs_cycle_in_order() {
        let mut about = AboutState::default();
        about.cycle_tab(1);
        assert_eq!(about.selected_tab(), AboutTab::Values);
        about.cycle_tab(-2);
        assert_eq!(about.selected_tab(), AboutTab::Impact);
    }
}
