use tracing::{debug, warn};

use crate::models::View;

use super::chrome::UiChromeState;

/// The single active page. There is no history: going "back" is the job of
/// whatever routes actions into this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active_view: View,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Activate `view`. Completing a navigation always closes the mobile menu.
    pub fn navigate(&mut self, view: View, chrome: &mut UiChromeState) {
        self.active_view = view;
        chrome.close_mobile_menu();
        debug!(view = view.id(), "navigated");
    }

    /// Navigate by identifier or route path. Unknown targets are ignored and
    /// leave both the view and the menu untouched.
    pub fn navigate_to(&mut self, requested: &str, chrome: &mut UiChromeState) -> bool {
        match View::parse(requested) {
            Some(view) => {
                self.navigate(view, chrome);
                true
            }
            None => {
                warn!(requested, "ignoring navigation to unknown view");
                false
            }
        }
    }

    /// Step through the navigation bar, wrapping at both ends.
    pub fn cycle(&mut self, offset: isize, chrome: &mut UiChromeState) {
        let len = View::ALL.len() as isize;
        let idx = (self.active_view.index() as isize + offset).rem_euclid(len);
        self.navigate(View::ALL[idx as usize], chrome);
    }

    pub fn next(&mut self, chrome: &mut UiChromeState) {
        self.cycle(1, chrome);
    }

    pub fn previous(&mut self, chrome: &mut UiChromeState) {
        self.cycle(-1, chrome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        assert_eq!(NavigationState::new().active_view(), View::Home);
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let mut nav = NavigationState::new();
        let mut chrome = UiChromeState::new();
        chrome.toggle_mobile_menu();

        assert!(nav.navigate_to("about", &mut chrome));
        assert_eq!(nav.active_view(), View::About);
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn navigating_to_current_view_still_closes_menu() {
        let mut nav = NavigationState::new();
        let mut chrome = UiChromeState::new();
        chrome.toggle_mobile_menu();

        nav.navigate(View::Home, &mut chrome);
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn unknown_view_is_ignored() {
        let mut nav = NavigationState::new();
        let mut chrome = UiChromeState::new();
        nav.navigate(View::Events, &mut chrome);
        chrome.toggle_mobile_menu();

        assert!(!nav.navigate_to("blog", &mut chrome));
        assert_eq!(nav.active_view(), View::Events);
        assert!(chrome.is_mobile_menu_open());
    }

    #[test]
    fn routes_are_accepted() {
        let mut nav = NavigationState::new();
        let mut chrome = UiChromeState::new();
        assert!(nav.navigate_to("/health-tips", &mut chrome));
        assert_eq!(nav.active_view(), View::Tips);
    }

    #[test]
    fn cycling_wraps() {
        let mut nav = NavigationState::new();
        let mut chrome = UiChromeState::new();
        nav.previous(&mut chrome);
        assert_eq!(nav.active_view(), View::Contact);
        nav.next(&mut chrome);
        assert_eq!(nav.active_view(), View::Home);
        nav.cycle(7, &mut chrome);
        assert_eq!(nav.active_view(), View::Tips);
    }
}
