use std::sync::Arc;

use crate::content::ContentCatalog;
use crate::models::{Category, Theme, TipRecord, View};

use super::{AboutState, NavigationState, ScrollState, SelectionState, UiChromeState};

/// What the presentation layer should draw for the active view.
#[derive(Debug, PartialEq, Eq)]
pub enum Page<'a> {
    Home {
        parallax_offset: u16,
    },
    About(&'a AboutState),
    Tips {
        categories: &'a [Category],
        active_category: &'a str,
        query: &'a str,
        tips: Vec<&'a TipRecord>,
    },
    Events,
    Contact,
}

/// Owns every piece of session state and routes user actions to it. Each
/// action runs to completion before the next one, so `page()` always sees a
/// consistent snapshot.
#[derive(Debug, Clone)]
pub struct AppShell {
    navigation: NavigationState,
    chrome: UiChromeState,
    selection: SelectionState,
    about: AboutState,
    scroll: ScrollState,
}

impl AppShell {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self::with_chrome(catalog, UiChromeState::new())
    }

    pub fn with_chrome(catalog: Arc<ContentCatalog>, chrome: UiChromeState) -> Self {
        Self {
            navigation: NavigationState::new(),
            chrome,
            selection: SelectionState::new(catalog),
            about: AboutState::default(),
            scroll: ScrollState::default(),
        }
    }

    pub fn active_view(&self) -> View {
        self.navigation.active_view()
    }

    pub fn theme(&self) -> Theme {
        self.chrome.theme()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.chrome.is_mobile_menu_open()
    }

    pub fn active_category(&self) -> &str {
        self.selection.active_category()
    }

    pub fn query(&self) -> &str {
        self.selection.query()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn about(&self) -> &AboutState {
        &self.about
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn visible_tips(&self) -> Vec<&TipRecord> {
        self.selection.visible_tips()
    }

    pub fn navigate(&mut self, view: View) {
        self.navigation.navigate(view, &mut self.chrome);
        self.scroll.reset();
    }

    pub fn navigate_to(&mut self, requested: &str) -> bool {
        let moved = self.navigation.navigate_to(requested, &mut self.chrome);
        if moved {
            self.scroll.reset();
        }
        moved
    }

    pub fn next_view(&mut self) {
        self.navigation.next(&mut self.chrome);
        self.scroll.reset();
    }

    pub fn previous_view(&mut self) {
        self.navigation.previous(&mut self.chrome);
        self.scroll.reset();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.chrome.toggle_theme()
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.chrome.toggle_mobile_menu()
    }

    pub fn close_mobile_menu(&mut self) {
        self.chrome.close_mobile_menu();
    }

    pub fn select_category(&mut self, category_id: &str) -> bool {
        self.selection.select_category(category_id)
    }

    pub fn cycle_category(&mut self, offset: isize) {
        self.selection.cycle_category(offset);
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.selection.set_query(text);
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.selection.push_query_char(ch);
    }

    pub fn pop_query_char(&mut self) {
        self.selection.pop_query_char();
    }

    pub fn clear_query(&mut self) {
        self.selection.clear_query();
    }

    pub fn cycle_about_tab(&mut self, offset: isize) {
        self.about.cycle_tab(offset);
    }

    pub fn toggle_team_member(&mut self, index: usize, team_len: usize) {
        self.about.toggle_member(index, team_len);
    }

    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        self.scroll.scroll_by(delta, max);
    }

    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll.clamp_to(max);
    }

    /// Decide what to render for the active view. Only the tips page runs the
    /// filter.
    pub fn page(&self) -> Page<'_> {
        match self.navigation.active_view() {
            View::Home => Page::Home {
                parallax_offset: self.scroll.parallax_offset(),
            },
            View::About => Page::About(&self.about),
            View::Tips => Page::Tips {
                categories: self.selection.catalog().categories(),
                active_category: self.selection.active_category(),
                query: self.selection.query(),
                tips: self.selection.visible_tips(),
            },
            View::Events => Page::Events,
            View::Contact => Page::Contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::seed_catalog;

    fn shell() -> AppShell {
        AppShell::new(Arc::new(seed_catalog().unwrap()))
    }

    #[test]
    fn home_is_rendered_first() {
        let shell = shell();
        assert_eq!(shell.page(), Page::Home { parallax_offset: 0 });
    }

    #[test]
    fn tips_page_carries_filter_output() {
        let mut shell = shell();
        shell.navigate(View::Tips);
        shell.set_query("water");
        match shell.page() {
            Page::Tips {
                categories,
                active_category,
                query,
                tips,
            } => {
                assert_eq!(categories.len(), 4);
                assert_eq!(active_category, "nutrition");
                assert_eq!(query, "water");
                let ids: Vec<u32> = tips.iter().map(|tip| tip.id).collect();
                assert_eq!(ids, [3]);
            }
            other => panic!("expected tips page, got {other:?}"),
        }
    }

    #[test]
    fn selection_survives_leaving_tips() {
        let mut shell = shell();
        shell.navigate(View::Tips);
        shell.select_category("sleep");
        shell.set_query("dark");
        shell.navigate(View::Contact);
        shell.navigate(View::Tips);
        assert_eq!(shell.active_category(), "sleep");
        assert_eq!(shell.query(), "dark");
    }

    #[test]
    fn navigation_resets_scroll_and_closes_menu() {
        let mut shell = shell();
        shell.scroll_by(8, 20);
        shell.toggle_mobile_menu();
        assert_eq!(shell.page(), Page::Home { parallax_offset: 4 });

        assert!(shell.navigate_to("events"));
        assert_eq!(shell.scroll().offset(), 0);
        assert!(!shell.is_mobile_menu_open());
        assert_eq!(shell.page(), Page::Events);
    }

    #[test]
    fn unknown_navigation_keeps_scroll() {
        let mut shell = shell();
        shell.scroll_by(3, 20);
        assert!(!shell.navigate_to("nowhere"));
        assert_eq!(shell.scroll().offset(), 3);
        assert_eq!(shell.active_view(), View::Home);
    }
}
