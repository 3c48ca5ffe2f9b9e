use tracing::debug;

use crate::models::Theme;

/// Theme and mobile-menu flags. Both are single fields, so every transition
/// is one assignment and observers never see a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiChromeState {
    theme: Theme,
    mobile_menu_open: bool,
}

impl UiChromeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a configured theme instead of the light default.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            mobile_menu_open: false,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_with_menu_closed() {
        let chrome = UiChromeState::new();
        assert_eq!(chrome.theme(), Theme::Light);
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn double_theme_toggle_restores_original() {
        let mut chrome = UiChromeState::with_theme(Theme::Dark);
        assert_eq!(chrome.toggle_theme(), Theme::Light);
        assert_eq!(chrome.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn close_menu_is_idempotent() {
        let mut chrome = UiChromeState::new();
        chrome.close_mobile_menu();
        assert!(!chrome.is_mobile_menu_open());

        assert!(chrome.toggle_mobile_menu());
        chrome.close_mobile_menu();
        chrome.close_mobile_menu();
        assert!(!chrome.is_mobile_menu_open());
    }

    #[test]
    fn theme_toggle_leaves_menu_alone() {
        let mut chrome = UiChromeState::new();
        chrome.toggle_mobile_menu();
        chrome.toggle_theme();
        assert!(chrome.is_mobile_menu_open());
    }
}
