use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colours for every themed surface. Widgets look these up from the current
/// theme at draw time, so one toggle restyles the whole frame at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) fg: Color,
    pub(crate) bg: Color,
    pub(crate) accent: Color,
    pub(crate) muted: Color,
    pub(crate) selected_fg: Color,
    pub(crate) selected_bg: Color,
    pub(crate) pattern: Color,
    pub(crate) key: Color,
    pub(crate) error: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Green,
                muted: Color::DarkGray,
                selected_fg: Color::White,
                selected_bg: Color::Green,
                pattern: Color::Gray,
                key: Color::Blue,
                error: Color::Red,
            },
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                accent: Color::LightGreen,
                muted: Color::DarkGray,
                selected_fg: Color::Black,
                selected_bg: Color::LightGreen,
                pattern: Color::DarkGray,
                key: Color::Cyan,
                error: Color::LightRed,
            },
        }
    }

    pub(crate) fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub(crate) fn heading(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub(crate) fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn key(&self) -> Style {
        self.base().fg(self.key).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn pattern(&self) -> Style {
        self.base().fg(self.pattern)
    }

    pub(crate) fn error(&self) -> Style {
        self.base().fg(self.error)
    }

    pub(crate) fn info(&self) -> Style {
        self.base().fg(self.accent)
    }
}
