//! Domain models shared by the content layer, the state model and the TUI.
//! These types stay light-weight data holders: the catalog owns the tips, the
//! state holders only ever refer to them by id or borrow them for rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One piece of advisory content shown on the tips page.
pub struct TipRecord {
    /// Stable identifier, unique across the whole catalog (not just within a
    /// category).
    pub id: u32,
    /// Heading shown on the tip card and searched by the filter.
    pub title: String,
    /// Body text, searched alongside the title.
    pub content: String,
}

impl TipRecord {
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A named grouping of tips. The registry order of categories is the tab
/// order in the UI and is never re-sorted.
pub struct Category {
    /// Key into the catalog, e.g. `mentalHealth`.
    pub id: String,
    /// User-facing label, e.g. `Mental Health`.
    pub display_name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// The top-level pages of the site. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Tips,
    Events,
    Contact,
}

impl View {
    /// Navigation-bar order.
    pub const ALL: [View; 5] = [
        View::Home,
        View::About,
        View::Tips,
        View::Events,
        View::Contact,
    ];

    /// Identifier used by action callers (`navigate_to("about")`).
    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Tips => "tips",
            View::Events => "events",
            View::Contact => "contact",
        }
    }

    /// Route path the page is published under.
    pub fn route(self) -> &'static str {
        match self {
            View::Home => "/",
            View::About => "/about",
            View::Tips => "/health-tips",
            View::Events => "/events",
            View::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Tips => "Health Tips",
            View::Events => "Events",
            View::Contact => "Contact",
        }
    }

    /// Resolve either a view identifier or a route path. Anything else is
    /// `None`; callers treat that as "ignore the action".
    pub fn parse(raw: &str) -> Option<View> {
        View::ALL
            .into_iter()
            .find(|view| view.id() == raw || view.route() == raw)
    }

    /// Position within [`View::ALL`].
    pub fn index(self) -> usize {
        View::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour scheme applied to every themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class name applied to the whole document scope.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
/// A service teaser on the home page.
pub struct Service {
    pub title: String,
    pub description: String,
}

/// Sections of the about page, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Mission,
    Values,
    Impact,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Mission, AboutTab::Values, AboutTab::Impact];

    pub fn title(self) -> &'static str {
        match self {
            AboutTab::Mission => "Our Mission",
            AboutTab::Values => "Our Values",
            AboutTab::Impact => "Our Impact",
        }
    }

    pub fn index(self) -> usize {
        AboutTab::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

#[derive(Debug, Clone)]
/// A community event listed on the events page.
pub struct Event {
    pub date: String,
    pub title: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub address: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    /// `mailto:` URL handed to the system opener.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_parse_from_ids_and_routes() {
        assert_eq!(View::parse("about"), Some(View::About));
        assert_eq!(View::parse("/health-tips"), Some(View::Tips));
        assert_eq!(View::parse("/"), Some(View::Home));
        assert_eq!(View::parse("About"), None);
        assert_eq!(View::parse("blog"), None);
    }

    #[test]
    fn theme_toggle_is_binary() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn view_index_follows_navigation_order() {
        for (idx, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), idx);
        }
    }
}
