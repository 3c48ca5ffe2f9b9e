use std::mem;

use anyhow::Context;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use tracing::{info, warn};

use crate::content::SiteContent;
use crate::models::{Theme, View};
use crate::state::{AppShell, Page};

use super::helpers::{centered_rect, surface_error};
use super::pages::{
    contact_lines, draw_about, draw_contact, draw_events, draw_home, draw_tips, event_lines,
    home_lines, team_lines, TipsView,
};
use super::palette::Palette;

/// Header bar with the site name and navigation.
const HEADER_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows moved by PageUp/PageDown.
const PAGE_STEP: i32 = 5;

/// How keystrokes are interpreted outside the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    /// Printable keys edit the tips query.
    Searching,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self, palette: &Palette) -> Style {
        match self {
            StatusKind::Info => palette.info(),
            StatusKind::Error => palette.error(),
        }
    }
}

/// Terminal front-end over the session state. Every key is turned into one
/// action on [`AppShell`]; drawing reads the shell afresh each frame.
pub struct App {
    shell: AppShell,
    site: SiteContent,
    mode: Mode,
    menu_cursor: usize,
    member_cursor: usize,
    compact_width: u16,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(shell: AppShell, site: SiteContent, compact_width: u16) -> Self {
        Self {
            shell,
            site,
            mode: Mode::Normal,
            menu_cursor: 0,
            member_cursor: 0,
            compact_width,
            status: None,
        }
    }

    pub fn shell(&self) -> &AppShell {
        &self.shell
    }

    pub fn is_searching(&self) -> bool {
        self.mode == Mode::Searching
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    /// Apply one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> anyhow::Result<bool> {
        let mut exit = false;

        if self.shell.is_mobile_menu_open() {
            self.handle_menu_key(code, &mut exit);
        } else {
            let mode = mem::replace(&mut self.mode, Mode::Normal);
            self.mode = match mode {
                Mode::Normal => self.handle_normal_key(code, &mut exit),
                Mode::Searching => self.handle_search_key(code),
            };
        }

        let limit = self.scroll_limit();
        self.shell.clamp_scroll(limit);
        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.open_menu(),
            KeyCode::Char(ch @ '1'..='5') => self.go_to_numbered(ch),
            KeyCode::Tab => {
                self.shell.next_view();
                self.after_navigation();
            }
            KeyCode::BackTab => {
                self.shell.previous_view();
                self.after_navigation();
            }
            KeyCode::PageUp => self.scroll(-PAGE_STEP),
            KeyCode::PageDown => self.scroll(PAGE_STEP),
            KeyCode::Home => self.scroll_to_top(),
            _ => return self.handle_view_key(code),
        }
        Mode::Normal
    }

    /// Keys whose meaning depends on the active page.
    fn handle_view_key(&mut self, code: KeyCode) -> Mode {
        match self.shell.active_view() {
            View::Tips => match code {
                KeyCode::Char('/') | KeyCode::Char('f') => {
                    self.clear_status();
                    return Mode::Searching;
                }
                KeyCode::Left => self.cycle_category(-1),
                KeyCode::Right => self.cycle_category(1),
                KeyCode::Esc => {
                    if !self.shell.query().is_empty() {
                        self.shell.clear_query();
                        self.scroll_to_top();
                        self.set_status("Search cleared.", StatusKind::Info);
                    }
                }
                KeyCode::Up => self.scroll(-1),
                KeyCode::Down => self.scroll(1),
                _ => {}
            },
            View::About => match code {
                KeyCode::Left => self.shell.cycle_about_tab(-1),
                KeyCode::Right => self.shell.cycle_about_tab(1),
                KeyCode::Up => {
                    self.member_cursor = self.member_cursor.saturating_sub(1);
                }
                KeyCode::Down => {
                    let last = self.site.team.len().saturating_sub(1);
                    self.member_cursor = (self.member_cursor + 1).min(last);
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let team_len = self.site.team.len();
                    self.shell.toggle_team_member(self.member_cursor, team_len);
                }
                _ => {}
            },
            View::Contact => match code {
                KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
                    self.open_contact_email();
                }
                KeyCode::Up => self.scroll(-1),
                KeyCode::Down => self.scroll(1),
                _ => {}
            },
            View::Home | View::Events => match code {
                KeyCode::Up => self.scroll(-1),
                KeyCode::Down => self.scroll(1),
                _ => {}
            },
        }
        Mode::Normal
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Esc => {
                self.shell.clear_query();
                self.scroll_to_top();
                Mode::Normal
            }
            KeyCode::Enter => Mode::Normal,
            KeyCode::Backspace => {
                self.shell.pop_query_char();
                self.scroll_to_top();
                Mode::Searching
            }
            KeyCode::Left => {
                self.cycle_category(-1);
                Mode::Searching
            }
            KeyCode::Right => {
                self.cycle_category(1);
                Mode::Searching
            }
            KeyCode::Up => {
                self.scroll(-1);
                Mode::Searching
            }
            KeyCode::Down => {
                self.scroll(1);
                Mode::Searching
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                self.shell.push_query_char(ch);
                self.scroll_to_top();
                Mode::Searching
            }
            _ => Mode::Searching,
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode, exit: &mut bool) {
        match code {
            KeyCode::Char('q') => {
                *exit = true;
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => {
                self.shell.close_mobile_menu();
            }
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(View::ALL.len() - 1);
            }
            KeyCode::Enter => self.go_to(View::ALL[self.menu_cursor]),
            KeyCode::Char(ch @ '1'..='5') => self.go_to_numbered(ch),
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme(),
            _ => {}
        }
    }

    fn open_menu(&mut self) {
        if self.shell.toggle_mobile_menu() {
            self.menu_cursor = self.shell.active_view().index();
        }
    }

    fn go_to_numbered(&mut self, ch: char) {
        let position = ch.to_digit(10).and_then(|n| (n as usize).checked_sub(1));
        if let Some(view) = position.and_then(|idx| View::ALL.get(idx)) {
            self.go_to(*view);
        }
    }

    fn go_to(&mut self, view: View) {
        self.shell.navigate(view);
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        self.mode = Mode::Normal;
        self.member_cursor = 0;
        self.clear_status();
    }

    fn toggle_theme(&mut self) {
        let theme = self.shell.toggle_theme();
        self.set_status(format!("Switched to {theme} theme."), StatusKind::Info);
    }

    fn cycle_category(&mut self, offset: isize) {
        self.shell.cycle_category(offset);
        self.scroll_to_top();
    }

    fn scroll(&mut self, delta: i32) {
        let limit = self.scroll_limit();
        self.shell.scroll_by(delta, limit);
    }

    fn scroll_to_top(&mut self) {
        let offset = i32::from(self.shell.scroll().offset());
        self.shell.scroll_by(-offset, 0);
    }

    /// Largest useful scroll offset for the active page: the tips page scrolls
    /// card by card, every other page line by line.
    fn scroll_limit(&self) -> u16 {
        let palette = Palette::for_theme(self.shell.theme());
        let rows = match self.shell.active_view() {
            View::Home => home_lines(&self.site, &palette).len(),
            View::About => {
                team_lines(&self.site, self.shell.about(), self.member_cursor, &palette).len()
            }
            View::Tips => self.shell.visible_tips().len().saturating_sub(1),
            View::Events => event_lines(&self.site, &palette).len(),
            View::Contact => contact_lines(&self.site, &palette).len(),
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn open_contact_email(&mut self) {
        let url = self.site.contact.mailto();
        match open_link(&url).with_context(|| format!("failed to open {url}")) {
            Ok(()) => {
                info!(url = %url, "opened mail client");
                self.set_status("Opened your mail client.", StatusKind::Info);
            }
            Err(err) => {
                warn!(error = %err, "could not open mail client");
                self.set_status(
                    format!("Failed to open email: {}", surface_error(&err)),
                    StatusKind::Error,
                );
            }
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let palette = Palette::for_theme(self.shell.theme());
        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, chunks[0], &palette, area.width < self.compact_width);

        let body = chunks[1];
        if body.height > 0 {
            let scroll = self.shell.scroll().offset();
            match self.shell.page() {
                Page::Home { parallax_offset } => {
                    draw_home(frame, body, &self.site, parallax_offset, scroll, &palette)
                }
                Page::About(about) => draw_about(
                    frame,
                    body,
                    &self.site,
                    about,
                    self.member_cursor,
                    scroll,
                    &palette,
                ),
                Page::Tips {
                    categories,
                    active_category,
                    query,
                    tips,
                } => {
                    let view = TipsView {
                        categories,
                        active_category,
                        query,
                        tips: &tips,
                        searching: self.mode == Mode::Searching,
                        first_card: scroll,
                    };
                    draw_tips(frame, body, &view, &palette);
                }
                Page::Events => draw_events(frame, body, &self.site, scroll, &palette),
                Page::Contact => draw_contact(frame, body, &self.site, scroll, &palette),
            }
        }

        self.draw_footer(frame, chunks[2], &palette);

        if self.shell.is_mobile_menu_open() {
            self.draw_menu(frame, area, &palette);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, palette: &Palette, compact: bool) {
        let theme_hint = match self.shell.theme() {
            Theme::Light => "☾ dark [t]",
            Theme::Dark => "☀ light [t]",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(self.site.name.clone(), palette.heading()))
            .title(Line::from(Span::styled(theme_hint, palette.muted())).right_aligned())
            .style(palette.base());

        if compact {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled("☰ Menu ", palette.base()),
                Span::styled("[m]", palette.key()),
                Span::styled(format!("   {}", self.shell.active_view()), palette.muted()),
            ]))
            .block(block);
            frame.render_widget(hint, area);
        } else {
            let tabs = Tabs::new(
                View::ALL
                    .iter()
                    .enumerate()
                    .map(|(idx, view)| format!("{} {}", idx + 1, view.label())),
            )
            .select(self.shell.active_view().index())
            .style(palette.base())
            .highlight_style(palette.selected())
            .block(block);
            frame.render_widget(tabs, area);
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let popup = centered_rect(50, 60, area);
        frame.render_widget(Clear, popup);

        let items: Vec<ListItem> = View::ALL
            .iter()
            .map(|view| {
                let marker = if *view == self.shell.active_view() {
                    "• "
                } else {
                    "  "
                };
                ListItem::new(format!("{marker}{}", view.label()))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled("Menu", palette.heading()))
                    .style(palette.base()),
            )
            .style(palette.base())
            .highlight_style(palette.selected())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.menu_cursor));
        frame.render_stateful_widget(list, popup, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default().borders(Borders::TOP).style(palette.base());
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(
                status.text.clone(),
                status.kind.style(palette),
            )])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions(palette);

        let paragraph = Paragraph::new(vec![status_line, instructions])
            .style(palette.base())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self, palette: &Palette) -> Line<'static> {
        let key_style = palette.key();
        let key = |label: &'static str| Span::styled(label, key_style);
        let text = |label: &'static str| Span::styled(label, palette.base());

        if self.shell.is_mobile_menu_open() {
            return Line::from(vec![
                key("[↑↓]"),
                text(" Choose   "),
                key("[Enter]"),
                text(" Go   "),
                key("[Esc]"),
                text(" Close   "),
                key("[q]"),
                text(" Quit"),
            ]);
        }

        if self.mode == Mode::Searching {
            return Line::from(vec![
                text("Type to filter   "),
                key("[←→]"),
                text(" Category   "),
                key("[Enter]"),
                text(" Done   "),
                key("[Esc]"),
                text(" Clear"),
            ]);
        }

        let mut spans = match self.shell.active_view() {
            View::Tips => vec![
                key("[/]"),
                text(" Search   "),
                key("[←→]"),
                text(" Category   "),
                key("[↑↓]"),
                text(" Scroll   "),
            ],
            View::About => vec![
                key("[←→]"),
                text(" Section   "),
                key("[↑↓]"),
                text(" Team   "),
                key("[Enter]"),
                text(" Bio   "),
            ],
            View::Contact => vec![key("[Enter]"), text(" Email us   ")],
            View::Home | View::Events => vec![key("[↑↓]"), text(" Scroll   ")],
        };
        spans.extend([
            key("[Tab]"),
            text(" Next page   "),
            key("[m]"),
            text(" Menu   "),
            key("[t]"),
            text(" Theme   "),
            key("[q]"),
            text(" Quit"),
        ]);
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;
    use ratatui::style::Color;
    use ratatui::Terminal;

    use super::*;
    use crate::content::seed_catalog;
    use crate::models::AboutTab;

    fn app() -> App {
        let shell = AppShell::new(Arc::new(seed_catalog().unwrap()));
        App::new(shell, SiteContent::seed(), 80)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
    }

    fn render(app: &App, width: u16, height: u16) -> (String, Terminal<TestBackend>) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let screen = {
            let buffer = terminal.backend().buffer();
            buffer
                .content()
                .chunks(width as usize)
                .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
                .collect::<Vec<_>>()
                .join("\n")
        };
        (screen, terminal)
    }

    #[test]
    fn quit_key_exits() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn number_keys_and_tab_navigate() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.shell().active_view(), View::Tips);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.shell().active_view(), View::Events);
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab]);
        assert_eq!(app.shell().active_view(), View::About);
    }

    #[test]
    fn search_mode_types_into_query() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('/')]);
        assert!(app.is_searching());
        type_text(&mut app, "qtm");
        assert_eq!(app.shell().query(), "qtm");
        press(&mut app, &[KeyCode::Backspace, KeyCode::Backspace, KeyCode::Backspace]);
        type_text(&mut app, "water");
        press(&mut app, &[KeyCode::Enter]);
        assert!(!app.is_searching());
        assert_eq!(app.shell().query(), "water");
        let ids: Vec<u32> = app.shell().visible_tips().iter().map(|t| t.id).collect();
        assert_eq!(ids, [3]);
    }

    #[test]
    fn category_keys_keep_query() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('/')]);
        type_text(&mut app, "stress");
        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.shell().active_category(), "mentalHealth");
        assert_eq!(app.shell().query(), "stress");
        let ids: Vec<u32> = app.shell().visible_tips().iter().map(|t| t.id).collect();
        assert_eq!(ids, [7, 9]);
    }

    #[test]
    fn escape_in_search_clears_query() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('f')]);
        type_text(&mut app, "diet");
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.is_searching());
        assert_eq!(app.shell().query(), "");
    }

    #[test]
    fn menu_selection_navigates_and_closes() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('m')]);
        assert!(app.shell().is_mobile_menu_open());
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.shell().active_view(), View::Contact);
        assert!(!app.shell().is_mobile_menu_open());
    }

    #[test]
    fn menu_swallows_page_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('m'), KeyCode::Char('/')]);
        assert!(!app.is_searching());
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.shell().is_mobile_menu_open());
        assert_eq!(app.shell().active_view(), View::Tips);
    }

    #[test]
    fn about_keys_toggle_member_bio() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.shell().about().expanded_member(), Some(1));
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.shell().about().expanded_member(), None);
        press(&mut app, &[KeyCode::Right]);
        assert_eq!(app.shell().about().selected_tab(), AboutTab::Values);
    }

    #[test]
    fn theme_toggle_reports_status() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t')]);
        assert_eq!(app.shell().theme(), Theme::Dark);
        assert_eq!(app.status_text(), Some("Switched to dark theme."));
    }

    #[test]
    fn scrolling_is_clamped_to_content() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        for _ in 0..10 {
            press(&mut app, &[KeyCode::Down]);
        }
        assert_eq!(app.shell().scroll().offset(), 2);
        press(&mut app, &[KeyCode::Char('/')]);
        type_text(&mut app, "water");
        assert_eq!(app.shell().scroll().offset(), 0);
    }

    #[test]
    fn tips_page_renders_empty_state() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3'), KeyCode::Char('/')]);
        type_text(&mut app, "xyz123");
        let (screen, _) = render(&app, 100, 30);
        assert!(screen.contains("No tips found."));
        assert!(screen.contains("Search: xyz123"));
    }

    #[test]
    fn tips_page_renders_categories_in_order() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        let (screen, _) = render(&app, 100, 30);
        let nutrition = screen.find("Nutrition").unwrap();
        let fitness = screen.find("Fitness").unwrap();
        let mental = screen.find("Mental Health").unwrap();
        let sleep = screen.find("Sleep").unwrap();
        assert!(nutrition < fitness && fitness < mental && mental < sleep);
        assert!(screen.contains("Balanced Diet"));
    }

    #[test]
    fn theme_applies_to_whole_frame() {
        let mut app = app();
        let (_, light) = render(&app, 100, 30);
        assert_eq!(light.backend().buffer()[(0, 0)].bg, Color::White);

        press(&mut app, &[KeyCode::Char('t')]);
        let (_, dark) = render(&app, 100, 30);
        let buffer = dark.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, Color::Black);
        assert_eq!(buffer[(99, 29)].bg, Color::Black);
    }

    #[test]
    fn narrow_terminal_uses_compact_menu() {
        let app = app();
        let (narrow, _) = render(&app, 60, 24);
        assert!(narrow.contains("Menu"));
        assert!(!narrow.contains("Health Tips"));

        let (wide, _) = render(&app, 100, 24);
        assert!(wide.contains("3 Health Tips"));
    }
}
