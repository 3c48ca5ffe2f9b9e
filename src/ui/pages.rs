//! Per-view renderers. Each page either draws fixed widgets or builds a list
//! of lines that the caller scrolls; the line builders are also used to bound
//! the scroll offset.

use std::cmp::min;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::content::SiteContent;
use crate::models::{AboutTab, Category, TipRecord};
use crate::state::AboutState;

use super::helpers::build_hero_lines;
use super::palette::Palette;

/// Rows given to the home banner, borders included.
const HERO_HEIGHT: u16 = 8;
/// Height allocation per tip card.
const TIP_CARD_HEIGHT: u16 = 5;
pub(crate) const SEARCH_PROMPT: &str = "Search: ";
pub(crate) const SEARCH_PLACEHOLDER: &str = "Search health tips...";
pub(crate) const NO_TIPS_MESSAGE: &str =
    "No tips found. Try adjusting your search or selecting a different category.";

fn scrolled_paragraph<'a>(
    lines: Vec<Line<'a>>,
    title: &'a str,
    scroll: u16,
    palette: &Palette,
) -> Paragraph<'a> {
    Paragraph::new(lines)
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, palette.heading()))
                .style(palette.base()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
}

pub(crate) fn home_lines(site: &SiteContent, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Our Services", palette.heading()))];
    for service in &site.services {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("• {}", service.title),
            palette.base().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", service.description),
            palette.muted(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Ready to transform your life?",
        palette.heading(),
    )));
    lines.push(Line::from(Span::styled(
        site.call_to_action.clone(),
        palette.base(),
    )));
    lines
}

pub(crate) fn draw_home(
    frame: &mut Frame,
    area: Rect,
    site: &SiteContent,
    parallax: u16,
    scroll: u16,
    palette: &Palette,
) {
    let hero_height = HERO_HEIGHT.min(area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(hero_height), Constraint::Min(0)])
        .split(area);

    let hero_block = Block::default().borders(Borders::ALL).style(palette.base());
    let inner = hero_block.inner(chunks[0]);
    let hero = Paragraph::new(build_hero_lines(
        &format!("Welcome to {}", site.name),
        &site.tagline,
        parallax,
        inner.width,
        inner.height,
        palette,
    ))
    .block(hero_block);
    frame.render_widget(hero, chunks[0]);

    if chunks[1].height > 0 {
        let body = scrolled_paragraph(home_lines(site, palette), "Home", scroll, palette);
        frame.render_widget(body, chunks[1]);
    }
}

pub(crate) fn team_lines(
    site: &SiteContent,
    about: &AboutState,
    cursor: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Meet Our Team", palette.heading()))];
    for (idx, member) in site.team.iter().enumerate() {
        let pointer = if idx == cursor { "▶ " } else { "  " };
        let marker = if about.expanded_member() == Some(idx) {
            "−"
        } else {
            "+"
        };
        let style = if idx == cursor {
            palette.selected()
        } else {
            palette.base()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{pointer}[{marker}] {}", member.name), style),
            Span::styled(format!("  {}", member.role), palette.muted()),
        ]));
        if about.expanded_member() == Some(idx) {
            lines.push(Line::from(Span::styled(
                format!("      {}", member.bio),
                palette.base(),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Visit Us", palette.heading())));
    lines.push(Line::from(Span::styled(
        site.contact.address.clone(),
        palette.base(),
    )));
    lines.push(Line::from(Span::styled(
        site.contact.email.clone(),
        palette.base(),
    )));
    lines
}

pub(crate) fn draw_about(
    frame: &mut Frame,
    area: Rect,
    site: &SiteContent,
    about: &AboutState,
    cursor: usize,
    scroll: u16,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let tabs = Tabs::new(AboutTab::ALL.iter().map(|tab| tab.title()))
        .select(about.selected_tab().index())
        .style(palette.base())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!("About {}", site.name), palette.heading()))
                .style(palette.base()),
        );
    frame.render_widget(tabs, chunks[0]);

    let tab = about.selected_tab();
    let section = Paragraph::new(vec![
        Line::from(Span::styled(tab.title(), palette.heading())),
        Line::from(Span::styled(site.about_text(tab), palette.base())),
    ])
    .style(palette.base())
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).style(palette.base()));
    frame.render_widget(section, chunks[1]);

    if chunks[2].height > 0 {
        let lines = team_lines(site, about, cursor, palette);
        let team = scrolled_paragraph(lines, "Team", scroll, palette);
        frame.render_widget(team, chunks[2]);
    }
}

pub(crate) struct TipsView<'a> {
    pub(crate) categories: &'a [Category],
    pub(crate) active_category: &'a str,
    pub(crate) query: &'a str,
    pub(crate) tips: &'a [&'a TipRecord],
    pub(crate) searching: bool,
    pub(crate) first_card: u16,
}

pub(crate) fn draw_tips(frame: &mut Frame, area: Rect, view: &TipsView<'_>, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    draw_search_bar(frame, chunks[0], view.query, view.searching, palette);

    let selected = view
        .categories
        .iter()
        .position(|c| c.id == view.active_category)
        .unwrap_or_default();
    let tabs = Tabs::new(view.categories.iter().map(|c| c.display_name.as_str()))
        .select(selected)
        .style(palette.base())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Health Tips", palette.heading()))
                .style(palette.base()),
        );
    frame.render_widget(tabs, chunks[1]);

    if view.tips.is_empty() {
        let message = Paragraph::new(Span::styled(NO_TIPS_MESSAGE, palette.muted()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(palette.base())
            .block(Block::default().borders(Borders::ALL).style(palette.base()));
        frame.render_widget(message, chunks[2]);
        return;
    }

    render_tip_cards(frame, chunks[2], view.tips, view.first_card as usize, palette);
}

fn draw_search_bar(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    searching: bool,
    palette: &Palette,
) {
    let title = if searching { "Search (typing)" } else { "Search" };
    let border_style = if searching {
        palette.heading()
    } else {
        palette.base()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, border_style))
        .border_style(border_style)
        .style(palette.base());

    let text = if query.is_empty() && !searching {
        Line::from(vec![
            Span::styled(SEARCH_PROMPT, palette.base()),
            Span::styled(SEARCH_PLACEHOLDER, palette.muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled(SEARCH_PROMPT, palette.base()),
            Span::styled(query.to_string(), palette.base()),
        ])
    };
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if searching && inner.width > 0 && inner.height > 0 {
        let typed = (SEARCH_PROMPT.len() + query.chars().count()) as u16;
        let cursor_x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_tip_cards(
    frame: &mut Frame,
    area: Rect,
    tips: &[&TipRecord],
    first: usize,
    palette: &Palette,
) {
    if tips.is_empty() || area.height == 0 {
        return;
    }

    let capacity = ((area.height / TIP_CARD_HEIGHT) as usize).max(1);
    let len = tips.len();
    let start = min(first, len - 1);
    let end = min(start + capacity, len);

    let constraints: Vec<Constraint> = (start..end)
        .map(|_| Constraint::Length(TIP_CARD_HEIGHT))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (chunk, tip) in rows.iter().zip(&tips[start..end]) {
        if chunk.height == 0 {
            continue;
        }
        let card = Paragraph::new(Span::styled(tip.content.clone(), palette.base()))
            .wrap(Wrap { trim: true })
            .style(palette.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(tip.title.clone(), palette.heading()))
                    .style(palette.base()),
            );
        frame.render_widget(card, *chunk);
    }
}

pub(crate) fn event_lines(site: &SiteContent, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled("Upcoming Events", palette.heading()))];
    for event in &site.events {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(event.title.clone(), palette.heading()),
            Span::styled(format!("  {}", event.date), palette.muted()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", event.location),
            palette.muted(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", event.description),
            palette.base(),
        )));
    }
    lines
}

pub(crate) fn draw_events(
    frame: &mut Frame,
    area: Rect,
    site: &SiteContent,
    scroll: u16,
    palette: &Palette,
) {
    let body = scrolled_paragraph(event_lines(site, palette), "Events", scroll, palette);
    frame.render_widget(body, area);
}

pub(crate) fn contact_lines(site: &SiteContent, palette: &Palette) -> Vec<Line<'static>> {
    let contact = &site.contact;
    vec![
        Line::from(Span::styled("Get in Touch", palette.heading())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Address  ", palette.muted()),
            Span::styled(contact.address.clone(), palette.base()),
        ]),
        Line::from(vec![
            Span::styled("Email    ", palette.muted()),
            Span::styled(contact.email.clone(), palette.base()),
        ]),
        Line::from(vec![
            Span::styled("Phone    ", palette.muted()),
            Span::styled(contact.phone.clone(), palette.base()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", palette.base()),
            Span::styled("[Enter]", palette.key()),
            Span::styled(" to write us an email.", palette.base()),
        ]),
    ]
}

pub(crate) fn draw_contact(
    frame: &mut Frame,
    area: Rect,
    site: &SiteContent,
    scroll: u16,
    palette: &Palette,
) {
    let body = scrolled_paragraph(contact_lines(site, palette), "Contact", scroll, palette);
    frame.render_widget(body, area);
}
