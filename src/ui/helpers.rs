use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};

use super::palette::Palette;

/// ASCII texture drawn behind the home banner.
pub(crate) const HERO_ART: &[&str] = &["~  .  ~  ", " .  ~  . ", "  ~  .  ~"];

/// Repeat a short ASCII motif until it fills the requested width.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let repeat_count = width / row.len() + 2;
    let mut repeated = row.repeat(repeat_count);
    repeated.truncate(width);
    repeated
}

/// Center `label` within `width` columns, truncating on character boundaries.
pub(crate) fn centered_label(label: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let trimmed: String = label.trim().chars().take(width).collect();
    let len = trimmed.chars().count();
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    let mut line = String::with_capacity(width);
    line.push_str(&" ".repeat(left));
    line.push_str(&trimmed);
    line.push_str(&" ".repeat(right));
    line
}

/// Build the home banner: the background pattern shifted by the parallax
/// offset, with the title and tagline centered over it.
pub(crate) fn build_hero_lines(
    title: &str,
    tagline: &str,
    parallax: u16,
    inner_width: u16,
    inner_height: u16,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let width = inner_width as usize;
    let height = inner_height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let title_row = height.saturating_sub(2) / 2;
    let tagline_row = title_row + 1;
    let shift = parallax as usize;

    (0..height)
        .map(|row_idx| {
            if row_idx == title_row {
                Line::from(Span::styled(centered_label(title, width), palette.heading()))
            } else if row_idx == tagline_row && tagline_row < height {
                Line::from(Span::styled(centered_label(tagline, width), palette.base()))
            } else {
                let base = HERO_ART[(row_idx + shift) % HERO_ART.len()];
                Line::from(Span::styled(
                    repeat_pattern_row(base, width),
                    palette.pattern(),
                ))
            }
        })
        .collect()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the navigation menu overlay.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use anyhow::Context;

    #[test]
    fn pattern_rows_fill_width() {
        assert_eq!(repeat_pattern_row("ab", 5), "ababa");
        assert_eq!(repeat_pattern_row("", 3), "   ");
        assert_eq!(repeat_pattern_row("ab", 0), "");
    }

    #[test]
    fn labels_are_centered_and_truncated() {
        assert_eq!(centered_label("hi", 6), "  hi  ");
        assert_eq!(centered_label("hello", 3), "hel");
        assert_eq!(centered_label("ünï", 5), " ünï ");
    }

    #[test]
    fn hero_background_shifts_with_parallax() {
        let palette = Palette::for_theme(Theme::Light);
        let still = build_hero_lines("T", "t", 0, 12, 6, &palette);
        let moved = build_hero_lines("T", "t", 1, 12, 6, &palette);
        assert_eq!(still.len(), 6);
        assert_ne!(still[0], moved[0]);
        assert_eq!(still[2], moved[2]);
    }

    #[test]
    fn surface_error_prefers_root_cause() {
        let err = Err::<(), _>(std::io::Error::other("no opener"))
            .context("failed to open link")
            .unwrap_err();
        assert_eq!(surface_error(&err), "no opener");
    }
}
