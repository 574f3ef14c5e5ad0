//! # Panels
//!
//! One module per screen. Each exposes `render(frame, area, app)` and draws
//! only inside `area`; the sidebar and footer belong to [`super::render`].
//!
//! Panels never mutate state. Scroll offsets come from [`App`] and are
//! clamped here against the real content height, so a stale offset can never
//! scroll past the end.

pub mod docs;
pub mod home;
pub mod playground;
pub mod source;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use super::app::App;
use super::router::View;
use super::theme::Theme;

/// Draw the panel for the current view, and nothing else.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    match app.router.current() {
        View::Home => home::render(frame, area, app),
        View::Source => source::render(frame, area, app),
        View::Playground => playground::render(frame, area, app),
        View::Docs => docs::render(frame, area, app),
    }
}

/// Screen heading with a dimmed subtitle underneath.
pub(crate) fn heading<'a>(theme: &Theme, title: &'a str, subtitle: &'a str) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(theme.fg_dim))),
    ]
}

/// Greedy word wrap on character counts. Words longer than `width` are split.
/// Always returns at least one (possibly empty) row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let mut word = word;
        let mut word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len > width {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }

        // Only reached on a fresh row.
        while word_len > width {
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            rows.push(word[..split].to_string());
            word = &word[split..];
            word_len = word.chars().count();
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    rows.push(current);
    rows
}

/// Largest useful scroll offset for `total` rows shown in `visible` rows.
pub(crate) fn max_scroll(total: usize, visible: usize) -> usize {
    total.saturating_sub(visible)
}
