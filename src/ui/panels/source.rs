//! Source screen: the full `chainforge.py` with line numbers.
//!
//! Highlighting is line based, enough to make the file skimmable:
//! section banners, comments, docstrings, decorators and `class`/`def` lines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{heading, max_scroll as clamp_scroll};
use crate::content::SOURCE_CODE;
use crate::export::SOURCE_FILENAME;
use crate::ui::app::App;
use crate::ui::theme::Theme;

/// How a source line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `# =====` rules and the numbered section titles between them.
    Banner,
    Comment,
    Docstring,
    Decorator,
    /// `class`, `def` and `async def` lines.
    Definition,
    Plain,
}

pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if let Some(comment) = trimmed.strip_prefix('#') {
        let comment = comment.trim_start();
        let numbered = comment
            .split_once(". ")
            .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
        if comment.starts_with("==") || numbered {
            LineKind::Banner
        } else {
            LineKind::Comment
        }
    } else if trimmed.starts_with("\"\"\"") {
        LineKind::Docstring
    } else if trimmed.starts_with('@') {
        LineKind::Decorator
    } else if trimmed.starts_with("class ")
        || trimmed.starts_with("def ")
        || trimmed.starts_with("async def ")
    {
        LineKind::Definition
    } else {
        LineKind::Plain
    }
}

fn kind_style(kind: LineKind, theme: &Theme) -> Style {
    match kind {
        LineKind::Banner => Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD),
        LineKind::Comment => Style::default()
            .fg(theme.fg_dim)
            .add_modifier(Modifier::ITALIC),
        LineKind::Docstring => Style::default().fg(theme.fg_dim),
        LineKind::Decorator => Style::default().fg(theme.secondary),
        LineKind::Definition => Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
        LineKind::Plain => Style::default().fg(theme.fg),
    }
}

/// Header rows and the code window.
fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Number of source lines visible at once in `area`.
pub fn visible_lines(area: Rect) -> usize {
    let (_, window) = split(area);
    window.height.saturating_sub(2) as usize
}

/// Largest scroll offset that still fills the window.
pub fn max_scroll(area: Rect) -> usize {
    clamp_scroll(SOURCE_CODE.lines().count(), visible_lines(area))
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let (header, window) = split(area);

    let header_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(36)])
        .split(header);

    frame.render_widget(
        Paragraph::new(heading(
            theme,
            "Source Code",
            "Complete, single-file implementation of ChainForge.",
        )),
        header_cols[0],
    );

    let copy_label = if app.copied_recently() {
        " ✓ Copied "
    } else {
        " [c] Copy Code "
    };
    let buttons = Line::from(vec![
        Span::styled(
            " [d] Download .py ",
            Style::default().fg(theme.fg).bg(theme.surface),
        ),
        Span::raw(" "),
        Span::styled(
            copy_label,
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(buttons), header_cols[1]);

    let visible = visible_lines(area);
    let offset = app.source_scroll.min(max_scroll(area));
    let total = SOURCE_CODE.lines().count();
    let number_width = total.to_string().len();

    let lines: Vec<Line> = SOURCE_CODE
        .lines()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, text)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    Style::default().fg(theme.fg_dim),
                ),
                Span::styled(text, kind_style(classify(text), theme)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.fg_dim))
        .title(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(theme.error)),
            Span::styled("● ", Style::default().fg(theme.secondary)),
            Span::styled("● ", Style::default().fg(theme.accent)),
            Span::styled(
                format!(" {} ", SOURCE_FILENAME),
                Style::default().fg(theme.fg_dim),
            ),
        ]))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {}-{} of {} ", offset + 1, (offset + visible).min(total), total),
                Style::default().fg(theme.fg_dim),
            ))
            .right_aligned(),
        );

    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.surface))
            .block(block),
        window,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_banners() {
        assert_eq!(classify("# =========================================="), LineKind::Banner);
        assert_eq!(classify("# 1. Core Abstractions & Runnables"), LineKind::Banner);
    }

    #[test]
    fn test_classify_comments_and_code() {
        assert_eq!(classify("            # Simple chaining for stream"), LineKind::Comment);
        assert_eq!(classify("class Runnable(ABC):"), LineKind::Definition);
        assert_eq!(classify("    async def invoke(self, input: Any):"), LineKind::Definition);
        assert_eq!(classify("    def __init__(self, func: Callable):"), LineKind::Definition);
        assert_eq!(classify("    @abstractmethod"), LineKind::Decorator);
        assert_eq!(
            classify("    \"\"\"Base class for all chainable components.\"\"\""),
            LineKind::Docstring
        );
        assert_eq!(classify("import asyncio"), LineKind::Plain);
        assert_eq!(classify(""), LineKind::Plain);
    }

    #[test]
    fn test_source_has_section_banners() {
        let banners = SOURCE_CODE
            .lines()
            .filter(|l| classify(l) == LineKind::Banner)
            .count();
        assert!(banners >= 3);
    }

    #[test]
    fn test_max_scroll_leaves_last_page_visible() {
        let area = Rect::new(0, 0, 100, 40);
        let total = SOURCE_CODE.lines().count();
        assert_eq!(max_scroll(area) + visible_lines(area), total);
    }
}
