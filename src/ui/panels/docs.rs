//! Documentation screen.
//!
//! Laid out as one long document of pre-wrapped lines so scrolling is a plain
//! row offset. Code samples are boxed by hand for the same reason.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::home::centered_column;
use super::{max_scroll as clamp_scroll, wrap_text};
use crate::content::docs::{DOCS_SUBTITLE, DOCS_TITLE};
use crate::content::{CodeSample, CONCEPTS, SECTIONS};
use crate::ui::app::App;
use crate::ui::theme::Theme;

const MAX_WIDTH: u16 = 100;

fn column(area: Rect) -> Rect {
    centered_column(area, MAX_WIDTH)
}

/// Build the whole document for a column `width` cells wide.
pub fn document(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let width = width.max(8);
    let body = Style::default().fg(theme.fg_dim);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        DOCS_TITLE,
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    )));
    for row in wrap_text(DOCS_SUBTITLE, width) {
        lines.push(Line::from(Span::styled(row, body)));
    }
    lines.push(Line::default());

    for card in CONCEPTS.iter() {
        lines.push(Line::from(vec![
            Span::styled("▍ ", Style::default().fg(theme.accent)),
            Span::styled(
                card.title,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for row in wrap_text(card.body, width - 2) {
            lines.push(Line::from(Span::styled(format!("  {}", row), body)));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme.fg_dim),
    )));

    for section in SECTIONS.iter() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )));
        for row in wrap_text(section.body, width) {
            lines.push(Line::from(Span::styled(row, body)));
        }
        if let Some(sample) = section.code {
            lines.push(Line::default());
            lines.extend(code_box(&sample, theme, width));
        }
    }

    lines
}

fn code_box(sample: &CodeSample, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let frame = Style::default().fg(theme.fg_dim);
    let code = Style::default().fg(theme.fg).bg(theme.surface);
    let inner = width.saturating_sub(4);

    let title: String = format!(" {} ", sample.filename)
        .chars()
        .take(width.saturating_sub(3))
        .collect();
    let fill = width.saturating_sub(3 + title.chars().count());
    let mut lines = vec![Line::from(vec![
        Span::styled("╭─", frame),
        Span::styled(title, Style::default().fg(theme.accent)),
        Span::styled(format!("{}╮", "─".repeat(fill)), frame),
    ])];

    for text in sample.code.trim_end().lines() {
        let mut shown: String = text.chars().take(inner).collect();
        let pad = inner.saturating_sub(shown.chars().count());
        shown.push_str(&" ".repeat(pad));
        lines.push(Line::from(vec![
            Span::styled("│ ", frame),
            Span::styled(shown, code),
            Span::styled(" │", frame),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!("╰{}╯", "─".repeat(width.saturating_sub(2))),
        frame,
    )));
    lines
}

/// Largest useful scroll offset for the document in `area`.
pub fn max_scroll(area: Rect, theme: &Theme) -> usize {
    let col = column(area);
    clamp_scroll(
        document(theme, col.width as usize).len(),
        col.height as usize,
    )
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let col = column(area);
    let lines = document(app.theme, col.width as usize);
    let offset = app
        .docs_scroll
        .min(clamp_scroll(lines.len(), col.height as usize));

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(offset)
        .take(col.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), col);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_document_contains_every_concept_and_sample() {
        let text: Vec<String> = document(Theme::default_theme(), 80)
            .iter()
            .map(plain)
            .collect();
        let joined = text.join("\n");
        for title in ["Runnable Protocol", "Agents", "Tools", "RAG"] {
            assert!(joined.contains(title), "missing concept {title}");
        }
        for file in ["basic_chain.py", "agent_with_tools.py", "rag_pipeline.py"] {
            assert!(joined.contains(file), "missing sample {file}");
        }
    }

    #[test]
    fn test_document_rows_fit_width() {
        for width in [20usize, 48, 80] {
            for line in document(Theme::default_theme(), width) {
                assert!(
                    plain(&line).chars().count() <= width,
                    "row too wide at {width}: {:?}",
                    plain(&line)
                );
            }
        }
    }

    #[test]
    fn test_narrow_columns_are_taller() {
        let theme = Theme::default_theme();
        assert!(document(theme, 30).len() > document(theme, 100).len());
    }
}
