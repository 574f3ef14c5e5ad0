//! Live Simulator screen: console window and prompt input.
//!
//! The console auto-follows the newest line. Once the user scrolls up,
//! [`App::log_scroll_back`] holds the position (counted in log lines from the
//! end) until `End` is pressed or the log is cleared.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::{heading, wrap_text};
use crate::playground::RunReport;
use crate::ui::app::App;
use crate::ui::theme::Theme;

pub const EMPTY_HINT: &str = "Ready to simulate. Enter a prompt below.";
pub const PLACEHOLDER: &str = "E.g., 'Calculate 25 * 4 then summarize the result'";
pub const STATUS_RUNNING: &str = "Initializing ChainForge Agent...";

/// Header, console window, input box.
fn split(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Rows available for log text inside the console window.
pub fn visible_rows(area: Rect) -> usize {
    let (_, console, _) = split(area);
    console.height.saturating_sub(2) as usize
}

fn line_style(line: &str, theme: &Theme) -> Style {
    if line.starts_with("[ERROR]") {
        Style::default().fg(theme.error)
    } else if line.starts_with('>') {
        Style::default().fg(theme.echo)
    } else {
        Style::default().fg(theme.fg)
    }
}

/// One-line summary of the last completed run.
pub fn run_summary(report: &RunReport) -> String {
    let mut summary = format!(
        "Last run {} · {} line{} in {:.1}s",
        report.started_at.with_timezone(&Local).format("%H:%M:%S"),
        report.lines,
        if report.lines == 1 { "" } else { "s" },
        report.elapsed.as_secs_f32(),
    );
    if report.failed {
        summary.push_str(" · failed");
    }
    summary
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (header, console, input) = split(area);

    render_header(frame, header, app);
    render_console(frame, console, app);
    render_input(frame, input, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(area);

    frame.render_widget(
        Paragraph::new(heading(
            theme,
            "Agent Simulator",
            "Test ChainForge agent logic. Powered by Gemini (simulated runtime).",
        )),
        cols[0],
    );

    let mut right = vec![Line::from(Span::styled(
        "[Ctrl+L] Clear Console",
        Style::default().fg(theme.fg_dim),
    ))];
    if let Some(report) = app.playground.last_run() {
        let color = if report.failed { theme.error } else { theme.fg_dim };
        right.push(Line::from(Span::styled(
            run_summary(report),
            Style::default().fg(color),
        )));
    }
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}

fn render_console(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let pg = &app.playground;

    let dot = if pg.is_running() && !app.pulse_on() {
        Style::default().fg(theme.fg_dim)
    } else {
        Style::default().fg(theme.accent)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.fg_dim))
        .title(Span::styled(
            " console output ",
            Style::default().fg(theme.fg_dim),
        ))
        .title(
            Line::from(vec![
                Span::styled("● ", dot),
                Span::styled("online ", Style::default().fg(theme.accent)),
            ])
            .right_aligned(),
        )
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if pg.log().is_empty() && !pg.is_running() {
        let mut rows = vec![Line::default(); (inner.height as usize).saturating_sub(3) / 2];
        rows.push(Line::from(Span::styled(
            "✦",
            Style::default().fg(theme.fg_dim),
        )));
        rows.push(Line::default());
        rows.push(Line::from(Span::styled(
            EMPTY_HINT,
            Style::default().fg(theme.fg_dim),
        )));
        frame.render_widget(Paragraph::new(rows).alignment(Alignment::Center), inner);
        return;
    }

    let width = inner.width.max(1) as usize;
    let lines = pg.log().lines();
    let end = lines.len().saturating_sub(app.log_scroll_back);

    let mut rows: Vec<Line> = Vec::new();
    for line in &lines[..end] {
        let style = line_style(line, theme);
        for row in wrap_text(line, width) {
            rows.push(Line::from(Span::styled(row, style)));
        }
    }

    if pg.is_running() && app.log_scroll_back == 0 {
        let cursor = if app.pulse_on() { "_" } else { " " };
        rows.push(Line::from(vec![
            Span::styled(
                format!("{} ", STATUS_RUNNING),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(cursor, Style::default().fg(theme.accent)),
        ]));
    }

    let skip = rows.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line> = rows.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), inner);

    if app.log_scroll_back > 0 {
        let marker = Line::from(Span::styled(
            format!(" ↓ {} more · [End] follow ", app.log_scroll_back),
            Style::default().fg(theme.bg).bg(theme.fg_dim),
        ))
        .right_aligned();
        let bottom = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1.min(area.height),
            x: area.x + 1,
            width: area.width.saturating_sub(2),
        };
        frame.render_widget(Paragraph::new(marker), bottom);
    }
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let pg = &app.playground;
    let running = pg.is_running();

    let (text, style) = if pg.input.is_empty() {
        (PLACEHOLDER.to_string(), Style::default().fg(theme.fg_dim))
    } else if running {
        (pg.input.clone(), Style::default().fg(theme.fg_dim))
    } else {
        (format!("{}▏", pg.input), Style::default().fg(theme.fg))
    };

    let (action, action_style) = if running {
        (" ⟳ Running ", Style::default().fg(theme.fg_dim).bg(theme.bg))
    } else {
        (
            " [Enter] Run ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    };

    let border = if running { theme.fg_dim } else { theme.accent };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title_bottom(Line::from(Span::styled(action, action_style)).right_aligned());

    // Keep the end of long prompts, where typing happens, in view.
    let inner_width = area.width.saturating_sub(2) as usize;
    let chars = text.chars().count();
    let shown: String = if chars > inner_width {
        text.chars().skip(chars - inner_width).collect()
    } else {
        text
    };

    frame.render_widget(Paragraph::new(shown).style(style).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::time::Duration;

    #[test]
    fn test_line_style_colors() {
        let theme = Theme::default_theme();
        assert_eq!(line_style("> User Input: \"x\"", theme).fg, Some(theme.echo));
        assert_eq!(
            line_style("[ERROR] Simulation failed: boom.", theme).fg,
            Some(theme.error)
        );
        assert_eq!(line_style("Thought: hmm", theme).fg, Some(theme.fg));
    }

    #[test]
    fn test_run_summary() {
        let report = RunReport {
            started_at: Utc::now(),
            elapsed: Duration::from_millis(2400),
            lines: 1,
            failed: true,
        };
        let summary = run_summary(&report);
        assert!(summary.starts_with("Last run "));
        assert!(summary.contains("1 line in 2.4s"));
        assert!(summary.ends_with("· failed"));
    }
}
