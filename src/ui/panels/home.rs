//! Overview screen: logo, headline, tagline, call to action and feature cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content::{Feature, BANNER, FEATURES, HEADLINE, TAGLINE};
use crate::ui::app::App;
use crate::ui::theme::Theme;

/// Widest the centered column gets on large terminals.
const MAX_WIDTH: u16 = 96;

/// Below this width the feature cards stack vertically.
const STACK_BELOW: u16 = 72;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let column = centered_column(area, MAX_WIDTH);
    let stacked = column.width < STACK_BELOW;
    let cards_height = if stacked { 4 * 3 } else { 6 };
    let banner_height = BANNER.lines().count() as u16;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(banner_height),
            Constraint::Length(1),
            Constraint::Length(2), // Headline
            Constraint::Length(1),
            Constraint::Length(3), // Tagline
            Constraint::Length(1),
            Constraint::Length(1), // Call to action
            Constraint::Length(1),
            Constraint::Length(cards_height),
            Constraint::Fill(1),
        ])
        .split(column);

    let banner: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.accent))))
        .collect();
    frame.render_widget(Paragraph::new(banner).alignment(Alignment::Center), rows[1]);

    let headline = vec![
        Line::from(Span::styled(
            HEADLINE[0],
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HEADLINE[1],
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(headline).alignment(Alignment::Center), rows[3]);

    frame.render_widget(
        Paragraph::new(TAGLINE)
            .style(Style::default().fg(theme.fg_dim))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[5],
    );

    let cta = Line::from(vec![
        Span::styled(
            " [Enter] Get the Code → ",
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            " [3] Try the Simulator ",
            Style::default().fg(theme.fg).bg(theme.surface),
        ),
    ]);
    frame.render_widget(Paragraph::new(cta).alignment(Alignment::Center), rows[7]);

    render_features(frame, rows[9], theme, stacked);
}

fn render_features(frame: &mut Frame, area: Rect, theme: &Theme, stacked: bool) {
    let (direction, constraint) = if stacked {
        (Direction::Vertical, Constraint::Length(4))
    } else {
        (Direction::Horizontal, Constraint::Ratio(1, 3))
    };
    let cells = Layout::default()
        .direction(direction)
        .constraints([constraint; 3])
        .spacing(if stacked { 0u16 } else { 2u16 })
        .split(area);

    for (feature, cell) in FEATURES.iter().zip(cells.iter()) {
        frame.render_widget(feature_card(feature, theme), *cell);
    }
}

fn feature_card<'a>(feature: &'a Feature, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(feature.body)
        .style(Style::default().fg(theme.fg_dim).bg(theme.surface))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.fg_dim))
                .title(Span::styled(
                    format!(" {} ", feature.title),
                    Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD),
                )),
        )
}

/// `area` narrowed to at most `max_width` columns, horizontally centered.
pub(crate) fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
