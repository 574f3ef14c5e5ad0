use crate::content::{PRODUCT_NAME, PRODUCT_VERSION, PROJECT_LINK};
use crate::ui::app::App;
use crate::ui::panels;
use crate::ui::router::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Sidebar width in columns, border included.
pub const SIDEBAR_WIDTH: u16 = 28;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub footer: Rect,
}

/// Split the terminal into sidebar, main panel and footer.
pub fn layout(area: Rect, sidebar_open: bool) -> AppLayout {
    // Main layout: Body + Footer
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let (sidebar, body) = if sidebar_open && rows[0].width > SIDEBAR_WIDTH * 2 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[0]);
        (Some(cols[0]), cols[1])
    } else {
        (None, rows[0])
    };

    AppLayout {
        sidebar,
        main: body.inner(Margin {
            horizontal: 2,
            vertical: 1,
        }),
        footer: rows[1],
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let regions = layout(area, app.sidebar_open);
    if let Some(sidebar) = regions.sidebar {
        render_sidebar(frame, app, sidebar);
    }
    panels::render(frame, regions.main, app);
    render_footer(frame, app, regions.footer);
}

fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.fg_dim))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Brand
            Constraint::Min(0),    // Nav
            Constraint::Length(2), // Link
        ])
        .split(inner);

    let brand = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " CF ",
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                PRODUCT_NAME,
                Style::default()
                    .fg(theme.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {}", PRODUCT_VERSION),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(brand), chunks[0]);

    let current = app.current_view();
    let mut nav = vec![Line::default()];
    for view in View::ALL {
        let label = format!(" {} {:<3} {}", view.index() + 1, view.icon(), view.label());
        let padded = format!("{:<width$}", label, width = inner.width as usize);
        let style = if view == current {
            Style::default()
                .fg(theme.accent)
                .bg(theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_dim)
        };
        nav.push(Line::from(Span::styled(padded, style)));
    }
    frame.render_widget(Paragraph::new(nav), chunks[1]);

    let link = vec![
        Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(Span::styled(
            format!(" ⌂ {}", PROJECT_LINK),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(link), chunks[2]);
}

/// Key help for the footer.
pub fn help_text(view: View) -> &'static str {
    match view {
        View::Home => " Enter: get the code | 1-4/Tab: switch | m: menu | t: theme | q: quit",
        View::Source => {
            " c: copy | d: download | j/k: scroll | g/G: top/bottom | Tab: switch | q: quit"
        }
        View::Playground => {
            " Enter: run | Ctrl+L: clear | Ctrl+U: clear input | ↑/↓: scroll | End: follow | Esc: back | Ctrl+C: quit"
        }
        View::Docs => " j/k: scroll | PgUp/PgDn: page | g/G: top/bottom | Tab: switch | q: quit",
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let mut spans = vec![Span::styled(
        help_text(app.current_view()),
        Style::default().fg(theme.fg_dim),
    )];

    if let Some(flash) = app.flash() {
        let color = if flash.is_error {
            theme.error
        } else {
            theme.accent
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            flash.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface));
    frame.render_widget(footer, area);
}
