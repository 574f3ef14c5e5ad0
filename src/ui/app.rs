use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use super::input::Action;
use super::panels;
use super::router::{Router, View};
use super::theme::Theme;
use crate::playground::Playground;

/// How long the Source screen shows "✓ Copied" after a copy.
pub const COPIED_FLASH: Duration = Duration::from_secs(2);

/// How long a footer message stays up.
pub const FLASH_DURATION: Duration = Duration::from_secs(4);

/// Half-period of the running indicator pulse.
const PULSE: Duration = Duration::from_millis(500);

/// A short message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

pub struct App {
    pub router: Router,
    pub playground: Playground,
    pub theme: &'static Theme,
    pub sidebar_open: bool,
    /// First visible source line.
    pub source_scroll: usize,
    /// First visible docs row.
    pub docs_scroll: usize,
    /// Log lines hidden below the console window; 0 means follow the newest line.
    pub log_scroll_back: usize,
    pub should_quit: bool,
    /// Area of the main panel as of the last draw.
    viewport: Rect,
    copied_at: Option<Instant>,
    flash: Option<Flash>,
    started: Instant,
}

impl App {
    pub fn new(playground: Playground, theme: &'static Theme) -> Self {
        Self {
            router: Router::new(),
            playground,
            theme,
            sidebar_open: true,
            source_scroll: 0,
            docs_scroll: 0,
            log_scroll_back: 0,
            should_quit: false,
            viewport: Rect::new(0, 0, 80, 24),
            copied_at: None,
            flash: None,
            started: Instant::now(),
        }
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    /// Record the main panel area so paging and scroll limits match what is drawn.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Perform `action`. `CopySource` and `DownloadSource` are no-ops here:
    /// their side effects belong to the caller, which reports back through
    /// [`App::notify`] and [`App::mark_copied`].
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => self.router.next(),
            Action::PreviousView => self.router.previous(),
            Action::Navigate(view) => self.router.navigate(view),
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::CycleTheme => {
                self.theme = self.theme.next();
                self.notify(format!("Theme: {}", self.theme.name));
            }
            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(self.page_size()),
            Action::PageDown => self.scroll_down(self.page_size()),
            Action::ScrollTop => self.scroll_up(usize::MAX),
            Action::ScrollBottom => self.scroll_down(usize::MAX),
            Action::CopySource | Action::DownloadSource => {}
            Action::InputChar(c) => {
                if !self.playground.is_running() {
                    self.playground.push_char(c);
                }
            }
            Action::InputBackspace => {
                if !self.playground.is_running() {
                    self.playground.pop_char();
                }
            }
            Action::ClearInput => {
                if !self.playground.is_running() {
                    self.playground.clear_input();
                }
            }
            Action::Submit => {
                if self.playground.submit() {
                    self.log_scroll_back = 0;
                }
            }
            Action::ClearLog => {
                self.playground.clear_log();
                self.log_scroll_back = 0;
            }
            Action::FollowLog => self.log_scroll_back = 0,
            Action::None => {}
        }
    }

    /// Rows moved by PageUp/PageDown in the current view.
    fn page_size(&self) -> usize {
        let rows = match self.current_view() {
            View::Source => panels::source::visible_lines(self.viewport),
            View::Playground => panels::playground::visible_rows(self.viewport),
            View::Home | View::Docs => self.viewport.height as usize,
        };
        rows.saturating_sub(1).max(1)
    }

    fn scroll_up(&mut self, by: usize) {
        match self.current_view() {
            View::Home => {}
            View::Source => self.source_scroll = self.source_scroll.saturating_sub(by),
            View::Docs => self.docs_scroll = self.docs_scroll.saturating_sub(by),
            View::Playground => {
                let max_back = self.playground.log().len().saturating_sub(1);
                self.log_scroll_back = self.log_scroll_back.saturating_add(by).min(max_back);
            }
        }
    }

    fn scroll_down(&mut self, by: usize) {
        match self.current_view() {
            View::Home => {}
            View::Source => {
                let max = panels::source::max_scroll(self.viewport);
                self.source_scroll = self.source_scroll.saturating_add(by).min(max);
            }
            View::Docs => {
                let max = panels::docs::max_scroll(self.viewport, self.theme);
                self.docs_scroll = self.docs_scroll.saturating_add(by).min(max);
            }
            View::Playground => self.log_scroll_back = self.log_scroll_back.saturating_sub(by),
        }
    }

    /// Move finished simulation output into the log and expire timed messages.
    ///
    /// While the console is scrolled back the hold offset grows with each new
    /// line, so the visible lines stay put. Returns `true` if anything changed.
    pub fn tick(&mut self) -> bool {
        let before = self.playground.log().len();
        let mut changed = self.playground.pump();
        let after = self.playground.log().len();

        if self.log_scroll_back > 0 && after > before {
            self.log_scroll_back += after - before;
        }

        let now = Instant::now();
        if self
            .flash
            .as_ref()
            .is_some_and(|f| now.duration_since(f.shown_at) >= FLASH_DURATION)
        {
            self.flash = None;
            changed = true;
        }
        if self
            .copied_at
            .is_some_and(|at| now.duration_since(at) >= COPIED_FLASH)
        {
            self.copied_at = None;
            changed = true;
        }
        changed
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.flash = Some(Flash {
            message: message.into(),
            is_error: false,
            shown_at: Instant::now(),
        });
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "user-facing error");
        self.flash = Some(Flash {
            message,
            is_error: true,
            shown_at: Instant::now(),
        });
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    /// Start the "✓ Copied" indicator.
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub fn copied_recently(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPIED_FLASH)
    }

    /// Alternates every half second; drives the running indicators.
    pub fn pulse_on(&self) -> bool {
        (self.started.elapsed().as_millis() / PULSE.as_millis()) % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::{GenerationError, TextGenerator};
    use crate::playground::Pacing;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Silent;

    #[async_trait]
    impl TextGenerator for Silent {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok(String::new())
        }
    }

    fn app() -> App {
        let playground = Playground::new(Arc::new(Silent), Pacing::instant());
        App::new(playground, Theme::default_theme())
    }

    #[test]
    fn test_new_app_starts_on_home() {
        let app = app();
        assert_eq!(app.current_view(), View::Home);
        assert!(app.sidebar_open);
        assert!(!app.should_quit);
        assert!(app.flash().is_none());
        assert!(!app.copied_recently());
    }

    #[test]
    fn test_navigation_actions() {
        let mut app = app();
        app.apply(Action::NextView);
        assert_eq!(app.current_view(), View::Source);
        app.apply(Action::Navigate(View::Docs));
        assert_eq!(app.current_view(), View::Docs);
        app.apply(Action::PreviousView);
        assert_eq!(app.current_view(), View::Playground);
    }

    #[test]
    fn test_cycle_theme_notifies() {
        let mut app = app();
        app.apply(Action::CycleTheme);
        assert_eq!(app.theme.name, "Catppuccin Mocha");
        assert_eq!(
            app.flash().map(|f| f.message.as_str()),
            Some("Theme: Catppuccin Mocha")
        );
    }

    #[test]
    fn test_source_scroll_is_clamped() {
        let mut app = app();
        app.set_viewport(Rect::new(0, 0, 100, 30));
        app.apply(Action::Navigate(View::Source));

        app.apply(Action::ScrollUp);
        assert_eq!(app.source_scroll, 0);

        app.apply(Action::ScrollBottom);
        let max = panels::source::max_scroll(app.viewport());
        assert_eq!(app.source_scroll, max);
        app.apply(Action::ScrollDown);
        assert_eq!(app.source_scroll, max);

        app.apply(Action::ScrollTop);
        assert_eq!(app.source_scroll, 0);
    }

    #[test]
    fn test_home_ignores_scrolling() {
        let mut app = app();
        app.apply(Action::PageDown);
        assert_eq!(app.source_scroll, 0);
        assert_eq!(app.docs_scroll, 0);
    }

    #[test]
    fn test_copy_and_download_are_left_to_caller() {
        let mut app = app();
        app.apply(Action::Navigate(View::Source));
        app.apply(Action::CopySource);
        app.apply(Action::DownloadSource);
        assert!(!app.copied_recently());
        assert!(app.flash().is_none());

        app.mark_copied();
        assert!(app.copied_recently());
    }

    #[test]
    fn test_notify_error_sets_flag() {
        let mut app = app();
        app.notify_error("Download failed");
        let flash = app.flash().expect("flash set");
        assert!(flash.is_error);
        assert_eq!(flash.message, "Download failed");
    }
}
