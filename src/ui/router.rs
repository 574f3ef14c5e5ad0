//! Screen selection.

/// The four screens of the studio, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Home,
    Source,
    Playground,
    Docs,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Source, View::Playground, View::Docs];

    /// Parse a screen identifier. Unknown identifiers fall back to [`View::Home`].
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "source" => View::Source,
            "playground" => View::Playground,
            "docs" => View::Docs,
            _ => View::Home,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Source => "source",
            View::Playground => "playground",
            View::Docs => "docs",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Overview",
            View::Source => "Source Code",
            View::Playground => "Live Simulator",
            View::Docs => "Documentation",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            View::Home => "▣",
            View::Source => "</>",
            View::Playground => "▶",
            View::Docs => "☰",
        }
    }

    /// Position in the sidebar, starting at 0.
    pub fn index(self) -> usize {
        match self {
            View::Home => 0,
            View::Source => 1,
            View::Playground => 2,
            View::Docs => 3,
        }
    }

    /// The view bound to hotkey `n` (1-based), if any.
    pub fn from_hotkey(n: u32) -> Option<Self> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }
}

/// Holds the current screen. Every transition is accepted; there is no history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn navigate(&mut self, view: View) {
        if view != self.current {
            tracing::debug!(from = self.current.id(), to = view.id(), "navigate");
        }
        self.current = view;
    }

    pub fn next(&mut self) {
        let next = View::ALL[(self.current.index() + 1) % View::ALL.len()];
        self.navigate(next);
    }

    pub fn previous(&mut self) {
        let len = View::ALL.len();
        let prev = View::ALL[(self.current.index() + len - 1) % len];
        self.navigate(prev);
    }
}
