//! # Theme System
//!
//! Provides a centralized color theme system for the studio.
//!
//! ## Overview
//!
//! The [`Theme`] struct defines all colors used throughout the UI. Rendering
//! code references theme fields instead of hardcoded `ratatui::style::Color`
//! values. The active theme is chosen at startup (config or `--theme`) and can
//! be cycled at runtime with `t`.
//!
//! ## Built-in Themes
//!
//! - **Forge** (default) - emerald on near-black, the ChainForge brand palette
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights

use ratatui::style::Color;

/// All colors used by the studio, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, matched case-insensitively by `--theme`.
    pub name: &'static str,

    // -- Background colors --
    /// Main background.
    pub bg: Color,
    /// Raised surfaces: sidebar, code windows, console.
    pub surface: Color,

    // -- Foreground / text colors --
    /// Primary text color.
    pub fg: Color,
    /// Muted/secondary text (hints, footer, line numbers, comments).
    pub fg_dim: Color,
    /// Headings and titles.
    pub heading: Color,

    // -- Accent / brand colors --
    /// Brand accent: focused borders, active nav entry, buttons.
    pub accent: Color,
    /// Second brand color, used for the headline gradient and section banners.
    pub secondary: Color,

    // -- Console colors --
    /// Console lines starting with `>`.
    pub echo: Color,
    /// `[ERROR]` console lines.
    pub error: Color,

    // -- Selection --
    /// Background of the active sidebar entry.
    pub selection_bg: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Return the default theme (Forge).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Forge (default)
    Theme {
        name: "Forge",
        bg: Color::Rgb(3, 7, 18),             // gray-950
        surface: Color::Rgb(17, 24, 39),      // gray-900
        fg: Color::Rgb(209, 213, 219),        // gray-300
        fg_dim: Color::Rgb(107, 114, 128),    // gray-500
        heading: Color::Rgb(255, 255, 255),
        accent: Color::Rgb(16, 185, 129),     // emerald-500
        secondary: Color::Rgb(34, 211, 238),  // cyan-400
        echo: Color::Rgb(52, 211, 153),       // emerald-400
        error: Color::Rgb(248, 113, 113),     // red-400
        selection_bg: Color::Rgb(6, 46, 38),  // emerald-500/10 over gray-950
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        surface: Color::Rgb(24, 24, 37),       // mantle
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        heading: Color::Rgb(205, 214, 244),    // text
        accent: Color::Rgb(166, 227, 161),     // green
        secondary: Color::Rgb(137, 220, 235),  // sky
        echo: Color::Rgb(148, 226, 213),       // teal
        error: Color::Rgb(243, 139, 168),      // red
        selection_bg: Color::Rgb(69, 71, 90),  // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        surface: Color::Rgb(33, 34, 44),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        heading: Color::Rgb(248, 248, 242),
        accent: Color::Rgb(80, 250, 123),     // green
        secondary: Color::Rgb(139, 233, 253), // cyan
        echo: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        selection_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        surface: Color::Rgb(59, 66, 82),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(106, 117, 138),
        heading: Color::Rgb(236, 239, 244),
        accent: Color::Rgb(163, 190, 140),    // green
        secondary: Color::Rgb(136, 192, 208), // frost
        echo: Color::Rgb(143, 188, 187),
        error: Color::Rgb(191, 97, 106),
        selection_bg: Color::Rgb(67, 76, 94),
    },
    // 4 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        surface: Color::Rgb(22, 22, 30),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        heading: Color::Rgb(192, 202, 245),
        accent: Color::Rgb(158, 206, 106),    // green
        secondary: Color::Rgb(125, 207, 255), // cyan
        echo: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        selection_bg: Color::Rgb(41, 46, 66),
    },
];
