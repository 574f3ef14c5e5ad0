//! # UI Module
//!
//! Terminal user interface of the studio.
//!
//! ## Components
//!
//! - [`App`] - Application state (current view, scroll offsets, flash messages)
//! - [`router`] - The four views and the current-view holder
//! - [`input`] - Key events to [`input::Action`]s
//! - [`mod@render`] - Frame layout: sidebar, main panel, footer
//! - [`panels`] - One renderer per view
//! - [`theme`] - Built-in color themes
//!
//! ## Layout
//!
//! ```text
//! ┌────────────┬────────────────────────────────────┐
//! │ CF  Chain- │                                    │
//! │     Forge  │                                    │
//! │────────────│          Current panel             │
//! │ 1 Overview │  (Overview / Source Code /         │
//! │ 2 Source   │   Live Simulator / Documentation)  │
//! │ 3 Live Sim │                                    │
//! │ 4 Docs     │                                    │
//! │────────────│                                    │
//! │ github.com │                                    │
//! ├────────────┴────────────────────────────────────┤
//! │ key help                          flash message │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod input;
pub mod panels;
pub mod render;
pub mod router;
pub mod theme;

pub use app::App;
pub use input::{translate_key, Action};
pub use render::render;
pub use router::{Router, View};
pub use theme::Theme;
