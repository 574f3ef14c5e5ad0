//! ChainForge Studio - terminal showcase for the ChainForge LLM framework
//!
//! This library provides the studio's static content, the Gemini-backed agent
//! simulator, source export, configuration and the ratatui interface.

pub mod config;
pub mod content;
pub mod export;
pub mod genai;
pub mod logging;
pub mod playground;
pub mod ui;
