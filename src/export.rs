//! # Source Export
//!
//! The two affordances of the Source screen.
//!
//! - **Copy**: the text is sent to the terminal as an OSC 52 escape sequence
//!   (`ESC ] 52 ; c ; <base64> BEL`). Terminals that support it forward the
//!   text to the system clipboard.
//! - **Download**: the text is written to `chainforge.py` in the download
//!   directory.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name used when saving the source.
pub const SOURCE_FILENAME: &str = "chainforge.py";

/// MIME type of the saved source.
pub const SOURCE_MIME: &str = "text/x-python";

/// Build the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Ask the terminal behind `writer` to put `text` on the clipboard.
pub fn copy_to_clipboard<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write clipboard escape sequence")?;
    writer.flush().context("Failed to flush clipboard escape sequence")?;
    Ok(())
}

/// Write `text` to `dir/chainforge.py`, creating `dir` if needed.
pub fn save_source(dir: &Path, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory: {}", dir.display()))?;

    let path = dir.join(SOURCE_FILENAME);
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "saved source");
    Ok(path)
}

/// Where downloads go when no directory was configured: the user's Downloads
/// folder, else the current directory.
pub fn default_download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
