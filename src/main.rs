//! # ChainForge Studio Entry Point
//!
//! This is the main entry point for the ChainForge Studio TUI application.
//!
//! ## Overview
//!
//! ChainForge Studio is a terminal showcase for ChainForge, a single-file
//! Python framework for LLM chains. It presents the framework's source code and
//! documentation, and an agent simulator that asks Gemini to role-play a
//! ChainForge agent run and reveals the transcript line by line.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive studio (needs API_KEY for the simulator)
//! chainforge-studio
//!
//! # Override theme and model
//! chainforge-studio --theme "Tokyo Night" --model gemini-2.0-flash
//!
//! # Run one simulation and print the console log
//! chainforge-studio --prompt "Calculate 25 * 4 then summarize the result"
//!
//! # Print chainforge.py and exit
//! chainforge-studio --print-source > chainforge.py
//! ```
//!
//! ## Key Bindings
//!
//! ### Everywhere
//! - `Ctrl+C` - Quit
//! - `Tab` / `Shift+Tab` - Next / previous screen
//! - `F1`-`F4` - Jump to a screen
//!
//! ### Overview, Source Code, Documentation
//! - `q` - Quit
//! - `1`-`4` - Jump to a screen
//! - `m` - Toggle the sidebar
//! - `t` - Cycle the color theme
//! - `j` / `k`, `PageDown` / `PageUp`, `g` / `G` - Scroll
//! - `Enter` (Overview) - Open the source code
//! - `c` / `d` (Source Code) - Copy to clipboard / download `chainforge.py`
//!
//! ### Live Simulator
//! - Typing edits the prompt, `Enter` runs it
//! - `Ctrl+L` - Clear the console
//! - `Ctrl+U` - Clear the prompt
//! - `Up` / `Down` / `PageUp` / `PageDown` - Scroll the console
//! - `End` - Follow the newest line again
//! - `Esc` - Back to the overview

use chainforge::config::Config;
use chainforge::content::SOURCE_CODE;
use chainforge::export::{self, SOURCE_MIME};
use chainforge::genai::{GeminiClient, TextGenerator};
use chainforge::logging;
use chainforge::playground::{
    echo_line, run_simulation, Pacing, Playground, RunReport, SimulationEvent,
};
use chainforge::ui::{self, Action, App, Theme};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// ChainForge Studio - source, docs and a live agent simulator for ChainForge
#[derive(Parser, Debug)]
#[command(name = "chainforge-studio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal showcase for the ChainForge LLM framework", long_about = None)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Color theme (overrides the config file)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Gemini model id (overrides the config file)
    #[arg(short, long, value_name = "ID")]
    model: Option<String>,

    /// Directory that "Download .py" writes to
    #[arg(long, value_name = "DIR")]
    download_dir: Option<PathBuf>,

    /// Log file for the interactive studio
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Run one simulation without the TUI and print the console log
    #[arg(short, long, value_name = "TEXT", conflicts_with = "print_source")]
    prompt: Option<String>,

    /// Print chainforge.py to stdout and exit
    #[arg(long)]
    print_source: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Runtime workers catch their panics and the UI keeps going, so only
        // a panic on the UI thread tears the terminal down.
        if !is_ui_thread() {
            tracing::error!("background task panicked: {}", panic_info);
            return;
        }

        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// `#[tokio::main]` drives the UI loop on the process's main thread.
fn is_ui_thread() -> bool {
    std::thread::current().name() == Some("main")
}

/// Apply command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(theme) = &args.theme {
        config.theme.clone_from(theme);
    }
    if let Some(model) = &args.model {
        config.model.clone_from(model);
    }
}

fn resolve_theme(name: &str) -> Result<&'static Theme> {
    Theme::by_name(name).with_context(|| {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        format!("Unknown theme '{}'. Available: {}", name, names.join(", "))
    })
}

async fn run_application(args: Args) -> Result<()> {
    if args.print_source {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(SOURCE_CODE.as_bytes())
            .context("Failed to write source to stdout")?;
        return Ok(());
    }

    if args.prompt.is_some() {
        logging::init_stderr();
    } else if let Some(path) = args.log_file.clone().or_else(logging::default_log_path) {
        if let Err(e) = logging::init_file(&path) {
            eprintln!("Warning: logging disabled: {:#}", e);
        }
    }

    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);
    let theme = resolve_theme(&config.theme)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        model = %config.model,
        theme = theme.name,
        "starting chainforge-studio"
    );

    let generator: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::from_env(config.generation_settings()));

    // Headless mode: one run, printed to stdout
    if let Some(prompt) = args.prompt {
        let mut stdout = io::stdout();
        let report = run_headless(generator, prompt, Pacing::instant(), &mut stdout).await?;
        if report.failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let download_dir = args
        .download_dir
        .clone()
        .unwrap_or_else(export::default_download_dir);

    let playground = Playground::new(generator, config.pacing());
    let mut app = App::new(playground, theme);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader, &download_dir).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    tracing::info!("bye");
    Ok(())
}

/// Run one simulation outside the TUI and write the console lines to `out`.
async fn run_headless<W: Write>(
    generator: Arc<dyn TextGenerator>,
    prompt: String,
    pacing: Pacing,
    out: &mut W,
) -> Result<RunReport> {
    if prompt.trim().is_empty() {
        anyhow::bail!("Prompt must not be empty");
    }

    writeln!(out, "{}", echo_line(&prompt)).context("Failed to write output")?;

    let (tx, mut rx) = unbounded_channel();
    let task = tokio::spawn(run_simulation(generator, prompt, pacing, tx));

    let mut report = None;
    while let Some(event) = rx.recv().await {
        match event {
            SimulationEvent::Line(line) => {
                writeln!(out, "{}", line).context("Failed to write output")?;
            }
            SimulationEvent::Finished(r) => report = Some(r),
        }
    }
    task.await.context("Simulation task failed")?;
    out.flush().context("Failed to flush output")?;

    report.context("Simulation ended without a report")
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    download_dir: &Path,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| {
                app.set_viewport(ui::render::layout(f.area(), app.sidebar_open).main);
                ui::render(f, app);
            })
            .context("Failed to draw terminal UI")?;

        step(app, event_reader, download_dir, &mut io::stdout())?;

        if app.should_quit {
            return Ok(());
        }

        // Let spawned simulation tasks make progress between frames
        tokio::task::yield_now().await;
    }
}

/// One iteration of the event loop minus drawing: collect simulation output,
/// then wait briefly for a key and handle it.
fn step<W: Write>(
    app: &mut App,
    event_reader: &mut dyn EventReader,
    download_dir: &Path,
    clipboard: &mut W,
) -> Result<()> {
    app.tick();

    // Use a short timeout for polling so revealed lines and the pulse stay smooth
    let poll_timeout = if app.playground.is_running() {
        Duration::from_millis(16) // ~60fps while a simulation is running
    } else {
        Duration::from_millis(100)
    };

    if let Some(event) = event_reader.read_event(poll_timeout)? {
        handle_event(app, event, download_dir, clipboard);
    }
    Ok(())
}

fn handle_event<W: Write>(app: &mut App, event: Event, download_dir: &Path, clipboard: &mut W) {
    let Event::Key(key) = event else {
        return;
    };

    match ui::translate_key(app.current_view(), key) {
        Action::CopySource => match export::copy_to_clipboard(clipboard, SOURCE_CODE) {
            Ok(()) => {
                app.mark_copied();
                app.notify("Copied chainforge.py to the clipboard");
            }
            Err(e) => app.notify_error(format!("Copy failed: {:#}", e)),
        },
        Action::DownloadSource => match export::save_source(download_dir, SOURCE_CODE) {
            Ok(path) => app.notify(format!("Saved {} ({})", path.display(), SOURCE_MIME)),
            Err(e) => app.notify_error(format!("Download failed: {:#}", e)),
        },
        action => app.apply(action),
    }
}
