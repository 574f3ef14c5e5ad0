//! # Agent Simulator
//!
//! State behind the Playground screen: the prompt being edited, the console
//! [`LogBuffer`], and the [`RunState`] guard that allows one simulated run at
//! a time.
//!
//! ## Run lifecycle
//!
//! 1. [`Playground::submit`] rejects the prompt if a run is active or the
//!    input is blank. Otherwise it appends the echo line, switches to
//!    [`RunState::Running`] and spawns [`sequencer::run_simulation`].
//! 2. The UI loop calls [`Playground::pump`] every tick, which moves revealed
//!    lines from the channel into the log.
//! 3. [`SimulationEvent::Finished`] switches back to [`RunState::Idle`]. A
//!    run task that ends without sending it (a panic) is closed with
//!    [`ABORTED_LINE`] instead.
//!
//! Submissions made while running are dropped, not queued.

pub mod log;
pub mod sequencer;

pub use log::LogBuffer;
pub use sequencer::{echo_line, run_simulation, split_transcript, Pacing};

use crate::genai::TextGenerator;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Prompt pre-filled in the input box.
pub const DEFAULT_PROMPT: &str = "Build a RAG agent to answer questions about ChainForge.";

/// Appended when the run task dies before finishing.
pub const ABORTED_LINE: &str = "[ERROR] Simulation aborted unexpectedly.";

/// Whether a simulated run is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub lines: usize,
    pub failed: bool,
}

/// Message from a running simulation to the playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationEvent {
    Line(String),
    Finished(RunReport),
}

pub struct Playground {
    pub input: String,
    log: LogBuffer,
    state: RunState,
    last_run: Option<RunReport>,
    generator: Arc<dyn TextGenerator>,
    pacing: Pacing,
    events_tx: UnboundedSender<SimulationEvent>,
    events_rx: UnboundedReceiver<SimulationEvent>,
    task: Option<RunTask>,
}

struct RunTask {
    handle: JoinHandle<()>,
    started_at: DateTime<Utc>,
    clock: Instant,
}

impl Playground {
    pub fn new(generator: Arc<dyn TextGenerator>, pacing: Pacing) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            input: DEFAULT_PROMPT.to_string(),
            log: LogBuffer::new(),
            state: RunState::Idle,
            last_run: None,
            generator,
            pacing,
            events_tx,
            events_rx,
            task: None,
        }
    }

    pub fn log(&self) -> &LogBuffer {
        &self.log
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn last_run(&self) -> Option<&RunReport> {
        self.last_run.as_ref()
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Start a simulated run for the current input.
    ///
    /// Must be called from within a tokio runtime. Returns `false` without
    /// touching any state when a run is already active or the input is blank.
    pub fn submit(&mut self) -> bool {
        if self.state == RunState::Running || self.input.trim().is_empty() {
            return false;
        }

        let prompt = self.input.clone();
        tracing::info!(chars = prompt.chars().count(), "starting simulation");

        self.log.push(echo_line(&prompt));
        self.state = RunState::Running;

        let handle = tokio::spawn(run_simulation(
            Arc::clone(&self.generator),
            prompt,
            self.pacing,
            self.events_tx.clone(),
        ));
        self.task = Some(RunTask {
            handle,
            started_at: Utc::now(),
            clock: Instant::now(),
        });

        true
    }

    /// Apply every event the running simulation has produced so far.
    ///
    /// Returns `true` if the log or the run state changed.
    pub fn pump(&mut self) -> bool {
        // Checked before draining: a finished task has already sent everything.
        let task_done = self.task.as_ref().is_some_and(|t| t.handle.is_finished());

        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            changed = true;
        }

        if task_done {
            if let Some(task) = self.task.take() {
                if self.state == RunState::Running {
                    self.abort_run(&task);
                    changed = true;
                }
            }
        }
        changed
    }

    fn abort_run(&mut self, task: &RunTask) {
        tracing::error!("simulation task ended without finishing");
        self.log.push(ABORTED_LINE.to_string());
        self.last_run = Some(RunReport {
            started_at: task.started_at,
            elapsed: task.clock.elapsed(),
            lines: 1,
            failed: true,
        });
        self.state = RunState::Idle;
    }

    fn apply(&mut self, event: SimulationEvent) {
        match event {
            SimulationEvent::Line(line) => self.log.push(line),
            SimulationEvent::Finished(report) => {
                self.last_run = Some(report);
                self.state = RunState::Idle;
            }
        }
    }

    /// Empty the console. Lines still arriving from an active run keep appending.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}
