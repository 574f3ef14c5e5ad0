//! # Log Sequencer
//!
//! Drives one simulated run and reveals its output gradually so the console
//! looks like a live agent.
//!
//! ```text
//! submit ──► echo line ──► pre-delay ──► request ──► line, delay, line, delay ... ──► Finished
//! ```
//!
//! The echo line is appended synchronously by [`Playground::submit`]; everything
//! after it runs in a spawned task and reaches the UI through an unbounded
//! channel, which keeps lines in source order.
//!
//! [`Playground::submit`]: super::Playground::submit

use super::{RunReport, SimulationEvent};
use crate::genai::{simulate, SimulationOutcome, TextGenerator};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;

/// Default pause between the echo line and the request.
pub const DEFAULT_PRE_DELAY: Duration = Duration::from_millis(600);

/// Default pause after each revealed line.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(100);

/// Reveal timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub pre_delay: Duration,
    pub line_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pre_delay: DEFAULT_PRE_DELAY,
            line_delay: DEFAULT_LINE_DELAY,
        }
    }
}

impl Pacing {
    /// No pauses at all.
    pub fn instant() -> Self {
        Self {
            pre_delay: Duration::ZERO,
            line_delay: Duration::ZERO,
        }
    }
}

/// The line echoed into the console when a prompt is submitted.
pub fn echo_line(prompt: &str) -> String {
    format!("> User Input: \"{}\"", prompt)
}

/// Split a transcript into display lines.
///
/// A text with `k` line breaks yields `k + 1` lines, empty ones included.
pub fn split_transcript(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

impl SimulationOutcome {
    /// Lines to reveal for this outcome. A failure is always exactly one line.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            SimulationOutcome::Transcript(text) => split_transcript(&text),
            SimulationOutcome::Failure(line) => vec![line],
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Run one simulation and stream its lines into `sink`.
///
/// Always ends with [`SimulationEvent::Finished`] unless the receiver is gone,
/// in which case the run stops quietly.
pub async fn run_simulation(
    generator: Arc<dyn TextGenerator>,
    prompt: String,
    pacing: Pacing,
    sink: UnboundedSender<SimulationEvent>,
) {
    let started_at = Utc::now();
    let clock = Instant::now();

    pause(pacing.pre_delay).await;

    let outcome = simulate(generator.as_ref(), &prompt).await;
    let failed = outcome.is_failure();
    let lines = outcome.into_lines();
    let count = lines.len();

    for line in lines {
        if sink.send(SimulationEvent::Line(line)).is_err() {
            tracing::debug!("playground receiver dropped mid-run");
            return;
        }
        pause(pacing.line_delay).await;
    }

    let report = RunReport {
        started_at,
        elapsed: clock.elapsed(),
        lines: count,
        failed,
    };
    tracing::info!(
        lines = count,
        failed,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "simulation finished"
    );

    let _ = sink.send(SimulationEvent::Finished(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::{GenerationError, TextGenerator};
    use async_trait::async_trait;
    use tokio::sync::mpsc::unbounded_channel;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            Ok(format!("Thought: {}\nAction: Calculator\nFinal Answer: 100", prompt))
        }
    }

    #[test]
    fn test_echo_line_format() {
        assert_eq!(
            echo_line("Calculate 25 * 4 then summarize the result"),
            "> User Input: \"Calculate 25 * 4 then summarize the result\""
        );
    }

    #[test]
    fn test_split_counts_line_breaks() {
        assert_eq!(split_transcript("single"), vec!["single"]);
        assert_eq!(split_transcript("a\nb\nc").len(), 3);
        assert_eq!(split_transcript("a\n"), vec!["a", ""]);
        assert_eq!(split_transcript("\n\n").len(), 3);
        assert_eq!(split_transcript(""), vec![""]);
    }

    #[test]
    fn test_split_drops_carriage_returns() {
        assert_eq!(split_transcript("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_failure_is_one_line() {
        let outcome = SimulationOutcome::Failure("[ERROR] Simulation failed: x.".to_string());
        assert_eq!(outcome.into_lines().len(), 1);
    }

    #[test]
    fn test_default_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.pre_delay, Duration::from_millis(600));
        assert_eq!(pacing.line_delay, Duration::from_millis(100));
        assert_eq!(Pacing::instant().line_delay, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_run_simulation_emits_lines_then_finished() {
        let (tx, mut rx) = unbounded_channel();
        run_simulation(Arc::new(Echo), "2+2".to_string(), Pacing::instant(), tx).await;

        let mut lines = Vec::new();
        let mut report = None;
        while let Ok(event) = rx.try_recv() {
            match event {
                SimulationEvent::Line(line) => lines.push(line),
                SimulationEvent::Finished(r) => report = Some(r),
            }
        }

        assert_eq!(lines, vec!["Thought: 2+2", "Action: Calculator", "Final Answer: 100"]);
        let report = report.expect("finished event");
        assert_eq!(report.lines, 3);
        assert!(!report.failed);
    }

    #[tokio::test]
    async fn test_run_simulation_stops_when_receiver_dropped() {
        let (tx, rx) = unbounded_channel();
        drop(rx);
        // Must return instead of hanging or panicking.
        run_simulation(Arc::new(Echo), "x".to_string(), Pacing::instant(), tx).await;
    }
}
