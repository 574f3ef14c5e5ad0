//! # Text Generation
//!
//! The studio's only network dependency: one text-generation call per
//! simulated run.
//!
//! ## Layers
//!
//! - [`TextGenerator`] - the seam the playground depends on. Production code
//!   injects a [`GeminiClient`]; tests inject in-memory fakes.
//! - [`GenerationSettings`] / [`GenerationRequest`] - the fixed model,
//!   temperature and system instruction that every call carries.
//! - [`simulate`] - the boundary that turns any outcome, including errors,
//!   into a displayable [`SimulationOutcome`]. Nothing past this function
//!   ever sees a [`GenerationError`].

pub mod gemini;

pub use gemini::GeminiClient;

use crate::content::SYSTEM_INSTRUCTION;
use async_trait::async_trait;
use thiserror::Error;

/// Model used for every simulation request.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature used for every simulation request.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Public Gemini API host.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Transcript shown when the model answers with an empty payload.
pub const NO_RESPONSE: &str = "> No response from simulation.";

/// Why a generation call failed.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (DNS, TLS, connection reset...).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Settings fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GenerationSettings {
    /// Build the request for one prompt under the fixed system instruction.
    pub fn request(&self, prompt: &str) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            system_instruction: SYSTEM_INSTRUCTION,
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

/// One generation call. Built per invocation, dropped after use.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: &'static str,
    pub model: String,
    pub temperature: f32,
}

/// Something that can turn a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`. An empty string means the model returned no text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Normalized result of one simulated run, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// Model output, verbatim. May contain line breaks.
    Transcript(String),
    /// A single-line diagnostic.
    Failure(String),
}

impl SimulationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Format the diagnostic line shown for a failed generation.
pub fn failure_line(error: &GenerationError) -> String {
    let message = error.to_string().replace(['\r', '\n'], " ");
    format!(
        "[ERROR] Simulation failed: {}. Ensure API_KEY is set in environment.",
        message.trim_end_matches('.')
    )
}

/// Run one generation call and absorb its outcome.
///
/// Never fails: errors become [`SimulationOutcome::Failure`], an empty
/// payload becomes the [`NO_RESPONSE`] placeholder.
pub async fn simulate(generator: &dyn TextGenerator, prompt: &str) -> SimulationOutcome {
    match generator.generate(prompt).await {
        Ok(text) if text.is_empty() => SimulationOutcome::Transcript(NO_RESPONSE.to_string()),
        Ok(text) => SimulationOutcome::Transcript(text),
        Err(e) => {
            tracing::error!(error = %e, "simulation request failed");
            SimulationOutcome::Failure(failure_line(&e))
        }
    }
}
