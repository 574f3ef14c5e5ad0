//! Google Gemini `generateContent` client.
//!
//! Speaks the REST API directly with `reqwest`:
//!
//! ```text
//! POST {base_url}/v1beta/models/{model}:generateContent
//! x-goog-api-key: <key>
//! ```

use super::{GenerationError, GenerationRequest, GenerationSettings, TextGenerator};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Checked when [`API_KEY_VAR`] is unset or blank.
pub const FALLBACK_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini client. Built once at startup and shared read-only.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    settings: GenerationSettings,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, settings: GenerationSettings) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into().trim().to_string(),
            settings,
        }
    }

    /// Build a client with the key from the environment.
    ///
    /// A missing key is logged but does not prevent construction; requests
    /// will then be rejected by the API and surface as a failure line.
    pub fn from_env(settings: GenerationSettings) -> Self {
        let api_key = api_key_from(|name| std::env::var(name).ok());

        if api_key.is_empty() {
            tracing::warn!(
                "Gemini API key is missing; set {} (or {})",
                API_KEY_VAR,
                FALLBACK_API_KEY_VAR
            );
        }

        Self::new(api_key, settings)
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn send(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = GenerateContentRequest::from(request);

        let mut req = self.http.post(self.endpoint(&request.model)).json(&body);
        if !self.api_key.is_empty() {
            req = req.header("x-goog-api-key", &self.api_key);
        }

        tracing::debug!(model = %request.model, "sending generateContent request");

        let response = req
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        Ok(payload.text())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = self.settings.request(prompt);
        self.send(&request).await
    }
}

/// Pull `error.message` out of a Gemini error body, or fall back to the raw text.
/// First non-blank key among [`API_KEY_VAR`] and [`FALLBACK_API_KEY_VAR`], trimmed.
fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    [API_KEY_VAR, FALLBACK_API_KEY_VAR]
        .into_iter()
        .filter_map(lookup)
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .unwrap_or_default()
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

impl<'a> From<&'a GenerationRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("k", GenerationSettings::default());
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let settings = GenerationSettings {
            base_url: "http://localhost:9000/".to_string(),
            ..GenerationSettings::default()
        };
        let client = GeminiClient::new("k", settings);
        assert_eq!(
            client.endpoint("m"),
            "http://localhost:9000/v1beta/models/m:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerationSettings::default().request("Calculate 25 * 4");
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).expect("serialize");

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Calculate 25 * 4");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            crate::content::SYSTEM_INSTRUCTION
        );
        let temperature = body["generationConfig"]["temperature"]
            .as_f64()
            .expect("temperature is a number");
        assert!((temperature - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Thought: "}, {"text": "add"}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .expect("deserialize");
        assert_eq!(parsed.text(), "Thought: add");
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}}))
                .expect("deserialize");
        assert_eq!(parsed.text(), "");
    }

    #[test]
    fn test_api_error_message_extraction() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(api_error_message(""), "empty response body");
    }

    #[test]
    fn test_new_trims_key() {
        let client = GeminiClient::new("  secret \n", GenerationSettings::default());
        assert!(client.has_api_key());
        let empty = GeminiClient::new("   ", GenerationSettings::default());
        assert!(!empty.has_api_key());
    }

    #[test]
    fn test_api_key_falls_back_when_primary_is_blank() {
        let lookup = |vars: &'static [(&'static str, &'static str)]| {
            move |name: &str| {
                vars.iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| (*v).to_string())
            }
        };

        assert_eq!(api_key_from(lookup(&[("API_KEY", "primary")])), "primary");
        assert_eq!(api_key_from(lookup(&[("GEMINI_API_KEY", "fallback")])), "fallback");
        assert_eq!(
            api_key_from(lookup(&[("API_KEY", ""), ("GEMINI_API_KEY", "fallback")])),
            "fallback"
        );
        assert_eq!(
            api_key_from(lookup(&[("API_KEY", "  \n"), ("GEMINI_API_KEY", " fallback ")])),
            "fallback"
        );
        assert_eq!(
            api_key_from(lookup(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "fallback")])),
            "primary"
        );
        assert_eq!(api_key_from(lookup(&[])), "");
    }

    // Every case that touches the process environment lives in this one test.
    #[test]
    fn test_from_env_reads_key_variables() {
        let saved: Vec<(&str, Option<String>)> = [API_KEY_VAR, FALLBACK_API_KEY_VAR]
            .into_iter()
            .map(|name| (name, std::env::var(name).ok()))
            .collect();
        let from_env = || GeminiClient::from_env(GenerationSettings::default());

        std::env::set_var(API_KEY_VAR, "primary");
        std::env::remove_var(FALLBACK_API_KEY_VAR);
        assert_eq!(from_env().api_key, "primary");

        std::env::remove_var(API_KEY_VAR);
        std::env::set_var(FALLBACK_API_KEY_VAR, "fallback");
        assert_eq!(from_env().api_key, "fallback");

        std::env::set_var(API_KEY_VAR, "");
        assert_eq!(from_env().api_key, "fallback");
        assert!(from_env().has_api_key());

        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var(FALLBACK_API_KEY_VAR);
        assert!(!from_env().has_api_key());

        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}
