/// Engine client — the single point of entry for all inference-server calls.
///
/// ARCHITECTURAL RULE: No other module may talk to the inference server
/// directly. All completion requests MUST go through this module.
///
/// The server is a locally hosted vLLM instance speaking the OpenAI-compatible
/// completions API; model loading, batching, and sampling all happen inside it.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COMPLETIONS_PATH: &str = "/v1/completions";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("engine error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("engine returned no completion")]
    EmptyCompletion,
}

/// Generation parameters forwarded to the engine verbatim.
/// Field names match the completions API wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingPolicy {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_tokens: u32,
    pub repetition_penalty: f32,
    pub presence_penalty: f32,
    pub frequency_penalty: f32,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    #[serde(flatten)]
    sampling: SamplingPolicy,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Error bodies come in two shapes: OpenAI-style nested under `error`, or
/// vLLM's flat object with a top-level `message`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EngineErrorBody {
    Nested { error: EngineErrorDetail },
    Flat { message: String },
}

#[derive(Debug, Deserialize)]
struct EngineErrorDetail {
    message: String,
}

/// The completion engine seam. `AppState` carries an `Arc<dyn CompletionEngine>`
/// so handlers never depend on the concrete client and tests can script one.
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// Submits a prompt and returns the top-ranked candidate completion.
    /// Errs when the engine fails or produces no non-empty candidate.
    async fn generate(&self, prompt: &str, policy: &SamplingPolicy)
        -> Result<String, EngineError>;
}

/// Client for the local inference server. Built once at startup.
pub struct VllmClient {
    client: Client,
    base_url: String,
    model: String,
}

impl VllmClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            model,
        }
    }
}

#[async_trait]
impl CompletionEngine for VllmClient {
    async fn generate(
        &self,
        prompt: &str,
        policy: &SamplingPolicy,
    ) -> Result<String, EngineError> {
        let request_body = CompletionRequest {
            model: &self.model,
            prompt,
            n: 1,
            sampling: policy.clone(),
        };

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), COMPLETIONS_PATH);
        let response = self.client.post(&url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::Api {
                status: status.as_u16(),
                message: extract_error_message(body),
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        // Candidates come back ranked; only the top one is used.
        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or(EngineError::EmptyCompletion)?;

        if text.trim().is_empty() {
            return Err(EngineError::EmptyCompletion);
        }

        Ok(text)
    }
}

/// Pulls the human-readable message out of an engine error body, falling back
/// to the raw body when it is not one of the known JSON shapes.
fn extract_error_message(body: String) -> String {
    match serde_json::from_str::<EngineErrorBody>(&body) {
        Ok(EngineErrorBody::Nested { error }) => error.message,
        Ok(EngineErrorBody::Flat { message }) => message,
        Err(_) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SamplingPolicy {
        SamplingPolicy {
            temperature: 0.7,
            top_p: 0.9,
            top_k: 50,
            max_tokens: 300,
            repetition_penalty: 1.1,
            presence_penalty: 0.1,
            frequency_penalty: 0.1,
        }
    }

    #[test]
    fn test_sampling_policy_uses_wire_field_names() {
        let value = serde_json::to_value(policy()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "temperature",
            "top_p",
            "top_k",
            "max_tokens",
            "repetition_penalty",
            "presence_penalty",
            "frequency_penalty",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }
    }

    #[test]
    fn test_completion_request_flattens_sampling_fields() {
        let request = CompletionRequest {
            model: "Qwen/Qwen2.5-0.5B",
            prompt: "Write the email now:",
            n: 1,
            sampling: policy(),
        };
        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["model"], "Qwen/Qwen2.5-0.5B");
        assert_eq!(obj["n"], 1);
        // Sampling fields sit at the top level, not nested
        assert_eq!(obj["max_tokens"], 300);
        assert!(obj.contains_key("temperature"));
        assert!(!obj.contains_key("sampling"));
    }

    #[test]
    fn test_completion_response_first_choice_is_used() {
        let json = r#"{
            "id": "cmpl-1",
            "object": "text_completion",
            "choices": [
                {"index": 0, "text": "Dear Bob,", "finish_reason": "stop"},
                {"index": 1, "text": "Hi Bob!", "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200}
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].text, "Dear Bob,");
        assert_eq!(response.usage.unwrap().completion_tokens, 80);
    }

    #[test]
    fn test_completion_response_tolerates_missing_usage() {
        let json = r#"{"choices": [{"text": "Hello"}]}"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert!(response.usage.is_none());
        assert_eq!(response.choices.len(), 1);
    }

    #[test]
    fn test_extract_error_message_openai_shape() {
        let body = r#"{"error": {"message": "model not found", "type": "invalid_request_error"}}"#;
        assert_eq!(extract_error_message(body.to_string()), "model not found");
    }

    #[test]
    fn test_extract_error_message_vllm_shape() {
        let body = r#"{"object": "error", "message": "maximum context length exceeded", "code": 400}"#;
        assert_eq!(
            extract_error_message(body.to_string()),
            "maximum context length exceeded"
        );
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        let body = "upstream connect error";
        assert_eq!(extract_error_message(body.to_string()), body);
    }
}
