//! Axum route handler for the email generation endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::generation::policy::select_policy;
use crate::generation::prompts::build_prompt;
use crate::generation::tone::{Length, Tone};
use crate::state::AppState;

fn default_tone() -> String {
    "professional".to_string()
}

fn default_length() -> String {
    "medium".to_string()
}

fn default_sender() -> String {
    "You".to_string()
}

fn default_receiver() -> String {
    "Recipient".to_string()
}

/// Request body for email generation. Only `intent` is required; the rest
/// fall back to the documented defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub intent: String,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_length")]
    pub length: String,
    #[serde(default = "default_sender")]
    pub sender_name: String,
    #[serde(default = "default_receiver")]
    pub receiver_name: String,
}

#[derive(Debug, Serialize)]
pub struct EmailResponse {
    pub email: String,
}

/// POST /generate-email
///
/// Builds the prompt and sampling policy, submits both to the engine, and
/// returns the trimmed completion. Engine failures are reported in-band as
/// `{"email": "Error: ..."}` with a 200 status; the response shape never
/// changes on failure, so the frontend always has an `email` field to show.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailResponse>, AppError> {
    if request.intent.trim().is_empty() {
        return Err(AppError::Validation("intent cannot be empty".to_string()));
    }

    let prompt = build_prompt(
        &request.intent,
        &request.tone,
        &request.length,
        &request.sender_name,
        &request.receiver_name,
    );
    let policy = select_policy(Tone::parse(&request.tone), Length::parse(&request.length));

    info!(
        "Generating email: tone={}, length={}, max_tokens={}",
        request.tone, request.length, policy.max_tokens
    );

    let email = match state.engine.generate(&prompt, &policy).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            error!("Email generation failed: {e}");
            format!("Error: {e}")
        }
    };

    Ok(Json(EmailResponse { email }))
}
