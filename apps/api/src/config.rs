use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every field has a default so the service boots on a bare machine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier passed through to the inference engine.
    pub model_path: String,
    /// Base URL of the local inference server.
    pub engine_url: String,
    /// The single origin allowed by CORS.
    pub frontend_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            model_path: std::env::var("MODEL_PATH")
                .unwrap_or_else(|_| "Qwen/Qwen2.5-0.5B".to_string()),
            engine_url: std::env::var("ENGINE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
