//! Configuration management for the Atlas agent.
//!
//! Configuration can be set via environment variables (a `.env` file is
//! honored in development):
//! - `GROQ_API_KEY` - API key for the Groq completion endpoint.
//! - `GROQ_MODEL` - Optional. Model identifier. Defaults to `llama-3.3-70b-versatile`.
//! - `GROQ_TEMPERATURE` - Optional. Sampling temperature. Defaults to `0.0`.
//! - `GOOGLE_API_KEY` - API key for the Google Custom Search tool.
//! - `GOOGLE_CSE_ID` - Search-engine id for the Google Custom Search tool.
//! - `RAPIDAPI_KEY` - API key for the flights-data provider.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `8000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations. Defaults to `15`.
//!
//! None of the provider keys are required at startup: a missing key surfaces
//! as a descriptive failure inside the component that needs it (a tool
//! observation or an `{error}` response body), so a partially configured
//! process still serves the routes that work.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Process-wide configuration, loaded once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key (completion endpoint)
    pub groq_api_key: Option<String>,

    /// Model identifier passed to the completion endpoint
    pub model: String,

    /// Sampling temperature passed to the completion endpoint
    pub temperature: f32,

    /// Google Custom Search API key
    pub google_api_key: Option<String>,

    /// Google Custom Search engine id
    pub google_cse_id: Option<String>,

    /// RapidAPI key for the flights-data provider
    pub rapidapi_key: Option<String>,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable fails to
    /// parse. Missing provider keys are not an error here; they fail
    /// descriptively at the point of use.
    pub fn from_env() -> Result<Self, ConfigError> {
        let groq_api_key = std::env::var("GROQ_API_KEY").ok();

        let model = std::env::var("GROQ_MODEL")
            .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        let temperature = std::env::var("GROQ_TEMPERATURE")
            .unwrap_or_else(|_| "0.0".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("GROQ_TEMPERATURE".to_string(), format!("{}", e)))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e)))?;

        Ok(Self {
            groq_api_key,
            model,
            temperature,
            google_api_key: std::env::var("GOOGLE_API_KEY").ok(),
            google_cse_id: std::env::var("GOOGLE_CSE_ID").ok(),
            rapidapi_key: std::env::var("RAPIDAPI_KEY").ok(),
            host,
            port,
            max_iterations,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(groq_api_key: Option<String>, model: String) -> Self {
        Self {
            groq_api_key,
            model,
            temperature: 0.0,
            google_api_key: None,
            google_cse_id: None,
            rapidapi_key: None,
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_iterations: 15,
        }
    }
}
