//! LLM client abstraction.
//!
//! The reasoning loop only needs one capability from a model provider:
//! "given a prompt and stop sequences, return the completion text". Keeping
//! the trait this small lets tests drive the loop with scripted clients and
//! keeps provider quirks (auth, request shape) inside one file.

mod groq;

pub use groq::GroqClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not set; the completion endpoint cannot be reached")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Network(String),

    #[error("completion endpoint returned an error: {0}")]
    Api(String),

    #[error("could not decode completion response: {0}")]
    InvalidResponse(String),
}

/// A completion-requester: the model side of the reasoning loop.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Request a completion conditioned on `prompt`. Generation halts at the
    /// first occurrence of any `stop` sequence (exclusive).
    async fn complete(&self, prompt: &str, stop: &[&str]) -> Result<String, LlmError>;
}
