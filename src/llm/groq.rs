//! Groq chat-completions client.
//!
//! Groq exposes an OpenAI-compatible API; the agent prompt travels as a
//! single user message and the reply text of the first choice is the
//! completion. Model identifier and sampling temperature are fixed at
//! construction from configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{LlmClient, LlmError};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [&'a str]>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: Option<String>,
}

/// An `LlmClient` backed by the Groq completion endpoint.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl GroqClient {
    /// Create a new client. A missing API key is not an error here; it is
    /// reported as `LlmError::MissingApiKey` on the first completion request.
    pub fn new(api_key: Option<String>, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            temperature,
        }
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn complete(&self, prompt: &str, stop: &[&str]) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            stop: if stop.is_empty() { None } else { Some(stop) },
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(format!("{}/chat/completions", GROQ_BASE_URL))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::Api(format!("status {}: {}", status, text)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::InvalidResponse(format!("{}: {}", e, text)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("no choices in response".to_string()))?;

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_reported_at_call_time() {
        let client = GroqClient::new(None, "llama-3.3-70b-versatile".to_string(), 0.0);
        let result = tokio_test::block_on(client.complete("hello", &[]));
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn stop_sequences_are_omitted_when_empty() {
        let body = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "p",
            }],
            temperature: 0.0,
            stop: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("stop").is_none());
    }

    #[test]
    fn decodes_first_choice_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Final Answer: done"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices[0].message.content.as_deref();
        assert_eq!(content, Some("Final Answer: done"));
    }
}
