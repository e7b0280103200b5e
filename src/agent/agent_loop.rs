//! The reasoning loop that plans trips.
//!
//! The loop keeps a growing text transcript: the ReAct prompt, then one
//! block per step of model reasoning, tool invocation, and observation.
//! Each turn asks the model to continue the transcript, stopping generation
//! at `\nObservation:` so tool results always come from real tool runs.

use std::sync::Arc;

use thiserror::Error;

use crate::config::Config;
use crate::llm::{GroqClient, LlmClient, LlmError};
use crate::tools::ToolRegistry;

use super::parser::{self, AgentDecision};
use super::prompt;

/// Generation must halt before the model writes its own observation line.
const OBSERVATION_STOP: &str = "\nObservation:";

/// One executed tool step, kept as the request's reasoning trace.
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub action: String,
    pub action_input: String,
    pub observation: String,
}

/// Loop-level failures. Tool faults never appear here; they are fed back
/// into the transcript as error-text observations instead.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("could not parse model output into an action or a final answer: {0}")]
    Unparsable(String),

    #[error("no final answer after {0} iterations")]
    IterationLimit(usize),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// The trip-planning agent: a completion client, the tool registry, and the
/// transcript loop tying them together.
pub struct Agent {
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    max_iterations: usize,
}

impl Agent {
    /// Build the production agent from configuration.
    pub fn new(config: &Config) -> Self {
        let llm = Arc::new(GroqClient::new(
            config.groq_api_key.clone(),
            config.model.clone(),
            config.temperature,
        ));
        let tools = ToolRegistry::new(config);

        Self {
            llm,
            tools,
            max_iterations: config.max_iterations,
        }
    }

    /// Assemble an agent from parts, so tests can drive the loop with a
    /// scripted completion client.
    pub fn from_parts(
        llm: Arc<dyn LlmClient>,
        tools: ToolRegistry,
        max_iterations: usize,
    ) -> Self {
        Self {
            llm,
            tools,
            max_iterations,
        }
    }

    /// Run the reasoning loop on a task until the model produces a final
    /// answer, the iteration cap is hit, or the model side fails.
    ///
    /// All mutable state lives in this call frame, so one agent instance
    /// serves concurrent requests.
    pub async fn run(&self, task: &str) -> Result<(String, Vec<TraceStep>), AgentError> {
        let mut transcript = prompt::render_react_prompt(&self.tools, task);
        let mut steps: Vec<TraceStep> = Vec::new();

        for iteration in 0..self.max_iterations {
            tracing::debug!("Agent iteration {}", iteration + 1);

            let completion = self.llm.complete(&transcript, &[OBSERVATION_STOP]).await?;

            match parser::parse_decision(&completion)? {
                AgentDecision::Finish { answer } => {
                    tracing::info!(steps = steps.len(), "agent reached a final answer");
                    return Ok((answer, steps));
                }
                AgentDecision::Act { action, input } => {
                    tracing::info!(
                        action = %action,
                        input = %truncate_for_log(&input, 200),
                        "agent tool call"
                    );

                    let args = parser::decode_action_input(&input);
                    let observation = match self.tools.execute(&action, args).await {
                        Ok(output) => output,
                        Err(e) => format!("Error: {}", e),
                    };

                    tracing::debug!(
                        observation = %truncate_for_log(&observation, 1000),
                        "tool observation"
                    );

                    transcript.push_str(&format!(
                        "{}\nObservation: {}\nThought: ",
                        completion.trim_end(),
                        observation
                    ));

                    steps.push(TraceStep {
                        action,
                        action_input: input,
                        observation,
                    });
                }
            }
        }

        Err(AgentError::IterationLimit(self.max_iterations))
    }
}

/// Truncate a string for logging purposes.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}... [truncated]", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::{FailingClient, ScriptedClient};

    fn registry() -> ToolRegistry {
        ToolRegistry::new(&Config::new(None, "test-model".to_string()))
    }

    fn agent(llm: Arc<dyn LlmClient>) -> Agent {
        Agent::from_parts(llm, registry(), 5)
    }

    #[tokio::test]
    async fn immediate_final_answer_takes_one_completion_and_no_tools() {
        let client = Arc::new(ScriptedClient::new([
            " I already know a good plan.\nFinal Answer: Day 1: beaches. Day 2: forts.",
        ]));
        let (answer, steps) = agent(client.clone()).run("plan a trip").await.unwrap();

        assert_eq!(answer, "Day 1: beaches. Day 2: forts.");
        assert!(steps.is_empty());
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn observations_are_fed_back_into_the_transcript() {
        let client = Arc::new(ScriptedClient::new([
            " I should check the date.\nAction: get_current_date\nAction Input: ",
            " Now I can plan.\nFinal Answer: A relaxed weekend.",
        ]));
        let (answer, steps) = agent(client.clone()).run("plan a trip").await.unwrap();

        assert_eq!(answer, "A relaxed weekend.");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, "get_current_date");
        assert!(steps[0].observation.starts_with("Today's date is "));

        // The second prompt must contain the first observation verbatim.
        let prompts = client.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains(&format!("Observation: {}", steps[0].observation)));
        assert!(prompts[1].ends_with("Thought: "));
    }

    #[tokio::test]
    async fn unknown_tool_becomes_a_corrective_observation() {
        let client = Arc::new(ScriptedClient::new([
            " Let me teleport.\nAction: teleport\nAction Input: Goa",
            "Final Answer: done",
        ]));
        let (_, steps) = agent(client).run("plan a trip").await.unwrap();

        assert_eq!(steps.len(), 1);
        assert!(steps[0]
            .observation
            .starts_with("Error: teleport is not a valid tool, try one of ["));
    }

    #[tokio::test]
    async fn tool_error_strings_are_observations_not_failures() {
        // web_search has no credentials in tests, so it fails internally.
        let client = Arc::new(ScriptedClient::new([
            "Action: web_search\nAction Input: beaches in Goa",
            "Final Answer: done",
        ]));
        let (_, steps) = agent(client).run("plan a trip").await.unwrap();

        assert_eq!(steps.len(), 1);
        assert!(steps[0].observation.starts_with("Error: "));
        assert!(steps[0].observation.contains("GOOGLE_API_KEY"));
    }

    #[tokio::test]
    async fn loop_stops_at_the_iteration_cap() {
        let client = Arc::new(ScriptedClient::new([
            "Action: get_current_date\nAction Input: ",
        ]));
        let err = agent(client.clone()).run("plan a trip").await.unwrap_err();

        assert!(matches!(err, AgentError::IterationLimit(5)));
        assert_eq!(client.calls(), 5);
    }

    #[tokio::test]
    async fn unparsable_output_is_a_loop_failure() {
        let client = Arc::new(ScriptedClient::new(["I have no idea."]));
        let err = agent(client).run("plan a trip").await.unwrap_err();

        assert!(matches!(err, AgentError::Unparsable(_)));
    }

    #[tokio::test]
    async fn provider_failures_propagate_as_llm_errors() {
        let err = agent(Arc::new(FailingClient)).run("plan a trip").await.unwrap_err();

        assert!(matches!(err, AgentError::Llm(LlmError::Api(_))));
    }
}
