//! Tool implementations for the trip-planning agent.
//!
//! A tool is a named, described capability the reasoning loop may invoke.
//! Descriptions are model-facing: they are rendered into the prompt and are
//! the only documentation the model sees, so they carry usage hints and the
//! argument convention. Tools receive the decoded action input as a
//! `serde_json::Value` (an object for multi-argument tools, a bare string
//! otherwise) and deserialize it into their own typed argument structs.

mod date;
mod flights;
mod hotels;
mod web;

pub use date::CurrentDate;
pub use flights::FlightSearch;
pub use hotels::HotelSearch;
pub use web::WebSearch;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;

/// A callable capability exposed to the reasoning loop.
///
/// `execute` failures are converted to error-text observations at the loop
/// boundary; a tool fault must never take down a request.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name, as the model must spell it in `Action:` lines.
    fn name(&self) -> &str;

    /// Model-facing usage description rendered into the prompt.
    fn description(&self) -> &str;

    /// Run the tool against the decoded action input.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// The fixed set of tools available to the agent.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Build the standard registry. Provider credentials are snapshotted
    /// from the config; a missing key degrades the affected tool into a
    /// descriptive failure instead of being a startup error.
    pub fn new(config: &Config) -> Self {
        Self {
            tools: vec![
                Box::new(WebSearch::new(
                    config.google_api_key.clone(),
                    config.google_cse_id.clone(),
                )),
                Box::new(HotelSearch),
                Box::new(FlightSearch::new(config.rapidapi_key.clone())),
                Box::new(CurrentDate),
            ],
        }
    }

    /// All registered tools, in prompt order.
    pub fn list_tools(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    /// Comma-separated tool names for the prompt's action constraint.
    pub fn tool_names(&self) -> String {
        self.tools
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Execute a tool by name. An unknown name is an error carrying the
    /// valid alternatives so the model can correct itself.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| {
                anyhow::anyhow!("{} is not a valid tool, try one of [{}]", name, self.tool_names())
            })?;

        tool.execute(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(&Config::new(None, "test-model".to_string()))
    }

    #[test]
    fn tool_names_are_unique() {
        let registry = registry();
        let mut names: Vec<&str> = registry.list_tools().iter().map(|t| t.name()).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn unknown_tool_error_lists_alternatives() {
        let registry = registry();
        let err = tokio_test::block_on(registry.execute("teleport", Value::Null)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("teleport is not a valid tool"));
        assert!(message.contains("search_flights"));
        assert!(message.contains("get_current_date"));
    }

    #[test]
    fn registry_dispatches_by_name() {
        let registry = registry();
        let out = tokio_test::block_on(registry.execute("get_current_date", Value::String(String::new())))
            .unwrap();
        assert!(out.starts_with("Today's date is "));
    }
}
