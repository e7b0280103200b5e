//! Current-date lookup so the model can resolve relative dates.

use async_trait::async_trait;
use chrono::Local;
use serde_json::Value;

use super::Tool;

/// Reports today's date. The model cannot know the current date on its own,
/// so phrases like "next weekend" in user notes are unresolvable without it.
pub struct CurrentDate;

#[async_trait]
impl Tool for CurrentDate {
    fn name(&self) -> &str {
        "get_current_date"
    }

    fn description(&self) -> &str {
        "Use this tool to get today's date to resolve any relative date queries \
         like 'next week' or 'this weekend'. It takes no input."
    }

    async fn execute(&self, _args: Value) -> anyhow::Result<String> {
        Ok(format!(
            "Today's date is {}.",
            Local::now().format("%A, %B %d, %Y")
        ))
    }
}
