//! Prompt templates: the ReAct scaffold and the trip-planning task.

use crate::tools::ToolRegistry;

/// Render the ReAct prompt that seeds a reasoning transcript.
///
/// The format section teaches the model the Thought/Action/Action Input/
/// Observation protocol. Multi-argument tools receive their input as a
/// single line of JSON; single-argument tools may be given a bare string.
/// The transcript deliberately ends mid-line at `Thought:` so the model
/// continues it.
pub fn render_react_prompt(tools: &ToolRegistry, task: &str) -> String {
    let tool_descriptions = tools
        .list_tools()
        .iter()
        .map(|t| format!("{}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Answer the following questions as best you can. You have access to the following tools:

{tool_descriptions}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: for tools with multiple arguments, this MUST be a single line of JSON in the format {{"arg_name": "value"}}. For tools with a single string argument, this can be a simple string.
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {task}
Thought:"#,
        tool_descriptions = tool_descriptions,
        tool_names = tools.tool_names(),
        task = task
    )
}

/// Render the trip-planning task handed to the agent as its question.
///
/// The numbered steps guide the model through flights, dates, hotels and
/// activities before it synthesizes the itinerary. The closing constraint
/// makes the model emit the `Final Answer:` marker the transcript parser
/// terminates on.
pub fn render_task(
    origin: &str,
    destination: &str,
    start_date: &str,
    duration_days: i64,
    notes: Option<&str>,
) -> String {
    let notes = match notes {
        Some(notes) if !notes.trim().is_empty() => notes,
        _ => "None",
    };

    format!(
        r#"You are an expert travel planner. Your task is to create a detailed itinerary based on the following information:
- Origin: {origin}
- Destination: {destination}
- Start Date: {start_date}
- Trip Duration: {duration_days} days

User's additional notes: {notes}

Please perform the following steps:
1. Search for round-trip flights for the given origin, destination, and start date.
2. Based on the start date and duration, determine the check-in and check-out dates.
3. Search for 3-4 highly-rated hotel options for these dates.
4. Search for the top 3-5 points of interest or activities at the destination, keeping the user's notes in mind.
5. Synthesize all this information into a complete, day-by-day itinerary.
IMPORTANT: Your final response MUST start with the words "Final Answer:" and should contain ONLY the detailed itinerary that follows. Do not take any more actions after this.

Your final answer must be only the detailed itinerary. It should include daily activities and a summary of the flight and hotel options you found."#,
        origin = origin,
        destination = destination,
        start_date = start_date,
        duration_days = duration_days,
        notes = notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(&Config::new(None, "test-model".to_string()))
    }

    #[test]
    fn react_prompt_lists_every_tool_and_ends_at_thought() {
        let prompt = render_react_prompt(&registry(), "Plan a weekend in Goa");
        assert!(prompt.contains("web_search:"));
        assert!(prompt.contains("search_hotels:"));
        assert!(prompt.contains("search_flights:"));
        assert!(prompt.contains("get_current_date:"));
        assert!(prompt.contains("should be one of [web_search, search_hotels, search_flights, get_current_date]"));
        assert!(prompt.contains("Question: Plan a weekend in Goa"));
        assert!(prompt.ends_with("Thought:"));
    }

    #[test]
    fn react_prompt_spells_out_the_json_input_convention() {
        let prompt = render_react_prompt(&registry(), "anything");
        assert!(prompt.contains(r#"single line of JSON in the format {"arg_name": "value"}"#));
    }

    #[test]
    fn task_includes_all_trip_fields() {
        let task = render_task("Mumbai", "Goa", "2025-10-15", 3, Some("I love seafood"));
        assert!(task.contains("- Origin: Mumbai"));
        assert!(task.contains("- Destination: Goa"));
        assert!(task.contains("- Start Date: 2025-10-15"));
        assert!(task.contains("- Trip Duration: 3 days"));
        assert!(task.contains("User's additional notes: I love seafood"));
        assert!(task.contains(r#"MUST start with the words "Final Answer:""#));
    }

    #[test]
    fn absent_notes_render_as_none() {
        let task = render_task("Mumbai", "Goa", "2025-10-15", 3, None);
        assert!(task.contains("User's additional notes: None"));

        let task = render_task("Mumbai", "Goa", "2025-10-15", 3, Some("   "));
        assert!(task.contains("User's additional notes: None"));
    }
}
