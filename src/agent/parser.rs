//! Parses model completions into agent decisions.
//!
//! A completion either continues the loop (`Action:` + `Action Input:`
//! lines) or terminates it (`Final Answer:` marker). Anything else is a
//! protocol violation surfaced as [`AgentError::Unparsable`].

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::AgentError;

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// What the model decided to do in one reasoning turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDecision {
    /// Invoke a tool and feed its observation back.
    Act { action: String, input: String },
    /// Stop and hand the answer to the caller.
    Finish { answer: String },
}

fn action_regex() -> &'static Regex {
    static ACTION_RE: OnceLock<Regex> = OnceLock::new();
    ACTION_RE.get_or_init(|| {
        Regex::new(r"(?s)Action\s*\d*\s*:\s*(.*?)\s*Action\s*\d*\s*Input\s*\d*\s*:\s*(.*)")
            .unwrap()
    })
}

/// Classify a completion as a tool invocation or a final answer.
///
/// A completion carrying both markers counts as final: by the protocol the
/// model is done reasoning once it emits `Final Answer:`, whatever else the
/// text contains.
pub fn parse_decision(completion: &str) -> Result<AgentDecision, AgentError> {
    if let Some(idx) = completion.find(FINAL_ANSWER_MARKER) {
        let answer = completion[idx + FINAL_ANSWER_MARKER.len()..]
            .trim()
            .to_string();
        return Ok(AgentDecision::Finish { answer });
    }

    if let Some(caps) = action_regex().captures(completion) {
        let action = caps[1].trim().to_string();
        let mut input = caps[2].trim();
        // If the model ran past the stop sequence and invented an
        // observation, everything from that line on is discarded.
        if let Some(cut) = input.find("\nObservation") {
            input = input[..cut].trim_end();
        }
        let input = strip_matching_quotes(input).to_string();
        return Ok(AgentDecision::Act { action, input });
    }

    Err(AgentError::Unparsable(preview(completion)))
}

/// Decode the action-input text once, at the loop boundary. Valid JSON goes
/// to the tool as-is; anything else is wrapped as a bare string.
pub fn decode_action_input(input: &str) -> Value {
    serde_json::from_str(input).unwrap_or_else(|_| Value::String(input.to_string()))
}

/// Models sometimes quote the whole input line. One matching outer pair of
/// quotes is dropped.
fn strip_matching_quotes(input: &str) -> &str {
    let stripped = input
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| input.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')));
    stripped.unwrap_or(input)
}

fn preview(text: &str) -> String {
    const MAX_PREVIEW: usize = 200;
    match text.char_indices().nth(MAX_PREVIEW) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_an_action_with_json_input() {
        let completion = " I should look up flights first.\nAction: search_flights\nAction Input: {\"origin\": \"Mumbai\", \"destination\": \"Goa\", \"departure_date\": \"2025-10-15\"}";
        let decision = parse_decision(completion).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                action: "search_flights".to_string(),
                input: "{\"origin\": \"Mumbai\", \"destination\": \"Goa\", \"departure_date\": \"2025-10-15\"}".to_string(),
            }
        );
    }

    #[test]
    fn parses_a_final_answer() {
        let completion = " I now know the final answer.\nFinal Answer: Day 1: arrive and relax at Baga beach.";
        let decision = parse_decision(completion).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Finish {
                answer: "Day 1: arrive and relax at Baga beach.".to_string(),
            }
        );
    }

    #[test]
    fn final_answer_wins_when_both_markers_appear() {
        let completion =
            "Action: web_search\nAction Input: goa\nFinal Answer: The itinerary is ready.";
        let decision = parse_decision(completion).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Finish {
                answer: "The itinerary is ready.".to_string(),
            }
        );
    }

    #[test]
    fn tolerates_spacing_and_numbering_variants() {
        let completion = "Action 1 : web_search\nAction 1 Input : best beaches in Goa";
        let decision = parse_decision(completion).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                action: "web_search".to_string(),
                input: "best beaches in Goa".to_string(),
            }
        );
    }

    #[test]
    fn discards_a_fabricated_observation() {
        let completion = "Action: web_search\nAction Input: top sights in Goa\nObservation: Goa has beaches.\nThought: done";
        let decision = parse_decision(completion).unwrap();
        assert_eq!(
            decision,
            AgentDecision::Act {
                action: "web_search".to_string(),
                input: "top sights in Goa".to_string(),
            }
        );
    }

    #[test]
    fn strips_one_layer_of_surrounding_quotes() {
        let completion = "Action: web_search\nAction Input: \"best beaches in Goa\"";
        match parse_decision(completion).unwrap() {
            AgentDecision::Act { input, .. } => assert_eq!(input, "best beaches in Goa"),
            other => panic!("expected an action, got {:?}", other),
        }
    }

    #[test]
    fn rejects_text_with_neither_marker() {
        let err = parse_decision("I am not sure what to do next.").unwrap_err();
        assert!(matches!(err, AgentError::Unparsable(_)));
    }

    #[test]
    fn decodes_json_objects_and_falls_back_to_strings() {
        assert_eq!(
            decode_action_input(r#"{"destination": "Goa"}"#),
            json!({"destination": "Goa"})
        );
        assert_eq!(
            decode_action_input("best beaches in Goa"),
            json!("best beaches in Goa")
        );
        assert_eq!(decode_action_input("42"), json!(42));
    }
}
