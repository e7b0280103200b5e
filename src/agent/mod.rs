//! Agent module - the trip-planning reasoning loop.
//!
//! The agent follows the ReAct pattern over a plain-text transcript:
//! 1. Render the prompt: tool catalog, format rules, and the task
//! 2. Ask the model to continue the transcript, stopping at `\nObservation:`
//! 3. If it chose a tool, execute it and append the real observation
//! 4. Repeat until a `Final Answer:` appears or the iteration cap is hit

mod agent_loop;
mod parser;
mod prompt;

pub use agent_loop::{Agent, AgentError, TraceStep};
pub use parser::{decode_action_input, parse_decision, AgentDecision};
pub use prompt::{render_react_prompt, render_task};
