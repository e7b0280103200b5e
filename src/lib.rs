//! # Atlas Agent
//!
//! An AI-powered trip planner exposed as a small HTTP service.
//!
//! This library provides:
//! - An HTTP API that turns structured trip requests into itineraries
//! - A ReAct reasoning loop that plans with a fixed set of travel tools
//! - Integration with Groq for LLM completions
//!
//! ## Architecture
//!
//! The agent follows the ReAct pattern over a text transcript:
//! 1. Receive structured trip input via `POST /plan-trip`
//! 2. Render it into a planning task inside a ReAct prompt
//! 3. Ask the model to continue the transcript; run any tool it requests
//! 4. Feed the observation back, repeat until a final answer appears
//!
//! ## Example
//!
//! ```rust,ignore
//! use atlas_agent::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(&config);
//! let (plan, steps) = agent.run("Plan 3 days in Goa from Mumbai").await?;
//! ```

pub mod api;
pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use config::Config;
