//! API request and response types.

use serde::{Deserialize, Serialize};

/// Request to plan a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanTripRequest {
    /// Where the trip starts
    pub origin: String,

    /// Where the traveler is going
    pub destination: String,

    /// First day of the trip, normally YYYY-MM-DD
    pub start_date: String,

    /// Length of the stay in days
    pub duration_days: i64,

    /// Extra wishes, e.g. "I like history and seafood"
    pub notes: Option<String>,
}

/// Outcome of a planning request.
///
/// Planning failures are part of the response body, not the status line:
/// the endpoint answers 200 with an `error` field instead of mapping agent
/// faults onto HTTP status codes.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PlanTripResponse {
    Plan { plan: String },
    Error { error: String },
}

/// Liveness payload for `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: &'static str,
}
