//! HTTP API module.

mod routes;
mod types;

pub use routes::{router, serve, AppState};
pub use types::{HealthResponse, PlanTripRequest, PlanTripResponse};
