//! HTTP surface: the trip-planning endpoint and the liveness probe.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::agent::{render_task, Agent};
use crate::config::Config;

use super::types::{HealthResponse, PlanTripRequest, PlanTripResponse};

/// Shared application state.
///
/// One agent serves every request; the reasoning loop keeps all its state
/// on the stack, so sharing it is safe.
pub struct AppState {
    pub agent: Agent,
}

// ─────────────────────────────────────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────────────────────────────────────

/// Bind the configured address and serve requests until shutdown.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState {
        agent: Agent::new(&config),
    });

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router. Kept separate from [`serve`] so tests can exercise
/// handlers without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/plan-trip", post(plan_trip))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /: static liveness body.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Atlas Agent is running!".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /plan-trip: run the reasoning loop on the structured trip input.
///
/// The handler itself always answers 200: agent failures of any kind are
/// reported in the body as `{"error": ...}` so clients never have to parse
/// error pages.
async fn plan_trip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanTripRequest>,
) -> Json<PlanTripResponse> {
    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        origin = %request.origin,
        destination = %request.destination,
        start_date = %request.start_date,
        duration_days = request.duration_days,
        "planning trip"
    );

    let task = render_task(
        &request.origin,
        &request.destination,
        &request.start_date,
        request.duration_days,
        request.notes.as_deref(),
    );

    match state.agent.run(&task).await {
        Ok((plan, steps)) => {
            tracing::info!(%request_id, steps = steps.len(), "plan ready");
            Json(PlanTripResponse::Plan { plan })
        }
        Err(e) => {
            tracing::warn!(%request_id, error = %e, "planning failed");
            Json(PlanTripResponse::Error {
                error: format!("An error occurred: {}", e),
            })
        }
    }
}
