//! Application-specific health check handlers with a real database check.

use crate::state::AppState;
use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check endpoint that actually checks the database connection.
///
/// This uses the generic `run_health_checks` utility from axum-helpers to
/// verify service dependencies are healthy.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

/// Creates a router with the /ready endpoint.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}
