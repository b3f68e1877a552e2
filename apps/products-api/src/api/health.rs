//! Readiness check for the catalog

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use domain_products::ProductRepository;

use crate::state::AppState;

/// Readiness endpoint: the catalog must answer a count.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "catalog",
        Box::pin(async {
            state
                .repository
                .count()
                .await
                .map(|_| ())
                .map_err(|e| format!("Catalog count failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}
