//! Readiness handler with a real database probe.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// Readiness check. On the postgres backend this runs `SELECT 1`; the
/// in-memory store is always ready.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    match &state.db {
        Some(db) => checks.push((
            "database",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        )),
        None => checks.push(("store", Box::pin(async { Ok::<(), String>(()) }))),
    }

    run_health_checks(checks).await.into_response()
}
