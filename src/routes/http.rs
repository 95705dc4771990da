// GET handlers: version; POST handler: manual report run

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;

use super::AppState;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// POST /api/report/run — triggers a pipeline run for "now" and returns the
/// run summary. Shares the single-run lock with the scheduled worker, so a
/// trigger during the scheduled run waits for it instead of racing it.
pub(super) async fn run_report_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.pipeline.run().await {
        Ok(summary) => (StatusCode::OK, axum::Json(serde_json::json!(summary))),
        Err(e) => {
            warn!(error = %e, "manual report run failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({ "ok": false, "message": e.to_string() })),
            )
        }
    }
}
