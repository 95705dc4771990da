// HTTP routes: liveness, version, and the manual report trigger.

mod http;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::pipeline::Pipeline;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) pipeline: Arc<Pipeline>,
}

pub fn app(pipeline: Arc<Pipeline>) -> Router {
    let state = AppState { pipeline };
    Router::new()
        .route("/", get(|| async { "Daily water report service" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/report/run", post(http::run_report_handler)) // POST /api/report/run
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
