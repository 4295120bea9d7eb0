use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::error;

use crate::{
    common::store::TriviaStore,
    server::{app_state::AppState, error::ServerError, fallback::method_not_allowed},
};

pub fn health_routes<S: TriviaStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed::<S>))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn health_detailed<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ServerError> {
    let platform = true;

    let db_status = match state.get_store().health_check().await {
        Ok(_) => true,
        Err(e) => {
            error!("Failed database health check: {}", e);
            false
        }
    };

    let json = json!({
        "platform": platform,
        "database": db_status,
    });

    Ok((StatusCode::OK, Json(json)))
}
