use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::{debug, info};

use crate::{
    common::store::TriviaStore,
    quiz::{
        models::{QuizRequest, QuizResponse},
        selector::{QuizPick, next_question},
    },
    server::{app_state::AppState, error::ServerError, fallback::method_not_allowed},
};

pub fn quiz_routes<S: TriviaStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", post(play_quiz::<S>))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn play_quiz<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = payload?;
    let excluded = request.excluded_ids();
    let store = state.get_store();

    let pool = match request.category_filter()? {
        Some(category_id) => store.questions_by_category(category_id).await?,
        None => store.all_questions().await?,
    };

    debug!(
        "Quiz pool has {} questions, {} already served",
        pool.len(),
        excluded.len()
    );

    let pick = next_question(pool, &excluded, &mut rand::rng());
    let response = match pick {
        QuizPick::Next(question) => QuizResponse::next(question),
        QuizPick::NotAvailable => {
            info!("Quiz pool exhausted after {} questions", excluded.len());
            QuizResponse::exhausted()
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
