use std::sync::Arc;

use axum::{Router, middleware::from_fn};

use crate::{
    category::handlers::category_routes,
    common::store::TriviaStore,
    health::handlers::health_routes,
    mw::request_mw::request_mw,
    question::handlers::question_routes,
    quiz::handlers::quiz_routes,
    server::{app_state::AppState, fallback::not_found},
};

pub fn app_routes<S: TriviaStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/categories", category_routes(state.clone()))
        .nest("/questions", question_routes(state.clone()))
        .nest("/quizzes", quiz_routes(state))
        .fallback(not_found)
        .layer(from_fn(request_mw))
}
