mod quiz_routes;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use tower::ServiceExt;
use tracing::level_filters::LevelFilter;

use crate::{
    category::models::Category,
    question::models::Question,
    server::{app_state::AppState, router::app_routes},
    tests::memory_store::MemoryStore,
};

pub fn setup_logging() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn category(id: i32, kind: &str) -> Category {
    Category {
        id,
        kind: kind.to_string(),
    }
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category(1, "Science"),
        category(2, "Art"),
        category(3, "Geography"),
        category(4, "History"),
        category(5, "Entertainment"),
        category(6, "Sports"),
    ]
}

pub fn question(id: i32, text: &str, category: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("Answer {}", id),
        category,
        difficulty: (id % 5) + 1,
    }
}

/// 25 questions spread round-robin over the six seeded categories.
pub fn seed_questions() -> Vec<Question> {
    (1..=25)
        .map(|id| question(id, &format!("Trivia question number {}?", id), (id - 1) % 6 + 1))
        .collect()
}

pub fn seeded_state() -> Arc<AppState<MemoryStore>> {
    setup_logging();
    let store = MemoryStore::new(seed_categories(), seed_questions());
    Arc::new(AppState::new(store, false))
}

pub fn state_with(
    categories: Vec<Category>,
    questions: Vec<Question>,
) -> Arc<AppState<MemoryStore>> {
    setup_logging();
    Arc::new(AppState::new(MemoryStore::new(categories, questions), false))
}

pub async fn send(
    state: Arc<AppState<MemoryStore>>,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app: Router = app_routes(state);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");

    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        )),
    };

    (status, json)
}
