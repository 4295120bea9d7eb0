use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::debug;

use crate::{
    category::{models::CategoriesResponse, resolver},
    common::{
        models::PageQuery,
        pagination::{PageNumber, QUESTIONS_PER_PAGE, paginate},
        store::TriviaStore,
    },
    question::models::QuestionPage,
    server::{app_state::AppState, error::ServerError, fallback::method_not_allowed},
};

pub fn category_routes<S: TriviaStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(list_categories::<S>))
        .route("/{category_id}/questions", get(questions_by_category::<S>))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn list_categories<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ServerError> {
    let categories = resolver::all_categories(state.get_store()).await?;
    Ok((StatusCode::OK, Json(CategoriesResponse { categories })))
}

async fn questions_by_category<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(category_id) = path?;
    let Query(query) = query?;
    let store = state.get_store();

    let Some(category) = store.category_by_id(category_id).await? else {
        return Err(ServerError::BadRequest(format!(
            "Category with id {} does not exist",
            category_id
        )));
    };

    let questions = store.questions_by_category(category_id).await?;
    let page = PageNumber::parse(query.page.as_deref());
    debug!(
        "Category {} has {} questions, serving page {}",
        category_id,
        questions.len(),
        page.get()
    );

    let response = QuestionPage::new(
        paginate(&questions, page, QUESTIONS_PER_PAGE),
        questions.len(),
    )
    .in_category(category);

    Ok((StatusCode::OK, Json(response)))
}
