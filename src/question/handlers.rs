use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use tracing::{debug, info};

use crate::{
    common::{
        models::PageQuery,
        pagination::{PageNumber, QUESTIONS_PER_PAGE, paginate},
        store::TriviaStore,
    },
    question::{
        models::{CreatedResponse, DeletedResponse, NewQuestion, QuestionPage, QuestionsRequest},
        search::filter_by_term,
    },
    server::{app_state::AppState, error::ServerError, fallback::method_not_allowed},
};

pub fn question_routes<S: TriviaStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_questions::<S>).post(create_or_search_questions::<S>),
        )
        .route("/{question_id}", delete(delete_question::<S>))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn list_questions<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Query(query) = query?;
    let store = state.get_store();
    let page = PageNumber::parse(query.page.as_deref());

    let questions = store.all_questions().await?;
    let current = paginate(&questions, page, QUESTIONS_PER_PAGE);
    if current.is_empty() {
        return Err(ServerError::Empty(format!(
            "Page {} holds no questions",
            page.get()
        )));
    }

    let categories = store.all_categories().await?;
    let response = QuestionPage::new(current, questions.len()).with_categories(categories);

    Ok((StatusCode::OK, Json(response)))
}

/// A body carrying `searchTerm` searches, anything else is a create.
async fn create_or_search_questions<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
    let Query(query) = query?;
    let Json(mut request) = payload?;

    match request.search_term.take() {
        Some(term) => {
            let page = PageNumber::parse(query.page.as_deref());
            search_questions(&*state, &term, page).await
        }
        None => create_question(&*state, request).await,
    }
}

async fn search_questions<S: TriviaStore>(
    state: &AppState<S>,
    term: &str,
    page: PageNumber,
) -> Result<Response, ServerError> {
    let questions = state.get_store().all_questions().await?;
    let matches = filter_by_term(questions, term);
    debug!("Search for {:?} matched {} questions", term, matches.len());

    let response = QuestionPage::new(
        paginate(&matches, page, QUESTIONS_PER_PAGE),
        matches.len(),
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn create_question<S: TriviaStore>(
    state: &AppState<S>,
    request: QuestionsRequest,
) -> Result<Response, ServerError> {
    let new_question = NewQuestion::try_from(request)?;
    let created = state.get_store().insert_question(new_question).await?;
    info!("Question {} was created", created.id);

    let response = CreatedResponse {
        success: true,
        question: state.echo_created_question().then_some(created),
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

async fn delete_question<S: TriviaStore>(
    State(state): State<Arc<AppState<S>>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Path(question_id) = path?;
    let store = state.get_store();

    if store.question_by_id(question_id).await?.is_none() {
        return Err(ServerError::NotFound(format!(
            "Question with id {} does not exist",
            question_id
        )));
    }

    // A concurrent delete may have removed the row since the lookup.
    if !store.delete_question(question_id).await? {
        return Err(ServerError::NotFound(format!(
            "Question with id {} was already deleted",
            question_id
        )));
    }

    info!("Question {} was deleted", question_id);
    Ok((StatusCode::OK, Json(DeletedResponse::for_question(question_id))))
}
