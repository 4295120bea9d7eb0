use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Nothing to show: {0}")]
    Empty(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[allow(dead_code)]
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Sqlx failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    pub fn from_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::NOT_FOUND => "Not found",
            StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable",
            _ => "Bad request",
        };

        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

impl ServerError {
    /// Empty results and missing create fields share the 404 of a missing
    /// resource on the wire. Every fault without its own code becomes a 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) | ServerError::Empty(_) | ServerError::MissingField(_) => {
                StatusCode::NOT_FOUND
            }
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::BadRequest(_) | ServerError::Sqlx(_) | ServerError::Internal(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Sqlx(e) => error!("Storage fault reported as bad request: {}", e),
            ServerError::Internal(e) => error!("Internal fault reported as bad request: {}", e),
            other => warn!("Request failed: {}", other),
        };

        let status = self.status_code();
        (status, Json(ErrorBody::from_status(status))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
