use axum::{extract::OriginalUri, http::Method};
use tracing::debug;

use crate::server::error::ServerError;

pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    debug!("No route for {} {}", method, uri.path());
    ServerError::NotFound(format!("No route for {}", uri.path()))
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ServerError {
    debug!("Method {} is not allowed on {}", method, uri.path());
    ServerError::MethodNotAllowed
}
