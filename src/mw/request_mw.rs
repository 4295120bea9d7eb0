use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

pub async fn request_mw(req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let span = info_span!("request", %request_id, %method, %path);

    async move {
        let started = Instant::now();
        let response = next.run(req).await;
        let status = response.status();
        let elapsed_ms = started.elapsed().as_millis();

        if status.is_client_error() || status.is_server_error() {
            warn!("{} {} -> {} in {} ms", method, path, status, elapsed_ms);
        } else {
            info!("{} {} -> {} in {} ms", method, path, status, elapsed_ms);
        }

        response
    }
    .instrument(span)
    .await
}
