//! Request middleware: API key check and request logging

use super::error::ApiError;
use super::router::ApiState;
use axum::{
    extract::{ConnectInfo, OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use quiz_application::{API_KEY_HEADER, RequestRecord};
use quiz_domain::QuizRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

fn client_addr(request: &Request) -> Option<String> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
}

/// Path as the client sent it. Nested routers see the path with their prefix
/// stripped, so prefer the `OriginalUri` axum records before routing.
fn request_path(request: &Request) -> String {
    match request.extensions().get::<OriginalUri>() {
        Some(OriginalUri(uri)) => uri.path().to_string(),
        None => request.uri().path().to_string(),
    }
}

/// Reject requests without a valid `X-API-Key` before any handler runs.
pub async fn require_api_key<R: QuizRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_addr(&request);
    let path = request_path(&request);
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .map(|v| v.to_str().unwrap_or_default());

    if let Err(e) = state.guard.check(presented, &path, client.as_deref()) {
        return ApiError::from(e).into_response();
    }
    next.run(request).await
}

/// Log every request once it has been answered.
pub async fn log_requests<R: QuizRepository + 'static>(
    State(state): State<Arc<ApiState<R>>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let path = request_path(&request);
    let client = client_addr(&request);

    let response = next.run(request).await;

    let record = RequestRecord {
        method,
        path,
        status: response.status().as_u16(),
        duration_ms: started.elapsed().as_millis() as u64,
        client,
    };
    let client = record.client.as_deref().unwrap_or("unknown");
    if record.is_failure() {
        warn!(
            "{} {} -> {} in {}ms from {}",
            record.method, record.path, record.status, record.duration_ms, client
        );
    } else {
        info!(
            "{} {} -> {} in {}ms from {}",
            record.method, record.path, record.status, record.duration_ms, client
        );
    }
    state.request_logger.log(record);

    response
}
