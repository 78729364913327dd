use super::{ErrorResponse, messages};
use axum::{http::StatusCode, response::Response};
use std::any::Any;

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        StatusCode::NOT_FOUND,
        messages::NOT_FOUND_TITLE,
        messages::NOT_FOUND_DETAIL,
    )
    .into_response_with_status()
}

/// Response for a panicking handler, used with `CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "Handler panicked");

    ErrorResponse::internal().into_response_with_status()
}
