// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Response, header},
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::message::{CONNECTION_TROUBLE, ChatResponse};
use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(apologize_on_panic))
}

// Even a panic inside a handler must answer 200 with the apology body.
fn apologize_on_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(%detail, "chat handler panicked");

    let body = serde_json::to_string(&ChatResponse::connection_trouble())
        .unwrap_or_else(|_| format!(r#"{{"response":"{CONNECTION_TROUBLE}","status":"error"}}"#));

    let mut response = Response::new(Body::from(body));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
