use careerbot_backend::config::Settings;
use careerbot_backend::message::{ChatResponse, NOT_UNDERSTOOD, ReplyStatus};
use careerbot_backend::routes::create_router;
use careerbot_backend::services::mock::{MockCatalog, Topic};
use careerbot_backend::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

// No backend URL, no provider key: the forwarder goes straight to the
// canned catalog.
fn offline_app() -> Router {
    let state = Arc::new(AppState::new(Settings::default()));
    create_router().with_state(state)
}

async fn post_chat(app: Router, body: impl Into<String>) -> (StatusCode, ChatResponse) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.into()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let chat: ChatResponse = serde_json::from_slice(&bytes).unwrap();
    (status, chat)
}

#[tokio::test]
async fn test_demo_status_when_nothing_configured() {
    let (status, chat) = post_chat(offline_app(), r#"{"message": "hello there"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat.status, ReplyStatus::Demo);
    assert!(!chat.response.is_empty());
}

#[tokio::test]
async fn test_malformed_json_still_answers_ok() {
    let (status, chat) = post_chat(offline_app(), "this is not json at all {{{").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat.status, ReplyStatus::Error);
    assert_eq!(chat.response, NOT_UNDERSTOOD);
}

#[tokio::test]
async fn test_blank_message_is_not_understood() {
    let (status, chat) = post_chat(offline_app(), r#"{"message": "   "}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat.status, ReplyStatus::Error);
    assert_eq!(chat.response, NOT_UNDERSTOOD);
}

#[tokio::test]
async fn test_resume_message_draws_from_resume_set() {
    let (status, chat) = post_chat(
        offline_app(),
        r#"{"message": "Can you help me improve my resume?"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let catalog = MockCatalog::new();
    assert!(
        catalog
            .candidates(Topic::Resume)
            .contains(&chat.response.as_str()),
        "unexpected reply: {}",
        chat.response
    );
}

#[tokio::test]
async fn test_frontend_resume_takes_priority_over_generic_resume() {
    let (_, chat) = post_chat(
        offline_app(),
        r#"{"message": "Any tips for my frontend resume?"}"#,
    )
    .await;

    let catalog = MockCatalog::new();
    assert!(
        catalog
            .candidates(Topic::FrontendResume)
            .contains(&chat.response.as_str())
    );
    assert!(
        !catalog
            .candidates(Topic::Resume)
            .contains(&chat.response.as_str())
    );
}

#[tokio::test]
async fn test_elaboration_follows_previous_assistant_turn() {
    let body = r#"{
        "message": "Could you elaborate on that?",
        "conversation_history": [
            {"role": "user", "content": "Any tips for a data science resume?"},
            {"role": "assistant", "content": "A data science resume should prove you can turn data into decisions."}
        ]
    }"#;
    let (_, chat) = post_chat(offline_app(), body).await;

    let catalog = MockCatalog::new();
    assert!(
        catalog
            .candidates(Topic::DataScienceDetail)
            .contains(&chat.response.as_str()),
        "unexpected reply: {}",
        chat.response
    );
}

#[tokio::test]
async fn test_unmatched_message_draws_from_default_set() {
    let (_, chat) = post_chat(offline_app(), r#"{"message": "What should I do next?"}"#).await;

    let catalog = MockCatalog::new();
    assert!(
        catalog
            .candidates(Topic::Default)
            .contains(&chat.response.as_str()),
        "unexpected reply: {}",
        chat.response
    );
}

#[tokio::test]
async fn test_status_serializes_as_snake_case() {
    let app = offline_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message": "hello there"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let raw = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(raw.contains(r#""status":"demo""#), "raw body: {raw}");
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = offline_app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
