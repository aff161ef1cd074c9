use axum::{Json, body::Bytes, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// POST /api/chat. Always answers 200: parse failures and upstream outages
/// are reported in the body, never via HTTP status codes, so the chat UI
/// only ever has to render `{response, status}`.
pub async fn chat_handler(State(state): State<SharedState>, body: Bytes) -> Json<ChatResponse> {
    // Parse by hand instead of using the Json extractor; a malformed body
    // still gets a well-formed 200 reply.
    let request: ChatRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "unparseable chat request body");
            return Json(ChatResponse::not_understood());
        }
    };

    if request.message.trim().is_empty() {
        tracing::warn!("chat request carried an empty message");
        return Json(ChatResponse::not_understood());
    }

    tracing::info!(
        history_len = request.conversation_history.len(),
        "chat request received"
    );

    Json(state.forwarder.handle(&request).await)
}
