// src/services/backend.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::forwarder::ReplySource;
use crate::error::SourceError;
use crate::message::{ChatRequest, ChatTurn};

pub const SOURCE_NAME: &str = "backend";

/// Field names the advice backend has been seen using for its reply text,
/// in the order we trust them.
const REPLY_FIELDS: &[&str] = &["message", "response", "reply", "answer"];

/// Forwards the chat request to the remote career-advice backend.
pub struct BackendSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct BackendPayload<'a> {
    message: &'a str,
    user_id: String,
    conversation_history: &'a [ChatTurn],
}

impl BackendSource {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            timeout,
        }
    }

    fn message_url(&self) -> String {
        format!("{}/chat/message", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ReplySource for BackendSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn attempt(&self, request: &ChatRequest) -> Result<String, SourceError> {
        let url = self.message_url();
        tracing::debug!(%url, "forwarding message to backend");

        let payload = BackendPayload {
            message: &request.message,
            // The backend keys history on a user id; this API is anonymous,
            // so mint one per request.
            user_id: Uuid::new_v4().to_string(),
            conversation_history: &request.conversation_history,
        };

        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let body: Value = resp.json().await?;
        extract_reply(&body).ok_or(SourceError::MissingReply)
    }
}

/// Pull the reply text out of a loosely-shaped backend response. First
/// present, non-empty string field wins.
pub fn extract_reply(body: &Value) -> Option<String> {
    REPLY_FIELDS.iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}
