// src/message.rs
use serde::{Deserialize, Serialize};

/// Fixed reply for bodies we can't parse or that carry no message.
pub const NOT_UNDERSTOOD: &str = "I couldn't understand your message. Please try again.";

/// Last-resort reply when a request blows up mid-flight.
pub const CONNECTION_TROUBLE: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn of the conversation, oldest first in the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Which code path produced the reply. Diagnostic only: the UI shows it in a
/// badge and logs it, nothing branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Connected,
    Demo,
    Offline,
    BackendUnavailable,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: ReplyStatus,
}

impl ChatResponse {
    pub fn not_understood() -> Self {
        Self {
            response: NOT_UNDERSTOOD.to_string(),
            status: ReplyStatus::Error,
        }
    }

    pub fn connection_trouble() -> Self {
        Self {
            response: CONNECTION_TROUBLE.to_string(),
            status: ReplyStatus::Error,
        }
    }
}
