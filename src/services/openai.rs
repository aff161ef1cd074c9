// src/services/openai.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::forwarder::ReplySource;
use crate::error::SourceError;
use crate::message::{ChatRequest, Role};

pub const SOURCE_NAME: &str = "openai";

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a helpful career counsellor bot. Your goal is to provide \
personalized career guidance, resume tips, and interview preparation advice. Be supportive, \
professional, and provide actionable advice. Focus on helping users identify their strengths, \
explore career options, and develop professional skills.";

/// Direct chat-completion call, used when no advice backend answered but a
/// provider key is configured. Non-streaming.
pub struct OpenAiSource {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiSource {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_endpoint(COMPLETIONS_URL.to_string(), api_key, model)
    }

    /// Point the source at a different completions endpoint (test doubles,
    /// API-compatible proxies).
    pub fn with_endpoint(endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ReplySource for OpenAiSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn attempt(&self, request: &ChatRequest) -> Result<String, SourceError> {
        let mut messages = Vec::with_capacity(request.conversation_history.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: SYSTEM_PROMPT,
        });
        for turn in &request.conversation_history {
            let role = match turn.role {
                Role::User => "user",
                Role::Assistant => "assistant",
            };
            messages.push(WireMessage {
                role,
                content: &turn.content,
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: &request.message,
        });

        tracing::debug!(model = %self.model, "requesting chat completion");

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
                stream: false,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let completion: CompletionResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(SourceError::EmptyCompletion)
    }
}
