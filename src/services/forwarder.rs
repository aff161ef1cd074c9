// src/services/forwarder.rs
use async_trait::async_trait;

use super::backend::{self, BackendSource};
use super::mock::{MockCatalog, detect_topic};
use super::openai::OpenAiSource;
use crate::config::Settings;
use crate::error::SourceError;
use crate::message::{ChatRequest, ChatResponse, ReplyStatus};

/// One stage of the reply chain. Implementations make a single attempt
/// against their upstream; ordering and fallback belong to the forwarder.
#[async_trait]
pub trait ReplySource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn attempt(&self, request: &ChatRequest) -> Result<String, SourceError>;
}

/// Priority chain over the configured reply sources, with the canned-reply
/// catalog as the terminal stage.
pub struct Forwarder {
    sources: Vec<Box<dyn ReplySource>>,
    mocks: MockCatalog,
}

impl Forwarder {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut sources: Vec<Box<dyn ReplySource>> = Vec::new();

        if let Some(url) = &settings.backend_url {
            sources.push(Box::new(BackendSource::new(
                url.clone(),
                settings.backend_timeout,
            )));
        }
        if let Some(key) = &settings.openai_api_key {
            sources.push(Box::new(OpenAiSource::new(
                key.clone(),
                settings.openai_model.clone(),
            )));
        }

        Self::with_sources(sources)
    }

    /// Build a forwarder over an explicit source list.
    pub fn with_sources(sources: Vec<Box<dyn ReplySource>>) -> Self {
        Self {
            sources,
            mocks: MockCatalog::new(),
        }
    }

    /// Try each configured source in order and stop at the first success;
    /// otherwise serve a canned reply. Every outcome becomes a
    /// `ChatResponse`, this never fails.
    pub async fn handle(&self, request: &ChatRequest) -> ChatResponse {
        let mut first_failed: Option<&'static str> = None;

        for source in &self.sources {
            match source.attempt(request).await {
                Ok(response) => {
                    tracing::info!(source = source.name(), "reply obtained");
                    return ChatResponse {
                        response,
                        status: ReplyStatus::Connected,
                    };
                }
                Err(err) => {
                    if err.is_timeout() {
                        tracing::warn!(source = source.name(), "source timed out");
                    } else {
                        tracing::warn!(source = source.name(), error = %err, "source failed");
                    }
                    first_failed.get_or_insert(source.name());
                }
            }
        }

        // demo = nothing was configured at all; otherwise the tag names the
        // first configured source that let us down.
        let status = match first_failed {
            None => ReplyStatus::Demo,
            Some(name) if name == backend::SOURCE_NAME => ReplyStatus::BackendUnavailable,
            Some(_) => ReplyStatus::Offline,
        };

        let topic = detect_topic(&request.message, &request.conversation_history);
        tracing::info!(?topic, ?status, "serving canned reply");

        ChatResponse {
            response: self.mocks.pick(topic).to_string(),
            status,
        }
    }
}
