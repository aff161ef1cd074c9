// src/error.rs
use thiserror::Error;

/// Why a reply source failed. The forwarder logs these and moves on to the
/// next stage; nothing here ever reaches the browser as an HTTP error.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("backend reply carried no usable text field")]
    MissingReply,

    #[error("model returned an empty completion")]
    EmptyCompletion,
}

impl SourceError {
    /// True when the failure was the request timing out rather than the
    /// remote end answering badly.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
