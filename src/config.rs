// src/config.rs
use std::env;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// How long we wait on the remote advice backend before giving up on it.
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime settings, read once at startup. An unset backend URL or provider
/// key means that stage of the forwarder simply isn't configured.
#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: String,
    pub backend_url: Option<String>,
    pub backend_timeout: Duration,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            backend_url: None,
            backend_timeout: BACKEND_TIMEOUT,
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the environment. `BACKEND_URL` wins over the older
    /// `API_URL` name; blank values count as unset.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            backend_url: env_var("BACKEND_URL").or_else(|| env_var("API_URL")),
            backend_timeout: BACKEND_TIMEOUT,
            openai_api_key: env_var("OPENAI_API_KEY"),
            openai_model: env_var("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
