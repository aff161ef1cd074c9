// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::services::forwarder::Forwarder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub settings: Settings,
    pub forwarder: Forwarder,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let forwarder = Forwarder::from_settings(&settings);
        Self {
            settings,
            forwarder,
        }
    }
}
