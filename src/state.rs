// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::inference::InferenceClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: RelayConfig,
    pub inference: InferenceClient,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        let inference = InferenceClient::new(config.backend_url.clone());
        Self { config, inference }
    }
}
