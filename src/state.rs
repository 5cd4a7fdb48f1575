// src/state.rs
use std::sync::Arc;

use crate::services::provider::CompletionProvider;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}
