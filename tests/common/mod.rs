#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chat_relay::error::ProviderError;
use chat_relay::services::provider::{CompletionProvider, PromptEntry};

/// Canned provider that records every prompt it receives.
pub struct StubProvider {
    outcome: fn() -> Result<String, ProviderError>,
    pub prompts: Mutex<Vec<Vec<PromptEntry>>>,
}

impl StubProvider {
    pub fn new(outcome: fn() -> Result<String, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn last_prompt(&self) -> Option<Vec<PromptEntry>> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, prompt: &[PromptEntry]) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_vec());
        (self.outcome)()
    }
}
