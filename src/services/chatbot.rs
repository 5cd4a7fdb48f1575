// src/services/chatbot.rs
use tracing::error;

use crate::message::{ChatRequest, kind};
use crate::services::provider::{CompletionProvider, PromptEntry};

pub const SYSTEM_PROMPT: &str = "You are a helpful chatbot.";
pub const FALLBACK_REPLY: &str = "Oops! GPT had a problem.";

pub fn build_prompt(message: &str) -> Vec<PromptEntry> {
    vec![
        PromptEntry::system(SYSTEM_PROMPT),
        PromptEntry::user(message),
    ]
}

/// Relay one message to the provider. Never fails: any provider error is
/// logged and replaced by [`FALLBACK_REPLY`].
pub async fn generate_reply(provider: &dyn CompletionProvider, message: &str) -> String {
    match provider.complete(&build_prompt(message)).await {
        Ok(content) => content.trim().to_string(),
        Err(e) => {
            error!(
                provider = provider.name(),
                error = %e,
                "completion failed, sending fallback reply"
            );
            FALLBACK_REPLY.to_string()
        }
    }
}

/// Answer a parsed request. A `message` that is not text cannot be relayed
/// and gets the fallback reply without calling the provider.
pub async fn reply_to(provider: &dyn CompletionProvider, request: &ChatRequest) -> String {
    match request.message() {
        Ok(message) => generate_reply(provider, message).await,
        Err(value) => {
            error!(
                message_kind = kind(value),
                "message is not a string, sending fallback reply"
            );
            FALLBACK_REPLY.to_string()
        }
    }
}
