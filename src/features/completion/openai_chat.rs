//! OpenAI chat completion backend
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Send the configured key and base URL with every request
//! - 1.0.0: Single-shot chat completion with optional request timeout

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use std::time::Duration;
use tokio::time::timeout;

use super::{CompletionClient, ModelSettings};
use crate::features::responder::{Conversation, Role};

/// Completion client backed by the OpenAI chat completion endpoint.
///
/// Credentials are attached to each request, so the process environment is
/// never consulted by the `openai` crate.
#[derive(Debug, Clone)]
pub struct OpenAiCompletion {
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
}

impl OpenAiCompletion {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: String::new(),
            timeout: None,
        }
    }

    /// Target an OpenAI-compatible endpoint. Empty means the public API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Abort requests that take longer than `limit`. `None` waits indefinitely.
    pub fn with_timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    fn credentials(&self) -> Option<Credentials> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| Credentials::new(key, self.base_url.clone()))
    }
}

/// Map a conversation onto OpenAI chat messages, preserving order
pub fn to_openai_messages(conversation: &Conversation) -> Vec<ChatCompletionMessage> {
    conversation
        .messages()
        .iter()
        .map(|message| ChatCompletionMessage {
            role: match message.role {
                Role::System => ChatCompletionMessageRole::System,
                Role::Human => ChatCompletionMessageRole::User,
            },
            content: Some(message.text.clone()),
            name: None,
            function_call: None,
            tool_call_id: None,
            tool_calls: None,
        })
        .collect()
}

#[async_trait]
impl CompletionClient for OpenAiCompletion {
    async fn complete(
        &self,
        conversation: &Conversation,
        settings: &ModelSettings,
    ) -> Result<String> {
        let Some(credentials) = self.credentials() else {
            bail!("OPENAI_API_KEY is not set");
        };

        let messages = to_openai_messages(conversation);
        debug!(
            "Sending {} messages to OpenAI | Model: {} | Temperature: {}",
            messages.len(),
            settings.model,
            settings.temperature
        );

        let request = ChatCompletion::builder(&settings.model, messages)
            .temperature(settings.temperature)
            .credentials(credentials)
            .create();

        let completion = match self.timeout {
            Some(limit) => timeout(limit, request).await.map_err(|_| {
                anyhow!("OpenAI request timed out after {} seconds", limit.as_secs())
            })??,
            None => request.await?,
        };

        if let Some(usage) = &completion.usage {
            debug!(
                "OpenAI usage | Prompt: {} | Completion: {} | Total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| anyhow!("OpenAI response contained no message content"))
    }
}
