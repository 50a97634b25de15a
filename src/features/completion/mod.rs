//! # Feature: Completion Capability
//!
//! Seam between the persona responder and the hosted language model. The
//! production implementation talks to the OpenAI chat completion API; tests
//! substitute fakes.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with OpenAI chat backend

pub mod openai_chat;

use anyhow::Result;
use async_trait::async_trait;

use crate::features::responder::Conversation;

pub use openai_chat::OpenAiCompletion;

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature used for every request
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Model parameters fixed once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ModelSettings {
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }
}

/// Text generation backend
///
/// Implementations return the generated text, or an error describing why the
/// service could not produce one. Callers receive errors untouched.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, conversation: &Conversation, settings: &ModelSettings)
        -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The responder holds the client as a trait object
    fn _assert_object_safe(_: &dyn CompletionClient) {}

    #[test]
    fn test_default_settings() {
        let settings = ModelSettings::default();
        assert_eq!(settings.model, "gpt-4o-mini");
        assert_eq!(settings.temperature, 0.2);
    }

    #[test]
    fn test_with_model_keeps_temperature() {
        let settings = ModelSettings::with_model("gpt-4.1-mini");
        assert_eq!(settings.model, "gpt-4.1-mini");
        assert_eq!(settings.temperature, DEFAULT_TEMPERATURE);
    }
}
