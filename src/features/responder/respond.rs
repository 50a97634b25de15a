//! Persona responder
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Validate, resolve persona, single completion call

use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::conversation::Conversation;
use crate::features::completion::{CompletionClient, ModelSettings};
use crate::features::personas::{is_valid_persona, PersonaManager};

/// Returned instead of calling the model when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "入力テキストが空です。内容を入力してください。";

/// Blank check: Unicode whitespace plus the ASCII separators U+001C..=U+001F
fn is_blank(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Answers a question in the voice of the selected expert persona.
///
/// Holds only read-only state, so one instance can serve concurrent requests.
pub struct PersonaResponder {
    persona_manager: PersonaManager,
    client: Arc<dyn CompletionClient>,
    settings: ModelSettings,
}

impl PersonaResponder {
    pub fn new(
        persona_manager: PersonaManager,
        client: Arc<dyn CompletionClient>,
        settings: ModelSettings,
    ) -> Self {
        Self {
            persona_manager,
            client,
            settings,
        }
    }

    pub fn persona_manager(&self) -> &PersonaManager {
        &self.persona_manager
    }

    /// System prompt for `persona_key`, or the default assistant prompt
    pub fn system_prompt_for(&self, persona_key: &str) -> &str {
        self.persona_manager.get_system_prompt(persona_key)
    }

    /// Build the conversation for a request.
    ///
    /// The human message is `user_input` exactly as received. Whitespace is only
    /// inspected by [`respond`](Self::respond) to detect blank input.
    pub fn build_conversation(&self, user_input: &str, persona_key: &str) -> Conversation {
        Conversation::new(self.system_prompt_for(persona_key), user_input)
    }

    /// Answer `user_input` as the persona selected by `persona_key`.
    ///
    /// Blank input short-circuits with [`EMPTY_INPUT_MESSAGE`] and makes no
    /// network call. Completion failures are returned unchanged.
    pub async fn respond(&self, user_input: &str, persona_key: &str) -> Result<String> {
        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] respond | Persona: {persona_key} | Input length: {}",
            user_input.len()
        );

        if is_blank(user_input) {
            info!("[{request_id}] Empty input, skipping completion");
            return Ok(EMPTY_INPUT_MESSAGE.to_string());
        }

        if !is_valid_persona(persona_key) {
            warn!("[{request_id}] Unknown persona `{persona_key}`, using default prompt");
        }

        let conversation = self.build_conversation(user_input, persona_key);
        debug!(
            "[{request_id}] System prompt resolved | Length: {}",
            conversation.system_message().text.len()
        );

        info!("[{request_id}] Calling completion | Model: {}", self.settings.model);
        let answer = self.client.complete(&conversation, &self.settings).await?;
        debug!("[{request_id}] Got response: {} chars", answer.len());

        Ok(answer)
    }
}
