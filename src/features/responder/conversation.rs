//! Two-message conversation sent to the completion capability
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Fixed system + human message pair

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    Human,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

/// Exactly one system message followed by exactly one human message.
///
/// The pair is stored as a fixed array so neither the count nor the order can drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: [ChatMessage; 2],
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>, user_input: impl Into<String>) -> Self {
        Self {
            messages: [
                ChatMessage {
                    role: Role::System,
                    text: system_prompt.into(),
                },
                ChatMessage {
                    role: Role::Human,
                    text: user_input.into(),
                },
            ],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn system_message(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn human_message(&self) -> &ChatMessage {
        &self.messages[1]
    }
}
