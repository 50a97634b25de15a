//! # Feature: Persona Responder
//!
//! Validates the user's text, resolves the selected persona's system prompt,
//! and forwards a two-message conversation to the completion capability.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

pub mod conversation;
pub mod respond;

pub use conversation::{ChatMessage, Conversation, Role};
pub use respond::{PersonaResponder, EMPTY_INPUT_MESSAGE};
