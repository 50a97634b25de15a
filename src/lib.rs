// Core layer - configuration
pub mod core;

// Features layer - personas, completion backend, responder
pub mod features;

pub use crate::core::Config;

pub use features::{
    // Completion
    CompletionClient, ModelSettings, OpenAiCompletion,
    // Personas
    Persona, PersonaManager,
    // Responder
    Conversation, PersonaResponder,
};
