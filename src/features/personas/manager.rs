//! # Feature: Persona System
//!
//! Two expert personas (construction DX consultant, TikTok growth hacker) keyed by
//! their selector label. Each persona has a system prompt loaded from prompt/*.md
//! files at compile time. Unknown keys resolve to a generic assistant prompt.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Added ordered persona listing for the form selector
//! - 1.0.0: Initial release with 2 personas and default fallback

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::choices::{CONSTRUCTION_DX, PERSONA_CHOICES, TIKTOK_GROWTH};

/// System prompt used when the persona key is not in the table
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "あなたは有能なアシスタントです。ユーザーの目的達成を最短で支援してください。";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub system_prompt: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct PersonaManager {
    personas: HashMap<String, Persona>,
}

impl Default for PersonaManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaManager {
    pub fn new() -> Self {
        let mut personas = HashMap::new();

        // Prompts embedded at compile time
        personas.insert(
            CONSTRUCTION_DX.to_string(),
            Persona {
                name: CONSTRUCTION_DX.to_string(),
                system_prompt: include_str!("../../../prompt/construction_dx.md").to_string(),
                description: "Construction DX and site management expert: safety, scheduling, cost reduction, supply chain, AI/data".to_string(),
            },
        );

        personas.insert(
            TIKTOK_GROWTH.to_string(),
            Persona {
                name: TIKTOK_GROWTH.to_string(),
                system_prompt: include_str!("../../../prompt/tiktok_growth.md").to_string(),
                description: "TikTok growth hacker focused on watch retention and follower acquisition".to_string(),
            },
        );

        PersonaManager { personas }
    }

    pub fn get_persona(&self, key: &str) -> Option<&Persona> {
        self.personas.get(key)
    }

    /// All personas in selector order
    pub fn list_personas(&self) -> Vec<&Persona> {
        PERSONA_CHOICES
            .iter()
            .filter_map(|key| self.personas.get(*key))
            .collect()
    }

    /// Resolve the system prompt for a persona key.
    ///
    /// Never fails: keys missing from the table get [`DEFAULT_SYSTEM_PROMPT`].
    pub fn get_system_prompt(&self, key: &str) -> &str {
        self.personas
            .get(key)
            .map(|p| p.system_prompt.as_str())
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }
}
