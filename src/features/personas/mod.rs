//! # Personas Feature
//!
//! Expert persona table with a generic assistant fallback.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

pub mod choices;
pub mod manager;

pub use choices::{is_valid_persona, CONSTRUCTION_DX, PERSONA_CHOICES, TIKTOK_GROWTH};
pub use manager::{Persona, PersonaManager, DEFAULT_SYSTEM_PROMPT};
