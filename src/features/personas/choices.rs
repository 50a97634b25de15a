//! Persona selector options
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Construction DX and TikTok growth experts

/// Construction DX / site management consultant
pub const CONSTRUCTION_DX: &str = "A（建設DXコンサル）";

/// TikTok growth hacker
pub const TIKTOK_GROWTH: &str = "B（TikTokグロース）";

/// Persona keys in selector order. Each key doubles as the option label.
pub const PERSONA_CHOICES: &[&str] = &[CONSTRUCTION_DX, TIKTOK_GROWTH];

/// Validate a persona key exists
pub fn is_valid_persona(key: &str) -> bool {
    PERSONA_CHOICES.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_choices_complete() {
        assert_eq!(PERSONA_CHOICES.len(), 2);
        assert_eq!(PERSONA_CHOICES[0], CONSTRUCTION_DX);
        assert_eq!(PERSONA_CHOICES[1], TIKTOK_GROWTH);
    }

    #[test]
    fn test_is_valid_persona() {
        assert!(is_valid_persona("A（建設DXコンサル）"));
        assert!(is_valid_persona("B（TikTokグロース）"));
        assert!(!is_valid_persona("Z"));
        assert!(!is_valid_persona("A"));
    }

    #[test]
    fn test_all_personas_have_unique_keys() {
        let mut keys: Vec<&str> = PERSONA_CHOICES.to_vec();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), PERSONA_CHOICES.len(), "Duplicate persona keys found");
    }
}
