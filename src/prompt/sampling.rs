//! Sampling parameters derived from the AI profile and copy contract.
//!
//! ```text
//! knowledge_posture → base temperature
//! solution_style    → temperature offset
//! word budget       → max_tokens
//! ```

use crate::ai_profile::{AIProfile, KnowledgePosture, SolutionStyle};
use crate::copy::CopyContract;

const MIN_TEMPERATURE: f64 = 0.2;
const MAX_TEMPERATURE: f64 = 1.0;

/// Rough tokens per English word.
const TOKENS_PER_WORD: usize = 2;
/// JSON keys, quotes and braces around the three fields.
const FORMAT_OVERHEAD_TOKENS: usize = 48;

fn base_temperature(posture: KnowledgePosture) -> f64 {
    match posture {
        KnowledgePosture::Provisional => 0.85,
        KnowledgePosture::Evidential => 0.4,
        KnowledgePosture::Experiential => 0.7,
    }
}

fn style_offset(style: SolutionStyle) -> f64 {
    match style {
        SolutionStyle::Experimental => 0.1,
        SolutionStyle::Prescriptive => -0.1,
        SolutionStyle::Motivational => 0.05,
    }
}

/// Temperature in `[0.2, 1.0]`, rounded to two decimals.
pub fn temperature_for(ai: &AIProfile) -> f64 {
    let t = (base_temperature(ai.knowledge_posture) + style_offset(ai.solution_style))
        .clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    (t * 100.0).round() / 100.0
}

/// Token ceiling covering the contract's total word budget.
pub fn max_tokens_for(contract: &CopyContract) -> u32 {
    let tokens = contract.total_word_budget() * TOKENS_PER_WORD + FORMAT_OVERHEAD_TOKENS;
    u32::try_from(tokens).unwrap_or(u32::MAX)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai_profile::resolve_ai_profile;
    use crate::behavior::resolve_hero_behavior;
    use crate::copy::{resolve_copy_contract, ContentArchetype};
    use crate::personality::{PersonalityId, PersonalityRegistry};

    #[test]
    fn test_temperature_in_range_for_every_personality() {
        for profile in PersonalityRegistry::all() {
            let t = temperature_for(&resolve_ai_profile(profile));
            assert!((MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&t), "{}", t);
        }
    }

    #[test]
    fn test_evidential_posture_runs_coolest() {
        let anchor = temperature_for(&resolve_ai_profile(PersonalityRegistry::get(
            PersonalityId::Anchor,
        )));
        let glitch = temperature_for(&resolve_ai_profile(PersonalityRegistry::get(
            PersonalityId::Glitch,
        )));
        assert!(anchor < glitch);
        assert_eq!(anchor, 0.3);
    }

    #[test]
    fn test_error_contract_gets_fewer_tokens() {
        let profile = PersonalityRegistry::get(PersonalityId::Boost);
        let behavior = resolve_hero_behavior(profile);
        let hero = resolve_copy_contract(ContentArchetype::Hero, &behavior, profile);
        let error = resolve_copy_contract(ContentArchetype::Error, &behavior, profile);
        assert!(max_tokens_for(&error) <= max_tokens_for(&hero));
        assert_eq!(
            max_tokens_for(&hero) as usize,
            hero.total_word_budget() * TOKENS_PER_WORD + FORMAT_OVERHEAD_TOKENS
        );
    }
}
