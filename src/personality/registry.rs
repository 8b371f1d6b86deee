//! Personality Registry: the compiled-in table of canonical personalities.
//!
//! Exactly one profile per [`PersonalityId`], built once on first access and
//! never mutated afterwards.  The table is indexed by discriminant, so
//! `get(id).id == id` holds by construction (and is asserted in tests).

use once_cell::sync::Lazy;

use super::types::{
    AuthorityTone, ContentGeneration, HumorDensity, Interaction, MotionStyle, PersonalityId,
    PersonalityProfile, PrimaryTrait, SoundProfileId, Tone, TrustPosture, Vocabulary,
};

static PROFILES: Lazy<[PersonalityProfile; PersonalityId::COUNT]> =
    Lazy::new(|| [glitch(), anchor(), boost()]);

/// Tone whitelist per personality, indexed by [`PersonalityId`].
const ALLOWED_TONES: [&[Tone]; PersonalityId::COUNT] = [
    &[Tone::Sarcastic, Tone::Deadpan, Tone::Irreverent],
    &[Tone::BrutallyHonest, Tone::Direct, Tone::Measured],
    &[Tone::Energetic, Tone::Encouraging, Tone::Upbeat],
];

/// Read-only access to the canonical personality table.
pub struct PersonalityRegistry;

impl PersonalityRegistry {
    /// Get the canonical profile for `id`.
    pub fn get(id: PersonalityId) -> &'static PersonalityProfile {
        &PROFILES[id.index()]
    }

    /// All profiles in canonical order.
    pub fn all() -> &'static [PersonalityProfile] {
        &PROFILES[..]
    }

    /// The tones `id` is allowed to write in.
    pub fn allowed_tones(id: PersonalityId) -> &'static [Tone] {
        ALLOWED_TONES[id.index()]
    }
}

/// Check that a profile carries every required field.
///
/// Used as a test-time assertion over the registry, never as a runtime gate.
pub fn validate_personality_contract(profile: &PersonalityProfile) -> bool {
    contract_gaps(profile).is_empty()
}

/// List the names of required fields that are missing or inconsistent.
pub fn contract_gaps(profile: &PersonalityProfile) -> Vec<&'static str> {
    let mut gaps = Vec::new();
    if profile.name.trim().is_empty() {
        gaps.push("name");
    }
    if !PersonalityRegistry::allowed_tones(profile.id).contains(&profile.primary_tone()) {
        gaps.push("primary_trait");
    }
    if profile.content_generation.voice.trim().is_empty() {
        gaps.push("voice");
    }
    if profile.content_generation.philosophy.trim().is_empty() {
        gaps.push("philosophy");
    }
    if profile.content_generation.language_patterns.is_empty() {
        gaps.push("language_patterns");
    }
    if profile.content_generation.contexts.is_empty() {
        gaps.push("contexts");
    }
    if profile.vocabulary.signature_phrases.is_empty() {
        gaps.push("signature_phrases");
    }
    if profile.system_prompt_suffix.trim().is_empty() {
        gaps.push("system_prompt_suffix");
    }
    gaps
}

// ============================================================================
// Canonical definitions
// ============================================================================

fn glitch() -> PersonalityProfile {
    PersonalityProfile {
        id: PersonalityId::Glitch,
        name: "Glitch",
        primary_trait: PrimaryTrait::Sarcastic,
        secondary_traits: vec!["self-aware", "irreverent", "technically sharp"],
        authority_tone: AuthorityTone::Unraveling,
        humor_density: HumorDensity::Heavy,
        motion_style: MotionStyle::Erratic,
        trust_posture: TrustPosture::Skeptical,
        sound_profile: SoundProfileId::Digital,
        vocabulary: Vocabulary {
            allow_emojis: false,
            allow_slang: true,
            forbidden_phrases: vec![
                "rest assured",
                "seamless",
                "world-class",
                // anchor
                "here's the truth",
                "no fluff",
                // boost
                "you've got this",
                "level up",
            ],
            preferred_phrases: vec!["technically", "allegedly", "in theory"],
            signature_phrases: vec![
                "reality is buffering",
                "let's break something",
                "patience not found",
            ],
        },
        interaction: Interaction {
            acknowledgement: "Noted. Probably.",
            empty_state: "Nothing here. Suspiciously quiet.",
            playful_feedback: true,
        },
        content_generation: ContentGeneration {
            voice: "A sarcastic insider who admits the system is held together with tape.",
            philosophy: "Marketing is mostly noise; say the quiet part and let the user decide.",
            language_patterns: vec![
                "Short statement. Sharper aside.",
                "Sentence that breaks off mid-",
                "Admits a flaw before making a point.",
            ],
            contexts: vec!["marketing", "preview", "not_found"],
        },
        system_prompt_suffix: "Stay dry. Undercut hype, never the user.",
    }
}

fn anchor() -> PersonalityProfile {
    PersonalityProfile {
        id: PersonalityId::Anchor,
        name: "Anchor",
        primary_trait: PrimaryTrait::BrutallyHonest,
        secondary_traits: vec!["calm", "precise", "accountable"],
        authority_tone: AuthorityTone::Grounded,
        humor_density: HumorDensity::None,
        motion_style: MotionStyle::Steady,
        trust_posture: TrustPosture::Transparent,
        sound_profile: SoundProfileId::Minimal,
        vocabulary: Vocabulary {
            allow_emojis: false,
            allow_slang: false,
            forbidden_phrases: vec![
                "game-changer",
                "revolutionary",
                "crushing it",
                "just kidding",
                // glitch
                "reality is buffering",
                "let's break something",
                // boost
                "let's go",
                "level up",
            ],
            preferred_phrases: vec!["in practice", "expect", "measured"],
            signature_phrases: vec!["here's the truth", "no fluff", "the numbers don't lie"],
        },
        interaction: Interaction {
            acknowledgement: "Saved.",
            empty_state: "No data yet. Results appear after your first visitors.",
            playful_feedback: false,
        },
        content_generation: ContentGeneration {
            voice: "A plain-spoken advisor who states costs and trade-offs first.",
            philosophy: "People decide well when nobody hides the downside.",
            language_patterns: vec![
                "Claim, then evidence.",
                "States the limitation in the same breath as the benefit.",
            ],
            contexts: vec!["marketing", "dashboard", "live_funnel", "checkout", "support"],
        },
        system_prompt_suffix: "Be direct and specific. If something is uncertain, say so.",
    }
}

fn boost() -> PersonalityProfile {
    PersonalityProfile {
        id: PersonalityId::Boost,
        name: "Boost",
        primary_trait: PrimaryTrait::Enthusiastic,
        secondary_traits: vec!["warm", "motivating", "action-oriented"],
        authority_tone: AuthorityTone::Coaching,
        humor_density: HumorDensity::Light,
        motion_style: MotionStyle::Elastic,
        trust_posture: TrustPosture::Optimistic,
        sound_profile: SoundProfileId::Upbeat,
        vocabulary: Vocabulary {
            allow_emojis: true,
            allow_slang: true,
            forbidden_phrases: vec![
                "unfortunately",
                "it's complicated",
                "meh",
                // glitch
                "patience not found",
                "reality is buffering",
                // anchor
                "the numbers don't lie",
                "no fluff",
            ],
            preferred_phrases: vec!["next step", "momentum", "progress"],
            signature_phrases: vec!["let's go", "you've got this", "level up"],
        },
        interaction: Interaction {
            acknowledgement: "Nice, that's saved!",
            empty_state: "Your first win starts here.",
            playful_feedback: true,
        },
        content_generation: ContentGeneration {
            voice: "An upbeat coach who celebrates small, real progress.",
            philosophy: "Momentum beats perfection; every next step counts.",
            language_patterns: vec![
                "Action verb first.",
                "Names the next concrete step.",
            ],
            contexts: vec!["marketing", "onboarding", "dashboard", "live_funnel"],
        },
        system_prompt_suffix: "Keep the energy up without overpromising outcomes.",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_one_profile_per_id() {
        assert_eq!(PersonalityRegistry::all().len(), PersonalityId::COUNT);
        for id in PersonalityId::ALL {
            assert_eq!(PersonalityRegistry::get(id).id, id);
        }
    }

    #[test]
    fn test_every_profile_satisfies_contract() {
        for profile in PersonalityRegistry::all() {
            assert!(
                validate_personality_contract(profile),
                "{} has gaps: {:?}",
                profile.name,
                contract_gaps(profile)
            );
        }
    }

    #[test]
    fn test_contract_detects_missing_fields() {
        let mut profile = PersonalityRegistry::get(PersonalityId::Boost).clone();
        profile.name = "";
        profile.content_generation.language_patterns.clear();
        let gaps = contract_gaps(&profile);
        assert!(gaps.contains(&"name"));
        assert!(gaps.contains(&"language_patterns"));
        assert!(!validate_personality_contract(&profile));
    }

    #[test]
    fn test_primary_tone_belongs_only_to_own_whitelist() {
        for profile in PersonalityRegistry::all() {
            let tone = profile.primary_tone();
            assert!(PersonalityRegistry::allowed_tones(profile.id).contains(&tone));
            for other in PersonalityId::ALL.iter().filter(|o| **o != profile.id) {
                assert!(
                    !PersonalityRegistry::allowed_tones(*other).contains(&tone),
                    "{} tone {} leaks into {}",
                    profile.name,
                    tone,
                    other
                );
            }
        }
    }

    #[test]
    fn test_sarcastic_personality_is_never_brutally_honest() {
        let glitch = PersonalityRegistry::get(PersonalityId::Glitch);
        assert_eq!(glitch.primary_tone(), Tone::Sarcastic);
        assert!(!PersonalityRegistry::allowed_tones(PersonalityId::Glitch)
            .contains(&Tone::BrutallyHonest));
    }

    #[test]
    fn test_tone_whitelists_are_disjoint() {
        for a in PersonalityId::ALL {
            for b in PersonalityId::ALL.iter().filter(|b| **b != a) {
                for tone in PersonalityRegistry::allowed_tones(a) {
                    assert!(!PersonalityRegistry::allowed_tones(*b).contains(tone));
                }
            }
        }
    }

    #[test]
    fn test_phrases_are_lowercase() {
        for profile in PersonalityRegistry::all() {
            for phrase in profile
                .vocabulary
                .forbidden_phrases
                .iter()
                .chain(&profile.vocabulary.signature_phrases)
            {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }
}
