//! Copy contract resolution: behavior + personality → writing constraints.
//!
//! Each numeric/boolean field comes from a small table keyed by one enum.
//! Feature contracts loosen the hero maxima; error contracts only ever
//! tighten them.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::behavior::{HeadlineStyle, HeroBehavior, SubcopyDensity, UrgencyEmphasis};
use crate::error::ParseEnumError;
use crate::personality::types::closed_enum;
use crate::personality::{AuthorityTone, HumorDensity, PersonalityProfile, Tone, TrustPosture};

/// What kind of content a contract governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentArchetype {
    Hero,
    Feature,
    Error,
}

closed_enum!(ContentArchetype, "content archetype", {
    Hero => "hero",
    Feature => "feature",
    Error => "error",
});

/// Which field of a piece of copy is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyField {
    Headline,
    Subcopy,
    Cta,
}

closed_enum!(CopyField, "copy field", {
    Headline => "headline",
    Subcopy => "subcopy",
    Cta => "cta",
});

/// Grammatical person the copy addresses the reader in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeVoice {
    SecondPerson,
    FirstPersonPlural,
    Impersonal,
}

impl NarrativeVoice {
    pub fn describe(&self) -> &'static str {
        match self {
            NarrativeVoice::SecondPerson => "second person (address the reader as \"you\")",
            NarrativeVoice::FirstPersonPlural => "first person plural (\"we\") speaking to \"you\"",
            NarrativeVoice::Impersonal => "impersonal (no \"I\" or \"we\")",
        }
    }
}

/// Structural and vocabulary constraints generated copy must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyContract {
    pub archetype: ContentArchetype,
    pub max_headline_words: usize,
    pub max_subcopy_words: usize,
    pub max_cta_words: usize,
    pub allow_exclamation: bool,
    pub allow_questions: bool,
    pub allow_emojis: bool,
    pub allow_slang: bool,
    pub allow_jokes: bool,
    pub allow_first_person: bool,
    pub allow_all_caps: bool,
    /// Lower-case, sorted, deduplicated.
    pub forbidden_phrases: Vec<String>,
    pub preferred_phrases: Vec<String>,
    pub required_tone: Tone,
    pub required_voice: NarrativeVoice,
}

impl CopyContract {
    /// Word limit for a field.
    pub fn max_words(&self, field: CopyField) -> usize {
        match field {
            CopyField::Headline => self.max_headline_words,
            CopyField::Subcopy => self.max_subcopy_words,
            CopyField::Cta => self.max_cta_words,
        }
    }

    /// Sum of all field budgets.
    pub fn total_word_budget(&self) -> usize {
        self.max_headline_words + self.max_subcopy_words + self.max_cta_words
    }

    /// Whether `self` is at least as strict as `other` on every field.
    pub fn is_at_least_as_strict_as(&self, other: &CopyContract) -> bool {
        let flags_ok = [
            (self.allow_exclamation, other.allow_exclamation),
            (self.allow_questions, other.allow_questions),
            (self.allow_emojis, other.allow_emojis),
            (self.allow_slang, other.allow_slang),
            (self.allow_jokes, other.allow_jokes),
            (self.allow_first_person, other.allow_first_person),
            (self.allow_all_caps, other.allow_all_caps),
        ]
        .iter()
        .all(|(mine, theirs)| !*mine || *theirs);

        flags_ok
            && self.max_headline_words <= other.max_headline_words
            && self.max_subcopy_words <= other.max_subcopy_words
            && self.max_cta_words <= other.max_cta_words
            && other
                .forbidden_phrases
                .iter()
                .all(|p| self.forbidden_phrases.contains(p))
    }
}

// ============================================================================
// Tables
// ============================================================================

const fn headline_words(style: HeadlineStyle) -> usize {
    match style {
        HeadlineStyle::Fractured => 8,
        HeadlineStyle::Declarative => 12,
        HeadlineStyle::Punchy => 6,
    }
}

const fn subcopy_words(density: SubcopyDensity) -> usize {
    match density {
        SubcopyDensity::Sparse => 18,
        SubcopyDensity::Balanced => 30,
        SubcopyDensity::Dense => 45,
    }
}

const fn cta_words(urgency: UrgencyEmphasis) -> usize {
    match urgency {
        UrgencyEmphasis::Suppressed => 4,
        UrgencyEmphasis::Factual => 5,
        UrgencyEmphasis::Elevated => 3,
    }
}

const EXCLAMATION_BY_AUTHORITY: [bool; AuthorityTone::COUNT] = [true, false, true];
const FIRST_PERSON_BY_AUTHORITY: [bool; AuthorityTone::COUNT] = [true, true, false];
const QUESTIONS_BY_TRUST: [bool; TrustPosture::COUNT] = [true, true, false];
const JOKES_BY_HUMOR: [bool; HumorDensity::COUNT] = [false, true, true];

const VOICE_BY_TRUST: [NarrativeVoice; TrustPosture::COUNT] = [
    NarrativeVoice::SecondPerson,
    NarrativeVoice::FirstPersonPlural,
    NarrativeVoice::SecondPerson,
];

const FEATURE_TONE_BY_AUTHORITY: [Tone; AuthorityTone::COUNT] =
    [Tone::Deadpan, Tone::Direct, Tone::Encouraging];
const ERROR_TONE_BY_AUTHORITY: [Tone; AuthorityTone::COUNT] =
    [Tone::Deadpan, Tone::Measured, Tone::Encouraging];

/// Vocabulary each authority tone must avoid.
const TONE_FORBIDDEN: [&[&str]; AuthorityTone::COUNT] = [
    // unraveling: no soothing reassurance
    &["relax", "calm", "gentle", "soothing", "peace of mind"],
    // grounded: no hype
    &["amazing", "insane", "mind-blowing", "epic", "unbelievable"],
    // coaching: no defeatism
    &["impossible", "give up", "hopeless", "whatever"],
];

/// Manipulative CTA patterns forbidden for every personality.
pub const UNIVERSAL_BLACKLIST: &[&str] = &[
    "act now",
    "limited time only",
    "click here",
    "don't miss out",
    "once in a lifetime",
    "get rich quick",
    "100% guaranteed",
    "risk-free",
    "what are you waiting for",
];

/// Words error copy must never use.
pub const ALARMING_WORDS: &[&str] = &[
    "error",
    "errors",
    "failed",
    "failure",
    "fatal",
    "crash",
    "crashed",
    "invalid",
    "catastrophic",
    "broken",
    "denied",
];

const FEATURE_BONUS: (usize, usize, usize) = (2, 15, 1);
const ERROR_CAPS: (usize, usize, usize) = (8, 20, 4);

// ============================================================================
// Resolvers
// ============================================================================

/// Resolve the hero-section contract.
pub fn resolve_hero_copy_contract(
    behavior: &HeroBehavior,
    profile: &PersonalityProfile,
) -> CopyContract {
    let authority = profile.authority_tone.index();
    CopyContract {
        archetype: ContentArchetype::Hero,
        max_headline_words: headline_words(behavior.headline_style),
        max_subcopy_words: subcopy_words(behavior.subcopy_density),
        max_cta_words: cta_words(behavior.urgency_emphasis),
        allow_exclamation: EXCLAMATION_BY_AUTHORITY[authority],
        allow_questions: QUESTIONS_BY_TRUST[profile.trust_posture.index()],
        allow_emojis: profile.vocabulary.allow_emojis,
        allow_slang: profile.vocabulary.allow_slang,
        allow_jokes: JOKES_BY_HUMOR[profile.humor_density.index()],
        allow_first_person: FIRST_PERSON_BY_AUTHORITY[authority],
        allow_all_caps: behavior.headline_style == HeadlineStyle::Fractured,
        forbidden_phrases: forbidden_union(profile, &[]),
        preferred_phrases: profile
            .vocabulary
            .preferred_phrases
            .iter()
            .map(|p| p.to_string())
            .collect(),
        required_tone: profile.primary_tone(),
        required_voice: VOICE_BY_TRUST[profile.trust_posture.index()],
    }
}

/// Resolve the feature-block contract: hero rules with roomier budgets.
pub fn resolve_feature_copy_contract(
    behavior: &HeroBehavior,
    profile: &PersonalityProfile,
) -> CopyContract {
    let hero = resolve_hero_copy_contract(behavior, profile);
    CopyContract {
        archetype: ContentArchetype::Feature,
        max_headline_words: hero.max_headline_words + FEATURE_BONUS.0,
        max_subcopy_words: hero.max_subcopy_words + FEATURE_BONUS.1,
        max_cta_words: hero.max_cta_words + FEATURE_BONUS.2,
        required_tone: FEATURE_TONE_BY_AUTHORITY[profile.authority_tone.index()],
        ..hero
    }
}

/// Resolve the error-message contract: no exclamation, jokes, questions,
/// first person, emojis, slang or caps, and no alarming vocabulary.
pub fn resolve_error_copy_contract(
    behavior: &HeroBehavior,
    profile: &PersonalityProfile,
) -> CopyContract {
    let hero = resolve_hero_copy_contract(behavior, profile);
    CopyContract {
        archetype: ContentArchetype::Error,
        max_headline_words: hero.max_headline_words.min(ERROR_CAPS.0),
        max_subcopy_words: hero.max_subcopy_words.min(ERROR_CAPS.1),
        max_cta_words: hero.max_cta_words.min(ERROR_CAPS.2),
        allow_exclamation: false,
        allow_questions: false,
        allow_emojis: false,
        allow_slang: false,
        allow_jokes: false,
        allow_first_person: false,
        allow_all_caps: false,
        forbidden_phrases: forbidden_union(profile, ALARMING_WORDS),
        preferred_phrases: hero.preferred_phrases,
        required_tone: ERROR_TONE_BY_AUTHORITY[profile.authority_tone.index()],
        required_voice: NarrativeVoice::Impersonal,
    }
}

/// Dispatch on archetype.
pub fn resolve_copy_contract(
    archetype: ContentArchetype,
    behavior: &HeroBehavior,
    profile: &PersonalityProfile,
) -> CopyContract {
    match archetype {
        ContentArchetype::Hero => resolve_hero_copy_contract(behavior, profile),
        ContentArchetype::Feature => resolve_feature_copy_contract(behavior, profile),
        ContentArchetype::Error => resolve_error_copy_contract(behavior, profile),
    }
}

/// Profile vocabulary ∪ tone vocabulary ∪ universal blacklist ∪ `extra`.
fn forbidden_union(profile: &PersonalityProfile, extra: &[&str]) -> Vec<String> {
    let set: BTreeSet<String> = profile
        .vocabulary
        .forbidden_phrases
        .iter()
        .chain(TONE_FORBIDDEN[profile.authority_tone.index()])
        .chain(UNIVERSAL_BLACKLIST)
        .chain(extra)
        .map(|p| p.to_lowercase())
        .collect();
    set.into_iter().collect()
}

// ============================================================================
// Tests
// ============================================================================
