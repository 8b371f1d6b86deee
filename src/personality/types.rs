//! Personality data model: closed enums and the fully-populated profile struct.
//!
//! Every field a downstream resolver keys on is a small closed enum with an
//! `ALL` constant and a `COUNT`.  Resolver tables are `const` arrays of
//! length `COUNT` indexed by discriminant, so adding a variant without a
//! table entry fails to compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

// ============================================================================
// Enum helper
// ============================================================================

/// Implements `ALL`, `COUNT`, `as_str`, `Display` and `FromStr` for a
/// fieldless enum with snake_case wire names.
macro_rules! closed_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in canonical (discriminant) order.
            pub const ALL: [$name; [$($wire),+].len()] = [$($name::$variant),+];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Stable snake_case name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Table index for this variant.
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('-', "_");
                match normalized.as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use closed_enum;

// ============================================================================
// Personality enums
// ============================================================================

/// The three canonical brand personalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityId {
    /// Sarcastic, self-aware, deliberately broken-looking.
    Glitch,
    /// Brutally honest, calm, evidence first.
    Anchor,
    /// Energetic coach, momentum over polish.
    Boost,
}

closed_enum!(PersonalityId, "personality", {
    Glitch => "glitch",
    Anchor => "anchor",
    Boost => "boost",
});

/// The single trait a personality is organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryTrait {
    Sarcastic,
    BrutallyHonest,
    Enthusiastic,
}

closed_enum!(PrimaryTrait, "primary trait", {
    Sarcastic => "sarcastic",
    BrutallyHonest => "brutally_honest",
    Enthusiastic => "enthusiastic",
});

/// Writing tone values. Each personality owns a disjoint whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Sarcastic,
    Deadpan,
    Irreverent,
    BrutallyHonest,
    Direct,
    Measured,
    Energetic,
    Encouraging,
    Upbeat,
}

closed_enum!(Tone, "tone", {
    Sarcastic => "sarcastic",
    Deadpan => "deadpan",
    Irreverent => "irreverent",
    BrutallyHonest => "brutally_honest",
    Direct => "direct",
    Measured => "measured",
    Energetic => "energetic",
    Encouraging => "encouraging",
    Upbeat => "upbeat",
});

/// How the personality holds authority in its copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityTone {
    /// Authority that deliberately falls apart mid-sentence.
    Unraveling,
    /// Quiet, settled, factual.
    Grounded,
    /// Side-by-side coach.
    Coaching,
}

closed_enum!(AuthorityTone, "authority tone", {
    Unraveling => "unraveling",
    Grounded => "grounded",
    Coaching => "coaching",
});

/// How much humor the copy may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumorDensity {
    None,
    Light,
    Heavy,
}

closed_enum!(HumorDensity, "humor density", {
    None => "none",
    Light => "light",
    Heavy => "heavy",
});

/// Nominal animation character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionStyle {
    Erratic,
    Steady,
    Elastic,
}

closed_enum!(MotionStyle, "motion style", {
    Erratic => "erratic",
    Steady => "steady",
    Elastic => "elastic",
});

/// How the personality earns the user's trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustPosture {
    Skeptical,
    Transparent,
    Optimistic,
}

closed_enum!(TrustPosture, "trust posture", {
    Skeptical => "skeptical",
    Transparent => "transparent",
    Optimistic => "optimistic",
});

/// Sound palette identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundProfileId {
    Digital,
    Minimal,
    Upbeat,
}

closed_enum!(SoundProfileId, "sound profile", {
    Digital => "digital",
    Minimal => "minimal",
    Upbeat => "upbeat",
});

// ============================================================================
// Profile struct
// ============================================================================

/// Vocabulary rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vocabulary {
    pub allow_emojis: bool,
    pub allow_slang: bool,
    /// Lower-case phrases this personality must never use.
    pub forbidden_phrases: Vec<&'static str>,
    /// Phrases the personality reaches for.
    pub preferred_phrases: Vec<&'static str>,
    /// Phrases that identify this personality unmistakably.
    pub signature_phrases: Vec<&'static str>,
}

/// Interaction posture used by UI collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    /// Acknowledgement shown after a user action.
    pub acknowledgement: &'static str,
    /// Phrasing used for empty states.
    pub empty_state: &'static str,
    /// Whether micro-interactions may respond playfully.
    pub playful_feedback: bool,
}

/// Content-generation hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentGeneration {
    /// One-sentence voice description.
    pub voice: &'static str,
    /// One-sentence worldview.
    pub philosophy: &'static str,
    /// Recurring sentence shapes.
    pub language_patterns: Vec<&'static str>,
    /// Page contexts this personality is written for.
    pub contexts: Vec<&'static str>,
}

/// A canonical, fully-populated personality definition.
///
/// Instances live only in the registry and are handed out by shared
/// reference; nothing mutates them after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityProfile {
    pub id: PersonalityId,
    pub name: &'static str,
    pub primary_trait: PrimaryTrait,
    pub secondary_traits: Vec<&'static str>,
    pub authority_tone: AuthorityTone,
    pub humor_density: HumorDensity,
    pub motion_style: MotionStyle,
    pub trust_posture: TrustPosture,
    pub sound_profile: SoundProfileId,
    pub vocabulary: Vocabulary,
    pub interaction: Interaction,
    pub content_generation: ContentGeneration,
    pub system_prompt_suffix: &'static str,
}

impl PersonalityProfile {
    /// The tone this profile's primary trait resolves to.
    pub fn primary_tone(&self) -> Tone {
        self.primary_trait.tone()
    }
}

impl PrimaryTrait {
    /// Alignment table: each primary trait maps to exactly one tone.
    pub fn tone(&self) -> Tone {
        const TRAIT_TONE: [Tone; PrimaryTrait::COUNT] =
            [Tone::Sarcastic, Tone::BrutallyHonest, Tone::Energetic];
        TRAIT_TONE[self.index()]
    }
}

// ============================================================================
// Tests
// ============================================================================
