//! Hero behavior: headline fracture, density, tension, urgency.
//!
//! Derived from four personality enum fields via fixed tables.  No
//! randomness, no branching on personality names.

use serde::Serialize;

use super::{ContextWeight, PersonalityContext};
use crate::personality::{AuthorityTone, HumorDensity, MotionStyle, PersonalityProfile, TrustPosture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineStyle {
    /// Broken into shards, deliberately incomplete.
    Fractured,
    /// One calm declarative sentence.
    Declarative,
    /// Short imperative burst.
    Punchy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubcopyDensity {
    Sparse,
    Balanced,
    Dense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationIntensity {
    None,
    Subtle,
    Moderate,
    Intense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyEmphasis {
    /// No urgency cues at all.
    Suppressed,
    /// Only real, verifiable deadlines.
    Factual,
    /// Visible emphasis on acting now.
    Elevated,
}

/// Hero-section behavior consumed by the hero renderer and the copy contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeroBehavior {
    pub headline_style: HeadlineStyle,
    pub subcopy_density: SubcopyDensity,
    /// 0.0–1.0
    pub visual_tension: f32,
    pub allow_glitch: bool,
    pub allow_ambient_sound: bool,
    pub animation_intensity: AnimationIntensity,
    pub urgency_emphasis: UrgencyEmphasis,
}

// ============================================================================
// Tables
// ============================================================================

const HEADLINE_BY_AUTHORITY: [HeadlineStyle; AuthorityTone::COUNT] = [
    HeadlineStyle::Fractured,
    HeadlineStyle::Declarative,
    HeadlineStyle::Punchy,
];

const DENSITY_BY_HUMOR: [SubcopyDensity; HumorDensity::COUNT] = [
    SubcopyDensity::Dense,
    SubcopyDensity::Balanced,
    SubcopyDensity::Sparse,
];

/// (visual_tension, allow_glitch, animation_intensity) keyed by [`MotionStyle`].
const KINETICS_BY_MOTION: [(f32, bool, AnimationIntensity); MotionStyle::COUNT] = [
    (0.85, true, AnimationIntensity::Intense),
    (0.2, false, AnimationIntensity::Subtle),
    (0.55, false, AnimationIntensity::Moderate),
];

/// (urgency, allow_ambient_sound) keyed by [`TrustPosture`].
const URGENCY_BY_TRUST: [(UrgencyEmphasis, bool); TrustPosture::COUNT] = [
    (UrgencyEmphasis::Suppressed, true),
    (UrgencyEmphasis::Factual, false),
    (UrgencyEmphasis::Elevated, false),
];

/// Resolve hero behavior from the profile alone.
pub fn resolve_hero_behavior(profile: &PersonalityProfile) -> HeroBehavior {
    let (visual_tension, allow_glitch, animation_intensity) =
        KINETICS_BY_MOTION[profile.motion_style.index()];
    let (urgency_emphasis, allow_ambient_sound) = URGENCY_BY_TRUST[profile.trust_posture.index()];

    HeroBehavior {
        headline_style: HEADLINE_BY_AUTHORITY[profile.authority_tone.index()],
        subcopy_density: DENSITY_BY_HUMOR[profile.humor_density.index()],
        visual_tension,
        allow_glitch,
        allow_ambient_sound,
        animation_intensity,
        urgency_emphasis,
    }
}

/// Resolve hero behavior, then clamp it to a page context.
///
/// Context only lowers intensity: motion off removes glitch and animation,
/// sound off removes ambient sound, visual weight scales tension.  The
/// headline style and density (content shape) are never changed here.
pub fn resolve_hero_behavior_in_context(
    profile: &PersonalityProfile,
    context: &PersonalityContext,
) -> HeroBehavior {
    let mut hero = resolve_hero_behavior(profile);

    if !context.motion_allowed {
        hero.allow_glitch = false;
        hero.animation_intensity = AnimationIntensity::None;
    }
    if !context.sound_allowed {
        hero.allow_ambient_sound = false;
    }
    if context.visual_weight == ContextWeight::None {
        hero.allow_glitch = false;
    }
    hero.visual_tension =
        ((hero.visual_tension * context.visual_weight.factor()) * 100.0).round() / 100.0;
    hero
}

// ============================================================================
// Tests
// ============================================================================
