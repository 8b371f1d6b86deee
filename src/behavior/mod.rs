//! Behavior resolvers: personality (+ context) → UI behavior tokens.
//!
//! Every resolver is a deterministic lookup over personality enum fields.
//! Context can only turn intensity down; it never swaps content, except
//! for the single route allowed to force a personality (see [`context`]).
//!
//! ```text
//! PersonalityProfile ─┬─ authority_tone ─→ spacing / border / headline style
//!                     ├─ motion_style  ─→ depth / effects / timing / tension
//!                     ├─ humor_density ─→ subcopy density
//!                     ├─ trust_posture ─→ urgency / ambient sound
//!                     └─ sound_profile ─→ volume / event map
//! PersonalityContext ──→ clamps (visual weight, motion gate, sound gate)
//! ```

pub mod context;
pub mod hero;
pub mod motion;
pub mod sound;
pub mod visual;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;
use crate::personality::types::closed_enum;

pub use context::{get_personality_context, PersonalityContext};
pub use hero::{
    resolve_hero_behavior, resolve_hero_behavior_in_context, AnimationIntensity, HeadlineStyle,
    HeroBehavior, SubcopyDensity, UrgencyEmphasis,
};
pub use motion::{
    resolve_motion_tokens, resolve_motion_tokens_with_budget, Easing, EnterTransition,
    HoverEffect, MotionTokens,
};
pub use sound::{resolve_sound_profile, SoundConfig, SoundEvent};
pub use visual::{resolve_visual_tokens, BorderStyle, Depth, Spacing, VisualEffect, VisualTokens};

/// How much visual presence a page context grants the personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextWeight {
    /// Flat, zero decoration regardless of personality.
    None,
    Low,
    Medium,
    High,
}

closed_enum!(ContextWeight, "context weight", {
    None => "none",
    Low => "low",
    Medium => "medium",
    High => "high",
});

impl ContextWeight {
    /// Intensity multiplier applied to decorative effects.
    pub fn factor(&self) -> f32 {
        const FACTORS: [f32; ContextWeight::COUNT] = [0.0, 0.35, 0.7, 1.0];
        FACTORS[self.index()]
    }
}

/// All behavior tokens for one personality in one context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BehaviorTokens {
    pub visual: VisualTokens,
    pub motion: MotionTokens,
    pub sound: SoundConfig,
    pub hero: HeroBehavior,
}

/// Resolve every token family for a profile under a page context.
pub fn resolve_behavior(
    profile: &crate::personality::PersonalityProfile,
    context: &PersonalityContext,
) -> BehaviorTokens {
    BehaviorTokens {
        visual: resolve_visual_tokens(profile, context.visual_weight),
        motion: resolve_motion_tokens(profile, context.motion_allowed),
        sound: resolve_sound_profile(profile, context.sound_allowed),
        hero: resolve_hero_behavior_in_context(profile, context),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::{PersonalityId, PersonalityRegistry};

    #[test]
    fn test_weight_factor_is_monotonic() {
        let factors: Vec<f32> = ContextWeight::ALL.iter().map(|w| w.factor()).collect();
        assert_eq!(factors[0], 0.0);
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*factors.last().unwrap(), 1.0);
    }

    #[test]
    fn test_resolve_behavior_respects_gates() {
        let profile = PersonalityRegistry::get(PersonalityId::Glitch);
        let context = PersonalityContext::conservative();
        let tokens = resolve_behavior(profile, &context);
        assert_eq!(tokens.motion, MotionTokens::none());
        assert!(!tokens.sound.enabled);
        assert!(!tokens.hero.allow_glitch);
    }
}
