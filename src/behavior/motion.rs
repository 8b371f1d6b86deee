//! Motion tokens: timing, easing, enter and hover behavior.

use serde::Serialize;

use crate::personality::{MotionStyle, PersonalityProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOut,
    /// Stepped timing with the given number of steps.
    Steps(u8),
    Spring,
}

impl Easing {
    /// CSS timing-function value.
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseOut => "cubic-bezier(0.16, 1, 0.3, 1)".to_string(),
            Easing::Steps(n) => format!("steps({}, end)", n),
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnterTransition {
    None,
    Fade,
    GlitchIn,
    PopIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverEffect {
    None,
    Underline,
    Jitter,
    Lift,
}

/// Resolved animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MotionTokens {
    pub duration_ms: u32,
    pub easing: Easing,
    pub enter: EnterTransition,
    pub hover: HoverEffect,
    pub stagger_ms: u32,
}

impl MotionTokens {
    /// Zero-duration, no-op transitions.
    pub const fn none() -> Self {
        Self {
            duration_ms: 0,
            easing: Easing::Linear,
            enter: EnterTransition::None,
            hover: HoverEffect::None,
            stagger_ms: 0,
        }
    }

    /// Whether these tokens animate at all.
    pub fn is_static(&self) -> bool {
        self.duration_ms == 0
    }
}

/// Keyed by [`MotionStyle`].
const MOTION_TABLE: [MotionTokens; MotionStyle::COUNT] = [
    // erratic
    MotionTokens {
        duration_ms: 180,
        easing: Easing::Steps(4),
        enter: EnterTransition::GlitchIn,
        hover: HoverEffect::Jitter,
        stagger_ms: 40,
    },
    // steady
    MotionTokens {
        duration_ms: 240,
        easing: Easing::EaseOut,
        enter: EnterTransition::Fade,
        hover: HoverEffect::Underline,
        stagger_ms: 0,
    },
    // elastic
    MotionTokens {
        duration_ms: 320,
        easing: Easing::Spring,
        enter: EnterTransition::PopIn,
        hover: HoverEffect::Lift,
        stagger_ms: 60,
    },
];

/// Resolve motion tokens. `motion_allowed = false` forces [`MotionTokens::none`].
pub fn resolve_motion_tokens(profile: &PersonalityProfile, motion_allowed: bool) -> MotionTokens {
    if !motion_allowed {
        return MotionTokens::none();
    }
    MOTION_TABLE[profile.motion_style.index()]
}

/// Resolve motion tokens under an animation budget in milliseconds.
///
/// Durations are clamped to the budget; a zero budget behaves exactly like
/// `motion_allowed = false`.
pub fn resolve_motion_tokens_with_budget(
    profile: &PersonalityProfile,
    motion_allowed: bool,
    budget_ms: u32,
) -> MotionTokens {
    if budget_ms == 0 {
        return MotionTokens::none();
    }
    let mut tokens = resolve_motion_tokens(profile, motion_allowed);
    tokens.duration_ms = tokens.duration_ms.min(budget_ms);
    tokens.stagger_ms = tokens.stagger_ms.min(budget_ms);
    tokens
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::{PersonalityId, PersonalityRegistry};

    #[test]
    fn test_motion_disallowed_is_static_for_all() {
        for profile in PersonalityRegistry::all() {
            let tokens = resolve_motion_tokens(profile, false);
            assert_eq!(tokens, MotionTokens::none());
            assert!(tokens.is_static());
        }
    }

    #[test]
    fn test_zero_budget_is_static() {
        let profile = PersonalityRegistry::get(PersonalityId::Boost);
        assert_eq!(
            resolve_motion_tokens_with_budget(profile, true, 0),
            MotionTokens::none()
        );
    }

    #[test]
    fn test_budget_clamps_duration() {
        let profile = PersonalityRegistry::get(PersonalityId::Boost);
        let tokens = resolve_motion_tokens_with_budget(profile, true, 100);
        assert_eq!(tokens.duration_ms, 100);
        assert_eq!(tokens.stagger_ms, 60);
        assert_eq!(tokens.enter, EnterTransition::PopIn);
    }

    #[test]
    fn test_glitch_uses_stepped_easing() {
        let profile = PersonalityRegistry::get(PersonalityId::Glitch);
        let tokens = resolve_motion_tokens(profile, true);
        assert_eq!(tokens.easing, Easing::Steps(4));
        assert_eq!(tokens.easing.css(), "steps(4, end)");
    }

    #[test]
    fn test_every_style_has_motion() {
        for style in MotionStyle::ALL {
            assert!(MOTION_TABLE[style.index()].duration_ms > 0, "{}", style);
        }
    }
}
