//! Visual tokens: spacing, border, depth and decorative effects.

use serde::Serialize;

use super::ContextWeight;
use crate::personality::{AuthorityTone, MotionStyle, PersonalityProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    Compact,
    Regular,
    Airy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    None,
    Hairline,
    Solid,
    Jagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Flat,
    Raised,
    Layered,
}

impl Depth {
    /// One step flatter.
    fn lowered(self) -> Depth {
        match self {
            Depth::Layered => Depth::Raised,
            Depth::Raised | Depth::Flat => Depth::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualEffect {
    Scanlines,
    ChromaticShift,
    Grain,
    Glow,
    Confetti,
}

/// Resolved visual parameters for UI rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTokens {
    pub spacing: Spacing,
    pub border: BorderStyle,
    pub depth: Depth,
    pub radius_px: u8,
    pub effects: Vec<VisualEffect>,
    /// 0.0–1.0
    pub effect_intensity: f32,
}

impl VisualTokens {
    /// Zero-decoration token set.
    pub fn flat() -> Self {
        Self {
            spacing: Spacing::Regular,
            border: BorderStyle::None,
            depth: Depth::Flat,
            radius_px: 0,
            effects: Vec::new(),
            effect_intensity: 0.0,
        }
    }
}

// ============================================================================
// Tables
// ============================================================================

struct FrameRow {
    spacing: Spacing,
    border: BorderStyle,
    radius_px: u8,
}

/// Keyed by [`AuthorityTone`].
const FRAME_TABLE: [FrameRow; AuthorityTone::COUNT] = [
    // unraveling
    FrameRow {
        spacing: Spacing::Compact,
        border: BorderStyle::Jagged,
        radius_px: 0,
    },
    // grounded
    FrameRow {
        spacing: Spacing::Airy,
        border: BorderStyle::Hairline,
        radius_px: 4,
    },
    // coaching
    FrameRow {
        spacing: Spacing::Regular,
        border: BorderStyle::Solid,
        radius_px: 12,
    },
];

struct SurfaceRow {
    depth: Depth,
    effects: &'static [VisualEffect],
    intensity: f32,
}

/// Keyed by [`MotionStyle`].
const SURFACE_TABLE: [SurfaceRow; MotionStyle::COUNT] = [
    // erratic
    SurfaceRow {
        depth: Depth::Layered,
        effects: &[VisualEffect::Scanlines, VisualEffect::ChromaticShift, VisualEffect::Grain],
        intensity: 0.9,
    },
    // steady
    SurfaceRow {
        depth: Depth::Flat,
        effects: &[],
        intensity: 0.0,
    },
    // elastic
    SurfaceRow {
        depth: Depth::Raised,
        effects: &[VisualEffect::Glow, VisualEffect::Confetti],
        intensity: 0.6,
    },
];

/// Resolve visual tokens.  `ContextWeight::None` is a hard clamp to
/// [`VisualTokens::flat`]; `Low` keeps the frame but drops effects.
pub fn resolve_visual_tokens(profile: &PersonalityProfile, weight: ContextWeight) -> VisualTokens {
    if weight == ContextWeight::None {
        return VisualTokens::flat();
    }

    let frame = &FRAME_TABLE[profile.authority_tone.index()];
    let surface = &SURFACE_TABLE[profile.motion_style.index()];

    let (depth, effects) = match weight {
        ContextWeight::Low => (surface.depth.lowered(), Vec::new()),
        _ => (surface.depth, surface.effects.to_vec()),
    };
    let effect_intensity = if effects.is_empty() {
        0.0
    } else {
        round2(surface.intensity * weight.factor())
    };

    VisualTokens {
        spacing: frame.spacing,
        border: frame.border,
        depth,
        radius_px: frame.radius_px,
        effects,
        effect_intensity,
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

// ============================================================================
// Tests
// ============================================================================
