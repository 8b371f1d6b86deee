//! Sound configuration: enabled flag, palette, volume, event→cue map.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::personality::{PersonalityProfile, SoundProfileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundEvent {
    Click,
    Hover,
    Success,
    Error,
    Notification,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundConfig {
    pub enabled: bool,
    pub profile: SoundProfileId,
    /// 0.0–1.0
    pub volume: f32,
    pub events: BTreeMap<SoundEvent, &'static str>,
}

impl SoundConfig {
    /// Silent configuration for `profile`.
    pub fn disabled(profile: SoundProfileId) -> Self {
        Self {
            enabled: false,
            profile,
            volume: 0.0,
            events: BTreeMap::new(),
        }
    }

    /// Cue for an event, if this config plays one.
    pub fn cue(&self, event: SoundEvent) -> Option<&'static str> {
        if !self.enabled {
            return None;
        }
        self.events.get(&event).copied()
    }
}

struct PaletteRow {
    volume: f32,
    cues: &'static [(SoundEvent, &'static str)],
}

/// Keyed by [`SoundProfileId`].
const PALETTE_TABLE: [PaletteRow; SoundProfileId::COUNT] = [
    // digital
    PaletteRow {
        volume: 0.35,
        cues: &[
            (SoundEvent::Click, "digital-blip"),
            (SoundEvent::Hover, "static-tick"),
            (SoundEvent::Success, "modem-chirp"),
            (SoundEvent::Error, "glitch-buzz"),
            (SoundEvent::Notification, "bit-ping"),
        ],
    },
    // minimal
    PaletteRow {
        volume: 0.2,
        cues: &[
            (SoundEvent::Click, "soft-tap"),
            (SoundEvent::Success, "low-chime"),
            (SoundEvent::Notification, "soft-ping"),
        ],
    },
    // upbeat
    PaletteRow {
        volume: 0.5,
        cues: &[
            (SoundEvent::Click, "pop"),
            (SoundEvent::Hover, "bubble"),
            (SoundEvent::Success, "fanfare"),
            (SoundEvent::Error, "soft-bonk"),
            (SoundEvent::Notification, "sparkle"),
        ],
    },
];

/// Resolve the sound configuration. `sound_allowed = false` forces
/// `{enabled: false, volume: 0}`.
pub fn resolve_sound_profile(profile: &PersonalityProfile, sound_allowed: bool) -> SoundConfig {
    if !sound_allowed {
        return SoundConfig::disabled(profile.sound_profile);
    }
    let row = &PALETTE_TABLE[profile.sound_profile.index()];
    SoundConfig {
        enabled: true,
        profile: profile.sound_profile,
        volume: row.volume,
        events: row.cues.iter().copied().collect(),
    }
}

// ============================================================================
// Tests
// ============================================================================
