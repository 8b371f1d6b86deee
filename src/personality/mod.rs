//! Personality system: the canonical brand personalities and their resolution.
//!
//! # Architecture
//!
//! ```text
//! selector ("glitch" | "anchor" | "boost" | None | junk)
//!   ↓  resolve_personality (never fails, logs fallback)
//! &'static PersonalityProfile  (one per PersonalityId, immutable)
//!   ↓
//! behavior / copy / ai_profile resolvers
//! ```

pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::{contract_gaps, validate_personality_contract, PersonalityRegistry};
pub use resolver::{
    resolve_personality, resolve_personality_id, resolve_personality_with_default,
    resolve_with_override, ResolutionSource, DEFAULT_PERSONALITY,
};
pub use types::{
    AuthorityTone, ContentGeneration, HumorDensity, Interaction, MotionStyle, PersonalityId,
    PersonalityProfile, PrimaryTrait, SoundProfileId, Tone, TrustPosture, Vocabulary,
};
