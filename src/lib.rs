//! # Personality Governor
//!
//! Personality-governed content generation.  A small set of brand
//! personalities drives UI behavior tokens, copy contracts, AI guardrails,
//! voice gating, prompt assembly and post-generation validation.
//!
//! ```text
//! selector + route
//!   ↓ personality     PersonalityRegistry / resolver (never fails)
//!   ↓ behavior        visual, motion, sound, hero, route context
//!   ↓ copy            CopyContract per archetype
//!   ↓ ai_profile      worldview and forbidden claims
//!   ↓ voice           fail-closed binding per location
//!   ↓ prompt          fixed-order, deterministic PromptConfig
//!   ↓ (external generator)
//!   ↓ validation      ValidationResult, errors block approval
//! ```
//!
//! Everything above the generator is pure and synchronous; [`pipeline`]
//! holds the only async code.

pub mod ai_profile;
pub mod behavior;
pub mod config;
pub mod copy;
pub mod error;
pub mod personality;
pub mod pipeline;
pub mod prompt;
pub mod validation;
pub mod voice;

pub use ai_profile::{resolve_ai_profile, AIProfile};
pub use behavior::{get_personality_context, resolve_behavior, BehaviorTokens, PersonalityContext};
pub use config::GovernanceConfig;
pub use copy::{resolve_copy_contract, validate_copy, ContentArchetype, CopyContract};
pub use error::{GovernanceError, Result};
pub use personality::{resolve_personality, PersonalityId, PersonalityProfile, PersonalityRegistry};
pub use pipeline::{ContentGenerator, GenerationOutcome, GenerationRequest, Governor};
pub use prompt::{assemble_prompt, GenerationContext, PromptConfig};
pub use validation::{
    check_cross_contamination, validate_ai_output, validate_content, ValidationResult, Violation,
};
pub use voice::{bind_voice, BoundVoice, VoiceContext, VoiceRegistry};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
