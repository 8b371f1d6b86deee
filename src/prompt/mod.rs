//! Prompt assembly: governance layers + runtime context → one prompt.
//!
//! ```text
//! AIProfile ──────┐
//! CopyContract ───┼─→ assemble_prompt ─→ PromptConfig { system, temperature, max_tokens, stop_sequences }
//! BoundVoice? ────┤                          │
//! GenerationContext┘                         └─ cache_key() = sha256(system | params)
//! ```
//!
//! Assembly is pure: identical inputs give a byte-identical `system` string.

pub mod assembler;
pub mod sampling;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use assembler::{
    assemble_prompt, sanitize_context_value, OUTPUT_STOP_SEQUENCES, SECTION_ARCHETYPE, SECTION_CONTEXT, SECTION_FORBIDDEN,
    SECTION_GUARDRAILS, SECTION_LANGUAGE, SECTION_ORDER, SECTION_OUTPUT,
};
pub use sampling::{max_tokens_for, temperature_for};

/// Caller-supplied runtime context.  Only ever placed in the runtime
/// context section of the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationContext {
    pub product_name: String,
    pub audience: String,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub niche: Option<String>,
    /// Messages from a rejected previous attempt, for corrective retries.
    #[serde(default)]
    pub prior_violations: Vec<String>,
}

impl GenerationContext {
    pub fn new(product_name: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            audience: audience.into(),
            ..Default::default()
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    pub fn with_niche(mut self, niche: impl Into<String>) -> Self {
        self.niche = Some(niche.into());
        self
    }
}

/// Final prompt plus sampling parameters handed to the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    pub system: String,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl PromptConfig {
    /// SHA-256 hex digest of the prompt and its sampling parameters.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.system.as_bytes());
        hasher.update(b"|");
        hasher.update(format!("{:.2}", self.temperature).as_bytes());
        hasher.update(b"|");
        hasher.update(self.max_tokens.to_string().as_bytes());
        for stop in &self.stop_sequences {
            hasher.update(b"|");
            hasher.update(stop.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

// ============================================================================
// Tests
// ============================================================================
