//! Voice gating: which AI voice may generate where.
//!
//! Voices are a separate permission layer from personalities.  A voice is
//! bound for a concrete editor location and page mode; anything not
//! explicitly allowed is denied.
//!
//! ```text
//! VoiceContext { location, mode, voice, risk, user_level }
//!   ↓  binder::bind_voice
//!   ├─ unknown voice            → None
//!   ├─ mode not allowed         → None
//!   ├─ escalate risk (location) → effective risk
//!   ├─ risk above voice ceiling → None
//!   ↓
//! BoundVoice { definition, effective_risk, header }
//! ```

pub mod binder;
pub mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;
use crate::personality::types::closed_enum;

pub use binder::{assess_risk, bind_voice, BoundVoice};
pub use registry::{VoiceDefinition, VoiceRegistry};

/// The kind of page an editor location belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    Marketing,
    Onboarding,
    Dashboard,
    /// A published funnel receiving real traffic.
    LiveFunnel,
    Checkout,
    Support,
    /// Unpublished draft preview.
    Preview,
}

closed_enum!(PageMode, "page mode", {
    Marketing => "marketing",
    Onboarding => "onboarding",
    Dashboard => "dashboard",
    LiveFunnel => "live_funnel",
    Checkout => "checkout",
    Support => "support",
    Preview => "preview",
});

/// Stakes of the text being generated.  Ordered; escalation only raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Money or legal commitments change hands on this text.
    Critical,
}

closed_enum!(RiskLevel, "risk level", {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

/// Experience level of the person reading the generated copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

closed_enum!(UserLevel, "user level", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Expert => "expert",
});

impl UserLevel {
    /// One-line writing guidance for this reader.
    pub fn guidance(self) -> &'static str {
        match self {
            UserLevel::Beginner => "Assume no jargon; explain each term the first time it appears.",
            UserLevel::Intermediate => "Use common industry terms; skip the basics.",
            UserLevel::Expert => "Be terse and precise; the reader knows the domain.",
        }
    }
}

/// A request to bind a voice at one editor location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceContext {
    /// Editor component identifier, e.g. `"CTAEditor"`.
    pub location: String,
    pub mode: PageMode,
    /// Requested voice id.
    pub voice: String,
    /// Caller-assessed risk; may be escalated, never lowered.
    pub risk: RiskLevel,
    #[serde(default)]
    pub user_level: UserLevel,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_snake_case() {
        assert_eq!(PageMode::LiveFunnel.to_string(), "live_funnel");
        assert_eq!(RiskLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn test_parse_accepts_kebab_case() {
        assert_eq!("live-funnel".parse::<PageMode>().unwrap(), PageMode::LiveFunnel);
        assert!("landing".parse::<PageMode>().is_err());
    }

    #[test]
    fn test_risk_is_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::Critical));
    }

    #[test]
    fn test_voice_context_deserializes_with_default_level() {
        let ctx: VoiceContext = serde_json::from_str(
            r#"{"location":"HeroEditor","mode":"marketing","voice":"boost","risk":"low"}"#,
        )
        .unwrap();
        assert_eq!(ctx.user_level, UserLevel::Intermediate);
        assert_eq!(ctx.mode, PageMode::Marketing);
    }
}
