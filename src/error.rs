//! Error types for the governance pipeline.
//!
//! The resolvers themselves are total and never return these; errors only
//! arise at the edges (configuration loading, the external generator, and
//! the workflow's fail-closed stop when a voice may not run).

use thiserror::Error;

use crate::voice::{PageMode, RiskLevel};

/// Failure to parse one of the closed personality enums from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Which enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Errors surfaced by configuration loading and the generation workflow.
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// Configuration values are out of range.
    #[error("Invalid governance config: {message}")]
    Config { message: String },

    /// Configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid YAML for the schema.
    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested voice may not run here. Callers must stop generation.
    #[error("Voice {voice:?} is not permitted in {mode} at {risk} risk (location {location:?})")]
    VoiceNotPermitted {
        voice: String,
        mode: PageMode,
        risk: RiskLevel,
        location: String,
    },

    /// The external generator failed.
    #[error("Generation failed: {0}")]
    Generation(#[from] anyhow::Error),

    /// The generator stream reported an error or ended without content.
    #[error("Generation stream error: {message}")]
    Stream { message: String },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GovernanceError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enum_error_display() {
        let err = ParseEnumError {
            kind: "personality",
            value: "sparkle".to_string(),
        };
        assert_eq!(err.to_string(), "unknown personality: \"sparkle\"");
    }

    #[test]
    fn test_voice_not_permitted_display() {
        let err = GovernanceError::VoiceNotPermitted {
            voice: "glitch".to_string(),
            mode: PageMode::LiveFunnel,
            risk: RiskLevel::High,
            location: "CTAEditor".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("glitch"));
        assert!(msg.contains("live_funnel"));
        assert!(msg.contains("high"));
    }

    #[test]
    fn test_anyhow_converts_to_generation_error() {
        let err: GovernanceError = anyhow::anyhow!("provider timeout").into();
        assert!(matches!(err, GovernanceError::Generation(_)));
        assert!(err.to_string().contains("provider timeout"));
    }
}
