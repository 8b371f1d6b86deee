//! Governance configuration.
//!
//! Request-scoped: a [`GovernanceConfig`] is built once by the host and
//! passed by reference to the [`Governor`](crate::pipeline::Governor).
//!
//! ```yaml
//! default_personality: anchor
//! max_attempts: 3
//! warnings_block: false
//! sound_enabled: true
//! motion_budget_ms: 200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, Result};
use crate::personality::{PersonalityId, DEFAULT_PERSONALITY};

/// Tunables for the generation workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Personality used when the selector is missing or unknown.
    pub default_personality: PersonalityId,
    /// Generation attempts before handing off to human review.
    pub max_attempts: u32,
    /// Treat warnings as blocking during approval.
    pub warnings_block: bool,
    /// Global sound switch, ANDed with the route context.
    pub sound_enabled: bool,
    /// Upper bound for any animation duration.
    pub motion_budget_ms: Option<u32>,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            default_personality: DEFAULT_PERSONALITY,
            max_attempts: 3,
            warnings_block: false,
            sound_enabled: true,
            motion_budget_ms: None,
        }
    }
}

impl GovernanceConfig {
    /// Parse and validate a config from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded governance config from {}", path.as_ref().display());
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(GovernanceError::Config {
                message: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GovernanceConfig::default();
        assert_eq!(config.default_personality, PersonalityId::Anchor);
        assert_eq!(config.max_attempts, 3);
        assert!(!config.warnings_block);
        assert!(config.sound_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GovernanceConfig::from_yaml_str("default_personality: boost\n").unwrap();
        assert_eq!(config.default_personality, PersonalityId::Boost);
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.motion_budget_ms, None);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let err = GovernanceConfig::from_yaml_str("max_attempts: 0\n").unwrap_err();
        assert!(matches!(err, GovernanceError::Config { .. }));
    }

    #[test]
    fn test_unknown_personality_is_yaml_error() {
        let err = GovernanceConfig::from_yaml_str("default_personality: sparkle\n").unwrap_err();
        assert!(matches!(err, GovernanceError::Yaml(_)));
    }

    #[test]
    fn test_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "max_attempts: 5\nsound_enabled: false\nmotion_budget_ms: 150").unwrap();
        let config = GovernanceConfig::from_file(tmp.path()).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert!(!config.sound_enabled);
        assert_eq!(config.motion_budget_ms, Some(150));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GovernanceConfig::from_file("/nonexistent/governor.yaml").unwrap_err();
        assert!(matches!(err, GovernanceError::Io(_)));
    }
}
