//! Validation of a complete structured generation.
//!
//! The generator is asked for `{"headline", "subcopy", "cta"}`.  The
//! buffered output is parsed, each field is checked against its copy
//! contract, and the joined text goes through the vocabulary, voice and
//! claim checks.

use serde::{Deserialize, Serialize};

use crate::ai_profile::AIProfile;
use crate::copy::{validate_copy, CopyContract, CopyField};
use crate::personality::PersonalityProfile;
use crate::voice::BoundVoice;

use super::claims::validate_ai_output;
use super::content::{validate_content, validate_voice};
use super::types::{ValidationResult, Violation, ViolationKind};

/// The three copy fields a generation must return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub headline: String,
    pub subcopy: String,
    pub cta: String,
}

impl GeneratedCopy {
    pub fn field(&self, field: CopyField) -> &str {
        match field {
            CopyField::Headline => &self.headline,
            CopyField::Subcopy => &self.subcopy,
            CopyField::Cta => &self.cta,
        }
    }

    /// All fields joined for whole-text checks.
    pub fn joined(&self) -> String {
        format!("{}\n{}\n{}", self.headline, self.subcopy, self.cta)
    }
}

/// Parse generator output into [`GeneratedCopy`].
///
/// Tolerates surrounding whitespace and a Markdown code fence.
pub fn parse_generated_copy(raw: &str) -> Result<GeneratedCopy, serde_json::Error> {
    let trimmed = raw.trim();
    let body = match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    };
    serde_json::from_str(body)
}

/// Validate a raw generation.
///
/// Returns the parsed copy (if it parsed) and the merged result.  Malformed
/// output is a single blocking `structure-mismatch`.  When a voice is bound,
/// its forbidden terms are checked too.
pub fn validate_generation(
    raw: &str,
    profile: &PersonalityProfile,
    ai: &AIProfile,
    contract: &CopyContract,
    voice: Option<&BoundVoice>,
) -> (Option<GeneratedCopy>, ValidationResult) {
    let copy = match parse_generated_copy(raw) {
        Ok(copy) => copy,
        Err(e) => {
            log::debug!("Generation is not valid copy JSON: {}", e);
            let violation = Violation::error(
                ViolationKind::StructureMismatch,
                format!("Output is not the requested JSON object ({}).", e),
            )
            .with_suggestion(
                "Return only {\"headline\": ..., \"subcopy\": ..., \"cta\": ...}.",
            );
            return (None, ValidationResult::from_violations(vec![violation]));
        }
    };

    let mut violations = Vec::new();
    for field in CopyField::ALL {
        violations.extend(validate_copy(copy.field(field), contract, field).violations);
    }
    let joined = copy.joined();
    violations.extend(validate_content(&joined, profile));
    if let Some(voice) = voice {
        violations.extend(validate_voice(&joined, voice));
    }
    violations.extend(validate_ai_output(&joined, ai).violations);

    (Some(copy), ValidationResult::from_violations(violations))
}

// ============================================================================
// Tests
// ============================================================================
