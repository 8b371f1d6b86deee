//! Violation and result types shared by every validator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Violation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    ForbiddenClaim,
    WordChoice,
    LengthViolation,
    StructureMismatch,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::ForbiddenClaim => write!(f, "forbidden-claim"),
            ViolationKind::WordChoice => write!(f, "word-choice"),
            ViolationKind::LengthViolation => write!(f, "length-violation"),
            ViolationKind::StructureMismatch => write!(f, "structure-mismatch"),
        }
    }
}

/// `Error` blocks approval; `Warning` is advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Violation {
    pub fn error(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn warning(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attach a suggested fix.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.severity, self.kind, self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (suggestion: {})", s)?;
        }
        Ok(())
    }
}

/// Outcome of validating one piece of text.
///
/// Violations are ordered errors first, then warnings, each group in the
/// order they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Build a result; validity means no `Error`-severity violation.
    pub fn from_violations(mut violations: Vec<Violation>) -> Self {
        // stable sort keeps discovery order inside a severity
        violations.sort_by(|a, b| b.severity.cmp(&a.severity));
        let is_valid = !violations.iter().any(Violation::is_blocking);
        Self {
            is_valid,
            violations,
        }
    }

    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violations: Vec::new(),
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_blocking())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.is_blocking())
    }

    /// Merge another result into this one.
    pub fn merge(self, other: ValidationResult) -> Self {
        let mut all = self.violations;
        all.extend(other.violations);
        Self::from_violations(all)
    }

    /// Messages suitable for appending to a corrective prompt.
    pub fn correction_notes(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| match v.suggestion {
                Some(ref s) => format!("{} Fix: {}", v.message, s),
                None => v.message.clone(),
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_do_not_block() {
        let result = ValidationResult::from_violations(vec![Violation::warning(
            ViolationKind::StructureMismatch,
            "all caps",
        )]);
        assert!(result.is_valid);
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn test_errors_block_and_sort_first() {
        let result = ValidationResult::from_violations(vec![
            Violation::warning(ViolationKind::WordChoice, "slang"),
            Violation::error(ViolationKind::LengthViolation, "too long"),
        ]);
        assert!(!result.is_valid);
        assert_eq!(result.violations[0].severity, Severity::Error);
        assert_eq!(result.errors().count(), 1);
    }

    #[test]
    fn test_violation_serializes_with_type_key() {
        let v = Violation::error(ViolationKind::ForbiddenClaim, "guaranteed income")
            .with_suggestion("describe typical outcomes");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "forbidden-claim");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["suggestion"], "describe typical outcomes");
    }

    #[test]
    fn test_merge_recomputes_validity() {
        let a = ValidationResult::valid();
        let b = ValidationResult::from_violations(vec![Violation::error(
            ViolationKind::WordChoice,
            "emoji",
        )]);
        assert!(!a.merge(b).is_valid);
    }

    #[test]
    fn test_correction_notes_include_suggestion() {
        let result = ValidationResult::from_violations(vec![Violation::error(
            ViolationKind::LengthViolation,
            "Headline has 12 words (max 8).",
        )
        .with_suggestion("Cut to 8 words.")]);
        assert_eq!(
            result.correction_notes(),
            vec!["Headline has 12 words (max 8). Fix: Cut to 8 words.".to_string()]
        );
    }
}
