//! Copy validation: checks one field of copy against its contract.

use serde::{Deserialize, Serialize};

use super::contract::{ContentArchetype, CopyContract, CopyField};
use crate::validation::text;
use crate::validation::{Severity, Violation, ViolationKind};

/// Result of [`validate_copy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyCheck {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Validate one field of copy.
///
/// Checks, in order: word count against the field maximum, forbidden
/// phrases (case-insensitive containment), exclamation and question marks
/// against the allow flags, emoji, slang, first-person pronouns, and
/// all-caps words (acronyms of four letters or fewer are ignored).
pub fn validate_copy(text: &str, contract: &CopyContract, field: CopyField) -> CopyCheck {
    let mut violations = Vec::new();

    let words = text::word_count(text);
    let max = contract.max_words(field);
    if words > max {
        violations.push(
            Violation::error(
                ViolationKind::LengthViolation,
                format!("{} has {} words (max {}).", capitalize(field.as_str()), words, max),
            )
            .with_suggestion(format!("Cut the {} to {} words or fewer.", field, max)),
        );
    }

    for phrase in text::find_phrases(text, &contract.forbidden_phrases) {
        violations.push(
            Violation::error(
                ViolationKind::WordChoice,
                format!("{} uses forbidden phrase \"{}\".", capitalize(field.as_str()), phrase),
            )
            .with_suggestion(format!("Remove \"{}\".", phrase)),
        );
    }

    if !contract.allow_exclamation && text.contains('!') {
        violations.push(
            Violation::error(
                ViolationKind::StructureMismatch,
                format!("{} contains an exclamation mark.", capitalize(field.as_str())),
            )
            .with_suggestion("End the sentence with a period."),
        );
    }

    if !contract.allow_questions && text.contains('?') {
        violations.push(Violation {
            kind: ViolationKind::StructureMismatch,
            severity: severity_for(contract, Severity::Warning),
            message: format!("{} contains a question.", capitalize(field.as_str())),
            suggestion: Some("Rephrase as a statement.".to_string()),
        });
    }

    if !contract.allow_emojis && text::contains_emoji(text) {
        violations.push(Violation::error(
            ViolationKind::WordChoice,
            format!("{} contains emoji.", capitalize(field.as_str())),
        ));
    }

    if !contract.allow_slang {
        let slang = text::slang_words(text);
        if !slang.is_empty() {
            violations.push(Violation {
                kind: ViolationKind::WordChoice,
                severity: severity_for(contract, Severity::Warning),
                message: format!("{} uses slang: {}.", capitalize(field.as_str()), slang.join(", ")),
                suggestion: None,
            });
        }
    }

    if !contract.allow_first_person {
        let pronouns = text::first_person_words(text);
        if !pronouns.is_empty() {
            violations.push(
                Violation {
                    kind: ViolationKind::StructureMismatch,
                    severity: severity_for(contract, Severity::Warning),
                    message: format!(
                        "{} speaks in first person ({}).",
                        capitalize(field.as_str()),
                        pronouns.join(", ")
                    ),
                    suggestion: None,
                }
                .with_suggestion(format!("Write in {}.", contract.required_voice.describe())),
            );
        }
    }

    if !contract.allow_all_caps {
        let caps = text::all_caps_words(text);
        if !caps.is_empty() {
            violations.push(Violation::warning(
                ViolationKind::StructureMismatch,
                format!("{} shouts: {}.", capitalize(field.as_str()), caps.join(", ")),
            ));
        }
    }

    let valid = !violations.iter().any(Violation::is_blocking);
    CopyCheck { valid, violations }
}

/// Error-archetype contracts escalate advisory findings to blocking ones.
fn severity_for(contract: &CopyContract, default: Severity) -> Severity {
    if contract.archetype == ContentArchetype::Error {
        Severity::Error
    } else {
        default
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================
