//! Content validation against a personality's vocabulary and the bound
//! voice's forbidden terms.

use crate::personality::PersonalityProfile;
use crate::voice::BoundVoice;

use super::text;
use super::types::{Violation, ViolationKind};

/// Check free text against the profile's vocabulary rules.
///
/// Emoji are flagged only when the profile disallows them; forbidden
/// phrases are blocking; slang is advisory.
pub fn validate_content(text: &str, profile: &PersonalityProfile) -> Vec<Violation> {
    let vocab = &profile.vocabulary;
    let mut violations = Vec::new();

    if !vocab.allow_emojis && text::contains_emoji(text) {
        violations.push(
            Violation::error(
                ViolationKind::WordChoice,
                format!("{} does not use emoji.", profile.name),
            )
            .with_suggestion("Remove the emoji."),
        );
    }

    for phrase in text::find_phrases(text, &vocab.forbidden_phrases) {
        violations.push(
            Violation::error(
                ViolationKind::WordChoice,
                format!("\"{}\" is off-voice for {}.", phrase, profile.name),
            )
            .with_suggestion(match vocab.preferred_phrases.first() {
                Some(preferred) => format!("Try language like \"{}\".", preferred),
                None => format!("Remove \"{}\".", phrase),
            }),
        );
    }

    if !vocab.allow_slang {
        let slang = text::slang_words(text);
        if !slang.is_empty() {
            violations.push(Violation::warning(
                ViolationKind::WordChoice,
                format!("{} avoids slang: {}.", profile.name, slang.join(", ")),
            ));
        }
    }

    violations
}

/// Check free text against the forbidden terms of the voice bound for this
/// location.  Every hit is blocking.
pub fn validate_voice(text: &str, voice: &BoundVoice) -> Vec<Violation> {
    let definition = voice.definition;
    text::find_phrases(text, &definition.forbidden_terms)
        .into_iter()
        .map(|term| {
            Violation::error(
                ViolationKind::WordChoice,
                format!(
                    "\"{}\" is off-voice for the {} voice at {}.",
                    term, definition.id, voice.location
                ),
            )
            .with_suggestion(format!("Remove \"{}\".", term))
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
