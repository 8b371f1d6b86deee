//! AI Profile: personality → worldview and ethical guardrails.
//!
//! Every field is a lookup over three small enums:
//!
//! ```text
//! trust_posture  ─┬─ core values, knowledge posture, trust mechanism
//!                 └─ never_promise additions
//! authority_tone ─┬─ perspective, relationship, problem framing, solution style
//!                 └─ never_claim additions
//! humor_density  ─┬─ never_imply additions
//!                 └─ must_avoid
//! ```
//!
//! Forbidden lists are the universal baseline followed by the
//! personality-specific additions, in that order.

use serde::{Deserialize, Serialize};

use crate::personality::{
    AuthorityTone, HumorDensity, PersonalityId, PersonalityProfile, TrustPosture,
};

/// How certain the voice allows itself to sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgePosture {
    /// Everything is a hypothesis until tested.
    Provisional,
    /// Claims only what evidence supports.
    Evidential,
    /// Speaks from what has worked for others.
    Experiential,
}

impl KnowledgePosture {
    pub fn describe(self) -> &'static str {
        match self {
            KnowledgePosture::Provisional => "treat every claim as a hypothesis and say so",
            KnowledgePosture::Evidential => "claim only what the evidence shows",
            KnowledgePosture::Experiential => "speak from what has worked for people like the reader",
        }
    }
}

/// Shape of the solutions the voice proposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStyle {
    Experimental,
    Prescriptive,
    Motivational,
}

impl SolutionStyle {
    pub fn describe(self) -> &'static str {
        match self {
            SolutionStyle::Experimental => "suggest trying something and watching what happens",
            SolutionStyle::Prescriptive => "recommend one specific course of action",
            SolutionStyle::Motivational => "make the next step feel small and doable",
        }
    }
}

/// Worldview and guardrails injected into every generation prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AIProfile {
    pub personality: PersonalityId,
    pub core_values: Vec<String>,
    pub perspective: String,
    pub never_claim: Vec<String>,
    pub never_promise: Vec<String>,
    pub never_imply: Vec<String>,
    pub must_avoid: Vec<String>,
    pub relationship_to_user: String,
    pub knowledge_posture: KnowledgePosture,
    pub problem_framing: String,
    pub solution_style: SolutionStyle,
    pub trust_mechanism: String,
    pub system_prompt_prefix: String,
}

// ============================================================================
// Baselines
// ============================================================================

pub const NEVER_CLAIM_BASELINE: &[&str] = &[
    "guaranteed income",
    "guaranteed results",
    "overnight success",
    "risk-free returns",
    "to be a human",
    "testimonials or endorsements that were not provided",
    "medical, legal or financial expertise",
];

pub const NEVER_PROMISE_BASELINE: &[&str] = &[
    "specific earnings",
    "passive income without work",
    "results within a fixed time",
    "success without effort",
];

pub const NEVER_IMPLY_BASELINE: &[&str] = &[
    "that the reader will fail without buying",
    "scarcity that does not exist",
    "that competitors are dishonest",
];

// ============================================================================
// Tables
// ============================================================================

struct TrustRow {
    core_values: [&'static str; 3],
    knowledge_posture: KnowledgePosture,
    trust_mechanism: &'static str,
    never_promise: &'static [&'static str],
}

const TRUST_TABLE: [TrustRow; TrustPosture::COUNT] = [
    // skeptical
    TrustRow {
        core_values: [
            "candor about uncertainty",
            "respect for the reader's intelligence",
            "creative disruption",
        ],
        knowledge_posture: KnowledgePosture::Provisional,
        trust_mechanism: "admitting limitations before the reader finds them",
        never_promise: &["that the hype is justified"],
    },
    // transparent
    TrustRow {
        core_values: ["truth over comfort", "accountability", "clarity"],
        knowledge_posture: KnowledgePosture::Evidential,
        trust_mechanism: "showing the numbers and the trade-offs together",
        never_promise: &["that there is no downside or catch"],
    },
    // optimistic
    TrustRow {
        core_values: [
            "momentum",
            "belief in the reader's capability",
            "celebrating real progress",
        ],
        knowledge_posture: KnowledgePosture::Experiential,
        trust_mechanism: "pointing to concrete next steps that others have taken",
        never_promise: &["that motivation alone produces results"],
    },
];

struct AuthorityRow {
    perspective: &'static str,
    relationship: &'static str,
    problem_framing: &'static str,
    solution_style: SolutionStyle,
    never_claim: &'static [&'static str],
}

const AUTHORITY_TABLE: [AuthorityRow; AuthorityTone::COUNT] = [
    // unraveling
    AuthorityRow {
        perspective: "Most marketing is noise, and saying so out loud is the useful part.",
        relationship: "a fellow insider who is in on the joke",
        problem_framing: "the problem is usually a broken assumption everyone repeats",
        solution_style: SolutionStyle::Experimental,
        never_claim: &["that the product is flawless"],
    },
    // grounded
    AuthorityRow {
        perspective: "Good decisions come from seeing the costs and the benefits side by side.",
        relationship: "a plain-spoken advisor who works for the reader",
        problem_framing: "the problem is stated with its real size and cost",
        solution_style: SolutionStyle::Prescriptive,
        never_claim: &["certainty it does not have"],
    },
    // coaching
    AuthorityRow {
        perspective: "Progress compounds; the next small step matters more than the perfect plan.",
        relationship: "a coach in the reader's corner",
        problem_framing: "the problem is a hurdle the reader can clear",
        solution_style: SolutionStyle::Motivational,
        never_claim: &["that everyone succeeds"],
    },
];

struct HumorRow {
    never_imply: &'static [&'static str],
    must_avoid: &'static [&'static str],
}

const HUMOR_TABLE: [HumorRow; HumorDensity::COUNT] = [
    // none
    HumorRow {
        never_imply: &[
            "that sarcasm is honesty",
            "that the reader's concerns are funny",
        ],
        must_avoid: &["sarcasm", "irony that obscures meaning", "jokes"],
    },
    // light
    HumorRow {
        never_imply: &["that setbacks are the reader's fault"],
        must_avoid: &["mockery", "guilt-tripping"],
    },
    // heavy
    HumorRow {
        never_imply: &["contempt for the reader", "that the reader is the punchline"],
        must_avoid: &["punching down", "cruelty disguised as wit"],
    },
];

// ============================================================================
// Resolver
// ============================================================================

/// Resolve the AI profile for a personality.  Pure, total, no I/O.
pub fn resolve_ai_profile(profile: &PersonalityProfile) -> AIProfile {
    let trust = &TRUST_TABLE[profile.trust_posture.index()];
    let authority = &AUTHORITY_TABLE[profile.authority_tone.index()];
    let humor = &HUMOR_TABLE[profile.humor_density.index()];

    let core_values: Vec<String> = trust.core_values.iter().map(|s| s.to_string()).collect();

    let system_prompt_prefix = [
        format!(
            "You write as {}, a {} brand voice: {}",
            profile.name,
            profile.primary_trait.as_str().replace('_', " "),
            profile.content_generation.voice
        ),
        format!("You value {}.", join_natural(&core_values)),
        authority.perspective.to_string(),
        format!("You speak to the reader as {}.", authority.relationship),
    ]
    .join("\n");

    AIProfile {
        personality: profile.id,
        core_values,
        perspective: authority.perspective.to_string(),
        never_claim: baseline_plus(NEVER_CLAIM_BASELINE, authority.never_claim),
        never_promise: baseline_plus(NEVER_PROMISE_BASELINE, trust.never_promise),
        never_imply: baseline_plus(NEVER_IMPLY_BASELINE, humor.never_imply),
        must_avoid: humor.must_avoid.iter().map(|s| s.to_string()).collect(),
        relationship_to_user: authority.relationship.to_string(),
        knowledge_posture: trust.knowledge_posture,
        problem_framing: authority.problem_framing.to_string(),
        solution_style: authority.solution_style,
        trust_mechanism: trust.trust_mechanism.to_string(),
        system_prompt_prefix,
    }
}

fn baseline_plus(baseline: &[&str], additions: &[&str]) -> Vec<String> {
    baseline
        .iter()
        .chain(additions)
        .map(|s| s.to_string())
        .collect()
}

/// "a", "a and b", "a, b and c".
fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::PersonalityRegistry;

    #[test]
    fn test_every_enum_combination_resolves() {
        let base = PersonalityRegistry::get(PersonalityId::Anchor).clone();
        for trust in TrustPosture::ALL {
            for authority in AuthorityTone::ALL {
                for humor in HumorDensity::ALL {
                    let mut p = base.clone();
                    p.trust_posture = trust;
                    p.authority_tone = authority;
                    p.humor_density = humor;
                    let ai = resolve_ai_profile(&p);
                    assert_eq!(ai.core_values.len(), 3);
                    assert!(!ai.perspective.is_empty());
                    assert!(ai.never_claim.len() > NEVER_CLAIM_BASELINE.len());
                    assert!(ai.never_promise.len() > NEVER_PROMISE_BASELINE.len());
                    assert!(ai.never_imply.len() > NEVER_IMPLY_BASELINE.len());
                    assert!(!ai.must_avoid.is_empty());
                    assert_eq!(ai.system_prompt_prefix.lines().count(), 4);
                }
            }
        }
    }

    #[test]
    fn test_baselines_always_present_first() {
        for profile in PersonalityRegistry::all() {
            let ai = resolve_ai_profile(profile);
            for (i, claim) in NEVER_CLAIM_BASELINE.iter().enumerate() {
                assert_eq!(ai.never_claim[i], *claim);
            }
            for claim in NEVER_PROMISE_BASELINE {
                assert!(ai.never_promise.contains(&claim.to_string()));
            }
        }
    }

    #[test]
    fn test_brutally_honest_avoids_sarcasm() {
        let ai = resolve_ai_profile(PersonalityRegistry::get(PersonalityId::Anchor));
        assert!(ai.must_avoid.iter().any(|s| s.contains("sarcasm")));
        assert!(ai.never_imply.iter().any(|s| s.contains("sarcasm")));
    }

    #[test]
    fn test_prefix_statement_order() {
        let profile = PersonalityRegistry::get(PersonalityId::Glitch);
        let ai = resolve_ai_profile(profile);
        let lines: Vec<&str> = ai.system_prompt_prefix.lines().collect();
        assert!(lines[0].starts_with("You write as Glitch, a sarcastic brand voice"));
        assert!(lines[1].starts_with("You value "));
        assert_eq!(lines[2], ai.perspective);
        assert!(lines[3].contains(&ai.relationship_to_user));
    }

    #[test]
    fn test_resolution_is_pure() {
        let profile = PersonalityRegistry::get(PersonalityId::Boost);
        assert_eq!(resolve_ai_profile(profile), resolve_ai_profile(profile));
    }

    #[test]
    fn test_join_natural() {
        let items: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(join_natural(&items), "a, b and c");
        assert_eq!(join_natural(&items[..1]), "a");
        assert_eq!(join_natural(&[]), "");
    }
}
