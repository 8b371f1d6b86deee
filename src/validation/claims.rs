//! AI output validation: forbidden claims, promises and implications.
//!
//! Each guardrail entry on the [`AIProfile`] is a description written for the
//! prompt.  An entry is found in generated text by:
//!
//! 1. Whole-word containment of the entry itself (case-insensitive).
//! 2. Its guard pattern, which catches the ways the claim is actually
//!    phrased ("make $10,000", "everyone succeeds").
//!
//! `never_claim` and `never_promise` hits are blocking `forbidden-claim`
//! errors; `never_imply` hits are warnings.  A hit whose byte span overlaps
//! one already reported is skipped.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ai_profile::AIProfile;

use super::text;
use super::types::{Severity, ValidationResult, Violation, ViolationKind};

struct GuardPattern {
    entry: &'static str,
    regex: Lazy<Regex>,
}

static GUARD_PATTERNS: [GuardPattern; 21] = [
    // never_claim
    GuardPattern {
        entry: "guaranteed income",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\bguaranteed\s+(income|paychecks?|profits?)\b|\b(get|getting)\s+rich\s+(quick|fast)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "guaranteed results",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\bguarantee(d|s)?\b.{0,30}\b(results?|returns?|success|sales|growth|customers)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "overnight success",
        regex: Lazy::new(|| Regex::new(r"(?i)\bovernight\s+(success|results|millionaire|growth)\b").unwrap()),
    },
    GuardPattern {
        entry: "risk-free returns",
        regex: Lazy::new(|| Regex::new(r"(?i)\b(risk[\s-]?free|zero[\s-]risk|no[\s-]risk)\b").unwrap()),
    },
    GuardPattern {
        entry: "to be a human",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(i'm|i\s+am|we're|we\s+are)\s+(a\s+)?(real\s+)?(human|person|people)\b|\b(i'm|i\s+am)\s+not\s+(a\s+)?(bot|robot|ai)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "testimonials or endorsements that were not provided",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(thousands|millions|hundreds)\s+of\s+(happy\s+)?(customers|users|clients)\b|\brated\s+\d(\.\d)?\s*(/\s*5|out\s+of\s+5|stars?)")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "medical, legal or financial expertise",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\bas\s+(a|your)\s+(doctor|physician|lawyer|attorney|financial\s+advis[eo]r|accountant)\b|\b(our|expert|professional)\s+(medical|legal|financial|investment)\s+advice\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that the product is flawless",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(flawless|bug[\s-]free|never\s+breaks|zero\s+bugs|perfect\s+every\s+time)\b").unwrap()
        }),
    },
    GuardPattern {
        entry: "certainty it does not have",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(definitely|certainly|undoubtedly)\s+will\b|\b(proven|scientifically\s+proven)\s+to\s+(work|succeed|convert)\b|\b100\s?%\s+(certain|sure|effective)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that everyone succeeds",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(everyone|everybody|anyone|anybody)\s+(succeeds|wins|gets\s+results|makes\s+money|is\s+successful)\b|\b(can't|cannot|won't)\s+fail\b")
                .unwrap()
        }),
    },
    // never_promise
    GuardPattern {
        entry: "specific earnings",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(make|makes|making|made|earn|earns|earning|earned)\s+(over\s+|up\s+to\s+|at\s+least\s+)?\$\s?\d[\d,.]*[km]?\b|\$\s?\d[\d,.]*[km]?\s*(a|per|/)\s*(day|week|month|year)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "passive income without work",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\bpassive\s+income\b|\b(money|income|cash)\s+while\s+you\s+sleep\b").unwrap()
        }),
    },
    GuardPattern {
        entry: "results within a fixed time",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)(\b(results?|income|revenue|sales|profits?|money|customers|leads|growth)\b|\$\s?\d[\d,]*)[^.!?\n]{0,40}?\b(in|within)\s+((just|only)\s+)?((your|the)\s+first\s+)?((\d+|one|two|three|a)\s+)?(hours?|days?|weeks?|months?)\b|\bin\s+24\s+hours\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "success without effort",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(effortless(ly)?|without\s+(any\s+)?(effort|work)|no\s+effort)\b.{0,30}\b(success|results?|income|money|growth|sales)\b|\b(success|results?|income|money|growth|sales)\b.{0,30}\b(effortless(ly)?|without\s+(any\s+)?(effort|work)|no\s+effort)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that the hype is justified",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(believe|lives?\s+up\s+to)\s+the\s+hype\b|\bthe\s+hype\s+is\s+(real|justified|deserved)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that there is no downside or catch",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(no|zero|without\s+any)\s+(downsides?|trade[\s-]?offs?|catch(es)?|strings\s+attached)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that motivation alone produces results",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\ball\s+you\s+need\s+is\s+(the\s+right\s+)?(mindset|motivation|belief|to\s+believe)\b|\bjust\s+believe\b")
                .unwrap()
        }),
    },
    // never_imply
    GuardPattern {
        entry: "that the reader will fail without buying",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(you'll|you\s+will)\s+(fail|lose\s+everything|fall\s+behind)\s+(without|unless)\b|\bdon't\s+get\s+left\s+behind\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "scarcity that does not exist",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(only\s+\d+\s+(spots?|seats?|copies|left)|last\s+chance|selling\s+out\s+fast|almost\s+gone)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that competitors are dishonest",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(competitors?|other\s+tools|the\s+others)\s+(are|is)\s+(lying|dishonest|scamming\s+you|a\s+scam|scams)\b")
                .unwrap()
        }),
    },
    GuardPattern {
        entry: "that setbacks are the reader's fault",
        regex: Lazy::new(|| {
            Regex::new(r"(?i)\b(it's|that's|it\s+is)\s+your\s+(own\s+)?fault\b|\byou\s+only\s+have\s+yourself\s+to\s+blame\b")
                .unwrap()
        }),
    },
];

const CLAIM_SUGGESTION: &str = "Describe what the product does, not what it guarantees.";
const PROMISE_SUGGESTION: &str = "State typical outcomes and what they depend on.";

/// Validate generated text against the AI profile's guardrails.
pub fn validate_ai_output(output: &str, ai: &AIProfile) -> ValidationResult {
    let haystack = text::normalize(output);
    let lists: [(&[String], Severity, &str, Option<&str>); 3] = [
        (ai.never_claim.as_slice(), Severity::Error, "claims", Some(CLAIM_SUGGESTION)),
        (ai.never_promise.as_slice(), Severity::Error, "promises", Some(PROMISE_SUGGESTION)),
        (ai.never_imply.as_slice(), Severity::Warning, "may imply", None),
    ];

    let mut reported: Vec<Range<usize>> = Vec::new();
    let mut violations = Vec::new();

    for (entries, severity, verb, suggestion) in lists {
        for entry in entries {
            for span in entry_spans(&haystack, entry) {
                if reported.iter().any(|r| overlaps(r, &span)) {
                    continue;
                }
                violations.push(Violation {
                    kind: ViolationKind::ForbiddenClaim,
                    severity,
                    message: format!("Output {} {}: \"{}\".", verb, entry, &haystack[span.clone()]),
                    suggestion: suggestion.map(str::to_string),
                });
                reported.push(span);
            }
        }
    }

    if !violations.is_empty() {
        log::debug!(
            "AI output for {} produced {} claim violation(s)",
            ai.personality,
            violations.len()
        );
    }

    ValidationResult::from_violations(violations)
}

/// Every span where `entry` occurs literally or through its guard pattern.
fn entry_spans(haystack: &str, entry: &str) -> Vec<Range<usize>> {
    let mut spans = text::phrase_spans(haystack, entry);
    if let Some(regex) = guard_pattern(entry) {
        spans.extend(regex.find_iter(haystack).map(|m| m.range()));
    }
    spans
}

fn guard_pattern(entry: &str) -> Option<&'static Regex> {
    GUARD_PATTERNS
        .iter()
        .find(|g| g.entry == entry)
        .map(|g| &*g.regex)
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

// ============================================================================
// Tests
// ============================================================================
