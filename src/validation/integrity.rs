//! Registry integrity checks.
//!
//! These run from tests and the `check-registry` command, never per
//! request: the registry is static and must be correct before it ships.
//!
//! Personalities are matched by [`PersonalityId`], so renaming a display
//! name cannot silently disable the check.

use serde::Serialize;

use crate::personality::{contract_gaps, PersonalityId, PersonalityProfile, PersonalityRegistry};

/// `personality` does not forbid any signature phrase of `other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContaminationGap {
    pub personality: PersonalityId,
    pub other: PersonalityId,
}

/// Cross-personality check over the canonical registry.
pub fn check_cross_contamination() -> Vec<ContaminationGap> {
    check_cross_contamination_in(PersonalityRegistry::all())
}

/// Cross-personality check over an arbitrary set of profiles.
///
/// For every ordered pair `(p, o)` with `p != o`, `p`'s forbidden phrases
/// must contain at least one of `o`'s signature phrases.
pub fn check_cross_contamination_in(profiles: &[PersonalityProfile]) -> Vec<ContaminationGap> {
    let mut gaps = Vec::new();
    for profile in profiles {
        for other in profiles.iter().filter(|o| o.id != profile.id) {
            let covered = other.vocabulary.signature_phrases.iter().any(|sig| {
                profile
                    .vocabulary
                    .forbidden_phrases
                    .iter()
                    .any(|f| f.eq_ignore_ascii_case(sig))
            });
            if !covered {
                log::warn!(
                    "{} does not forbid any signature phrase of {}",
                    profile.id,
                    other.id
                );
                gaps.push(ContaminationGap {
                    personality: profile.id,
                    other: other.id,
                });
            }
        }
    }
    gaps
}

/// Required-field gaps for one personality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractReport {
    pub personality: PersonalityId,
    pub missing: Vec<&'static str>,
}

/// Combined integrity report over the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryReport {
    pub contracts: Vec<ContractReport>,
    pub contamination: Vec<ContaminationGap>,
}

impl RegistryReport {
    pub fn is_clean(&self) -> bool {
        self.contracts.iter().all(|c| c.missing.is_empty()) && self.contamination.is_empty()
    }
}

/// Run every registry check.
pub fn registry_report() -> RegistryReport {
    let contracts = PersonalityRegistry::all()
        .iter()
        .map(|p| ContractReport {
            personality: p.id,
            missing: contract_gaps(p),
        })
        .collect();
    RegistryReport {
        contracts,
        contamination: check_cross_contamination(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_registry_has_no_contamination_gaps() {
        assert_eq!(check_cross_contamination(), Vec::new());
    }

    #[test]
    fn test_registry_report_is_clean() {
        let report = registry_report();
        assert!(report.is_clean(), "{:?}", report);
        assert_eq!(report.contracts.len(), PersonalityId::COUNT);
    }

    #[test]
    fn test_gap_detected_when_signature_unforbidden() {
        let mut profiles: Vec<PersonalityProfile> = PersonalityRegistry::all().to_vec();
        let boost_sigs = profiles[PersonalityId::Boost.index()]
            .vocabulary
            .signature_phrases
            .clone();
        profiles[PersonalityId::Anchor.index()]
            .vocabulary
            .forbidden_phrases
            .retain(|f| !boost_sigs.contains(f));

        let gaps = check_cross_contamination_in(&profiles);
        assert_eq!(
            gaps,
            vec![ContaminationGap {
                personality: PersonalityId::Anchor,
                other: PersonalityId::Boost,
            }]
        );
    }

    #[test]
    fn test_rename_does_not_disable_check() {
        let mut profiles: Vec<PersonalityProfile> = PersonalityRegistry::all().to_vec();
        for p in profiles.iter_mut() {
            p.name = "Renamed";
        }
        assert!(check_cross_contamination_in(&profiles).is_empty());
    }
}
