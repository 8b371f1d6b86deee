//! Personality Resolver: external selector → canonical profile.
//!
//! Never fails: a missing or unrecognized selector resolves to the default
//! profile and logs a warning.

use serde::Serialize;

use super::registry::PersonalityRegistry;
use super::types::{PersonalityId, PersonalityProfile};

/// The personality used when no valid selector is supplied.
pub const DEFAULT_PERSONALITY: PersonalityId = PersonalityId::Anchor;

/// Where the resolved personality came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// The caller's selector named a valid personality.
    Selected,
    /// No selector was given.
    DefaultMissing,
    /// The selector was not recognized.
    DefaultUnknown,
    /// A route context overrode the selector.
    RouteForced,
}

/// Resolve a selector using [`DEFAULT_PERSONALITY`] as the fallback.
pub fn resolve_personality(selector: Option<&str>) -> &'static PersonalityProfile {
    resolve_personality_with_default(selector, DEFAULT_PERSONALITY).0
}

/// Resolve a selector with an explicit fallback, reporting the source.
pub fn resolve_personality_with_default(
    selector: Option<&str>,
    default: PersonalityId,
) -> (&'static PersonalityProfile, ResolutionSource) {
    match selector.map(str::trim).filter(|s| !s.is_empty()) {
        None => {
            log::warn!(
                "No personality selector supplied; using default '{}'",
                default
            );
            (PersonalityRegistry::get(default), ResolutionSource::DefaultMissing)
        }
        Some(raw) => match raw.parse::<PersonalityId>() {
            Ok(id) => (PersonalityRegistry::get(id), ResolutionSource::Selected),
            Err(e) => {
                log::warn!("{}; using default '{}'", e, default);
                (PersonalityRegistry::get(default), ResolutionSource::DefaultUnknown)
            }
        },
    }
}

/// Resolve an already-typed selector.
pub fn resolve_personality_id(id: Option<PersonalityId>) -> &'static PersonalityProfile {
    match id {
        Some(id) => PersonalityRegistry::get(id),
        None => resolve_personality(None),
    }
}

/// Apply a route-level override on top of a selector.
///
/// `forced` comes from the route context (`force_brand_mode`); when present
/// it replaces whatever the caller selected.
pub fn resolve_with_override(
    selector: Option<&str>,
    forced: Option<PersonalityId>,
    default: PersonalityId,
) -> (&'static PersonalityProfile, ResolutionSource) {
    match forced {
        Some(id) => {
            log::info!("Route forces personality '{}' (selector {:?})", id, selector);
            (PersonalityRegistry::get(id), ResolutionSource::RouteForced)
        }
        None => resolve_personality_with_default(selector, default),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_identity_for_every_id() {
        for id in PersonalityId::ALL {
            assert_eq!(resolve_personality(Some(id.as_str())).id, id);
            assert_eq!(resolve_personality_id(Some(id)).id, id);
        }
    }

    #[test]
    fn test_missing_selector_resolves_default() {
        let profile = resolve_personality(None);
        assert_eq!(profile.id, DEFAULT_PERSONALITY);
        let (_, source) = resolve_personality_with_default(Some("   "), PersonalityId::Boost);
        assert_eq!(source, ResolutionSource::DefaultMissing);
    }

    #[test]
    fn test_unknown_selector_resolves_default() {
        let (profile, source) =
            resolve_personality_with_default(Some("unknown"), DEFAULT_PERSONALITY);
        assert_eq!(profile.id, DEFAULT_PERSONALITY);
        assert_eq!(source, ResolutionSource::DefaultUnknown);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let a = resolve_personality(Some("boost"));
        let b = resolve_personality(Some("boost"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_route_override_wins() {
        let (profile, source) =
            resolve_with_override(Some("anchor"), Some(PersonalityId::Glitch), DEFAULT_PERSONALITY);
        assert_eq!(profile.id, PersonalityId::Glitch);
        assert_eq!(source, ResolutionSource::RouteForced);

        let (profile, source) = resolve_with_override(Some("boost"), None, DEFAULT_PERSONALITY);
        assert_eq!(profile.id, PersonalityId::Boost);
        assert_eq!(source, ResolutionSource::Selected);
    }
}
