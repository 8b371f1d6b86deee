//! Route context: path prefix → intensity gates.
//!
//! Routes may only modulate intensity.  The `/404` page is the single route
//! allowed to force a personality: a broken page is where Glitch lives.

use serde::Serialize;

use super::ContextWeight;
use crate::personality::PersonalityId;

/// Intensity gates for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalityContext {
    pub visual_weight: ContextWeight,
    pub motion_allowed: bool,
    pub sound_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_brand_mode: Option<PersonalityId>,
}

impl PersonalityContext {
    /// Lowest intensity that still renders a personality.  Used for
    /// unmatched routes.
    pub const fn conservative() -> Self {
        Self {
            visual_weight: ContextWeight::Low,
            motion_allowed: false,
            sound_allowed: false,
            force_brand_mode: None,
        }
    }

    /// Everything on.
    pub const fn full() -> Self {
        Self {
            visual_weight: ContextWeight::High,
            motion_allowed: true,
            sound_allowed: true,
            force_brand_mode: None,
        }
    }

    const fn gated(visual_weight: ContextWeight, motion_allowed: bool, sound_allowed: bool) -> Self {
        Self {
            visual_weight,
            motion_allowed,
            sound_allowed,
            force_brand_mode: None,
        }
    }
}

struct RouteRule {
    prefix: &'static str,
    /// Match only the exact path, not its children.
    exact: bool,
    context: PersonalityContext,
}

const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        prefix: "/",
        exact: true,
        context: PersonalityContext::full(),
    },
    RouteRule {
        prefix: "/404",
        exact: false,
        context: PersonalityContext {
            visual_weight: ContextWeight::High,
            motion_allowed: true,
            sound_allowed: true,
            force_brand_mode: Some(PersonalityId::Glitch),
        },
    },
    RouteRule {
        prefix: "/pricing",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Medium, true, false),
    },
    RouteRule {
        prefix: "/onboarding",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Medium, true, true),
    },
    RouteRule {
        prefix: "/dashboard",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Medium, true, false),
    },
    RouteRule {
        prefix: "/dashboard/billing",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Low, false, false),
    },
    RouteRule {
        prefix: "/editor",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Medium, true, false),
    },
    RouteRule {
        prefix: "/f",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Medium, true, false),
    },
    RouteRule {
        prefix: "/checkout",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::Low, false, false),
    },
    RouteRule {
        prefix: "/legal",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::None, false, false),
    },
    RouteRule {
        prefix: "/privacy",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::None, false, false),
    },
    RouteRule {
        prefix: "/terms",
        exact: false,
        context: PersonalityContext::gated(ContextWeight::None, false, false),
    },
];

/// Map a route to its intensity gates using longest-prefix matching on
/// path-segment boundaries.  Unmatched routes get
/// [`PersonalityContext::conservative`].
pub fn get_personality_context(route: &str) -> PersonalityContext {
    let path = normalize_route(route);

    ROUTE_RULES
        .iter()
        .filter(|rule| route_matches(rule, &path))
        .max_by_key(|rule| rule.prefix.len())
        .map(|rule| rule.context)
        .unwrap_or_else(|| {
            log::debug!("No route rule for {:?}; using conservative context", path);
            PersonalityContext::conservative()
        })
}

fn route_matches(rule: &RouteRule, path: &str) -> bool {
    if rule.exact {
        return path == rule.prefix;
    }
    path == rule.prefix
        || path
            .strip_prefix(rule.prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Strip query/fragment, force a leading slash, drop trailing slashes.
fn normalize_route(route: &str) -> String {
    let path = route
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_route_forces_personality() {
        let forcing: Vec<&str> = ROUTE_RULES
            .iter()
            .filter(|r| r.context.force_brand_mode.is_some())
            .map(|r| r.prefix)
            .collect();
        assert_eq!(forcing, vec!["/404"]);
    }

    #[test]
    fn test_not_found_forces_glitch() {
        let ctx = get_personality_context("/404");
        assert_eq!(ctx.force_brand_mode, Some(PersonalityId::Glitch));
    }

    #[test]
    fn test_longest_prefix_wins() {
        let billing = get_personality_context("/dashboard/billing/invoices");
        assert_eq!(billing.visual_weight, ContextWeight::Low);
        assert!(!billing.motion_allowed);

        let dash = get_personality_context("/dashboard/funnels");
        assert_eq!(dash.visual_weight, ContextWeight::Medium);
        assert!(dash.motion_allowed);
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        // "/fancy" must not match the "/f" funnel rule
        assert_eq!(get_personality_context("/fancy"), PersonalityContext::conservative());
        assert_eq!(
            get_personality_context("/f/summer-sale").visual_weight,
            ContextWeight::Medium
        );
    }

    #[test]
    fn test_root_is_exact_match_only() {
        assert_eq!(get_personality_context("/"), PersonalityContext::full());
        assert_eq!(get_personality_context(""), PersonalityContext::full());
        assert_eq!(
            get_personality_context("/somewhere-new"),
            PersonalityContext::conservative()
        );
    }

    #[test]
    fn test_legal_pages_are_flat_and_silent() {
        for route in ["/legal", "/privacy/", "/terms?lang=en"] {
            let ctx = get_personality_context(route);
            assert_eq!(ctx.visual_weight, ContextWeight::None);
            assert!(!ctx.motion_allowed);
            assert!(!ctx.sound_allowed);
        }
    }

    #[test]
    fn test_checkout_has_no_motion_or_sound() {
        let ctx = get_personality_context("/checkout/step-2#card");
        assert!(!ctx.motion_allowed);
        assert!(!ctx.sound_allowed);
        assert_eq!(ctx.force_brand_mode, None);
    }

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("Dashboard/"), "/dashboard");
        assert_eq!(normalize_route("/a/b?x=1"), "/a/b");
        assert_eq!(normalize_route("///"), "/");
    }
}
