//! Voice binder: fail-closed binding of a voice to a location.

use serde::Serialize;

use super::registry::{VoiceDefinition, VoiceRegistry};
use super::{PageMode, RiskLevel, UserLevel, VoiceContext};

/// A voice cleared to generate at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundVoice {
    pub definition: &'static VoiceDefinition,
    pub location: String,
    pub mode: PageMode,
    /// Risk after escalation.
    pub effective_risk: RiskLevel,
    pub user_level: UserLevel,
    /// Rendered header handed to the prompt assembler.
    pub header: String,
}

/// Location rules that raise risk regardless of what the caller asked for.
struct EscalationRule {
    /// Case-insensitive substring of the location.
    location: &'static str,
    /// Modes the rule applies in; empty means every mode.
    modes: &'static [PageMode],
    floor: RiskLevel,
}

const ESCALATION_RULES: &[EscalationRule] = &[
    EscalationRule {
        location: "checkout",
        modes: &[],
        floor: RiskLevel::Critical,
    },
    EscalationRule {
        location: "pricing",
        modes: &[],
        floor: RiskLevel::Critical,
    },
    EscalationRule {
        location: "payment",
        modes: &[],
        floor: RiskLevel::Critical,
    },
    EscalationRule {
        location: "ctaeditor",
        modes: &[PageMode::LiveFunnel, PageMode::Checkout],
        floor: RiskLevel::High,
    },
];

/// Mode-wide floors.
const fn mode_floor(mode: PageMode) -> RiskLevel {
    match mode {
        PageMode::Checkout => RiskLevel::High,
        PageMode::LiveFunnel => RiskLevel::Medium,
        PageMode::Marketing
        | PageMode::Onboarding
        | PageMode::Dashboard
        | PageMode::Support
        | PageMode::Preview => RiskLevel::Low,
    }
}

/// Effective risk for a location.  Never lower than `requested`.
pub fn assess_risk(location: &str, mode: PageMode, requested: RiskLevel) -> RiskLevel {
    let loc = location.to_lowercase();
    let escalated = ESCALATION_RULES
        .iter()
        .filter(|r| loc.contains(r.location) && (r.modes.is_empty() || r.modes.contains(&mode)))
        .map(|r| r.floor)
        .fold(requested.max(mode_floor(mode)), RiskLevel::max);
    if escalated != requested {
        log::debug!(
            "Risk for {} in {} escalated from {} to {}",
            location,
            mode,
            requested,
            escalated
        );
    }
    escalated
}

/// Bind a voice, or return `None` when it may not run here.
///
/// `None` means no generation is permitted at this location.  It is never a
/// cue to fall back to another voice.
pub fn bind_voice(ctx: &VoiceContext) -> Option<BoundVoice> {
    let Some(definition) = VoiceRegistry::get(&ctx.voice) else {
        log::warn!("Voice binding denied: unknown voice {:?}", ctx.voice);
        return None;
    };

    if !definition.allows(ctx.mode) {
        log::warn!(
            "Voice binding denied: {} is not allowed in {} (location {})",
            definition.id,
            ctx.mode,
            ctx.location
        );
        return None;
    }

    let effective_risk = assess_risk(&ctx.location, ctx.mode, ctx.risk);
    if effective_risk > definition.max_risk {
        log::warn!(
            "Voice binding denied: {} handles at most {} risk, {} at {} is {}",
            definition.id,
            definition.max_risk,
            ctx.location,
            ctx.mode,
            effective_risk
        );
        return None;
    }

    Some(BoundVoice {
        definition,
        location: ctx.location.clone(),
        mode: ctx.mode,
        effective_risk,
        user_level: ctx.user_level,
        header: render_header(definition, effective_risk, ctx.user_level),
    })
}

fn render_header(def: &VoiceDefinition, risk: RiskLevel, level: UserLevel) -> String {
    let mut out = format!("Voice: {}\n{}\n", def.id, def.system);
    push_list(&mut out, "Constraints", &def.constraints);
    push_list(&mut out, "Principles", &def.principles);
    push_list(&mut out, "Never", &def.forbidden);
    out.push_str(&format!("Avoid words: {}\n", def.forbidden_terms.join(", ")));
    out.push_str(&format!("Reader: {}\n", level.guidance()));
    out.push_str(&format!("Risk: {}", risk));
    if risk >= RiskLevel::High {
        out.push_str(" (state only what the page can verify)");
    }
    out
}

fn push_list(out: &mut String, title: &str, items: &[&str]) {
    out.push_str(title);
    out.push_str(":\n");
    for item in items {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }
}

// ============================================================================
// Tests
// ============================================================================
