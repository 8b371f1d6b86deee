//! Governor: plans a governed generation and runs the corrective loop.
//!
//! ```text
//! GenerationRequest
//!   ↓  plan (pure)
//!   ├─ route context + selector → personality (route force, fallback)
//!   ├─ behavior tokens (sound ANDed with config, motion budget; 0 ms = motion off)
//!   ├─ copy contract for the archetype, AI profile
//!   └─ voice binding (denied → VoiceNotPermitted, generator never called)
//!   ↓  generate (async)
//! attempt 1..=max_attempts:
//!   assemble_prompt → generator → validate_generation (with the bound voice)
//!   approved? return : feed violations into the next prompt's context
//!   ↓
//! last attempt still failing → approved = false, needs_review = true
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::generator::ContentGenerator;
use crate::ai_profile::{resolve_ai_profile, AIProfile};
use crate::behavior::{
    get_personality_context, resolve_behavior, resolve_motion_tokens_with_budget, BehaviorTokens,
    PersonalityContext,
};
use crate::config::GovernanceConfig;
use crate::copy::{resolve_copy_contract, ContentArchetype, CopyContract};
use crate::error::{GovernanceError, Result};
use crate::personality::{resolve_with_override, PersonalityId, PersonalityProfile, ResolutionSource};
use crate::prompt::{assemble_prompt, GenerationContext, PromptConfig};
use crate::validation::{validate_generation, GeneratedCopy, ValidationResult, Violation};
use crate::voice::{assess_risk, bind_voice, BoundVoice, VoiceContext};

/// One governed generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// External personality selector; may be missing or unknown.
    #[serde(default)]
    pub personality: Option<String>,
    pub route: String,
    pub archetype: ContentArchetype,
    /// Editor location to bind a voice for.  `None` skips voice gating.
    #[serde(default)]
    pub voice: Option<VoiceContext>,
    pub context: GenerationContext,
}

/// Everything resolved for a request before any generation happens.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub personality: &'static PersonalityProfile,
    pub source: ResolutionSource,
    pub route_context: PersonalityContext,
    pub behavior: BehaviorTokens,
    pub contract: CopyContract,
    pub ai_profile: AIProfile,
    pub voice: Option<BoundVoice>,
}

impl GenerationPlan {
    /// Prompt for a given context.
    pub fn prompt(&self, ctx: &GenerationContext) -> PromptConfig {
        assemble_prompt(&self.ai_profile, &self.contract, self.voice.as_ref(), ctx)
    }
}

/// Record of one generation attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AttemptRecord {
    pub attempt: u32,
    pub cache_key: String,
    pub started_at: DateTime<Utc>,
    pub approved: bool,
    pub violations: Vec<Violation>,
}

/// Result of [`Governor::generate`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub request_id: Uuid,
    pub personality: PersonalityId,
    pub approved: bool,
    /// Set when every attempt failed; the copy must go to a person.
    pub needs_review: bool,
    pub copy: Option<GeneratedCopy>,
    pub raw_output: String,
    pub validation: ValidationResult,
    pub attempts: Vec<AttemptRecord>,
}

/// Combine a selector with a route.  Only a route's `force_brand_mode`
/// can replace the selector.
pub fn effective_personality(
    selector: Option<&str>,
    route: &str,
    config: &GovernanceConfig,
) -> (&'static PersonalityProfile, ResolutionSource, PersonalityContext) {
    let route_context = get_personality_context(route);
    let (profile, source) = resolve_with_override(
        selector,
        route_context.force_brand_mode,
        config.default_personality,
    );
    (profile, source, route_context)
}

/// Runs governed generations under one configuration.
pub struct Governor<'a> {
    config: &'a GovernanceConfig,
}

impl<'a> Governor<'a> {
    pub fn new(config: &'a GovernanceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GovernanceConfig {
        self.config
    }

    /// Resolve every governance layer for a request.
    ///
    /// Fails only when a requested voice may not run at its location.
    pub fn plan(&self, request: &GenerationRequest) -> Result<GenerationPlan> {
        let (profile, source, mut route_context) =
            effective_personality(request.personality.as_deref(), &request.route, self.config);
        route_context.sound_allowed &= self.config.sound_enabled;
        if self.config.motion_budget_ms == Some(0) {
            route_context.motion_allowed = false;
        }

        let mut behavior = resolve_behavior(profile, &route_context);
        if let Some(budget) = self.config.motion_budget_ms {
            behavior.motion =
                resolve_motion_tokens_with_budget(profile, route_context.motion_allowed, budget);
        }

        let contract = resolve_copy_contract(request.archetype, &behavior.hero, profile);
        let ai_profile = resolve_ai_profile(profile);

        let voice = match request.voice {
            Some(ref ctx) => match bind_voice(ctx) {
                Some(bound) => Some(bound),
                None => {
                    return Err(GovernanceError::VoiceNotPermitted {
                        voice: ctx.voice.clone(),
                        mode: ctx.mode,
                        risk: assess_risk(&ctx.location, ctx.mode, ctx.risk),
                        location: ctx.location.clone(),
                    })
                }
            },
            None => None,
        };

        Ok(GenerationPlan {
            personality: profile,
            source,
            route_context,
            behavior,
            contract,
            ai_profile,
            voice,
        })
    }

    /// Whether a validation result may be approved under this config.
    pub fn approves(&self, result: &ValidationResult) -> bool {
        result.is_valid && !(self.config.warnings_block && result.warnings().next().is_some())
    }

    /// Plan, generate, validate, and retry with corrective context.
    pub async fn generate<G>(
        &self,
        request: &GenerationRequest,
        generator: &G,
    ) -> Result<GenerationOutcome>
    where
        G: ContentGenerator + ?Sized,
    {
        self.config.validate()?;
        let request_id = Uuid::new_v4();
        let plan = self.plan(request)?;
        log::info!(
            "[{}] generating {} copy as {} ({:?})",
            request_id,
            request.archetype,
            plan.personality.id,
            plan.source
        );

        let mut ctx = request.context.clone();
        let mut attempts = Vec::new();
        let mut last = None;

        for attempt in 1..=self.config.max_attempts {
            let prompt = plan.prompt(&ctx);
            let started_at = Utc::now();
            let raw = generator.generate(&prompt).await?;
            let (copy, validation) =
                validate_generation(
                    &raw,
                    plan.personality,
                    &plan.ai_profile,
                    &plan.contract,
                    plan.voice.as_ref(),
                );
            let approved = self.approves(&validation);

            log::debug!(
                "[{}] attempt {}/{}: {} error(s), {} warning(s)",
                request_id,
                attempt,
                self.config.max_attempts,
                validation.errors().count(),
                validation.warnings().count()
            );

            attempts.push(AttemptRecord {
                attempt,
                cache_key: prompt.cache_key(),
                started_at,
                approved,
                violations: validation.violations.clone(),
            });

            if approved {
                log::info!("[{}] approved on attempt {}", request_id, attempt);
                return Ok(GenerationOutcome {
                    request_id,
                    personality: plan.personality.id,
                    approved: true,
                    needs_review: false,
                    copy,
                    raw_output: raw,
                    validation,
                    attempts,
                });
            }

            ctx.prior_violations = validation.correction_notes();
            last = Some((raw, copy, validation));
        }

        let (raw_output, copy, validation) = last.ok_or_else(|| GovernanceError::Config {
            message: "max_attempts must be at least 1".to_string(),
        })?;
        log::warn!(
            "[{}] no approved copy after {} attempt(s); flagging for review",
            request_id,
            self.config.max_attempts
        );
        Ok(GenerationOutcome {
            request_id,
            personality: plan.personality.id,
            approved: false,
            needs_review: true,
            copy,
            raw_output,
            validation,
            attempts,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{AnimationIntensity, MotionTokens};
    use crate::prompt::SECTION_CONTEXT;
    use crate::validation::ViolationKind;
    use crate::voice::{PageMode, RiskLevel, UserLevel};
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    /// Returns scripted responses in order and records every prompt.
    struct Scripted {
        responses: Vec<String>,
        prompts: Mutex<Vec<PromptConfig>>,
    }

    impl Scripted {
        fn new(responses: &[&str]) -> Self {
            Self {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        async fn calls(&self) -> usize {
            self.prompts.lock().await.len()
        }
    }

    #[async_trait]
    impl ContentGenerator for Scripted {
        async fn generate(&self, prompt: &PromptConfig) -> anyhow::Result<String> {
            let mut prompts = self.prompts.lock().await;
            let i = prompts.len().min(self.responses.len() - 1);
            prompts.push(prompt.clone());
            Ok(self.responses[i].clone())
        }
    }

    struct Failing;

    #[async_trait]
    impl ContentGenerator for Failing {
        async fn generate(&self, _prompt: &PromptConfig) -> anyhow::Result<String> {
            anyhow::bail!("provider unavailable")
        }
    }

    const GOOD: &str = r#"{"headline": "See what your funnel costs", "subcopy": "Clear numbers on every step.", "cta": "See the numbers"}"#;
    const BAD: &str = r#"{"headline": "Guaranteed results for every single funnel you will ever build", "subcopy": "Trust us.", "cta": "Buy"}"#;

    fn request(personality: &str, route: &str) -> GenerationRequest {
        GenerationRequest {
            personality: Some(personality.to_string()),
            route: route.to_string(),
            archetype: ContentArchetype::Hero,
            voice: None,
            context: GenerationContext::new("Funnelkit", "solo founders"),
        }
    }

    #[test]
    fn test_only_404_forces_personality() {
        let config = GovernanceConfig::default();
        let (p, source, _) = effective_personality(Some("boost"), "/404", &config);
        assert_eq!(p.id, PersonalityId::Glitch);
        assert_eq!(source, ResolutionSource::RouteForced);

        for route in ["/", "/pricing", "/dashboard/billing", "/nowhere"] {
            let (p, source, _) = effective_personality(Some("boost"), route, &config);
            assert_eq!(p.id, PersonalityId::Boost, "{}", route);
            assert_eq!(source, ResolutionSource::Selected);
        }
    }

    #[test]
    fn test_unknown_selector_uses_configured_default() {
        let config = GovernanceConfig {
            default_personality: PersonalityId::Boost,
            ..Default::default()
        };
        let (p, source, _) = effective_personality(Some("sparkle"), "/", &config);
        assert_eq!(p.id, PersonalityId::Boost);
        assert_eq!(source, ResolutionSource::DefaultUnknown);
    }

    #[test]
    fn test_plan_applies_sound_switch_and_motion_budget() {
        let config = GovernanceConfig {
            sound_enabled: false,
            motion_budget_ms: Some(100),
            ..Default::default()
        };
        let plan = Governor::new(&config).plan(&request("boost", "/onboarding")).unwrap();
        assert!(!plan.behavior.sound.enabled);
        assert!(!plan.route_context.sound_allowed);
        assert!(plan.behavior.motion.duration_ms <= 100);
        assert_ne!(plan.behavior.motion, MotionTokens::none());
    }

    #[test]
    fn test_zero_motion_budget_turns_motion_off() {
        let config = GovernanceConfig {
            motion_budget_ms: Some(0),
            ..Default::default()
        };
        let plan = Governor::new(&config).plan(&request("glitch", "/")).unwrap();
        assert!(!plan.route_context.motion_allowed);
        assert_eq!(plan.behavior.motion, MotionTokens::none());
        assert!(!plan.behavior.hero.allow_glitch);
        assert_eq!(plan.behavior.hero.animation_intensity, AnimationIntensity::None);

        let unbudgeted = Governor::new(&GovernanceConfig::default())
            .plan(&request("glitch", "/"))
            .unwrap();
        assert!(unbudgeted.behavior.hero.allow_glitch);
        assert_ne!(unbudgeted.behavior.hero.animation_intensity, AnimationIntensity::None);
    }

    #[test]
    fn test_plan_denies_voice_outside_allowed_mode() {
        let config = GovernanceConfig::default();
        let mut req = request("glitch", "/f/launch");
        req.voice = Some(VoiceContext {
            location: "CTAEditor".to_string(),
            mode: PageMode::LiveFunnel,
            voice: "glitch".to_string(),
            risk: RiskLevel::Low,
            user_level: UserLevel::Beginner,
        });
        let err = Governor::new(&config).plan(&req).unwrap_err();
        match err {
            GovernanceError::VoiceNotPermitted { voice, mode, risk, .. } => {
                assert_eq!(voice, "glitch");
                assert_eq!(mode, PageMode::LiveFunnel);
                assert_eq!(risk, RiskLevel::High);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_denied_voice_never_calls_generator() {
        let config = GovernanceConfig::default();
        let mut req = request("glitch", "/checkout");
        req.voice = Some(VoiceContext {
            location: "CheckoutEditor".to_string(),
            mode: PageMode::Checkout,
            voice: "glitch".to_string(),
            risk: RiskLevel::Low,
            user_level: UserLevel::Intermediate,
        });
        let generator = Scripted::new(&[GOOD]);
        let result = Governor::new(&config).generate(&req, &generator).await;
        assert!(matches!(result, Err(GovernanceError::VoiceNotPermitted { .. })));
        assert_eq!(generator.calls().await, 0);
    }

    #[tokio::test]
    async fn test_first_valid_attempt_is_approved() {
        let config = GovernanceConfig::default();
        let generator = Scripted::new(&[GOOD]);
        let outcome = Governor::new(&config)
            .generate(&request("anchor", "/"), &generator)
            .await
            .unwrap();
        assert!(outcome.approved);
        assert!(!outcome.needs_review);
        assert_eq!(outcome.attempts.len(), 1);
        assert_eq!(outcome.copy.unwrap().cta, "See the numbers");
    }

    #[tokio::test]
    async fn test_corrective_retry_carries_violations() {
        let config = GovernanceConfig::default();
        let generator = Scripted::new(&[BAD, GOOD]);
        let outcome = Governor::new(&config)
            .generate(&request("anchor", "/"), &generator)
            .await
            .unwrap();
        assert!(outcome.approved);
        assert_eq!(outcome.attempts.len(), 2);
        assert!(!outcome.attempts[0].approved);
        assert_ne!(outcome.attempts[0].cache_key, outcome.attempts[1].cache_key);

        let prompts = generator.prompts.lock().await;
        let retry = &prompts[1].system;
        let context_at = retry.find(SECTION_CONTEXT).unwrap();
        assert!(retry[context_at..].contains("The previous draft was rejected"));
        assert!(!prompts[0].system.contains("The previous draft was rejected"));
    }

    #[tokio::test]
    async fn test_bound_voice_terms_trigger_retry() {
        let config = GovernanceConfig::default();
        let mut req = request("anchor", "/");
        req.voice = Some(VoiceContext {
            location: "HeroEditor".to_string(),
            mode: PageMode::Marketing,
            voice: "anchor".to_string(),
            risk: RiskLevel::Low,
            user_level: UserLevel::Intermediate,
        });
        let off_voice = r#"{"headline": "The best view of your funnel", "subcopy": "Clear numbers on every step.", "cta": "See the numbers"}"#;
        let generator = Scripted::new(&[off_voice, GOOD]);
        let outcome = Governor::new(&config).generate(&req, &generator).await.unwrap();

        assert!(outcome.approved);
        assert_eq!(outcome.attempts.len(), 2);
        assert!(outcome.attempts[0]
            .violations
            .iter()
            .any(|v| v.kind == ViolationKind::WordChoice && v.message.contains("\"best\"")));
    }

    #[tokio::test]
    async fn test_exhausted_attempts_need_review() {
        let config = GovernanceConfig {
            max_attempts: 2,
            ..Default::default()
        };
        let generator = Scripted::new(&[BAD]);
        let outcome = Governor::new(&config)
            .generate(&request("anchor", "/"), &generator)
            .await
            .unwrap();
        assert!(!outcome.approved);
        assert!(outcome.needs_review);
        assert_eq!(outcome.attempts.len(), 2);
        assert_eq!(generator.calls().await, 2);
        assert!(outcome
            .validation
            .errors()
            .any(|v| v.kind == ViolationKind::ForbiddenClaim));
    }

    #[tokio::test]
    async fn test_warnings_block_when_configured() {
        let shouting = r#"{"headline": "See what your funnel COSTS today", "subcopy": "Clear numbers.", "cta": "See the numbers"}"#;
        let lenient = GovernanceConfig::default();
        let outcome = Governor::new(&lenient)
            .generate(&request("anchor", "/"), &Scripted::new(&[shouting]))
            .await
            .unwrap();
        assert!(outcome.approved);

        let strict = GovernanceConfig {
            warnings_block: true,
            max_attempts: 1,
            ..Default::default()
        };
        let outcome = Governor::new(&strict)
            .generate(&request("anchor", "/"), &Scripted::new(&[shouting]))
            .await
            .unwrap();
        assert!(!outcome.approved);
        assert!(outcome.needs_review);
    }

    #[tokio::test]
    async fn test_generator_failure_is_generation_error() {
        let config = GovernanceConfig::default();
        let err = Governor::new(&config)
            .generate(&request("boost", "/"), &Failing)
            .await
            .unwrap_err();
        assert!(matches!(err, GovernanceError::Generation(_)));
    }

    #[tokio::test]
    async fn test_zero_attempts_rejected_before_generation() {
        let config = GovernanceConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let generator = Scripted::new(&[GOOD]);
        let err = Governor::new(&config)
            .generate(&request("boost", "/"), &generator)
            .await
            .unwrap_err();
        assert!(matches!(err, GovernanceError::Config { .. }));
        assert_eq!(generator.calls().await, 0);
    }
}
