//! personality-governor command-line tool.
//!
//! Inspects the governance layers without calling any generator.
//!
//! # Usage
//!
//! ```bash
//! governor [--config governor.yaml] tokens <personality> <route>
//! governor [--config governor.yaml] prompt <personality> <archetype> <product> <audience>
//! echo '{"headline": ...}' | governor validate <personality> <archetype> [--voice anchor --location HeroEditor --mode marketing]
//! governor check-registry
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Tracing filter (default: "info,personality_governor=debug")

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use personality_governor::config::GovernanceConfig;
use personality_governor::copy::ContentArchetype;
use personality_governor::pipeline::{GenerationRequest, Governor};
use personality_governor::prompt::GenerationContext;
use personality_governor::validation::{registry_report, validate_generation};
use personality_governor::voice::{PageMode, RiskLevel, UserLevel, VoiceContext};

/// Inspect personality governance without calling a generator
#[derive(Debug, Parser)]
#[command(name = "governor")]
#[command(version)]
#[command(about = "Inspect personality governance layers without calling a generator")]
struct Cli {
    /// Governance config file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Resolve behavior tokens for a personality on a route
    Tokens { personality: String, route: String },
    /// Assemble the generation prompt
    Prompt {
        personality: String,
        archetype: ContentArchetype,
        product: String,
        audience: String,
    },
    /// Validate generated copy JSON read from stdin
    Validate {
        personality: String,
        archetype: ContentArchetype,
        /// Voice whose forbidden terms are enforced
        #[arg(long, requires = "location")]
        voice: Option<String>,
        /// Editor location the voice is bound for
        #[arg(long)]
        location: Option<String>,
        /// Page mode of the location
        #[arg(long, default_value = "marketing")]
        mode: PageMode,
    },
    /// Check the personality registry for contract and contamination gaps
    #[command(alias = "check_registry")]
    CheckRegistry,
}

fn request(personality: &str, route: &str, archetype: ContentArchetype) -> GenerationRequest {
    GenerationRequest {
        personality: Some(personality.to_string()),
        route: route.to_string(),
        archetype,
        voice: None,
        context: GenerationContext::default(),
    }
}

fn run(config: &GovernanceConfig, command: Command) -> anyhow::Result<ExitCode> {
    let governor = Governor::new(config);
    match command {
        Command::Tokens { personality, route } => {
            let plan = governor.plan(&request(&personality, &route, ContentArchetype::Hero))?;
            let out = json!({
                "personality": plan.personality.id,
                "source": plan.source,
                "route_context": plan.route_context,
                "behavior": plan.behavior,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Prompt {
            personality,
            archetype,
            product,
            audience,
        } => {
            let plan = governor.plan(&request(&personality, "/", archetype))?;
            let prompt = plan.prompt(&GenerationContext::new(product, audience));
            let out = json!({
                "cache_key": prompt.cache_key(),
                "prompt": prompt,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            personality,
            archetype,
            voice,
            location,
            mode,
        } => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read generated copy from stdin")?;

            let mut req = request(&personality, "/", archetype);
            req.voice = voice.map(|voice| VoiceContext {
                location: location.unwrap_or_default(),
                mode,
                voice,
                risk: RiskLevel::Low,
                user_level: UserLevel::default(),
            });
            let plan = governor.plan(&req)?;
            let (copy, validation) = validate_generation(
                &raw,
                plan.personality,
                &plan.ai_profile,
                &plan.contract,
                plan.voice.as_ref(),
            );
            let approved = governor.approves(&validation);
            let out = json!({
                "approved": approved,
                "copy": copy,
                "validation": validation,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(if approved {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::CheckRegistry => {
            let report = registry_report();
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.is_clean() {
                tracing::info!("Registry is consistent");
                Ok(ExitCode::SUCCESS)
            } else {
                tracing::error!("Registry has integrity gaps");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,personality_governor=debug")),
        )
        .init();

    let config = match cli.config {
        Some(path) => match GovernanceConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}", e);
                return ExitCode::from(2);
            }
        },
        None => GovernanceConfig::default(),
    };

    match run(&config, cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("governor").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tokens() {
        let cli = parse(&["tokens", "glitch", "/404"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(
            cli.command,
            Command::Tokens {
                personality: "glitch".into(),
                route: "/404".into()
            }
        );
    }

    #[test]
    fn test_parse_config_flag_and_archetype() {
        let cli = parse(&["--config", "g.yaml", "validate", "anchor", "error"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("g.yaml")));
        assert_eq!(
            cli.command,
            Command::Validate {
                personality: "anchor".into(),
                archetype: ContentArchetype::Error,
                voice: None,
                location: None,
                mode: PageMode::Marketing,
            }
        );
    }

    #[test]
    fn test_parse_config_after_subcommand() {
        let cli = parse(&["check-registry", "--config", "g.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("g.yaml")));
        assert_eq!(cli.command, Command::CheckRegistry);
        assert_eq!(parse(&["check_registry"]).unwrap().command, Command::CheckRegistry);
    }

    #[test]
    fn test_parse_validate_with_voice() {
        let cli = parse(&[
            "validate", "anchor", "hero", "--voice", "anchor", "--location", "HeroEditor",
            "--mode", "live_funnel",
        ])
        .unwrap();
        match cli.command {
            Command::Validate {
                voice,
                location,
                mode,
                ..
            } => {
                assert_eq!(voice.as_deref(), Some("anchor"));
                assert_eq!(location.as_deref(), Some("HeroEditor"));
                assert_eq!(mode, PageMode::LiveFunnel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(parse(&["validate", "anchor", "hero", "--voice", "anchor"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse(&["launch"]).is_err());
        assert!(parse(&["prompt", "boost", "banner", "x", "y"]).is_err());
    }
}
