//! ServiceBox - type-safe service registry
//!
//! Command-line entry point: loads configuration, installs logging and
//! wires per-environment providers into a registry.

mod logging;
mod scenario;
mod services;
mod wiring;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info, warn};

use servicebox_config::{
    Config, ConfigLoader, ConfigValidator, Environment, Platform, ProfileConfig,
};
use servicebox_core::Registry;

use crate::services::{Notifier, PushNotifier};

/// ServiceBox CLI.
#[derive(Parser)]
#[command(name = "servicebox")]
#[command(about = "Type-safe service registry with per-environment wiring")]
#[command(version)]
struct Cli {
    /// Configuration file path (default: ~/.servicebox/config.toml)
    #[arg(short, long, env = "SERVICEBOX_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the register / lookup / replace walkthrough on a fresh registry
    Demo,

    /// Wire the providers for a profile and list the registered capabilities
    Wire {
        /// Override the configured environment
        #[arg(long, value_enum)]
        environment: Option<EnvironmentArg>,

        /// Override the configured platform
        #[arg(long, value_enum)]
        platform: Option<PlatformArg>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Check,
}

#[derive(Clone, Copy, ValueEnum)]
enum EnvironmentArg {
    Production,
    Test,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Production => Environment::Production,
            EnvironmentArg::Test => Environment::Test,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PlatformArg {
    Desktop,
    Mobile,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Desktop => Platform::Desktop,
            PlatformArg::Mobile => Platform::Mobile,
        }
    }
}

#[derive(Serialize)]
struct WireSummary {
    environment: String,
    platform: String,
    capabilities: Vec<&'static str>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(ConfigLoader::default_path);
    let config = ConfigLoader::load_or_default(&config_path)?;

    // `check` reports problems itself; everything else refuses to start on them.
    let warnings = match cli.command {
        Commands::Check => Vec::new(),
        _ => ConfigValidator::ensure_valid(&config)?.warnings,
    };

    logging::init_tracing(&config.logging)?;
    info!("ServiceBox v{}", env!("CARGO_PKG_VERSION"));
    for warning in &warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    match cli.command {
        Commands::Demo => run_demo(&config),
        Commands::Wire {
            environment,
            platform,
            json,
        } => {
            let profile = ProfileConfig {
                environment: environment.map(Into::into).unwrap_or(config.profile.environment),
                platform: platform.map(Into::into).unwrap_or(config.profile.platform),
            };
            run_wire(&config, profile, json)
        }
        Commands::Check => run_check(&config, &config_path),
    }
}

fn run_demo(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::with_policy(config.registry.duplicate_policy);
    let report = scenario::run(&registry)?;

    println!("first Logger:   {}", report.first_logger);
    match &report.missing_notifier {
        Some(err) => println!("Notifier:       {}", err),
        None => println!("Notifier:       present"),
    }
    println!("second Logger:  {}", report.second_logger);
    println!("same instance:  {}", report.replaced_in_place);
    Ok(())
}

fn run_wire(
    config: &Config,
    profile: ProfileConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = wiring::build_registry(profile, config.registry.duplicate_policy);

    let notifier = registry.get::<dyn Notifier>()?;
    notifier.notify("ServiceBox", "Providers wired");

    // Stand-in for the device sync: deliver whatever the push outbox holds.
    if registry.contains::<PushNotifier>() {
        let push = registry.get::<PushNotifier>()?;
        info!(pending = push.pending(), "Syncing push outbox");
        for message in push.drain() {
            info!(title = %message.title, body = %message.body, "Delivered push notification");
        }
    }

    let summary = WireSummary {
        environment: profile.environment.to_string(),
        platform: profile.platform.to_string(),
        capabilities: registry.capabilities().iter().map(|id| id.name()).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Profile: {} / {}", summary.environment, summary.platform);
        for name in &summary.capabilities {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn run_check(config: &Config, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        warn!("Config file {} not found, checked defaults", path.display());
    }

    let result = ConfigValidator::validate(config)?;
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for err in &result.errors {
        println!("error: {}: {}", err.path, err.message);
    }

    if !result.is_valid() {
        error!("Configuration has {} error(s)", result.errors.len());
        std::process::exit(1);
    }

    println!("Configuration OK");
    Ok(())
}
