//! servload - Entry Point
//!
//! Inspect what the loader sees from a location on disk.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `servload list <service>` | Resolved provider paths for a service |
//! | `servload scan` | Installed packages and their declared services |

use anyhow::Context;
use clap::{Parser, Subcommand};
use servload::domain::ScanRequest;
use servload::infrastructure::bootstrap::{anchor_package_name, build_environment, default_options};
use servload::infrastructure::constants::CLI_MODULE_NAME;
use servload::infrastructure::logging::init_logging;
use servload::infrastructure::{AppConfig, CallerContext, ConfigLoader};
use servload::{LoaderTarget, ServiceLoader};
use std::path::PathBuf;

/// Command line interface for servload
#[derive(Parser, Debug)]
#[command(name = "servload")]
#[command(about = "Discover service providers declared in installed package manifests")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to scan from (defaults to the configured anchor)
    #[arg(short, long, global = true)]
    pub anchor: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the providers of a service
    List {
        /// Service name
        service: String,

        /// Owning package (defaults to the package enclosing the anchor)
        #[arg(short, long)]
        package: Option<String>,
    },

    /// List installed packages and the services they declare
    Scan,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;
    if let Some(anchor) = &cli.anchor {
        config.scan.anchor = Some(anchor.clone());
    }
    Ok(config)
}

fn list(config: &AppConfig, service: String, package: Option<String>) -> anyhow::Result<()> {
    let env = build_environment(config)?;

    // Without an explicit package the CLI speaks for the package it runs in.
    let _frame = match package {
        Some(_) => None,
        None => {
            let owner = anchor_package_name(&env)?
                .context("No package encloses the anchor; pass --package")?;
            Some(CallerContext::enter(CLI_MODULE_NAME, owner))
        }
    };

    let target = LoaderTarget {
        package_name: package,
        options: default_options(config),
    };
    let loader = ServiceLoader::new(env, service, target)?;
    let providers = loader.providers()?;

    for entry in providers.entries() {
        println!("{}\t{}", entry.path.display(), entry.provider.type_name());
    }
    Ok(())
}

fn scan(config: &AppConfig) -> anyhow::Result<()> {
    let env = build_environment(config)?;
    let packages = env.scanner().scan(&ScanRequest::new(env.anchor()))?;

    for package in packages {
        println!("{}\t{}", package.name, package.directory.display());
        if let Some(services) = &package.services {
            for (owner, service, declaration) in services.iter() {
                println!("  {owner}/{service}\t{}", declaration.path());
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::List { service, package } => list(&config, service, package),
        Command::Scan => scan(&config),
    }
}
