mod analyze;
mod print;
mod reports;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use cuervo_analysis::Targets;
use cuervo_core::{AppConfig, BrandRegistry, Environment};
use tracing_subscriber::EnvFilter;

use crate::analyze::AnalyzeArgs;
use crate::reports::ReportsCommands;
use crate::session::SessionSettings;

#[derive(Debug, Parser)]
#[command(name = "cuervo-intel")]
#[command(about = "Tequila social intelligence: import, analyze, and report")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write blank canonical CSV templates
    Templates {
        #[arg(long, default_value = "templates")]
        output_dir: PathBuf,
    },
    /// Generate seeded demo data and analyze it
    Demo {
        /// Seed for the generator (defaults to `CUERVO_DEMO_SEED`)
        #[arg(long)]
        seed: Option<u64>,
        /// Also write the demo data as a canonical CSV folder
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a directory of vendor CSV exports into a canonical folder
    Import {
        #[arg(long)]
        source_dir: PathBuf,
        #[arg(long)]
        output_dir: PathBuf,
    },
    /// Load a data source, filter it, and print the analysis
    Analyze(AnalyzeArgs),
    /// Qualitative report ingestion and listing
    Reports {
        #[command(subcommand)]
        command: ReportsCommands,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = cuervo_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(
        env = %config.env,
        data_dir = %config.data_dir.display(),
        "configuration loaded"
    );

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Templates { output_dir }) => {
            let registry = load_registry(&config.brands_path, config.env)?;
            let written = cuervo_import::write_templates(&output_dir, &registry)
                .with_context(|| format!("failed to write templates to {}", output_dir.display()))?;
            for path in written {
                println!("wrote {}", path.display());
            }
        }
        Some(Commands::Demo {
            seed,
            output_dir,
            json,
        }) => {
            let settings = session_settings(&config)?;
            analyze::run_demo(
                seed.unwrap_or(config.demo_seed),
                output_dir.as_deref(),
                json,
                settings,
            )?;
        }
        Some(Commands::Import {
            source_dir,
            output_dir,
        }) => run_import(&source_dir, &output_dir, &config)?,
        Some(Commands::Analyze(args)) => {
            let settings = session_settings(&config)?;
            analyze::run_analyze(&args, &config, settings)?;
        }
        Some(Commands::Reports { command }) => match command {
            ReportsCommands::Ingest { input_dir } => {
                reports::run_reports_ingest(&input_dir, &config.reports_dir)?;
            }
            ReportsCommands::List => reports::run_reports_list(&config.reports_dir),
        },
        None => println!("cuervo-intel ready; run with --help for commands"),
    }

    Ok(())
}

/// Brand table from `path`. Outside production a missing file falls back to
/// the built-in table; production refuses to guess.
fn load_registry(path: &Path, env: Environment) -> anyhow::Result<BrandRegistry> {
    if path.exists() {
        BrandRegistry::load(path)
            .with_context(|| format!("failed to load brand table {}", path.display()))
    } else if env == Environment::Production {
        anyhow::bail!("brand table {} not found", path.display())
    } else {
        tracing::info!(
            path = %path.display(),
            env = %env,
            "brand table not found; using built-in table"
        );
        Ok(BrandRegistry::builtin()?)
    }
}

fn session_settings(config: &AppConfig) -> anyhow::Result<SessionSettings> {
    let targets = match &config.targets_path {
        Some(path) => Targets::load(path)
            .with_context(|| format!("failed to load targets {}", path.display()))?,
        None => Targets::default(),
    };
    Ok(SessionSettings {
        registry: load_registry(&config.brands_path, config.env)?,
        targets,
        focal_brand: config.focal_brand.clone(),
        reports_dir: config.reports_dir.clone(),
    })
}

/// Import vendor exports and write them out as a canonical folder.
fn run_import(source_dir: &Path, output_dir: &Path, config: &AppConfig) -> anyhow::Result<()> {
    let registry = load_registry(&config.brands_path, config.env)?;
    let import = cuervo_import::import_vendor_directory(source_dir, &registry)
        .with_context(|| format!("failed to import {}", source_dir.display()))?;
    let written = cuervo_import::write_canonical_folder(
        output_dir,
        &import.posts,
        &import.profiles,
        &registry,
    )
    .with_context(|| format!("failed to write {}", output_dir.display()))?;

    let mode = cuervo_import::DataMode::VendorImport {
        dir: source_dir.to_path_buf(),
    };
    print::print_import_summary(&mode, &import.summary);
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests;
