//! `analyze` and `demo` command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use cuervo_analysis::PostFilter;
use cuervo_core::{AppConfig, Platform, PostType};
use cuervo_import::{write_canonical_folder, DataMode};

use crate::print;
use crate::session::{Session, SessionSettings};

/// How many High recommendations the demo command prints.
const DEMO_TOP_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Seeded synthetic data
    Demo,
    /// Raw vendor CSV exports
    Vendor,
    /// Canonical CSV folder
    Custom,
}

/// Arguments for `analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Data source to load
    #[arg(long, value_enum, default_value_t = ModeArg::Custom)]
    pub mode: ModeArg,

    /// Directory to read (defaults to `CUERVO_DATA_DIR`)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Restrict to these brands (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Restrict to these platforms (repeatable)
    #[arg(long = "platform", value_parser = parse_platform)]
    pub platforms: Vec<Platform>,

    /// Restrict to these post types, e.g. "Reel" or "Static Image" (repeatable)
    #[arg(long = "post-type", value_parser = parse_post_type)]
    pub post_types: Vec<PostType>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Brand to write competitive recommendations for
    #[arg(long)]
    pub focal: Option<String>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    #[must_use]
    pub fn filter(&self) -> PostFilter {
        PostFilter::default()
            .with_brands(self.brands.iter().cloned())
            .with_platforms(self.platforms.iter().copied())
            .with_post_types(self.post_types.iter().copied())
            .between(self.from, self.to)
    }

    #[must_use]
    pub fn data_mode(&self, config: &AppConfig) -> DataMode {
        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| config.data_dir.clone());
        match self.mode {
            ModeArg::Demo => DataMode::Demo {
                seed: config.demo_seed,
            },
            ModeArg::Vendor => DataMode::VendorImport { dir },
            ModeArg::Custom => DataMode::CustomFolder { dir },
        }
    }
}

pub(crate) fn parse_platform(raw: &str) -> Result<Platform, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("ig") {
        return Ok(Platform::Instagram);
    }
    if raw.eq_ignore_ascii_case("tt") || raw.eq_ignore_ascii_case("tik tok") {
        return Ok(Platform::TikTok);
    }
    Platform::from_label(raw).ok_or_else(|| format!("unknown platform '{raw}'"))
}

pub(crate) fn parse_post_type(raw: &str) -> Result<PostType, String> {
    PostType::from_label(raw).ok_or_else(|| {
        let known: Vec<&str> = PostType::ALL.iter().map(|t| t.label()).collect();
        format!("unknown post type '{raw}'; expected one of: {}", known.join(", "))
    })
}

/// Load a data source, apply the filter, and print the analysis.
///
/// # Errors
///
/// Returns an error only if JSON output cannot be serialized. An unusable
/// data source produces an empty analysis and a hint on stdout.
pub(crate) fn run_analyze(
    args: &AnalyzeArgs,
    config: &AppConfig,
    mut settings: SessionSettings,
) -> anyhow::Result<()> {
    if let Some(focal) = &args.focal {
        settings.focal_brand.clone_from(focal);
    }
    let session = Session::open(args.data_mode(config), settings);
    if let Some(error) = session.load_error() {
        println!("could not load data: {error}");
    }
    let result = session.analyze(&args.filter());

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("failed to serialize analysis")?
        );
        return Ok(());
    }

    print::print_import_summary(session.mode(), session.summary());
    print::print_report_counts(session.reports());
    if session.is_empty() {
        println!("no posts or profiles loaded; run `import` or `templates` first");
        return Ok(());
    }
    print::print_overview(&result);
    print::print_recommendations(&result.recommendations, None);
    Ok(())
}

/// Generate seeded demo data, optionally save it, and print the analysis.
///
/// # Errors
///
/// Returns an error if the canonical CSVs cannot be written or JSON output
/// cannot be serialized.
pub(crate) fn run_demo(
    seed: u64,
    output_dir: Option<&Path>,
    json: bool,
    settings: SessionSettings,
) -> anyhow::Result<()> {
    let session = Session::open(DataMode::Demo { seed }, settings);

    if let Some(dir) = output_dir {
        let written = write_canonical_folder(
            dir,
            session.posts(),
            session.profiles(),
            session.registry(),
        )
        .with_context(|| format!("failed to write demo data to {}", dir.display()))?;
        for path in &written {
            tracing::info!(path = %path.display(), "wrote demo file");
        }
    }

    let result = session.analyze(&PostFilter::default());
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("failed to serialize analysis")?
        );
        return Ok(());
    }

    println!(
        "demo data (seed {seed}): {} posts, {} profiles",
        session.posts().len(),
        session.profiles().len()
    );
    if let Some(dir) = output_dir {
        println!("canonical CSVs written to {}", dir.display());
    }
    print::print_overview(&result);
    print::print_recommendations(&result.recommendations, Some(DEMO_TOP_RECOMMENDATIONS));
    Ok(())
}
