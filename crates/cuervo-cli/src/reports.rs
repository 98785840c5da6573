//! Qualitative report command handlers for the CLI.

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use cuervo_reports::{ingest_directory, load_index, IngestOutcome, ReportType};

/// Sub-commands available under `reports`.
#[derive(Debug, Subcommand)]
pub enum ReportsCommands {
    /// Parse a directory of PDF or text exports into the report store
    Ingest {
        /// Directory holding `.pdf` and `.txt` exports
        #[arg(long)]
        input_dir: std::path::PathBuf,
    },
    /// List stored reports by type
    List,
}

/// Ingest every export in `input_dir` and print one line per file.
///
/// # Errors
///
/// Returns an error if `input_dir` cannot be read. Individual files that fail
/// are listed and do not stop the run.
pub(crate) fn run_reports_ingest(input_dir: &Path, reports_dir: &Path) -> anyhow::Result<()> {
    let outcomes = ingest_directory(input_dir, reports_dir)
        .with_context(|| format!("failed to ingest {}", input_dir.display()))?;

    if outcomes.is_empty() {
        println!("no .pdf or .txt files found in {}", input_dir.display());
        return Ok(());
    }

    for outcome in &outcomes {
        match outcome {
            IngestOutcome::Saved {
                file,
                report_type,
                identifier,
                ..
            } => println!("ok    {file}: {} '{identifier}'", report_type.label()),
            IngestOutcome::Failed { file, error } => println!("FAIL  {file}: {error}"),
        }
    }
    let saved = outcomes.iter().filter(|o| o.is_saved()).count();
    println!(
        "{saved} of {} file(s) saved to {}",
        outcomes.len(),
        reports_dir.display()
    );
    Ok(())
}

/// Print the stored report keys grouped by type.
pub(crate) fn run_reports_list(reports_dir: &Path) {
    let index = load_index(reports_dir);
    if index.is_empty() {
        println!(
            "no reports stored in {}; run `reports ingest` first",
            reports_dir.display()
        );
        return;
    }
    for report_type in ReportType::ALL {
        let keys: Vec<&str> = index.of_type(report_type).map(|(key, _)| key).collect();
        if keys.is_empty() {
            continue;
        }
        println!("{} ({})", report_type.label(), keys.len());
        for key in keys {
            println!("  {key}");
        }
    }
}
