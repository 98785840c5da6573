//! Batch ingest of report exports (PDF or pre-extracted text).

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::error::ReportError;
use crate::parser::parse_report;
use crate::store::save_report;
use crate::types::ReportType;

/// External utility used to flatten PDF exports to text.
pub const PDFTOTEXT: &str = "pdftotext";

/// Result for one input file. Each file succeeds or fails on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IngestOutcome {
    Saved {
        file: String,
        report_type: ReportType,
        identifier: String,
        output: PathBuf,
    },
    Failed {
        file: String,
        error: String,
    },
}

impl IngestOutcome {
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            IngestOutcome::Saved { file, .. } | IngestOutcome::Failed { file, .. } => file,
        }
    }

    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, IngestOutcome::Saved { .. })
    }
}

/// Runs `pdftotext <file> -` and returns its stdout.
///
/// # Errors
///
/// Returns [`ReportError::Extract`] when the utility is missing or exits
/// with a non-zero status.
pub fn extract_pdf_text(path: &Path) -> Result<String, ReportError> {
    let output = Command::new(PDFTOTEXT)
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| ReportError::Extract {
            file: path.display().to_string(),
            reason: format!("{PDFTOTEXT} could not be started: {e}"),
        })?;
    if !output.status.success() {
        return Err(ReportError::Extract {
            file: path.display().to_string(),
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Reads the text of one export: `.pdf` through [`extract_pdf_text`],
/// anything else as UTF-8 text.
///
/// # Errors
///
/// Returns [`ReportError::Extract`] or [`ReportError::Io`].
pub fn read_export_text(path: &Path) -> Result<String, ReportError> {
    if has_extension(path, "pdf") {
        extract_pdf_text(path)
    } else {
        std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Parses one export and saves it under `reports_dir`.
///
/// # Errors
///
/// Returns the first extraction, parse, or write error for this file.
pub fn ingest_file(path: &Path, reports_dir: &Path) -> Result<IngestOutcome, ReportError> {
    let text = read_export_text(path)?;
    let report = parse_report(&text)?;
    let output = save_report(reports_dir, &report)?;
    Ok(IngestOutcome::Saved {
        file: file_name(path),
        report_type: report.report_type(),
        identifier: report.identifier,
        output,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ingests every `.pdf` and `.txt` file in `input_dir`, in name order.
///
/// # Errors
///
/// Returns [`ReportError::Io`] only when `input_dir` cannot be listed;
/// per-file failures are recorded as [`IngestOutcome::Failed`].
pub fn ingest_directory(
    input_dir: &Path,
    reports_dir: &Path,
) -> Result<Vec<IngestOutcome>, ReportError> {
    let entries = std::fs::read_dir(input_dir).map_err(|e| ReportError::io(input_dir, e))?;
    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_file() && (has_extension(p, "pdf") || has_extension(p, "txt")))
        .collect();
    paths.sort();

    let outcomes: Vec<IngestOutcome> = paths
        .iter()
        .map(|path| {
            ingest_file(path, reports_dir).unwrap_or_else(|e| {
                tracing::warn!(file = %path.display(), error = %e, "report ingest failed");
                IngestOutcome::Failed {
                    file: file_name(path),
                    error: e.to_string(),
                }
            })
        })
        .collect();

    let saved = outcomes.iter().filter(|o| o.is_saved()).count();
    tracing::info!(
        saved,
        failed = outcomes.len() - saved,
        input = %input_dir.display(),
        "report ingest complete"
    );
    Ok(outcomes)
}
