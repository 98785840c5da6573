//! On-disk JSON store: `<root>/<report_type_dir>/<safe_identifier>.json`.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::types::{QualitativeReport, ReportType};

/// All stored reports, keyed by type then file stem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportIndex {
    reports: BTreeMap<ReportType, BTreeMap<String, QualitativeReport>>,
}

impl ReportIndex {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.values().all(BTreeMap::is_empty)
    }

    pub fn insert(&mut self, key: String, report: QualitativeReport) {
        self.reports
            .entry(report.report_type())
            .or_default()
            .insert(key, report);
    }

    #[must_use]
    pub fn get(&self, report_type: ReportType, key: &str) -> Option<&QualitativeReport> {
        self.reports.get(&report_type)?.get(key)
    }

    /// Reports of one type in key order.
    pub fn of_type(
        &self,
        report_type: ReportType,
    ) -> impl Iterator<Item = (&str, &QualitativeReport)> + '_ {
        self.reports
            .get(&report_type)
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, r)| (k.as_str(), r)))
    }

    /// Every report, grouped by type in [`ReportType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QualitativeReport)> + '_ {
        ReportType::ALL
            .into_iter()
            .flat_map(move |t| self.of_type(t))
    }

    /// Report count for every type, including zeros.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<ReportType, usize> {
        ReportType::ALL
            .into_iter()
            .map(|t| (t, self.reports.get(&t).map_or(0, BTreeMap::len)))
            .collect()
    }
}

/// File stem for an identifier: lower-cased, with anything other than word
/// characters and `-` replaced by `_`, and outer underscores trimmed.
#[must_use]
pub fn safe_file_stem(identifier: &str) -> String {
    let replaced: String = identifier
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
        .collect();
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Writes `report` as pretty JSON under `root`, replacing any earlier file
/// for the same identifier. The write goes to a temp file in the target
/// directory and is renamed into place, so readers never see a partial file.
///
/// Identifiers that differ only in case or punctuation share a file; the
/// later save wins and the replacement is logged.
///
/// # Errors
///
/// Returns [`ReportError::Io`] or [`ReportError::Json`] when the directory
/// cannot be created or the file cannot be written.
pub fn save_report(root: &Path, report: &QualitativeReport) -> Result<PathBuf, ReportError> {
    let dir = root.join(report.report_type().dir_name());
    std::fs::create_dir_all(&dir).map_err(|e| ReportError::io(&dir, e))?;
    let path = dir.join(format!("{}.json", safe_file_stem(&report.identifier)));
    if let Some(previous) = displaced_identifier(&path, &report.identifier) {
        tracing::warn!(
            path = %path.display(),
            previous = %previous,
            identifier = %report.identifier,
            "replacing a stored report saved under a different identifier"
        );
    }

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| ReportError::io(&dir, e))?;
    serde_json::to_writer_pretty(&mut tmp, report).map_err(|e| ReportError::json(&path, e))?;
    tmp.write_all(b"\n").map_err(|e| ReportError::io(&path, e))?;
    tmp.persist(&path)
        .map_err(|e| ReportError::io(&path, e.error))?;

    tracing::debug!(path = %path.display(), "saved report");
    Ok(path)
}

/// Identifier of the report already stored at `path`, when it differs from
/// `identifier`.
fn displaced_identifier(path: &Path, identifier: &str) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    read_report(path)
        .ok()
        .map(|existing| existing.identifier)
        .filter(|existing| existing != identifier)
}

/// Loads every stored report under `root`.
///
/// Missing type directories are treated as empty. Files whose name starts
/// with `_` are templates and are skipped; unreadable or invalid files are
/// skipped with a warning.
#[must_use]
pub fn load_index(root: &Path) -> ReportIndex {
    let mut index = ReportIndex::default();
    for report_type in ReportType::ALL {
        let dir = root.join(report_type.dir_name());
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| is_report_file(p))
            .collect();
        paths.sort();

        for path in paths {
            match read_report(&path) {
                Ok(report) if report.report_type() == report_type => {
                    let key = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    index.insert(key, report);
                }
                Ok(report) => {
                    tracing::warn!(
                        path = %path.display(),
                        found = %report.report_type(),
                        expected = %report_type,
                        "report stored under the wrong type directory; skipping"
                    );
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable report");
                }
            }
        }
    }
    tracing::info!(reports = index.iter().count(), root = %root.display(), "loaded report index");
    index
}

fn is_report_file(path: &Path) -> bool {
    let is_json = path.extension().is_some_and(|e| e == "json");
    let is_template = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('_'));
    is_json && !is_template
}

/// Reads one stored report.
///
/// # Errors
///
/// Returns [`ReportError::Io`] or [`ReportError::Json`].
pub fn read_report(path: &Path) -> Result<QualitativeReport, ReportError> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ReportError::json(path, e))
}
