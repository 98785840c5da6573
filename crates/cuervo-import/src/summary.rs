use std::collections::BTreeSet;

use cuervo_core::Platform;
use serde::Serialize;

/// A problem confined to one row or one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImportWarning {
    /// A malformed row was dropped. `row` is the 1-based line number in the file.
    RowSkipped {
        file: String,
        row: usize,
        reason: String,
    },
    /// A row's profile name matched no known brand and was dropped.
    UnresolvedBrand {
        file: String,
        row: usize,
        handle: String,
    },
    /// A file matched no known report shape and was skipped.
    UnrecognizedFormat { file: String, reason: String },
    /// A file could not be read at all.
    FileFailed { file: String, error: String },
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportWarning::RowSkipped { file, row, reason } => {
                write!(f, "{file}:{row}: row skipped: {reason}")
            }
            ImportWarning::UnresolvedBrand { file, row, handle } => {
                write!(f, "{file}:{row}: unknown brand handle '{handle}'")
            }
            ImportWarning::UnrecognizedFormat { file, reason } => {
                write!(f, "{file}: unrecognized format: {reason}")
            }
            ImportWarning::FileFailed { file, error } => write!(f, "{file}: {error}"),
        }
    }
}

/// Counts and warnings surfaced to the operator after an import.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    pub files_imported: Vec<String>,
    pub files_rejected: Vec<String>,
    pub posts: usize,
    pub profiles: usize,
    pub stories_excluded: usize,
    pub rows_skipped: usize,
    pub unresolved_handles: BTreeSet<String>,
    pub brands_found: BTreeSet<String>,
    pub platforms_found: BTreeSet<Platform>,
    pub warnings: Vec<ImportWarning>,
}

impl ImportSummary {
    /// Record a warning, update the matching counter, and log it.
    pub fn warn(&mut self, warning: ImportWarning) {
        match &warning {
            ImportWarning::RowSkipped { file, row, reason } => {
                self.rows_skipped += 1;
                tracing::debug!(file = %file, row, reason = %reason, "row skipped");
            }
            ImportWarning::UnresolvedBrand { file, row, handle } => {
                self.rows_skipped += 1;
                self.unresolved_handles.insert(handle.clone());
                tracing::debug!(file = %file, row, handle = %handle, "unresolved brand handle");
            }
            ImportWarning::UnrecognizedFormat { file, reason } => {
                self.files_rejected.push(file.clone());
                tracing::warn!(file = %file, reason = %reason, "skipping file with unrecognized format");
            }
            ImportWarning::FileFailed { file, error } => {
                self.files_rejected.push(file.clone());
                tracing::warn!(file = %file, error = %error, "skipping unreadable file");
            }
        }
        self.warnings.push(warning);
    }

    /// Number of warnings of every kind.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_counts_row_level_problems() {
        let mut summary = ImportSummary::default();
        summary.warn(ImportWarning::RowSkipped {
            file: "a.csv".to_string(),
            row: 3,
            reason: "bad date".to_string(),
        });
        summary.warn(ImportWarning::UnresolvedBrand {
            file: "a.csv".to_string(),
            row: 4,
            handle: "mystery".to_string(),
        });
        assert_eq!(summary.rows_skipped, 2);
        assert!(summary.unresolved_handles.contains("mystery"));
        assert!(summary.files_rejected.is_empty());
        assert_eq!(summary.warning_count(), 2);
    }

    #[test]
    fn warn_tracks_rejected_files() {
        let mut summary = ImportSummary::default();
        summary.warn(ImportWarning::UnrecognizedFormat {
            file: "notes.csv".to_string(),
            reason: "no known columns".to_string(),
        });
        assert_eq!(summary.files_rejected, vec!["notes.csv"]);
        assert_eq!(summary.rows_skipped, 0);
    }

    #[test]
    fn warning_display_names_file_and_row() {
        let w = ImportWarning::RowSkipped {
            file: "posts.csv".to_string(),
            row: 7,
            reason: "missing date".to_string(),
        };
        assert_eq!(w.to_string(), "posts.csv:7: row skipped: missing date");
    }
}
