//! Explicit session context handed to every command.
//!
//! A [`Session`] is opened once per run from a [`DataMode`]. It owns the
//! canonical dataset and the qualitative report index, hands out read-only
//! views, and recomputes the full analysis for each filter it is asked about.
//! Switching data source means opening a new session.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cuervo_analysis::{run_analysis, AnalysisOptions, AnalysisResult, Dataset, PostFilter, Targets};
use cuervo_core::{BrandProfile, BrandRegistry, Post};
use cuervo_import::{load_source, BenchmarkMetrics, DataMode, ImportSummary};
use cuervo_reports::{load_index, ReportIndex};

/// Inputs that stay fixed for the life of a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub registry: BrandRegistry,
    pub targets: Targets,
    pub focal_brand: String,
    pub reports_dir: PathBuf,
}

#[derive(Debug)]
pub struct Session {
    mode: DataMode,
    settings: SessionSettings,
    posts: Vec<Post>,
    profiles: Vec<BrandProfile>,
    benchmark: BTreeMap<String, BenchmarkMetrics>,
    summary: ImportSummary,
    reports: ReportIndex,
    load_error: Option<String>,
}

impl Session {
    /// Load `mode` and the report index under `settings.reports_dir`.
    ///
    /// A data source that cannot be used leaves the session empty; the error
    /// is logged and kept for [`Session::load_error`].
    #[must_use]
    pub fn open(mode: DataMode, settings: SessionSettings) -> Self {
        let reports = load_index(&settings.reports_dir);
        let (data, load_error) = match load_source(&mode, &settings.registry) {
            Ok(data) => (data, None),
            Err(e) => {
                tracing::warn!(mode = mode.label(), error = %e, "data source unusable; session is empty");
                (cuervo_import::LoadedData::default(), Some(e.to_string()))
            }
        };
        tracing::info!(
            mode = mode.label(),
            posts = data.posts.len(),
            profiles = data.profiles.len(),
            reports = reports.iter().count(),
            "session opened"
        );
        Self {
            mode,
            settings,
            posts: data.posts,
            profiles: data.profiles,
            benchmark: data.benchmark,
            summary: data.summary,
            reports,
            load_error,
        }
    }

    #[must_use]
    pub fn mode(&self) -> &DataMode {
        &self.mode
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn profiles(&self) -> &[BrandProfile] {
        &self.profiles
    }

    #[must_use]
    pub fn registry(&self) -> &BrandRegistry {
        &self.settings.registry
    }

    #[must_use]
    pub fn summary(&self) -> &ImportSummary {
        &self.summary
    }

    #[must_use]
    pub fn reports(&self) -> &ReportIndex {
        &self.reports
    }

    /// Why the data source could not be loaded, if it could not.
    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.profiles.is_empty()
    }

    /// Full analysis of the posts and profiles that pass `filter`.
    #[must_use]
    pub fn analyze(&self, filter: &PostFilter) -> AnalysisResult {
        run_analysis(
            Dataset {
                posts: &self.posts,
                profiles: &self.profiles,
                benchmark: &self.benchmark,
            },
            filter,
            &AnalysisOptions {
                registry: &self.settings.registry,
                targets: &self.settings.targets,
                focal_brand: &self.settings.focal_brand,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use cuervo_analysis::Frequency;
    use cuervo_core::Platform;

    use super::*;

    fn settings(reports_dir: PathBuf) -> SessionSettings {
        SessionSettings {
            registry: BrandRegistry::builtin().expect("builtin brand table parses"),
            targets: Targets::default(),
            focal_brand: "Jose Cuervo".to_string(),
            reports_dir,
        }
    }

    #[test]
    fn demo_session_has_data_and_analyzes_repeatably() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(DataMode::Demo { seed: 7 }, settings(dir.path().to_path_buf()));
        assert!(!session.is_empty());
        assert!(session.load_error().is_none());
        assert!(session.reports().is_empty());

        let filter = PostFilter::default().with_platforms([Platform::Instagram]);
        let first = session.analyze(&filter);
        let second = session.analyze(&filter);
        assert_eq!(first, second);
        assert_eq!(first.platforms, vec![Platform::Instagram]);
    }

    #[test]
    fn missing_folder_yields_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let mode = DataMode::CustomFolder {
            dir: dir.path().join("nope"),
        };
        let session = Session::open(mode, settings(dir.path().to_path_buf()));
        assert!(session.is_empty());
        assert!(session.load_error().is_some());

        let result = session.analyze(&PostFilter::default());
        assert_eq!(result.total_posts, 0);
        assert!(result.er_exclusions.is_empty());
        assert_eq!(
            result.frequency_for("Jose Cuervo", Platform::Instagram),
            &Frequency::NoData
        );
    }

    #[test]
    fn reports_are_loaded_from_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let text = "Patron\nInstagram Profile Analysis Presentation\n2026-01-15\n\nSnapshot\nFollowers: 1.2M\n";
        let report = cuervo_reports::parse_report(text).unwrap();
        cuervo_reports::save_report(dir.path(), &report).unwrap();

        let session = Session::open(DataMode::Demo { seed: 1 }, settings(dir.path().to_path_buf()));
        assert_eq!(session.reports().iter().count(), 1);
    }
}
