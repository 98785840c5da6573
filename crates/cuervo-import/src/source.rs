//! Data-source selection.
//!
//! [`load_source`] turns a [`DataMode`] into canonical posts, profiles and an
//! [`ImportSummary`], dispatching to the demo generator, the vendor importer
//! or the canonical folder reader. Nothing under the source directory is
//! written.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cuervo_core::{BrandProfile, BrandRegistry, Post};

use crate::benchmark::BenchmarkMetrics;
use crate::canonical::read_canonical_folder;
use crate::demo::generate_demo;
use crate::error::ImportError;
use crate::summary::ImportSummary;
use crate::vendor::import_vendor_directory;

/// Where a session's posts and profiles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataMode {
    /// Seeded synthetic data.
    Demo { seed: u64 },
    /// A directory of raw vendor CSV exports.
    VendorImport { dir: PathBuf },
    /// A canonical CSV folder maintained by hand.
    CustomFolder { dir: PathBuf },
}

impl DataMode {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DataMode::Demo { .. } => "demo",
            DataMode::VendorImport { .. } => "vendor",
            DataMode::CustomFolder { .. } => "custom",
        }
    }
}

/// Canonical data produced by a loader.
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub posts: Vec<Post>,
    pub profiles: Vec<BrandProfile>,
    pub benchmark: BTreeMap<String, BenchmarkMetrics>,
    pub summary: ImportSummary,
}

/// Load posts and profiles for `mode`. Source files are only read.
///
/// # Errors
///
/// Returns [`ImportError::DataSource`] when a vendor or custom directory is
/// missing, empty, or lacks its required files. Demo mode cannot fail.
pub fn load_source(mode: &DataMode, registry: &BrandRegistry) -> Result<LoadedData, ImportError> {
    tracing::info!(mode = mode.label(), "loading data source");
    match mode {
        DataMode::Demo { seed } => {
            let (posts, profiles) = generate_demo(*seed, registry);
            let summary = ImportSummary {
                posts: posts.len(),
                profiles: profiles.len(),
                brands_found: posts.iter().map(|p| p.brand.clone()).collect(),
                platforms_found: posts.iter().map(|p| p.platform).collect(),
                ..ImportSummary::default()
            };
            Ok(LoadedData {
                posts,
                profiles,
                benchmark: BTreeMap::new(),
                summary,
            })
        }
        DataMode::VendorImport { dir } => {
            let import = import_vendor_directory(dir, registry)?;
            Ok(LoadedData {
                posts: import.posts,
                profiles: import.profiles,
                benchmark: import.benchmark,
                summary: import.summary,
            })
        }
        DataMode::CustomFolder { dir } => {
            let (posts, profiles, summary) = read_canonical_folder(dir, registry)?;
            Ok(LoadedData {
                posts,
                profiles,
                benchmark: BTreeMap::new(),
                summary,
            })
        }
    }
}
