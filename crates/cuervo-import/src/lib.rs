//! Import and normalization pipeline.
//!
//! Turns vendor CSV exports, a hand-maintained canonical CSV folder, or a
//! seeded synthetic generator into canonical [`cuervo_core::Post`] and
//! [`cuervo_core::BrandProfile`] collections. Failures are scoped to one row
//! or one file and collected in an [`ImportSummary`]; a batch never aborts
//! because of a single bad input.

pub mod benchmark;
pub mod canonical;
pub mod columns;
pub mod demo;
pub mod error;
pub mod numbers;
pub mod source;
pub mod summary;
pub mod vendor;

pub use benchmark::{read_benchmark, BenchmarkMetrics};
pub use canonical::{
    read_canonical_folder, read_posts, read_profiles, write_canonical_folder, write_templates,
};
pub use columns::{classify_headers, ColumnMap, Field, ReportShape};
pub use demo::{generate_demo, DEFAULT_SEED};
pub use error::ImportError;
pub use numbers::{parse_count, parse_decimal, parse_percent, parse_timestamp};
pub use source::{load_source, DataMode, LoadedData};
pub use summary::{ImportSummary, ImportWarning};
pub use vendor::{import_reader, import_vendor_directory, FileContents, VendorImport};
