//! Brand-level benchmark exports (`Benchmark_CSV*.csv`).
//!
//! These carry one row per Instagram account with pre-computed engagement
//! rates by followers, views and reach. Follower counts from a benchmark are
//! treated as more current than the vendor's aggregate reports.

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::LazyLock;

use csv::{ReaderBuilder, StringRecord, Trim};
use cuervo_core::BrandRegistry;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::columns::normalize_header;
use crate::error::ImportError;
use crate::numbers::{parse_count, parse_decimal};
use crate::summary::{ImportSummary, ImportWarning};

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})-(\w+?)_to_(\d{1,2})-(\w+?)(?:\.|_|$)").expect("valid date range regex")
});

/// File-name prefix, compared case-insensitively, that marks a benchmark export.
pub const BENCHMARK_PREFIX: &str = "benchmark_csv";

/// One brand's row from a benchmark export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    pub handle: String,
    pub followers: u64,
    pub total_engagement: u64,
    pub posts: u64,
    /// Percent.
    pub er_by_followers: f64,
    /// Percent. The vendor's headline metric.
    pub er_by_views: f64,
    /// Percent.
    pub er_by_reach: f64,
    pub avg_engagement: f64,
    pub avg_hashtags_per_post: f64,
    pub reels_count: u64,
    pub reels_engagement: u64,
    /// Reporting window parsed from the file name, e.g. `"Jan 20 - Feb 17"`.
    pub date_range: Option<String>,
}

#[must_use]
pub fn is_benchmark_file(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().starts_with(BENCHMARK_PREFIX)
}

/// Parse `..._20-Jan_to_17-Feb.csv` into `"Jan 20 - Feb 17"`.
#[must_use]
pub fn date_range_from_file_name(file_name: &str) -> Option<String> {
    let caps = DATE_RANGE_RE.captures(file_name)?;
    Some(format!(
        "{} {} - {} {}",
        &caps[2], &caps[1], &caps[4], &caps[3]
    ))
}

struct BenchmarkColumns {
    page: usize,
    followers: Option<usize>,
    engagement: Option<usize>,
    posts: Option<usize>,
    er_by_followers: Option<usize>,
    er_by_views: Option<usize>,
    er_by_reach: Option<usize>,
    avg_engagement: Option<usize>,
    avg_hashtags: Option<usize>,
    reels_count: Option<usize>,
    reels_engagement: Option<usize>,
}

impl BenchmarkColumns {
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        // Exports repeat "Reels Count"; the first occurrence is the one we want.
        let find = |name: &str| normalized.iter().position(|h| h == name);
        Some(Self {
            page: find("page")?,
            followers: find("followers"),
            engagement: find("engagement"),
            posts: find("posts"),
            er_by_followers: find("avg. eng. rate by followers"),
            er_by_views: find("avg. eng. rate by views"),
            er_by_reach: find("avg. eng. rate by reach"),
            avg_engagement: find("avg. engagement"),
            avg_hashtags: find("average hashtags per post"),
            reels_count: find("reels count"),
            reels_engagement: find("reels engagement"),
        })
    }
}

fn cell(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

fn count(record: &StringRecord, idx: Option<usize>) -> u64 {
    parse_count(cell(record, idx)).unwrap_or(0)
}

fn decimal(record: &StringRecord, idx: Option<usize>) -> f64 {
    parse_decimal(cell(record, idx)).unwrap_or(0.0)
}

/// Read a benchmark export, keyed by canonical brand name.
///
/// Rows whose "Page" handle does not resolve to a configured brand are
/// skipped and recorded in `summary`.
///
/// # Errors
///
/// Returns [`ImportError::UnrecognizedFormat`] when the file has no "Page"
/// column, or [`ImportError::Csv`] when the CSV itself is malformed.
pub fn read_benchmark<R: Read>(
    reader: R,
    file_name: &str,
    registry: &BrandRegistry,
    summary: &mut ImportSummary,
) -> Result<BTreeMap<String, BenchmarkMetrics>, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ImportError::csv(file_name, e))?
        .clone();
    let cols =
        BenchmarkColumns::from_headers(&headers).ok_or_else(|| ImportError::UnrecognizedFormat {
            file: file_name.to_string(),
            reason: "benchmark export has no \"Page\" column".to_string(),
        })?;

    let date_range = date_range_from_file_name(file_name);
    let mut out = BTreeMap::new();

    for (i, record) in rdr.records().enumerate() {
        let row = i + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                summary.warn(ImportWarning::RowSkipped {
                    file: file_name.to_string(),
                    row,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let handle = cell(&record, Some(cols.page)).trim();
        if handle.is_empty() {
            continue;
        }
        let Some(brand) = registry.resolve(handle) else {
            summary.warn(ImportWarning::UnresolvedBrand {
                file: file_name.to_string(),
                row,
                handle: handle.to_string(),
            });
            continue;
        };

        out.insert(
            brand.name.clone(),
            BenchmarkMetrics {
                handle: handle.to_string(),
                followers: count(&record, cols.followers),
                total_engagement: count(&record, cols.engagement),
                posts: count(&record, cols.posts),
                er_by_followers: decimal(&record, cols.er_by_followers),
                er_by_views: decimal(&record, cols.er_by_views),
                er_by_reach: decimal(&record, cols.er_by_reach),
                avg_engagement: decimal(&record, cols.avg_engagement),
                avg_hashtags_per_post: decimal(&record, cols.avg_hashtags),
                reels_count: count(&record, cols.reels_count),
                reels_engagement: count(&record, cols.reels_engagement),
                date_range: date_range.clone(),
            },
        );
    }

    tracing::debug!(file = %file_name, brands = out.len(), "benchmark export read");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Page,Followers,Engagement,Posts,Avg. Eng. Rate by Followers,Avg. Eng. Rate by Views,Avg. Eng. Rate by Reach,Avg. Engagement,Average Hashtags Per Post,Reels Count,Reels Engagement,Reels Count
josecuervotequila,\"111,871\",909,7,0.116,1.287,1.102,129.86,0,1,52,9
someotherbrand,500,10,1,0.1,0.2,0.3,10,0,0,0,0
";

    #[test]
    fn detects_benchmark_file_names() {
        assert!(is_benchmark_file("Benchmark_CSV_ig_tequila_20-Jan_to_17-Feb.csv"));
        assert!(!is_benchmark_file("posts.csv"));
    }

    #[test]
    fn date_range_from_name() {
        assert_eq!(
            date_range_from_file_name("Benchmark_CSV_ig_tequila_20-Jan_to_17-Feb.csv").as_deref(),
            Some("Jan 20 - Feb 17")
        );
        assert!(date_range_from_file_name("Benchmark_CSV.csv").is_none());
    }

    #[test]
    fn reads_known_brands_and_skips_unknown() {
        let registry = BrandRegistry::builtin().unwrap();
        let mut summary = ImportSummary::default();
        let out = read_benchmark(
            SAMPLE.as_bytes(),
            "Benchmark_CSV_ig_20-Jan_to_17-Feb.csv",
            &registry,
            &mut summary,
        )
        .unwrap();

        assert_eq!(out.len(), 1);
        let cuervo = &out["Jose Cuervo"];
        assert_eq!(cuervo.followers, 111_871);
        assert_eq!(cuervo.reels_count, 1);
        assert!((cuervo.er_by_views - 1.287).abs() < 1e-9);
        assert_eq!(cuervo.date_range.as_deref(), Some("Jan 20 - Feb 17"));
        assert!(summary.unresolved_handles.contains("someotherbrand"));
    }

    #[test]
    fn missing_page_column_is_unrecognized() {
        let registry = BrandRegistry::builtin().unwrap();
        let mut summary = ImportSummary::default();
        let result = read_benchmark(
            "Name,Followers\nx,1\n".as_bytes(),
            "Benchmark_CSV_x.csv",
            &registry,
            &mut summary,
        );
        assert!(
            matches!(result, Err(ImportError::UnrecognizedFormat { .. })),
            "expected UnrecognizedFormat, got: {result:?}"
        );
    }
}
