//! Vendor CSV export import.
//!
//! A vendor directory holds a mix of post-level exports (one row per post),
//! aggregate exports (one row per profile per day) and optional benchmark
//! exports. Each file is classified by its headers and read independently;
//! a bad row or an unrecognized file is recorded in the [`ImportSummary`]
//! and the rest of the batch continues.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use cuervo_classify::{caption_stats, classify, ClassifyContext};
use cuervo_core::{BrandConfig, BrandProfile, BrandRegistry, FollowerSource, Platform, Post, PostType};

use crate::benchmark::{is_benchmark_file, read_benchmark, BenchmarkMetrics};
use crate::columns::{ColumnMap, Field, ReportShape};
use crate::error::ImportError;
use crate::numbers::{count_or_zero, parse_count, parse_decimal, parse_percent, parse_timestamp};
use crate::summary::{ImportSummary, ImportWarning};

/// Everything read from one vendor directory.
#[derive(Debug, Clone, Default)]
pub struct VendorImport {
    pub posts: Vec<Post>,
    pub profiles: Vec<BrandProfile>,
    /// Benchmark rows keyed by canonical brand name.
    pub benchmark: BTreeMap<String, BenchmarkMetrics>,
    pub summary: ImportSummary,
}

/// Rows produced by one non-benchmark export.
#[derive(Debug, Clone)]
pub enum FileContents {
    Posts(Vec<Post>),
    Profiles(Vec<BrandProfile>),
}

/// Resolve a vendor network name. Only Instagram and TikTok are tracked.
#[must_use]
pub fn resolve_platform(raw: &str) -> Option<Platform> {
    let n = raw.trim().to_lowercase();
    if n.contains("instagram") || n == "ig" {
        Some(Platform::Instagram)
    } else if n.contains("tiktok") || n.contains("tik tok") {
        Some(Platform::TikTok)
    } else {
        None
    }
}

/// Resolve a post format from the vendor's "Post Type" and "Content Type" cells.
///
/// Every TikTok post is a video. Instagram exports often say just "Post" and
/// put the real format in the content type.
#[must_use]
pub fn resolve_post_type(raw_type: &str, platform: Platform, content_type: &str) -> PostType {
    if platform == Platform::TikTok {
        return PostType::Video;
    }
    let t = raw_type.trim().to_lowercase();
    let ct = content_type.trim().to_lowercase();

    if t.contains("reel") {
        PostType::Reel
    } else if t.contains("story") || t.contains("stories") {
        PostType::Story
    } else if t.contains("carousel") || ct.contains("carousel") {
        PostType::Carousel
    } else if t.contains("video") || ct.contains("video") {
        PostType::Reel
    } else {
        PostType::StaticImage
    }
}

/// Platform implied by a file's brand column header, used when rows carry
/// no network cell ("TikTok Profiles" vs "Instagram Profile").
fn default_platform(map: &ColumnMap) -> Platform {
    match map.header(Field::Brand) {
        Some(h) if h.to_lowercase().contains("tiktok") => Platform::TikTok,
        _ => Platform::Instagram,
    }
}

struct RowContext<'a> {
    file: &'a str,
    map: &'a ColumnMap,
    registry: &'a BrandRegistry,
    default_platform: Platform,
}

impl RowContext<'_> {
    fn skip(&self, summary: &mut ImportSummary, row: usize, reason: impl Into<String>) {
        summary.warn(ImportWarning::RowSkipped {
            file: self.file.to_string(),
            row,
            reason: reason.into(),
        });
    }

    fn brand<'r>(
        &'r self,
        record: &StringRecord,
        row: usize,
        summary: &mut ImportSummary,
    ) -> Option<&'r BrandConfig> {
        let Some(raw) = self.map.get(record, Field::Brand) else {
            self.skip(summary, row, "missing profile name");
            return None;
        };
        let brand = self.registry.resolve(raw);
        if brand.is_none() {
            summary.warn(ImportWarning::UnresolvedBrand {
                file: self.file.to_string(),
                row,
                handle: raw.to_string(),
            });
        }
        brand
    }

    fn platform(
        &self,
        record: &StringRecord,
        row: usize,
        summary: &mut ImportSummary,
    ) -> Option<Platform> {
        match self.map.get(record, Field::Platform) {
            None => Some(self.default_platform),
            Some(raw) => {
                let platform = resolve_platform(raw);
                if platform.is_none() {
                    self.skip(summary, row, format!("untracked network '{raw}'"));
                }
                platform
            }
        }
    }
}

fn post_from_row(
    ctx: &RowContext<'_>,
    record: &StringRecord,
    row: usize,
    summary: &mut ImportSummary,
) -> Option<Post> {
    let brand = ctx.brand(record, row, summary)?;
    let platform = ctx.platform(record, row, summary)?;
    let map = ctx.map;

    let Some((post_date, post_time)) = map.get(record, Field::PostDate).and_then(parse_timestamp)
    else {
        ctx.skip(summary, row, "missing or unparseable post date");
        return None;
    };

    let post_type = resolve_post_type(
        map.get(record, Field::PostType).unwrap_or(""),
        platform,
        map.get(record, Field::ContentType).unwrap_or(""),
    );
    if post_type.is_ephemeral() {
        summary.stories_excluded += 1;
        return None;
    }

    let caption = map.get(record, Field::Caption).unwrap_or("").to_string();
    let labels = classify(&caption, &ClassifyContext::for_brand(Some(brand)));
    let stats = caption_stats(&caption);

    Some(Post {
        brand: brand.name.clone(),
        platform,
        post_url: map.get(record, Field::PostUrl).unwrap_or("").to_string(),
        post_date,
        post_time,
        post_type,
        hashtags: stats.hashtags,
        likes: count_or_zero(map.get(record, Field::Likes)),
        comments: count_or_zero(map.get(record, Field::Comments)),
        shares: count_or_zero(map.get(record, Field::Shares)),
        saves: count_or_zero(map.get(record, Field::Saves)),
        views: count_or_zero(map.get(record, Field::Views)),
        impressions: map.get(record, Field::Impressions).and_then(parse_count),
        reach: map.get(record, Field::Reach).and_then(parse_count),
        vendor_engagement_rate: map.get(record, Field::EngagementRate).and_then(parse_percent),
        content_theme: labels.content_theme,
        visual_style: labels.visual_style,
        caption_tone: labels.caption_tone,
        cta_type: labels.cta_type,
        has_creator_collab: labels.has_creator_collab,
        creator_handle: labels.creator_handle,
        is_paid_partnership: labels.is_paid_partnership,
        caption_word_count: stats.word_count,
        emoji_count: stats.emoji_count,
        mentions_count: stats.mentions_count,
        source: Some(ctx.file.to_string()),
        caption,
    })
}

/// Running totals for one brand and platform across an aggregate export.
#[derive(Default)]
struct AggregateAccumulator {
    engagements: f64,
    published: f64,
    max_followers: u64,
    first_handle: Option<String>,
    /// Latest dated row with a positive follower count: (date, followers, handle).
    latest: Option<(Option<NaiveDate>, u64, String)>,
}

impl AggregateAccumulator {
    fn add(&mut self, handle: &str, date: Option<NaiveDate>, followers: u64, engagements: f64, published: f64) {
        self.engagements += engagements;
        self.published += published;
        self.max_followers = self.max_followers.max(followers);
        if self.first_handle.is_none() {
            self.first_handle = Some(handle.to_string());
        }
        if followers > 0 {
            let newer = self.latest.as_ref().is_none_or(|(d, _, _)| date >= *d);
            if newer {
                self.latest = Some((date, followers, handle.to_string()));
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn into_profile(self, brand: String, platform: Platform) -> BrandProfile {
        let aggregate_engagement_rate = (self.published > 0.0 && self.max_followers > 0).then(|| {
            round4(self.engagements / self.published / self.max_followers as f64 * 100.0)
        });
        let posts_in_period = (self.published > 0.0).then(|| self.published.round() as u32);

        let (collected_on, followers, handle) = match self.latest {
            Some((date, followers, handle)) => (date, Some(followers), Some(handle)),
            None => (None, None, self.first_handle),
        };

        BrandProfile {
            brand,
            platform,
            handle,
            followers,
            posts_in_period,
            aggregate_engagement_rate,
            collected_on,
            follower_source: FollowerSource::Report,
        }
    }
}

pub(crate) fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Read one non-benchmark export from any reader.
///
/// # Errors
///
/// Returns [`ImportError::UnrecognizedFormat`] when the headers match neither
/// report shape, or [`ImportError::Csv`] when the header row cannot be read.
/// Malformed data rows are recorded in `summary` and skipped.
pub fn import_reader<R: Read>(
    reader: R,
    file_name: &str,
    registry: &BrandRegistry,
    summary: &mut ImportSummary,
) -> Result<FileContents, ImportError> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ImportError::csv(file_name, e))?
        .clone();
    let map = ColumnMap::from_headers(&headers);
    let shape = map.shape().ok_or_else(|| ImportError::UnrecognizedFormat {
        file: file_name.to_string(),
        reason: "headers match neither a post-level nor an aggregate report".to_string(),
    })?;

    let ctx = RowContext {
        file: file_name,
        map: &map,
        registry,
        default_platform: default_platform(&map),
    };

    let mut posts = Vec::new();
    let mut aggregates: BTreeMap<(String, Platform), AggregateAccumulator> = BTreeMap::new();

    for (i, record) in rdr.records().enumerate() {
        let row = i + 2;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                ctx.skip(summary, row, e.to_string());
                continue;
            }
        };

        match shape {
            ReportShape::PostLevel => {
                if let Some(post) = post_from_row(&ctx, &record, row, summary) {
                    posts.push(post);
                }
            }
            ReportShape::Aggregate => {
                let Some(brand) = ctx.brand(&record, row, summary) else {
                    continue;
                };
                let Some(platform) = ctx.platform(&record, row, summary) else {
                    continue;
                };
                let handle = map.get(&record, Field::Brand).unwrap_or("");
                let date = map
                    .get(&record, Field::PostDate)
                    .and_then(parse_timestamp)
                    .map(|(d, _)| d);
                aggregates
                    .entry((brand.name.clone(), platform))
                    .or_default()
                    .add(
                        handle,
                        date,
                        map.get(&record, Field::Followers).and_then(parse_count).unwrap_or(0),
                        map.get(&record, Field::Engagements).and_then(parse_decimal).unwrap_or(0.0),
                        map.get(&record, Field::PublishedPosts).and_then(parse_decimal).unwrap_or(0.0),
                    );
            }
        }
    }

    Ok(match shape {
        ReportShape::PostLevel => {
            tracing::debug!(file = %file_name, posts = posts.len(), "post-level export read");
            FileContents::Posts(posts)
        }
        ReportShape::Aggregate => {
            let profiles: Vec<BrandProfile> = aggregates
                .into_iter()
                .map(|((brand, platform), acc)| acc.into_profile(brand, platform))
                .collect();
            tracing::debug!(file = %file_name, profiles = profiles.len(), "aggregate export read");
            FileContents::Profiles(profiles)
        }
    })
}

fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::data_source(dir, "directory does not exist"));
    }
    let entries = std::fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    if files.is_empty() {
        return Err(ImportError::data_source(dir, "no CSV files found"));
    }
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn open(path: &Path) -> Result<File, ImportError> {
    File::open(path).map_err(|e| ImportError::io(path, e))
}

/// Import every CSV export in `dir`.
///
/// Files are processed in name order. Benchmark exports are read separately
/// and override Instagram follower counts. Brands that have posts but no
/// usable profile get one from their configured fallback follower count.
///
/// # Errors
///
/// Returns [`ImportError::DataSource`] when `dir` is missing or holds no CSV
/// files. Problems with individual files or rows never fail the import; they
/// are recorded in the returned summary.
pub fn import_vendor_directory(
    dir: &Path,
    registry: &BrandRegistry,
) -> Result<VendorImport, ImportError> {
    let files = list_csv_files(dir)?;
    let mut out = VendorImport::default();

    for path in &files {
        let name = file_name_of(path);

        let result = if is_benchmark_file(&name) {
            open(path)
                .and_then(|f| read_benchmark(f, &name, registry, &mut out.summary))
                .map(|b| out.benchmark.extend(b))
        } else {
            open(path)
                .and_then(|f| import_reader(f, &name, registry, &mut out.summary))
                .map(|contents| match contents {
                    FileContents::Posts(p) => out.posts.extend(p),
                    FileContents::Profiles(p) => out.profiles.extend(p),
                })
        };

        match result {
            Ok(()) => out.summary.files_imported.push(name),
            Err(ImportError::UnrecognizedFormat { file, reason }) => {
                out.summary.warn(ImportWarning::UnrecognizedFormat { file, reason });
            }
            Err(e) => out.summary.warn(ImportWarning::FileFailed {
                file: name,
                error: e.to_string(),
            }),
        }
    }

    add_fallback_profiles(&out.posts, &mut out.profiles, registry);
    apply_benchmark_followers(&out.benchmark, &mut out.profiles);
    out.profiles = dedupe_profiles(std::mem::take(&mut out.profiles));

    let summary = &mut out.summary;
    summary.posts = out.posts.len();
    summary.profiles = out.profiles.len();
    summary.brands_found = out.posts.iter().map(|p| p.brand.clone()).collect();
    summary.platforms_found = out.posts.iter().map(|p| p.platform).collect();

    tracing::info!(
        dir = %dir.display(),
        files = summary.files_imported.len(),
        rejected = summary.files_rejected.len(),
        posts = summary.posts,
        profiles = summary.profiles,
        stories_excluded = summary.stories_excluded,
        rows_skipped = summary.rows_skipped,
        warnings = summary.warning_count(),
        "vendor import finished"
    );
    Ok(out)
}

/// Give every brand/platform with posts but no usable follower count a
/// profile built from the brand's configured fallback.
#[allow(clippy::cast_precision_loss)]
fn add_fallback_profiles(posts: &[Post], profiles: &mut Vec<BrandProfile>, registry: &BrandRegistry) {
    let covered: BTreeSet<(&str, Platform)> = profiles
        .iter()
        .filter(|p| p.usable_followers().is_some())
        .map(|p| (p.brand.as_str(), p.platform))
        .collect();

    let mut by_key: BTreeMap<(&str, Platform), (u64, usize)> = BTreeMap::new();
    for post in posts {
        let entry = by_key.entry((post.brand.as_str(), post.platform)).or_default();
        entry.0 = entry.0.saturating_add(post.total_engagement());
        entry.1 += 1;
    }

    let mut added = Vec::new();
    for ((brand, platform), (engagement, count)) in by_key {
        if covered.contains(&(brand, platform)) {
            continue;
        }
        let Some(followers) = registry
            .get(brand)
            .and_then(|b| b.fallback_followers)
            .filter(|&f| f > 0)
        else {
            continue;
        };
        tracing::debug!(brand, %platform, followers, "using fallback follower count");
        added.push(BrandProfile {
            brand: brand.to_string(),
            platform,
            handle: None,
            followers: Some(followers),
            posts_in_period: u32::try_from(count).ok(),
            aggregate_engagement_rate: Some(round4(
                engagement as f64 / count as f64 / followers as f64 * 100.0,
            )),
            collected_on: None,
            follower_source: FollowerSource::Fallback,
        });
    }
    profiles.extend(added);
}

/// Benchmark follower counts replace Instagram profile counts, and supply an
/// Instagram profile where none was imported.
fn apply_benchmark_followers(
    benchmark: &BTreeMap<String, BenchmarkMetrics>,
    profiles: &mut Vec<BrandProfile>,
) {
    for (brand, metrics) in benchmark {
        if metrics.followers == 0 {
            continue;
        }
        let mut matched = false;
        for profile in profiles
            .iter_mut()
            .filter(|p| p.platform == Platform::Instagram && &p.brand == brand)
        {
            profile.followers = Some(metrics.followers);
            profile.follower_source = FollowerSource::Benchmark;
            matched = true;
        }
        if !matched {
            profiles.push(BrandProfile {
                brand: brand.clone(),
                platform: Platform::Instagram,
                handle: Some(metrics.handle.clone()),
                followers: Some(metrics.followers),
                posts_in_period: u32::try_from(metrics.posts).ok(),
                aggregate_engagement_rate: Some(metrics.er_by_followers),
                collected_on: None,
                follower_source: FollowerSource::Benchmark,
            });
        }
    }
}

/// One profile per brand and platform, keeping the highest follower count.
fn dedupe_profiles(profiles: Vec<BrandProfile>) -> Vec<BrandProfile> {
    let mut best: BTreeMap<(String, Platform), BrandProfile> = BTreeMap::new();
    for profile in profiles {
        let key = (profile.brand.clone(), profile.platform);
        match best.get(&key) {
            Some(existing) if existing.followers > profile.followers => {}
            _ => {
                best.insert(key, profile);
            }
        }
    }
    best.into_values().collect()
}
