//! Full analysis over one filtered snapshot of the dataset.

use std::collections::{BTreeMap, BTreeSet};

use cuervo_core::{BrandProfile, BrandRegistry, Platform, Post};
use cuervo_import::BenchmarkMetrics;
use serde::Serialize;

use crate::content::{caption_stats, theme_stats, CaptionStats, ThemeStats};
use crate::creators::{creator_frequency, creator_stats, CreatorFrequency, CreatorStats};
use crate::engagement::{
    engagement_stats, er_exclusions, follower_lookup, rate_posts, EngagementStats, ErExclusion,
    RatedPost,
};
use crate::filter::PostFilter;
use crate::frequency::{posting_frequency, DateWindow, Frequency};
use crate::hashtags::{hashtag_stats, HashtagStats};
use crate::recommend::{recommend, Recommendation};
use crate::targets::Targets;

pub type ByPlatform<T> = BTreeMap<Platform, T>;

static NO_DATA: Frequency = Frequency::NoData;

/// Canonical records the analysis reads. Nothing here is modified.
#[derive(Debug, Clone, Copy)]
pub struct Dataset<'a> {
    pub posts: &'a [Post],
    pub profiles: &'a [BrandProfile],
    /// Benchmark metrics keyed by canonical brand name (Instagram only).
    pub benchmark: &'a BTreeMap<String, BenchmarkMetrics>,
}

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions<'a> {
    pub registry: &'a BrandRegistry,
    pub targets: &'a Targets,
    /// Brand the competitive recommendations are written for.
    pub focal_brand: &'a str,
}

/// Everything derived from one filtered snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub focal_brand: String,
    pub filter: PostFilter,
    pub window: Option<DateWindow>,
    pub total_posts: usize,
    pub total_profiles: usize,
    /// Configured brands admitted by the filter plus any brand in the data.
    pub brands: Vec<String>,
    pub platforms: Vec<Platform>,
    pub engagement: BTreeMap<String, ByPlatform<EngagementStats>>,
    pub er_exclusions: Vec<ErExclusion>,
    /// Every brand × platform, including [`Frequency::NoData`] entries.
    pub frequency: BTreeMap<String, ByPlatform<Frequency>>,
    pub captions: BTreeMap<String, ByPlatform<CaptionStats>>,
    pub themes: BTreeMap<String, ThemeStats>,
    pub hashtags: BTreeMap<String, HashtagStats>,
    pub creators: BTreeMap<String, CreatorStats>,
    pub creator_frequency: Vec<CreatorFrequency>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    /// Cadence for a brand and platform; brands never seen report no data.
    #[must_use]
    pub fn frequency_for(&self, brand: &str, platform: Platform) -> &Frequency {
        self.frequency
            .get(brand)
            .and_then(|m| m.get(&platform))
            .unwrap_or(&NO_DATA)
    }

    #[must_use]
    pub fn engagement_for(&self, brand: &str, platform: Platform) -> Option<&EngagementStats> {
        self.engagement.get(brand)?.get(&platform)
    }

    #[must_use]
    pub fn avg_engagement_rate(&self, brand: &str, platform: Platform) -> Option<f64> {
        self.engagement_for(brand, platform)?.avg_engagement_rate
    }

    #[must_use]
    pub fn captions_for(&self, brand: &str, platform: Platform) -> Option<&CaptionStats> {
        self.captions.get(brand)?.get(&platform)
    }

    /// Brands with at least one post in the snapshot.
    pub fn brands_with_posts(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}

/// Run every analysis over the posts and profiles that pass `filter`.
///
/// 1. Filter posts and profiles; resolve the date window.
/// 2. Rate each post against its brand's follower count; record exclusions.
/// 3. Group by brand × platform for engagement, cadence and captions, and by
///    brand for themes, hashtags and creators.
/// 4. Derive recommendations from the finished stats.
///
/// The result is rebuilt from scratch on every call.
#[must_use]
pub fn run_analysis(
    data: Dataset<'_>,
    filter: &PostFilter,
    options: &AnalysisOptions<'_>,
) -> AnalysisResult {
    let posts: Vec<&Post> = data.posts.iter().filter(|p| filter.matches(p)).collect();
    let profiles: Vec<&BrandProfile> = data
        .profiles
        .iter()
        .filter(|p| filter.matches_profile(p))
        .collect();
    let window = DateWindow::resolve(filter.from, filter.to, &posts);
    let weeks = window.map_or(0, |w| w.weeks);
    let platforms = filter.platforms();

    let followers = follower_lookup(profiles.iter().copied());
    let rated = rate_posts(&posts, &followers);
    let exclusions = er_exclusions(&rated);

    let mut by_group: BTreeMap<(&str, Platform), Vec<RatedPost<'_>>> = BTreeMap::new();
    let mut by_brand: BTreeMap<&str, Vec<RatedPost<'_>>> = BTreeMap::new();
    for r in &rated {
        by_group
            .entry((r.post.brand.as_str(), r.post.platform))
            .or_default()
            .push(*r);
        by_brand.entry(r.post.brand.as_str()).or_default().push(*r);
    }

    let brands: BTreeSet<String> = options
        .registry
        .brands()
        .iter()
        .map(|b| b.name.clone())
        .filter(|name| filter.admits_brand(name))
        .chain(posts.iter().map(|p| p.brand.clone()))
        .chain(profiles.iter().map(|p| p.brand.clone()))
        .collect();

    let mut engagement: BTreeMap<String, ByPlatform<EngagementStats>> = BTreeMap::new();
    let mut frequency: BTreeMap<String, ByPlatform<Frequency>> = BTreeMap::new();
    let mut captions: BTreeMap<String, ByPlatform<CaptionStats>> = BTreeMap::new();
    for brand in &brands {
        for &platform in &platforms {
            let group = by_group
                .get(&(brand.as_str(), platform))
                .map_or(&[][..], Vec::as_slice);
            let profile = followers.get(&(brand.clone(), platform)).copied();

            let group_posts: Vec<&Post> = group.iter().map(|r| r.post).collect();
            frequency
                .entry(brand.clone())
                .or_default()
                .insert(platform, posting_frequency(&group_posts, profile.is_some(), weeks));

            if group.is_empty() && profile.is_none() {
                continue;
            }
            let benchmark = (platform == Platform::Instagram)
                .then(|| data.benchmark.get(brand))
                .flatten();
            engagement
                .entry(brand.clone())
                .or_default()
                .insert(platform, engagement_stats(group, profile, benchmark));
            if !group.is_empty() {
                captions
                    .entry(brand.clone())
                    .or_default()
                    .insert(platform, caption_stats(group));
            }
        }
    }

    let mut themes = BTreeMap::new();
    let mut hashtags = BTreeMap::new();
    let mut creators = BTreeMap::new();
    for (&brand, group) in &by_brand {
        let terms = options.registry.branded_terms(brand);
        themes.insert(brand.to_string(), theme_stats(group));
        hashtags.insert(brand.to_string(), hashtag_stats(group, &terms));
        creators.insert(brand.to_string(), creator_stats(group));
    }

    let mut result = AnalysisResult {
        focal_brand: options.focal_brand.to_string(),
        filter: filter.clone(),
        window,
        total_posts: posts.len(),
        total_profiles: profiles.len(),
        brands: brands.into_iter().collect(),
        platforms,
        engagement,
        er_exclusions: exclusions,
        frequency,
        captions,
        themes,
        hashtags,
        creators,
        creator_frequency: creator_frequency(&rated),
        recommendations: Vec::new(),
    };
    result.recommendations = recommend(&result, options.focal_brand, options.targets);

    tracing::info!(
        posts = result.total_posts,
        profiles = result.total_profiles,
        excluded = result.er_exclusions.iter().map(|e| e.posts).sum::<usize>(),
        recommendations = result.recommendations.len(),
        "analysis complete"
    );
    result
}
