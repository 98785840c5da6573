//! Per-post engagement rate and per brand × platform engagement stats.
//!
//! ER is `(likes + comments + shares + saves) / followers × 100`, with the
//! follower count taken from the brand's profile on the same platform. Posts
//! without a usable follower count are left unrated and counted in an
//! [`ErExclusion`] instead of being treated as zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use cuervo_core::{BrandProfile, ContentTheme, FollowerSource, Platform, Post, PostType};
use cuervo_import::BenchmarkMetrics;
use serde::Serialize;

use crate::tally::{mean, mean_u64, round_to};

const TOP_POSTS: usize = 10;
const TOP_POST_CAPTION_CHARS: usize = 100;

/// Brand name and platform.
pub type GroupKey = (String, Platform);

/// Follower count per brand × platform. When several profiles exist for the
/// same pair the largest usable count wins.
#[must_use]
pub fn follower_lookup<'a, I>(profiles: I) -> BTreeMap<GroupKey, &'a BrandProfile>
where
    I: IntoIterator<Item = &'a BrandProfile>,
{
    let mut out: BTreeMap<GroupKey, &BrandProfile> = BTreeMap::new();
    for profile in profiles {
        let key = (profile.brand.clone(), profile.platform);
        let replace = out
            .get(&key)
            .is_none_or(|cur| profile.usable_followers() > cur.usable_followers());
        if replace {
            out.insert(key, profile);
        }
    }
    out
}

/// Engagement rate in percent, or `None` without a usable follower count.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn engagement_rate(post: &Post, followers: Option<u64>) -> Option<f64> {
    followers
        .filter(|&f| f > 0)
        .map(|f| post.total_engagement() as f64 / f as f64 * 100.0)
}

/// A post paired with its engagement rate.
#[derive(Debug, Clone, Copy)]
pub struct RatedPost<'a> {
    pub post: &'a Post,
    pub engagement_rate: Option<f64>,
}

/// Rates every post against `followers`.
#[must_use]
pub fn rate_posts<'a>(
    posts: &[&'a Post],
    followers: &BTreeMap<GroupKey, &BrandProfile>,
) -> Vec<RatedPost<'a>> {
    posts
        .iter()
        .map(|&post| {
            let count = followers
                .get(&(post.brand.clone(), post.platform))
                .and_then(|p| p.usable_followers());
            RatedPost {
                post,
                engagement_rate: engagement_rate(post, count),
            }
        })
        .collect()
}

/// Posts left out of ER aggregates because their brand had no follower
/// count on that platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErExclusion {
    pub brand: String,
    pub platform: Platform,
    pub posts: usize,
}

/// Lists every brand × platform with unrated posts and logs each one.
#[must_use]
pub fn er_exclusions(rated: &[RatedPost<'_>]) -> Vec<ErExclusion> {
    let mut counts: BTreeMap<GroupKey, usize> = BTreeMap::new();
    for r in rated.iter().filter(|r| r.engagement_rate.is_none()) {
        *counts
            .entry((r.post.brand.clone(), r.post.platform))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((brand, platform), posts)| {
            tracing::warn!(
                brand = %brand,
                platform = %platform,
                posts,
                "no follower count; posts excluded from engagement rate"
            );
            ErExclusion {
                brand,
                platform,
                posts,
            }
        })
        .collect()
}

/// A high-ER post, trimmed for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPost {
    pub post_url: String,
    pub post_date: NaiveDate,
    pub post_type: PostType,
    pub content_theme: ContentTheme,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementStats {
    pub followers: Option<u64>,
    pub follower_source: Option<FollowerSource>,
    pub posts: usize,
    pub rated_posts: usize,
    pub excluded_posts: usize,
    /// Mean ER over rated posts, in percent. `None` when nothing was rated.
    pub avg_engagement_rate: Option<f64>,
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
    pub avg_views: f64,
    pub er_by_post_type: BTreeMap<PostType, f64>,
    pub top_posts: Vec<TopPost>,
    /// From the profile's aggregate report rows, when present.
    pub aggregate_engagement_rate: Option<f64>,
    /// Mean of the vendor's per-impression ER where the export carried one.
    pub avg_vendor_engagement_rate: Option<f64>,
    pub benchmark: Option<BenchmarkMetrics>,
}

/// Engagement stats for one brand × platform group.
///
/// `profile` may be present with no posts; the stats then report zero posts
/// and no average rather than being omitted.
#[must_use]
pub fn engagement_stats(
    rated: &[RatedPost<'_>],
    profile: Option<&BrandProfile>,
    benchmark: Option<&BenchmarkMetrics>,
) -> EngagementStats {
    let rates: Vec<(&Post, f64)> = rated
        .iter()
        .filter_map(|r| r.engagement_rate.map(|er| (r.post, er)))
        .collect();

    let mut by_type: BTreeMap<PostType, Vec<f64>> = BTreeMap::new();
    for (post, er) in &rates {
        by_type.entry(post.post_type).or_default().push(*er);
    }
    let er_by_post_type = by_type
        .into_iter()
        .filter_map(|(t, v)| mean(v).map(|m| (t, round_to(m, 3))))
        .collect();

    let mut ranked = rates.clone();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let top_posts = ranked
        .into_iter()
        .take(TOP_POSTS)
        .map(|(post, er)| TopPost {
            post_url: post.post_url.clone(),
            post_date: post.post_date,
            post_type: post.post_type,
            content_theme: post.content_theme,
            caption: post.caption.chars().take(TOP_POST_CAPTION_CHARS).collect(),
            likes: post.likes,
            comments: post.comments,
            shares: post.shares,
            engagement_rate: round_to(er, 3),
        })
        .collect();

    EngagementStats {
        followers: profile.and_then(BrandProfile::usable_followers),
        follower_source: profile.map(|p| p.follower_source),
        posts: rated.len(),
        rated_posts: rates.len(),
        excluded_posts: rated.len() - rates.len(),
        avg_engagement_rate: mean(rates.iter().map(|(_, er)| *er)).map(|m| round_to(m, 3)),
        avg_likes: round_to(mean_u64(rated.iter().map(|r| r.post.likes)), 1),
        avg_comments: round_to(mean_u64(rated.iter().map(|r| r.post.comments)), 1),
        avg_shares: round_to(mean_u64(rated.iter().map(|r| r.post.shares)), 1),
        avg_views: round_to(mean_u64(rated.iter().map(|r| r.post.views)), 1),
        er_by_post_type,
        top_posts,
        aggregate_engagement_rate: profile.and_then(|p| p.aggregate_engagement_rate),
        avg_vendor_engagement_rate: mean(
            rated
                .iter()
                .filter_map(|r| r.post.vendor_engagement_rate),
        )
        .map(|m| round_to(m, 3)),
        benchmark: benchmark.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{post, profile};

    #[test]
    fn rate_is_percent_of_followers() {
        let p = post("Patron", Platform::Instagram, "2026-01-05");
        let er = engagement_rate(&p, Some(10_000)).unwrap();
        assert!((er - 1.0).abs() < 1e-9, "expected 1.0, got: {er}");
    }

    #[test]
    fn missing_or_zero_followers_leave_post_unrated() {
        let p = post("Patron", Platform::Instagram, "2026-01-05");
        assert_eq!(engagement_rate(&p, None), None);
        assert_eq!(engagement_rate(&p, Some(0)), None);
    }

    #[test]
    fn posts_without_followers_are_excluded_and_reported() {
        let posts = [
            post("Patron", Platform::Instagram, "2026-01-05"),
            post("Patron", Platform::TikTok, "2026-01-05"),
            post("Patron", Platform::TikTok, "2026-01-06"),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let profiles = [profile("Patron", Platform::Instagram, Some(10_000))];
        let rated = rate_posts(&refs, &follower_lookup(&profiles));

        let exclusions = er_exclusions(&rated);
        assert_eq!(
            exclusions,
            vec![ErExclusion {
                brand: "Patron".to_string(),
                platform: Platform::TikTok,
                posts: 2,
            }]
        );

        let tiktok: Vec<RatedPost<'_>> = rated
            .iter()
            .copied()
            .filter(|r| r.post.platform == Platform::TikTok)
            .collect();
        let stats = engagement_stats(&tiktok, None, None);
        assert_eq!(stats.posts, 2);
        assert_eq!(stats.excluded_posts, 2);
        assert_eq!(stats.avg_engagement_rate, None);
        assert!(stats.avg_likes > 0.0);
    }

    #[test]
    fn largest_usable_follower_count_wins() {
        let profiles = [
            profile("Patron", Platform::Instagram, Some(500)),
            profile("Patron", Platform::Instagram, Some(2_000)),
            profile("Patron", Platform::Instagram, None),
        ];
        let lookup = follower_lookup(&profiles);
        let chosen = lookup[&("Patron".to_string(), Platform::Instagram)];
        assert_eq!(chosen.followers, Some(2_000));
    }

    #[test]
    fn top_posts_are_sorted_by_rate() {
        let mut low = post("Patron", Platform::Instagram, "2026-01-05");
        low.likes = 10;
        let mut high = post("Patron", Platform::Instagram, "2026-01-06");
        high.likes = 900;
        high.post_type = PostType::Carousel;
        let posts = [low, high];
        let refs: Vec<&Post> = posts.iter().collect();
        let profiles = [profile("Patron", Platform::Instagram, Some(10_000))];
        let rated = rate_posts(&refs, &follower_lookup(&profiles));

        let stats = engagement_stats(&rated, Some(&profiles[0]), None);
        assert_eq!(stats.top_posts[0].post_date, posts[1].post_date);
        assert_eq!(stats.er_by_post_type.len(), 2);
        assert_eq!(stats.followers, Some(10_000));
        assert_eq!(stats.avg_engagement_rate, Some(4.75));
    }
}
