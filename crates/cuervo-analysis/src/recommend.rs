//! Recommendations derived from a finished [`AnalysisResult`].
//!
//! Two rule sets run in order:
//!
//! - competitive rules compare the focal brand with every other brand that
//!   posted in the window;
//! - target rules compare every brand with the fixed KPI [`Targets`].
//!
//! The combined list is sorted by priority; rules of equal priority keep the
//! order they were emitted in.

use std::collections::{BTreeMap, BTreeSet};

use cuervo_core::{Platform, PostType};
use serde::Serialize;

use crate::pipeline::AnalysisResult;
use crate::tally::{mean, pct, round_to};
use crate::targets::{Pillar, Targets};

/// Focal cadence below this share of the competitor average is flagged.
const FREQUENCY_GAP: f64 = 0.8;
/// Focal ER below this share of the best competitor is flagged.
const ER_GAP: f64 = 0.7;
/// Focal collab share below this share of the competitor average is flagged.
const COLLAB_GAP: f64 = 0.5;
/// Collab lift in percentage points worth calling out.
const COLLAB_LIFT_PP: f64 = 0.5;
/// Competitor hashtag use above this multiple of the focal brand's.
const HASHTAG_MULTIPLE: f64 = 1.5;
const PEAK_HOURS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Posting Frequency")]
    PostingFrequency,
    #[serde(rename = "Content Diversification")]
    ContentDiversification,
    #[serde(rename = "Engagement Gap")]
    EngagementGap,
    #[serde(rename = "Creator Strategy")]
    CreatorStrategy,
    #[serde(rename = "Hashtag Strategy")]
    HashtagStrategy,
    #[serde(rename = "Caption Strategy")]
    CaptionStrategy,
    #[serde(rename = "Posting Schedule")]
    PostingSchedule,
    #[serde(rename = "Engagement Target")]
    EngagementTarget,
    #[serde(rename = "Format Mix")]
    FormatMix,
    #[serde(rename = "Posting Cadence")]
    PostingCadence,
    #[serde(rename = "Content Mix")]
    ContentMix,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Brand the recommendation is addressed to.
    pub brand: String,
    pub category: Category,
    /// `None` when the advice applies to both platforms.
    pub platform: Option<Platform>,
    pub priority: Priority,
    pub insight: String,
    pub recommendation: String,
}

struct Emitter<'a> {
    brand: &'a str,
    out: Vec<Recommendation>,
}

impl Emitter<'_> {
    fn push(
        &mut self,
        category: Category,
        platform: Option<Platform>,
        priority: Priority,
        insight: String,
        recommendation: String,
    ) {
        self.out.push(Recommendation {
            brand: self.brand.to_string(),
            category,
            platform,
            priority,
            insight,
            recommendation,
        });
    }
}

fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// All recommendations for `result`, highest priority first.
#[must_use]
pub fn recommend(result: &AnalysisResult, focal: &str, targets: &Targets) -> Vec<Recommendation> {
    let mut recs = competitive(result, focal);
    for brand in &result.brands {
        recs.extend(against_targets(result, brand, targets));
    }
    recs.sort_by_key(|r| r.priority);
    recs
}

/// Rules comparing `focal` with the other brands that posted.
#[must_use]
pub fn competitive(result: &AnalysisResult, focal: &str) -> Vec<Recommendation> {
    if !result.themes.contains_key(focal) {
        tracing::debug!(brand = %focal, "focal brand has no posts; skipping competitive rules");
        return Vec::new();
    }
    let competitors: Vec<&str> = result.brands_with_posts().filter(|b| *b != focal).collect();
    if competitors.is_empty() {
        return Vec::new();
    }
    let mut e = Emitter {
        brand: focal,
        out: Vec::new(),
    };

    for &platform in &result.platforms {
        posting_frequency_gap(result, focal, &competitors, platform, &mut e);
    }
    if !format_filtered(result) {
        for &platform in &result.platforms {
            content_type_gap(result, focal, &competitors, platform, &mut e);
        }
    }
    for &platform in &result.platforms {
        engagement_gap(result, focal, &competitors, platform, &mut e);
    }
    creator_gap(result, focal, &competitors, &mut e);
    hashtag_gap(result, focal, &competitors, &mut e);
    for &platform in &result.platforms {
        cta_gap(result, focal, &competitors, platform, &mut e);
    }
    for &platform in &result.platforms {
        peak_hours(result, platform, &mut e);
    }
    e.out
}

/// A post-type filter hides formats on purpose, so rules about the format
/// mix would only restate the filter.
fn format_filtered(result: &AnalysisResult) -> bool {
    !result.filter.post_types.is_empty()
}

fn posting_frequency_gap(
    result: &AnalysisResult,
    focal: &str,
    competitors: &[&str],
    platform: Platform,
    e: &mut Emitter<'_>,
) {
    let ours = result
        .frequency_for(focal, platform)
        .posts_per_week()
        .unwrap_or(0.0);
    let Some(avg) = mean(
        competitors
            .iter()
            .filter_map(|b| result.frequency_for(b, platform).posts_per_week()),
    ) else {
        return;
    };
    if avg > 0.0 && ours < avg * FREQUENCY_GAP {
        let avg = round_to(avg, 1);
        e.push(
            Category::PostingFrequency,
            Some(platform),
            Priority::High,
            format!("{focal} posts {ours}x/week on {platform} vs. competitor avg of {avg}x/week"),
            format!(
                "Increase {platform} posting frequency to at least {avg}x/week to maintain visibility"
            ),
        );
    }
}

fn content_type_gap(
    result: &AnalysisResult,
    focal: &str,
    competitors: &[&str],
    platform: Platform,
    e: &mut Emitter<'_>,
) {
    let types = |brand: &str| -> BTreeSet<PostType> {
        result
            .frequency_for(brand, platform)
            .stats()
            .map(|s| s.by_post_type.keys().copied().collect())
            .unwrap_or_default()
    };
    let ours = types(focal);
    let missing: BTreeSet<PostType> = competitors
        .iter()
        .flat_map(|b| types(b))
        .filter(|t| !ours.contains(t))
        .collect();
    if missing.is_empty() {
        return;
    }
    let list = join(&missing);
    e.push(
        Category::ContentDiversification,
        Some(platform),
        Priority::Medium,
        format!("{focal} is not using these content types on {platform}: {list}"),
        format!("Test {list} content; competitors are finding success with these formats"),
    );
}

fn engagement_gap(
    result: &AnalysisResult,
    focal: &str,
    competitors: &[&str],
    platform: Platform,
    e: &mut Emitter<'_>,
) {
    let Some(ours) = result.avg_engagement_rate(focal, platform) else {
        return;
    };
    let best = competitors
        .iter()
        .filter_map(|b| result.avg_engagement_rate(b, platform).map(|er| (*b, er)))
        .max_by(|a, b| a.1.total_cmp(&b.1));
    let Some((leader, best_er)) = best else {
        return;
    };
    if best_er > 0.0 && ours < best_er * ER_GAP {
        e.push(
            Category::EngagementGap,
            Some(platform),
            Priority::High,
            format!("{focal}'s avg ER ({ours}%) trails {leader} ({best_er}%) on {platform}"),
            format!("Study {leader}'s top-performing content and adapt successful patterns"),
        );
    }
}

fn creator_gap(result: &AnalysisResult, focal: &str, competitors: &[&str], e: &mut Emitter<'_>) {
    let ours = result.creators.get(focal).map_or(0.0, |c| c.collab_pct);
    let avg = mean(
        competitors
            .iter()
            .filter_map(|b| result.creators.get(*b).map(|c| c.collab_pct)),
    )
    .unwrap_or(0.0);
    if avg > 0.0 && ours < avg * COLLAB_GAP {
        let avg = round_to(avg, 1);
        e.push(
            Category::CreatorStrategy,
            None,
            Priority::High,
            format!("{focal} collab rate ({ours}%) is well below competitor avg ({avg}%)"),
            "Invest in creator partnerships, especially micro-creators (10K-100K followers) \
             resonating with Gen Z"
                .to_string(),
        );
    }

    let lifted = competitors.iter().find_map(|b| {
        result
            .creators
            .get(*b)
            .and_then(|c| c.collab_engagement_lift)
            .filter(|&lift| lift > COLLAB_LIFT_PP)
            .map(|lift| (*b, lift))
    });
    if let Some((brand, lift)) = lifted {
        e.push(
            Category::CreatorStrategy,
            None,
            Priority::Medium,
            format!("{brand} sees +{lift}pp ER lift from creator collabs vs. brand-only content"),
            "Creator collabs outperform brand content across the category; prioritize partnerships"
                .to_string(),
        );
    }
}

fn hashtag_gap(result: &AnalysisResult, focal: &str, competitors: &[&str], e: &mut Emitter<'_>) {
    let ours = result
        .hashtags
        .get(focal)
        .map_or(0.0, |h| h.avg_hashtags_per_post);
    let heavier = competitors.iter().find_map(|b| {
        result
            .hashtags
            .get(*b)
            .map(|h| h.avg_hashtags_per_post)
            .filter(|&theirs| theirs > ours * HASHTAG_MULTIPLE)
            .map(|theirs| (*b, theirs))
    });
    if let Some((brand, theirs)) = heavier {
        e.push(
            Category::HashtagStrategy,
            None,
            Priority::Low,
            format!("{brand} uses {theirs} hashtags/post vs {focal}'s {ours}"),
            "Test increasing hashtag count to improve discoverability".to_string(),
        );
    }
}

fn cta_gap(
    result: &AnalysisResult,
    focal: &str,
    competitors: &[&str],
    platform: Platform,
    e: &mut Emitter<'_>,
) {
    let Some(ours) = result.avg_engagement_rate(focal, platform) else {
        return;
    };
    let found = competitors.iter().find_map(|b| {
        let theirs = result.avg_engagement_rate(b, platform)?;
        if theirs <= ours {
            return None;
        }
        result
            .captions_for(b, platform)
            .and_then(|c| c.top_cta())
            .map(|cta| (*b, cta))
    });
    if let Some((brand, cta)) = found {
        e.push(
            Category::CaptionStrategy,
            Some(platform),
            Priority::Medium,
            format!("{brand} (higher ER) heavily uses '{cta}' CTAs on {platform}"),
            format!("Incorporate more '{cta}' CTAs in {platform} captions"),
        );
    }
}

fn peak_hours(result: &AnalysisResult, platform: Platform, e: &mut Emitter<'_>) {
    let mut totals: BTreeMap<u32, usize> = BTreeMap::new();
    for freq in result.frequency.values().filter_map(|m| m.get(&platform)) {
        for slot in freq.stats().map(|s| s.best_hours.as_slice()).unwrap_or_default() {
            *totals.entry(slot.value).or_default() += slot.count;
        }
    }
    let mut ranked: Vec<(u32, usize)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if ranked.is_empty() {
        return;
    }
    let hours = join(
        ranked
            .iter()
            .take(PEAK_HOURS)
            .map(|(hour, _)| format!("{hour}:00")),
    );
    e.push(
        Category::PostingSchedule,
        Some(platform),
        Priority::Low,
        format!("Category-wide peak posting hours on {platform}: {hours}"),
        format!("Align {platform} posting schedule to peak hours: {hours}"),
    );
}

/// Rules comparing one brand with the fixed KPI targets.
#[must_use]
pub fn against_targets(
    result: &AnalysisResult,
    brand: &str,
    targets: &Targets,
) -> Vec<Recommendation> {
    let mut e = Emitter {
        brand,
        out: Vec::new(),
    };

    for &platform in &result.platforms {
        if let Some(er) = result.avg_engagement_rate(brand, platform) {
            let target = targets.engagement_rate_pct;
            if er < target {
                let priority = if er < target / 2.0 {
                    Priority::High
                } else {
                    Priority::Medium
                };
                e.push(
                    Category::EngagementTarget,
                    Some(platform),
                    priority,
                    format!("{brand} averages {er}% ER on {platform} against a {target}% target"),
                    format!("Double down on the {platform} formats and themes with the highest ER"),
                );
            }
        }

        let Some(stats) = result.frequency_for(brand, platform).stats() else {
            continue;
        };

        if platform == Platform::Instagram && stats.total_posts > 0 && !format_filtered(result) {
            let reels = stats.by_post_type.get(&PostType::Reel).copied().unwrap_or(0);
            let share = pct(reels, stats.total_posts);
            let target = targets.instagram_reel_share_pct;
            if share < target {
                e.push(
                    Category::FormatMix,
                    Some(platform),
                    Priority::Medium,
                    format!(
                        "Reels are {share}% of {brand}'s Instagram posts against a {target}% target"
                    ),
                    "Shift Instagram output toward Reels".to_string(),
                );
            }
        }

        let cadence = targets.cadence(platform);
        let ppw = stats.posts_per_week;
        if ppw < cadence.min {
            e.push(
                Category::PostingCadence,
                Some(platform),
                Priority::Medium,
                format!(
                    "{brand} posts {ppw}x/week on {platform}, below the {}-{} target",
                    cadence.min, cadence.max
                ),
                format!("Raise {platform} cadence to at least {}x/week", cadence.min),
            );
        } else if ppw > cadence.max {
            e.push(
                Category::PostingCadence,
                Some(platform),
                Priority::Low,
                format!(
                    "{brand} posts {ppw}x/week on {platform}, above the {}-{} target",
                    cadence.min, cadence.max
                ),
                format!("Trade some {platform} volume for fewer, stronger posts"),
            );
        }
    }

    content_mix_gaps(result, brand, targets, &mut e);
    e.out
}

fn content_mix_gaps(
    result: &AnalysisResult,
    brand: &str,
    targets: &Targets,
    e: &mut Emitter<'_>,
) {
    let Some(themes) = result.themes.get(brand) else {
        return;
    };
    let mut pillars: BTreeMap<Pillar, usize> = BTreeMap::new();
    for c in &themes.distribution {
        if let Some(p) = Pillar::of(c.value) {
            *pillars.entry(p).or_default() += c.count;
        }
    }
    let mapped: usize = pillars.values().sum();
    if mapped == 0 {
        return;
    }

    let gap = targets.mix_gap_pp;
    for pillar in Pillar::ALL {
        let share = pct(pillars.get(&pillar).copied().unwrap_or(0), mapped);
        let target = targets.content_mix.target(pillar);
        let diff = share - target;
        if diff.abs() <= gap {
            continue;
        }
        let priority = if diff.abs() > gap * 2.0 {
            Priority::Medium
        } else {
            Priority::Low
        };
        let action = if diff < 0.0 { "Increase" } else { "Reduce" };
        e.push(
            Category::ContentMix,
            None,
            priority,
            format!("{pillar} content is {share}% of {brand}'s mix against a {target}% target"),
            format!("{action} {pillar} content toward {target}% of the mix"),
        );
    }
}

#[cfg(test)]
#[path = "recommend_test.rs"]
mod tests;
