//! Predicate applied to posts and profiles before analysis.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use cuervo_core::{BrandProfile, Platform, Post, PostType};
use serde::{Deserialize, Serialize};

/// Restricts the dataset by brand, platform, post type and date range.
///
/// Empty sets mean "no restriction". Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFilter {
    pub brands: BTreeSet<String>,
    pub platforms: BTreeSet<Platform>,
    pub post_types: BTreeSet<PostType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl PostFilter {
    #[must_use]
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands.extend(brands.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms.extend(platforms);
        self
    }

    #[must_use]
    pub fn with_post_types(mut self, post_types: impl IntoIterator<Item = PostType>) -> Self {
        self.post_types.extend(post_types);
        self
    }

    #[must_use]
    pub fn between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Whether `brand` passes the brand restriction, ignoring case.
    #[must_use]
    pub fn admits_brand(&self, brand: &str) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|b| b.eq_ignore_ascii_case(brand))
    }

    fn platform_ok(&self, platform: Platform) -> bool {
        self.platforms.is_empty() || self.platforms.contains(&platform)
    }

    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        self.admits_brand(&post.brand)
            && self.platform_ok(post.platform)
            && (self.post_types.is_empty() || self.post_types.contains(&post.post_type))
            && self.from.is_none_or(|from| post.post_date >= from)
            && self.to.is_none_or(|to| post.post_date <= to)
    }

    /// Profiles are period snapshots, so only brand and platform apply.
    #[must_use]
    pub fn matches_profile(&self, profile: &BrandProfile) -> bool {
        self.admits_brand(&profile.brand) && self.platform_ok(profile.platform)
    }

    /// Platforms this filter lets through, in declaration order.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .iter()
            .copied()
            .filter(|&p| self.platform_ok(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{post, profile};

    #[test]
    fn empty_filter_matches_everything() {
        let filter = PostFilter::default();
        assert!(filter.matches(&post("Patron", Platform::TikTok, "2026-01-05")));
        assert_eq!(filter.platforms(), vec![Platform::Instagram, Platform::TikTok]);
    }

    #[test]
    fn brand_match_ignores_case() {
        let filter = PostFilter::default().with_brands(["jose cuervo"]);
        assert!(filter.matches(&post("Jose Cuervo", Platform::Instagram, "2026-01-05")));
        assert!(!filter.matches(&post("Patron", Platform::Instagram, "2026-01-05")));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filter = PostFilter::default().between(
            NaiveDate::from_ymd_opt(2026, 1, 5),
            NaiveDate::from_ymd_opt(2026, 1, 11),
        );
        assert!(filter.matches(&post("Patron", Platform::Instagram, "2026-01-05")));
        assert!(filter.matches(&post("Patron", Platform::Instagram, "2026-01-11")));
        assert!(!filter.matches(&post("Patron", Platform::Instagram, "2026-01-12")));
    }

    #[test]
    fn post_type_and_platform_restrict_posts_but_profiles_ignore_type() {
        let filter = PostFilter::default()
            .with_platforms([Platform::Instagram])
            .with_post_types([PostType::Carousel]);
        let reel = post("Patron", Platform::Instagram, "2026-01-05");
        assert!(!filter.matches(&reel));
        assert!(filter.matches_profile(&profile("Patron", Platform::Instagram, Some(1000))));
        assert!(!filter.matches_profile(&profile("Patron", Platform::TikTok, Some(1000))));
    }
}
