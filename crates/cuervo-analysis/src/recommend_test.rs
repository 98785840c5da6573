use std::collections::BTreeMap;

use cuervo_core::{BrandProfile, BrandRegistry, ContentTheme, CtaType, Post};

use super::*;
use crate::filter::PostFilter;
use crate::pipeline::{run_analysis, AnalysisOptions, Dataset};
use crate::testutil::{date, post, profile};

const FOCAL: &str = "Jose Cuervo";

fn registry() -> BrandRegistry {
    BrandRegistry::builtin().expect("builtin brand table parses")
}

/// Two-week window: Jose Cuervo posts one Reel a week on Instagram, Patron
/// posts four a week with carousels mixed in and much higher engagement.
fn dataset() -> (Vec<Post>, Vec<BrandProfile>) {
    let mut posts = vec![
        post(FOCAL, Platform::Instagram, "2026-01-05"),
        post(FOCAL, Platform::Instagram, "2026-01-12"),
    ];
    for day in [5, 6, 7, 8, 12, 13, 14, 15] {
        let mut p = post("Patron", Platform::Instagram, &format!("2026-01-{day:02}"));
        p.likes = 900;
        p.cta_type = CtaType::TagAFriend;
        if day % 2 == 0 {
            p.post_type = PostType::Carousel;
        }
        posts.push(p);
    }
    let profiles = vec![
        profile(FOCAL, Platform::Instagram, Some(10_000)),
        profile("Patron", Platform::Instagram, Some(10_000)),
    ];
    (posts, profiles)
}

fn window() -> PostFilter {
    PostFilter::default()
        .with_platforms([Platform::Instagram])
        .between(Some(date("2026-01-05")), Some(date("2026-01-18")))
}

fn analyze(posts: &[Post], profiles: &[BrandProfile], focal: &str) -> AnalysisResult {
    analyze_filtered(posts, profiles, focal, &window())
}

fn analyze_filtered(
    posts: &[Post],
    profiles: &[BrandProfile],
    focal: &str,
    filter: &PostFilter,
) -> AnalysisResult {
    let registry = registry();
    let targets = Targets::default();
    let benchmark = BTreeMap::new();
    run_analysis(
        Dataset {
            posts,
            profiles,
            benchmark: &benchmark,
        },
        filter,
        &AnalysisOptions {
            registry: &registry,
            targets: &targets,
            focal_brand: focal,
        },
    )
}

fn find(recs: &[Recommendation], brand: &str, category: Category) -> Option<Recommendation> {
    recs.iter()
        .find(|r| r.brand == brand && r.category == category)
        .cloned()
}

#[test]
fn low_cadence_and_engagement_are_high_priority() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    let recs = &result.recommendations;

    let freq = find(recs, FOCAL, Category::PostingFrequency).expect("frequency rec");
    assert_eq!(freq.priority, Priority::High);
    assert_eq!(freq.platform, Some(Platform::Instagram));
    assert!(freq.insight.contains("1x/week"), "got: {}", freq.insight);

    let er = find(recs, FOCAL, Category::EngagementGap).expect("engagement rec");
    assert_eq!(er.priority, Priority::High);
    assert!(er.insight.contains("Patron"), "got: {}", er.insight);
}

#[test]
fn missing_formats_and_competitor_cta_are_medium() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    let recs = &result.recommendations;

    let formats = find(recs, FOCAL, Category::ContentDiversification).expect("format rec");
    assert_eq!(formats.priority, Priority::Medium);
    assert!(formats.insight.contains("Carousel"), "got: {}", formats.insight);

    let cta = find(recs, FOCAL, Category::CaptionStrategy).expect("cta rec");
    assert!(cta.recommendation.contains("Tag a friend"), "got: {}", cta.recommendation);
}

#[test]
fn recommendations_are_sorted_by_priority() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    let priorities: Vec<Priority> = result.recommendations.iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
    assert!(priorities.contains(&Priority::Low));
}

#[test]
fn unknown_focal_brand_gets_only_target_rules() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, "Milagro");
    assert!(result.recommendations.iter().all(|r| r.brand != "Milagro"));
    assert!(find(&result.recommendations, FOCAL, Category::PostingFrequency).is_none());
    assert!(find(&result.recommendations, FOCAL, Category::PostingCadence).is_some());
}

#[test]
fn cadence_below_target_range() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    let cadence = find(&result.recommendations, FOCAL, Category::PostingCadence).unwrap();
    assert_eq!(cadence.priority, Priority::Medium);
    // Patron sits exactly at 4/week, inside the Instagram range.
    assert!(find(&result.recommendations, "Patron", Category::PostingCadence).is_none());
}

#[test]
fn reel_share_under_target_is_flagged() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    // Patron: 4 of 8 posts are Reels, exactly 50%.
    assert!(find(&result.recommendations, "Patron", Category::FormatMix).is_none());

    let mut posts = posts;
    for p in posts.iter_mut().filter(|p| p.brand == "Patron").take(1) {
        p.post_type = PostType::StaticImage;
    }
    let result = analyze(&posts, &profiles, FOCAL);
    let rec = find(&result.recommendations, "Patron", Category::FormatMix).unwrap();
    assert!(rec.insight.contains("37.5%"), "got: {}", rec.insight);
}

#[test]
fn content_mix_gaps_follow_the_pillar_targets() {
    let (mut posts, profiles) = dataset();
    for p in posts.iter_mut().filter(|p| p.brand == FOCAL) {
        p.content_theme = ContentTheme::MemeHumor;
    }
    let result = analyze(&posts, &profiles, FOCAL);
    let mix: Vec<&Recommendation> = result
        .recommendations
        .iter()
        .filter(|r| r.brand == FOCAL && r.category == Category::ContentMix)
        .collect();

    // 100% Entertain: over by 60pp, and every other pillar under target.
    assert_eq!(mix.len(), 4);
    assert!(mix.iter().any(|r| r.recommendation.starts_with("Reduce Entertain")));
    assert!(mix.iter().any(|r| r.recommendation.starts_with("Increase Educate")));
    let convince = mix
        .iter()
        .find(|r| r.insight.starts_with("Convince"))
        .unwrap();
    // 15pp short with a 5pp gap threshold.
    assert_eq!(convince.priority, Priority::Medium);
}

#[test]
fn engagement_target_scales_priority_with_the_gap() {
    let (posts, profiles) = dataset();
    let result = analyze(&posts, &profiles, FOCAL);
    // Jose Cuervo: 100 engagements on 10k followers is 1% against a 3% target.
    let rec = find(&result.recommendations, FOCAL, Category::EngagementTarget).unwrap();
    assert_eq!(rec.priority, Priority::High);
    // Patron: 920 engagements on 10k followers is 9.2%.
    assert!(find(&result.recommendations, "Patron", Category::EngagementTarget).is_none());
}

#[test]
fn post_type_filter_silences_format_mix_rules() {
    let (mut posts, profiles) = dataset();
    // One focal carousel so both brands survive a carousel-only filter.
    posts[1].post_type = PostType::Carousel;
    let result = analyze_filtered(
        &posts,
        &profiles,
        FOCAL,
        &window().with_post_types([PostType::Carousel]),
    );
    let recs = &result.recommendations;

    assert!(!recs.is_empty());
    assert!(
        recs.iter().all(|r| r.category != Category::FormatMix
            && r.category != Category::ContentDiversification),
        "expected no format rules, got: {recs:?}"
    );
    assert!(find(recs, FOCAL, Category::PostingFrequency).is_some());
}
