//! End-to-end analysis runs over the seeded demo dataset.

use std::collections::BTreeMap;

use cuervo_analysis::{
    run_analysis, AnalysisOptions, AnalysisResult, Dataset, Frequency, PostFilter, Targets,
};
use cuervo_core::{BrandProfile, BrandRegistry, Platform, Post};
use cuervo_import::{generate_demo, BenchmarkMetrics, DEFAULT_SEED};

const FOCAL: &str = "Jose Cuervo";

fn registry() -> BrandRegistry {
    BrandRegistry::builtin().expect("builtin brand table parses")
}

fn analyze(posts: &[Post], profiles: &[BrandProfile], filter: &PostFilter) -> AnalysisResult {
    let registry = registry();
    let targets = Targets::default();
    let benchmark: BTreeMap<String, BenchmarkMetrics> = BTreeMap::new();
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
            focal_brand: FOCAL,
        },
    )
}

fn demo() -> (Vec<Post>, Vec<BrandProfile>) {
    generate_demo(DEFAULT_SEED, &registry())
}

#[test]
fn demo_data_rates_every_post() {
    let (posts, profiles) = demo();
    let result = analyze(&posts, &profiles, &PostFilter::default());

    assert_eq!(result.total_posts, posts.len());
    assert!(
        result.er_exclusions.is_empty(),
        "expected no exclusions, got: {:?}",
        result.er_exclusions
    );
    let stats = result
        .engagement_for(FOCAL, Platform::Instagram)
        .expect("focal brand has Instagram stats");
    assert_eq!(stats.rated_posts, stats.posts);
    assert!(stats.avg_engagement_rate.is_some());
    assert!(!result.recommendations.is_empty());
}

#[test]
fn configured_brand_without_data_reports_no_data() {
    let (posts, profiles) = demo();
    let result = analyze(&posts, &profiles, &PostFilter::default());

    assert!(result.brands.iter().any(|b| b == "El Jimador"));
    assert_eq!(
        result.frequency_for("El Jimador", Platform::TikTok),
        &Frequency::NoData
    );
    assert_eq!(
        result.frequency_for("Nobody Tequila", Platform::Instagram),
        &Frequency::NoData
    );
    assert!(result.engagement_for("El Jimador", Platform::TikTok).is_none());
}

#[test]
fn profile_without_posts_is_measured_at_zero() {
    let (mut posts, profiles) = demo();
    posts.retain(|p| !(p.brand == "Patron" && p.platform == Platform::TikTok));
    let result = analyze(&posts, &profiles, &PostFilter::default());

    let freq = result.frequency_for("Patron", Platform::TikTok);
    assert!(
        matches!(freq, Frequency::Measured(s) if s.total_posts == 0),
        "expected Measured with zero posts, got: {freq:?}"
    );
    assert_eq!(freq.posts_per_week(), Some(0.0));
}

#[test]
fn posts_without_followers_are_excluded_and_reported() {
    let (posts, mut profiles) = demo();
    profiles.retain(|p| !(p.brand == "Casamigos" && p.platform == Platform::Instagram));
    let expected = posts
        .iter()
        .filter(|p| p.brand == "Casamigos" && p.platform == Platform::Instagram)
        .count();

    let result = analyze(&posts, &profiles, &PostFilter::default());
    let exclusion = result
        .er_exclusions
        .iter()
        .find(|e| e.brand == "Casamigos" && e.platform == Platform::Instagram)
        .expect("exclusion reported");
    assert_eq!(exclusion.posts, expected);
    assert_eq!(
        result.avg_engagement_rate("Casamigos", Platform::Instagram),
        None
    );
    // Counts still include the unrated posts.
    let stats = result
        .engagement_for("Casamigos", Platform::Instagram)
        .expect("posts still produce stats");
    assert_eq!(stats.posts, expected);
    assert_eq!(stats.excluded_posts, expected);
}

#[test]
fn brand_and_platform_filter_narrow_the_result() {
    let (posts, profiles) = demo();
    let filter = PostFilter::default()
        .with_brands([FOCAL, "Patron"])
        .with_platforms([Platform::TikTok]);
    let result = analyze(&posts, &profiles, &filter);

    assert_eq!(result.brands, vec![FOCAL.to_string(), "Patron".to_string()]);
    assert_eq!(result.platforms, vec![Platform::TikTok]);
    assert!(result.engagement_for(FOCAL, Platform::Instagram).is_none());
    let expected = posts
        .iter()
        .filter(|p| (p.brand == FOCAL || p.brand == "Patron") && p.platform == Platform::TikTok)
        .count();
    assert_eq!(result.total_posts, expected);
}

#[test]
fn repeated_runs_are_identical() {
    let (posts, profiles) = demo();
    let filter = PostFilter::default();
    let first = analyze(&posts, &profiles, &filter);
    let second = analyze(&posts, &profiles, &filter);
    assert_eq!(first, second);
}

#[test]
fn result_serializes_to_json() {
    let (posts, profiles) = demo();
    let result = analyze(&posts, &profiles, &PostFilter::default());
    let json = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(json["focal_brand"], FOCAL);
    assert_eq!(json["frequency"]["El Jimador"]["Instagram"]["status"], "no_data");
    assert!(json["recommendations"].as_array().is_some_and(|r| !r.is_empty()));
}
