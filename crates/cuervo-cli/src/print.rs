//! Plain-text tables for terminal output.

use cuervo_analysis::{AnalysisResult, Frequency, Priority, Recommendation};
use cuervo_import::{DataMode, ImportSummary};
use cuervo_reports::ReportIndex;

/// Format an optional number for display, returning `"\u{2014}"` when `None`.
fn fmt_opt(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| "\u{2014}".to_string(), |v| format!("{v}{suffix}"))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn print_import_summary(mode: &DataMode, summary: &ImportSummary) {
    println!(
        "source: {} | {} posts, {} profiles, {} files imported, {} rejected",
        mode.label(),
        summary.posts,
        summary.profiles,
        summary.files_imported.len(),
        summary.files_rejected.len()
    );
    if summary.stories_excluded > 0 || summary.rows_skipped > 0 {
        println!(
            "excluded {} stories; skipped {} rows",
            summary.stories_excluded, summary.rows_skipped
        );
    }
    if !summary.unresolved_handles.is_empty() {
        let handles: Vec<&str> = summary.unresolved_handles.iter().map(String::as_str).collect();
        println!("unresolved handles: {}", handles.join(", "));
    }
    if summary.warning_count() > 0 {
        println!("{} warnings:", summary.warning_count());
        for warning in &summary.warnings {
            println!("  {warning}");
        }
    }
}

pub(crate) fn print_report_counts(index: &ReportIndex) {
    if index.is_empty() {
        return;
    }
    let counts: Vec<String> = index
        .counts()
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(t, n)| format!("{} {n}", t.label()))
        .collect();
    println!("qualitative reports: {}", counts.join(", "));
}

/// One row per brand × platform with posts, cadence and average ER.
pub(crate) fn print_overview(result: &AnalysisResult) {
    if let Some(window) = &result.window {
        println!(
            "window: {} to {} ({} weeks)",
            window.from, window.to, window.weeks
        );
    }
    println!();
    println!(
        "{:<16}{:<11}{:>7}{:>10}{:>10}",
        "BRAND", "PLATFORM", "POSTS", "PER WEEK", "AVG ER"
    );
    for brand in &result.brands {
        for &platform in &result.platforms {
            let (posts, per_week) = match result.frequency_for(brand, platform) {
                Frequency::NoData => continue,
                Frequency::Measured(stats) => (stats.total_posts, stats.posts_per_week),
            };
            println!(
                "{:<16}{:<11}{:>7}{:>10}{:>10}",
                truncate(brand, 15),
                platform.label(),
                posts,
                per_week,
                fmt_opt(result.avg_engagement_rate(brand, platform), "%")
            );
        }
    }
    for exclusion in &result.er_exclusions {
        println!(
            "note: {} post(s) for {} on {} have no follower count and are not rated",
            exclusion.posts, exclusion.brand, exclusion.platform
        );
    }
    println!();
}

/// Print recommendations. With `high_limit`, only the first `n` High ones.
pub(crate) fn print_recommendations(recs: &[Recommendation], high_limit: Option<usize>) {
    let shown: Vec<&Recommendation> = match high_limit {
        Some(n) => recs
            .iter()
            .filter(|r| r.priority == Priority::High)
            .take(n)
            .collect(),
        None => recs.iter().collect(),
    };
    if shown.is_empty() {
        println!("no recommendations");
        return;
    }
    println!("recommendations:");
    for rec in shown {
        let platform = rec.platform.map_or("all", |p| p.label());
        println!(
            "[{:?}] {} / {:?} ({platform}): {}",
            rec.priority, rec.brand, rec.category, rec.insight
        );
        println!("    -> {}", rec.recommendation);
    }
}
