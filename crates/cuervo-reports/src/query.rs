//! Cross-report lookups over a [`ReportIndex`].
//!
//! Reference brands (inspiration accounts outside the category) can be
//! excluded from profile-level results by passing the brand registry.

use cuervo_core::BrandRegistry;
use serde::Serialize;

use crate::store::ReportIndex;
use crate::types::{
    BrandMention, CreatorArchetype, HashtagAnalysis, HowToWin, Nopd, QualitativeReport,
    ReportType, SponsorshipSuggestion, TitledBlock,
};

/// An item together with the report it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sourced<'a, T: ?Sized> {
    pub report_type: ReportType,
    pub identifier: &'a str,
    pub item: &'a T,
}

fn excluded(report: &QualitativeReport, reference: Option<&BrandRegistry>) -> bool {
    report.report_type().is_profile()
        && reference.is_some_and(|r| r.is_reference(&report.identifier))
}

fn sourced<'a, T: ?Sized>(report: &'a QualitativeReport, item: &'a T) -> Sourced<'a, T> {
    Sourced {
        report_type: report.report_type(),
        identifier: &report.identifier,
        item,
    }
}

/// Audience profiles with at least one filled quadrant.
#[must_use]
pub fn audience_profiles<'a>(
    index: &'a ReportIndex,
    exclude_reference: Option<&BrandRegistry>,
) -> Vec<Sourced<'a, Nopd>> {
    index
        .iter()
        .filter(|(_, r)| !excluded(r, exclude_reference))
        .filter_map(|(_, r)| {
            r.audience_profile()
                .filter(|n| !n.is_empty())
                .map(|n| sourced(r, n))
        })
        .collect()
}

/// "How to win" sections that have a summary or territories.
#[must_use]
pub fn how_to_win<'a>(
    index: &'a ReportIndex,
    exclude_reference: Option<&BrandRegistry>,
) -> Vec<Sourced<'a, HowToWin>> {
    index
        .iter()
        .filter(|(_, r)| !excluded(r, exclude_reference))
        .filter_map(|(_, r)| {
            r.how_to_win()
                .filter(|h| !h.is_empty())
                .map(|h| sourced(r, h))
        })
        .collect()
}

/// Brand mentions from hashtag, keyword, and news reports, flattened.
#[must_use]
pub fn brand_mentions(index: &ReportIndex) -> Vec<Sourced<'_, BrandMention>> {
    index
        .iter()
        .flat_map(|(_, r)| r.brand_mentions().iter().map(move |m| sourced(r, m)))
        .collect()
}

#[must_use]
pub fn content_trends(index: &ReportIndex) -> Vec<Sourced<'_, TitledBlock>> {
    index
        .iter()
        .filter_map(|(_, r)| r.as_conversation().map(|c| (r, c)))
        .flat_map(|(r, c)| c.content_trends.iter().map(move |t| sourced(r, t)))
        .collect()
}

#[must_use]
pub fn creator_archetypes(index: &ReportIndex) -> Vec<Sourced<'_, CreatorArchetype>> {
    index
        .iter()
        .filter_map(|(_, r)| r.as_conversation().map(|c| (r, c)))
        .flat_map(|(r, c)| c.creator_archetypes.iter().map(move |a| sourced(r, a)))
        .collect()
}

/// Hashtag analyses that carry findings, opportunities, gaps, or actions.
#[must_use]
pub fn strategic_actions(index: &ReportIndex) -> Vec<Sourced<'_, HashtagAnalysis>> {
    index
        .iter()
        .filter_map(|(_, r)| {
            r.as_conversation()
                .and_then(|c| c.hashtag_analysis.as_ref())
                .filter(|h| h.has_findings())
                .map(|h| sourced(r, h))
        })
        .collect()
}

/// Future sponsorship suggestions from profile reports, one entry per report.
#[must_use]
pub fn sponsorship_suggestions<'a>(
    index: &'a ReportIndex,
    exclude_reference: Option<&BrandRegistry>,
) -> Vec<Sourced<'a, [SponsorshipSuggestion]>> {
    index
        .iter()
        .filter(|(_, r)| !excluded(r, exclude_reference))
        .filter_map(|(_, r)| {
            r.as_profile()
                .map(|p| p.future_sponsorship_suggestions.as_slice())
                .filter(|s| !s.is_empty())
                .map(|s| sourced(r, s))
        })
        .collect()
}

/// Profile reports for reference brands only.
#[must_use]
pub fn reference_profiles<'a>(
    index: &'a ReportIndex,
    registry: &BrandRegistry,
) -> Vec<&'a QualitativeReport> {
    index
        .iter()
        .map(|(_, r)| r)
        .filter(|r| r.report_type().is_profile() && registry.is_reference(&r.identifier))
        .collect()
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
