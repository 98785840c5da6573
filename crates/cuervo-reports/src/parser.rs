//! Assembles a [`QualitativeReport`] from extracted text.

use crate::detect::detect_title;
use crate::error::ReportError;
use crate::fields::{
    parse_brand_mentions, parse_conversation_map, parse_creator_archetypes,
    parse_creator_summary, parse_executive_summary, parse_future_sponsorships,
    parse_hashtag_analysis, parse_how_to_win, parse_interesting_conversations, parse_snapshot,
    parse_sponsorships, parse_statistics, parse_titled_blocks, split_most_least,
};
use crate::nopd::parse_nopd;
use crate::sections::{split_sections, Sections};
use crate::types::{
    ConversationReport, NewsReport, ProfileReport, QualitativeReport, ReportBody, ReportType,
    TopPosts,
};

/// Parses one report export.
///
/// The report family comes from the title slide; each known section is run
/// through its extractor, and sections no extractor claims are kept in
/// `unrecognized_sections`.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] when the title matches no known report
/// family. Nothing is partially parsed in that case.
pub fn parse_report(text: &str) -> Result<QualitativeReport, ReportError> {
    let title = detect_title(text)?;
    let mut sections = split_sections(text);

    let body = match title.report_type {
        ReportType::InstagramProfile => ReportBody::InstagramProfile(profile_report(&mut sections)),
        ReportType::TiktokProfile => ReportBody::TiktokProfile(profile_report(&mut sections)),
        ReportType::InstagramHashtag => {
            ReportBody::InstagramHashtag(conversation_report(&mut sections))
        }
        ReportType::TiktokHashtag => ReportBody::TiktokHashtag(conversation_report(&mut sections)),
        ReportType::TiktokKeyword => ReportBody::TiktokKeyword(conversation_report(&mut sections)),
        ReportType::GoogleNews => ReportBody::GoogleNews(news_report(&mut sections)),
    };

    let unrecognized_sections = sections.into_remaining();
    tracing::debug!(
        report_type = %title.report_type,
        identifier = %title.identifier,
        unrecognized = unrecognized_sections.len(),
        "parsed report"
    );

    Ok(QualitativeReport {
        identifier: title.identifier,
        report_date: title.report_date,
        body,
        unrecognized_sections,
    })
}

fn profile_report(sections: &mut Sections) -> ProfileReport {
    let statistics = sections
        .take("Summary Statistics - All Posts")
        .or_else(|| sections.take("Summary Statistics"))
        .map(|t| parse_statistics(&t));

    let mut top_posts = TopPosts::default();
    if let Some(text) = sections.take("Most / Least Liked") {
        (top_posts.most_liked, top_posts.least_liked) =
            split_most_least(&text, "Most Liked", "Least Liked");
    }
    if let Some(text) = sections.take("Most / Least Engaged") {
        (top_posts.most_engaged, top_posts.least_engaged) =
            split_most_least(&text, "Most Engaged", "Least Engaged");
    }

    ProfileReport {
        audience_profile: sections.take("Audience Profile").map(|t| parse_nopd(&t)),
        snapshot: sections.take("Snapshot").map(|t| parse_snapshot(&t)),
        creator_summary: sections
            .take("Creator Summary")
            .map(|t| parse_creator_summary(&t)),
        sponsorships: sections
            .take("Sponsorship Analysis")
            .map(|t| parse_sponsorships(&t)),
        future_sponsorship_suggestions: sections
            .take("Future Sponsorship Suggestions")
            .map(|t| parse_future_sponsorships(&t))
            .unwrap_or_default(),
        engagement_analysis: sections.take("Engagement Analysis"),
        posting_analysis: sections.take("Posting Analysis"),
        statistics,
        how_to_win: sections
            .take("How to Win With This Audience")
            .map(|t| parse_how_to_win(&t)),
        top_posts,
    }
}

fn conversation_report(sections: &mut Sections) -> ConversationReport {
    ConversationReport {
        executive_summary: sections
            .take("Executive Summary")
            .map(|t| parse_executive_summary(&t)),
        audience_profile: sections.take("Audience Profile").map(|t| parse_nopd(&t)),
        hashtag_analysis: sections
            .take("Hashtag Analysis")
            .map(|t| parse_hashtag_analysis(&t)),
        interesting_conversations: sections
            .take("Interesting Conversations")
            .map(|t| parse_interesting_conversations(&t))
            .unwrap_or_default(),
        conversation_map: sections
            .take("Conversation Map")
            .map(|t| parse_conversation_map(&t)),
        content_trends: sections
            .take("Content Trends")
            .map(|t| parse_titled_blocks(&t))
            .unwrap_or_default(),
        brand_mentions: sections
            .take("Brand Mentions")
            .map(|t| parse_brand_mentions(&t))
            .unwrap_or_default(),
        in_market_campaigns: sections
            .take("In-Market Campaigns")
            .map(|t| parse_titled_blocks(&t))
            .unwrap_or_default(),
        how_to_win: sections
            .take("How to Win With This Audience")
            .map(|t| parse_how_to_win(&t)),
        creator_archetypes: sections
            .take("Creator Archetypes")
            .map(|t| parse_creator_archetypes(&t))
            .unwrap_or_default(),
    }
}

fn news_report(sections: &mut Sections) -> NewsReport {
    NewsReport {
        executive_summary: sections
            .take("Executive Summary")
            .map(|t| parse_executive_summary(&t)),
        news_analysis: sections.take("News Analysis"),
        brand_mentions: sections
            .take("Brand Mentions")
            .map(|t| parse_brand_mentions(&t))
            .unwrap_or_default(),
        trending_narratives: sections
            .take("Trending Narratives")
            .map(|t| parse_titled_blocks(&t))
            .unwrap_or_default(),
        strategic_implications: sections.take("Strategic Implications"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_DECK: &str = "\
'casamigos'
Instagram Profile Analysis Presentation
January 06, 2026
Snapshot
Followers
Following
1,100,000
310
Audience Profile
Celebrity-curious drinkers.
NEEDS
Something to bring to a party.
OBJECTIONS
Price feels high for mixing.
DESIRES
Feel part of the celebrity lifestyle.
PAIN POINTS
Hard to find at local stores.
Top Stories
Not normally part of a profile deck.
Most / Least Liked
Most Liked
Caption
House party season
Likes Count
40,210
";

    #[test]
    fn profile_deck_is_parsed_into_typed_sections() {
        let report = parse_report(PROFILE_DECK).unwrap();
        assert_eq!(report.report_type(), ReportType::InstagramProfile);
        assert_eq!(report.identifier, "casamigos");
        assert_eq!(report.report_date.as_deref(), Some("January 06, 2026"));

        let profile = report.as_profile().unwrap();
        assert_eq!(profile.snapshot.as_ref().unwrap().followers, Some(1_100_000.0));
        let nopd = profile.audience_profile.as_ref().unwrap();
        assert_eq!(nopd.needs, vec!["Something to bring to a party."]);
        assert_eq!(nopd.pain_points.len(), 1);
        let most = profile.top_posts.most_liked.as_ref().unwrap();
        assert_eq!(most.caption, "House party season");
    }

    #[test]
    fn sections_without_an_extractor_are_preserved() {
        let report = parse_report(PROFILE_DECK).unwrap();
        assert_eq!(
            report.unrecognized_sections.get("Top Stories").map(String::as_str),
            Some("Not normally part of a profile deck.")
        );
    }

    #[test]
    fn unknown_report_type_is_rejected_whole() {
        let text = "Weekly Sales Recap\nRegional Numbers\nJanuary 06, 2026\nSnapshot\nFollowers\n10\n";
        let result = parse_report(text);
        assert!(
            matches!(result, Err(ReportError::Parse(_))),
            "expected Parse, got: {result:?}"
        );
    }

    #[test]
    fn news_deck_keeps_summaries() {
        let text = "\
tequila
Google News Analysis Presentation
2026-01-20
News Analysis
Coverage focused on agave prices.
Strategic Implications
Lock in supply contracts.
Competitor Coverage
Patron launched a new bottle.
";
        let report = parse_report(text).unwrap();
        let ReportBody::GoogleNews(news) = &report.body else {
            panic!("expected news body, got: {:?}", report.body);
        };
        assert_eq!(
            news.news_analysis.as_deref(),
            Some("Coverage focused on agave prices.")
        );
        assert_eq!(
            news.strategic_implications.as_deref(),
            Some("Lock in supply contracts.")
        );
        assert!(report.unrecognized_sections.contains_key("Competitor Coverage"));
    }

    #[test]
    fn report_json_is_tagged_by_type() {
        let report = parse_report(PROFILE_DECK).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["body"]["report_type"], "instagram_profile");
        let back: QualitativeReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }
}
