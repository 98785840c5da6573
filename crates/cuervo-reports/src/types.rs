//! Typed qualitative report records.
//!
//! A [`QualitativeReport`] is one parsed export. Its [`ReportBody`] is a
//! tagged variant per report family; sections the parser does not extract
//! are kept verbatim in `unrecognized_sections`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The six report families the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    InstagramProfile,
    TiktokProfile,
    InstagramHashtag,
    TiktokHashtag,
    TiktokKeyword,
    GoogleNews,
}

impl ReportType {
    pub const ALL: [ReportType; 6] = [
        ReportType::InstagramProfile,
        ReportType::TiktokProfile,
        ReportType::InstagramHashtag,
        ReportType::TiktokHashtag,
        ReportType::TiktokKeyword,
        ReportType::GoogleNews,
    ];

    /// Storage directory name under the reports root.
    #[must_use]
    pub fn dir_name(self) -> &'static str {
        match self {
            ReportType::InstagramProfile => "instagram_profiles",
            ReportType::TiktokProfile => "tiktok_profiles",
            ReportType::InstagramHashtag => "instagram_hashtags",
            ReportType::TiktokHashtag => "tiktok_hashtags",
            ReportType::TiktokKeyword => "tiktok_keywords",
            ReportType::GoogleNews => "google_news",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ReportType::InstagramProfile => "Instagram Profiles",
            ReportType::TiktokProfile => "TikTok Profiles",
            ReportType::InstagramHashtag => "Instagram Hashtags",
            ReportType::TiktokHashtag => "TikTok Hashtags",
            ReportType::TiktokKeyword => "TikTok Keywords",
            ReportType::GoogleNews => "Google News",
        }
    }

    /// Per-account reports, as opposed to hashtag, keyword, or news searches.
    #[must_use]
    pub fn is_profile(self) -> bool {
        matches!(self, ReportType::InstagramProfile | ReportType::TiktokProfile)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed report export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeReport {
    /// Account, hashtag, keyword, or search query the report is about.
    pub identifier: String,
    /// Date printed on the title slide, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    pub body: ReportBody,
    /// Sections found in the text that no extractor consumed, keyed by heading.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unrecognized_sections: BTreeMap<String, String>,
}

impl QualitativeReport {
    #[must_use]
    pub fn report_type(&self) -> ReportType {
        self.body.report_type()
    }

    #[must_use]
    pub fn audience_profile(&self) -> Option<&Nopd> {
        match &self.body {
            ReportBody::InstagramProfile(p) | ReportBody::TiktokProfile(p) => {
                p.audience_profile.as_ref()
            }
            ReportBody::InstagramHashtag(c)
            | ReportBody::TiktokHashtag(c)
            | ReportBody::TiktokKeyword(c) => c.audience_profile.as_ref(),
            ReportBody::GoogleNews(_) => None,
        }
    }

    #[must_use]
    pub fn how_to_win(&self) -> Option<&HowToWin> {
        match &self.body {
            ReportBody::InstagramProfile(p) | ReportBody::TiktokProfile(p) => p.how_to_win.as_ref(),
            ReportBody::InstagramHashtag(c)
            | ReportBody::TiktokHashtag(c)
            | ReportBody::TiktokKeyword(c) => c.how_to_win.as_ref(),
            ReportBody::GoogleNews(_) => None,
        }
    }

    #[must_use]
    pub fn brand_mentions(&self) -> &[BrandMention] {
        match &self.body {
            ReportBody::InstagramHashtag(c)
            | ReportBody::TiktokHashtag(c)
            | ReportBody::TiktokKeyword(c) => &c.brand_mentions,
            ReportBody::GoogleNews(n) => &n.brand_mentions,
            ReportBody::InstagramProfile(_) | ReportBody::TiktokProfile(_) => &[],
        }
    }

    #[must_use]
    pub fn as_profile(&self) -> Option<&ProfileReport> {
        match &self.body {
            ReportBody::InstagramProfile(p) | ReportBody::TiktokProfile(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_conversation(&self) -> Option<&ConversationReport> {
        match &self.body {
            ReportBody::InstagramHashtag(c)
            | ReportBody::TiktokHashtag(c)
            | ReportBody::TiktokKeyword(c) => Some(c),
            _ => None,
        }
    }
}

/// Report content, tagged by family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "report_type", rename_all = "snake_case")]
pub enum ReportBody {
    InstagramProfile(ProfileReport),
    TiktokProfile(ProfileReport),
    InstagramHashtag(ConversationReport),
    TiktokHashtag(ConversationReport),
    TiktokKeyword(ConversationReport),
    GoogleNews(NewsReport),
}

impl ReportBody {
    #[must_use]
    pub fn report_type(&self) -> ReportType {
        match self {
            ReportBody::InstagramProfile(_) => ReportType::InstagramProfile,
            ReportBody::TiktokProfile(_) => ReportType::TiktokProfile,
            ReportBody::InstagramHashtag(_) => ReportType::InstagramHashtag,
            ReportBody::TiktokHashtag(_) => ReportType::TiktokHashtag,
            ReportBody::TiktokKeyword(_) => ReportType::TiktokKeyword,
            ReportBody::GoogleNews(_) => ReportType::GoogleNews,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_profile: Option<Nopd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_summary: Option<CreatorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsorships: Option<Sponsorships>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub future_sponsorship_suggestions: Vec<SponsorshipSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SummaryStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_win: Option<HowToWin>,
    #[serde(skip_serializing_if = "TopPosts::is_empty")]
    pub top_posts: TopPosts,
}

/// Hashtag and keyword search reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<ExecutiveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_profile: Option<Nopd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtag_analysis: Option<HashtagAnalysis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interesting_conversations: Vec<TitledBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_map: Option<ConversationMap>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_trends: Vec<TitledBlock>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brand_mentions: Vec<BrandMention>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub in_market_campaigns: Vec<TitledBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_win: Option<HowToWin>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub creator_archetypes: Vec<CreatorArchetype>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<ExecutiveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news_analysis: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brand_mentions: Vec<BrandMention>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trending_narratives: Vec<TitledBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategic_implications: Option<String>,
}

/// Needs / Objections / Desires / Pain Points audience quadrants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nopd {
    pub summary: String,
    pub needs: Vec<String>,
    pub objections: Vec<String>,
    pub desires: Vec<String>,
    pub pain_points: Vec<String>,
}

impl Nopd {
    /// The four quadrants in their fixed reading order.
    #[must_use]
    pub fn quadrants(&self) -> [(&'static str, &[String]); 4] {
        [
            ("needs", &self.needs),
            ("objections", &self.objections),
            ("desires", &self.desires),
            ("pain_points", &self.pain_points),
        ]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quadrants().iter().all(|(_, items)| items.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutiveSummary {
    pub overview: String,
    pub key_insights: Vec<String>,
    pub search_term: String,
    pub search_purpose: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub followers: Option<f64>,
    pub following: Option<f64>,
    pub avg_likes: Option<f64>,
    pub avg_comments: Option<f64>,
    pub avg_engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorSummary {
    pub search_purpose: String,
    pub topline: String,
    pub what_it_means: String,
    pub common_themes: Vec<String>,
    pub what_hits: String,
    pub what_misses: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsorships {
    pub summary: String,
    pub integration_summary: String,
    pub categories: Vec<String>,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorshipSuggestion {
    pub category: String,
    pub why_it_works: String,
    pub how_to_activate: Vec<String>,
}

/// Min / max / median / average of one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLine {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryStatistics {
    pub views: StatLine,
    pub likes: StatLine,
    pub comments: StatLine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopPost {
    pub caption: String,
    pub engagement_rate: f64,
    pub likes: f64,
    pub comments: f64,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopPosts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_liked: Option<TopPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least_liked: Option<TopPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_engaged: Option<TopPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least_engaged: Option<TopPost>,
}

impl TopPosts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.most_liked.is_none()
            && self.least_liked.is_none()
            && self.most_engaged.is_none()
            && self.least_engaged.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowToWin {
    pub summary: String,
    pub territories: Vec<String>,
    pub audience_verbatims: Vec<String>,
}

impl HowToWin {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.territories.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashtagAnalysis {
    pub summary: String,
    pub key_findings: Vec<String>,
    pub opportunities: Vec<String>,
    pub gaps_risks_unmet_needs: Vec<String>,
    pub strategic_actions: Vec<String>,
}

impl HashtagAnalysis {
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !(self.key_findings.is_empty()
            && self.opportunities.is_empty()
            && self.gaps_risks_unmet_needs.is_empty()
            && self.strategic_actions.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMap {
    pub summary: String,
    pub relationship_analysis: String,
    pub overarching_patterns: Vec<String>,
    pub action_opportunities: Vec<String>,
}

/// A short title followed by its description: content trends, campaigns,
/// conversations, and news narratives all use this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitledBlock {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorArchetype {
    pub archetype: String,
    pub description: String,
    pub appeal: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandMention {
    pub brand: String,
    pub context: String,
    pub sentiment: String,
    pub reception: String,
    pub verbatims: Vec<String>,
}
