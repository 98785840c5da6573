use std::collections::BTreeMap;

use super::*;
use crate::types::{ConversationReport, NewsReport, ProfileReport, ReportBody};

fn registry() -> BrandRegistry {
    BrandRegistry::builtin().expect("builtin brand table parses")
}

fn nopd(need: &str) -> Nopd {
    Nopd {
        needs: vec![need.to_string()],
        ..Nopd::default()
    }
}

fn report(identifier: &str, body: ReportBody) -> QualitativeReport {
    QualitativeReport {
        identifier: identifier.to_string(),
        report_date: None,
        body,
        unrecognized_sections: BTreeMap::new(),
    }
}

fn index() -> ReportIndex {
    let mut index = ReportIndex::default();
    index.insert(
        "josecuervo".to_string(),
        report(
            "josecuervo",
            ReportBody::InstagramProfile(ProfileReport {
                audience_profile: Some(nopd("Party-ready cocktails")),
                future_sponsorship_suggestions: vec![SponsorshipSuggestion {
                    category: "Music Festivals".to_string(),
                    why_it_works: "Fans film sets.".to_string(),
                    how_to_activate: vec![],
                }],
                ..ProfileReport::default()
            }),
        ),
    );
    index.insert(
        "duolingo".to_string(),
        report(
            "duolingo",
            ReportBody::TiktokProfile(ProfileReport {
                audience_profile: Some(nopd("Unhinged mascot humor")),
                how_to_win: Some(HowToWin {
                    summary: "Be weird on purpose.".to_string(),
                    ..HowToWin::default()
                }),
                ..ProfileReport::default()
            }),
        ),
    );
    index.insert(
        "margarita".to_string(),
        report(
            "margarita",
            ReportBody::TiktokHashtag(ConversationReport {
                audience_profile: Some(Nopd::default()),
                content_trends: vec![TitledBlock {
                    title: "Frozen margs".to_string(),
                    description: "Slushie machines.".to_string(),
                }],
                brand_mentions: vec![BrandMention {
                    brand: "Patron".to_string(),
                    context: "Premium pours.".to_string(),
                    ..BrandMention::default()
                }],
                hashtag_analysis: Some(HashtagAnalysis {
                    strategic_actions: vec!["Post weekend brunch reels.".to_string()],
                    ..HashtagAnalysis::default()
                }),
                ..ConversationReport::default()
            }),
        ),
    );
    index.insert(
        "tequila".to_string(),
        report(
            "tequila",
            ReportBody::GoogleNews(NewsReport {
                brand_mentions: vec![BrandMention {
                    brand: "Casamigos".to_string(),
                    context: "Acquisition news.".to_string(),
                    ..BrandMention::default()
                }],
                ..NewsReport::default()
            }),
        ),
    );
    index
}

#[test]
fn audience_profiles_skip_empty_quadrants() {
    let index = index();
    let all = audience_profiles(&index, None);
    let ids: Vec<&str> = all.iter().map(|s| s.identifier).collect();
    assert_eq!(ids, ["josecuervo", "duolingo"]);
}

#[test]
fn reference_brands_can_be_excluded() {
    let index = index();
    let registry = registry();
    let filtered = audience_profiles(&index, Some(&registry));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].identifier, "josecuervo");
    assert!(how_to_win(&index, Some(&registry)).is_empty());
    assert_eq!(how_to_win(&index, None).len(), 1);
}

#[test]
fn reference_profiles_lists_only_reference_brands() {
    let index = index();
    let refs = reference_profiles(&index, &registry());
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].identifier, "duolingo");
}

#[test]
fn brand_mentions_span_conversation_and_news_reports() {
    let index = index();
    let mentions = brand_mentions(&index);
    let brands: Vec<&str> = mentions.iter().map(|m| m.item.brand.as_str()).collect();
    assert_eq!(brands, ["Patron", "Casamigos"]);
    assert_eq!(mentions[1].report_type, ReportType::GoogleNews);
}

#[test]
fn trends_actions_and_sponsorships_are_collected() {
    let index = index();
    assert_eq!(content_trends(&index).len(), 1);
    assert!(creator_archetypes(&index).is_empty());
    let actions = strategic_actions(&index);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].identifier, "margarita");
    let suggestions = sponsorship_suggestions(&index, None);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].item[0].category, "Music Festivals");
}

#[test]
fn counts_cover_every_type() {
    let counts = index().counts();
    assert_eq!(counts.len(), ReportType::ALL.len());
    assert_eq!(counts[&ReportType::InstagramProfile], 1);
    assert_eq!(counts[&ReportType::InstagramHashtag], 0);
}
