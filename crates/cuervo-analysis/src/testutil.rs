use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use cuervo_core::{
    BrandProfile, CaptionTone, ContentTheme, CtaType, FollowerSource, Platform, Post, PostType,
    VisualStyle,
};

pub(crate) fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

pub(crate) fn post(brand: &str, platform: Platform, day: &str) -> Post {
    Post {
        brand: brand.to_string(),
        platform,
        post_url: format!("https://example.com/{brand}/{day}"),
        post_date: date(day),
        post_time: NaiveTime::from_hms_opt(18, 0, 0),
        post_type: if platform == Platform::TikTok {
            PostType::Video
        } else {
            PostType::Reel
        },
        caption: "Margarita night".to_string(),
        hashtags: BTreeSet::new(),
        likes: 80,
        comments: 10,
        shares: 5,
        saves: 5,
        views: 1000,
        impressions: None,
        reach: None,
        vendor_engagement_rate: None,
        content_theme: ContentTheme::CocktailRecipe,
        visual_style: VisualStyle::Mixed,
        caption_tone: CaptionTone::Casual,
        cta_type: CtaType::None,
        has_creator_collab: false,
        creator_handle: None,
        is_paid_partnership: false,
        caption_word_count: 2,
        emoji_count: 0,
        mentions_count: 0,
        source: None,
    }
}

pub(crate) fn profile(brand: &str, platform: Platform, followers: Option<u64>) -> BrandProfile {
    BrandProfile {
        brand: brand.to_string(),
        platform,
        handle: None,
        followers,
        posts_in_period: None,
        aggregate_engagement_rate: None,
        collected_on: None,
        follower_source: FollowerSource::Report,
    }
}
