//! Canonical post and profile records.
//!
//! Vendor exports, the custom CSV folder and the demo generator all converge
//! on these types. Label enums serialize to the same display strings the
//! marketing team uses in spreadsheets ("Static Image", "Meme / Humor").

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Declares a closed set of display labels with serde names, `Display`, and
/// case-insensitive lookup from the label text.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Look up a variant by its display label, ignoring ASCII case and
            /// surrounding whitespace.
            #[must_use]
            pub fn from_label(raw: &str) -> Option<Self> {
                let raw = raw.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(raw))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

label_enum! {
    /// Social network a post or profile belongs to. Only these two are tracked.
    pub enum Platform {
        Instagram => "Instagram",
        TikTok => "TikTok",
    }
}

label_enum! {
    pub enum PostType {
        Reel => "Reel",
        Video => "Video",
        StaticImage => "Static Image",
        Carousel => "Carousel",
        PhotoCarousel => "Photo Carousel",
        LiveArchived => "LIVE (archived)",
        Story => "Story",
    }
}

impl PostType {
    /// Ephemeral formats have no persistent public record and no comparable
    /// engagement metric, so they never become a [`Post`].
    #[must_use]
    pub fn is_ephemeral(self) -> bool {
        matches!(self, PostType::Story)
    }

    /// Short-form video formats.
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, PostType::Reel | PostType::Video)
    }
}

label_enum! {
    pub enum ContentTheme {
        ProductShowcase => "Product Showcase",
        CocktailRecipe => "Cocktail Recipe",
        Lifestyle => "Lifestyle/Aspirational",
        BehindTheScenes => "Behind the Scenes",
        CreatorCollab => "Creator Collab / UGC",
        EventActivation => "Event / Activation",
        CulturalMoment => "Cultural Moment / Holiday",
        MemeHumor => "Meme / Humor",
        Education => "Education (Tequila 101)",
        UserRepost => "User Repost",
        GiveawayPromo => "Giveaway / Promo",
        BrandHeritage => "Brand Heritage / Story",
        MusicParty => "Music / Party",
        SportsTieIn => "Sports Tie-in",
        Other => "Other",
    }
}

label_enum! {
    pub enum VisualStyle {
        Polished => "Polished / Studio",
        RawUgc => "Raw / UGC-style",
        Mixed => "Mixed / Hybrid",
        Animation => "Animation / Motion Graphics",
        TextHeavy => "Text-heavy / Graphic",
        LoFi => "Lo-fi / Authentic",
    }
}

label_enum! {
    pub enum CaptionTone {
        Playful => "Playful / Fun",
        Premium => "Premium / Luxury",
        Educational => "Educational / Informative",
        Casual => "Casual / Conversational",
        Aspirational => "Aspirational / Lifestyle",
        BoldEdgy => "Bold / Edgy",
        Nostalgic => "Nostalgic / Heritage",
        Humorous => "Humorous / Meme",
    }
}

label_enum! {
    pub enum CtaType {
        None => "None",
        LinkInBio => "Link in bio",
        ShopNow => "Shop now",
        TagAFriend => "Tag a friend",
        CommentBelow => "Comment below",
        TryThisRecipe => "Try this recipe",
        FollowForMore => "Follow for more",
        ShareThis => "Share this",
        UseOurHashtag => "Use our hashtag",
        VisitWebsite => "Visit website",
        EnterGiveaway => "Enter giveaway",
        Other => "Other",
    }
}

label_enum! {
    /// Where a profile's follower count came from.
    pub enum FollowerSource {
        Report => "report",
        Fallback => "fallback",
        Benchmark => "benchmark",
        Manual => "manual",
        Synthetic => "synthetic",
    }
}

/// One published post in canonical form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub brand: String,
    pub platform: Platform,
    pub post_url: String,
    pub post_date: NaiveDate,
    pub post_time: Option<NaiveTime>,
    pub post_type: PostType,
    pub caption: String,
    /// Lowercased hashtags including the leading `#`.
    pub hashtags: BTreeSet<String>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    pub views: u64,
    pub impressions: Option<u64>,
    pub reach: Option<u64>,
    /// Engagement rate the vendor computed per impression, in percent.
    pub vendor_engagement_rate: Option<f64>,
    pub content_theme: ContentTheme,
    pub visual_style: VisualStyle,
    pub caption_tone: CaptionTone,
    pub cta_type: CtaType,
    pub has_creator_collab: bool,
    pub creator_handle: Option<String>,
    pub is_paid_partnership: bool,
    pub caption_word_count: u32,
    pub emoji_count: u32,
    pub mentions_count: u32,
    /// File name the post was imported from, if any.
    pub source: Option<String>,
}

impl Post {
    /// Likes + comments + shares + saves.
    #[must_use]
    pub fn total_engagement(&self) -> u64 {
        self.likes
            .saturating_add(self.comments)
            .saturating_add(self.shares)
            .saturating_add(self.saves)
    }

    #[must_use]
    pub fn post_hour(&self) -> Option<u32> {
        self.post_time.map(|t| t.hour())
    }
}

/// A brand's account snapshot on one platform for the reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub brand: String,
    pub platform: Platform,
    pub handle: Option<String>,
    /// `None` when the source did not carry a usable follower count.
    pub followers: Option<u64>,
    pub posts_in_period: Option<u32>,
    /// Engagements per published post divided by followers, in percent.
    pub aggregate_engagement_rate: Option<f64>,
    pub collected_on: Option<NaiveDate>,
    pub follower_source: FollowerSource,
}

impl BrandProfile {
    /// Follower count usable as an engagement-rate denominator.
    ///
    /// A zero count is treated the same as a missing one.
    #[must_use]
    pub fn usable_followers(&self) -> Option<u64> {
        self.followers.filter(|&f| f > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            brand: "Jose Cuervo".to_string(),
            platform: Platform::Instagram,
            post_url: "https://instagram.com/p/abc".to_string(),
            post_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            post_time: NaiveTime::from_hms_opt(14, 30, 0),
            post_type: PostType::Reel,
            caption: "Margarita time".to_string(),
            hashtags: BTreeSet::new(),
            likes: 100,
            comments: 10,
            shares: 5,
            saves: 3,
            views: 2000,
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

    #[test]
    fn total_engagement_sums_four_counts() {
        assert_eq!(sample_post().total_engagement(), 118);
    }

    #[test]
    fn post_hour_from_time() {
        assert_eq!(sample_post().post_hour(), Some(14));
    }

    #[test]
    fn only_story_is_ephemeral() {
        let ephemeral: Vec<PostType> = PostType::ALL
            .iter()
            .copied()
            .filter(|t| t.is_ephemeral())
            .collect();
        assert_eq!(ephemeral, vec![PostType::Story]);
    }

    #[test]
    fn from_label_ignores_case() {
        assert_eq!(PostType::from_label("static image"), Some(PostType::StaticImage));
        assert_eq!(Platform::from_label(" TIKTOK "), Some(Platform::TikTok));
        assert_eq!(ContentTheme::from_label("nope"), None);
    }

    #[test]
    fn labels_roundtrip_through_serde() {
        let json = serde_json::to_string(&CaptionTone::Humorous).unwrap();
        assert_eq!(json, "\"Humorous / Meme\"");
        let back: CaptionTone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CaptionTone::Humorous);
    }

    #[test]
    fn zero_followers_are_not_usable() {
        let profile = BrandProfile {
            brand: "Patron".to_string(),
            platform: Platform::TikTok,
            handle: None,
            followers: Some(0),
            posts_in_period: None,
            aggregate_engagement_rate: None,
            collected_on: None,
            follower_source: FollowerSource::Report,
        };
        assert_eq!(profile.usable_followers(), None);
    }
}
