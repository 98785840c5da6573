//! Seeded synthetic data for demo mode.
//!
//! Each brand template encodes follower counts, posting cadence, base
//! engagement rate, theme weights and stylistic bias. The same seed always
//! produces the same posts and profiles.

use chrono::{Duration, NaiveDate, NaiveTime};
use cuervo_classify::caption_stats;
use cuervo_core::{
    BrandProfile, BrandRegistry, CaptionTone, ContentTheme, CtaType, FollowerSource, Platform,
    Post, PostType, VisualStyle,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const DEFAULT_SEED: u64 = 42;

/// Last day of the generated 30-day window.
const WINDOW_END: (i32, u32, u32) = (2026, 2, 5);
const WINDOW_DAYS: i64 = 30;
const PEAK_HOURS: &[u32] = &[11, 12, 13, 17, 18, 19, 20, 21];

struct PlatformTemplate {
    followers: u64,
    posts_per_month: u32,
    base_er: f64,
}

struct BrandTemplate {
    brand: &'static str,
    handle_ig: &'static str,
    handle_tt: &'static str,
    instagram: PlatformTemplate,
    tiktok: PlatformTemplate,
    themes: &'static [(ContentTheme, f64)],
    visual_bias: &'static [VisualStyle],
    tone_bias: &'static [CaptionTone],
    collab_rate: f64,
    ig_post_types: &'static [(PostType, f64)],
}

const TEMPLATES: &[BrandTemplate] = &[
    BrandTemplate {
        brand: "Jose Cuervo",
        handle_ig: "@josecuervo",
        handle_tt: "@josecuervo",
        instagram: PlatformTemplate { followers: 485_000, posts_per_month: 55, base_er: 1.8 },
        tiktok: PlatformTemplate { followers: 312_000, posts_per_month: 50, base_er: 3.2 },
        themes: &[
            (ContentTheme::CocktailRecipe, 0.25),
            (ContentTheme::Lifestyle, 0.20),
            (ContentTheme::CulturalMoment, 0.15),
            (ContentTheme::ProductShowcase, 0.20),
            (ContentTheme::MemeHumor, 0.20),
        ],
        visual_bias: &[VisualStyle::RawUgc, VisualStyle::Mixed, VisualStyle::Polished],
        tone_bias: &[CaptionTone::Playful, CaptionTone::Casual, CaptionTone::BoldEdgy],
        collab_rate: 0.12,
        ig_post_types: &[
            (PostType::Reel, 0.50),
            (PostType::Carousel, 0.25),
            (PostType::StaticImage, 0.25),
        ],
    },
    BrandTemplate {
        brand: "Patron",
        handle_ig: "@patron",
        handle_tt: "@patron",
        instagram: PlatformTemplate { followers: 1_100_000, posts_per_month: 58, base_er: 2.4 },
        tiktok: PlatformTemplate { followers: 520_000, posts_per_month: 52, base_er: 4.1 },
        themes: &[
            (ContentTheme::ProductShowcase, 0.20),
            (ContentTheme::CocktailRecipe, 0.25),
            (ContentTheme::Lifestyle, 0.15),
            (ContentTheme::BehindTheScenes, 0.15),
            (ContentTheme::Education, 0.10),
            (ContentTheme::CreatorCollab, 0.15),
        ],
        visual_bias: &[VisualStyle::Polished, VisualStyle::Mixed],
        tone_bias: &[CaptionTone::Premium, CaptionTone::Educational, CaptionTone::Aspirational],
        collab_rate: 0.22,
        ig_post_types: &[
            (PostType::Reel, 0.55),
            (PostType::Carousel, 0.30),
            (PostType::StaticImage, 0.15),
        ],
    },
    BrandTemplate {
        brand: "Don Julio",
        handle_ig: "@donjuliotequila",
        handle_tt: "@donjulio",
        instagram: PlatformTemplate { followers: 890_000, posts_per_month: 55, base_er: 2.1 },
        tiktok: PlatformTemplate { followers: 445_000, posts_per_month: 50, base_er: 3.8 },
        themes: &[
            (ContentTheme::ProductShowcase, 0.25),
            (ContentTheme::Lifestyle, 0.25),
            (ContentTheme::BehindTheScenes, 0.15),
            (ContentTheme::BrandHeritage, 0.20),
            (ContentTheme::EventActivation, 0.15),
        ],
        visual_bias: &[VisualStyle::Polished, VisualStyle::Polished, VisualStyle::Mixed],
        tone_bias: &[CaptionTone::Premium, CaptionTone::Aspirational, CaptionTone::Nostalgic],
        collab_rate: 0.18,
        ig_post_types: &[
            (PostType::Reel, 0.45),
            (PostType::Carousel, 0.25),
            (PostType::StaticImage, 0.30),
        ],
    },
    BrandTemplate {
        brand: "Casamigos",
        handle_ig: "@casamigos",
        handle_tt: "@casamigos",
        instagram: PlatformTemplate { followers: 750_000, posts_per_month: 60, base_er: 3.1 },
        tiktok: PlatformTemplate { followers: 680_000, posts_per_month: 58, base_er: 5.5 },
        themes: &[
            (ContentTheme::Lifestyle, 0.20),
            (ContentTheme::MemeHumor, 0.20),
            (ContentTheme::CreatorCollab, 0.20),
            (ContentTheme::MusicParty, 0.15),
            (ContentTheme::CocktailRecipe, 0.15),
            (ContentTheme::CulturalMoment, 0.10),
        ],
        visual_bias: &[VisualStyle::RawUgc, VisualStyle::LoFi, VisualStyle::Mixed],
        tone_bias: &[CaptionTone::Casual, CaptionTone::Playful, CaptionTone::Humorous],
        collab_rate: 0.35,
        ig_post_types: &[
            (PostType::Reel, 0.65),
            (PostType::Carousel, 0.15),
            (PostType::StaticImage, 0.20),
        ],
    },
    BrandTemplate {
        brand: "Espolon",
        handle_ig: "@espolontequila",
        handle_tt: "@espolontequila",
        instagram: PlatformTemplate { followers: 280_000, posts_per_month: 52, base_er: 2.0 },
        tiktok: PlatformTemplate { followers: 195_000, posts_per_month: 50, base_er: 3.5 },
        themes: &[
            (ContentTheme::BrandHeritage, 0.25),
            (ContentTheme::ProductShowcase, 0.20),
            (ContentTheme::CocktailRecipe, 0.25),
            (ContentTheme::Education, 0.15),
            (ContentTheme::CulturalMoment, 0.15),
        ],
        visual_bias: &[VisualStyle::Animation, VisualStyle::Polished, VisualStyle::Mixed],
        tone_bias: &[CaptionTone::BoldEdgy, CaptionTone::Educational, CaptionTone::Casual],
        collab_rate: 0.10,
        ig_post_types: &[
            (PostType::Reel, 0.40),
            (PostType::Carousel, 0.30),
            (PostType::StaticImage, 0.30),
        ],
    },
    BrandTemplate {
        brand: "Teremana",
        handle_ig: "@teremana",
        handle_tt: "@teremana",
        instagram: PlatformTemplate { followers: 620_000, posts_per_month: 55, base_er: 2.8 },
        tiktok: PlatformTemplate { followers: 890_000, posts_per_month: 55, base_er: 6.2 },
        themes: &[
            (ContentTheme::CreatorCollab, 0.25),
            (ContentTheme::CocktailRecipe, 0.20),
            (ContentTheme::MemeHumor, 0.20),
            (ContentTheme::Lifestyle, 0.15),
            (ContentTheme::MusicParty, 0.10),
            (ContentTheme::GiveawayPromo, 0.10),
        ],
        visual_bias: &[VisualStyle::RawUgc, VisualStyle::LoFi],
        tone_bias: &[CaptionTone::Casual, CaptionTone::Playful, CaptionTone::Humorous],
        collab_rate: 0.40,
        ig_post_types: &[
            (PostType::Reel, 0.70),
            (PostType::Carousel, 0.15),
            (PostType::StaticImage, 0.15),
        ],
    },
    BrandTemplate {
        brand: "1800 Tequila",
        handle_ig: "@1800tequila",
        handle_tt: "@1800tequila",
        instagram: PlatformTemplate { followers: 410_000, posts_per_month: 52, base_er: 2.0 },
        tiktok: PlatformTemplate { followers: 275_000, posts_per_month: 50, base_er: 3.6 },
        themes: &[
            (ContentTheme::ProductShowcase, 0.25),
            (ContentTheme::CocktailRecipe, 0.20),
            (ContentTheme::Lifestyle, 0.20),
            (ContentTheme::CulturalMoment, 0.15),
            (ContentTheme::MusicParty, 0.10),
            (ContentTheme::MemeHumor, 0.10),
        ],
        visual_bias: &[VisualStyle::Polished, VisualStyle::Mixed, VisualStyle::RawUgc],
        tone_bias: &[CaptionTone::BoldEdgy, CaptionTone::Casual, CaptionTone::Playful],
        collab_rate: 0.15,
        ig_post_types: &[
            (PostType::Reel, 0.50),
            (PostType::Carousel, 0.25),
            (PostType::StaticImage, 0.25),
        ],
    },
];

/// Caption openers per theme. `{brand}`, `{creator}` and `{year}` are filled in.
const CAPTION_FRAGMENTS: &[(ContentTheme, &[&str])] = &[
    (
        ContentTheme::CocktailRecipe,
        &[
            "The perfect {brand} margarita starts with fresh lime",
            "New recipe alert: {brand} Paloma with a twist",
            "3 ingredients. 1 legendary cocktail. All {brand}.",
            "Weekend vibes call for this {brand} spicy marg",
            "Save this recipe for your next gathering",
            "The only cocktail recipe you need this summer",
        ],
    ),
    (
        ContentTheme::ProductShowcase,
        &[
            "Smooth. Bold. Unmistakably {brand}.",
            "Meet the bottle that started it all",
            "New look, same legendary taste",
            "{brand}, crafted for moments worth savoring",
            "The gold standard of tequila",
        ],
    ),
    (
        ContentTheme::Lifestyle,
        &[
            "Sunsets taste better with {brand}",
            "Every great night starts with great tequila",
            "This is how we weekend",
            "Find your moment. Make it {brand}.",
            "Good vibes only. {brand} required.",
        ],
    ),
    (
        ContentTheme::MemeHumor,
        &[
            "POV: you brought the {brand} to the party",
            "When someone says they don't like tequila... *shows them {brand}*",
            "Friday energy: activated",
            "Tell me you're having a good time without telling me",
            "Me: I'll just have one. Also me: 🍹🍹🍹",
        ],
    ),
    (
        ContentTheme::CreatorCollab,
        &[
            "Obsessed with this {brand} cocktail by {creator}",
            "{creator} knows how to do it right with {brand}",
            "When the homies bring the {brand} 🔥",
            "Y'all are making the best {brand} cocktails",
        ],
    ),
    (
        ContentTheme::BehindTheScenes,
        &[
            "From agave to glass: the {brand} journey",
            "Behind the scenes at the {brand} distillery",
            "Where the magic happens",
            "Meet the master distiller behind {brand}",
        ],
    ),
    (
        ContentTheme::CulturalMoment,
        &[
            "Happy National Margarita Day from {brand}!",
            "Cinco de Mayo prep starts now",
            "New Year, same great {brand}",
            "Game day isn't complete without {brand}",
        ],
    ),
    (
        ContentTheme::BrandHeritage,
        &[
            "Since {year}, we've been doing this different",
            "Generations of craft. One legendary tequila.",
            "The story behind every sip of {brand}",
        ],
    ),
    (
        ContentTheme::Education,
        &[
            "Blanco vs. Reposado vs. Añejo: which are you?",
            "Did you know? All tequila is mezcal, but not all mezcal is tequila",
            "The difference is in the detail",
        ],
    ),
    (
        ContentTheme::MusicParty,
        &[
            "Turn it up. Pour it up. {brand} up.",
            "This playlist + {brand} = perfect night",
            "The weekend starts now",
        ],
    ),
    (
        ContentTheme::GiveawayPromo,
        &[
            "GIVEAWAY: Win a {brand} party pack!",
            "Tag 3 friends for a chance to win {brand}",
            "Limited edition {brand} drop, don't miss out",
            "Summer giveaway alert! Enter to win {brand}",
        ],
    ),
    (
        ContentTheme::EventActivation,
        &[
            "Catch us at the {brand} pop-up this weekend",
            "Live from the {brand} experience, who's here?",
            "The {brand} activation was one for the books",
            "See you at the {brand} summer series",
        ],
    ),
];

const HASHTAG_POOLS: &[(&str, &[&str])] = &[
    (
        "Jose Cuervo",
        &[
            "#JoseCuervo", "#Cuervo", "#CuervoMargarita", "#HaveACuervoDay", "#MargaritaSeason",
            "#Tequila", "#TequilaCocktails", "#FridayVibes", "#CocktailRecipe", "#WeekendVibes",
            "#DrinkResponsibly",
        ],
    ),
    (
        "Patron",
        &[
            "#Patron", "#PatronTequila", "#SimplyPerfect", "#PatronMargarita",
            "#PerfectMargarita", "#Tequila", "#CocktailArt", "#MixologyLife", "#PremiumTequila",
            "#CraftCocktails", "#PatronPaloma",
        ],
    ),
    (
        "Don Julio",
        &[
            "#DonJulio", "#DonJulioTequila", "#DonJulio1942", "#LuxuryTequila", "#Tequila",
            "#ElevateYourSpirits", "#CocktailCulture", "#AgaveLove",
        ],
    ),
    (
        "Casamigos",
        &[
            "#Casamigos", "#CasaAmigos", "#CasaFriends", "#PartyStarter", "#Tequila",
            "#GoodVibes", "#NightOut", "#SquadGoals", "#WeekendMood",
        ],
    ),
    (
        "Espolon",
        &[
            "#Espolon", "#EspolonTequila", "#UnbridledSpirit", "#MexicanCulture", "#Tequila",
            "#TequilaLover", "#ArtOfTequila", "#CocktailRecipe", "#TequilaEducation",
        ],
    ),
    (
        "Teremana",
        &[
            "#Teremana", "#TeremanaTequila", "#TeremanaTime", "#RockTequila", "#Tequila",
            "#CleanTequila", "#SmallBatch", "#PartyTime", "#CocktailVibes",
        ],
    ),
    (
        "1800 Tequila",
        &[
            "#1800Tequila", "#1800", "#1800Cristalino", "#1800Reposado", "#Tequila",
            "#TequilaNight", "#SmoothSip", "#CocktailHour", "#NightLife",
        ],
    ),
];

const CREATOR_HANDLES: &[&str] = &[
    "@mixology_mike", "@cocktail.queen", "@sip_and_savor", "@tequila_tony", "@drinkswithdev",
    "@bar.basics", "@shakeandstir", "@agave.girl", "@cocktail.content", "@drink.culture",
    "@lime.and.salt", "@spirited.sips", "@thirsty.thursday", "@pour.decisions",
    "@happy.hour.hero", "@sip.happens", "@boozy.brunch", "@cocktail.king", "@drink.diva",
    "@mixup.maria",
];

const EMOJIS: &[&str] = &[
    "🍹", "🔥", "🥃", "🍋", "✨", "🎉", "💯", "🌮", "🎶", "😎", "🍸", "🥂", "🌵", "🤙", "💚", "🙌",
];

const HERITAGE_YEARS: &[u32] = &[1795, 1942, 2013, 2017, 2020];

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

fn weighted<T: Copy>(rng: &mut StdRng, items: &[(T, f64)]) -> Option<T> {
    let total: f64 = items.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random::<f64>() * total;
    for &(item, weight) in items {
        if roll < weight {
            return Some(item);
        }
        roll -= weight;
    }
    items.last().map(|&(item, _)| item)
}

fn suggested_cta(rng: &mut StdRng, theme: ContentTheme) -> CtaType {
    let options: &[CtaType] = match theme {
        ContentTheme::CocktailRecipe => {
            &[CtaType::TryThisRecipe, CtaType::LinkInBio, CtaType::CommentBelow]
        }
        ContentTheme::GiveawayPromo => {
            &[CtaType::EnterGiveaway, CtaType::TagAFriend, CtaType::FollowForMore]
        }
        ContentTheme::CreatorCollab => {
            &[CtaType::FollowForMore, CtaType::UseOurHashtag, CtaType::TagAFriend]
        }
        ContentTheme::ProductShowcase => {
            &[CtaType::LinkInBio, CtaType::ShopNow, CtaType::VisitWebsite]
        }
        ContentTheme::MemeHumor => &[CtaType::TagAFriend, CtaType::ShareThis, CtaType::CommentBelow],
        _ => &[CtaType::None, CtaType::LinkInBio, CtaType::CommentBelow],
    };
    pick(rng, options).copied().unwrap_or(CtaType::None)
}

fn caption_for(
    rng: &mut StdRng,
    brand: &str,
    theme: ContentTheme,
    creator: Option<&str>,
) -> String {
    let fragments = CAPTION_FRAGMENTS
        .iter()
        .find(|(t, _)| *t == theme)
        .or_else(|| CAPTION_FRAGMENTS.iter().find(|(t, _)| *t == ContentTheme::ProductShowcase))
        .map_or(&[][..], |(_, f)| *f);
    let year = pick(rng, HERITAGE_YEARS).copied().unwrap_or(1795);
    let mut text = pick(rng, fragments)
        .copied()
        .unwrap_or("{brand}")
        .replace("{brand}", brand)
        .replace("{year}", &year.to_string())
        .replace("{creator}", creator.unwrap_or("our friends"));

    if let Some(handle) = creator {
        if !text.contains(handle) {
            text.push_str(&format!(" with {handle}"));
        }
    }

    let emojis: Vec<&str> = (0..rng.random_range(0..=4))
        .filter_map(|_| pick(rng, EMOJIS).copied())
        .collect();
    if !emojis.is_empty() {
        text.push(' ');
        text.push_str(&emojis.join(" "));
    }

    let mut pool: Vec<&str> = HASHTAG_POOLS
        .iter()
        .find(|(b, _)| *b == brand)
        .map_or_else(|| vec!["#Tequila"], |(_, tags)| tags.to_vec());
    pool.shuffle(rng);
    let n = rng.random_range(2..=8).min(pool.len());
    text.push_str("\n\n");
    text.push_str(&pool[..n].join(" "));
    text
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn generate_posts(
    rng: &mut StdRng,
    tpl: &BrandTemplate,
    platform: Platform,
    window_start: NaiveDate,
) -> Vec<Post> {
    let pt = match platform {
        Platform::Instagram => &tpl.instagram,
        Platform::TikTok => &tpl.tiktok,
    };
    let mut posts = Vec::with_capacity(pt.posts_per_month as usize);

    for i in 0..pt.posts_per_month {
        let hour = if rng.random_bool(0.6) {
            pick(rng, PEAK_HOURS).copied().unwrap_or(12)
        } else {
            rng.random_range(8..=23)
        };
        let minute = rng.random_range(0..60);
        let post_date = window_start + Duration::days(rng.random_range(0..WINDOW_DAYS));

        let post_type = match platform {
            Platform::Instagram => weighted(rng, tpl.ig_post_types).unwrap_or(PostType::Reel),
            Platform::TikTok => PostType::Video,
        };
        let theme = weighted(rng, tpl.themes).unwrap_or(ContentTheme::Lifestyle);
        let is_collab = rng.random_bool(tpl.collab_rate);
        let creator = if is_collab {
            pick(rng, CREATOR_HANDLES).map(|h| (*h).to_string())
        } else {
            None
        };
        let is_paid = is_collab && rng.random_bool(0.6);
        let caption = caption_for(rng, tpl.brand, theme, creator.as_deref());
        let visual_style = pick(rng, tpl.visual_bias).copied().unwrap_or(VisualStyle::Mixed);
        let caption_tone = pick(rng, tpl.tone_bias).copied().unwrap_or(CaptionTone::Casual);
        let cta_type = suggested_cta(rng, theme);

        let mut multiplier = match post_type {
            PostType::Reel => rng.random_range(1.1..1.6),
            PostType::Carousel => rng.random_range(0.9..1.3),
            PostType::StaticImage => rng.random_range(0.5..0.9),
            PostType::Video => rng.random_range(0.8..1.5),
            _ => 1.0,
        };
        multiplier *= match theme {
            ContentTheme::MemeHumor | ContentTheme::CreatorCollab => rng.random_range(1.2..1.8),
            ContentTheme::ProductShowcase | ContentTheme::BrandHeritage => {
                rng.random_range(0.6..1.0)
            }
            _ => 1.0,
        };
        if is_collab {
            multiplier *= rng.random_range(1.1..1.5);
        }
        let actual_er = pt.base_er * multiplier * rng.random_range(0.5..1.8);

        let likes = (pt.followers as f64 * actual_er / 100.0 * rng.random_range(0.7..1.0)) as u64;
        let lf = likes as f64;
        let comments = (lf * rng.random_range(0.02..0.08)) as u64;
        let shares = (lf * rng.random_range(0.01..0.05)) as u64;
        let saves = match platform {
            Platform::Instagram => (lf * rng.random_range(0.03..0.10)) as u64,
            Platform::TikTok => (lf * rng.random_range(0.01..0.06)) as u64,
        };
        let views = if post_type.is_video() {
            (lf * rng.random_range(8.0..25.0)) as u64
        } else {
            0
        };

        let stats = caption_stats(&caption);
        let slug: String = tpl.brand.chars().filter(|c| !c.is_whitespace()).collect();
        let post_url = match platform {
            Platform::Instagram => format!("https://instagram.com/p/SAMPLE{}{i:03}", slug.to_uppercase()),
            Platform::TikTok => format!("https://tiktok.com/@{}/SAMPLE{i:03}", slug.to_lowercase()),
        };

        posts.push(Post {
            brand: tpl.brand.to_string(),
            platform,
            post_url,
            post_date,
            post_time: NaiveTime::from_hms_opt(hour, minute, 0),
            post_type,
            hashtags: stats.hashtags,
            likes,
            comments,
            shares,
            saves,
            views,
            impressions: None,
            reach: None,
            vendor_engagement_rate: None,
            content_theme: theme,
            visual_style,
            caption_tone,
            cta_type,
            has_creator_collab: is_collab,
            creator_handle: creator,
            is_paid_partnership: is_paid,
            caption_word_count: stats.word_count,
            emoji_count: stats.emoji_count,
            mentions_count: stats.mentions_count,
            source: Some("demo".to_string()),
            caption,
        });
    }
    posts
}

/// Generate demo posts and profiles for every templated brand present in
/// `registry`.
#[must_use]
pub fn generate_demo(seed: u64, registry: &BrandRegistry) -> (Vec<Post>, Vec<BrandProfile>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (y, m, d) = WINDOW_END;
    let window_start = NaiveDate::from_ymd_opt(y, m, d)
        .map_or(NaiveDate::MIN, |end| end - Duration::days(WINDOW_DAYS));
    let collected_on = window_start + Duration::days(WINDOW_DAYS);

    let mut posts = Vec::new();
    let mut profiles = Vec::new();

    for tpl in TEMPLATES.iter().filter(|t| registry.get(t.brand).is_some()) {
        for platform in Platform::ALL.iter().copied() {
            posts.extend(generate_posts(&mut rng, tpl, platform, window_start));
            let (pt, handle) = match platform {
                Platform::Instagram => (&tpl.instagram, tpl.handle_ig),
                Platform::TikTok => (&tpl.tiktok, tpl.handle_tt),
            };
            profiles.push(BrandProfile {
                brand: tpl.brand.to_string(),
                platform,
                handle: Some(handle.to_string()),
                followers: Some(pt.followers),
                posts_in_period: Some(pt.posts_per_month),
                aggregate_engagement_rate: None,
                collected_on: Some(collected_on),
                follower_source: FollowerSource::Synthetic,
            });
        }
    }

    posts.shuffle(&mut rng);
    tracing::debug!(seed, posts = posts.len(), profiles = profiles.len(), "demo data generated");
    (posts, profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BrandRegistry {
        BrandRegistry::builtin().unwrap()
    }

    #[test]
    fn same_seed_same_data() {
        let registry = registry();
        let a = generate_demo(DEFAULT_SEED, &registry);
        let b = generate_demo(DEFAULT_SEED, &registry);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_data() {
        let registry = registry();
        let (a, _) = generate_demo(1, &registry);
        let (b, _) = generate_demo(2, &registry);
        assert_ne!(a, b);
    }

    #[test]
    fn posts_match_templates() {
        let (posts, profiles) = generate_demo(DEFAULT_SEED, &registry());
        let expected: u32 = TEMPLATES
            .iter()
            .map(|t| t.instagram.posts_per_month + t.tiktok.posts_per_month)
            .sum();
        assert_eq!(posts.len(), expected as usize);
        assert_eq!(profiles.len(), TEMPLATES.len() * 2);
        assert!(profiles.iter().all(|p| p.follower_source == FollowerSource::Synthetic));
    }

    #[test]
    fn posts_are_structurally_valid() {
        let (posts, _) = generate_demo(7, &registry());
        let start = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        for post in &posts {
            assert!(!post.post_type.is_ephemeral());
            assert!(post.post_date >= start && post.post_date < end, "{}", post.post_date);
            if post.platform == Platform::TikTok {
                assert_eq!(post.post_type, PostType::Video);
            }
            assert_eq!(post.has_creator_collab, post.creator_handle.is_some());
            assert!(!post.hashtags.is_empty());
        }
    }

    #[test]
    fn collab_captions_mention_creator() {
        let (posts, _) = generate_demo(DEFAULT_SEED, &registry());
        let collab = posts.iter().find(|p| p.has_creator_collab).unwrap();
        let handle = collab.creator_handle.as_deref().unwrap();
        assert!(collab.caption.contains(handle));
    }
}
