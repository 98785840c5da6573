//! Keyword rule tables.
//!
//! Each table is evaluated top to bottom against the lowercased caption; the
//! first rule with any phrase contained in the caption decides the label.
//! Order therefore encodes priority. Phrases are plain substrings, including
//! the deliberate leading/trailing spaces in entries such as `" x @"`.

use cuervo_core::{CaptionTone, ContentTheme, CtaType, VisualStyle};

/// One label and the phrases that select it.
#[derive(Debug, Clone, Copy)]
pub struct Rule<L> {
    pub label: L,
    pub phrases: &'static [&'static str],
}

impl<L> Rule<L> {
    /// Whether any phrase occurs in `lowered`, which must already be lowercase.
    #[must_use]
    pub fn matches(&self, lowered: &str) -> bool {
        self.phrases.iter().any(|p| lowered.contains(p))
    }
}

/// Label of the first rule matching `lowered`, if any.
#[must_use]
pub fn first_match<L: Copy>(rules: &[Rule<L>], lowered: &str) -> Option<L> {
    rules.iter().find(|r| r.matches(lowered)).map(|r| r.label)
}

pub const DEFAULT_THEME: ContentTheme = ContentTheme::Lifestyle;
pub const EMPTY_CAPTION_THEME: ContentTheme = ContentTheme::Other;
pub const DEFAULT_TONE: CaptionTone = CaptionTone::Casual;
pub const DEFAULT_CTA: CtaType = CtaType::None;
pub const DEFAULT_VISUAL_STYLE: VisualStyle = VisualStyle::Mixed;

pub const THEME_RULES: &[Rule<ContentTheme>] = &[
    Rule {
        label: ContentTheme::CocktailRecipe,
        phrases: &[
            "recipe", "cocktail", "margarita", "paloma", "mix", "ingredients", "garnish", "pour",
            "shake", "stir", "muddle", "splash", "oz", "simple syrup", "lime juice", "make this",
            "how to make",
        ],
    },
    Rule {
        label: ContentTheme::MemeHumor,
        phrases: &[
            "pov:", "pov ", "when you", "when someone", "mood:", "me:", "me when",
            "tell me without telling", "iykyk", "literally", "ngl", "no cap", "fr fr",
            "it's giving", "core", "lol", "lmao",
        ],
    },
    Rule {
        label: ContentTheme::CreatorCollab,
        phrases: &[
            "collab", "featuring", "feat.", "ft.", " x @", "with @", "repost", "regram",
            "created by", "styled by", "made by",
        ],
    },
    Rule {
        label: ContentTheme::GiveawayPromo,
        phrases: &[
            "giveaway", "win", "enter to", "chance to", "sweepstakes", "contest",
            "limited edition", "tag to win",
        ],
    },
    Rule {
        label: ContentTheme::CulturalMoment,
        phrases: &[
            "cinco de mayo", "national margarita day", "new year", "valentine", "4th of july",
            "game day", "super bowl", "halloween", "holiday", "thanksgiving", "christmas",
            "mother's day", "father's day",
        ],
    },
    Rule {
        label: ContentTheme::BehindTheScenes,
        phrases: &[
            "behind the scenes", "bts", "distillery", "how it's made", "agave field", "harvest",
            "process", "master distiller", "from agave", "jimador",
        ],
    },
    Rule {
        label: ContentTheme::BrandHeritage,
        phrases: &[
            "since", "est.", "heritage", "tradition", "founder", "generations", "legacy",
            "history", "roots", "origin", "began in",
        ],
    },
    Rule {
        label: ContentTheme::Education,
        phrases: &[
            "tequila 101", "did you know", "the difference", "blanco vs", "reposado vs", "añejo",
            "cristalino", "guide to", "everything you need", "what makes", "how tequila",
        ],
    },
    Rule {
        label: ContentTheme::MusicParty,
        phrases: &[
            "playlist", "turn up", "turn it up", "dj", "concert", "festival", "dance", "club",
            "night out", "pre-game",
        ],
    },
    Rule {
        label: ContentTheme::EventActivation,
        phrases: &[
            "pop-up", "pop up", "live from", "activation", "launch party", "catch us", "meet us",
            "join us at", "hosted by",
        ],
    },
    Rule {
        label: ContentTheme::ProductShowcase,
        phrases: &[
            "bottle", "smooth", "bold", "crafted", "premium", "introducing", "meet the",
            "collection", "expression", "tasting notes", "new drop",
        ],
    },
    Rule {
        label: ContentTheme::Lifestyle,
        phrases: &[
            "sunset", "vibes", "moment", "weekend", "summer", "golden hour", "rooftop", "pool",
            "beach", "cheers", "elevated", "living",
        ],
    },
];

pub const TONE_RULES: &[Rule<CaptionTone>] = &[
    Rule {
        label: CaptionTone::Humorous,
        phrases: &[
            "pov", "mood", "literally", "me:", "lol", "ngl", "fr fr", "iykyk", "no cap",
            "it's giving",
        ],
    },
    Rule {
        label: CaptionTone::Premium,
        phrases: &[
            "luxury", "premium", "crafted", "elevated", "refined", "exclusive", "elegant",
            "exquisite", "rare", "aged", "ultra-premium",
        ],
    },
    Rule {
        label: CaptionTone::Educational,
        phrases: &[
            "learn", "difference", "guide", "tip", "how to", "did you know", "101", "fact",
            "here's why",
        ],
    },
    Rule {
        label: CaptionTone::Nostalgic,
        phrases: &[
            "since", "tradition", "heritage", "generations", "roots", "founder", "legacy",
            "history",
        ],
    },
    Rule {
        label: CaptionTone::BoldEdgy,
        phrases: &[
            "bold", "unleash", "dare", "rebel", "revolution", "unapologetic", "unbridled",
            "fierce", "raw",
        ],
    },
    Rule {
        label: CaptionTone::Playful,
        phrases: &["fun", "party", "let's go", "woohoo", "cheers", "celebrate", "good times"],
    },
    Rule {
        label: CaptionTone::Casual,
        phrases: &["hey", "y'all", "tbh", "honestly", "let's", "who's", "what's your", "drop a"],
    },
    Rule {
        label: CaptionTone::Aspirational,
        phrases: &[
            "dream", "lifestyle", "sunset", "aspirational", "golden", "perfect", "bliss",
            "paradise",
        ],
    },
];

pub const CTA_RULES: &[Rule<CtaType>] = &[
    Rule {
        label: CtaType::LinkInBio,
        phrases: &["link in bio", "linkinbio", "tap the link"],
    },
    Rule {
        label: CtaType::ShopNow,
        phrases: &["shop now", "buy now", "order now", "get yours"],
    },
    Rule {
        label: CtaType::TagAFriend,
        phrases: &["tag a friend", "tag someone", "tag your", "tag 3"],
    },
    Rule {
        label: CtaType::CommentBelow,
        phrases: &["comment below", "tell us", "drop a", "let us know"],
    },
    Rule {
        label: CtaType::TryThisRecipe,
        phrases: &["try this", "make this", "recipe at home"],
    },
    Rule {
        label: CtaType::FollowForMore,
        phrases: &["follow for", "subscribe"],
    },
    Rule {
        label: CtaType::EnterGiveaway,
        phrases: &["enter to", "giveaway", "chance to win"],
    },
    Rule {
        label: CtaType::ShareThis,
        phrases: &["share this", "send this to"],
    },
    Rule {
        label: CtaType::UseOurHashtag,
        phrases: &["use #", "use our hashtag"],
    },
];

/// Themes that imply a visual style regardless of brand.
pub const THEME_VISUAL_STYLES: &[(ContentTheme, VisualStyle)] = &[
    (ContentTheme::MemeHumor, VisualStyle::RawUgc),
    (ContentTheme::CreatorCollab, VisualStyle::RawUgc),
    (ContentTheme::BehindTheScenes, VisualStyle::LoFi),
    (ContentTheme::BrandHeritage, VisualStyle::Animation),
    (ContentTheme::Education, VisualStyle::Animation),
    (ContentTheme::ProductShowcase, VisualStyle::Polished),
];

/// Phrases that mark a tagged account as a creator collaboration.
pub const COLLAB_SIGNALS: &[&str] = &[
    "collab", "featuring", "feat.", "ft.", " x @", "with @", "created by", "styled by",
    "made by", "partnered with",
];

/// Phrases that disclose a paid partnership.
pub const PAID_PARTNERSHIP_PHRASES: &[&str] = &[
    "paid partnership", "#ad ", "#ad\n", "#sponsored", "ad |", "| ad", "#partner",
    "in partnership with", "sponsored by", "ambassador",
];

/// Hashtags that disclose a paid partnership wherever they appear.
pub const PAID_PARTNERSHIP_TAGS: &[&str] = &["#ad", "#sponsored", "#partner", "#paidpartnership"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_respects_table_order() {
        // "margarita" (recipe) and "lol" (meme) both match; recipe is listed first.
        let theme = first_match(THEME_RULES, "margarita fail lol");
        assert_eq!(theme, Some(ContentTheme::CocktailRecipe));
    }

    #[test]
    fn first_match_none_when_no_phrase() {
        assert_eq!(first_match(CTA_RULES, "just a caption"), None);
    }

    #[test]
    fn rule_matches_substring() {
        let rule = Rule {
            label: CtaType::ShopNow,
            phrases: &["shop now"],
        };
        assert!(rule.matches("go shop now!"));
        assert!(!rule.matches("shopping"));
    }

    #[test]
    fn tables_use_lowercase_phrases() {
        let all_phrases = THEME_RULES
            .iter()
            .flat_map(|r| r.phrases.iter())
            .chain(TONE_RULES.iter().flat_map(|r| r.phrases.iter()))
            .chain(CTA_RULES.iter().flat_map(|r| r.phrases.iter()))
            .chain(COLLAB_SIGNALS.iter())
            .chain(PAID_PARTNERSHIP_PHRASES.iter());
        for phrase in all_phrases {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase {phrase:?} must be lowercase");
        }
    }

    #[test]
    fn theme_table_has_no_duplicate_labels() {
        let mut labels: Vec<ContentTheme> = THEME_RULES.iter().map(|r| r.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), THEME_RULES.len());
    }
}
