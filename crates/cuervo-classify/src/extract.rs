//! Token extraction from captions: hashtags, mentions, emojis, words.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[\w.]+").expect("valid mention regex"));

/// Codepoint ranges counted as emoji.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2702, 0x27B0),
    (0x24C2, 0x1F251),
    (0x1F926, 0x1F937),
    (0x1F910, 0x1F9FF),
];

/// Distinct hashtags in `caption`, lowercased, each keeping its leading `#`.
#[must_use]
pub fn extract_hashtags(caption: &str) -> BTreeSet<String> {
    HASHTAG_RE
        .find_iter(caption)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// `@mentions` in order of appearance, with a trailing sentence period trimmed.
#[must_use]
pub fn extract_mentions(caption: &str) -> Vec<String> {
    MENTION_RE
        .find_iter(caption)
        .map(|m| m.as_str().trim_end_matches('.').to_string())
        .filter(|m| m.len() > 1)
        .collect()
}

#[must_use]
pub fn count_emojis(text: &str) -> u32 {
    let count = text
        .chars()
        .filter(|&c| {
            let cp = u32::from(c);
            EMOJI_RANGES
                .iter()
                .any(|&(lo, hi)| (lo..=hi).contains(&cp))
        })
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[must_use]
pub fn count_words(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Token counts stored alongside every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionStats {
    pub hashtags: BTreeSet<String>,
    pub word_count: u32,
    pub emoji_count: u32,
    pub mentions_count: u32,
}

#[must_use]
pub fn caption_stats(caption: &str) -> CaptionStats {
    CaptionStats {
        hashtags: extract_hashtags(caption),
        word_count: count_words(caption),
        emoji_count: count_emojis(caption),
        mentions_count: u32::try_from(MENTION_RE.find_iter(caption).count()).unwrap_or(u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtags_are_lowercased_and_deduplicated() {
        let tags = extract_hashtags("#Margarita time #margarita #JoseCuervo!");
        let expected: BTreeSet<String> = ["#josecuervo", "#margarita"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn hashtags_empty_caption() {
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn mentions_keep_order_and_trim_period() {
        let mentions = extract_mentions("Shot by @lens.queen with @mixologist_mike.");
        assert_eq!(mentions, vec!["@lens.queen", "@mixologist_mike"]);
    }

    #[test]
    fn bare_at_sign_is_not_a_mention() {
        assert!(extract_mentions("meet us @ the bar").is_empty());
    }

    #[test]
    fn emojis_counted() {
        assert_eq!(count_emojis("Cheers 🍹🎉 to the weekend"), 2);
        assert_eq!(count_emojis("no emoji here"), 0);
    }

    #[test]
    fn words_split_on_whitespace() {
        assert_eq!(count_words("  one two\nthree  "), 3);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn caption_stats_bundle() {
        let stats = caption_stats("Salud @amy @ben #Tequila 🎉");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.emoji_count, 1);
        assert_eq!(stats.mentions_count, 2);
        assert!(stats.hashtags.contains("#tequila"));
    }
}
