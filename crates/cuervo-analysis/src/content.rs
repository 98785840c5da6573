//! Caption, theme and visual-style breakdowns.

use std::collections::BTreeMap;

use cuervo_core::{CaptionTone, ContentTheme, CtaType, VisualStyle};
use serde::Serialize;

use crate::engagement::RatedPost;
use crate::tally::{mean, mean_u64, most_common, pct, round_to, Count};

/// Minimum rated posts before caption length is compared with engagement.
const MIN_POSTS_FOR_LENGTH_INSIGHT: usize = 5;
/// One half must average this much longer than the other to count.
const LENGTH_MARGIN: f64 = 1.15;
const TOP_CTAS: usize = 3;

/// Whether high-ER posts tend to have longer or shorter captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthInsight {
    Longer,
    Shorter,
    SimilarLength,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionStats {
    pub posts: usize,
    pub avg_caption_chars: f64,
    pub avg_word_count: f64,
    pub avg_emoji_count: f64,
    pub tone_distribution: Vec<Count<CaptionTone>>,
    pub cta_distribution: Vec<Count<CtaType>>,
    pub top_ctas: Vec<Count<CtaType>>,
    pub length_vs_engagement: LengthInsight,
}

impl CaptionStats {
    /// Most used call to action other than "None".
    #[must_use]
    pub fn top_cta(&self) -> Option<CtaType> {
        self.top_ctas
            .first()
            .map(|c| c.value)
            .filter(|&c| c != CtaType::None)
    }
}

/// Caption stats for one brand × platform group.
#[must_use]
pub fn caption_stats(rated: &[RatedPost<'_>]) -> CaptionStats {
    let cta_distribution = most_common(rated.iter().map(|r| r.post.cta_type));
    CaptionStats {
        posts: rated.len(),
        avg_caption_chars: round_to(
            mean_u64(rated.iter().map(|r| r.post.caption.chars().count() as u64)),
            1,
        ),
        avg_word_count: round_to(
            mean_u64(rated.iter().map(|r| u64::from(r.post.caption_word_count))),
            1,
        ),
        avg_emoji_count: round_to(
            mean_u64(rated.iter().map(|r| u64::from(r.post.emoji_count))),
            1,
        ),
        tone_distribution: most_common(rated.iter().map(|r| r.post.caption_tone)),
        top_ctas: cta_distribution.iter().take(TOP_CTAS).cloned().collect(),
        cta_distribution,
        length_vs_engagement: length_insight(rated),
    }
}

/// Splits rated posts at the median ER and compares average word counts of
/// the two halves.
#[must_use]
pub fn length_insight(rated: &[RatedPost<'_>]) -> LengthInsight {
    let mut ranked: Vec<(f64, u32)> = rated
        .iter()
        .filter_map(|r| r.engagement_rate.map(|er| (er, r.post.caption_word_count)))
        .collect();
    if ranked.len() < MIN_POSTS_FOR_LENGTH_INSIGHT {
        return LengthInsight::InsufficientData;
    }
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    let (top, bottom) = ranked.split_at(ranked.len() / 2);
    let top_words = mean(top.iter().map(|(_, w)| f64::from(*w))).unwrap_or(0.0);
    let bottom_words = mean(bottom.iter().map(|(_, w)| f64::from(*w))).unwrap_or(0.0);

    if top_words > bottom_words * LENGTH_MARGIN {
        LengthInsight::Longer
    } else if bottom_words > top_words * LENGTH_MARGIN {
        LengthInsight::Shorter
    } else {
        LengthInsight::SimilarLength
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePerformance {
    pub count: usize,
    /// Mean ER over this theme's rated posts.
    pub avg_engagement_rate: Option<f64>,
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeStats {
    pub posts: usize,
    pub distribution: Vec<Count<ContentTheme>>,
    pub performance: BTreeMap<ContentTheme, ThemePerformance>,
    pub top_theme: Option<Count<ContentTheme>>,
    pub best_performing_theme: Option<ContentTheme>,
    pub visual_styles: Vec<Count<VisualStyle>>,
}

/// Theme mix and per-theme performance across all of a brand's posts.
#[must_use]
pub fn theme_stats(rated: &[RatedPost<'_>]) -> ThemeStats {
    let distribution = most_common(rated.iter().map(|r| r.post.content_theme));

    let mut rates: BTreeMap<ContentTheme, Vec<f64>> = BTreeMap::new();
    for r in rated {
        let entry = rates.entry(r.post.content_theme).or_default();
        if let Some(er) = r.engagement_rate {
            entry.push(er);
        }
    }
    let performance: BTreeMap<ContentTheme, ThemePerformance> = distribution
        .iter()
        .map(|c| {
            let avg = rates
                .get(&c.value)
                .and_then(|v| mean(v.iter().copied()))
                .map(|m| round_to(m, 3));
            (
                c.value,
                ThemePerformance {
                    count: c.count,
                    avg_engagement_rate: avg,
                    share_pct: pct(c.count, rated.len()),
                },
            )
        })
        .collect();

    let best_performing_theme = performance
        .iter()
        .filter_map(|(theme, p)| p.avg_engagement_rate.map(|er| (*theme, er)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(theme, _)| theme);

    ThemeStats {
        posts: rated.len(),
        top_theme: distribution.first().cloned(),
        distribution,
        performance,
        best_performing_theme,
        visual_styles: most_common(rated.iter().map(|r| r.post.visual_style)),
    }
}

#[cfg(test)]
mod tests {
    use cuervo_core::{Platform, Post};

    use super::*;
    use crate::testutil::post;

    fn rated<'a>(posts: &'a [Post], rates: &[Option<f64>]) -> Vec<RatedPost<'a>> {
        posts
            .iter()
            .zip(rates)
            .map(|(post, &engagement_rate)| RatedPost {
                post,
                engagement_rate,
            })
            .collect()
    }

    fn worded(words: u32) -> Post {
        let mut p = post("Patron", Platform::Instagram, "2026-01-05");
        p.caption_word_count = words;
        p
    }

    #[test]
    fn fewer_than_five_rated_posts_is_insufficient() {
        let posts: Vec<Post> = (0..6).map(|_| worded(10)).collect();
        let rates = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), None, None];
        assert_eq!(
            length_insight(&rated(&posts, &rates)),
            LengthInsight::InsufficientData
        );
    }

    #[test]
    fn longer_captions_on_high_er_posts() {
        let posts: Vec<Post> = [40, 40, 10, 10, 10, 10].map(worded).to_vec();
        let rates = [Some(9.0), Some(8.0), Some(7.0), Some(1.0), Some(1.0), Some(1.0)];
        assert_eq!(length_insight(&rated(&posts, &rates)), LengthInsight::Longer);

        let rates = [Some(1.0), Some(1.0), Some(1.0), Some(9.0), Some(8.0), Some(7.0)];
        assert_eq!(length_insight(&rated(&posts, &rates)), LengthInsight::Shorter);

        let even: Vec<Post> = [10, 10, 11, 10, 10].map(worded).to_vec();
        let rates = [Some(5.0), Some(4.0), Some(3.0), Some(2.0), Some(1.0)];
        assert_eq!(
            length_insight(&rated(&even, &rates)),
            LengthInsight::SimilarLength
        );
    }

    #[test]
    fn top_cta_skips_none() {
        let mut posts: Vec<Post> = (0..3).map(|_| worded(5)).collect();
        posts[0].cta_type = CtaType::TagAFriend;
        let stats = caption_stats(&rated(&posts, &[None, None, None]));
        assert_eq!(stats.top_ctas[0].value, CtaType::None);
        assert_eq!(stats.top_cta(), None);

        posts[1].cta_type = CtaType::TagAFriend;
        let stats = caption_stats(&rated(&posts, &[None, None, None]));
        assert_eq!(stats.top_cta(), Some(CtaType::TagAFriend));
    }

    #[test]
    fn theme_performance_and_best_theme() {
        let mut posts: Vec<Post> = (0..4).map(|_| worded(5)).collect();
        posts[0].content_theme = ContentTheme::MemeHumor;
        posts[1].content_theme = ContentTheme::MemeHumor;
        let stats = theme_stats(&rated(&posts, &[Some(6.0), Some(4.0), Some(1.0), None]));

        assert_eq!(stats.posts, 4);
        let meme = &stats.performance[&ContentTheme::MemeHumor];
        assert_eq!(meme.count, 2);
        assert_eq!(meme.avg_engagement_rate, Some(5.0));
        assert!((meme.share_pct - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.best_performing_theme, Some(ContentTheme::MemeHumor));
        assert_eq!(stats.visual_styles[0].count, 4);
    }
}
