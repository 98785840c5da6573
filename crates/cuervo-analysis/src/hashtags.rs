//! Hashtag usage per brand.

use cuervo_core::is_branded_hashtag;
use serde::Serialize;

use crate::engagement::RatedPost;
use crate::tally::{mean_u64, most_common, pct, round_to, Count};

const TOP_HASHTAGS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HashtagStats {
    pub unique_hashtags: usize,
    pub avg_hashtags_per_post: f64,
    pub top_hashtags: Vec<Count<String>>,
    /// Tags this brand used that carry its own name or handle.
    pub branded_hashtags: Vec<String>,
    /// Share of all tag uses that went to branded tags.
    pub branded_share_pct: f64,
    pub total_usage: usize,
}

/// Hashtag stats for one brand across platforms. `branded` comes from
/// [`cuervo_core::BrandRegistry::branded_terms`].
#[must_use]
pub fn hashtag_stats(rated: &[RatedPost<'_>], branded: &[String]) -> HashtagStats {
    let tags = most_common(
        rated
            .iter()
            .flat_map(|r| r.post.hashtags.iter().cloned()),
    );
    let total_usage: usize = tags.iter().map(|c| c.count).sum();
    let (branded_tags, branded_usage) = tags
        .iter()
        .filter(|c| is_branded_hashtag(&c.value, branded))
        .fold((Vec::new(), 0), |(mut names, uses), c| {
            names.push(c.value.clone());
            (names, uses + c.count)
        });

    HashtagStats {
        unique_hashtags: tags.len(),
        avg_hashtags_per_post: round_to(
            mean_u64(rated.iter().map(|r| r.post.hashtags.len() as u64)),
            1,
        ),
        top_hashtags: tags.into_iter().take(TOP_HASHTAGS).collect(),
        branded_hashtags: branded_tags,
        branded_share_pct: pct(branded_usage, total_usage),
        total_usage,
    }
}
