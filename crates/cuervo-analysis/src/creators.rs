//! Creator collaboration patterns.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::engagement::RatedPost;
use crate::tally::{mean, pct, round_to};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatorStats {
    pub collab_posts: usize,
    pub collab_pct: f64,
    pub unique_creators: usize,
    pub avg_collab_engagement_rate: Option<f64>,
    pub avg_non_collab_engagement_rate: Option<f64>,
    /// Collab ER minus non-collab ER, in percentage points. Needs rated posts
    /// on both sides.
    pub collab_engagement_lift: Option<f64>,
    pub paid_partnerships: usize,
    pub organic_collabs: usize,
}

/// Collaboration stats for one brand across platforms.
#[must_use]
pub fn creator_stats(rated: &[RatedPost<'_>]) -> CreatorStats {
    let (collab, solo): (Vec<&RatedPost<'_>>, Vec<&RatedPost<'_>>) =
        rated.iter().partition(|r| r.post.has_creator_collab);

    let collab_er = mean(collab.iter().filter_map(|r| r.engagement_rate));
    let solo_er = mean(solo.iter().filter_map(|r| r.engagement_rate));
    let creators: BTreeSet<String> = collab
        .iter()
        .filter_map(|r| r.post.creator_handle.as_deref())
        .map(str::to_lowercase)
        .collect();
    let paid = collab.iter().filter(|r| r.post.is_paid_partnership).count();

    CreatorStats {
        collab_posts: collab.len(),
        collab_pct: pct(collab.len(), rated.len()),
        unique_creators: creators.len(),
        avg_collab_engagement_rate: collab_er.map(|v| round_to(v, 3)),
        avg_non_collab_engagement_rate: solo_er.map(|v| round_to(v, 3)),
        collab_engagement_lift: collab_er
            .zip(solo_er)
            .map(|(c, s)| round_to(c - s, 3)),
        paid_partnerships: paid,
        organic_collabs: collab.len() - paid,
    }
}

/// How often one creator appears across the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorFrequency {
    pub handle: String,
    pub posts: usize,
    pub brands: BTreeSet<String>,
}

/// Every creator handle on a collab post, most frequent first.
#[must_use]
pub fn creator_frequency(rated: &[RatedPost<'_>]) -> Vec<CreatorFrequency> {
    let mut by_handle: BTreeMap<String, CreatorFrequency> = BTreeMap::new();
    for r in rated.iter().filter(|r| r.post.has_creator_collab) {
        let Some(handle) = r.post.creator_handle.as_deref() else {
            continue;
        };
        let key = handle.to_lowercase();
        let entry = by_handle
            .entry(key.clone())
            .or_insert_with(|| CreatorFrequency {
                handle: key,
                posts: 0,
                brands: BTreeSet::new(),
            });
        entry.posts += 1;
        entry.brands.insert(r.post.brand.clone());
    }
    let mut out: Vec<CreatorFrequency> = by_handle.into_values().collect();
    out.sort_by(|a, b| b.posts.cmp(&a.posts));
    out
}
