//! Vendor column reconciliation and report-shape detection.

use std::collections::HashMap;

use csv::StringRecord;

use crate::numbers::is_placeholder;

/// Canonical fields a vendor column can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Brand,
    Platform,
    PostUrl,
    PostDate,
    PostType,
    ContentType,
    Caption,
    Likes,
    Comments,
    Shares,
    Saves,
    Views,
    Impressions,
    Reach,
    Engagements,
    EngagementRate,
    PublishedPosts,
    Followers,
}

/// Known header spellings per field, in preference order. Headers are
/// compared after [`normalize_header`].
pub const COLUMN_ALIASES: &[(Field, &[&str])] = &[
    (
        Field::Brand,
        &[
            "profile", "profile name", "instagram profile", "tiktok profiles", "account", "brand",
            "author", "account name",
        ],
    ),
    (Field::Platform, &["network", "platform", "channel", "network type"]),
    (
        Field::PostUrl,
        &["link", "permalink", "perma link", "post permalink", "post link", "url", "post url"],
    ),
    (
        Field::PostDate,
        &[
            "date", "date published", "publish date", "created date", "created", "published",
            "date created", "post date",
        ],
    ),
    (Field::PostType, &["post type", "type", "media type"]),
    (Field::ContentType, &["content type"]),
    (
        Field::Caption,
        &[
            "post", "text", "message", "content", "post text", "caption", "description",
            "post message", "caption text",
        ],
    ),
    (Field::Likes, &["reactions", "likes", "like", "total likes", "post likes"]),
    (Field::Comments, &["comments", "replies", "comment", "total comments"]),
    (Field::Shares, &["shares", "retweets", "reposts", "share", "total shares"]),
    (Field::Saves, &["saves", "bookmarks", "save", "total saves"]),
    (
        Field::Views,
        &["video views", "views", "view", "total video views", "video plays", "plays"],
    ),
    (Field::Impressions, &["impressions", "organic impressions", "total impressions"]),
    (Field::Reach, &["reach", "organic reach", "total reach"]),
    (
        Field::Engagements,
        &["public engagements", "engagements", "total engagements", "engagement"],
    ),
    (
        Field::EngagementRate,
        &["engagement rate (per impression)", "engagement rate", "engagement rate %"],
    ),
    (
        Field::PublishedPosts,
        &["published posts", "published posts & reels", "total published posts"],
    ),
    (
        Field::Followers,
        &[
            "followers", "audience", "follower count", "total followers",
            "followers at time of post",
        ],
    ),
];

/// Header fragments that mark a post-level export.
const POST_LEVEL_MARKERS: &[&str] = &["post id", "permalink", "perma link"];

/// Header fragments that mark an aggregate (profile-per-day) export.
const AGGREGATE_MARKERS: &[&str] = &[
    "audience",
    "net audience growth",
    "% audience growth",
    "net follower growth",
    "% follower growth",
    "published posts",
    "published posts & reels",
];

/// What kind of rows a vendor file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportShape {
    /// One row per post.
    PostLevel,
    /// One row per profile per day, carrying follower and publishing totals.
    Aggregate,
}

/// Lowercase, trim, and turn `_`/`-` into spaces. A leading byte-order mark
/// is dropped.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decide a file's shape from its normalized headers.
///
/// A file that looks like both is treated as aggregate; aggregate exports
/// often carry a "post" column of their own.
#[must_use]
pub fn classify_headers(normalized: &[String]) -> Option<ReportShape> {
    let joined = normalized.join(" | ");
    let has = |name: &str| normalized.iter().any(|h| h == name);

    let is_aggregate = AGGREGATE_MARKERS.iter().any(|m| joined.contains(m));
    let is_post_level = POST_LEVEL_MARKERS.iter().any(|m| joined.contains(m))
        || (has("link") && has("post"));

    if is_aggregate {
        Some(ReportShape::Aggregate)
    } else if is_post_level {
        Some(ReportShape::PostLevel)
    } else {
        None
    }
}

/// Resolved positions of canonical fields within one file's header row.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    original: Vec<String>,
    normalized: Vec<String>,
    indices: HashMap<Field, usize>,
}

impl ColumnMap {
    #[must_use]
    pub fn from_headers(headers: &StringRecord) -> Self {
        let original: Vec<String> = headers.iter().map(str::to_string).collect();
        let normalized: Vec<String> = original.iter().map(|h| normalize_header(h)).collect();

        let mut indices = HashMap::new();
        for (field, aliases) in COLUMN_ALIASES {
            let found = aliases
                .iter()
                .find_map(|alias| normalized.iter().position(|h| h == alias));
            if let Some(idx) = found {
                indices.insert(*field, idx);
            }
        }

        Self {
            original,
            normalized,
            indices,
        }
    }

    #[must_use]
    pub fn shape(&self) -> Option<ReportShape> {
        classify_headers(&self.normalized)
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.indices.contains_key(&field)
    }

    /// Header text as it appeared in the file for `field`.
    #[must_use]
    pub fn header(&self, field: Field) -> Option<&str> {
        self.indices
            .get(&field)
            .and_then(|&i| self.original.get(i))
            .map(String::as_str)
    }

    /// Trimmed cell for `field`. `None` when the column is absent or the cell
    /// is blank or a placeholder such as `nan`.
    #[must_use]
    pub fn get<'r>(&self, record: &'r StringRecord, field: Field) -> Option<&'r str> {
        let idx = *self.indices.get(&field)?;
        record
            .get(idx)
            .map(str::trim)
            .filter(|v| !is_placeholder(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| normalize_header(c)).collect()
    }

    #[test]
    fn normalize_header_folds_separators() {
        assert_eq!(normalize_header("\u{feff} Post_Type "), "post type");
        assert_eq!(normalize_header("Perma-Link"), "perma link");
        assert_eq!(normalize_header("Engagement  Rate"), "engagement rate");
    }

    #[test]
    fn post_level_by_permalink() {
        let h = headers(&["Date", "Network", "Profile", "Permalink", "Post", "Likes"]);
        assert_eq!(classify_headers(&h), Some(ReportShape::PostLevel));
    }

    #[test]
    fn post_level_by_link_and_post() {
        let h = headers(&["Date", "Link", "Post", "Reactions"]);
        assert_eq!(classify_headers(&h), Some(ReportShape::PostLevel));
    }

    #[test]
    fn aggregate_by_audience() {
        let h = headers(&["Date", "Profile", "Audience", "Net Audience Growth"]);
        assert_eq!(classify_headers(&h), Some(ReportShape::Aggregate));
    }

    #[test]
    fn aggregate_wins_over_post_level() {
        let h = headers(&["Date", "Link", "Post", "Published Posts"]);
        assert_eq!(classify_headers(&h), Some(ReportShape::Aggregate));
    }

    #[test]
    fn unknown_shape() {
        let h = headers(&["Name", "Email", "Phone"]);
        assert_eq!(classify_headers(&h), None);
    }

    #[test]
    fn column_map_uses_first_matching_alias() {
        let record = StringRecord::from(vec!["Post", "Reactions", "Likes", "Network"]);
        let map = ColumnMap::from_headers(&record);
        let row = StringRecord::from(vec!["hello", "12", "99", "Instagram"]);
        // "reactions" precedes "likes" in the alias list.
        assert_eq!(map.get(&row, Field::Likes), Some("12"));
        assert_eq!(map.get(&row, Field::Caption), Some("hello"));
        assert_eq!(map.get(&row, Field::Platform), Some("Instagram"));
        assert!(!map.has(Field::Saves));
    }

    #[test]
    fn column_map_blank_cell_is_none() {
        let record = StringRecord::from(vec!["Profile", "Audience"]);
        let map = ColumnMap::from_headers(&record);
        let row = StringRecord::from(vec!["patron", "  "]);
        assert_eq!(map.get(&row, Field::Followers), None);
        assert_eq!(map.header(Field::Brand), Some("Profile"));
    }
}
