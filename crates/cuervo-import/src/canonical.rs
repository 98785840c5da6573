//! The canonical CSV folder: `posts_data.csv`, `brand_profiles.csv`,
//! `hashtag_tracking.csv` and `creator_collabs.csv`.
//!
//! Custom mode reads a hand-maintained folder in this layout; a vendor import
//! can be written out in it; blank templates can be generated for manual
//! collection. Label columns left blank (or holding an unknown label) are
//! filled in by the caption classifier on read.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use cuervo_classify::{caption_stats, classify, ClassifyContext};
use cuervo_core::{
    is_branded_hashtag, BrandConfig, BrandProfile, BrandRegistry, CaptionTone, ContentTheme,
    CtaType, FollowerSource, Platform, Post, PostType, VisualStyle,
};
use serde::{Deserialize, Serialize};

use crate::error::ImportError;
use crate::numbers::{
    count_or_zero, parse_count, parse_decimal, parse_flag, parse_percent, parse_time,
    parse_timestamp,
};
use crate::summary::{ImportSummary, ImportWarning};
use crate::vendor::{resolve_platform, resolve_post_type};

pub const POSTS_FILE: &str = "posts_data.csv";
pub const PROFILES_FILE: &str = "brand_profiles.csv";
pub const HASHTAGS_FILE: &str = "hashtag_tracking.csv";
pub const CREATORS_FILE: &str = "creator_collabs.csv";

const POST_COLUMNS: &[&str] = &[
    "brand",
    "platform",
    "post_url",
    "post_date",
    "post_time",
    "post_type",
    "video_length_seconds",
    "caption_text",
    "hashtags",
    "likes",
    "comments",
    "shares",
    "saves",
    "views",
    "impressions",
    "reach",
    "engagement_rate_manual",
    "content_theme",
    "visual_style",
    "caption_tone",
    "cta_type",
    "has_creator_collab",
    "creator_handle",
    "has_music_audio",
    "audio_description",
    "emoji_count_in_caption",
    "caption_word_count",
    "mentions_count",
    "is_paid_partnership",
    "notes",
];

const PROFILE_COLUMNS: &[&str] = &[
    "brand",
    "platform",
    "handle",
    "followers",
    "following",
    "total_posts",
    "aggregate_er",
    "bio_text",
    "bio_link",
    "is_verified",
    "profile_category",
    "date_collected",
    "follower_source",
    "notes",
];

const HASHTAG_COLUMNS: &[&str] = &[
    "brand",
    "hashtag",
    "times_used_in_30_days",
    "is_branded_hashtag",
    "estimated_hashtag_volume",
    "category",
    "notes",
];

const CREATOR_COLUMNS: &[&str] = &[
    "brand",
    "platform",
    "creator_handle",
    "creator_follower_count",
    "creator_category",
    "collab_type",
    "post_url",
    "post_date",
    "engagement_on_post",
    "is_paid_partnership",
    "notes",
];

/// Brand hashtags pre-filled into the hashtag template. Campaign tags that
/// do not carry the brand's name are written as community tags.
const KNOWN_BRANDED_HASHTAGS: &[(&str, &[&str])] = &[
    ("Jose Cuervo", &["#JoseCuervo", "#Cuervo", "#CuervoMargarita", "#HaveACuervoDay"]),
    ("Patron", &["#Patron", "#PatronTequila", "#SimplyPerfect", "#PatronMargarita"]),
    ("Don Julio", &["#DonJulio", "#DonJulioTequila", "#DonJulio1942"]),
    ("Casamigos", &["#Casamigos", "#CasaAmigos", "#CasaFriends"]),
    ("Espolon", &["#Espolon", "#EspolonTequila"]),
    ("Teremana", &["#Teremana", "#TeremanaTequila", "#TeremanaTime"]),
    ("1800 Tequila", &["#1800Tequila", "#1800", "#1800Cristalino", "#1800Reposado"]),
    ("Cazadores", &["#Cazadores", "#CazadoresTequila"]),
    ("Hornitos", &["#Hornitos", "#HornitosTequila", "#HornitosPlata"]),
];

/// One `posts_data.csv` row as written in the spreadsheet. Every cell is text
/// so that a partially filled row still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    pub brand: String,
    pub platform: String,
    pub post_url: String,
    pub post_date: String,
    pub post_time: String,
    pub post_type: String,
    pub video_length_seconds: String,
    pub caption_text: String,
    pub hashtags: String,
    pub likes: String,
    pub comments: String,
    pub shares: String,
    pub saves: String,
    pub views: String,
    pub impressions: String,
    pub reach: String,
    pub engagement_rate_manual: String,
    pub content_theme: String,
    pub visual_style: String,
    pub caption_tone: String,
    pub cta_type: String,
    pub has_creator_collab: String,
    pub creator_handle: String,
    pub has_music_audio: String,
    pub audio_description: String,
    pub emoji_count_in_caption: String,
    pub caption_word_count: String,
    pub mentions_count: String,
    pub is_paid_partnership: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub brand: String,
    pub platform: String,
    pub handle: String,
    pub followers: String,
    pub following: String,
    pub total_posts: String,
    pub aggregate_er: String,
    pub bio_text: String,
    pub bio_link: String,
    pub is_verified: String,
    pub profile_category: String,
    pub date_collected: String,
    pub follower_source: String,
    pub notes: String,
}

#[derive(Debug, Clone, Serialize)]
struct HashtagRecord {
    brand: String,
    hashtag: String,
    times_used_in_30_days: String,
    is_branded_hashtag: &'static str,
    estimated_hashtag_volume: String,
    category: &'static str,
    notes: String,
}

#[derive(Debug, Clone, Serialize)]
struct CreatorRecord {
    brand: String,
    platform: String,
    creator_handle: String,
    creator_follower_count: String,
    creator_category: String,
    collab_type: String,
    post_url: String,
    post_date: String,
    engagement_on_post: String,
    is_paid_partnership: &'static str,
    notes: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn opt_to_string<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn non_blank(raw: &str) -> Option<&str> {
    let t = raw.trim();
    (!t.is_empty()).then_some(t)
}

impl From<&Post> for PostRecord {
    fn from(p: &Post) -> Self {
        Self {
            brand: p.brand.clone(),
            platform: p.platform.to_string(),
            post_url: p.post_url.clone(),
            post_date: p.post_date.format("%Y-%m-%d").to_string(),
            post_time: opt_to_string(p.post_time.map(|t| t.format("%H:%M"))),
            post_type: p.post_type.to_string(),
            video_length_seconds: String::new(),
            caption_text: p.caption.clone(),
            hashtags: p.hashtags.iter().cloned().collect::<Vec<_>>().join(" "),
            likes: p.likes.to_string(),
            comments: p.comments.to_string(),
            shares: p.shares.to_string(),
            saves: p.saves.to_string(),
            views: p.views.to_string(),
            impressions: opt_to_string(p.impressions),
            reach: opt_to_string(p.reach),
            engagement_rate_manual: opt_to_string(p.vendor_engagement_rate),
            content_theme: p.content_theme.to_string(),
            visual_style: p.visual_style.to_string(),
            caption_tone: p.caption_tone.to_string(),
            cta_type: p.cta_type.to_string(),
            has_creator_collab: yes_no(p.has_creator_collab).to_string(),
            creator_handle: p.creator_handle.clone().unwrap_or_default(),
            has_music_audio: yes_no(p.post_type.is_video()).to_string(),
            audio_description: String::new(),
            emoji_count_in_caption: p.emoji_count.to_string(),
            caption_word_count: p.caption_word_count.to_string(),
            mentions_count: p.mentions_count.to_string(),
            is_paid_partnership: yes_no(p.is_paid_partnership).to_string(),
            notes: p
                .source
                .as_ref()
                .map(|s| format!("Imported from {s}"))
                .unwrap_or_default(),
        }
    }
}

impl From<&BrandProfile> for ProfileRecord {
    fn from(p: &BrandProfile) -> Self {
        Self {
            brand: p.brand.clone(),
            platform: p.platform.to_string(),
            handle: p.handle.clone().unwrap_or_default(),
            followers: opt_to_string(p.followers),
            total_posts: opt_to_string(p.posts_in_period),
            aggregate_er: opt_to_string(p.aggregate_engagement_rate),
            date_collected: opt_to_string(p.collected_on.map(|d| d.format("%Y-%m-%d"))),
            follower_source: p.follower_source.to_string(),
            ..Self::default()
        }
    }
}

/// Parse a `hashtags` cell ("#a #B") into lowercased tags.
fn parse_hashtag_cell(raw: &str) -> std::collections::BTreeSet<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| t.starts_with('#') && t.len() > 1)
        .map(str::to_lowercase)
        .collect()
}

fn count_cell(raw: &str, derived: u32) -> u32 {
    parse_count(raw)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(derived)
}

/// Convert one spreadsheet row already matched to `brand`. `Ok(None)` means
/// the row was an ephemeral post and was excluded.
fn post_from_record(rec: PostRecord, brand: &BrandConfig) -> Result<Option<Post>, String> {
    let platform = Platform::from_label(&rec.platform)
        .or_else(|| resolve_platform(&rec.platform))
        .ok_or_else(|| format!("untracked platform '{}'", rec.platform))?;
    let (post_date, stamped_time) = parse_timestamp(&rec.post_date)
        .ok_or_else(|| format!("unparseable post date '{}'", rec.post_date))?;
    let post_type = PostType::from_label(&rec.post_type)
        .unwrap_or_else(|| resolve_post_type(&rec.post_type, platform, ""));
    if post_type.is_ephemeral() {
        return Ok(None);
    }

    let caption = rec.caption_text;
    let labels = classify(&caption, &ClassifyContext::for_brand(Some(brand)));
    let stats = caption_stats(&caption);

    let has_creator_collab =
        non_blank(&rec.has_creator_collab).map_or(labels.has_creator_collab, parse_flag);
    let creator_handle = non_blank(&rec.creator_handle)
        .map(str::to_string)
        .or(labels.creator_handle)
        .filter(|_| has_creator_collab);

    Ok(Some(Post {
        brand: brand.name.clone(),
        platform,
        post_url: rec.post_url,
        post_date,
        post_time: parse_time(&rec.post_time).or(stamped_time),
        post_type,
        hashtags: non_blank(&rec.hashtags).map_or(stats.hashtags, parse_hashtag_cell),
        likes: count_or_zero(Some(&rec.likes)),
        comments: count_or_zero(Some(&rec.comments)),
        shares: count_or_zero(Some(&rec.shares)),
        saves: count_or_zero(Some(&rec.saves)),
        views: count_or_zero(Some(&rec.views)),
        impressions: parse_count(&rec.impressions),
        reach: parse_count(&rec.reach),
        vendor_engagement_rate: parse_percent(&rec.engagement_rate_manual),
        content_theme: ContentTheme::from_label(&rec.content_theme).unwrap_or(labels.content_theme),
        visual_style: VisualStyle::from_label(&rec.visual_style).unwrap_or(labels.visual_style),
        caption_tone: CaptionTone::from_label(&rec.caption_tone).unwrap_or(labels.caption_tone),
        cta_type: CtaType::from_label(&rec.cta_type).unwrap_or(labels.cta_type),
        has_creator_collab,
        creator_handle,
        is_paid_partnership: non_blank(&rec.is_paid_partnership)
            .map_or(labels.is_paid_partnership, parse_flag),
        caption_word_count: count_cell(&rec.caption_word_count, stats.word_count),
        emoji_count: count_cell(&rec.emoji_count_in_caption, stats.emoji_count),
        mentions_count: count_cell(&rec.mentions_count, stats.mentions_count),
        source: Some(POSTS_FILE.to_string()),
        caption,
    }))
}

fn profile_from_record(rec: &ProfileRecord, brand: &BrandConfig) -> Result<BrandProfile, String> {
    let platform = Platform::from_label(&rec.platform)
        .or_else(|| resolve_platform(&rec.platform))
        .ok_or_else(|| format!("untracked platform '{}'", rec.platform))?;
    Ok(BrandProfile {
        brand: brand.name.clone(),
        platform,
        handle: non_blank(&rec.handle).map(str::to_string),
        followers: parse_count(&rec.followers),
        posts_in_period: parse_count(&rec.total_posts).and_then(|v| u32::try_from(v).ok()),
        aggregate_engagement_rate: parse_decimal(&rec.aggregate_er),
        collected_on: parse_timestamp(&rec.date_collected).map(|(d, _)| d),
        follower_source: FollowerSource::from_label(&rec.follower_source)
            .unwrap_or(FollowerSource::Manual),
    })
}

fn read_records<T, R, F, O>(
    reader: R,
    file: &str,
    summary: &mut ImportSummary,
    mut convert: F,
) -> Result<Vec<O>, ImportError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
    F: FnMut(T, usize, &mut ImportSummary) -> Result<Option<O>, String>,
{
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut out = Vec::new();

    for (i, result) in rdr.deserialize::<T>().enumerate() {
        let row = i + 2;
        let outcome = result
            .map_err(|e| e.to_string())
            .and_then(|rec| convert(rec, row, summary));
        match outcome {
            Ok(Some(item)) => out.push(item),
            Ok(None) => {}
            Err(reason) => summary.warn(ImportWarning::RowSkipped {
                file: file.to_string(),
                row,
                reason,
            }),
        }
    }
    Ok(out)
}

/// Match a row's brand cell to the registry, recording an unresolved brand
/// warning when nothing matches.
fn resolve_brand<'r>(
    registry: &'r BrandRegistry,
    raw: &str,
    file: &str,
    row: usize,
    summary: &mut ImportSummary,
) -> Option<&'r BrandConfig> {
    let brand = registry.resolve(raw);
    if brand.is_none() {
        summary.warn(ImportWarning::UnresolvedBrand {
            file: file.to_string(),
            row,
            handle: raw.to_string(),
        });
    }
    brand
}

/// Read `posts_data.csv` rows from any reader.
///
/// # Errors
///
/// Returns [`ImportError::Csv`] only for failures that are not confined to a
/// row; malformed rows are recorded in `summary`.
pub fn read_posts<R: Read>(
    reader: R,
    registry: &BrandRegistry,
    summary: &mut ImportSummary,
) -> Result<Vec<Post>, ImportError> {
    read_records(reader, POSTS_FILE, summary, |rec: PostRecord, row, summary| {
        let Some(brand) = resolve_brand(registry, &rec.brand, POSTS_FILE, row, summary) else {
            return Ok(None);
        };
        let post = post_from_record(rec, brand)?;
        if post.is_none() {
            summary.stories_excluded += 1;
        }
        Ok(post)
    })
}

/// Read `brand_profiles.csv` rows from any reader.
///
/// # Errors
///
/// See [`read_posts`].
pub fn read_profiles<R: Read>(
    reader: R,
    registry: &BrandRegistry,
    summary: &mut ImportSummary,
) -> Result<Vec<BrandProfile>, ImportError> {
    read_records(reader, PROFILES_FILE, summary, |rec: ProfileRecord, row, summary| {
        match resolve_brand(registry, &rec.brand, PROFILES_FILE, row, summary) {
            Some(brand) => profile_from_record(&rec, brand).map(Some),
            None => Ok(None),
        }
    })
}

fn open_required(dir: &Path, name: &str) -> Result<File, ImportError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(ImportError::data_source(dir, format!("missing {name}")));
    }
    File::open(&path).map_err(|e| ImportError::io(&path, e))
}

/// Read a canonical folder.
///
/// # Errors
///
/// Returns [`ImportError::DataSource`] when `dir` is missing or lacks
/// `posts_data.csv` or `brand_profiles.csv`.
pub fn read_canonical_folder(
    dir: &Path,
    registry: &BrandRegistry,
) -> Result<(Vec<Post>, Vec<BrandProfile>, ImportSummary), ImportError> {
    if !dir.is_dir() {
        return Err(ImportError::data_source(dir, "directory does not exist"));
    }
    let posts_file = open_required(dir, POSTS_FILE)?;
    let profiles_file = open_required(dir, PROFILES_FILE)?;

    let mut summary = ImportSummary::default();
    let posts = read_posts(posts_file, registry, &mut summary)?;
    let profiles = read_profiles(profiles_file, registry, &mut summary)?;

    summary.files_imported = vec![POSTS_FILE.to_string(), PROFILES_FILE.to_string()];
    summary.posts = posts.len();
    summary.profiles = profiles.len();
    summary.brands_found = posts.iter().map(|p| p.brand.clone()).collect();
    summary.platforms_found = posts.iter().map(|p| p.platform).collect();

    tracing::info!(
        dir = %dir.display(),
        posts = summary.posts,
        profiles = summary.profiles,
        rows_skipped = summary.rows_skipped,
        "canonical folder loaded"
    );
    Ok((posts, profiles, summary))
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), ImportError> {
    let name = path.display().to_string();
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ImportError::csv(&name, e))?;
    wtr.write_record(header)
        .map_err(|e| ImportError::csv(&name, e))?;
    for row in rows {
        wtr.serialize(row).map_err(|e| ImportError::csv(&name, e))?;
    }
    wtr.flush().map_err(|e| ImportError::io(path, e))
}

fn hashtag_category(branded: bool) -> &'static str {
    if branded {
        "Branded"
    } else {
        "Community"
    }
}

fn hashtag_rows(posts: &[Post], registry: &BrandRegistry) -> Vec<HashtagRecord> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for post in posts {
        for tag in &post.hashtags {
            *counts.entry((post.brand.as_str(), tag.as_str())).or_default() += 1;
        }
    }
    let mut terms: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    counts
        .into_iter()
        .map(|((brand, tag), n)| {
            let terms = terms
                .entry(brand)
                .or_insert_with(|| registry.branded_terms(brand));
            let branded = is_branded_hashtag(tag, terms);
            HashtagRecord {
                brand: brand.to_string(),
                hashtag: tag.to_string(),
                times_used_in_30_days: n.to_string(),
                is_branded_hashtag: yes_no(branded),
                estimated_hashtag_volume: "0".to_string(),
                category: hashtag_category(branded),
                notes: String::new(),
            }
        })
        .collect()
}

fn creator_rows(posts: &[Post]) -> Vec<CreatorRecord> {
    posts
        .iter()
        .filter(|p| p.has_creator_collab)
        .map(|p| CreatorRecord {
            brand: p.brand.clone(),
            platform: p.platform.to_string(),
            creator_handle: p.creator_handle.clone().unwrap_or_default(),
            creator_follower_count: "0".to_string(),
            creator_category: String::new(),
            collab_type: "Unknown".to_string(),
            post_url: p.post_url.clone(),
            post_date: p.post_date.format("%Y-%m-%d").to_string(),
            engagement_on_post: p.likes.saturating_add(p.comments).to_string(),
            is_paid_partnership: yes_no(p.is_paid_partnership),
            notes: "Auto-detected from caption".to_string(),
        })
        .collect()
}

fn ensure_dir(dir: &Path) -> Result<(), ImportError> {
    std::fs::create_dir_all(dir).map_err(|e| ImportError::io(dir, e))
}

/// Write posts and profiles as a canonical folder, together with the derived
/// hashtag and creator tables. Returns the written paths.
///
/// # Errors
///
/// Returns [`ImportError::Io`] or [`ImportError::Csv`] when a file cannot be
/// written.
pub fn write_canonical_folder(
    dir: &Path,
    posts: &[Post],
    profiles: &[BrandProfile],
    registry: &BrandRegistry,
) -> Result<Vec<PathBuf>, ImportError> {
    ensure_dir(dir)?;

    let post_rows: Vec<PostRecord> = posts.iter().map(PostRecord::from).collect();
    let profile_rows: Vec<ProfileRecord> = profiles.iter().map(ProfileRecord::from).collect();

    let paths = [POSTS_FILE, PROFILES_FILE, HASHTAGS_FILE, CREATORS_FILE].map(|f| dir.join(f));
    write_rows(&paths[0], POST_COLUMNS, &post_rows)?;
    write_rows(&paths[1], PROFILE_COLUMNS, &profile_rows)?;
    write_rows(&paths[2], HASHTAG_COLUMNS, &hashtag_rows(posts, registry))?;
    write_rows(&paths[3], CREATOR_COLUMNS, &creator_rows(posts))?;

    tracing::info!(dir = %dir.display(), posts = posts.len(), profiles = profiles.len(), "canonical folder written");
    Ok(paths.to_vec())
}

fn example_post_row() -> PostRecord {
    PostRecord {
        brand: "Jose Cuervo".to_string(),
        platform: "Instagram".to_string(),
        post_url: "https://instagram.com/p/EXAMPLE".to_string(),
        post_date: "2026-01-15".to_string(),
        post_time: "14:30".to_string(),
        post_type: "Reel".to_string(),
        video_length_seconds: "28".to_string(),
        caption_text: "Nothing beats a Cuervo Margarita on a Friday 🍹 #MargaritaSeason".to_string(),
        hashtags: "#MargaritaSeason #JoseCuervo #Tequila #FridayVibes".to_string(),
        likes: "4520".to_string(),
        comments: "187".to_string(),
        shares: "92".to_string(),
        saves: "310".to_string(),
        views: "125000".to_string(),
        content_theme: ContentTheme::CocktailRecipe.to_string(),
        visual_style: VisualStyle::RawUgc.to_string(),
        caption_tone: CaptionTone::Playful.to_string(),
        cta_type: CtaType::TryThisRecipe.to_string(),
        has_creator_collab: "No".to_string(),
        has_music_audio: "Yes".to_string(),
        audio_description: "Trending audio - original sound".to_string(),
        emoji_count_in_caption: "1".to_string(),
        caption_word_count: "9".to_string(),
        mentions_count: "0".to_string(),
        is_paid_partnership: "No".to_string(),
        notes: "Example row - delete this".to_string(),
        ..PostRecord::default()
    }
}

/// Write blank collection templates for every configured brand.
///
/// # Errors
///
/// Returns [`ImportError::Io`] or [`ImportError::Csv`] when a file cannot be
/// written.
pub fn write_templates(dir: &Path, registry: &BrandRegistry) -> Result<Vec<PathBuf>, ImportError> {
    ensure_dir(dir)?;
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let today = today.as_str();

    let profiles: Vec<ProfileRecord> = registry
        .brands()
        .iter()
        .flat_map(|b| {
            Platform::ALL.iter().map(move |p| ProfileRecord {
                brand: b.name.clone(),
                platform: p.to_string(),
                date_collected: today.to_string(),
                follower_source: FollowerSource::Manual.to_string(),
                ..ProfileRecord::default()
            })
        })
        .collect();

    let hashtags: Vec<HashtagRecord> = KNOWN_BRANDED_HASHTAGS
        .iter()
        .filter_map(|(brand, tags)| registry.get(brand).map(|b| (b, *tags)))
        .flat_map(|(brand, tags)| {
            let terms = brand.branded_terms();
            tags.iter()
                .map(|tag| {
                    let branded = is_branded_hashtag(tag, &terms);
                    HashtagRecord {
                        brand: brand.name.clone(),
                        hashtag: (*tag).to_string(),
                        times_used_in_30_days: String::new(),
                        is_branded_hashtag: yes_no(branded),
                        estimated_hashtag_volume: String::new(),
                        category: hashtag_category(branded),
                        notes: String::new(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let creator_example = CreatorRecord {
        brand: "Jose Cuervo".to_string(),
        platform: "Instagram".to_string(),
        creator_handle: "@example_creator".to_string(),
        creator_follower_count: "250000".to_string(),
        creator_category: "Food & Drink".to_string(),
        collab_type: "Branded Content".to_string(),
        post_url: "https://instagram.com/p/EXAMPLE".to_string(),
        post_date: "2026-01-15".to_string(),
        engagement_on_post: "8500".to_string(),
        is_paid_partnership: "Yes",
        notes: "Example row - delete this".to_string(),
    };

    let paths = [POSTS_FILE, PROFILES_FILE, HASHTAGS_FILE, CREATORS_FILE].map(|f| dir.join(f));
    write_rows(&paths[0], POST_COLUMNS, &[example_post_row()])?;
    write_rows(&paths[1], PROFILE_COLUMNS, &profiles)?;
    write_rows(&paths[2], HASHTAG_COLUMNS, &hashtags)?;
    write_rows(&paths[3], CREATOR_COLUMNS, &[creator_example])?;

    tracing::info!(dir = %dir.display(), "templates written");
    Ok(paths.to_vec())
}
