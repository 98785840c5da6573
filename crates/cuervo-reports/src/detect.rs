//! Title-slide detection: report family, identifier, and printed date.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ReportError;
use crate::types::ReportType;

/// Title-line signatures, lower-cased. Exact matches are tried before
/// containment so the longer search variants never shadow a shorter title.
pub const SIGNATURES: &[(&str, ReportType)] = &[
    ("tiktok hashtag analysis presentation", ReportType::TiktokHashtag),
    ("tiktok hashtag search analysis presentation", ReportType::TiktokHashtag),
    ("tiktok profile analysis presentation", ReportType::TiktokProfile),
    ("instagram profile analysis presentation", ReportType::InstagramProfile),
    ("instagram profile presentation", ReportType::InstagramProfile),
    ("instagram hashtag analysis presentation", ReportType::InstagramHashtag),
    ("instagram hashtag search analysis presentation", ReportType::InstagramHashtag),
    ("tiktok keyword analysis presentation", ReportType::TiktokKeyword),
    ("tiktok keywords analysis presentation", ReportType::TiktokKeyword),
    ("tiktok keyword search analysis presentation", ReportType::TiktokKeyword),
    ("tiktok keywords search analysis presentation", ReportType::TiktokKeyword),
    ("google news analysis presentation", ReportType::GoogleNews),
    ("google news presentation", ReportType::GoogleNews),
];

const TITLE_WINDOW: usize = 5;
const DATE_WINDOW: usize = 8;
const MIN_LINES: usize = 3;

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid ISO date regex"));

static LONG_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+ \d{1,2},?\s*\d{4}").expect("valid long date regex")
});

/// What the title slide says about a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub report_type: ReportType,
    pub identifier: String,
    pub report_date: Option<String>,
}

/// Reads the report family from the first few non-empty lines.
///
/// # Errors
///
/// Returns [`ReportError::Parse`] when the text has fewer than three
/// non-empty lines or no line carries a known title.
pub fn detect_title(text: &str) -> Result<TitleInfo, ReportError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() < MIN_LINES {
        return Err(ReportError::Parse(
            "text too short to detect report type".to_string(),
        ));
    }

    let head = &lines[..lines.len().min(TITLE_WINDOW)];
    let report_type = match_signature(head).ok_or_else(|| {
        ReportError::Parse(format!(
            "no known report title in first lines: {}",
            head.join(" | ")
        ))
    })?;

    Ok(TitleInfo {
        report_type,
        identifier: identifier_from(lines[0]),
        report_date: find_date(&lines[..lines.len().min(DATE_WINDOW)]),
    })
}

fn match_signature(head: &[&str]) -> Option<ReportType> {
    let lowered: Vec<String> = head.iter().map(|l| l.to_lowercase()).collect();
    lowered
        .iter()
        .find_map(|line| {
            SIGNATURES
                .iter()
                .find(|(sig, _)| line == sig)
                .map(|(_, t)| *t)
        })
        .or_else(|| {
            lowered.iter().find_map(|line| {
                SIGNATURES
                    .iter()
                    .find(|(sig, _)| line.contains(sig))
                    .map(|(_, t)| *t)
            })
        })
}

/// `'entrapranure's TikTok Profile Analysis'` → `entrapranure`.
fn identifier_from(line: &str) -> String {
    let unquoted = line.trim_matches(|c| c == '\'' || c == '"').trim();
    let name = unquoted
        .split_once("'s ")
        .map_or(unquoted, |(before, _)| before);
    name.trim().to_string()
}

fn find_date(lines: &[&str]) -> Option<String> {
    lines.iter().find_map(|line| {
        ISO_DATE_RE
            .find(line)
            .or_else(|| LONG_DATE_RE.find(line))
            .map(|m| m.as_str().to_string())
    })
}
