//! Splits report text into named sections on fixed heading lines.

use std::collections::BTreeMap;

/// Headings that delimit sections. A line is a heading only when, trimmed,
/// it equals one of these ignoring case.
pub const SECTION_HEADINGS: &[&str] = &[
    "Executive Summary",
    "Audience Profile",
    "Snapshot",
    "Creator Summary",
    "Hashtag Analysis",
    "Interesting Conversations",
    "Conversation Map",
    "Content Trends",
    "Brand Mentions",
    "In-Market Campaigns",
    "How to Win With This Audience",
    "Creator Archetypes",
    "Sponsorship Analysis",
    "Future Sponsorship Suggestions",
    "Engagement Analysis",
    "Posting Analysis",
    "Summary Statistics - By Post Type",
    "Summary Statistics - All Posts",
    "Summary Statistics",
    "Most / Least Liked",
    "Most / Least Comments",
    "Most / Least Engaged",
    "News Analysis",
    "Top Stories",
    "Competitor Coverage",
    "Trending Narratives",
    "Strategic Implications",
    "Appendix",
];

const APPENDIX: &str = "Appendix";
pub const APPENDIX_PREFIX: &str = "appendix_";

const BOILERPLATE_START: &str = "How to use this deck";
const BOILERPLATE_END: &str = "Autostrat Team";

/// Section bodies keyed by canonical heading. Extractors [`take`] what they
/// consume; whatever remains is reported as unrecognized.
///
/// [`take`]: Sections::take
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sections {
    entries: BTreeMap<String, String>,
}

impl Sections {
    /// Removes and returns a section body. Empty bodies count as absent.
    pub fn take(&mut self, heading: &str) -> Option<String> {
        self.entries.remove(heading).filter(|body| !body.is_empty())
    }

    #[must_use]
    pub fn get(&self, heading: &str) -> Option<&str> {
        self.entries.get(heading).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Everything no extractor claimed. Empty bodies are dropped.
    #[must_use]
    pub fn into_remaining(self) -> BTreeMap<String, String> {
        self.entries
            .into_iter()
            .filter(|(_, body)| !body.is_empty())
            .collect()
    }
}

/// Removes the vendor's "How to use this deck" instructions, which run up to
/// the end of the line naming the vendor team.
#[must_use]
pub fn strip_boilerplate(text: &str) -> String {
    let Some(start) = text.find(BOILERPLATE_START) else {
        return text.to_string();
    };
    let Some(team) = text[start..].find(BOILERPLATE_END).map(|i| start + i) else {
        return text.to_string();
    };
    let end = text[team..].find('\n').map_or(text.len(), |i| team + i);
    format!("{}{}", &text[..start], &text[end..])
}

fn heading_of(line: &str) -> Option<&'static str> {
    let trimmed = line.trim();
    SECTION_HEADINGS
        .iter()
        .copied()
        .find(|h| h.eq_ignore_ascii_case(trimmed))
}

/// Splits `text` into sections. Text before the first heading (the title
/// slide) is discarded. Headings after `Appendix` are stored under
/// `appendix_<heading>` so they never overwrite the main sections. A heading
/// repeated in the main body has its bodies joined with a blank line.
#[must_use]
pub fn split_sections(text: &str) -> Sections {
    let cleaned = strip_boilerplate(text);
    let mut entries: BTreeMap<String, String> = BTreeMap::new();
    let mut current: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_appendix = false;

    for line in cleaned.lines() {
        if let Some(heading) = heading_of(line) {
            if let Some(key) = current.take() {
                push_section(&mut entries, key, &buffer);
            }
            buffer.clear();
            let key = if in_appendix && heading != APPENDIX {
                format!("{APPENDIX_PREFIX}{heading}")
            } else {
                heading.to_string()
            };
            if heading == APPENDIX {
                in_appendix = true;
            }
            current = Some(key);
        } else {
            buffer.push(line);
        }
    }
    if let Some(key) = current {
        push_section(&mut entries, key, &buffer);
    }

    Sections { entries }
}

fn push_section(entries: &mut BTreeMap<String, String>, key: String, lines: &[&str]) {
    let body = lines.join("\n").trim().to_string();
    let existing = entries.entry(key).or_default();
    if body.is_empty() {
        return;
    }
    if !existing.is_empty() {
        existing.push_str("\n\n");
    }
    existing.push_str(&body);
}

/// Splits text into paragraphs on blank lines, trimming each.
pub(crate) fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n").trim().to_string());
    }
    out
}

/// Paragraphs longer than `min_chars`.
pub(crate) fn items_longer_than(text: &str, min_chars: usize) -> Vec<String> {
    paragraphs(text)
        .into_iter()
        .filter(|p| p.chars().count() > min_chars)
        .collect()
}

/// Splits a section on sub-heading lines (exact trimmed match). Text before
/// the first sub-heading is stored under `""`. Later repeats of a sub-heading
/// replace earlier ones.
pub(crate) fn split_sub_headings<'h>(
    text: &str,
    sub_headings: &[&'h str],
) -> BTreeMap<&'h str, String> {
    let mut parts = BTreeMap::new();
    let mut current: &'h str = "";
    let mut buffer: Vec<&str> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(h) = sub_headings.iter().copied().find(|h| *h == trimmed) {
            parts.insert(current, buffer.join("\n").trim().to_string());
            buffer.clear();
            current = h;
        } else {
            buffer.push(line);
        }
    }
    parts.insert(current, buffer.join("\n").trim().to_string());
    parts
}
