//! Field extractors for individual report sections.
//!
//! Input is the flattened text of a single section. Slide exports lose most
//! structure, so each extractor keys off sub-heading lines and paragraph
//! breaks and returns whatever it can recover; none of them fail.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::Regex;

use crate::sections::{items_longer_than, paragraphs, split_sub_headings};
use crate::types::{
    BrandMention, ConversationMap, CreatorArchetype, CreatorSummary, ExecutiveSummary,
    HashtagAnalysis, HowToWin, Snapshot, SponsorshipSuggestion, Sponsorships, SummaryStatistics,
    TitledBlock, TopPost,
};

static NUMBER_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d,]+(?:\.\d+)?\s*%?$").expect("valid number line regex"));

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("valid number regex"));

static TERRITORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Territory \d+").expect("valid territory regex"));

static CONVERSATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Conversation \d+").expect("valid conversation regex"));

static ARCHETYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"The [A-Z][^\n]{3,40}").expect("valid archetype regex"));

/// Reads `"1,624,521"`, `"6 %"`, or `"3.5"`; anything else is zero.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .replace([',', '%'], "")
        .trim()
        .parse()
        .unwrap_or(0.0)
}

fn first_number(line: &str) -> Option<f64> {
    NUMBER_RE.find(line).map(|m| parse_number(m.as_str()))
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Profile snapshot. Labels and values arrive grouped (all labels, then all
/// values), so each number line fills the oldest label still waiting.
#[must_use]
pub fn parse_snapshot(text: &str) -> Snapshot {
    let mut snapshot = Snapshot::default();
    let mut pending: VecDeque<&'static str> = VecDeque::new();

    for line in non_empty_lines(text) {
        let low = line.to_lowercase();
        let label = match low.as_str() {
            "followers" => Some("followers"),
            "following" => Some("following"),
            "avg likes" => Some("avg_likes"),
            _ if low.contains("avg comments") => Some("avg_comments"),
            _ if low.contains("avg engagement rate") => Some("avg_engagement_rate"),
            _ => None,
        };
        if let Some(label) = label {
            pending.push_back(label);
            continue;
        }
        if NUMBER_LINE_RE.is_match(line) {
            let Some(label) = pending.pop_front() else {
                continue;
            };
            let value = Some(parse_number(line));
            match label {
                "followers" => snapshot.followers = value,
                "following" => snapshot.following = value,
                "avg_likes" => snapshot.avg_likes = value,
                "avg_comments" => snapshot.avg_comments = value,
                _ => snapshot.avg_engagement_rate = value,
            }
        }
    }
    snapshot
}

#[must_use]
pub fn parse_executive_summary(text: &str) -> ExecutiveSummary {
    const SEARCHED: &str = "What You Searched";
    const WHY: &str = "Why You're Searching";

    let mut summary = ExecutiveSummary::default();
    if let Some((_, rest)) = text.split_once(SEARCHED) {
        match rest.split_once(WHY) {
            Some((term, purpose)) => {
                summary.search_term = first_line(term);
                summary.search_purpose = paragraphs(purpose).into_iter().next().unwrap_or_default();
            }
            None => summary.search_term = first_line(rest),
        }
    }

    summary.key_insights = paragraphs(text)
        .into_iter()
        .filter(|p| !p.contains(SEARCHED) && !p.contains(WHY))
        .filter(|p| p.chars().count() > 30)
        .collect();
    summary.overview = summary.key_insights.first().cloned().unwrap_or_default();
    summary
}

fn first_line(text: &str) -> String {
    non_empty_lines(text)
        .first()
        .map(|l| (*l).to_string())
        .unwrap_or_default()
}

#[must_use]
pub fn parse_creator_summary(text: &str) -> CreatorSummary {
    let parts = split_sub_headings(
        text,
        &[
            "Search Purpose",
            "Topline",
            "What it Means for You",
            "What it Means",
            "Common Themes and Topics",
            "Common Themes",
            "What Hits",
            "What Misses",
        ],
    );
    let part = |keys: &[&str]| {
        keys.iter()
            .find_map(|k| parts.get(k).filter(|v| !v.is_empty()).cloned())
            .unwrap_or_default()
    };
    let themes = part(&["Common Themes and Topics", "Common Themes"]);
    CreatorSummary {
        search_purpose: part(&["Search Purpose"]),
        topline: part(&["Topline", ""]),
        what_it_means: part(&["What it Means for You", "What it Means"]),
        common_themes: items_longer_than(&themes, 5),
        what_hits: part(&["What Hits"]),
        what_misses: part(&["What Misses"]),
    }
}

/// Lines short enough to be list entries rather than prose.
fn short_entries(text: &str, min_exclusive: usize) -> Vec<String> {
    non_empty_lines(text)
        .into_iter()
        .filter(|l| {
            let n = l.chars().count();
            n > min_exclusive && n < 40 && !l.ends_with('.')
        })
        .map(str::to_string)
        .collect()
}

#[must_use]
pub fn parse_sponsorships(text: &str) -> Sponsorships {
    let parts = split_sub_headings(
        text,
        &[
            "Sponsorship Summary",
            "Current Categories",
            "Integration Summary",
            "Current Companies",
        ],
    );
    let get = |k: &str| parts.get(k).cloned().unwrap_or_default();
    let summary = match get("Sponsorship Summary") {
        s if s.is_empty() => get(""),
        s => s,
    };
    Sponsorships {
        summary,
        integration_summary: get("Integration Summary"),
        categories: short_entries(&get("Current Categories"), 2),
        companies: short_entries(&get("Current Companies"), 1),
    }
}

/// Category blocks of the form `<category>` / `Why it Works` / `How to
/// Activate`. A category is the line right before a `Why it Works` label;
/// text before the first category is ignored.
#[must_use]
pub fn parse_future_sponsorships(text: &str) -> Vec<SponsorshipSuggestion> {
    enum Mode {
        Preamble,
        Why,
        How,
    }

    let lines = non_empty_lines(text);
    let mut out = Vec::new();
    let mut current: Option<SponsorshipSuggestion> = None;
    let mut mode = Mode::Preamble;

    for (i, line) in lines.iter().enumerate() {
        if is_why_label(line) {
            mode = Mode::Why;
            continue;
        }
        if is_how_label(line) {
            mode = Mode::How;
            continue;
        }
        let starts_block = line.chars().count() < 60
            && lines.get(i + 1).is_some_and(|next| is_why_label(next));
        if starts_block {
            out.extend(current.take().filter(has_suggestion));
            current = Some(SponsorshipSuggestion {
                category: (*line).to_string(),
                ..SponsorshipSuggestion::default()
            });
            mode = Mode::Preamble;
            continue;
        }
        let Some(suggestion) = current.as_mut() else {
            continue;
        };
        match mode {
            Mode::Why => append(&mut suggestion.why_it_works, line),
            Mode::How => suggestion.how_to_activate.push((*line).to_string()),
            Mode::Preamble => {}
        }
    }
    out.extend(current.filter(has_suggestion));
    out
}

fn is_why_label(line: &str) -> bool {
    line.to_lowercase().contains("why it works")
}

fn is_how_label(line: &str) -> bool {
    line.to_lowercase().contains("how to activate")
}

fn has_suggestion(s: &SponsorshipSuggestion) -> bool {
    !s.why_it_works.is_empty() || !s.how_to_activate.is_empty()
}

/// Twelve labelled figures: min/max/median/avg of views, likes, comments.
#[must_use]
pub fn parse_statistics(text: &str) -> SummaryStatistics {
    let mut stats = SummaryStatistics::default();
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    for (i, line) in lines.iter().enumerate() {
        let Some((stat, metric)) = line.split_once(' ') else {
            continue;
        };
        let target = match metric {
            "Views" => &mut stats.views,
            "Likes" => &mut stats.likes,
            "Comments" => &mut stats.comments,
            _ => continue,
        };
        let slot: &mut f64 = match stat {
            "Min" => &mut target.min,
            "Max" => &mut target.max,
            "Median" => &mut target.median,
            "Avg" => &mut target.avg,
            _ => continue,
        };
        if let Some(value) = lines.iter().skip(i + 1).take(2).find_map(|l| first_number(l)) {
            *slot = value;
        }
    }
    stats
}

/// One "Most …" or "Least …" post card.
#[must_use]
pub fn parse_top_post(text: &str) -> TopPost {
    const FIELD_LABELS: [&str; 4] = ["Engagement Rate", "Likes Count", "Comment Count", "Link"];
    let mut post = TopPost::default();
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let number_after = |i: usize| lines.iter().skip(i + 1).take(2).find_map(|l| first_number(l));

    for (i, line) in lines.iter().enumerate() {
        match *line {
            "Caption" => {
                post.caption = lines
                    .iter()
                    .skip(i + 1)
                    .take(4)
                    .copied()
                    .take_while(|l| !l.is_empty() && !FIELD_LABELS.contains(l))
                    .collect::<Vec<_>>()
                    .join(" ");
            }
            "Engagement Rate" => post.engagement_rate = number_after(i).unwrap_or_default(),
            "Likes Count" => post.likes = number_after(i).unwrap_or_default(),
            "Comment Count" => post.comments = number_after(i).unwrap_or_default(),
            l if l.contains("tiktok.com") || l.contains("instagram.com") => {
                post.link = l.to_string();
            }
            _ => {}
        }
    }
    post
}

/// Splits a "Most / Least X" section into its two cards.
#[must_use]
pub fn split_most_least(text: &str, most: &str, least: &str) -> (Option<TopPost>, Option<TopPost>) {
    let (most_part, least_part) = match text.split_once(least) {
        Some((before, after)) => (before, Some(after)),
        None => (text, None),
    };
    let most_post = most_part.contains(most).then(|| parse_top_post(most_part));
    (most_post, least_part.map(parse_top_post))
}

/// Summary, numbered strategic territories, then audience verbatims after
/// the last territory.
#[must_use]
pub fn parse_how_to_win(text: &str) -> HowToWin {
    const VERBATIM_MARKER: &str = "Audience Verbatims";

    let mut parts = TERRITORY_RE.split(text);
    let first = parts.next().unwrap_or_default().trim();
    let summary = first
        .split_once(VERBATIM_MARKER)
        .map_or(first, |(before, _)| before)
        .trim()
        .to_string();

    let territories = parts
        .map(str::trim)
        .filter(|p| p.chars().count() > 10)
        .filter_map(|p| paragraphs(p).into_iter().next())
        .collect();

    let audience_verbatims = TERRITORY_RE
        .find_iter(text)
        .last()
        .map(|m| {
            paragraphs(&text[m.end()..])
                .into_iter()
                .skip(1)
                .flat_map(|para| {
                    para.lines()
                        .map(str::trim)
                        .filter(|l| l.chars().count() > 8)
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect()
        })
        .unwrap_or_default();

    HowToWin {
        summary,
        territories,
        audience_verbatims,
    }
}

#[must_use]
pub fn parse_hashtag_analysis(text: &str) -> HashtagAnalysis {
    let parts = split_sub_headings(
        text,
        &[
            "Key Findings",
            "Opportunities",
            "Gaps, Risks or Unmet Needs",
            "Strategic Actions",
        ],
    );
    let items = |k: &str| {
        parts
            .get(k)
            .map(|body| items_longer_than(body, 10))
            .unwrap_or_default()
    };
    HashtagAnalysis {
        summary: parts.get("").cloned().unwrap_or_default(),
        key_findings: items("Key Findings"),
        opportunities: items("Opportunities"),
        gaps_risks_unmet_needs: items("Gaps, Risks or Unmet Needs"),
        strategic_actions: items("Strategic Actions"),
    }
}

/// `Conversation N` blocks: first line is the title, the rest the description.
#[must_use]
pub fn parse_interesting_conversations(text: &str) -> Vec<TitledBlock> {
    CONVERSATION_RE
        .split(text)
        .skip(1)
        .filter_map(|part| {
            let lines = non_empty_lines(part);
            let (title, rest) = lines.split_first()?;
            Some(TitledBlock {
                title: (*title).to_string(),
                description: rest.join(" "),
            })
        })
        .collect()
}

#[must_use]
pub fn parse_conversation_map(text: &str) -> ConversationMap {
    let parts = split_sub_headings(
        text,
        &[
            "Conversation Map Analysis",
            "Relationship Analysis",
            "Overarching Patterns",
            "Conversation Action Opportunities",
        ],
    );
    let get = |k: &str| parts.get(k).cloned().unwrap_or_default();
    let summary = [get(""), get("Conversation Map Analysis")]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    ConversationMap {
        summary,
        relationship_analysis: get("Relationship Analysis"),
        overarching_patterns: items_longer_than(&get("Overarching Patterns"), 10),
        action_opportunities: items_longer_than(&get("Conversation Action Opportunities"), 10),
    }
}

/// Title + description pairs. A short paragraph followed by another is a
/// title; a longer paragraph splits into its first line and the remainder.
#[must_use]
pub fn parse_titled_blocks(text: &str) -> Vec<TitledBlock> {
    let paras = paragraphs(text);
    let mut out = Vec::new();
    let mut i = 0;
    while i < paras.len() {
        let para = &paras[i];
        if para.chars().count() < 80 && i + 1 < paras.len() {
            out.push(TitledBlock {
                title: para.clone(),
                description: paras[i + 1].clone(),
            });
            i += 2;
            continue;
        }
        let lines = non_empty_lines(para);
        if let Some((title, rest)) = lines.split_first().filter(|(_, rest)| !rest.is_empty()) {
            out.push(TitledBlock {
                title: (*title).to_string(),
                description: rest.join(" "),
            });
        }
        i += 1;
    }
    out
}

/// Archetypes are introduced by "The <Name>" lines with optional `Appeal`
/// and `Examples` sub-blocks.
#[must_use]
pub fn parse_creator_archetypes(text: &str) -> Vec<CreatorArchetype> {
    let matches: Vec<_> = ARCHETYPE_RE.find_iter(text).collect();
    if matches.is_empty() {
        return text
            .split("\nAppeal\n")
            .map(str::trim)
            .filter(|p| p.chars().count() > 20)
            .filter_map(|part| {
                let lines = non_empty_lines(part);
                let (name, rest) = lines.split_first()?;
                Some(CreatorArchetype {
                    archetype: (*name).to_string(),
                    description: rest.iter().take(2).copied().collect::<Vec<_>>().join(" "),
                    ..CreatorArchetype::default()
                })
            })
            .collect();
    }

    matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = matches.get(i + 1).map_or(text.len(), regex::Match::start);
            let block = text[m.end()..end].trim();
            let mut arch = CreatorArchetype {
                archetype: m.as_str().trim().to_string(),
                ..CreatorArchetype::default()
            };
            match block.split_once("Appeal") {
                Some((description, rest)) => {
                    arch.description = description.trim().to_string();
                    match rest.split_once("Examples") {
                        Some((appeal, examples)) => {
                            arch.appeal = appeal.trim().to_string();
                            arch.examples = non_empty_lines(examples)
                                .into_iter()
                                .filter(|l| l.chars().count() > 5)
                                .map(str::to_string)
                                .collect();
                        }
                        None => arch.appeal = rest.trim().to_string(),
                    }
                }
                None => arch.description = block.to_string(),
            }
            arch
        })
        .collect()
}

/// Brand blocks: a short capitalised name line, then `Context`,
/// `Reception`, `Sentiment`, and `Verbatims` sub-blocks. Once inside a
/// block, a new brand starts only at a name line followed by `Context`.
/// A mention without context is dropped.
#[must_use]
pub fn parse_brand_mentions(text: &str) -> Vec<BrandMention> {
    const FIELDS: [&str; 4] = ["Context", "Reception", "Sentiment", "Verbatims"];

    let lines = non_empty_lines(text);
    let mut out = Vec::new();
    let mut current: Option<BrandMention> = None;
    let mut field: Option<&str> = None;

    let push = |out: &mut Vec<BrandMention>, mention: Option<BrandMention>| {
        if let Some(mut m) = mention {
            m.context = m.context.trim().to_string();
            m.sentiment = m.sentiment.trim().to_string();
            m.reception = m.reception.trim().to_string();
            if !m.context.is_empty() {
                out.push(m);
            }
        }
    };

    for (i, line) in lines.iter().enumerate() {
        if let Some(f) = FIELDS.iter().copied().find(|f| f == line) {
            field = Some(f);
            continue;
        }
        let opens_block = lines.get(i + 1).is_some_and(|n| *n == "Context");
        if looks_like_name(line) && (field.is_none() || opens_block) {
            push(&mut out, current.take());
            current = Some(BrandMention {
                brand: (*line).to_string(),
                ..BrandMention::default()
            });
            field = None;
            continue;
        }
        let Some(mention) = current.as_mut() else {
            continue;
        };
        match field {
            Some("Verbatims") => mention.verbatims.push((*line).to_string()),
            Some("Sentiment") => append(&mut mention.sentiment, line),
            Some("Reception") => append(&mut mention.reception, line),
            _ => append(&mut mention.context, line),
        }
    }
    push(&mut out, current);
    out
}

fn looks_like_name(line: &str) -> bool {
    line.chars().count() < 30
        && !line.ends_with('.')
        && line.chars().next().is_some_and(char::is_uppercase)
}

fn append(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
