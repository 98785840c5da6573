use std::sync::LazyLock;

use cuervo_core::{
    normalize_handle, BrandConfig, CaptionTone, ContentTheme, CtaType, VisualStyle,
};
use regex::Regex;
use serde::Serialize;

use crate::extract::{extract_hashtags, extract_mentions};
use crate::rules::{
    first_match, COLLAB_SIGNALS, CTA_RULES, DEFAULT_CTA, DEFAULT_THEME, DEFAULT_TONE,
    DEFAULT_VISUAL_STYLE, EMPTY_CAPTION_THEME, PAID_PARTNERSHIP_PHRASES, PAID_PARTNERSHIP_TAGS,
    THEME_RULES, THEME_VISUAL_STYLES, TONE_RULES,
};

static PARTNER_WITH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"partner(?:ed|ing)? with @[\w.]+").expect("valid partner-with regex")
});

/// What the classifier knows about a caption beyond its text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext<'a> {
    /// Brand that published the caption. Its own handles are not counted as
    /// creator mentions, and its default visual style applies when the theme
    /// does not imply one.
    pub brand: Option<&'a BrandConfig>,
}

impl<'a> ClassifyContext<'a> {
    #[must_use]
    pub fn for_brand(brand: Option<&'a BrandConfig>) -> Self {
        Self { brand }
    }

    fn is_own_handle(&self, mention: &str) -> bool {
        let Some(brand) = self.brand else {
            return false;
        };
        let key = normalize_handle(mention);
        std::iter::once(&brand.name)
            .chain(&brand.handles)
            .any(|h| normalize_handle(h) == key)
    }
}

/// Labels derived from one caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub content_theme: ContentTheme,
    pub caption_tone: CaptionTone,
    pub cta_type: CtaType,
    pub visual_style: VisualStyle,
    pub has_creator_collab: bool,
    pub creator_handle: Option<String>,
    pub is_paid_partnership: bool,
}

/// Classify a caption. Every category always receives a label; unmatched
/// categories fall back to their default.
#[must_use]
pub fn classify(caption: &str, ctx: &ClassifyContext<'_>) -> Classification {
    let lowered = caption.to_lowercase();

    let content_theme = if caption.trim().is_empty() {
        EMPTY_CAPTION_THEME
    } else {
        first_match(THEME_RULES, &lowered).unwrap_or(DEFAULT_THEME)
    };
    let caption_tone = first_match(TONE_RULES, &lowered).unwrap_or(DEFAULT_TONE);
    let cta_type = first_match(CTA_RULES, &lowered).unwrap_or(DEFAULT_CTA);
    let visual_style = visual_style_for(content_theme, ctx.brand);
    let creator_handle = detect_creator_collab(caption, ctx);

    Classification {
        content_theme,
        caption_tone,
        cta_type,
        visual_style,
        has_creator_collab: creator_handle.is_some(),
        creator_handle,
        is_paid_partnership: detect_paid_partnership(caption),
    }
}

fn visual_style_for(theme: ContentTheme, brand: Option<&BrandConfig>) -> VisualStyle {
    THEME_VISUAL_STYLES
        .iter()
        .find(|(t, _)| *t == theme)
        .map(|&(_, style)| style)
        .or_else(|| brand.and_then(|b| b.visual_style))
        .unwrap_or(DEFAULT_VISUAL_STYLE)
}

/// Detect a creator collaboration and return the creator's handle.
///
/// A caption counts as a collab when it carries a collab phrase and tags at
/// least one account other than the brand's own, or when it tags two or more
/// such accounts. The first non-brand mention is the creator.
#[must_use]
pub fn detect_creator_collab(caption: &str, ctx: &ClassifyContext<'_>) -> Option<String> {
    let others: Vec<String> = extract_mentions(caption)
        .into_iter()
        .filter(|m| !ctx.is_own_handle(m))
        .collect();
    let first = others.first()?;

    let lowered = caption.to_lowercase();
    let has_signal = COLLAB_SIGNALS.iter().any(|s| lowered.contains(s));
    if has_signal || others.len() >= 2 {
        Some(first.clone())
    } else {
        None
    }
}

/// Whether a caption discloses a paid partnership, by phrase, by a disclosure
/// hashtag anywhere in the text, or by "partner with @handle".
#[must_use]
pub fn detect_paid_partnership(caption: &str) -> bool {
    let lowered = caption.to_lowercase();
    PAID_PARTNERSHIP_PHRASES
        .iter()
        .any(|p| lowered.contains(p))
        || extract_hashtags(caption)
            .iter()
            .any(|t| PAID_PARTNERSHIP_TAGS.contains(&t.as_str()))
        || PARTNER_WITH_RE.is_match(&lowered)
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
