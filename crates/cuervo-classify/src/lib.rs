//! Caption classifier for tequila social posts.
//!
//! Assigns a content theme, caption tone, call to action and visual style to a
//! caption by walking ordered keyword tables, and flags creator collaborations
//! and paid partnerships. Everything here is a pure function of its input.

pub mod classifier;
pub mod extract;
pub mod rules;

pub use classifier::{
    classify, detect_creator_collab, detect_paid_partnership, ClassifyContext, Classification,
};
pub use extract::{
    caption_stats, count_emojis, count_words, extract_hashtags, extract_mentions, CaptionStats,
};
pub use rules::{first_match, Rule};
