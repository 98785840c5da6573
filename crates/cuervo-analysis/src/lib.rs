//! Analysis engine over canonical posts and profiles.
//!
//! [`run_analysis`] takes an immutable [`Dataset`] and a [`PostFilter`] and
//! rebuilds every metric from scratch: engagement rates, posting cadence,
//! caption and theme mix, hashtags, creator collaborations, and the
//! recommendations derived from them.

pub mod content;
pub mod creators;
pub mod engagement;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod hashtags;
pub mod pipeline;
pub mod recommend;
pub mod tally;
pub mod targets;

#[cfg(test)]
mod testutil;

pub use content::{CaptionStats, LengthInsight, ThemePerformance, ThemeStats};
pub use creators::{CreatorFrequency, CreatorStats};
pub use engagement::{engagement_rate, EngagementStats, ErExclusion, TopPost};
pub use error::AnalysisError;
pub use filter::PostFilter;
pub use frequency::{weeks_spanned, DateWindow, Frequency, FrequencyStats};
pub use hashtags::HashtagStats;
pub use pipeline::{run_analysis, AnalysisOptions, AnalysisResult, ByPlatform, Dataset};
pub use recommend::{Category, Priority, Recommendation};
pub use tally::Count;
pub use targets::{CadenceRange, ContentMix, Pillar, Targets};
