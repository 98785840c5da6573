//! KPI targets that drive the target-gap recommendations.
//!
//! Every field has a default, so a targets file only needs the values it
//! overrides:
//!
//! ```yaml
//! engagement_rate_pct: 2.5
//! tiktok_posts_per_week: { min: 4, max: 6 }
//! ```

use std::path::Path;

use cuervo_core::{ContentTheme, Platform};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// How far the mix percentages may stray from 100 before they are rejected.
const MIX_SUM_TOLERANCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CadenceRange {
    pub min: f64,
    pub max: f64,
}

/// Target share of mapped posts per content pillar, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentMix {
    pub entertain: f64,
    pub educate: f64,
    pub connect: f64,
    pub convince: f64,
}

impl Default for ContentMix {
    fn default() -> Self {
        Self {
            entertain: 40.0,
            educate: 25.0,
            connect: 20.0,
            convince: 15.0,
        }
    }
}

impl ContentMix {
    #[must_use]
    pub fn target(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Entertain => self.entertain,
            Pillar::Educate => self.educate,
            Pillar::Connect => self.connect,
            Pillar::Convince => self.convince,
        }
    }
}

/// Content pillar a theme rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    Entertain,
    Educate,
    Connect,
    Convince,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [
        Pillar::Entertain,
        Pillar::Educate,
        Pillar::Connect,
        Pillar::Convince,
    ];

    /// `None` for [`ContentTheme::Other`], which belongs to no pillar.
    #[must_use]
    pub fn of(theme: ContentTheme) -> Option<Pillar> {
        match theme {
            ContentTheme::MemeHumor
            | ContentTheme::MusicParty
            | ContentTheme::Lifestyle
            | ContentTheme::CulturalMoment
            | ContentTheme::SportsTieIn => Some(Pillar::Entertain),
            ContentTheme::CocktailRecipe
            | ContentTheme::Education
            | ContentTheme::BehindTheScenes => Some(Pillar::Educate),
            ContentTheme::CreatorCollab
            | ContentTheme::BrandHeritage
            | ContentTheme::EventActivation
            | ContentTheme::UserRepost => Some(Pillar::Connect),
            ContentTheme::ProductShowcase | ContentTheme::GiveawayPromo => {
                Some(Pillar::Convince)
            }
            ContentTheme::Other => None,
        }
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Pillar::Entertain => "Entertain",
            Pillar::Educate => "Educate",
            Pillar::Connect => "Connect",
            Pillar::Convince => "Convince",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Targets {
    /// Average ER per post, in percent.
    pub engagement_rate_pct: f64,
    /// Minimum share of Instagram posts that should be Reels.
    pub instagram_reel_share_pct: f64,
    pub instagram_posts_per_week: CadenceRange,
    pub tiktok_posts_per_week: CadenceRange,
    pub content_mix: ContentMix,
    /// Percentage points a pillar may drift from its target before it is
    /// flagged.
    pub mix_gap_pp: f64,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            engagement_rate_pct: 3.0,
            instagram_reel_share_pct: 50.0,
            instagram_posts_per_week: CadenceRange { min: 4.0, max: 5.0 },
            tiktok_posts_per_week: CadenceRange { min: 3.0, max: 4.0 },
            content_mix: ContentMix::default(),
            mix_gap_pp: 5.0,
        }
    }
}

impl Targets {
    #[must_use]
    pub fn cadence(&self, platform: Platform) -> CadenceRange {
        match platform {
            Platform::Instagram => self.instagram_posts_per_week,
            Platform::TikTok => self.tiktok_posts_per_week,
        }
    }

    /// Parse and validate targets from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TargetsParse`] on malformed YAML and
    /// [`AnalysisError::InvalidTargets`] when a range is inverted, a value
    /// is negative, or the content mix does not sum to 100.
    pub fn from_yaml(content: &str) -> Result<Self, AnalysisError> {
        let targets: Targets = serde_yaml::from_str(content)?;
        targets.validate()?;
        Ok(targets)
    }

    /// Load targets from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::TargetsIo`] if the file cannot be read, or any
    /// error from [`Targets::from_yaml`].
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let content = std::fs::read_to_string(path).map_err(|e| AnalysisError::TargetsIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        for (name, range) in [
            ("instagram_posts_per_week", self.instagram_posts_per_week),
            ("tiktok_posts_per_week", self.tiktok_posts_per_week),
        ] {
            if range.min < 0.0 || range.min > range.max {
                return Err(AnalysisError::InvalidTargets(format!(
                    "{name}: min {} must be between 0 and max {}",
                    range.min, range.max
                )));
            }
        }
        if self.engagement_rate_pct < 0.0 || self.mix_gap_pp < 0.0 {
            return Err(AnalysisError::InvalidTargets(
                "engagement_rate_pct and mix_gap_pp must not be negative".to_string(),
            ));
        }
        let mix = self.content_mix;
        let sum: f64 = Pillar::ALL.iter().map(|&p| mix.target(p)).sum();
        if (sum - 100.0).abs() > MIX_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidTargets(format!(
                "content_mix must sum to 100, got {sum}"
            )));
        }
        Ok(())
    }
}
