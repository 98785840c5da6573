//! Shared domain model and configuration for the tequila social analytics
//! pipeline.
//!
//! Every other crate in the workspace speaks in terms of the canonical
//! [`Post`] and [`BrandProfile`] records defined here, resolves brand handles
//! through a [`BrandRegistry`], and reads runtime settings from [`AppConfig`].

pub mod app_config;
pub mod brands;
pub mod config;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use brands::{
    is_branded_hashtag, load_brands, normalize_handle, parse_brands, BrandConfig, BrandRegistry,
    BrandsFile,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    BrandProfile, CaptionTone, ContentTheme, CtaType, FollowerSource, Platform, Post, PostType,
    VisualStyle,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brands validation failed: {0}")]
    Validation(String),
}
