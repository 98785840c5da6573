use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Root for canonical CSV folders and vendor exports.
    pub data_dir: PathBuf,
    /// Root of the qualitative report JSON store.
    pub reports_dir: PathBuf,
    pub brands_path: PathBuf,
    /// Optional YAML overrides for recommendation targets.
    pub targets_path: Option<PathBuf>,
    pub demo_seed: u64,
    /// Brand the competitive recommendations are written for.
    pub focal_brand: String,
}
