use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read targets file {path}: {source}")]
    TargetsIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse targets: {0}")]
    TargetsParse(#[from] serde_yaml::Error),

    #[error("invalid targets: {0}")]
    InvalidTargets(String),
}
