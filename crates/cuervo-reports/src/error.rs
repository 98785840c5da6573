use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The text does not carry a known report title, or is too short to read.
    #[error("report parse error: {0}")]
    Parse(String),

    /// The external text extractor failed or is not installed.
    #[error("text extraction failed for {file}: {reason}")]
    Extract { file: String, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}
