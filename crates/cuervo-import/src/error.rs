use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The selected directory is missing, empty, or lacks required files.
    #[error("data source {path} is unusable: {reason}")]
    DataSource { path: String, reason: String },

    /// A CSV file matches neither the post-level nor the aggregate report shape.
    #[error("{file}: unrecognized report format ({reason})")]
    UnrecognizedFormat { file: String, reason: String },

    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    pub(crate) fn data_source(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::DataSource {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn csv(file: &str, source: csv::Error) -> Self {
        Self::Csv {
            file: file.to_string(),
            source,
        }
    }
}
