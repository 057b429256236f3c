#![deny(unsafe_code)]

use std::path::PathBuf;

use cdt_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("missing file listed in manifest: {path}")]
    MissingFile { path: PathBuf },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to parse CSV {source_name}: {message}")]
    Csv { source_name: String, message: String },

    #[error("invalid code in {source_name} row {row}: {source}")]
    InvalidCode {
        source_name: String,
        row: usize,
        #[source]
        source: ModelError,
    },

    #[error("duplicate code {code} in {source_name}")]
    DuplicateCode { source_name: String, code: String },

    #[error("code catalog {source_name} contains no entries")]
    EmptyCatalog { source_name: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
