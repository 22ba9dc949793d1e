//! Infrastructure errors

use std::path::PathBuf;

use menu_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid manifest entry {id}: {source}")]
    InvalidEntry {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

impl From<InfraError> for DomainError {
    fn from(err: InfraError) -> Self {
        DomainError::Discovery(err.to_string())
    }
}
