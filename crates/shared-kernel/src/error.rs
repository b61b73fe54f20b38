// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid prerelease label: label must not be empty")]
    EmptyPrerelease,

    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, VersionError>;

impl From<serde_json::Error> for VersionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}
