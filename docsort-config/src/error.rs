use std::path::PathBuf;
use thiserror::Error;

/// Failure while locating, reading, or validating sort settings.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read sort settings from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sort settings toml in {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid sort settings json in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "failed to parse sort settings {origin}: toml error: {toml}; json error: {json}"
    )]
    Unrecognized {
        origin: String,
        toml: String,
        json: String,
    },

    #[error("invalid sort settings: {0}")]
    Invalid(String),
}
