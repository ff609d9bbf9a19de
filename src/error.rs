//! Error types shared by the config store, the providers and the registry.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the translation library.
///
/// The CLI layer wraps these in `anyhow` and reports them once at the top level.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The HTTP round trip failed or returned a non-success status.
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    /// The provider answered, but the body signals failure or lacks the translation.
    #[error("{service} API error: {message}")]
    Provider {
        service: &'static str,
        message: String,
    },

    #[error(
        "API key not found for service: {0}\n\n\
         Set it with: translate config -s {0} -k '{{\"appKey\":\"...\",\"appSecret\":\"...\"}}'"
    )]
    MissingCredential(String),

    #[error("API key must be valid JSON with appKey and appSecret fields: {0}")]
    ConfigFormat(String),

    #[error("Unsupported translation service: {0} (available: youdao, deepseek)")]
    UnsupportedService(String),

    #[error("Failed to determine the configuration directory")]
    ConfigDir,

    #[error("Failed to access config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl TranslateError {
    pub(crate) fn transport(service: &'static str, message: impl Into<String>) -> Self {
        Self::Transport {
            service,
            message: message.into(),
        }
    }

    pub(crate) fn provider(service: &'static str, message: impl Into<String>) -> Self {
        Self::Provider {
            service,
            message: message.into(),
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, TranslateError>;
