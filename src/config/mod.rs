//! Persisted configuration: default service, default languages and credentials.

mod manager;
mod resolve;

pub use manager::{
    Config, ConfigManager, Credential, DEFAULT_SERVICE, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG,
};
pub use resolve::{ResolveOptions, ResolvedRequest, resolve_request};
