//! # translate - command-line translator
//!
//! `translate` sends text to a remote translation API and prints the result.
//! Requests are signed with the provider's app key and secret; several
//! providers sit behind one [`translation::TranslationService`] type.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store credentials and make youdao the default service
//! translate config -s youdao -k '{"appKey":"...","appSecret":"..."}'
//!
//! # Translate arguments
//! translate -f en -t zh-CHS Hello world
//!
//! # Translate from stdin, printing only the result
//! echo "Good morning" | translate -q -t ja
//!
//! # Pick service and languages interactively
//! translate -i
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/translate/config.toml`:
//!
//! ```toml
//! defaultService = "youdao"
//! defaultSourceLang = "auto"
//! defaultTargetLang = "en"
//!
//! [apiKeys.youdao]
//! appKey = "..."
//! appSecret = "..."
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and credentials.
pub mod config;

/// Library error types.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Service factory caching one instance per provider.
pub mod registry;

/// Request signing and translation providers.
pub mod translation;

/// Terminal UI components (spinner, colors, result rendering).
pub mod ui;

pub use error::{Result, TranslateError};
