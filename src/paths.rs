//! XDG-style path utilities for the configuration directory.
//!
//! The XDG Base Directory convention is preferred over OS-specific
//! locations so the config file lives in the same place on every platform.

use std::path::PathBuf;

const APP_DIR: &str = "translate";

/// Returns the configuration directory for translate.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/translate` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/translate` otherwise
///
/// Returns `None` if neither is available.
pub fn config_dir() -> Option<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_DIR)),
        _ => dirs::home_dir().map(|home| home.join(".config").join(APP_DIR)),
    }
}
