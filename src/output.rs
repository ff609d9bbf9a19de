//! Process-wide output mode.
//!
//! Translated text is written to stdout so it can be piped. Tips, spinners
//! and errors go to stderr. Quiet mode keeps stdout down to the translation
//! itself; colors turn off with `--no-color` or a non-empty `NO_COLOR`.

use std::sync::OnceLock;

static MODE: OnceLock<OutputMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub quiet: bool,
    pub no_color: bool,
}

impl OutputMode {
    /// Combines the CLI flags with the `NO_COLOR` convention (<https://no-color.org/>).
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || no_color_env(),
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::from_flags(false, false)
    }
}

fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Installs the output mode. Only the first call has an effect.
pub fn init(mode: OutputMode) {
    let _ = MODE.set(mode);
}

fn mode() -> OutputMode {
    *MODE.get_or_init(OutputMode::default)
}

pub fn is_quiet() -> bool {
    mode().quiet
}

pub fn is_no_color() -> bool {
    mode().no_color
}

/// Prints a hint to stderr unless quiet mode is on.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}
