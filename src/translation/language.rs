//! Language choices offered by the CLI and source-language guessing.

use super::service::{Language, ServiceKind};
use crate::ui::Style;

/// Source value meaning "let the provider detect".
pub const AUTO: &str = "auto";

const ENGLISH: &str = "en";
const CHINESE: &str = "zh-CHS";

/// Languages offered in interactive prompts.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language {
        code: AUTO,
        name: "Auto detect",
    },
    Language {
        code: CHINESE,
        name: "Chinese (Simplified)",
    },
    Language {
        code: ENGLISH,
        name: "English",
    },
    Language {
        code: "ja",
        name: "Japanese",
    },
    Language {
        code: "ko",
        name: "Korean",
    },
    Language {
        code: "fr",
        name: "French",
    },
    Language {
        code: "de",
        name: "German",
    },
    Language {
        code: "es",
        name: "Spanish",
    },
];

/// Prints the static language list of each given service to stdout.
pub fn print_languages(services: &[ServiceKind]) {
    for (index, kind) in services.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!(
            "{} {}",
            Style::header(kind.display_name()),
            Style::secondary(format!("({kind})"))
        );
        for language in kind.supported_languages() {
            println!(
                "  {:7} {}",
                Style::code(language.code),
                Style::secondary(language.name)
            );
        }
    }
}

/// Returns `true` if `text` looks like plain English prose.
fn looks_english(text: &str) -> bool {
    !text.trim().is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || ".,!?\"'".contains(c))
}

/// Replaces an `auto` source with a guess between English and Chinese.
///
/// If the target equals the guessed source it is flipped to the other language,
/// so the request never translates a text into its own language.
pub fn resolve_direction(text: &str, from: &str, to: &str) -> (String, String) {
    if from != AUTO {
        return (from.to_string(), to.to_string());
    }

    let (source, other) = if looks_english(text) {
        (ENGLISH, CHINESE)
    } else {
        (CHINESE, ENGLISH)
    };
    let target = if to == source || to == AUTO { other } else { to };

    (source.to_string(), target.to_string())
}
