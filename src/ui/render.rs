//! Framed rendering of a translation result.

use super::Style;
use crate::output;
use crate::translation::TranslationResult;

const RULE_WIDTH: usize = 70;
const INDENT: &str = "    ";

/// Renders `result` as a framed block: header, language/service info, then
/// each original line followed by its translation.
pub fn render_result(result: &TranslationResult) -> String {
    let rule = Style::rule("─".repeat(RULE_WIDTH));
    let mut lines = vec![
        rule.clone(),
        format!("{INDENT}{}", Style::header("Translation")),
        String::new(),
    ];

    for (label, value) in [
        ("from:   ", &result.from),
        ("to:     ", &result.to),
        ("service:", &result.service),
    ] {
        lines.push(format!("{INDENT}{} {}", Style::label(label), Style::value(value)));
    }
    lines.push(String::new());

    let mut translated = result.translated_text.lines();
    for original in result.original_text.lines() {
        lines.push(format!(
            "{INDENT}{} {}",
            Style::label("original:"),
            Style::original(original)
        ));
        if let Some(line) = translated.next().filter(|l| !l.trim().is_empty()) {
            lines.push(format!(
                "{INDENT}{} {}",
                Style::label("result:  "),
                Style::translated(line)
            ));
        }
    }
    // A provider may return more lines than were sent.
    for line in translated {
        lines.push(format!(
            "{INDENT}{} {}",
            Style::label("result:  "),
            Style::translated(line)
        ));
    }

    lines.push(rule);
    lines.join("\n")
}

/// Prints `result` to stdout; only the translated text in quiet mode.
pub fn print_result(result: &TranslationResult) {
    if output::is_quiet() {
        println!("{}", result.translated_text);
    } else {
        println!("{}", render_result(result));
    }
}
