pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a professional translator. \
     Please translate the following text from {from} to {to}. \
     Only provide the translation, no explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(from: &str, to: &str) -> String {
    // {from} and {to} are placeholders for string replacement, not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{from}", from)
        .replace("{to}", to)
}
