use super::Config;

/// Options given on the command line.
///
/// These take precedence over the defaults stored in the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Text arguments; joined by newlines.
    pub text: Vec<String>,
    /// Source language override.
    pub from: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// Service name override.
    pub service: Option<String>,
}

/// The effective translation request after merging CLI options and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// `None` when no text was given; the caller reads stdin or prompts.
    pub text: Option<String>,
    pub from: String,
    pub to: String,
    pub service: String,
}

/// Merges CLI options with config file defaults.
///
/// Empty strings on the command line count as "not given".
pub fn resolve_request(options: &ResolveOptions, config: &Config) -> ResolvedRequest {
    fn pick(cli: Option<&String>, fallback: &str) -> String {
        cli.filter(|v| !v.trim().is_empty())
            .map_or_else(|| fallback.to_string(), |v| v.trim().to_string())
    }

    let text = if options.text.is_empty() {
        None
    } else {
        Some(options.text.join("\n"))
    };

    ResolvedRequest {
        text,
        from: pick(options.from.as_ref(), &config.default_source_lang),
        to: pick(options.to.as_ref(), &config.default_target_lang),
        service: pick(options.service.as_ref(), &config.default_service),
    }
}
