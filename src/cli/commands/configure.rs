//! Config command handler for persisting defaults and credentials.

use anyhow::{Result, anyhow};
use inquire::Text;

use super::translate::{prompt_credential, select_service};
use crate::config::{Config, Credential, DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG};
use crate::registry::ServiceRegistry;
use crate::translation::ServiceKind;
use crate::ui::{Style, handle_prompt_cancellation};

#[derive(Debug, Default)]
pub struct ConfigureOptions {
    pub service: Option<String>,
    pub key: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub reset: bool,
    pub show: bool,
}

impl ConfigureOptions {
    const fn has_updates(&self) -> bool {
        self.service.is_some() || self.key.is_some() || self.from.is_some() || self.to.is_some()
    }
}

/// Runs the config command.
///
/// Without flags an interactive wizard asks for every setting.
pub fn run_configure(registry: &mut ServiceRegistry, options: ConfigureOptions) -> Result<()> {
    if options.reset {
        registry.reset()?;
        println!("{} Configuration reset to defaults", Style::success("✓"));
        return Ok(());
    }

    if options.show {
        print_current_config(&registry.config()?);
        return Ok(());
    }

    if options.has_updates() {
        apply_options(registry, &options)?;
    } else if handle_prompt_cancellation(|| run_wizard(registry))?.is_none() {
        return Ok(());
    }

    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(registry.config_manager().config_path().display())
    );

    Ok(())
}

fn apply_options(registry: &mut ServiceRegistry, options: &ConfigureOptions) -> Result<()> {
    if let Some(key) = options.key.as_deref() {
        let service = options
            .service
            .as_deref()
            .ok_or_else(|| anyhow!("--key requires --service"))?;
        let credential = Credential::from_json(key)?;
        registry.set_credential(service, credential)?;
        registry.set_default_service(service)?;
    } else if let Some(service) = options.service.as_deref() {
        registry.set_default_service(service)?;
    }

    if options.from.is_some() || options.to.is_some() {
        registry.set_default_languages(options.from.as_deref(), options.to.as_deref())?;
    }

    Ok(())
}

fn run_wizard(registry: &mut ServiceRegistry) -> Result<()> {
    let config = registry.config()?;
    let current: ServiceKind = config.default_service.parse().unwrap_or(ServiceKind::Youdao);

    let service = select_service(current)?;
    let credential = prompt_credential(service)?;

    let from = Text::new("Default source language:")
        .with_default(DEFAULT_SOURCE_LANG)
        .prompt()?;
    let to = Text::new("Default target language:")
        .with_default(DEFAULT_TARGET_LANG)
        .prompt()?;

    registry.set_credential(service.as_str(), credential)?;
    registry.set_default_service(service.as_str())?;
    registry.set_default_languages(Some(from.trim()), Some(to.trim()))?;

    Ok(())
}

fn print_current_config(config: &Config) {
    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}  {}",
        Style::label("service"),
        Style::value(&config.default_service)
    );
    println!(
        "  {}     {}",
        Style::label("from"),
        Style::value(&config.default_source_lang)
    );
    println!(
        "  {}       {}",
        Style::label("to"),
        Style::value(&config.default_target_lang)
    );
    println!();

    println!("{}", Style::header("Credentials"));
    if config.api_keys.is_empty() {
        println!("  {}", Style::secondary("(none configured)"));
    }
    for (name, credential) in &config.api_keys {
        let marker = if *name == config.default_service {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  appKey = {}{marker}",
            Style::value(name),
            Style::secondary(credential.masked_key())
        );
    }
}
