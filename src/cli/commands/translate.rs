use anyhow::{Result, anyhow};
use inquire::validator::Validation;
use inquire::{CustomUserError, Editor, Password, PasswordDisplayMode, Select, Text};

use crate::config::{Config, Credential, ResolveOptions, ResolvedRequest, resolve_request};
use crate::input::InputReader;
use crate::registry::ServiceRegistry;
use crate::translation::{
    AUTO, Language, SUPPORTED_LANGUAGES, ServiceKind, resolve_direction,
};
use crate::status;
use crate::ui::{Spinner, Style, handle_prompt_cancellation, print_result};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub service: Option<String>,
    pub interactive: bool,
}

/// Answers collected from interactive prompts.
#[derive(Debug, Default)]
struct Answers {
    text: Option<String>,
    service: Option<ServiceKind>,
    from: Option<String>,
    to: Option<String>,
    credential: Option<Credential>,
}

pub async fn run_translate(registry: &mut ServiceRegistry, options: TranslateOptions) -> Result<()> {
    let config = registry.config()?;
    let resolve_options = ResolveOptions {
        text: options.text,
        from: options.from,
        to: options.to,
        service: options.service,
    };
    let mut request = resolve_request(&resolve_options, &config);
    let mut kind: ServiceKind = request.service.parse()?;

    let stdin_piped = InputReader::stdin_is_piped();
    if request.text.is_none() && stdin_piped {
        request.text = Some(InputReader::read_stdin()?);
    }

    // Prompts need a terminal; piped runs fail later with a precise error instead.
    let needs_credential = !config.has_credential(kind.as_str());
    if !stdin_piped && (options.interactive || request.text.is_none() || needs_credential) {
        let prompted =
            handle_prompt_cancellation(|| prompt_missing(&request, kind, &config, options.interactive))?;
        let Some(answers) = prompted else {
            return Ok(());
        };

        if let Some(service) = answers.service {
            kind = service;
        }
        if let Some(credential) = answers.credential {
            registry.set_credential(kind.as_str(), credential)?;
        }
        request.text = answers.text.or(request.text);
        request.from = answers.from.unwrap_or(request.from);
        request.to = answers.to.unwrap_or(request.to);
    }

    let text = request.text.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
        anyhow!(
            "Input is empty\n\n\
             Pass text as arguments, pipe it via stdin, or run 'translate -i'"
        )
    })?;

    let (from, to) = resolve_direction(&text, &request.from, &request.to);
    let service = registry.resolve(Some(kind.as_str()))?;

    let spinner = Spinner::new("Translating...");
    let result = service.translate(&text, &from, &to).await;
    spinner.stop();

    print_result(&result?);
    status!(
        "{}",
        Style::hint("Tip: run 'translate -i' for interactive mode, or 'translate <text>' to translate directly")
    );

    Ok(())
}

fn prompt_missing(
    request: &ResolvedRequest,
    current: ServiceKind,
    config: &Config,
    interactive: bool,
) -> Result<Answers> {
    let mut answers = Answers::default();

    if request.text.is_none() {
        answers.text = Some(prompt_text()?);
    }

    if interactive {
        let service = select_service(current)?;
        answers.service = Some(service);
        answers.from = Some(select_language(
            "Source language:",
            SUPPORTED_LANGUAGES,
            &request.from,
        )?);

        let targets: Vec<Language> = SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .filter(|lang| lang.code != AUTO)
            .collect();
        answers.to = Some(select_language("Target language:", &targets, &request.to)?);
    }

    let service = answers.service.unwrap_or(current);
    if !config.has_credential(service.as_str()) {
        answers.credential = Some(prompt_credential(service)?);
    }

    Ok(answers)
}

fn prompt_text() -> Result<String> {
    let text = Editor::new("Text to translate:")
        .with_help_message("Save and close the editor when done")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("Please enter some text".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;

    Ok(text.trim_end().to_string())
}

pub(super) fn select_service(default: ServiceKind) -> Result<ServiceKind> {
    let options: Vec<String> = ServiceKind::ALL
        .iter()
        .map(|kind| format!("{kind} - {}", kind.display_name()))
        .collect();

    let default_index = ServiceKind::ALL
        .iter()
        .position(|kind| *kind == default)
        .unwrap_or(0);

    let selection = Select::new("Translation service:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract the name from "name - Label" format
    let name = selection.split(" - ").next().unwrap_or(&selection);
    Ok(name.parse()?)
}

fn select_language(message: &str, languages: &[Language], default: &str) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = languages
        .iter()
        .map(|lang| format!("{} - {}", lang.code, lang.name))
        .collect();

    let default_index = languages
        .iter()
        .position(|lang| lang.code == default)
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}

pub(super) fn prompt_credential(service: ServiceKind) -> Result<Credential> {
    let not_empty = |input: &str| -> Result<Validation, CustomUserError> {
        if input.trim().is_empty() {
            Ok(Validation::Invalid("Value cannot be empty".into()))
        } else {
            Ok(Validation::Valid)
        }
    };

    let app_key = Text::new(&format!("{} AppKey:", service.display_name()))
        .with_validator(not_empty)
        .prompt()?;

    let app_secret = Password::new(&format!("{} AppSecret:", service.display_name()))
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(not_empty)
        .prompt()?;

    Ok(Credential::new(app_key.trim(), app_secret.trim()))
}
