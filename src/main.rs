use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use translate_cli::cli::commands::configure::{self, ConfigureOptions};
use translate_cli::cli::commands::{languages, translate};
use translate_cli::cli::{Args, Command};
use translate_cli::config::ConfigManager;
use translate_cli::output::{self, OutputMode};
use translate_cli::registry::ServiceRegistry;
use translate_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(OutputMode::from_flags(args.quiet, args.no_color));
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "translate_cli=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages { service }) => languages::run_languages(service.as_deref()),
        Some(Command::Config {
            service,
            key,
            from,
            to,
            reset,
            show,
        }) => {
            let mut registry = ServiceRegistry::new(ConfigManager::new()?);
            let options = ConfigureOptions {
                service,
                key,
                from,
                to,
                reset,
                show,
            };
            configure::run_configure(&mut registry, options)
        }
        None => {
            let mut registry = ServiceRegistry::new(ConfigManager::new()?);
            let options = translate::TranslateOptions {
                text: args.text,
                from: args.from,
                to: args.to,
                service: args.service,
                interactive: args.interactive,
            };
            translate::run_translate(&mut registry, options).await
        }
    }
}
