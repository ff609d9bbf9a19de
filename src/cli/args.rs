use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Command-line translator backed by pluggable translation services")]
#[command(version)]
pub struct Args {
    /// Text to translate (multiple arguments are joined with newlines)
    pub text: Vec<String>,

    /// Source language code (e.g., en, zh-CHS, or auto)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., en, zh-CHS, ja)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation service (youdao, deepseek)
    #[arg(short = 's', long)]
    pub service: Option<String>,

    /// Interactive mode: choose service and languages from prompts
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Print only the translated text
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the default service, default languages, and credentials
    Config {
        /// Default translation service
        #[arg(short = 's', long)]
        service: Option<String>,

        /// Credential JSON for the service: {"appKey":"...","appSecret":"..."}
        #[arg(short = 'k', long = "key", requires = "service")]
        key: Option<String>,

        /// Default source language
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Default target language
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Reset all settings to the built-in defaults
        #[arg(short = 'r', long)]
        reset: bool,

        /// Show the current configuration
        #[arg(long, conflicts_with = "reset")]
        show: bool,
    },
    /// List languages supported by the translation services
    Languages {
        /// Only list languages for this service
        #[arg(short = 's', long)]
        service: Option<String>,
    },
}
