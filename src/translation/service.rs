use std::fmt;
use std::str::FromStr;

use super::deepseek::DeepSeekTranslator;
use super::youdao::YoudaoTranslator;
use crate::config::Credential;
use crate::error::{Result, TranslateError};

/// A language a provider can translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

const YOUDAO_LANGUAGES: &[Language] = &[
    lang("zh-CHS", "Chinese (Simplified)"),
    lang("en", "English"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
];

const DEEPSEEK_LANGUAGES: &[Language] = &[
    lang("zh-CHS", "Chinese (Simplified)"),
    lang("en", "English"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
];

/// The normalized outcome of one translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub from: String,
    pub to: String,
    pub service: String,
}

/// Identifies a translation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServiceKind {
    Youdao,
    DeepSeek,
}

impl ServiceKind {
    pub const ALL: [Self; 2] = [Self::Youdao, Self::DeepSeek];

    /// The name used in the config file and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Youdao => "youdao",
            Self::DeepSeek => "deepseek",
        }
    }

    /// Human-readable label for prompts.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Youdao => "Youdao Translate",
            Self::DeepSeek => "DeepSeek (Youdao AI dialog)",
        }
    }

    /// Static, non-authoritative list of languages offered for this provider.
    pub const fn supported_languages(self) -> &'static [Language] {
        match self {
            Self::Youdao => YOUDAO_LANGUAGES,
            Self::DeepSeek => DEEPSEEK_LANGUAGES,
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youdao" => Ok(Self::Youdao),
            "deepseek" => Ok(Self::DeepSeek),
            _ => Err(TranslateError::UnsupportedService(s.to_string())),
        }
    }
}

/// A configured translation backend.
///
/// One variant per provider; every variant signs and sends a single request per call.
#[derive(Debug)]
pub enum TranslationService {
    Youdao(YoudaoTranslator),
    DeepSeek(DeepSeekTranslator),
}

impl TranslationService {
    /// Builds the provider for `kind` using its production endpoint.
    pub fn new(kind: ServiceKind, credential: Credential) -> Self {
        match kind {
            ServiceKind::Youdao => Self::Youdao(YoudaoTranslator::new(credential)),
            ServiceKind::DeepSeek => Self::DeepSeek(DeepSeekTranslator::new(credential)),
        }
    }

    pub const fn kind(&self) -> ServiceKind {
        match self {
            Self::Youdao(_) => ServiceKind::Youdao,
            Self::DeepSeek(_) => ServiceKind::DeepSeek,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Translates `text` from `from` to `to` with a single signed request.
    ///
    /// `from` may be `"auto"` for provider-side detection.
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<TranslationResult> {
        match self {
            Self::Youdao(service) => service.translate(text, from, to).await,
            Self::DeepSeek(service) => service.translate(text, from, to).await,
        }
    }

    /// Returns the provider's hardcoded language list; never touches the network.
    pub const fn supported_languages(&self) -> &'static [Language] {
        self.kind().supported_languages()
    }
}
