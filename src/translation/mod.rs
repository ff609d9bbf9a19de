mod deepseek;
mod http;
mod language;
mod prompt;
mod service;
mod sign;
mod youdao;

pub use deepseek::{DEEPSEEK_ENDPOINT, DEEPSEEK_MODEL, DeepSeekTranslator};
pub use language::{AUTO, SUPPORTED_LANGUAGES, print_languages, resolve_direction};
pub use service::{Language, ServiceKind, TranslationResult, TranslationService};
pub use sign::{Nonce, sign, truncate};
pub use youdao::{YOUDAO_ENDPOINT, YoudaoTranslator};
