use reqwest::Client;
use serde::Deserialize;

use super::http::{connect_error, read_success_body};
use super::service::TranslationResult;
use super::sign::{Nonce, sign, truncate};
use crate::config::Credential;
use crate::error::{Result, TranslateError};

pub const YOUDAO_ENDPOINT: &str = "https://openapi.youdao.com/api";

const SERVICE: &str = "youdao";
const SIGN_TYPE: &str = "v3";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YoudaoResponse {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    translation: Option<Vec<String>>,
}

/// Youdao text translation API (form-encoded POST, `signType=v3`).
#[derive(Debug)]
pub struct YoudaoTranslator {
    client: Client,
    endpoint: String,
    credential: Credential,
}

impl YoudaoTranslator {
    pub fn new(credential: Credential) -> Self {
        Self::with_endpoint(credential, YOUDAO_ENDPOINT)
    }

    pub fn with_endpoint(credential: Credential, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            credential,
        }
    }

    /// `sha256(appKey + truncate(q) + salt + curtime + appSecret)`
    fn signature(&self, text: &str, nonce: &Nonce) -> String {
        let truncated = truncate(text);
        sign([
            self.credential.app_key.as_str(),
            truncated.as_ref(),
            nonce.salt.as_str(),
            nonce.curtime.as_str(),
            self.credential.app_secret.as_str(),
        ])
    }

    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<TranslationResult> {
        let nonce = Nonce::now();
        let signature = self.signature(text, &nonce);

        let params = [
            ("q", text),
            ("appKey", self.credential.app_key.as_str()),
            ("salt", nonce.salt.as_str()),
            ("from", from),
            ("to", to),
            ("sign", signature.as_str()),
            ("signType", SIGN_TYPE),
            ("curtime", nonce.curtime.as_str()),
        ];

        tracing::debug!(
            endpoint = %self.endpoint,
            from,
            to,
            chars = text.chars().count(),
            "sending youdao translation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| connect_error(SERVICE, &self.endpoint, &e))?;

        let body = read_success_body(SERVICE, response).await?;
        let data: YoudaoResponse = serde_json::from_str(&body).map_err(|e| {
            TranslateError::provider(SERVICE, format!("invalid response body: {e}"))
        })?;

        if let Some(code) = data.error_code.as_deref()
            && code != "0"
        {
            return Err(TranslateError::provider(
                SERVICE,
                format!("request rejected with error code {code}"),
            ));
        }

        let translation = data.translation.unwrap_or_default();
        if translation.is_empty() {
            return Err(TranslateError::provider(SERVICE, "Translation result is empty"));
        }

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text: translation.join(" "),
            from: from.to_string(),
            to: to.to_string(),
            service: SERVICE.to_string(),
        })
    }
}
