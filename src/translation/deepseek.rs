use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::http::{connect_error, read_success_body};
use super::prompt::build_system_prompt;
use super::service::TranslationResult;
use super::sign::{Nonce, sign};
use crate::config::Credential;
use crate::error::{Result, TranslateError};

pub const DEEPSEEK_ENDPOINT: &str = "https://openapi.youdao.com/ai_dialog";
pub const DEEPSEEK_MODEL: &str = "Deepseek-r1";

const SERVICE: &str = "deepseek";
const SIGN_TYPE: &str = "v4";

// Borrow everything; the request only lives for one serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DialogRequest<'a> {
    app_key: &'a str,
    salt: &'a str,
    sign: &'a str,
    sign_type: &'static str,
    curtime: &'a str,
    stream: bool,
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct DialogResponse {
    code: Option<String>,
    msg: Option<String>,
    data: Option<DialogData>,
}

#[derive(Debug, Deserialize)]
struct DialogData {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl DialogResponse {
    fn into_content(self) -> Result<String> {
        match self.code.as_deref() {
            Some("0") => {}
            code => {
                let message = self.msg.unwrap_or_else(|| {
                    format!("request rejected with code {}", code.unwrap_or("<missing>"))
                });
                return Err(TranslateError::provider(SERVICE, message));
            }
        }

        self.data
            .and_then(|data| data.choices.into_iter().next())
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| TranslateError::provider(SERVICE, "Translation result is empty"))
    }
}

/// DeepSeek chat model behind Youdao's AI dialog API (JSON POST, `signType=v4`).
#[derive(Debug)]
pub struct DeepSeekTranslator {
    client: Client,
    endpoint: String,
    credential: Credential,
}

impl DeepSeekTranslator {
    pub fn new(credential: Credential) -> Self {
        Self::with_endpoint(credential, DEEPSEEK_ENDPOINT)
    }

    pub fn with_endpoint(credential: Credential, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            credential,
        }
    }

    /// `sha256(appKey + salt + curtime + appSecret)`; the text is not signed.
    fn signature(&self, nonce: &Nonce) -> String {
        sign([
            self.credential.app_key.as_str(),
            nonce.salt.as_str(),
            nonce.curtime.as_str(),
            self.credential.app_secret.as_str(),
        ])
    }

    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<TranslationResult> {
        let nonce = Nonce::now();
        let signature = self.signature(&nonce);

        let request = DialogRequest {
            app_key: &self.credential.app_key,
            salt: &nonce.salt,
            sign: &signature,
            sign_type: SIGN_TYPE,
            curtime: &nonce.curtime,
            stream: false,
            model: DEEPSEEK_MODEL,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(build_system_prompt(from, to)),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            model = DEEPSEEK_MODEL,
            from,
            to,
            "sending deepseek dialog request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| connect_error(SERVICE, &self.endpoint, &e))?;

        let body = read_success_body(SERVICE, response).await?;
        let data: DialogResponse = serde_json::from_str(&body).map_err(|e| {
            TranslateError::provider(SERVICE, format!("invalid response body: {e}"))
        })?;

        Ok(TranslationResult {
            original_text: text.to_string(),
            translated_text: data.into_content()?,
            from: from.to_string(),
            to: to.to_string(),
            service: SERVICE.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(body: &str) -> DialogResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_signature_excludes_text() {
        let translator = DeepSeekTranslator::new(Credential::new("app-key", "app-secret"));
        let nonce = Nonce::from_parts("1700000000123", "1700000000");
        let expected = sign(["app-key", "1700000000123", "1700000000", "app-secret"]);
        assert_eq!(translator.signature(&nonce), expected);
    }

    #[test]
    fn test_request_serializes_wire_fields() {
        let request = DialogRequest {
            app_key: "k",
            salt: "1",
            sign: "abc",
            sign_type: SIGN_TYPE,
            curtime: "2",
            stream: false,
            model: DEEPSEEK_MODEL,
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed("Hello"),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["appKey"], "k");
        assert_eq!(value["signType"], "v4");
        assert_eq!(value["stream"], false);
        assert_eq!(value["model"], "Deepseek-r1");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Hello");
    }

    #[test]
    fn test_content_extracted_on_success() {
        let response = parse(r#"{"code":"0","data":{"choices":[{"message":{"content":" 你好 "}}]}}"#);
        assert_eq!(response.into_content().unwrap(), "你好");
    }

    #[test]
    fn test_error_code_uses_provider_message() {
        let response = parse(r#"{"code":"1","msg":"bad key"}"#);
        let err = response.into_content().unwrap_err();
        assert!(matches!(err, TranslateError::Provider { message, .. } if message == "bad key"));
    }

    #[test]
    fn test_error_code_without_message() {
        let response = parse(r#"{"code":"202"}"#);
        let err = response.into_content().unwrap_err();
        assert!(err.to_string().contains("202"));
    }

    #[test]
    fn test_missing_choices_is_error() {
        let response = parse(r#"{"code":"0","data":{"choices":[]}}"#);
        assert!(matches!(
            response.into_content(),
            Err(TranslateError::Provider { .. })
        ));
    }

    #[test]
    fn test_empty_content_is_error() {
        let response = parse(r#"{"code":"0","data":{"choices":[{"message":{"content":""}}]}}"#);
        assert!(response.into_content().is_err());
    }
}
