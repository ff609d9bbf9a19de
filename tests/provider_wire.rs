#![allow(clippy::unwrap_used)]
//! Provider wire tests.
//!
//! Each provider is pointed at a local mock server so request encoding,
//! signing and response normalization are checked without real API calls.

use std::collections::HashMap;

use serde_json::json;
use translate_cli::TranslateError;
use translate_cli::config::Credential;
use translate_cli::translation::{DeepSeekTranslator, TranslationResult, YoudaoTranslator, sign};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credential() -> Credential {
    Credential::new("test-key", "test-secret")
}

async fn youdao_server(response: ResponseTemplate) -> (MockServer, YoudaoTranslator) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(response)
        .mount(&server)
        .await;

    let translator = YoudaoTranslator::with_endpoint(credential(), format!("{}/api", server.uri()));
    (server, translator)
}

async fn deepseek_server(response: ResponseTemplate) -> (MockServer, DeepSeekTranslator) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai_dialog"))
        .respond_with(response)
        .mount(&server)
        .await;

    let translator =
        DeepSeekTranslator::with_endpoint(credential(), format!("{}/ai_dialog", server.uri()));
    (server, translator)
}

/// Splits a form body into fields. Only used for values that need no decoding.
fn form_fields(body: &[u8]) -> HashMap<String, String> {
    String::from_utf8_lossy(body)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

mod youdao {
    use super::*;

    #[tokio::test]
    async fn test_translate_normalizes_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("q=Hello"))
            .and(body_string_contains("appKey=test-key"))
            .and(body_string_contains("from=en"))
            .and(body_string_contains("to=zh-CHS"))
            .and(body_string_contains("signType=v3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": "0",
                "translation": ["你好"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let translator =
            YoudaoTranslator::with_endpoint(credential(), format!("{}/api", server.uri()));
        let result = translator.translate("Hello", "en", "zh-CHS").await.unwrap();

        assert_eq!(
            result,
            TranslationResult {
                original_text: "Hello".to_string(),
                translated_text: "你好".to_string(),
                from: "en".to_string(),
                to: "zh-CHS".to_string(),
                service: "youdao".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_request_signature_matches_fields() {
        let (server, translator) = youdao_server(
            ResponseTemplate::new(200).set_body_json(json!({ "translation": ["你好"] })),
        )
        .await;

        translator.translate("Hello", "en", "zh-CHS").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let fields = form_fields(&requests[0].body);

        let salt = fields["salt"].as_str();
        let curtime = fields["curtime"].as_str();
        let expected = sign(["test-key", "Hello", salt, curtime, "test-secret"]);
        assert_eq!(fields["sign"], expected);
    }

    #[tokio::test]
    async fn test_each_call_uses_fresh_salt() {
        let (server, translator) = youdao_server(
            ResponseTemplate::new(200).set_body_json(json!({ "translation": ["ok"] })),
        )
        .await;

        translator.translate("Hello", "en", "ja").await.unwrap();
        translator.translate("Hello", "en", "ja").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let first = form_fields(&requests[0].body);
        let second = form_fields(&requests[1].body);
        assert_ne!(first["salt"], second["salt"]);
        assert_ne!(first["sign"], second["sign"]);
    }

    #[tokio::test]
    async fn test_multiple_segments_joined_with_space() {
        let (_server, translator) = youdao_server(
            ResponseTemplate::new(200).set_body_json(json!({ "translation": ["你好", "世界"] })),
        )
        .await;

        let result = translator
            .translate("Hello\nWorld", "en", "zh-CHS")
            .await
            .unwrap();
        assert_eq!(result.translated_text, "你好 世界");
    }

    #[tokio::test]
    async fn test_empty_translation_is_provider_error() {
        let (_server, translator) =
            youdao_server(ResponseTemplate::new(200).set_body_json(json!({ "translation": [] })))
                .await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_missing_translation_is_provider_error() {
        let (_server, translator) =
            youdao_server(ResponseTemplate::new(200).set_body_json(json!({}))).await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_error_code_is_provider_error() {
        let (_server, translator) =
            youdao_server(ResponseTemplate::new(200).set_body_json(json!({ "errorCode": "108" })))
                .await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
        assert!(err.to_string().contains("108"));
    }

    #[tokio::test]
    async fn test_http_error_is_transport_error() {
        let (_server, translator) =
            youdao_server(ResponseTemplate::new(500).set_body_string("upstream down")).await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Transport { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_provider_error() {
        let (_server, translator) =
            youdao_server(ResponseTemplate::new(200).set_body_string("not valid json")).await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Reserve a free port, then close it so nothing is listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/api", listener.local_addr().unwrap());
        drop(listener);

        let translator = YoudaoTranslator::with_endpoint(credential(), endpoint);
        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Transport { .. }));
    }
}

mod deepseek {
    use super::*;

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "code": "0",
            "data": { "choices": [{ "message": { "content": content } }] }
        })
    }

    #[tokio::test]
    async fn test_translate_sends_dialog_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ai_dialog"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "appKey": "test-key",
                "signType": "v4",
                "stream": false,
                "model": "Deepseek-r1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("你好")))
            .expect(1)
            .mount(&server)
            .await;

        let translator =
            DeepSeekTranslator::with_endpoint(credential(), format!("{}/ai_dialog", server.uri()));
        let result = translator.translate("Hello", "en", "zh-CHS").await.unwrap();

        assert_eq!(result.translated_text, "你好");
        assert_eq!(result.service, "deepseek");
        assert_eq!(result.from, "en");
        assert_eq!(result.to, "zh-CHS");
    }

    #[tokio::test]
    async fn test_request_messages_and_signature() {
        let (server, translator) =
            deepseek_server(ResponseTemplate::new(200).set_body_json(completion("ok"))).await;

        translator.translate("Hello", "en", "ja").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

        let salt = body["salt"].as_str().unwrap();
        let curtime = body["curtime"].as_str().unwrap();
        assert_eq!(
            body["sign"].as_str().unwrap(),
            sign(["test-key", salt, curtime, "test-secret"])
        );

        assert_eq!(body["messages"][0]["role"], "system");
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .contains("from en to ja")
        );
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hello");
    }

    #[tokio::test]
    async fn test_error_code_carries_provider_message() {
        let (_server, translator) = deepseek_server(
            ResponseTemplate::new(200).set_body_json(json!({ "code": "1", "msg": "bad key" })),
        )
        .await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        match err {
            TranslateError::Provider { message, .. } => assert_eq!(message, "bad key"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_content_is_provider_error() {
        let (_server, translator) = deepseek_server(
            ResponseTemplate::new(200).set_body_json(json!({ "code": "0", "data": {} })),
        )
        .await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_http_error_is_transport_error() {
        let (_server, translator) =
            deepseek_server(ResponseTemplate::new(401).set_body_string("unauthorized")).await;

        let err = translator.translate("Hello", "en", "zh-CHS").await.unwrap_err();
        assert!(matches!(err, TranslateError::Transport { .. }));
    }
}
