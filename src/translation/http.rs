use reqwest::Response;

use crate::error::{Result, TranslateError};

/// Reads the body of `response`, turning non-2xx statuses into transport errors.
pub(super) async fn read_success_body(service: &'static str, response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        TranslateError::transport(service, format!("failed to read response body: {e}"))
    })?;

    tracing::debug!(service, %status, bytes = body.len(), "received response");

    if !status.is_success() {
        return Err(TranslateError::transport(
            service,
            format!("request failed with status {status}: {body}"),
        ));
    }

    Ok(body)
}

pub(super) fn connect_error(service: &'static str, endpoint: &str, err: &reqwest::Error) -> TranslateError {
    TranslateError::transport(service, format!("failed to connect to {endpoint}: {err}"))
}
