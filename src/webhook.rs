//! Outbound webhook delivery shared by the notifier and the door opener.

use std::time::Duration;

use reqwest::Client as HttpClient;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::error;

use crate::errors::GateError;

/// Hard cap on a single webhook POST; everything else in the pipeline runs
/// without a timeout.
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client used for webhook delivery.
pub fn client() -> Result<HttpClient, reqwest::Error> {
    HttpClient::builder().timeout(WEBHOOK_TIMEOUT).build()
}

/// POST `body` as JSON to `url`. Anything other than a 200 response is a
/// delivery failure; the response body is logged for diagnosis but only a
/// generic error is surfaced.
pub async fn post_json<T: Serialize + ?Sized>(
    http: &HttpClient,
    url: &str,
    body: &T,
) -> Result<(), GateError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let resp = http.post(url).headers(headers).json(body).send().await?;

    if resp.status() != StatusCode::OK {
        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        error!("Webhook POST failed: status={} body={}", status, body_text);
        return Err(GateError::Delivery(format!(
            "webhook returned status {}",
            status
        )));
    }
    Ok(())
}
