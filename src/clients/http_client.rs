//! HTTP client for the Reserve GraphQL endpoint.
//!
//! This module provides the [`HttpClient`] type, which POSTs JSON payloads to
//! the configured endpoint and parses the response body.

use std::collections::HashMap;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::ReserveConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one GraphQL endpoint.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`, `Content-Type`)
/// - Merging per-call headers over the defaults
/// - JSON body parsing, keeping unparseable bodies as `raw_body`
/// - Mapping non-2xx statuses to [`HttpError::Response`]
///
/// It performs exactly one attempt per call. Retrying is left to callers.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the configured endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ReserveConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Reserve SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// POSTs a JSON body to the endpoint.
    ///
    /// `headers` are applied after the defaults, so a caller-supplied
    /// header with the same name replaces the default.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent or the
    /// response could not be read, and [`HttpError::Response`] for a non-2xx status.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        body: &B,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in self.default_headers.iter().filter(|(key, _)| {
            !headers
                .keys()
                .any(|override_key| override_key.eq_ignore_ascii_case(key))
        }) {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.json(body);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::describe_failure(&response),
            error_reference: response.request_id().map(String::from),
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Builds a one-line description of a non-2xx response.
    fn describe_failure(response: &HttpResponse) -> String {
        let reason = reqwest::StatusCode::from_u16(response.code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .map_or(String::new(), |reason| format!(" ({reason})"));

        let detail = response
            .body
            .get("error")
            .or_else(|| response.body.get("message"))
            .and_then(serde_json::Value::as_str)
            .or_else(|| response.raw_body())
            .filter(|detail| !detail.trim().is_empty());

        match detail {
            Some(detail) => format!(
                "Request failed with status {}{reason}: {}",
                response.code,
                detail.trim()
            ),
            None => format!("Request failed with status {}{reason}", response.code),
        }
    }
}
