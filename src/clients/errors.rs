//! HTTP-level error types for the Reserve SDK.
//!
//! These are the raw failures a [`Transport`](crate::clients::Transport) can
//! report. They never reach SDK callers directly: the GraphQL layer folds
//! every one of them into a single
//! [`GraphqlError`](crate::clients::graphql::GraphqlError).
//!
//! - [`HttpResponseError`]: the endpoint answered with a non-2xx status
//! - [`HttpError`]: unified transport error, including network failures

use thiserror::Error;

/// Error returned when the endpoint answers with a non-successful status.
///
/// The parsed body is kept so the GraphQL layer can still recover an
/// `errors` array sent alongside a 4xx/5xx status.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human readable summary of the failure.
    pub message: String,
    /// The parsed response body (`{"raw_body": ...}` when it was not JSON).
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for transport failures.
///
/// # Example
///
/// ```rust,ignore
/// match transport.execute(&request, &headers).await {
///     Ok(response) => { /* 2xx, inspect the GraphQL body */ }
///     Err(HttpError::Response(e)) => println!("status {}: {}", e.code, e.message),
///     Err(HttpError::Network(e)) => println!("network error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network, connection, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status associated with this error, if one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            body: json!({}),
            error_reference: None,
        };
        assert_eq!(error.to_string(), "Not Found");
    }

    #[test]
    fn test_http_error_status_for_response_variant() {
        let error = HttpError::Response(HttpResponseError {
            code: 503,
            message: "Service Unavailable".to_string(),
            body: json!({"raw_body": "upstream down"}),
            error_reference: Some("req-1".to_string()),
        });
        assert_eq!(error.status(), Some(503));
        assert_eq!(error.to_string(), "Service Unavailable");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            body: json!({}),
            error_reference: None,
        };
        let _ = response_error;
    }
}
