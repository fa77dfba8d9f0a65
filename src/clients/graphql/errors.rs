//! The normalized error type and the normalizer that produces it.
//!
//! Every failed call surfaces as exactly one [`GraphqlError`], whatever went
//! wrong underneath:
//!
//! - [`GraphqlErrorKind::RemoteValidation`]: the server answered with a
//!   non-empty GraphQL `errors` array (any HTTP status)
//! - [`GraphqlErrorKind::Transport`]: the request never completed, or a
//!   non-2xx status came back without a GraphQL `errors` body
//! - [`GraphqlErrorKind::MalformedResponse`]: a 2xx response had no usable
//!   `data` object, or the requested field did not decode
//!
//! The error always carries the exact document and variables that were sent,
//! so callers can log or replay the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use reserve_sdk::{GraphqlError, GraphqlErrorKind};
//!
//! match client.checkin().await {
//!     Ok(checked_in) => println!("checked in: {checked_in:?}"),
//!     Err(e) if e.kind == GraphqlErrorKind::Transport => {
//!         eprintln!("transport failed ({:?}): {}", e.status, e.message);
//!         // e.request() can be re-sent as-is
//!     }
//!     Err(e) => eprintln!("rejected: {}", e.message),
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::graphql::GraphqlRequest;
use crate::clients::{HttpError, HttpResponse};

/// Message used when a failure comes with no text of its own.
const UNKNOWN_REMOTE_ERROR: &str = "Unknown GraphQL error";

/// Which failure mode a [`GraphqlError`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphqlErrorKind {
    /// The server rejected a syntactically valid request.
    RemoteValidation,
    /// The request failed below the GraphQL layer.
    Transport,
    /// A response arrived but did not have the expected shape.
    MalformedResponse,
}

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteError {
    /// The error text reported by the server.
    pub message: String,
    /// Path to the field that failed, if the server reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    /// Server-specific extension data (error codes and the like).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// The single error type returned by every client operation.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct GraphqlError {
    /// The failure mode this error was normalized from.
    pub kind: GraphqlErrorKind,
    /// The first remote error's text, or a transport-level description.
    pub message: String,
    /// HTTP status code, when one was received.
    pub status: Option<u16>,
    /// The exact document that was sent.
    pub query: String,
    /// The exact variables that were sent.
    pub variables: Option<Map<String, Value>>,
    /// Every remote error reported, in server order. Empty unless `kind`
    /// is [`GraphqlErrorKind::RemoteValidation`].
    pub errors: Vec<RemoteError>,
}

impl GraphqlError {
    pub(crate) fn new(
        kind: GraphqlErrorKind,
        message: impl Into<String>,
        status: Option<u16>,
        request: &GraphqlRequest,
    ) -> Self {
        let mut message = message.into();
        if kind != GraphqlErrorKind::RemoteValidation && message.trim().is_empty() {
            message = UNKNOWN_REMOTE_ERROR.to_string();
        }

        let error = Self {
            kind,
            message,
            status,
            query: request.query.clone(),
            variables: request.variables.clone(),
            errors: Vec::new(),
        };
        tracing::debug!(
            kind = ?error.kind,
            status = ?error.status,
            "GraphQL request failed: {}",
            error.message
        );
        error
    }

    fn remote(errors: Vec<RemoteError>, status: Option<u16>, request: &GraphqlRequest) -> Self {
        let message = errors
            .first()
            .map_or(UNKNOWN_REMOTE_ERROR, |e| e.message.as_str())
            .to_string();
        let mut error = Self::new(GraphqlErrorKind::RemoteValidation, message, status, request);
        error.errors = errors;
        error
    }

    /// Returns `true` if the server rejected the request with GraphQL errors.
    #[must_use]
    pub fn is_remote_validation(&self) -> bool {
        self.kind == GraphqlErrorKind::RemoteValidation
    }

    /// Returns `true` for transport failures, including malformed responses.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            GraphqlErrorKind::Transport | GraphqlErrorKind::MalformedResponse
        )
    }

    /// Rebuilds the request that failed, ready to be sent again.
    #[must_use]
    pub fn request(&self) -> GraphqlRequest {
        GraphqlRequest {
            query: self.query.clone(),
            variables: self.variables.clone(),
        }
    }
}

/// The `data` object of a successful response, with the status it came with.
#[derive(Debug)]
pub(crate) struct ResponseData {
    status: u16,
    data: Map<String, Value>,
}

impl ResponseData {
    /// Decodes the named top-level field.
    ///
    /// An absent or `null` field yields `Ok(None)`.
    pub(crate) fn field<T: DeserializeOwned>(
        &self,
        name: &str,
        request: &GraphqlRequest,
    ) -> Result<Option<T>, GraphqlError> {
        match self.data.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                GraphqlError::new(
                    GraphqlErrorKind::MalformedResponse,
                    format!("Failed to decode field '{name}': {e}"),
                    Some(self.status),
                    request,
                )
            }),
        }
    }
}

/// Folds a transport outcome into either the response `data` or one error.
pub(crate) fn normalize(
    outcome: Result<HttpResponse, HttpError>,
    request: &GraphqlRequest,
) -> Result<ResponseData, GraphqlError> {
    match outcome {
        Ok(response) => {
            let errors = remote_errors(&response.body);
            if !errors.is_empty() {
                return Err(GraphqlError::remote(errors, Some(response.code), request));
            }

            match response.body.get("data") {
                Some(Value::Object(data)) => Ok(ResponseData {
                    status: response.code,
                    data: data.clone(),
                }),
                _ => {
                    let message = response.raw_body().map_or_else(
                        || "Response did not contain a data object".to_string(),
                        |raw| format!("Response was not valid JSON: {}", raw.trim()),
                    );
                    Err(GraphqlError::new(
                        GraphqlErrorKind::MalformedResponse,
                        message,
                        Some(response.code),
                        request,
                    ))
                }
            }
        }
        Err(HttpError::Response(e)) => {
            let errors = remote_errors(&e.body);
            if errors.is_empty() {
                Err(GraphqlError::new(
                    GraphqlErrorKind::Transport,
                    e.message,
                    Some(e.code),
                    request,
                ))
            } else {
                Err(GraphqlError::remote(errors, Some(e.code), request))
            }
        }
        Err(error @ HttpError::Network(_)) => Err(GraphqlError::new(
            GraphqlErrorKind::Transport,
            error.to_string(),
            error.status(),
            request,
        )),
    }
}

/// Extracts the GraphQL `errors` array from a response body.
///
/// Entries that are not well-formed error objects are kept with their JSON
/// text as the message rather than dropped.
fn remote_errors(body: &Value) -> Vec<RemoteError> {
    let Some(entries) = body.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(message) => RemoteError {
                message: message.clone(),
                path: None,
                extensions: None,
            },
            other => serde_json::from_value(other.clone()).unwrap_or_else(|_| RemoteError {
                message: other.to_string(),
                path: None,
                extensions: None,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;
    use std::collections::HashMap;

    fn sample_request() -> GraphqlRequest {
        let mut variables = Map::new();
        variables.insert("conversion_quote_id".to_string(), json!("q1"));
        GraphqlRequest::new("mutation ($conversion_quote_id: String!) { x }").with_variables(variables)
    }

    fn response(code: u16, body: Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_graphql_errors_yield_remote_validation_with_first_message() {
        let request = sample_request();
        let outcome = Ok(response(
            200,
            json!({
                "data": null,
                "errors": [
                    {"message": "Quote expired", "path": ["create_conversion_order"]},
                    {"message": "Second problem"}
                ]
            }),
        ));

        let error = normalize(outcome, &request).unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::RemoteValidation);
        assert_eq!(error.message, "Quote expired");
        assert_eq!(error.status, Some(200));
        assert_eq!(error.query, request.query);
        assert_eq!(error.variables, request.variables);
        assert_eq!(error.errors.len(), 2);
        assert_eq!(error.errors[0].path, Some(vec![json!("create_conversion_order")]));
    }

    #[test]
    fn test_errors_in_non_2xx_body_are_still_remote_validation() {
        let request = sample_request();
        let outcome = Err(HttpError::Response(HttpResponseError {
            code: 400,
            message: "Request failed with status 400 (Bad Request)".to_string(),
            body: json!({"errors": [{"message": "Variable \"$x\" is not defined"}]}),
            error_reference: None,
        }));

        let error = normalize(outcome, &request).unwrap_err();

        assert!(error.is_remote_validation());
        assert_eq!(error.status, Some(400));
        assert_eq!(error.message, "Variable \"$x\" is not defined");
    }

    #[test]
    fn test_non_2xx_without_errors_is_transport() {
        let request = sample_request();
        let outcome = Err(HttpError::Response(HttpResponseError {
            code: 502,
            message: "Request failed with status 502 (Bad Gateway)".to_string(),
            body: json!({"raw_body": "<html>bad gateway</html>"}),
            error_reference: None,
        }));

        let error = normalize(outcome, &request).unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::Transport);
        assert!(error.is_transport());
        assert_eq!(error.status, Some(502));
        assert_eq!(error.message, "Request failed with status 502 (Bad Gateway)");
        assert_eq!(error.variables, request.variables);
    }

    #[test]
    fn test_missing_data_is_malformed() {
        let request = sample_request();
        let error = normalize(Ok(response(200, json!({}))), &request).unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::MalformedResponse);
        assert!(error.is_transport());
        assert_eq!(error.status, Some(200));
        assert!(!error.message.is_empty());
    }

    #[test]
    fn test_unparseable_body_is_malformed_with_raw_text() {
        let request = sample_request();
        let error = normalize(Ok(response(200, json!({"raw_body": "OK"}))), &request).unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::MalformedResponse);
        assert_eq!(error.message, "Response was not valid JSON: OK");
    }

    #[test]
    fn test_string_and_odd_error_entries_are_kept() {
        let errors = remote_errors(&json!({"errors": ["plain text", {"code": 7}]}));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "plain text");
        assert_eq!(errors[1].message, r#"{"code":7}"#);
    }

    #[test]
    fn test_empty_errors_array_is_not_an_error() {
        let request = sample_request();
        let data = normalize(
            Ok(response(200, json!({"data": {"checkin": true}, "errors": []}))),
            &request,
        )
        .unwrap();
        assert_eq!(data.field::<bool>("checkin", &request).unwrap(), Some(true));
    }

    #[test]
    fn test_blank_first_remote_message_is_kept_verbatim() {
        let request = sample_request();
        let error = normalize(
            Ok(response(
                200,
                json!({"errors": [{"message": ""}, {"message": "second"}]}),
            )),
            &request,
        )
        .unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::RemoteValidation);
        assert_eq!(error.message, "");
        assert_eq!(error.errors[1].message, "second");
    }

    #[test]
    fn test_blank_transport_message_is_replaced() {
        let request = sample_request();
        let outcome = Err(HttpError::Response(HttpResponseError {
            code: 500,
            message: "  ".to_string(),
            body: json!({}),
            error_reference: None,
        }));

        let error = normalize(outcome, &request).unwrap_err();

        assert_eq!(error.kind, GraphqlErrorKind::Transport);
        assert_eq!(error.message, UNKNOWN_REMOTE_ERROR);
    }

    #[test]
    fn test_absent_and_null_fields_are_none() {
        let request = sample_request();
        let data = normalize(
            Ok(response(200, json!({"data": {"user": null}}))),
            &request,
        )
        .unwrap();

        assert_eq!(data.field::<Value>("user", &request).unwrap(), None);
        assert_eq!(data.field::<Value>("users", &request).unwrap(), None);
    }

    #[test]
    fn test_undecodable_field_is_malformed() {
        let request = sample_request();
        let data = normalize(
            Ok(response(200, json!({"data": {"checkin": "yes"}}))),
            &request,
        )
        .unwrap();

        let error = data.field::<bool>("checkin", &request).unwrap_err();
        assert_eq!(error.kind, GraphqlErrorKind::MalformedResponse);
        assert!(error.message.contains("checkin"));
        assert_eq!(error.query, request.query);
    }

    #[test]
    fn test_request_rebuilds_sent_request() {
        let request = sample_request();
        let error = normalize(Ok(response(200, json!({}))), &request).unwrap_err();
        assert_eq!(error.request(), request);
    }
}
