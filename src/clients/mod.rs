//! Transport layer for the Reserve GraphQL endpoint.
//!
//! # Overview
//!
//! - [`HttpClient`]: POSTs JSON to the endpoint and parses the response
//! - [`HttpResponse`]: a parsed response (status, headers, JSON body)
//! - [`HttpError`]: network failures and non-2xx statuses
//! - [`Transport`]: the seam [`ReserveClient`](crate::ReserveClient) sends through
//! - [`graphql::GraphqlClient`]: the HTTP implementation of [`Transport`]
//! - [`graphql::GraphqlError`]: the normalized error every operation returns
//!
//! # Retry Behavior
//!
//! None. Every call is exactly one round trip. Callers decide whether a
//! failure is worth replaying, using the request attached to the error.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use graphql::{GraphqlClient, GraphqlError, GraphqlErrorKind, GraphqlRequest};
