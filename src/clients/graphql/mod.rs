//! GraphQL request, transport, and error normalization.
//!
//! # Overview
//!
//! - [`GraphqlRequest`]: a rendered document plus its variables
//! - [`GraphqlClient`]: the HTTP [`Transport`](crate::clients::Transport)
//! - [`GraphqlError`]: the one error shape every failed operation returns
//!
//! # Response Structure
//!
//! GraphQL responses carry a `data` object and, on failure, an `errors`
//! array. Errors may arrive with HTTP 200 or alongside a 4xx/5xx status;
//! both are reported as [`GraphqlErrorKind::RemoteValidation`].

mod client;
mod errors;
mod request;

pub use client::GraphqlClient;
pub use errors::{GraphqlError, GraphqlErrorKind, RemoteError};
pub use request::GraphqlRequest;

pub(crate) use errors::normalize;
