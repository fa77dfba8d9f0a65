//! The transport seam between the typed client and the network.
//!
//! [`ReserveClient`](crate::ReserveClient) never talks to reqwest directly.
//! It hands a finished [`GraphqlRequest`] plus the session headers to a
//! [`Transport`], and folds whatever comes back through the error
//! normalizer. [`GraphqlClient`](crate::clients::graphql::GraphqlClient) is
//! the HTTP implementation; tests substitute in-memory doubles.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::graphql::GraphqlRequest;
use crate::clients::{HttpError, HttpResponse};

/// Executes one GraphQL request and returns the raw HTTP outcome.
///
/// Implementations must send the request exactly once. Timeouts and
/// cancellation are the implementation's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` with `headers` and returns the parsed response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request fails below the GraphQL layer.
    async fn execute(
        &self,
        request: &GraphqlRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        (**self).execute(request, headers).await
    }
}
