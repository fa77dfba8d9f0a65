//! HTTP GraphQL transport for the Reserve API.
//!
//! This module provides the [`GraphqlClient`] type, which sends raw GraphQL
//! documents to the configured endpoint.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clients::graphql::GraphqlRequest;
use crate::clients::{HttpClient, HttpError, HttpResponse, Transport};
use crate::config::ReserveConfig;

/// GraphQL client for the Reserve endpoint.
///
/// This is the default [`Transport`] behind [`ReserveClient`](crate::ReserveClient).
/// It can also be used on its own to send hand-written documents.
///
/// GraphQL-level errors arrive with HTTP 200 and are left in
/// `response.body["errors"]`; only the typed client normalizes them.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use reserve_sdk::{Endpoint, GraphqlClient, ReserveConfig};
/// use std::collections::HashMap;
///
/// let config = ReserveConfig::new(Endpoint::new("https://api.example.com/graphql")?);
/// let client = GraphqlClient::new(&config);
///
/// let response = client
///     .query("query { healthcheck { maintenance_mode } }", None, &HashMap::new())
///     .await?;
/// println!("{}", response.body["data"]["healthcheck"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the configured endpoint.
    #[must_use]
    pub fn new(config: &ReserveConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Executes a GraphQL document against the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network errors and non-2xx responses.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        let mut request = GraphqlRequest::new(query);
        request.variables = variables;
        self.execute(&request, headers).await
    }
}

#[async_trait]
impl Transport for GraphqlClient {
    async fn execute(
        &self,
        request: &GraphqlRequest,
        headers: &HashMap<String, String>,
    ) -> Result<HttpResponse, HttpError> {
        self.http_client.post_json(request, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    #[test]
    fn test_graphql_client_uses_config_endpoint() {
        let config = ReserveConfig::new(Endpoint::new("http://localhost:4000/graphql").unwrap());
        let client = GraphqlClient::new(&config);
        assert_eq!(client.endpoint(), "http://localhost:4000/graphql");
    }

    #[test]
    fn test_graphql_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphqlClient>();
    }
}
