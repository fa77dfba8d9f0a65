//! The GraphQL request payload.

use serde::Serialize;
use serde_json::{Map, Value};

/// A rendered GraphQL document and the variables bound to it.
///
/// This is exactly what goes over the wire, and exactly what a
/// [`GraphqlError`](super::GraphqlError) carries back for replay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The query or mutation document text.
    pub query: String,
    /// Variables for the document, absent when it declares no parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
}

impl GraphqlRequest {
    /// Creates a request without variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attaches variables to the request.
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = Some(variables);
        self
    }
}
