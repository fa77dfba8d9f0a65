//! Integration tests for the GraphQL transport.
//!
//! These tests verify the request body shape sent by [`GraphqlClient`] and
//! that GraphQL-level errors are passed through untouched at this layer.

use reserve_sdk::clients::graphql::GraphqlClient;
use reserve_sdk::{Endpoint, GraphqlRequest, ReserveConfig, Transport};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> GraphqlClient {
    let endpoint = Endpoint::new(format!("{}/graphql", server.uri())).unwrap();
    GraphqlClient::new(&ReserveConfig::new(endpoint))
}

// ============================================================================
// GraphqlClient Construction Tests
// ============================================================================

#[test]
fn test_graphql_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
}

#[test]
fn test_graphql_client_constructor_is_infallible() {
    let config = ReserveConfig::new(Endpoint::new("https://api.example.com/graphql").unwrap());
    // This compiles because new() returns Self, not Result
    let client: GraphqlClient = GraphqlClient::new(&config);
    assert_eq!(client.endpoint(), "https://api.example.com/graphql");
}

// ============================================================================
// Request Body Tests
// ============================================================================

#[tokio::test]
async fn test_query_without_variables_omits_variables_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_json(json!({"query": "mutation {\n  checkin\n}"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"checkin": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .query("mutation {\n  checkin\n}", None, &HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.body["data"]["checkin"], json!(true));
}

#[tokio::test]
async fn test_execute_sends_variables() {
    let server = MockServer::start().await;
    let query = "mutation ($username: String!) {\n  trader_demo_signin(username: $username) {\n    jwt\n  }\n}";
    Mock::given(method("POST"))
        .and(body_json(json!({
            "query": query,
            "variables": {"username": "trader_1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"trader_demo_signin": {"jwt": "eyJ"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut variables = Map::new();
    variables.insert("username".to_string(), json!("trader_1"));
    let request = GraphqlRequest::new(query).with_variables(variables);

    let response = client.execute(&request, &HashMap::new()).await.unwrap();

    assert_eq!(response.code, 200);
}

#[tokio::test]
async fn test_graphql_errors_are_not_interpreted_by_the_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Unauthorized"}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let response = client
        .query("query { user { user_id } }", None, &HashMap::new())
        .await
        .unwrap();

    assert_eq!(response.body["errors"][0]["message"], Value::from("Unauthorized"));
}
