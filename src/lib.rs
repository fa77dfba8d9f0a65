//! # Reserve Rust SDK
//!
//! A typed Rust client for the Reserve exchange GraphQL API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ReserveConfig`] and [`ReserveConfigBuilder`]
//! - A validated [`Endpoint`] newtype
//! - [`ReserveClient`], with one typed method per remote operation
//! - Per-client header state with bearer token support
//! - Optional caller-chosen selections for operations that allow them
//! - A single normalized error, [`GraphqlError`], for every failure mode
//!
//! ## Quick Start
//!
//! ```rust
//! use reserve_sdk::{Endpoint, ReserveClient, ReserveConfig};
//!
//! let config = ReserveConfig::builder()
//!     .endpoint(Endpoint::new("https://api.example.com/graphql").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut client = ReserveClient::new(&config);
//! client.set_auth_token("your-jwt");
//! assert_eq!(client.headers()["authorization"], "Bearer your-jwt");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use reserve_sdk::types::{CreateConversionOrderArgs, CreateConversionQuoteArgs};
//!
//! let quote = client
//!     .create_conversion_quote(&CreateConversionQuoteArgs {
//!         source_currency_id: "BTC".to_string(),
//!         target_currency_id: "USDT".to_string(),
//!         source_currency_amount: Some(0.5),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! if let Some(quote) = quote {
//!     let order = client
//!         .create_conversion_order(&CreateConversionOrderArgs::for_quote(quote.conversion_quote_id))
//!         .await?;
//! }
//! ```
//!
//! ## Custom Selections
//!
//! ```rust,ignore
//! use reserve_sdk::types::GetAccountBalanceArgs;
//!
//! let rows = client
//!     .get_account_balances_with_fields(
//!         &GetAccountBalanceArgs::default(),
//!         &["currency_id", "free_balance"],
//!     )
//!     .await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<Option<T>, GraphqlError>`. The error's
//! [`kind`](GraphqlError::kind) tells remote rejections apart from transport
//! failures, and its `query` and `variables` hold the exact request sent.
//! Nothing is retried automatically.
//!
//! ## Design Principles
//!
//! - **No global state**: Clients are constructed explicitly from a config
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Pluggable transport**: [`Transport`] can be replaced, e.g. in tests
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod operations;
pub mod types;

// Re-export public types at crate root for convenience
pub use client::ReserveClient;
pub use config::{Endpoint, ReserveConfig, ReserveConfigBuilder};
pub use error::ConfigError;

// Re-export transport and error types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlErrorKind, GraphqlRequest, HttpClient, HttpError,
    HttpResponse, HttpResponseError, Transport,
};
pub use clients::graphql::RemoteError;

pub use operations::{Operation, OperationKind};
