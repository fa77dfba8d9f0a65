//! Configuration types for the Reserve SDK.
//!
//! # Overview
//!
//! - [`ReserveConfig`]: the settings shared by every request a client sends
//! - [`ReserveConfigBuilder`]: a builder for [`ReserveConfig`]
//! - [`Endpoint`]: a validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use reserve_sdk::{Endpoint, ReserveConfig};
//! use std::time::Duration;
//!
//! let config = ReserveConfig::builder()
//!     .endpoint(Endpoint::new("https://api.example.com/graphql").unwrap())
//!     .user_agent_prefix("MyDesk/1.0")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::Endpoint;

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a Reserve API client.
///
/// # Thread Safety
///
/// `ReserveConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ReserveConfig {
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ReserveConfig {
    /// Creates a new builder for constructing a `ReserveConfig`.
    #[must_use]
    pub fn builder() -> ReserveConfigBuilder {
        ReserveConfigBuilder::new()
    }

    /// Shorthand for a configuration with only an endpoint set.
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            user_agent_prefix: None,
            timeout: None,
        }
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    ///
    /// The timeout is enforced by the transport; the client itself never
    /// waits on anything but the in-flight request.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify ReserveConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReserveConfig>();
};

/// Builder for constructing [`ReserveConfig`] instances.
///
/// `endpoint` is required. `user_agent_prefix` and `timeout` default to `None`.
#[derive(Debug, Default)]
pub struct ReserveConfigBuilder {
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl ReserveConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout applied by the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ReserveConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<ReserveConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(ReserveConfig {
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
