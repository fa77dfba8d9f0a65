//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated GraphQL endpoint URL.
///
/// The URL must use the `http` or `https` scheme and carry a non-empty host.
/// Everything after the host (port, path, query) is kept verbatim and used
/// as the POST target for every request.
///
/// # Example
///
/// ```rust
/// use reserve_sdk::Endpoint;
///
/// let endpoint = Endpoint::new("https://api.example.com/graphql").unwrap();
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), "api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no scheme,
    /// a scheme other than `http`/`https`, or an empty host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_accepts_https_with_path() {
        let endpoint = Endpoint::new("https://api.example.com/graphql").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_name(), "api.example.com");
        assert_eq!(endpoint.as_ref(), "https://api.example.com/graphql");
    }

    #[test]
    fn test_endpoint_accepts_http_with_port() {
        let endpoint = Endpoint::new("http://127.0.0.1:4000/graphql").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_endpoint_trims_whitespace() {
        let endpoint = Endpoint::new("  https://api.example.com  ").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_endpoint_rejects_missing_scheme() {
        assert!(matches!(
            Endpoint::new("api.example.com/graphql"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_non_http_scheme() {
        assert!(matches!(
            Endpoint::new("ws://api.example.com/graphql"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_empty_host() {
        assert!(Endpoint::new("https://").is_err());
        assert!(Endpoint::new("https:///graphql").is_err());
    }

    #[test]
    fn test_endpoint_serde_round_trips_as_string() {
        let endpoint = Endpoint::new("https://api.example.com/graphql").unwrap();
        let json = serde_json::to_string(&endpoint).unwrap();
        assert_eq!(json, r#""https://api.example.com/graphql""#);

        let parsed: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, endpoint);
    }

    #[test]
    fn test_endpoint_deserialize_rejects_invalid() {
        let result: Result<Endpoint, _> = serde_json::from_str(r#""not-a-url""#);
        assert!(result.is_err());
    }
}
