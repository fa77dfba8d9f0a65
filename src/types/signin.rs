//! Sign-in arguments and the issued token.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DemoSigninArgs {
    pub username: String,
}

impl DemoSigninArgs {
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Credentials for a service account.
///
/// The secret is sent as a variable and never logged.
#[derive(Clone, Serialize, Default, PartialEq, Eq)]
pub struct ServiceSigninArgs {
    pub service_api_key: String,
    pub service_api_secret: String,
}

impl std::fmt::Debug for ServiceSigninArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSigninArgs")
            .field("service_api_key", &self.service_api_key)
            .field("service_api_secret", &"*****")
            .finish()
    }
}

/// A bearer token and its expiry.
///
/// Pass `jwt` to [`ReserveClient::set_auth_token`](crate::ReserveClient::set_auth_token)
/// to authenticate subsequent calls.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInResult {
    pub jwt: String,
    /// Expiry as a Unix timestamp in seconds.
    pub expires_at: i64,
}

impl SignInResult {
    /// Returns the expiry as a UTC timestamp, if it is representable.
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at, 0).single()
    }

    /// Returns `true` if the token has expired as of now.
    ///
    /// An unrepresentable expiry counts as expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at_utc()
            .map_or(true, |expires_at| expires_at <= Utc::now())
    }
}

impl std::fmt::Debug for SignInResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInResult")
            .field("jwt", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_helpers() {
        let future = SignInResult {
            jwt: "token".to_string(),
            expires_at: Utc::now().timestamp() + 3600,
        };
        assert!(!future.is_expired());

        let past = SignInResult {
            jwt: "token".to_string(),
            expires_at: 1_600_000_000,
        };
        assert!(past.is_expired());
        assert_eq!(
            past.expires_at_utc().map(|t| t.to_rfc3339()),
            Some("2020-09-13T12:26:40+00:00".to_string())
        );
    }

    #[test]
    fn test_debug_masks_secrets() {
        let args = ServiceSigninArgs {
            service_api_key: "key".to_string(),
            service_api_secret: "hunter2".to_string(),
        };
        let result = SignInResult {
            jwt: "eyJ.secret".to_string(),
            expires_at: 0,
        };
        assert!(!format!("{args:?}").contains("hunter2"));
        assert!(!format!("{result:?}").contains("eyJ"));
    }
}
