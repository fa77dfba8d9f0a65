//! User records and the user lookup and update arguments.

use serde::{Deserialize, Serialize};

use super::common::{DateRangeInput, PagerInput, SortInput};

/// An exchange user.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    pub serial_id: Option<u64>,
    pub user_id: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub primary_market_currency: Option<String>,
    pub exchange: Option<String>,
    pub is_active: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_country: Option<String>,
    pub address_state: Option<String>,
    pub address_city: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_zip: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub favorite_instruments: Option<Vec<String>>,
    pub profile_pic_url: Option<String>,
    pub passport_url: Option<String>,
    pub national_identity_url: Option<String>,
    pub driver_license_url: Option<String>,
    pub birth_certificate_url: Option<String>,
    pub bank_statement_url: Option<String>,
    pub utility_bill_url: Option<String>,
}

impl User {
    /// Returns `true` if the account is flagged active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active.is_some_and(|flag| flag != 0)
    }
}

/// Filters for [`ReserveClient::get_users`](crate::ReserveClient::get_users).
///
/// Unset fields fall back to the listing defaults: empty `email` and
/// `user_id`, a 30-row first page, newest first, and no date range.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetUsersArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PagerInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortInput>,
    #[serde(rename = "dateRange", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeInput>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetUserArgs {
    /// Omit to fetch the authenticated user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Profile fields to change. Only the fields that are set are sent.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct UpdateUserArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_market_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_instruments: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_users_args_rename_date_range() {
        let args = GetUsersArgs {
            username: Some("y".to_string()),
            date_range: Some(DateRangeInput {
                time_from: Some("2024-01-01".to_string()),
                time_to: None,
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(args).unwrap(),
            json!({"username": "y", "dateRange": {"time_from": "2024-01-01"}})
        );
    }

    #[test]
    fn test_default_args_serialize_to_empty_object() {
        assert_eq!(serde_json::to_value(GetUsersArgs::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(UpdateUserArgs::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_user_decodes_with_sparse_fields() {
        let user: User = serde_json::from_value(json!({
            "user_id": "u1",
            "username": "trader",
            "is_active": 1,
            "favorite_instruments": ["BTCUSDT"]
        }))
        .unwrap();

        assert_eq!(user.user_id, "u1");
        assert!(user.is_active());
        assert_eq!(user.email, None);
        assert_eq!(user.favorite_instruments, Some(vec!["BTCUSDT".to_string()]));
    }
}
