//! Account balances.

use serde::{Deserialize, Serialize};

/// Balance of one currency account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccountBalance {
    pub currency_id: String,
    pub total_balance: Option<f64>,
    pub exposed_balance: Option<f64>,
    pub free_balance: Option<f64>,
    /// Free balance converted into the requested quote currency.
    pub free_balance_quoted: Option<f64>,
}

/// Arguments for [`ReserveClient::get_account_balances`](crate::ReserveClient::get_account_balances).
///
/// `quote_currency_id` defaults to `""` and is only sent when the
/// `free_balance_quoted` field is part of the selection.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetAccountBalanceArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_currency_id: Option<String>,
}
