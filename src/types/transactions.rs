//! Ledger transactions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountTransactionType {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountTransactionClass {
    Trade,
    Fee,
    Payment,
    Reward,
    Conversion,
}

/// One leg to record in a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordTransactionItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_transaction_id: Option<String>,
    pub user_id: String,
    pub currency_id: String,
    #[serde(rename = "type")]
    pub kind: AccountTransactionType,
    pub transaction_class: AccountTransactionClass,
    pub amount: f64,
    /// Caller-chosen idempotency key, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_id: Option<String>,
}

impl RecordTransactionItem {
    /// Creates an item with the required fields set.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        currency_id: impl Into<String>,
        kind: AccountTransactionType,
        transaction_class: AccountTransactionClass,
        amount: f64,
    ) -> Self {
        Self {
            account_transaction_id: None,
            user_id: user_id.into(),
            currency_id: currency_id.into(),
            kind,
            transaction_class,
            amount,
            client_transaction_id: None,
            comment: None,
            trade_id: None,
            order_id: None,
            payment_id: None,
            conversion_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreateAccountTransactionArgs {
    pub items: Vec<RecordTransactionItem>,
}

/// A recorded ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountTransaction {
    pub serial_id: Option<u64>,
    pub account_transaction_id: String,
    pub parent_transaction_id: String,
    pub client_transaction_id: Option<String>,
    pub user_id: String,
    pub account_id: Option<String>,
    pub payment_id: Option<String>,
    pub currency_id: String,
    pub transaction_class: AccountTransactionClass,
    #[serde(rename = "type")]
    pub kind: AccountTransactionType,
    pub order_id: Option<String>,
    pub trade_id: Option<String>,
    pub conversion_id: Option<String>,
    pub amount: Option<f64>,
    pub post_balance: Option<f64>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
    pub created_at_iso: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateAccountTransactionResult {
    pub parent_transaction_id: String,
    #[serde(default)]
    pub account_transactions: Vec<AccountTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_type_keyword() {
        let mut item = RecordTransactionItem::new(
            "u1",
            "USDT",
            AccountTransactionType::Credit,
            AccountTransactionClass::Reward,
            10.0,
        );
        item.client_transaction_id = Some("ctx-1".to_string());

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "user_id": "u1",
                "currency_id": "USDT",
                "type": "credit",
                "transaction_class": "reward",
                "amount": 10.0,
                "client_transaction_id": "ctx-1"
            })
        );
    }

    #[test]
    fn test_result_decodes_nested_transactions() {
        let result: CreateAccountTransactionResult = serde_json::from_value(json!({
            "parent_transaction_id": "p1",
            "account_transactions": [{
                "account_transaction_id": "t1",
                "parent_transaction_id": "p1",
                "user_id": "u1",
                "currency_id": "USDT",
                "transaction_class": "payment",
                "type": "debit",
                "post_balance": 90.0
            }]
        }))
        .unwrap();

        assert_eq!(result.account_transactions.len(), 1);
        assert_eq!(result.account_transactions[0].kind, AccountTransactionType::Debit);
    }
}
