//! Conversion quotes and orders.

use serde::{Deserialize, Serialize};

use super::common::{DateRangeInput, PagerInput, SortInput};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    New,
    Completed,
    Rejected,
}

/// One fee line of a conversion quote.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EstimateOrderFee {
    pub currency_id: String,
    pub amount: f64,
}

/// A priced, time-limited offer to convert between two currencies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConversionQuote {
    pub conversion_quote_id: String,
    pub source_currency_id: String,
    pub source_currency_amount: Option<f64>,
    pub target_currency_id: String,
    pub target_currency_amount: Option<f64>,
    pub fee_currency_id: Option<String>,
    pub fee_currency_amount: Option<f64>,
    pub instrument_id: Option<String>,
    pub price: Option<f64>,
    pub expires_at: Option<String>,
    pub expires_at_iso: Option<String>,
    #[serde(default)]
    pub fees: Vec<EstimateOrderFee>,
}

/// An executed (or rejected) conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversion {
    pub conversion_id: String,
    pub conversion_quote_id: String,
    pub reference: Option<String>,
    pub source_currency_id: String,
    pub source_currency_amount: Option<f64>,
    pub target_currency_id: String,
    pub target_currency_amount: Option<f64>,
    pub fee_currency_id: Option<String>,
    pub fee_currency_amount: Option<f64>,
    pub price: Option<f64>,
    pub status: ConversionStatus,
    pub user_id: Option<String>,
    pub parent_transaction_id: Option<String>,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_at_iso: Option<String>,
    pub updated_at_iso: Option<String>,
}

/// Arguments for [`ReserveClient::create_conversion_quote`](crate::ReserveClient::create_conversion_quote).
///
/// Set exactly one of the two amounts; the server prices the other side.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreateConversionQuoteArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub source_currency_id: String,
    pub target_currency_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_currency_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_currency_amount: Option<f64>,
}

/// Arguments for [`ReserveClient::create_conversion_order`](crate::ReserveClient::create_conversion_order).
///
/// `return_on_complete` defaults to `true`. `reference` is passed through
/// untouched and can be used by the caller to deduplicate retries.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CreateConversionOrderArgs {
    pub conversion_quote_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl CreateConversionOrderArgs {
    /// Orders the given quote with every other argument left to its default.
    #[must_use]
    pub fn for_quote(conversion_quote_id: impl Into<String>) -> Self {
        Self {
            conversion_quote_id: conversion_quote_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetConversionsArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_quote_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_currency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_currency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PagerInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortInput>,
    #[serde(rename = "dateRange", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeInput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_args_omit_unset_fields() {
        let args = CreateConversionOrderArgs::for_quote("q1");
        assert_eq!(
            serde_json::to_value(args).unwrap(),
            json!({"conversion_quote_id": "q1"})
        );
    }

    #[test]
    fn test_conversion_decodes_status() {
        let conversion: Conversion = serde_json::from_value(json!({
            "conversion_id": "c1",
            "conversion_quote_id": "q1",
            "source_currency_id": "BTC",
            "source_currency_amount": 0.5,
            "target_currency_id": "USDT",
            "target_currency_amount": 15000.0,
            "status": "completed",
            "reference": "my-ref-1"
        }))
        .unwrap();

        assert_eq!(conversion.status, ConversionStatus::Completed);
        assert_eq!(conversion.reference.as_deref(), Some("my-ref-1"));
    }

    #[test]
    fn test_quote_without_fees_decodes_empty() {
        let quote: ConversionQuote = serde_json::from_value(json!({
            "conversion_quote_id": "q1",
            "source_currency_id": "BTC",
            "target_currency_id": "USDT"
        }))
        .unwrap();
        assert!(quote.fees.is_empty());
    }
}
