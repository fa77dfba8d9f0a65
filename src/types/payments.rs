//! Deposits, withdrawals and the routes they travel.

use serde::{Deserialize, Serialize};

use super::common::{lenient_id, DateRangeInput, PagerInput, SortInput, ToggleSwitch};
use super::deposit::CryptoAddressTagType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Withdrawal,
    Deposit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    New,
    Pending,
    Rejected,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// A deposit or withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub payment_id: String,
    pub user_id: String,
    pub currency_id: String,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    #[serde(default, deserialize_with = "lenient_id")]
    pub psp_service_id: Option<String>,
    pub crypto_transaction_id: Option<String>,
    pub crypto_address: Option<String>,
    pub crypto_address_tag_type: Option<CryptoAddressTagType>,
    pub crypto_address_tag_value: Option<String>,
    pub crypto_network: Option<String>,
    pub fiat_bank_name: Option<String>,
    pub fiat_bank_address: Option<String>,
    pub fiat_bank_bic: Option<String>,
    pub fiat_routing_number: Option<String>,
    pub fiat_reference: Option<String>,
    pub fiat_notes: Option<String>,
    pub fiat_beneficiary_name: Option<String>,
    pub fiat_beneficiary_account_number: Option<String>,
    pub fiat_beneficiary_address_line_1: Option<String>,
    pub fiat_beneficiary_address_line_2: Option<String>,
    pub status: PaymentStatus,
    pub approval_status: Option<PaymentApprovalStatus>,
    pub body_amount: Option<f64>,
    pub fee_amount: Option<f64>,
    pub record_account_transaction_id: Option<String>,
    pub revert_account_transaction_id: Option<String>,
    pub ip_address: Option<String>,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRoute {
    pub payment_route_id: String,
    pub currency_id: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub psp_service_id: Option<String>,
    pub crypto_network: Option<String>,
    pub crypto_address_tag_type: Option<String>,
    pub is_active: Option<ToggleSwitch>,
}

/// Arguments for [`ReserveClient::create_withdrawal_fiat`](crate::ReserveClient::create_withdrawal_fiat).
///
/// `fiat_reference` is passed through unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct CreateFiatWithdrawalArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub amount: f64,
    pub currency_id: String,
    pub fiat_bank_name: String,
    pub fiat_bank_bic: String,
    pub fiat_beneficiary_name: String,
    pub fiat_beneficiary_account_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_beneficiary_address_line_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_beneficiary_address_line_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_bank_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiat_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetPaymentsArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<PaymentStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id_not_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PagerInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortInput>,
    #[serde(rename = "dateRange", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangeInput>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct GetPaymentsRoutesArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_route_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psp_service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pager: Option<PagerInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortInput>,
}
