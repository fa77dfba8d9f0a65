//! Network fee estimates.

use serde::{Deserialize, Serialize};

/// One fee tier. Which fields are set depends on the chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct FeeEstimationItem {
    pub fee_per_byte: Option<f64>,
    pub gas_price: Option<f64>,
    pub network_fee: Option<f64>,
    pub base_fee: Option<f64>,
    pub priority_fee: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct NetworkFeeEstimate {
    pub low: FeeEstimationItem,
    pub medium: FeeEstimationItem,
    pub high: FeeEstimationItem,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct EstimateNetworkFeeArgs {
    pub currency_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psp_service_id: Option<String>,
}
