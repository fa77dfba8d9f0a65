//! Crypto deposit addresses.

use serde::{Deserialize, Serialize};

use super::common::lenient_id;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CryptoAddressTagType {
    DestinationTag,
    MemoId,
    Note,
    Tag,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositAddressCrypto {
    pub deposit_address_crypto_id: String,
    pub user_id: String,
    pub currency_id: String,
    pub address: String,
    pub address_tag_type: Option<CryptoAddressTagType>,
    pub address_tag_value: Option<String>,
    pub network: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub psp_service_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct DepositAddressCryptoArgs {
    pub currency_id: String,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
