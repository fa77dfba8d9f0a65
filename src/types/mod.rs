//! Domain records and typed arguments.
//!
//! Response records mirror the remote schema field for field. Fields the
//! schema marks optional are `Option`, so a response that omits them still
//! decodes.
//!
//! Argument structs serialize only the fields the caller set: every optional
//! field is skipped when `None`, leaving the operation's defaults in place.

mod accounts;
mod common;
mod conversions;
mod deposit;
mod fees;
mod healthcheck;
mod instruments;
mod payments;
mod signin;
mod transactions;
mod users;

pub use accounts::{AccountBalance, GetAccountBalanceArgs};
pub use common::{DateRangeInput, PagerInput, SortDirection, SortInput, ToggleSwitch};
pub use conversions::{
    Conversion, ConversionQuote, ConversionStatus, CreateConversionOrderArgs,
    CreateConversionQuoteArgs, EstimateOrderFee, GetConversionsArgs,
};
pub use deposit::{CryptoAddressTagType, DepositAddressCrypto, DepositAddressCryptoArgs};
pub use fees::{EstimateNetworkFeeArgs, FeeEstimationItem, NetworkFeeEstimate};
pub use healthcheck::HealthcheckResult;
pub use instruments::{
    Currency, CurrencyType, GetInstrumentPriceBarsArgs, GetInstrumentsArgs, Instrument,
    InstrumentHistoryPeriodicity, InstrumentPrice, PriceBar, TradingFee,
};
pub use payments::{
    CreateFiatWithdrawalArgs, GetPaymentsArgs, GetPaymentsRoutesArgs, Payment,
    PaymentApprovalStatus, PaymentRoute, PaymentStatus, PaymentType,
};
pub use signin::{DemoSigninArgs, ServiceSigninArgs, SignInResult};
pub use transactions::{
    AccountTransaction, AccountTransactionClass, AccountTransactionType,
    CreateAccountTransactionArgs, CreateAccountTransactionResult, RecordTransactionItem,
};
pub use users::{GetUserArgs, GetUsersArgs, UpdateUserArgs, User};
