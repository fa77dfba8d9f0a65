//! The operation table.
//!
//! Every remote operation the SDK exposes is one [`OperationDescriptor`]:
//! its root field, whether it is a query or a mutation, the arguments it
//! declares, its default arguments, and its fixed selection. The typed
//! methods on [`ReserveClient`](crate::ReserveClient) are thin wrappers over
//! one generic dispatch routine that consumes this table.
//!
//! # Example
//!
//! ```rust
//! use reserve_sdk::operations::{Document, Operation};
//!
//! let document = Document::build(Operation::Checkin.descriptor());
//! assert_eq!(document.text(), "mutation {\n  checkin\n}");
//! ```

mod arguments;
mod document;

pub use arguments::{merge_arguments, to_variables, ArgumentsError};
pub use document::{Argument, Document, Field, OperationKind, Param};

use std::fmt;

use serde_json::{json, Map, Value};

/// Declarative description of one remote operation.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Root field name, which is also the key unwrapped from `data`.
    pub name: &'static str,
    /// Query or mutation.
    pub kind: OperationKind,
    /// Arguments of the root field, in declaration order.
    pub arguments: &'static [Argument],
    /// Fixed selection set; empty for scalar results.
    pub selection: &'static [Field],
    /// Default arguments applied under the caller's.
    pub defaults: fn() -> Map<String, Value>,
}

impl OperationDescriptor {
    /// Returns a fresh copy of this operation's default arguments.
    #[must_use]
    pub fn default_arguments(&self) -> Map<String, Value> {
        (self.defaults)()
    }
}

/// Every operation the SDK knows how to send.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `healthcheck`
    Healthcheck,
    /// `checkin`
    Checkin,
    /// `trader_demo_signin`
    TraderDemoSignin,
    /// `admin_demo_signin`
    AdminDemoSignin,
    /// `service_signin`
    ServiceSignin,
    /// `users`
    Users,
    /// `user`
    User,
    /// `update_user`
    UpdateUser,
    /// `accounts_balances`
    AccountsBalances,
    /// `create_conversion_quote`
    CreateConversionQuote,
    /// `create_conversion_order`
    CreateConversionOrder,
    /// `conversions`
    Conversions,
    /// `create_account_transaction`
    CreateAccountTransaction,
    /// `instruments`
    Instruments,
    /// `instrument_price_bars`
    InstrumentPriceBars,
    /// `deposit_address_crypto`
    DepositAddressCrypto,
    /// `create_withdrawal_fiat`
    CreateWithdrawalFiat,
    /// `payments`
    Payments,
    /// `payments_routes`
    PaymentsRoutes,
    /// `estimate_network_fee`
    EstimateNetworkFee,
}

impl Operation {
    /// All operations, in table order.
    pub const ALL: [Self; 20] = [
        Self::Healthcheck,
        Self::Checkin,
        Self::TraderDemoSignin,
        Self::AdminDemoSignin,
        Self::ServiceSignin,
        Self::Users,
        Self::User,
        Self::UpdateUser,
        Self::AccountsBalances,
        Self::CreateConversionQuote,
        Self::CreateConversionOrder,
        Self::Conversions,
        Self::CreateAccountTransaction,
        Self::Instruments,
        Self::InstrumentPriceBars,
        Self::DepositAddressCrypto,
        Self::CreateWithdrawalFiat,
        Self::Payments,
        Self::PaymentsRoutes,
        Self::EstimateNetworkFee,
    ];

    /// Returns the descriptor for this operation.
    #[must_use]
    pub fn descriptor(self) -> &'static OperationDescriptor {
        match self {
            Self::Healthcheck => &HEALTHCHECK,
            Self::Checkin => &CHECKIN,
            Self::TraderDemoSignin => &TRADER_DEMO_SIGNIN,
            Self::AdminDemoSignin => &ADMIN_DEMO_SIGNIN,
            Self::ServiceSignin => &SERVICE_SIGNIN,
            Self::Users => &USERS,
            Self::User => &USER,
            Self::UpdateUser => &UPDATE_USER,
            Self::AccountsBalances => &ACCOUNTS_BALANCES,
            Self::CreateConversionQuote => &CREATE_CONVERSION_QUOTE,
            Self::CreateConversionOrder => &CREATE_CONVERSION_ORDER,
            Self::Conversions => &CONVERSIONS,
            Self::CreateAccountTransaction => &CREATE_ACCOUNT_TRANSACTION,
            Self::Instruments => &INSTRUMENTS,
            Self::InstrumentPriceBars => &INSTRUMENT_PRICE_BARS,
            Self::DepositAddressCrypto => &DEPOSIT_ADDRESS_CRYPTO,
            Self::CreateWithdrawalFiat => &CREATE_WITHDRAWAL_FIAT,
            Self::Payments => &PAYMENTS,
            Self::PaymentsRoutes => &PAYMENTS_ROUTES,
            Self::EstimateNetworkFee => &ESTIMATE_NETWORK_FEE,
        }
    }

    /// Returns the root field name of this operation.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn listing_defaults() -> Map<String, Value> {
    object(json!({
        "pager": {"limit": 30, "offset": 0},
        "sort": {"direction": "DESC"},
    }))
}

fn users_defaults() -> Map<String, Value> {
    object(json!({
        "email": "",
        "user_id": "",
        "pager": {"limit": 30, "offset": 0},
        "sort": {"direction": "DESC"},
        "dateRange": {},
    }))
}

fn balances_defaults() -> Map<String, Value> {
    object(json!({"quote_currency_id": ""}))
}

fn conversion_order_defaults() -> Map<String, Value> {
    object(json!({"return_on_complete": true}))
}

// ---------------------------------------------------------------------------
// Shared arguments and selections
// ---------------------------------------------------------------------------

const PAGER: Argument = Argument::new("pager", "PagerInput");
const SORT: Argument = Argument::new("sort", "SortInput");
const DATE_RANGE: Argument = Argument::new("dateRange", "DateRangeInput");

const SIGNIN_RESULT: &[Field] = &[Field::leaf("jwt"), Field::leaf("expires_at")];

const USER_FIELDS: &[Field] = &[
    Field::leaf("serial_id"),
    Field::leaf("user_id"),
    Field::leaf("username"),
    Field::leaf("email"),
    Field::leaf("language"),
    Field::leaf("timezone"),
    Field::leaf("primary_market_currency"),
    Field::leaf("exchange"),
    Field::leaf("is_active"),
    Field::leaf("first_name"),
    Field::leaf("last_name"),
    Field::leaf("address_country"),
    Field::leaf("address_state"),
    Field::leaf("address_city"),
    Field::leaf("address_line_1"),
    Field::leaf("address_line_2"),
    Field::leaf("address_zip"),
    Field::leaf("created_at"),
    Field::leaf("updated_at"),
    Field::leaf("favorite_instruments"),
    Field::leaf("profile_pic_url"),
    Field::leaf("passport_url"),
    Field::leaf("national_identity_url"),
    Field::leaf("driver_license_url"),
    Field::leaf("birth_certificate_url"),
    Field::leaf("bank_statement_url"),
    Field::leaf("utility_bill_url"),
];

const CONVERSION_FIELDS: &[Field] = &[
    Field::leaf("conversion_id"),
    Field::leaf("conversion_quote_id"),
    Field::leaf("reference"),
    Field::leaf("source_currency_id"),
    Field::leaf("source_currency_amount"),
    Field::leaf("target_currency_id"),
    Field::leaf("target_currency_amount"),
    Field::leaf("fee_currency_id"),
    Field::leaf("fee_currency_amount"),
    Field::leaf("price"),
    Field::leaf("status"),
    Field::leaf("user_id"),
    Field::leaf("parent_transaction_id"),
    Field::leaf("message"),
    Field::leaf("error_message"),
    Field::leaf("created_at"),
    Field::leaf("updated_at"),
    Field::leaf("created_at_iso"),
    Field::leaf("updated_at_iso"),
];

const PRICE_BAR_FIELDS: &[Field] = &[
    Field::leaf("instrument_id"),
    Field::leaf("high"),
    Field::leaf("low"),
    Field::leaf("open"),
    Field::leaf("close"),
    Field::leaf("volume_from"),
    Field::leaf("volume_to"),
    Field::leaf("price_24h_change"),
    Field::leaf("ts"),
    Field::leaf("ts_iso"),
];

const CURRENCY_FIELDS: &[Field] = &[
    Field::leaf("currency_id"),
    Field::leaf("type"),
    Field::leaf("precision"),
];

const PERIODICITY: Argument = Argument::new("periodicity", "InstrumentHistoryPeriodicity");
const LIMIT: Argument = Argument::new("limit", "Int");

const PAYMENT_FIELDS: &[Field] = &[
    Field::leaf("payment_id"),
    Field::leaf("user_id"),
    Field::leaf("currency_id"),
    Field::leaf("amount"),
    Field::leaf("type"),
    Field::leaf("psp_service_id"),
    Field::leaf("crypto_transaction_id"),
    Field::leaf("crypto_address"),
    Field::leaf("crypto_address_tag_type"),
    Field::leaf("crypto_address_tag_value"),
    Field::leaf("crypto_network"),
    Field::leaf("fiat_bank_name"),
    Field::leaf("fiat_bank_address"),
    Field::leaf("fiat_bank_bic"),
    Field::leaf("fiat_routing_number"),
    Field::leaf("fiat_reference"),
    Field::leaf("fiat_notes"),
    Field::leaf("fiat_beneficiary_name"),
    Field::leaf("fiat_beneficiary_account_number"),
    Field::leaf("fiat_beneficiary_address_line_1"),
    Field::leaf("fiat_beneficiary_address_line_2"),
    Field::leaf("status"),
    Field::leaf("approval_status"),
    Field::leaf("body_amount"),
    Field::leaf("fee_amount"),
    Field::leaf("record_account_transaction_id"),
    Field::leaf("revert_account_transaction_id"),
    Field::leaf("ip_address"),
    Field::leaf("message"),
    Field::leaf("error_message"),
    Field::leaf("created_at"),
    Field::leaf("updated_at"),
];

const FEE_ESTIMATION_FIELDS: &[Field] = &[
    Field::leaf("fee_per_byte"),
    Field::leaf("gas_price"),
    Field::leaf("network_fee"),
    Field::leaf("base_fee"),
    Field::leaf("priority_fee"),
];

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

static HEALTHCHECK: OperationDescriptor = OperationDescriptor {
    name: "healthcheck",
    kind: OperationKind::Query,
    arguments: &[],
    selection: &[
        Field::leaf("maintenance_mode"),
        Field::leaf("maintenance_message"),
    ],
    defaults: Map::new,
};

static CHECKIN: OperationDescriptor = OperationDescriptor {
    name: "checkin",
    kind: OperationKind::Mutation,
    arguments: &[],
    selection: &[],
    defaults: Map::new,
};

static TRADER_DEMO_SIGNIN: OperationDescriptor = OperationDescriptor {
    name: "trader_demo_signin",
    kind: OperationKind::Mutation,
    arguments: &[Argument::new("username", "String!")],
    selection: SIGNIN_RESULT,
    defaults: Map::new,
};

static ADMIN_DEMO_SIGNIN: OperationDescriptor = OperationDescriptor {
    name: "admin_demo_signin",
    kind: OperationKind::Mutation,
    arguments: &[Argument::new("username", "String!")],
    selection: SIGNIN_RESULT,
    defaults: Map::new,
};

static SERVICE_SIGNIN: OperationDescriptor = OperationDescriptor {
    name: "service_signin",
    kind: OperationKind::Mutation,
    arguments: &[
        Argument::new("service_api_key", "String!"),
        Argument::new("service_api_secret", "String!"),
    ],
    selection: SIGNIN_RESULT,
    defaults: Map::new,
};

static USERS: OperationDescriptor = OperationDescriptor {
    name: "users",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("username", "String"),
        Argument::new("email", "String"),
        PAGER,
        SORT,
        DATE_RANGE,
    ],
    selection: USER_FIELDS,
    defaults: users_defaults,
};

static USER: OperationDescriptor = OperationDescriptor {
    name: "user",
    kind: OperationKind::Query,
    arguments: &[Argument::new("user_id", "String")],
    selection: USER_FIELDS,
    defaults: Map::new,
};

static UPDATE_USER: OperationDescriptor = OperationDescriptor {
    name: "update_user",
    kind: OperationKind::Mutation,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("first_name", "String"),
        Argument::new("last_name", "String"),
        Argument::new("language", "String"),
        Argument::new("timezone", "String"),
        Argument::new("primary_market_currency", "String"),
        Argument::new("address_country", "String"),
        Argument::new("address_state", "String"),
        Argument::new("address_city", "String"),
        Argument::new("address_line_1", "String"),
        Argument::new("address_line_2", "String"),
        Argument::new("address_zip", "String"),
        Argument::new("favorite_instruments", "[String!]"),
    ],
    selection: USER_FIELDS,
    defaults: Map::new,
};

static ACCOUNTS_BALANCES: OperationDescriptor = OperationDescriptor {
    name: "accounts_balances",
    kind: OperationKind::Query,
    arguments: &[Argument::new("user_id", "String")],
    selection: &[
        Field::leaf("currency_id"),
        Field::leaf("total_balance"),
        Field::leaf("exposed_balance"),
        Field::leaf("free_balance"),
        Field::leaf("free_balance_quoted")
            .with_arguments(&[Argument::new("quote_currency_id", "String!")]),
    ],
    defaults: balances_defaults,
};

static CREATE_CONVERSION_QUOTE: OperationDescriptor = OperationDescriptor {
    name: "create_conversion_quote",
    kind: OperationKind::Mutation,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("source_currency_id", "String!"),
        Argument::new("target_currency_id", "String!"),
        Argument::new("source_currency_amount", "Float"),
        Argument::new("target_currency_amount", "Float"),
    ],
    selection: &[
        Field::leaf("conversion_quote_id"),
        Field::leaf("source_currency_id"),
        Field::leaf("source_currency_amount"),
        Field::leaf("target_currency_id"),
        Field::leaf("target_currency_amount"),
        Field::leaf("fee_currency_id"),
        Field::leaf("fee_currency_amount"),
        Field::leaf("instrument_id"),
        Field::leaf("price"),
        Field::leaf("expires_at"),
        Field::leaf("expires_at_iso"),
        Field::object("fees", &[Field::leaf("currency_id"), Field::leaf("amount")]),
    ],
    defaults: Map::new,
};

static CREATE_CONVERSION_ORDER: OperationDescriptor = OperationDescriptor {
    name: "create_conversion_order",
    kind: OperationKind::Mutation,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("reference", "String"),
        Argument::new("return_on_complete", "Boolean!"),
        Argument::new("conversion_quote_id", "String!"),
    ],
    selection: CONVERSION_FIELDS,
    defaults: conversion_order_defaults,
};

static CONVERSIONS: OperationDescriptor = OperationDescriptor {
    name: "conversions",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("search", "String"),
        Argument::new("conversion_quote_id", "String"),
        Argument::new("source_currency_id", "String"),
        Argument::new("target_currency_id", "String"),
        PAGER,
        SORT,
        DATE_RANGE,
    ],
    selection: CONVERSION_FIELDS,
    defaults: listing_defaults,
};

static CREATE_ACCOUNT_TRANSACTION: OperationDescriptor = OperationDescriptor {
    name: "create_account_transaction",
    kind: OperationKind::Mutation,
    arguments: &[Argument::new("items", "[RecordTransactionItem!]!")],
    selection: &[
        Field::leaf("parent_transaction_id"),
        Field::object(
            "account_transactions",
            &[
                Field::leaf("serial_id"),
                Field::leaf("account_transaction_id"),
                Field::leaf("parent_transaction_id"),
                Field::leaf("client_transaction_id"),
                Field::leaf("user_id"),
                Field::leaf("account_id"),
                Field::leaf("payment_id"),
                Field::leaf("currency_id"),
                Field::leaf("transaction_class"),
                Field::leaf("type"),
                Field::leaf("order_id"),
                Field::leaf("trade_id"),
                Field::leaf("conversion_id"),
                Field::leaf("amount"),
                Field::leaf("post_balance"),
                Field::leaf("comment"),
                Field::leaf("created_at"),
                Field::leaf("created_at_iso"),
            ],
        ),
    ],
    defaults: Map::new,
};

static INSTRUMENTS: OperationDescriptor = OperationDescriptor {
    name: "instruments",
    kind: OperationKind::Query,
    arguments: &[],
    selection: &[
        Field::leaf("name"),
        Field::leaf("instrument_id"),
        Field::leaf("base_currency_id"),
        Field::leaf("quote_currency_id"),
        Field::leaf("price_decimals"),
        Field::leaf("min_quantity"),
        Field::leaf("max_quantity"),
        Field::leaf("min_quote_quantity"),
        Field::leaf("max_quote_quantity"),
        Field::object("base_currency", CURRENCY_FIELDS),
        Field::object("quote_currency", CURRENCY_FIELDS),
        Field::object(
            "trading_fees",
            &[
                Field::leaf("instrument_id"),
                Field::leaf("fee_group_id"),
                Field::leaf("maker_progressive"),
                Field::leaf("taker_progressive"),
                Field::leaf("maker_flat"),
                Field::leaf("taker_flat"),
            ],
        ),
        Field::object(
            "price",
            &[
                Field::leaf("instrument_id"),
                Field::leaf("ask"),
                Field::leaf("bid"),
                Field::leaf("price_24h_change"),
                Field::leaf("ts"),
                Field::leaf("ts_iso"),
            ],
        ),
        Field::object("recent_price_bar", PRICE_BAR_FIELDS).with_arguments(&[PERIODICITY]),
        Field::object("price_bars", PRICE_BAR_FIELDS).with_arguments(&[
            PERIODICITY,
            LIMIT,
            Argument::bound("dateRange", Param::new("date_range", "DateRangeInput")),
        ]),
    ],
    defaults: Map::new,
};

static INSTRUMENT_PRICE_BARS: OperationDescriptor = OperationDescriptor {
    name: "instrument_price_bars",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("instrument_id", "String!"),
        PERIODICITY,
        LIMIT,
        Argument::bound("dateRange", Param::new("date_range", "DateRangeInput")),
    ],
    selection: PRICE_BAR_FIELDS,
    defaults: Map::new,
};

static DEPOSIT_ADDRESS_CRYPTO: OperationDescriptor = OperationDescriptor {
    name: "deposit_address_crypto",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("currency_id", "String!"),
        Argument::new("network", "String!"),
    ],
    selection: &[
        Field::leaf("deposit_address_crypto_id"),
        Field::leaf("user_id"),
        Field::leaf("currency_id"),
        Field::leaf("address"),
        Field::leaf("address_tag_type"),
        Field::leaf("address_tag_value"),
        Field::leaf("network"),
        Field::leaf("psp_service_id"),
        Field::leaf("created_at"),
        Field::leaf("updated_at"),
    ],
    defaults: Map::new,
};

static CREATE_WITHDRAWAL_FIAT: OperationDescriptor = OperationDescriptor {
    name: "create_withdrawal_fiat",
    kind: OperationKind::Mutation,
    arguments: &[
        Argument::new("user_id", "String"),
        Argument::new("amount", "Float!"),
        Argument::new("currency_id", "String!"),
        Argument::new("fiat_bank_name", "String!"),
        Argument::new("fiat_bank_bic", "String!"),
        Argument::new("fiat_beneficiary_name", "String!"),
        Argument::new("fiat_beneficiary_account_number", "String!"),
        Argument::new("fiat_beneficiary_address_line_1", "String"),
        Argument::new("fiat_beneficiary_address_line_2", "String"),
        Argument::new("fiat_bank_address", "String"),
        Argument::new("fiat_routing_number", "String"),
        Argument::new("fiat_reference", "String"),
        Argument::new("fiat_notes", "String"),
    ],
    selection: PAYMENT_FIELDS,
    defaults: Map::new,
};

static PAYMENTS: OperationDescriptor = OperationDescriptor {
    name: "payments",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("payment_id", "String"),
        Argument::new("currency_id", "String"),
        Argument::new("type", "PaymentType"),
        Argument::new("user_id", "String"),
        Argument::new("search", "String"),
        Argument::new("status", "[PaymentStatus!]"),
        Argument::new("payment_id_in", "[String!]"),
        Argument::new("payment_id_not_in", "[String!]"),
        PAGER,
        SORT,
        DATE_RANGE,
    ],
    selection: PAYMENT_FIELDS,
    defaults: listing_defaults,
};

static PAYMENTS_ROUTES: OperationDescriptor = OperationDescriptor {
    name: "payments_routes",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("payment_route_id", "String"),
        Argument::new("currency_id", "String"),
        Argument::new("psp_service_id", "String"),
        Argument::new("crypto_network", "String"),
        PAGER,
        SORT,
    ],
    selection: &[
        Field::leaf("payment_route_id"),
        Field::leaf("currency_id"),
        Field::leaf("psp_service_id"),
        Field::leaf("crypto_network"),
        Field::leaf("crypto_address_tag_type"),
        Field::leaf("is_active"),
    ],
    defaults: listing_defaults,
};

static ESTIMATE_NETWORK_FEE: OperationDescriptor = OperationDescriptor {
    name: "estimate_network_fee",
    kind: OperationKind::Query,
    arguments: &[
        Argument::new("currency_id", "String!"),
        Argument::new("network", "String"),
        Argument::new("psp_service_id", "String"),
    ],
    selection: &[
        Field::object("low", FEE_ESTIMATION_FIELDS),
        Field::object("medium", FEE_ESTIMATION_FIELDS),
        Field::object("high", FEE_ESTIMATION_FIELDS),
    ],
    defaults: Map::new,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_operation_names_are_unique() {
        let names: HashSet<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_every_default_is_a_declared_argument() {
        for operation in Operation::ALL {
            let document = Document::build(operation.descriptor());
            for key in operation.descriptor().default_arguments().keys() {
                assert!(
                    document.declares(key),
                    "{operation}: default '{key}' is not declared"
                );
            }
        }
    }

    #[test]
    fn test_every_document_uses_the_right_root() {
        for operation in Operation::ALL {
            let descriptor = operation.descriptor();
            let document = Document::build(descriptor);
            assert!(document.text().starts_with(descriptor.kind.keyword()));
            assert!(document.text().contains(&format!("  {}", descriptor.name)));
        }
    }

    #[test]
    fn test_every_declared_param_is_referenced() {
        for operation in Operation::ALL {
            let document = Document::build(operation.descriptor());
            for param in document.params() {
                let declaration = format!("${}:", param.name);
                let reference = format!(": ${}", param.name);
                assert_eq!(document.text().matches(&declaration).count(), 1);
                assert!(
                    document.text().contains(&reference),
                    "{operation}: ${} is declared but unused",
                    param.name
                );
            }
        }
    }

    #[test]
    fn test_mutations_are_the_write_operations() {
        let mutations: Vec<Operation> = Operation::ALL
            .into_iter()
            .filter(|op| op.descriptor().kind == OperationKind::Mutation)
            .collect();
        assert_eq!(
            mutations,
            vec![
                Operation::Checkin,
                Operation::TraderDemoSignin,
                Operation::AdminDemoSignin,
                Operation::ServiceSignin,
                Operation::UpdateUser,
                Operation::CreateConversionQuote,
                Operation::CreateConversionOrder,
                Operation::CreateAccountTransaction,
                Operation::CreateWithdrawalFiat,
            ]
        );
    }

    #[test]
    fn test_users_defaults() {
        let defaults = Operation::Users.descriptor().default_arguments();
        assert_eq!(
            Value::Object(defaults),
            json!({
                "email": "",
                "user_id": "",
                "pager": {"limit": 30, "offset": 0},
                "sort": {"direction": "DESC"},
                "dateRange": {},
            })
        );
    }

    #[test]
    fn test_instruments_shares_periodicity_variable() {
        let document = Document::build(Operation::Instruments.descriptor());
        let names: Vec<&str> = document.params().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["periodicity", "limit", "date_range"]);
        assert!(document
            .text()
            .contains("price_bars(periodicity: $periodicity, limit: $limit, dateRange: $date_range) {"));
    }

    #[test]
    fn test_instruments_custom_selection_without_bars_declares_nothing() {
        let document =
            Document::build_with_fields(Operation::Instruments.descriptor(), &["name", "price"]);
        assert!(document.params().is_empty());
        assert!(document.text().starts_with("query {\n  instruments {"));
    }

    #[test]
    fn test_display_uses_root_field() {
        assert_eq!(Operation::AccountsBalances.to_string(), "accounts_balances");
    }
}
