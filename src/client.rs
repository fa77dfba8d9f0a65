//! The typed Reserve client.
//!
//! [`ReserveClient`] owns the header state of one caller identity and exposes
//! one method per remote operation. Every method funnels into the same
//! dispatch routine:
//!
//! 1. encode the typed arguments and merge them over the operation defaults
//! 2. render the document (fixed or caller-selected fields)
//! 3. drop variables the document does not declare
//! 4. send one request with the current headers
//! 5. unwrap the root field, or normalize the failure into a [`GraphqlError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use reserve_sdk::{Endpoint, ReserveClient, ReserveConfig};
//! use reserve_sdk::types::{DemoSigninArgs, GetAccountBalanceArgs};
//!
//! let config = ReserveConfig::new(Endpoint::new("https://api.example.com/graphql")?);
//! let mut client = ReserveClient::new(&config);
//!
//! let signin = client
//!     .trader_demo_signin(&DemoSigninArgs::new("trader_1"))
//!     .await?
//!     .expect("sign-in returned no token");
//! client.set_auth_token(&signin.jwt);
//!
//! let balances = client
//!     .get_account_balances(&GetAccountBalanceArgs::default())
//!     .await?
//!     .unwrap_or_default();
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::graphql::{
    normalize, GraphqlClient, GraphqlError, GraphqlErrorKind, GraphqlRequest,
};
use crate::clients::Transport;
use crate::config::ReserveConfig;
use crate::operations::{merge_arguments, to_variables, Document, Operation};
use crate::types::{
    AccountBalance, Conversion, ConversionQuote, CreateAccountTransactionArgs,
    CreateAccountTransactionResult, CreateConversionOrderArgs, CreateConversionQuoteArgs,
    CreateFiatWithdrawalArgs, DemoSigninArgs, DepositAddressCrypto, DepositAddressCryptoArgs,
    EstimateNetworkFeeArgs, GetAccountBalanceArgs, GetConversionsArgs,
    GetInstrumentPriceBarsArgs, GetInstrumentsArgs, GetPaymentsArgs, GetPaymentsRoutesArgs,
    GetUserArgs, GetUsersArgs, HealthcheckResult, Instrument, NetworkFeeEstimate, Payment,
    PaymentRoute, PriceBar, ServiceSigninArgs, SignInResult, UpdateUserArgs, User,
};

/// Header carrying the bearer token.
const AUTHORIZATION: &str = "authorization";

/// Typed client for the Reserve GraphQL API.
///
/// One instance represents one caller identity. Headers set on it apply to
/// every subsequent call and are never cleared implicitly.
///
/// Operation methods return `Ok(None)` when the server answers successfully
/// but the root field is absent or `null`.
///
/// # Thread Safety
///
/// `ReserveClient` is `Send + Sync` when its transport is. Header setters
/// take `&mut self`, so sharing a client across tasks requires external
/// synchronization for mutation.
pub struct ReserveClient<T = GraphqlClient> {
    transport: T,
    headers: HashMap<String, String>,
}

impl<T: fmt::Debug> fmt::Debug for ReserveClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let shown = if name == AUTHORIZATION { "*****" } else { value.as_str() };
                (name.as_str(), shown)
            })
            .collect();
        f.debug_struct("ReserveClient")
            .field("transport", &self.transport)
            .field("headers", &headers)
            .finish()
    }
}

// Verify ReserveClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReserveClient>();
};

impl ReserveClient<GraphqlClient> {
    /// Creates a client that talks to the configured endpoint over HTTP.
    #[must_use]
    pub fn new(config: &ReserveConfig) -> Self {
        Self::with_transport(GraphqlClient::new(config))
    }
}

impl<T: Transport> ReserveClient<T> {
    /// Creates a client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            headers: HashMap::new(),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Sets the bearer token sent as `authorization: Bearer <token>`.
    ///
    /// Overwrites any previous token. The token is not validated.
    pub fn set_auth_token(&mut self, token: impl AsRef<str>) {
        self.headers.insert(
            AUTHORIZATION.to_string(),
            format!("Bearer {}", token.as_ref()),
        );
        tracing::debug!("Auth token updated");
    }

    /// Sets an arbitrary header for all subsequent calls.
    ///
    /// Header names are case-insensitive; the last write wins.
    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        let name = name.as_ref().to_ascii_lowercase();
        tracing::debug!(header = %name, "Header updated");
        self.headers.insert(name, value.into());
    }

    /// Alias of [`set_header`](Self::set_header).
    pub fn set_custom_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.set_header(name, value);
    }

    /// Returns a copy of the current headers.
    #[must_use]
    pub fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    /// Runs `operation` with its fixed selection and decodes the root field.
    ///
    /// `args` must serialize to a JSON object (or to `null` / unit for no
    /// arguments). Keys it sets override the operation defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] for every failure, including arguments that
    /// cannot be encoded.
    pub async fn execute<A, R>(
        &self,
        operation: Operation,
        args: &A,
    ) -> Result<Option<R>, GraphqlError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = prepare::<A, &str>(operation, args, &[])?;
        self.send(operation, request).await
    }

    /// Runs `operation` selecting exactly `fields`, in the given order.
    ///
    /// The root field comes back as raw JSON since its shape depends on the
    /// selection. An empty field list uses the fixed selection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] for every failure.
    pub async fn execute_with_fields<A, S>(
        &self,
        operation: Operation,
        args: &A,
        fields: &[S],
    ) -> Result<Option<Value>, GraphqlError>
    where
        A: Serialize + ?Sized,
        S: AsRef<str>,
    {
        let request = prepare(operation, args, fields)?;
        self.send(operation, request).await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        operation: Operation,
        request: GraphqlRequest,
    ) -> Result<Option<R>, GraphqlError> {
        tracing::debug!(
            operation = operation.name(),
            kind = operation.descriptor().kind.keyword(),
            "Dispatching GraphQL operation"
        );
        let outcome = self.transport.execute(&request, &self.headers).await;
        normalize(outcome, &request)?.field(operation.name(), &request)
    }

    // -----------------------------------------------------------------------
    // Service
    // -----------------------------------------------------------------------

    /// Reports whether the exchange is in maintenance mode.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn healthcheck(&self) -> Result<Option<HealthcheckResult>, GraphqlError> {
        self.execute(Operation::Healthcheck, &()).await
    }

    /// Records activity for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn checkin(&self) -> Result<Option<bool>, GraphqlError> {
        self.execute(Operation::Checkin, &()).await
    }

    // -----------------------------------------------------------------------
    // Sign-in
    // -----------------------------------------------------------------------

    /// Signs in a demo trader, creating the user if needed.
    ///
    /// The returned token is not applied automatically; pass it to
    /// [`set_auth_token`](Self::set_auth_token).
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn trader_demo_signin(
        &self,
        args: &DemoSigninArgs,
    ) -> Result<Option<SignInResult>, GraphqlError> {
        self.execute(Operation::TraderDemoSignin, args).await
    }

    /// Signs in a demo admin.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn admin_demo_signin(
        &self,
        args: &DemoSigninArgs,
    ) -> Result<Option<SignInResult>, GraphqlError> {
        self.execute(Operation::AdminDemoSignin, args).await
    }

    /// Signs in with service account credentials.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn service_signin(
        &self,
        args: &ServiceSigninArgs,
    ) -> Result<Option<SignInResult>, GraphqlError> {
        self.execute(Operation::ServiceSignin, args).await
    }

    // -----------------------------------------------------------------------
    // Users
    // -----------------------------------------------------------------------

    /// Lists users. Admin only.
    ///
    /// Nested inputs are not merged with their defaults: a `pager` of
    /// `{limit: 3}` is sent as-is, without the default offset.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_users(&self, args: &GetUsersArgs) -> Result<Option<Vec<User>>, GraphqlError> {
        self.execute(Operation::Users, args).await
    }

    /// Fetches one user, or the authenticated user when `user_id` is unset.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_user(&self, args: &GetUserArgs) -> Result<Option<User>, GraphqlError> {
        self.execute(Operation::User, args).await
    }

    /// Updates profile fields and returns the updated user.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn update_user(&self, args: &UpdateUserArgs) -> Result<Option<User>, GraphqlError> {
        self.execute(Operation::UpdateUser, args).await
    }

    // -----------------------------------------------------------------------
    // Accounts
    // -----------------------------------------------------------------------

    /// Lists account balances.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_account_balances(
        &self,
        args: &GetAccountBalanceArgs,
    ) -> Result<Option<Vec<AccountBalance>>, GraphqlError> {
        self.execute(Operation::AccountsBalances, args).await
    }

    /// Lists account balances with only the named fields.
    ///
    /// Each balance comes back as a JSON object whose keys follow `fields`.
    /// `quote_currency_id` is only sent when `free_balance_quoted` is selected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_account_balances_with_fields<S: AsRef<str>>(
        &self,
        args: &GetAccountBalanceArgs,
        fields: &[S],
    ) -> Result<Option<Vec<Map<String, Value>>>, GraphqlError> {
        let request = prepare(Operation::AccountsBalances, args, fields)?;
        self.send(Operation::AccountsBalances, request).await
    }

    // -----------------------------------------------------------------------
    // Conversions
    // -----------------------------------------------------------------------

    /// Requests a conversion quote.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn create_conversion_quote(
        &self,
        args: &CreateConversionQuoteArgs,
    ) -> Result<Option<ConversionQuote>, GraphqlError> {
        self.execute(Operation::CreateConversionQuote, args).await
    }

    /// Executes a previously obtained quote.
    ///
    /// Sent exactly once. Use `reference` to recognize a duplicate if the
    /// caller decides to retry after a transport failure.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn create_conversion_order(
        &self,
        args: &CreateConversionOrderArgs,
    ) -> Result<Option<Conversion>, GraphqlError> {
        self.execute(Operation::CreateConversionOrder, args).await
    }

    /// Lists conversions, newest first by default.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_conversions(
        &self,
        args: &GetConversionsArgs,
    ) -> Result<Option<Vec<Conversion>>, GraphqlError> {
        self.execute(Operation::Conversions, args).await
    }

    // -----------------------------------------------------------------------
    // Transactions
    // -----------------------------------------------------------------------

    /// Records a set of ledger items as one parent transaction. Admin only.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn create_account_transaction(
        &self,
        args: &CreateAccountTransactionArgs,
    ) -> Result<Option<CreateAccountTransactionResult>, GraphqlError> {
        self.execute(Operation::CreateAccountTransaction, args).await
    }

    // -----------------------------------------------------------------------
    // Instruments
    // -----------------------------------------------------------------------

    /// Lists instruments with prices, fees and recent bars.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_instruments(
        &self,
        args: &GetInstrumentsArgs,
    ) -> Result<Option<Vec<Instrument>>, GraphqlError> {
        self.execute(Operation::Instruments, args).await
    }

    /// Fetches price bars for one instrument.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_instrument_price_bars(
        &self,
        args: &GetInstrumentPriceBarsArgs,
    ) -> Result<Option<Vec<PriceBar>>, GraphqlError> {
        self.execute(Operation::InstrumentPriceBars, args).await
    }

    // -----------------------------------------------------------------------
    // Payments
    // -----------------------------------------------------------------------

    /// Returns (creating if needed) a crypto deposit address.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn deposit_address_crypto(
        &self,
        args: &DepositAddressCryptoArgs,
    ) -> Result<Option<DepositAddressCrypto>, GraphqlError> {
        self.execute(Operation::DepositAddressCrypto, args).await
    }

    /// Requests a fiat withdrawal to a bank account.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn create_withdrawal_fiat(
        &self,
        args: &CreateFiatWithdrawalArgs,
    ) -> Result<Option<Payment>, GraphqlError> {
        self.execute(Operation::CreateWithdrawalFiat, args).await
    }

    /// Lists deposits and withdrawals.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_payments(
        &self,
        args: &GetPaymentsArgs,
    ) -> Result<Option<Vec<Payment>>, GraphqlError> {
        self.execute(Operation::Payments, args).await
    }

    /// Lists the routes payments can take.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn get_payments_routes(
        &self,
        args: &GetPaymentsRoutesArgs,
    ) -> Result<Option<Vec<PaymentRoute>>, GraphqlError> {
        self.execute(Operation::PaymentsRoutes, args).await
    }

    /// Estimates the network fee of a crypto withdrawal at three tiers.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError`] if the call fails.
    pub async fn estimate_network_fee(
        &self,
        args: &EstimateNetworkFeeArgs,
    ) -> Result<Option<NetworkFeeEstimate>, GraphqlError> {
        self.execute(Operation::EstimateNetworkFee, args).await
    }
}

/// Builds the request for `operation`: merged, filtered variables and the
/// rendered document.
fn prepare<A, S>(
    operation: Operation,
    args: &A,
    fields: &[S],
) -> Result<GraphqlRequest, GraphqlError>
where
    A: Serialize + ?Sized,
    S: AsRef<str>,
{
    let descriptor = operation.descriptor();
    let document = Document::build_with_fields(descriptor, fields);

    let caller = to_variables(args).map_err(|e| {
        // Nothing was sent; report the document that would have been.
        GraphqlError::new(
            GraphqlErrorKind::Transport,
            e.to_string(),
            None,
            &GraphqlRequest::new(document.text()),
        )
    })?;
    let variables = document.bind(merge_arguments(descriptor.default_arguments(), caller));

    Ok(GraphqlRequest {
        query: document.into_text(),
        variables,
    })
}
