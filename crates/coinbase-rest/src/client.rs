//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::history;
use crate::types::{Account, Candle, OrderBook, OrderInfo, OrderRequest, Product, QuoteEntry};
use chrono::NaiveDate;
use coinbase_auth::Credentials;
use coinbase_types::{FixedIntervalGate, Interval, ProductId, Throttle, TimeInForce};
use parking_lot::Mutex;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Venue environment, selected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live trading
    #[default]
    Production,
    /// Public sandbox
    Sandbox,
}

impl Environment {
    /// Base URL for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.pro.coinbase.com",
            Self::Sandbox => "https://api-public.sandbox.pro.coinbase.com",
        }
    }
}

/// Coinbase Pro REST API client
///
/// Provides access to both public and private endpoints. All I/O is
/// synchronous and blocking; historical backfills are serialized behind
/// an injectable throttle.
///
/// # Example
///
/// ```no_run
/// use coinbase_rest::{CoinbaseRestClient, Credentials};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = CoinbaseRestClient::new();
///     let book = client.get_order_book(&"BTC-USD".into(), 2)?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = CoinbaseRestClient::with_credentials(creds);
///     let accounts = auth_client.get_accounts()?;
///
///     Ok(())
/// }
/// ```
pub struct CoinbaseRestClient {
    http_client: Client,
    environment: Environment,
    credentials: Option<Credentials>,
    throttle: Mutex<Box<dyn Throttle>>,
}

impl CoinbaseRestClient {
    /// Create a new production client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new sandbox client without authentication
    pub fn sandbox() -> Self {
        Self::with_config(ClientConfig::default().with_environment(Environment::Sandbox))
    }

    /// Create a new production client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a client with credentials sourced from the environment
    ///
    /// Production reads `COINBASE_API_KEY` / `COINBASE_API_SECRET` /
    /// `COINBASE_PASSPHRASE`; the sandbox reads the `_SANDBOX`-suffixed
    /// variants.
    pub fn from_env(environment: Environment) -> RestResult<Self> {
        let credentials = match environment {
            Environment::Production => Credentials::from_env()?,
            Environment::Sandbox => Credentials::from_env_sandbox()?,
        };
        Ok(Self::with_config(
            ClientConfig::default()
                .with_environment(environment)
                .with_credentials(credentials),
        ))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("coinbase-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!(
            "Created Coinbase Pro REST client for {:?}",
            config.environment
        );

        Self {
            http_client,
            environment: config.environment,
            credentials: config.credentials,
            throttle: Mutex::new(Box::new(FixedIntervalGate::new(config.request_interval))),
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The environment this client talks to
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Replace the backfill throttle
    ///
    /// Tests inject [`coinbase_types::NoThrottle`] to run without real
    /// delays.
    pub fn set_throttle(&self, throttle: Box<dyn Throttle>) {
        *self.throttle.lock() = throttle;
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http_client, self.environment.base_url())
    }

    /// Get the order book for a product at the given detail level
    pub fn get_order_book(&self, product: &ProductId, level: u8) -> RestResult<OrderBook> {
        self.market().get_order_book(product, level)
    }

    /// Get the bid side of the book as venue-tagged entries
    pub fn get_bids(&self, product: &ProductId, level: u8) -> RestResult<Vec<QuoteEntry>> {
        self.market().get_bids(product, level)
    }

    /// Get the ask side of the book as venue-tagged entries
    pub fn get_asks(&self, product: &ProductId, level: u8) -> RestResult<Vec<QuoteEntry>> {
        self.market().get_asks(product, level)
    }

    /// Get all tradable products
    pub fn get_products(&self) -> RestResult<Vec<Product>> {
        self.market().get_products()
    }

    /// Backfill candle history for a day range
    ///
    /// Bounds default to the last 30 days when absent; see
    /// [`crate::history::TimeRange::resolve`]. One request is issued per
    /// window, gated by the client's throttle, and the result is sorted
    /// ascending by open time with close times inserted.
    pub fn get_history(
        &self,
        product: &ProductId,
        interval: Interval,
        start_day: Option<NaiveDate>,
        end_day: Option<NaiveDate>,
    ) -> RestResult<Vec<Candle>> {
        let mut throttle = self.throttle.lock();
        history::backfill(
            &self.market(),
            throttle.as_mut(),
            product,
            interval,
            start_day,
            end_day,
            history::CANDLES_PER_REQUEST,
        )
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(AccountEndpoints::new(
            &self.http_client,
            self.environment.base_url(),
            creds,
        ))
    }

    /// Get all account balances
    pub fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.account()?.get_accounts()
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        let creds = self.credentials.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(TradingEndpoints::new(
            &self.http_client,
            self.environment.base_url(),
            creds,
        ))
    }

    /// Place an order
    pub fn place_order(&self, order: &OrderRequest) -> RestResult<OrderInfo> {
        self.trading()?.place_order(order)
    }

    /// Place a limit buy order
    pub fn limit_buy(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> RestResult<OrderInfo> {
        self.trading()?.limit_buy(product, size, price, time_in_force)
    }

    /// Place a limit sell order
    pub fn limit_sell(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> RestResult<OrderInfo> {
        self.trading()?.limit_sell(product, size, price, time_in_force)
    }

    /// Place an immediate-or-cancel buy order
    pub fn immediate_buy(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
    ) -> RestResult<OrderInfo> {
        self.trading()?.immediate_buy(product, size, price)
    }

    /// Place an immediate-or-cancel sell order
    pub fn immediate_sell(
        &self,
        product: &ProductId,
        size: Decimal,
        price: Decimal,
    ) -> RestResult<OrderInfo> {
        self.trading()?.immediate_sell(product, size, price)
    }

    /// Cancel an order by id
    pub fn cancel_order(&self, order_id: &str) -> RestResult<String> {
        self.trading()?.cancel_order(order_id)
    }

    /// Cancel all open orders
    pub fn cancel_all_orders(&self) -> RestResult<Vec<String>> {
        self.trading()?.cancel_all_orders()
    }

    /// List orders in any status
    pub fn get_orders(&self) -> RestResult<Vec<OrderInfo>> {
        self.trading()?.get_orders()
    }
}

impl Default for CoinbaseRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinbaseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseRestClient")
            .field("environment", &self.environment)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Venue environment
    pub environment: Environment,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Minimum spacing between backfill requests
    pub request_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            request_interval: Duration::from_secs(1),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the minimum spacing between backfill requests
    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }
}
