//! REST API client for the Coinbase Pro cryptocurrency exchange
//!
//! This crate provides a synchronous REST client for trading on Coinbase
//! Pro, including market data, account access, order execution, and a
//! windowed historical candle backfill with CSV export.
//!
//! # Features
//!
//! - **Market Data**: Order book snapshots, product listing, candles
//! - **History**: Rate-limited candle backfill over arbitrary day ranges
//! - **Account**: Balances per currency
//! - **Trading**: Place, cancel, and list orders
//!
//! # Authentication
//!
//! Private endpoints require API credentials (key, secret, passphrase).
//! Each request is signed with HMAC-SHA256 as specified by the venue's
//! API documentation; see the `coinbase-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use coinbase_rest::{CoinbaseRestClient, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = CoinbaseRestClient::new();
//!     let book = client.get_order_book(&"BTC-USD".into(), 2)?;
//!     println!("best bid: {:?}", book.best_bid());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = CoinbaseRestClient::with_credentials(creds);
//!     let accounts = auth_client.get_accounts()?;
//!     println!("accounts: {:?}", accounts);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! The historical backfill issues one request per window and is gated by
//! an injectable [`Throttle`] (default: one request per second). All other
//! operations are single requests and are not gated.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod export;
pub mod history;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, CoinbaseRestClient, Environment};
pub use coinbase_auth::Credentials;
pub use error::{RestError, RestResult};

// Re-export endpoint-specific types
pub use types::{
    // Market data
    Candle, OrderBook, PriceLevel, Product, QuoteEntry, RawCandle,
    // Account
    Account,
    // Trading
    OrderInfo, OrderRequest,
};

// Re-export the shared type vocabulary
pub use coinbase_types::{
    CancelAfter, FixedIntervalGate, Interval, NoThrottle, OrderType, ProductId, Side, Throttle,
    TimeInForce,
};
