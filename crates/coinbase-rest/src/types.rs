//! Types for Coinbase Pro REST API requests and responses

use coinbase_types::{CancelAfter, OrderType, ProductId, Side, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Venue Error Payload
// ============================================================================

/// Error payload returned by the venue on non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable error message
    pub message: String,
}

// ============================================================================
// Market Data Types
// ============================================================================

/// One order book price level: [price, size, num-orders]
///
/// Prices and sizes arrive as JSON strings; the third element is an order
/// count at levels 1-2 and an order id at level 3.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceLevel(pub Decimal, pub Decimal, pub serde_json::Value);

impl PriceLevel {
    /// Level price
    pub fn price(&self) -> Decimal {
        self.0
    }

    /// Level size
    pub fn size(&self) -> Decimal {
        self.1
    }
}

/// Order book snapshot for one product
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Venue sequence number
    pub sequence: Option<u64>,
    /// Bid levels, best first
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(PriceLevel::price)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(PriceLevel::price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Book entry tagged with its source venue
///
/// Normalized form used when book sides are handed to aggregation code;
/// the tag anticipates multiple venues even though only one exists here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteEntry {
    /// Venue label (e.g., "Coinbase Pro")
    pub source: String,
    /// Level price
    pub price: Decimal,
    /// Level size
    pub size: Decimal,
}

/// Tradable product information
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Product identifier (e.g., "BTC-USD")
    pub id: ProductId,
    /// Base currency
    pub base_currency: String,
    /// Quote currency
    pub quote_currency: String,
    /// Minimum order size in base currency
    pub base_min_size: Option<Decimal>,
    /// Maximum order size in base currency
    pub base_max_size: Option<Decimal>,
    /// Quote price increment
    pub quote_increment: Option<Decimal>,
    /// Trading status (online, offline, ...)
    pub status: Option<String>,
}

/// Raw candle row as returned by the venue:
/// [open time, low, high, open, close, volume]
///
/// The low/high ordering is venue-produced and is not re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCandle(pub i64, pub f64, pub f64, pub f64, pub f64, pub f64);

impl RawCandle {
    /// Bucket open time, Unix seconds
    pub fn open_time(&self) -> i64 {
        self.0
    }
}

/// Candle with the synthetic close time inserted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    /// Bucket open time, Unix seconds
    pub open_time: i64,
    /// Bucket close time: open time plus one granularity interval minus
    /// one second
    pub close_time: i64,
    /// Lowest trade price in the bucket
    pub low: f64,
    /// Highest trade price in the bucket
    pub high: f64,
    /// First trade price in the bucket
    pub open: f64,
    /// Last trade price in the bucket
    pub close: f64,
    /// Volume traded in the bucket
    pub volume: f64,
}

impl Candle {
    /// Build a candle from a raw venue row, inserting the close time
    pub fn from_raw(raw: &RawCandle, granularity_secs: u64) -> Self {
        Self {
            open_time: raw.0,
            close_time: raw.0 + granularity_secs as i64 - 1,
            low: raw.1,
            high: raw.2,
            open: raw.3,
            close: raw.4,
            volume: raw.5,
        }
    }
}

// ============================================================================
// Account Types
// ============================================================================

/// Account balance for one currency
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account id
    pub id: String,
    /// Currency code (e.g., "BTC")
    pub currency: String,
    /// Total balance
    pub balance: Decimal,
    /// Balance available for trading
    pub available: Option<Decimal>,
    /// Balance on hold for open orders
    pub hold: Option<Decimal>,
    /// Owning profile id
    pub profile_id: Option<String>,
}

// ============================================================================
// Trading Types
// ============================================================================

/// Request to place an order
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Order size in base currency
    pub size: Decimal,
    /// Limit price in quote currency
    pub price: Decimal,
    /// Order side
    pub side: Side,
    /// Product identifier
    pub product_id: ProductId,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Maker-only flag
    pub post_only: bool,
    /// Order lifetime policy
    pub time_in_force: TimeInForce,
    /// Cancellation window, attached only for good-till-time orders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<CancelAfter>,
}

impl OrderRequest {
    /// Create a limit order (GTC, not post-only)
    pub fn limit(product_id: impl Into<ProductId>, side: Side, size: Decimal, price: Decimal) -> Self {
        Self {
            size,
            price,
            side,
            product_id: product_id.into(),
            order_type: OrderType::Limit,
            post_only: false,
            time_in_force: TimeInForce::GoodTillCancelled,
            cancel_after: None,
        }
    }

    /// Create an immediate-or-cancel limit order
    pub fn immediate(
        product_id: impl Into<ProductId>,
        side: Side,
        size: Decimal,
        price: Decimal,
    ) -> Self {
        Self::limit(product_id, side, size, price)
            .with_time_in_force(TimeInForce::ImmediateOrCancel)
    }

    /// Set the order lifetime policy
    ///
    /// Good-till-time orders require a cancellation window; one minute is
    /// attached if none has been set.
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        if tif == TimeInForce::GoodTillTime && self.cancel_after.is_none() {
            self.cancel_after = Some(CancelAfter::Min);
        }
        self
    }

    /// Set the good-till-time cancellation window
    pub fn with_cancel_after(mut self, window: CancelAfter) -> Self {
        self.cancel_after = Some(window);
        self
    }

    /// Set as post-only (maker only)
    pub fn post_only(mut self) -> Self {
        self.post_only = true;
        self
    }
}

/// Order record returned by the venue
#[derive(Debug, Clone, Deserialize)]
pub struct OrderInfo {
    /// Order id
    pub id: String,
    /// Product identifier
    pub product_id: ProductId,
    /// Order side
    pub side: Side,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Limit price
    pub price: Option<Decimal>,
    /// Order size in base currency
    pub size: Option<Decimal>,
    /// Order lifetime policy
    pub time_in_force: Option<TimeInForce>,
    /// Maker-only flag
    pub post_only: Option<bool>,
    /// Creation timestamp (ISO-8601)
    pub created_at: Option<String>,
    /// Order status (open, done, ...)
    pub status: Option<String>,
    /// Size filled so far
    pub filled_size: Option<Decimal>,
    /// Quote value executed so far
    pub executed_value: Option<Decimal>,
    /// Settlement flag
    pub settled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_order_defaults() {
        let order = OrderRequest::limit("BTC-USD", Side::Buy, dec!(0.01), dec!(50000));

        assert_eq!(order.product_id.as_str(), "BTC-USD");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.time_in_force, TimeInForce::GoodTillCancelled);
        assert!(!order.post_only);
        assert!(order.cancel_after.is_none());
    }

    #[test]
    fn test_gtt_attaches_cancel_window() {
        let order = OrderRequest::limit("BTC-USD", Side::Sell, dec!(1), dec!(60000))
            .with_time_in_force(TimeInForce::GoodTillTime);
        assert_eq!(order.cancel_after, Some(CancelAfter::Min));

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"cancel_after\":\"min\""));
        assert!(json.contains("\"time_in_force\":\"GTT\""));
    }

    #[test]
    fn test_gtc_omits_cancel_window() {
        let order = OrderRequest::limit("BTC-USD", Side::Buy, dec!(1), dec!(60000));
        let json = serde_json::to_string(&order).unwrap();
        assert!(!json.contains("cancel_after"));
    }

    #[test]
    fn test_order_body_wire_shape() {
        let order = OrderRequest::immediate("ETH-USD", Side::Buy, dec!(0.5), dec!(2000.25));
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&order).unwrap()).unwrap();

        // Decimals go over the wire as strings
        assert_eq!(json["size"], "0.5");
        assert_eq!(json["price"], "2000.25");
        assert_eq!(json["side"], "buy");
        assert_eq!(json["product_id"], "ETH-USD");
        assert_eq!(json["type"], "limit");
        assert_eq!(json["time_in_force"], "IOC");
        assert_eq!(json["post_only"], false);
    }

    #[test]
    fn test_raw_candle_from_json_array() {
        let rows: Vec<RawCandle> =
            serde_json::from_str("[[1415398768, 0.32, 4.2, 0.35, 4.2, 12.3]]").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].open_time(), 1415398768);
        assert_eq!(rows[0].1, 0.32);
        assert_eq!(rows[0].5, 12.3);
    }

    #[test]
    fn test_close_time_insertion() {
        // divisor 36000 at limit 300 is a 120-second bucket
        let raw = RawCandle(1000, 1.0, 2.0, 1.5, 1.8, 10.0);
        let candle = Candle::from_raw(&raw, 120);
        assert_eq!(candle.close_time, 1119);
        assert_eq!(candle.open_time, 1000);
        assert_eq!(candle.low, 1.0);
        assert_eq!(candle.high, 2.0);
        assert_eq!(candle.open, 1.5);
        assert_eq!(candle.close, 1.8);
        assert_eq!(candle.volume, 10.0);
    }

    #[test]
    fn test_order_book_best_prices() {
        let book: OrderBook = serde_json::from_str(
            r#"{
                "sequence": 3,
                "bids": [["49999.00", "1.5", 3], ["49998.00", "2.0", 1]],
                "asks": [["50001.00", "0.5", 2]]
            }"#,
        )
        .unwrap();

        assert_eq!(book.best_bid(), Some(dec!(49999)));
        assert_eq!(book.best_ask(), Some(dec!(50001)));
        assert_eq!(book.spread(), Some(dec!(2)));
    }

    #[test]
    fn test_account_deserializes_string_decimals() {
        let account: Account = serde_json::from_str(
            r#"{
                "id": "7d0f7d8e",
                "currency": "BTC",
                "balance": "1.100",
                "available": "1.000",
                "hold": "0.100",
                "profile_id": "default"
            }"#,
        )
        .unwrap();

        assert_eq!(account.currency, "BTC");
        assert_eq!(account.balance, dec!(1.1));
        assert_eq!(account.hold, Some(dec!(0.1)));
    }
}
