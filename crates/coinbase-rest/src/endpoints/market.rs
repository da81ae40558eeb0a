//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use crate::endpoints::decode_response;
use crate::error::RestResult;
use crate::types::{OrderBook, PriceLevel, Product, QuoteEntry, RawCandle};
use chrono::{DateTime, SecondsFormat, Utc};
use coinbase_types::ProductId;
use reqwest::blocking::Client;
use tracing::{debug, instrument};

/// Label attached to normalized book entries
pub const VENUE_LABEL: &str = "Coinbase Pro";

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str) -> Self {
        Self { client, base_url }
    }

    /// Get the order book for a product
    ///
    /// # Arguments
    /// * `product` - Product identifier (e.g., "BTC-USD")
    /// * `level` - Response detail (1 = best only, 2 = top 50, 3 = full)
    #[instrument(skip(self))]
    pub fn get_order_book(&self, product: &ProductId, level: u8) -> RestResult<OrderBook> {
        let url = format!(
            "{}/products/{}/book?level={}",
            self.base_url, product, level
        );
        debug!("Fetching order book for {}", product);

        decode_response(self.client.get(&url).send()?)
    }

    /// Get the bid side of the book, tagged with the venue label
    pub fn get_bids(&self, product: &ProductId, level: u8) -> RestResult<Vec<QuoteEntry>> {
        Ok(tag_levels(self.get_order_book(product, level)?.bids))
    }

    /// Get the ask side of the book, tagged with the venue label
    pub fn get_asks(&self, product: &ProductId, level: u8) -> RestResult<Vec<QuoteEntry>> {
        Ok(tag_levels(self.get_order_book(product, level)?.asks))
    }

    /// Get all tradable products
    #[instrument(skip(self))]
    pub fn get_products(&self) -> RestResult<Vec<Product>> {
        let url = format!("{}/products/", self.base_url);
        debug!("Fetching products");

        decode_response(self.client.get(&url).send()?)
    }

    /// Get candles for one time window
    ///
    /// The venue caps the number of candles per response; use the
    /// backfill on the client for ranges wider than one window.
    ///
    /// # Arguments
    /// * `product` - Product identifier
    /// * `granularity_secs` - Candle bucket width in seconds
    /// * `start` / `end` - Window bounds, sent as ISO-8601 UTC
    #[instrument(skip(self))]
    pub fn get_candles(
        &self,
        product: &ProductId,
        granularity_secs: u64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> RestResult<Vec<RawCandle>> {
        let url = format!(
            "{}/products/{}/candles?granularity={}&start={}&end={}",
            self.base_url,
            product,
            granularity_secs,
            start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        debug!("Fetching candles for {} [{} .. {}]", product, start, end);

        decode_response(self.client.get(&url).send()?)
    }
}

/// Normalize book levels into venue-tagged (source, price, size) entries
fn tag_levels(levels: Vec<PriceLevel>) -> Vec<QuoteEntry> {
    levels
        .into_iter()
        .map(|level| QuoteEntry {
            source: VENUE_LABEL.to_string(),
            price: level.price(),
            size: level.size(),
        })
        .collect()
}
