//! Example: historical candle backfill to CSV
//!
//! Fetches daily candles for the last 30 days and writes them to
//! `btc_usd_1d.csv` in the documented column order
//! (open_time,close_time,open,high,low,close,volume).
//!
//! Run with: cargo run --example backfill_csv

use coinbase_rest::{export, CoinbaseRestClient, Interval, ProductId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Coinbase Pro Candle Backfill Example ===\n");

    let client = CoinbaseRestClient::new();
    let product = ProductId::new(ProductId::BTC_USD);

    println!("Backfilling {} {} candles (last 30 days)...", product, Interval::D1);
    let candles = client.get_history(&product, Interval::D1, None, None)?;
    println!("  {} candles fetched\n", candles.len());

    // Preview: open time, close time, open price
    for candle in candles.iter().take(10) {
        println!("{} \t {} \t {}", candle.open_time, candle.close_time, candle.open);
    }
    if candles.len() > 10 {
        println!("...");
    }

    let path = "btc_usd_1d.csv";
    export::write_candles(path, &candles)?;
    println!("\nWrote {} rows to {}", candles.len(), path);

    Ok(())
}
