//! Example: public market data
//!
//! This example demonstrates the unauthenticated endpoints:
//! - Order book snapshots and the venue-tagged bid/ask views
//! - Product listing
//!
//! Run with: cargo run --example market_data

use coinbase_rest::{CoinbaseRestClient, ProductId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Coinbase Pro Market Data Example ===\n");

    let client = CoinbaseRestClient::new();
    let product = ProductId::new(ProductId::BTC_USD);

    println!("Fetching {} order book (level=2)...", product);
    match client.get_order_book(&product, 2) {
        Ok(book) => {
            if let Some(bid) = book.best_bid() {
                println!("  Best Bid: ${}", bid);
            }
            if let Some(ask) = book.best_ask() {
                println!("  Best Ask: ${}", ask);
            }
            if let Some(spread) = book.spread() {
                println!("  Spread:   ${}", spread);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Top bids, tagged for aggregation:");
    match client.get_bids(&product, 2) {
        Ok(bids) => {
            for entry in bids.iter().take(5) {
                println!("  [{}] {} x {}", entry.source, entry.price, entry.size);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    println!("Fetching tradable products...");
    match client.get_products() {
        Ok(products) => {
            println!("  {} products listed; first few:", products.len());
            for product in products.iter().take(5) {
                println!(
                    "  {:10} {} / {}",
                    product.id, product.base_currency, product.quote_currency
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}
