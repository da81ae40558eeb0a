//! Example: account and order management
//!
//! This example demonstrates the authenticated endpoints:
//! - Checking account balances
//! - Listing orders
//! - Placing and cancelling a limit order (sandbox only)
//!
//! Run with: cargo run --example rest_trading
//!
//! Set COINBASE_API_KEY_SANDBOX, COINBASE_API_SECRET_SANDBOX, and
//! COINBASE_PASSPHRASE_SANDBOX before running. Orders are only placed
//! when PLACE_TEST_ORDER=1 is also set.

use coinbase_rest::{CoinbaseRestClient, Environment, ProductId, TimeInForce};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Coinbase Pro Trading Example (sandbox) ===\n");

    let client = CoinbaseRestClient::from_env(Environment::Sandbox)?;

    // ========================================================================
    // Account balances
    // ========================================================================

    println!("{:8} \t {:>16}", "Currency", "Balance");
    match client.get_accounts() {
        Ok(accounts) => {
            for account in &accounts {
                println!("{:8} \t {:>16}", account.currency, account.balance);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // ========================================================================
    // Open and historical orders
    // ========================================================================

    println!("=========Coinbase Pro=========");
    println!(
        "{:9} \t {:>8} \t {:>12} \t {:6} \t {:5} \t {:20} \t {:8}",
        "Product", "Size", "Price", "Type", "Side", "Created", "Status"
    );
    match client.get_orders() {
        Ok(orders) => {
            for order in &orders {
                println!(
                    "{:9} \t {:>8} \t {:>12} \t {:6} \t {:5} \t {:20} \t {:8}",
                    order.product_id.as_str(),
                    order
                        .size
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    order
                        .price
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    order
                        .order_type
                        .map(|t| t.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    order.side,
                    order.created_at.as_deref().unwrap_or("-"),
                    order.status.as_deref().unwrap_or("-"),
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // ========================================================================
    // Order placement (opt-in)
    // ========================================================================

    if std::env::var("PLACE_TEST_ORDER").as_deref() == Ok("1") {
        let product = ProductId::new(ProductId::BTC_USD);

        println!("Placing a small limit buy far below market...");
        match client.limit_buy(&product, dec!(0.001), dec!(10), TimeInForce::GoodTillCancelled) {
            Ok(order) => {
                println!("  Placed order {}", order.id);
                println!("  Cancelling it again...");
                match client.cancel_order(&order.id) {
                    Ok(id) => println!("  Cancelled {}", id),
                    Err(e) => println!("  Cancel failed: {}", e),
                }
            }
            Err(e) => println!("  Order rejected: {}", e),
        }
    } else {
        println!("Set PLACE_TEST_ORDER=1 to exercise order placement.");
    }

    Ok(())
}
