//! # Vend Terminal Entry Point
//!
//! A demo walkthrough of the checkout core: seed a catalog, fill a cart,
//! run a checkout, and render the shipment notice and receipt.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the demo catalog
//! 3. Build the cart
//! 4. Run checkout
//! 5. Render shipment notice (if any) and the receipt
//!
//! ## Usage
//! ```bash
//! cargo run -p vend-terminal
//!
//! # Machine-readable outcome
//! cargo run -p vend-terminal -- --json
//!
//! # Verbose logging
//! RUST_LOG=debug cargo run -p vend-terminal
//! ```

mod render;
mod seed;

use std::env;
use std::process::ExitCode;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vend_core::{Cart, CheckoutError, CheckoutService, Customer, Money};

fn main() -> ExitCode {
    init_tracing();

    let json_output = env::args().any(|arg| arg == "--json");

    match run(json_output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "checkout failed");
            ExitCode::FAILURE
        }
    }
}

fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let today = Utc::now().date_naive();

    let mut catalog = seed::demo_catalog(today)?;
    info!(products = catalog.len(), "demo catalog seeded");

    let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));

    let mut cart = Cart::new();
    cart.add(
        catalog
            .get("CHE-200")
            .ok_or_else(|| CheckoutError::ProductNotFound("CHE-200".into()))?,
        2,
    )?;
    cart.add(
        catalog
            .get("CARD-10")
            .ok_or_else(|| CheckoutError::ProductNotFound("CARD-10".into()))?,
        1,
    )?;
    info!(
        lines = cart.line_count(),
        quantity = cart.total_quantity(),
        "cart ready"
    );

    let outcome = CheckoutService::default().checkout(&mut catalog, &mut customer, &cart, today)?;
    info!(
        total = %outcome.receipt.total,
        remaining = %outcome.receipt.remaining_balance,
        "checkout committed"
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if let Some(shipment) = &outcome.shipment {
        println!("{}", render::render_shipment(shipment));
    }
    println!("{}", render::render_receipt(&outcome.receipt));

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vend=trace` - Show trace for vend crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,vend=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_succeeds_in_both_output_modes() {
        // Any failure, including a --json serialization failure, must
        // propagate out of run() so main exits nonzero
        assert!(run(false).is_ok());
        assert!(run(true).is_ok());
    }
}
