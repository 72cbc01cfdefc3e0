//! # Demo Catalog Seeding
//!
//! Constructs the demo store used by the terminal walkthrough. Catalog
//! construction is a presentation-layer concern; the core consumes
//! already-built products.
//!
//! ## Seeded Products
//! - CHE-200   Cheese        100.00   stock 10   ships at 200g, expires
//! - BIS-700   Biscuits      150.00   stock 12   ships at 700g, expires
//! - TV-55     TV            3000.00  stock 3    ships at 15kg
//! - CARD-10   Scratch Card  10.00    stock 100  digital, nothing to ship

use chrono::{Duration, NaiveDate};
use vend_core::{Catalog, Money, Product, ValidationError, Weight};

/// Builds the demo catalog. Expiring products expire one month after
/// `today`, so the demo checkout always runs against sellable stock.
pub fn demo_catalog(today: NaiveDate) -> Result<Catalog, ValidationError> {
    let next_month = today + Duration::days(30);

    let mut catalog = Catalog::new();
    catalog.insert(
        Product::new("CHE-200", "Cheese", Money::from_major_minor(100, 0), 10)
            .with_expiry(next_month)
            .with_shipping_weight(Weight::from_grams(200)),
    )?;
    catalog.insert(
        Product::new("BIS-700", "Biscuits", Money::from_major_minor(150, 0), 12)
            .with_expiry(next_month)
            .with_shipping_weight(Weight::from_grams(700)),
    )?;
    catalog.insert(
        Product::new("TV-55", "TV", Money::from_major_minor(3000, 0), 3)
            .with_shipping_weight(Weight::from_grams(15_000)),
    )?;
    catalog.insert(Product::new(
        "CARD-10",
        "Scratch Card",
        Money::from_major_minor(10, 0),
        100,
    ))?;

    Ok(catalog)
}
