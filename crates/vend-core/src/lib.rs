//! # vend-core: Pure Business Logic for Vend POS
//!
//! This crate is the **heart** of Vend POS. It contains the whole checkout
//! workflow as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Vend POS Architecture                         │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/terminal (presentation)                 │  │
//! │  │     catalog seeding ──► cart entry ──► receipt rendering      │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │                 ★ vend-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────────┐    │  │
//! │  │  │  types  │ │ catalog │ │   cart   │ │     checkout     │    │  │
//! │  │  │ Product │ │ Catalog │ │   Cart   │ │ CheckoutService  │    │  │
//! │  │  │Customer │ │ by SKU  │ │ CartLine │ │ Receipt/Outcome  │    │  │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └──────────────────┘    │  │
//! │  │  ┌─────────┐ ┌──────────┐ ┌────────────┐                     │  │
//! │  │  │  money  │ │ shipping │ │ validation │                     │  │
//! │  │  └─────────┘ └──────────┘ └────────────┘                     │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO PRINTING • NO DATABASE • PURE FUNCTIONS         │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Customer, Weight, ShipmentItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - In-memory product table keyed by SKU
//! - [`cart`] - Cart with soft stock checks at add time
//! - [`shipping`] - Shipment summary aggregation
//! - [`checkout`] - The validate-then-commit checkout orchestrator
//! - [`validation`] - Catalog input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: checkout is deterministic over
//!    (catalog, customer, cart, date) - same input = same output
//! 2. **No I/O**: printing, files, network, database access is FORBIDDEN here
//! 3. **Integer Units**: money in cents (i64), weight in grams (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//! 5. **All-or-Nothing**: no mutation escapes a failed checkout
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use vend_core::{Cart, Catalog, CheckoutService, Customer, Money, Product, Weight};
//!
//! let mut catalog = Catalog::new();
//! catalog
//!     .insert(
//!         Product::new("CHE-200", "Cheese", Money::from_major_minor(100, 0), 10)
//!             .with_shipping_weight(Weight::from_grams(200)),
//!     )
//!     .unwrap();
//!
//! let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
//! let mut cart = Cart::new();
//! cart.add(catalog.get("CHE-200").unwrap(), 2).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
//! let outcome = CheckoutService::default()
//!     .checkout(&mut catalog, &mut customer, &cart, today)
//!     .unwrap();
//!
//! // 2 x 100.00 + 30.00 flat shipping
//! assert_eq!(outcome.receipt.total, Money::from_major_minor(230, 0));
//! assert_eq!(catalog.get("CHE-200").unwrap().stock, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vend_core::Money` instead of
// `use vend_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::{CheckoutOutcome, CheckoutService, Receipt, ReceiptLine};
pub use error::{CheckoutError, CheckoutResult, ValidationError};
pub use money::Money;
pub use shipping::{ShipmentLine, ShipmentReport, ShippingService};
pub use types::{Customer, Product, ShipmentItem, Weight};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee in cents, charged once per checkout whenever any
/// shippable unit is present.
///
/// ## Business Reason
/// The store ships everything at one fixed rate regardless of package
/// weight. [`CheckoutService::new`] accepts a different rate, so this is
/// only the default.
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 3000;

/// Maximum quantity of a single product per cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Can be made configurable per store in future versions.
pub const MAX_LINE_QUANTITY: i64 = 999;

/// Maximum unit price in cents accepted by catalog validation
/// (1,000,000.00 currency units).
///
/// ## Business Reason
/// Rejects obviously mistyped prices, and keeps every line total
/// (price × quantity, up to [`MAX_LINE_QUANTITY`]) far inside i64 range so
/// subtotal arithmetic cannot overflow.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
