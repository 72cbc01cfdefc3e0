//! # Domain Types
//!
//! Core domain types used throughout Vend POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │    Customer     │   │  ShipmentItem   │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (UUID)      │   │  name           │   │  name           │    │
//! │  │  sku (business) │   │  balance        │   │  weight         │    │
//! │  │  price, stock   │   └─────────────────┘   └─────────────────┘    │
//! │  │  expiry, weight │                                               │
//! │  └─────────────────┘   ┌─────────────────┐                         │
//! │                        │     Weight      │  integer grams,         │
//! │                        │  ─────────────  │  same construction      │
//! │                        │  grams (i64)    │  discipline as Money    │
//! │                        └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, internal identity
//! - `sku`: business key - human-readable, used by carts and the catalog

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Weight
// =============================================================================

/// A physical weight in integer grams.
///
/// ## Why Grams?
/// Same reasoning as integer cents for [`Money`]: the smallest unit keeps
/// every accumulation exact. Kilograms exist only for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Weight(i64);

impl Weight {
    /// Creates a weight from grams.
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Returns the weight in kilograms (for display only).
    #[inline]
    pub fn kilograms(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Checks if the weight is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Constructed once with catalog data; `stock` is mutated only by the
/// checkout commit phase. `stock` never goes negative after any operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Stock Keeping Unit - business identifier, the cart/catalog key.
    pub sku: String,

    /// Display name shown on the receipt and shipment notice.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Current stock level.
    pub stock: i64,

    /// Expiry date, if the product expires.
    pub expiry: Option<NaiveDate>,

    /// Per-unit shipping weight. `Some` means the product requires
    /// physical shipment.
    pub shipping_weight: Option<Weight>,
}

impl Product {
    /// Creates a new non-expiring, non-shippable product.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money, stock: i64) -> Self {
        Product {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            price_cents: price.cents(),
            stock,
            expiry: None,
            shipping_weight: None,
        }
    }

    /// Sets an expiry date.
    pub fn with_expiry(mut self, expiry: NaiveDate) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Marks the product as shippable with the given per-unit weight.
    pub fn with_shipping_weight(mut self, weight: Weight) -> Self {
        self.shipping_weight = Some(weight);
        self
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the product is expired as of the given date.
    ///
    /// True iff an expiry date is set and `as_of` is strictly after it.
    /// A product queried on its expiry date is still sellable.
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        match self.expiry {
            Some(expiry) => as_of > expiry,
            None => false,
        }
    }

    /// Checks whether the product requires physical shipment.
    #[inline]
    pub fn is_shippable(&self) -> bool {
        self.shipping_weight.is_some()
    }

    /// Checks whether current stock covers the requested quantity.
    pub fn in_stock(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer with a prepaid balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Display name.
    pub name: String,

    /// Current balance in cents.
    balance_cents: i64,
}

impl Customer {
    /// Creates a customer with an opening balance.
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Customer {
            name: name.into(),
            balance_cents: balance.cents(),
        }
    }

    /// Returns the current balance.
    #[inline]
    pub fn balance(&self) -> Money {
        Money::from_cents(self.balance_cents)
    }

    /// Subtracts an amount from the balance.
    ///
    /// The subtraction itself is unchecked: the checkout affordability gate
    /// is the precondition that keeps the balance non-negative. Callers
    /// outside checkout must enforce `balance >= amount` themselves.
    pub fn debit(&mut self, amount: Money) {
        debug_assert!(
            self.balance_cents >= amount.cents(),
            "debit would drive balance negative"
        );
        self.balance_cents -= amount.cents();
    }
}

// =============================================================================
// Shipment Item
// =============================================================================

/// One shippable unit captured at checkout time.
///
/// A value copy, decoupled from the live [`Product`]: shipment construction
/// must not alias catalog state that checkout is about to mutate. Checkout
/// expands shippable cart lines by individual unit, so a line of quantity 3
/// produces three `ShipmentItem`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentItem {
    /// Product name at checkout time (frozen).
    pub name: String,

    /// Per-unit weight at checkout time (frozen).
    pub weight: Weight,
}

impl ShipmentItem {
    /// Creates a shipment item for one unit of a product.
    pub fn new(name: impl Into<String>, weight: Weight) -> Self {
        ShipmentItem {
            name: name.into(),
            weight,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weight_basics() {
        let w = Weight::from_grams(200);
        assert_eq!(w.grams(), 200);
        assert!((w.kilograms() - 0.2).abs() < 1e-9);
        assert_eq!(format!("{}", w), "200g");

        let mut total = Weight::zero();
        total += w;
        total += w;
        assert_eq!(total.grams(), 400);
    }

    #[test]
    fn test_product_not_expired_without_expiry() {
        let p = Product::new("BOOK-1", "Book", Money::from_cents(5000), 5);
        assert!(!p.is_expired(date(2030, 1, 1)));
    }

    #[test]
    fn test_product_expiry_is_strictly_after() {
        let p = Product::new("CHE-1", "Cheese", Money::from_cents(10000), 10)
            .with_expiry(date(2026, 6, 1));

        // On the expiry date itself the product is still sellable
        assert!(!p.is_expired(date(2026, 6, 1)));
        assert!(!p.is_expired(date(2026, 5, 31)));
        assert!(p.is_expired(date(2026, 6, 2)));
    }

    #[test]
    fn test_product_shippable() {
        let p = Product::new("CHE-1", "Cheese", Money::from_cents(10000), 10)
            .with_shipping_weight(Weight::from_grams(200));
        assert!(p.is_shippable());

        let p = Product::new("CARD-1", "Scratch Card", Money::from_cents(1000), 100);
        assert!(!p.is_shippable());
    }

    #[test]
    fn test_product_in_stock() {
        let p = Product::new("CHE-1", "Cheese", Money::from_cents(10000), 10);
        assert!(p.in_stock(10));
        assert!(!p.in_stock(11));
    }

    #[test]
    fn test_customer_debit() {
        let mut customer = Customer::new("Ali", Money::from_cents(100000));
        customer.debit(Money::from_cents(28000));
        assert_eq!(customer.balance(), Money::from_cents(72000));
    }

    #[test]
    fn test_shipment_item_is_a_frozen_copy() {
        let mut p = Product::new("CHE-1", "Cheese", Money::from_cents(10000), 10)
            .with_shipping_weight(Weight::from_grams(200));
        let item = ShipmentItem::new(p.name.clone(), Weight::from_grams(200));

        // Mutating the live product does not touch the shipment item
        p.stock -= 2;
        p.name.push_str(" (old)");
        assert_eq!(item.name, "Cheese");
        assert_eq!(item.weight.grams(), 200);
    }
}
