//! # Cart Module
//!
//! The shopping cart: an insertion-ordered list of (SKU, quantity) lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Cart Operations                               │
//! │                                                                     │
//! │  Action                  Operation              State Change        │
//! │  ──────                  ─────────              ────────────        │
//! │  Pick product ─────────► add(&product, qty) ──► line += qty         │
//! │  Review ───────────────► lines()            ──► (read only)         │
//! │  Start over ───────────► clear()            ──► lines.clear()       │
//! │  Checkout ─────────────► CheckoutService reads lines() in order     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Checks Are Soft Here
//! `add` checks the *incremental* request against the product's stock at the
//! time of the call. Stock is shared mutable state, so the real gate is the
//! re-validation inside checkout; the add-time check only catches obvious
//! over-ordering early.

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::types::Product;
use crate::MAX_LINE_QUANTITY;

/// One (product, requested quantity) pairing within a cart.
///
/// Holds the product's SKU rather than the product itself: products are
/// mutable shared state owned by the catalog, and a stable key avoids the
/// hashing-mutable-object pitfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Business key of the product in the catalog.
    pub sku: String,

    /// Requested quantity, always positive.
    pub quantity: i64,
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per SKU (re-adding accumulates quantity)
/// - Every line quantity is positive and at most [`MAX_LINE_QUANTITY`]
/// - Lines keep insertion order; checkout and receipts iterate in that order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a quantity of a product to the cart.
    ///
    /// If the product is already present the quantity accumulates into the
    /// existing line; it is never replaced.
    ///
    /// ## Errors
    /// - [`CheckoutError::InvalidQuantity`] if `quantity <= 0`
    /// - [`CheckoutError::InsufficientStock`] if the incremental `quantity`
    ///   exceeds the product's current stock. Only the increment is checked;
    ///   the cumulative line is re-validated against live stock at checkout.
    /// - [`CheckoutError::QuantityTooLarge`] if the cumulative line quantity
    ///   would exceed [`MAX_LINE_QUANTITY`]
    ///
    /// On any error the cart is left unchanged.
    pub fn add(&mut self, product: &Product, quantity: i64) -> CheckoutResult<()> {
        if quantity <= 0 {
            return Err(CheckoutError::InvalidQuantity {
                requested: quantity,
            });
        }

        if !product.in_stock(quantity) {
            return Err(CheckoutError::InsufficientStock {
                name: product.name.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.sku == product.sku) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CheckoutError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        if quantity > MAX_LINE_QUANTITY {
            return Err(CheckoutError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            });
        }

        self.lines.push(CartLine {
            sku: product.sku.clone(),
            quantity,
        });
        Ok(())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only view of the cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn cheese() -> Product {
        Product::new("CHE-200", "Cheese", Money::from_cents(10000), 10)
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = Cart::new();
        let product = cheese();

        cart.add(&product, 2).unwrap();
        cart.add(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one distinct line
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.lines()[0].sku, "CHE-200");
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = cheese();

        let err = cart.add(&product, 0).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidQuantity { requested: 0 }));

        let err = cart.add(&product, -3).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidQuantity { requested: -3 }));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_more_than_stock() {
        let mut cart = Cart::new();
        let product = cheese(); // stock 10

        let err = cart.add(&product, 11).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InsufficientStock {
                available: 10,
                requested: 11,
                ..
            }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_readd_checks_only_incremental_quantity() {
        let mut cart = Cart::new();
        let product = cheese(); // stock 10

        // 8 + 8 = 16 exceeds stock, but each increment alone does not.
        // This is the documented soft-check behavior; checkout re-validates
        // the cumulative line against live stock.
        cart.add(&product, 8).unwrap();
        cart.add(&product, 8).unwrap();
        assert_eq!(cart.total_quantity(), 16);
    }

    #[test]
    fn test_add_caps_line_quantity() {
        let mut cart = Cart::new();
        let product = Product::new("CARD-1", "Scratch Card", Money::from_cents(100), 5000);

        cart.add(&product, 600).unwrap();
        let err = cart.add(&product, 600).unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::QuantityTooLarge {
                requested: 1200,
                max: MAX_LINE_QUANTITY,
            }
        ));
        // Failed add leaves the existing line unchanged
        assert_eq!(cart.total_quantity(), 600);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        let cheese = cheese();
        let book = Product::new("BOOK-1", "Book", Money::from_cents(5000), 5);

        cart.add(&cheese, 2).unwrap();
        cart.add(&book, 1).unwrap();

        let skus: Vec<&str> = cart.lines().iter().map(|l| l.sku.as_str()).collect();
        assert_eq!(skus, vec!["CHE-200", "BOOK-1"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&cheese(), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
