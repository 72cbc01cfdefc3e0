//! # Checkout Module
//!
//! The checkout orchestrator: one atomic validate-then-commit pass over a
//! cart.
//!
//! ## Checkout Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout State Machine                         │
//! │                                                                     │
//! │  Phase 1  Precondition      cart non-empty                          │
//! │  Phase 2  Line validation   expiry + stock re-check, subtotal,      │
//! │                             per-unit shipment expansion             │
//! │  Phase 3  Pricing           flat shipping fee, grand total          │
//! │  Phase 4  Affordability     balance >= total                        │
//! │  Phase 5  Commit            all stock decrements, then one debit    │
//! │  Phase 6  Reporting         shipment summary (if any) + receipt     │
//! │                                                                     │
//! │  Any failure in Phases 1-4 aborts with ZERO mutation.               │
//! │  Phase 5 is only reached once every line has been validated.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Flat Fee Is Flat
//! The shipping fee is a single fixed charge whenever any shippable unit is
//! present. It does not scale with weight; a 1kg and a 100kg package cost
//! the same to ship. This is the intended pricing rule, not an oversight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::shipping::{ShipmentReport, ShippingService};
use crate::types::{Customer, ShipmentItem, Weight};
use crate::FLAT_SHIPPING_FEE_CENTS;

// =============================================================================
// Receipt
// =============================================================================

/// One priced row of a receipt, in cart-iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product name at checkout time (frozen).
    pub name: String,

    /// Quantity sold.
    pub quantity: i64,

    /// Line total (unit price × quantity).
    pub line_total: Money,
}

/// The computed receipt handed to the presentation layer.
///
/// Output data only; nothing here is persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// Flat shipping fee (zero when nothing ships).
    pub shipping_fee: Money,

    /// subtotal + shipping_fee.
    pub total: Money,

    /// Customer balance after the debit.
    pub remaining_balance: Money,

    /// Priced rows in cart-iteration order.
    pub lines: Vec<ReceiptLine>,
}

/// Everything a successful checkout produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// The receipt, always present.
    pub receipt: Receipt,

    /// The shipment summary, present iff any shippable unit was sold.
    pub shipment: Option<ShipmentReport>,
}

// =============================================================================
// Checkout Service
// =============================================================================

/// Orchestrates one checkout attempt against a catalog and a customer.
///
/// The flat shipping fee is injected configuration, so tests and future
/// store profiles can run with different rates.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutService {
    flat_shipping_fee: Money,
}

impl Default for CheckoutService {
    fn default() -> Self {
        CheckoutService {
            flat_shipping_fee: Money::from_cents(FLAT_SHIPPING_FEE_CENTS),
        }
    }
}

impl CheckoutService {
    /// Creates a checkout service with an explicit flat shipping fee.
    pub fn new(flat_shipping_fee: Money) -> Self {
        CheckoutService { flat_shipping_fee }
    }

    /// Returns the configured flat shipping fee.
    pub fn flat_shipping_fee(&self) -> Money {
        self.flat_shipping_fee
    }

    /// Runs one checkout attempt to completion.
    ///
    /// Validates every cart line against the live catalog as of `as_of`,
    /// prices the cart, gates on the customer balance, and only then commits:
    /// every stock decrement first, then a single balance debit.
    ///
    /// ## Errors
    /// - [`CheckoutError::EmptyCart`] for a cart with zero lines
    /// - [`CheckoutError::InvalidQuantity`] if a line carries a non-positive
    ///   quantity (possible for carts built from transport data)
    /// - [`CheckoutError::ProductNotFound`] if a line's SKU left the catalog
    /// - [`CheckoutError::ProductExpired`] if a line is expired as of `as_of`
    /// - [`CheckoutError::OutOfStock`] if live stock no longer covers a line
    /// - [`CheckoutError::InsufficientBalance`] if the customer cannot afford
    ///   the total
    ///
    /// Any error leaves all product stock and the customer balance untouched.
    pub fn checkout(
        &self,
        catalog: &mut Catalog,
        customer: &mut Customer,
        cart: &Cart,
        as_of: NaiveDate,
    ) -> CheckoutResult<CheckoutOutcome> {
        // Phase 1: precondition
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Phase 2: validate every line before any mutation
        let mut subtotal = Money::zero();
        let mut total_weight = Weight::zero();
        let mut shipment_items: Vec<ShipmentItem> = Vec::new();
        let mut receipt_lines: Vec<ReceiptLine> = Vec::with_capacity(cart.line_count());

        for line in cart.lines() {
            // Cart::add enforces positive quantities, but Cart also
            // deserializes from transport data, so the invariant is
            // re-checked here. A negative quantity would otherwise pass the
            // stock check and the commit would credit stock and balance.
            if line.quantity <= 0 {
                return Err(CheckoutError::InvalidQuantity {
                    requested: line.quantity,
                });
            }

            let product = catalog
                .get(&line.sku)
                .ok_or_else(|| CheckoutError::ProductNotFound(line.sku.clone()))?;

            if product.is_expired(as_of) {
                return Err(CheckoutError::ProductExpired {
                    name: product.name.clone(),
                });
            }

            if !product.in_stock(line.quantity) {
                return Err(CheckoutError::OutOfStock {
                    name: product.name.clone(),
                    available: product.stock,
                    requested: line.quantity,
                });
            }

            let line_total = product.price().multiply_quantity(line.quantity);
            subtotal += line_total;
            receipt_lines.push(ReceiptLine {
                name: product.name.clone(),
                quantity: line.quantity,
                line_total,
            });

            // Expand shippable lines by individual unit. The shipment notice
            // lists one row per unit, so the granularity matters here, not
            // just the weight total.
            if let Some(weight) = product.shipping_weight {
                for _ in 0..line.quantity {
                    shipment_items.push(ShipmentItem::new(product.name.clone(), weight));
                    total_weight += weight;
                }
            }
        }

        // Phase 3: pricing. Flat fee whenever anything ships, regardless of
        // how heavy the package is.
        let shipping_fee = if total_weight.is_zero() {
            Money::zero()
        } else {
            self.flat_shipping_fee
        };
        let total = subtotal + shipping_fee;

        // Phase 4: affordability gate. No partial deduction.
        if customer.balance() < total {
            return Err(CheckoutError::InsufficientBalance {
                required: total,
                available: customer.balance(),
            });
        }

        // Phase 5: commit. All stock decrements first, then the balance
        // debit; the order is observable and tests depend on it.
        for line in cart.lines() {
            let product = catalog
                .get_mut(&line.sku)
                .ok_or_else(|| CheckoutError::ProductNotFound(line.sku.clone()))?;
            product.stock -= line.quantity;
        }
        customer.debit(total);

        // Phase 6: reporting
        let shipment = if shipment_items.is_empty() {
            None
        } else {
            Some(ShippingService::build_summary(&shipment_items))
        };

        Ok(CheckoutOutcome {
            receipt: Receipt {
                subtotal,
                shipping_fee,
                total,
                remaining_balance: customer.balance(),
                lines: receipt_lines,
            },
            shipment,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 8, 1)
    }

    /// Catalog with 10x Cheese (100.00, 0.2kg, shippable) and
    /// 5x Book (50.00, not shippable).
    fn demo_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Product::new("CHE-200", "Cheese", Money::from_major_minor(100, 0), 10)
                    .with_shipping_weight(Weight::from_grams(200)),
            )
            .unwrap();
        catalog
            .insert(Product::new(
                "BOOK-1",
                "Book",
                Money::from_major_minor(50, 0),
                5,
            ))
            .unwrap();
        catalog
    }

    fn demo_cart(catalog: &Catalog) -> Cart {
        let mut cart = Cart::new();
        cart.add(catalog.get("CHE-200").unwrap(), 2).unwrap();
        cart.add(catalog.get("BOOK-1").unwrap(), 1).unwrap();
        cart
    }

    #[test]
    fn test_successful_checkout_totals_and_commit() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = demo_cart(&catalog);

        let outcome = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        let receipt = &outcome.receipt;
        assert_eq!(receipt.subtotal, Money::from_major_minor(250, 0));
        assert_eq!(receipt.shipping_fee, Money::from_major_minor(30, 0));
        assert_eq!(receipt.total, Money::from_major_minor(280, 0));
        assert_eq!(receipt.remaining_balance, Money::from_major_minor(720, 0));
        assert_eq!(receipt.total, receipt.subtotal + receipt.shipping_fee);

        // Receipt rows in cart order
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "Cheese");
        assert_eq!(receipt.lines[0].quantity, 2);
        assert_eq!(receipt.lines[0].line_total, Money::from_major_minor(200, 0));
        assert_eq!(receipt.lines[1].name, "Book");
        assert_eq!(receipt.lines[1].line_total, Money::from_major_minor(50, 0));

        // Shipment: one row per unit, two units of cheese
        let shipment = outcome.shipment.unwrap();
        assert_eq!(shipment.lines.len(), 2);
        assert!(shipment.lines.iter().all(|l| l.name == "Cheese" && l.grams == 200));
        assert_eq!(shipment.total_weight, Weight::from_grams(400));

        // Commit: stock decremented, balance debited
        assert_eq!(catalog.get("CHE-200").unwrap().stock, 8);
        assert_eq!(catalog.get("BOOK-1").unwrap().stock, 4);
        assert_eq!(customer.balance(), Money::from_major_minor(720, 0));
    }

    #[test]
    fn test_empty_cart_fails_without_mutation() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = Cart::new();

        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();

        assert!(matches!(err, CheckoutError::EmptyCart));
        assert_eq!(catalog.get("CHE-200").unwrap().stock, 10);
        assert_eq!(customer.balance(), Money::from_major_minor(1000, 0));
    }

    #[test]
    fn test_insufficient_balance_leaves_everything_unchanged() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(200, 0));
        let cart = demo_cart(&catalog);

        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();

        match err {
            CheckoutError::InsufficientBalance {
                required,
                available,
            } => {
                assert_eq!(required, Money::from_major_minor(280, 0));
                assert_eq!(available, Money::from_major_minor(200, 0));
            }
            other => panic!("unexpected error: {other}"),
        }

        assert_eq!(catalog.get("CHE-200").unwrap().stock, 10);
        assert_eq!(catalog.get("BOOK-1").unwrap().stock, 5);
        assert_eq!(customer.balance(), Money::from_major_minor(200, 0));
    }

    #[test]
    fn test_expired_product_aborts_whole_checkout() {
        let mut catalog = demo_catalog();
        catalog
            .insert(
                Product::new("MLK-1", "Milk", Money::from_major_minor(20, 0), 6)
                    .with_expiry(date(2026, 7, 1)),
            )
            .unwrap();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));

        let mut cart = Cart::new();
        cart.add(catalog.get("CHE-200").unwrap(), 2).unwrap();
        cart.add(catalog.get("MLK-1").unwrap(), 1).unwrap();

        // 2026-08-01 is strictly after the milk's 2026-07-01 expiry
        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::ProductExpired { ref name } if name == "Milk"));

        // Even the valid cheese line must not have committed
        assert_eq!(catalog.get("CHE-200").unwrap().stock, 10);
        assert_eq!(catalog.get("MLK-1").unwrap().stock, 6);
        assert_eq!(customer.balance(), Money::from_major_minor(1000, 0));
    }

    #[test]
    fn test_checkout_on_expiry_date_still_sells() {
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Product::new("MLK-1", "Milk", Money::from_major_minor(20, 0), 6)
                    .with_expiry(date(2026, 7, 1)),
            )
            .unwrap();
        let mut customer = Customer::new("Ali", Money::from_major_minor(100, 0));
        let mut cart = Cart::new();
        cart.add(catalog.get("MLK-1").unwrap(), 1).unwrap();

        let outcome = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, date(2026, 7, 1))
            .unwrap();
        assert_eq!(outcome.receipt.total, Money::from_major_minor(20, 0));
    }

    #[test]
    fn test_stock_recheck_catches_stale_cart() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = demo_cart(&catalog);

        // Stock moves between add and checkout
        catalog.get_mut("CHE-200").unwrap().stock = 1;

        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::OutOfStock {
                available: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(customer.balance(), Money::from_major_minor(1000, 0));
    }

    #[test]
    fn test_no_shippable_items_means_zero_fee_and_no_shipment() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let mut cart = Cart::new();
        cart.add(catalog.get("BOOK-1").unwrap(), 2).unwrap();

        let outcome = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        assert_eq!(outcome.receipt.shipping_fee, Money::zero());
        assert_eq!(outcome.receipt.total, Money::from_major_minor(100, 0));
        assert!(outcome.shipment.is_none());
    }

    #[test]
    fn test_flat_fee_ignores_weight_magnitude() {
        let service = CheckoutService::default();
        let mut customer = Customer::new("Ali", Money::from_major_minor(100000, 0));

        // 1kg package
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Product::new("A-1", "Light", Money::from_major_minor(10, 0), 10)
                    .with_shipping_weight(Weight::from_grams(1000)),
            )
            .unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.get("A-1").unwrap(), 1).unwrap();
        let light = service
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        // 100kg package
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Product::new("B-1", "Heavy", Money::from_major_minor(10, 0), 10)
                    .with_shipping_weight(Weight::from_grams(100_000)),
            )
            .unwrap();
        let mut cart = Cart::new();
        cart.add(catalog.get("B-1").unwrap(), 1).unwrap();
        let heavy = service
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        assert_eq!(light.receipt.shipping_fee, Money::from_major_minor(30, 0));
        assert_eq!(heavy.receipt.shipping_fee, Money::from_major_minor(30, 0));
    }

    #[test]
    fn test_injected_shipping_rate() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = demo_cart(&catalog);

        let service = CheckoutService::new(Money::from_major_minor(5, 50));
        let outcome = service
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        assert_eq!(outcome.receipt.shipping_fee, Money::from_major_minor(5, 50));
        assert_eq!(outcome.receipt.total, Money::from_major_minor(255, 50));
    }

    #[test]
    fn test_sku_removed_from_catalog_fails_checkout() {
        let catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = demo_cart(&catalog);

        // Simulate the product disappearing between add and checkout
        let mut stripped = Catalog::new();
        stripped
            .insert(catalog.get("BOOK-1").unwrap().clone())
            .unwrap();

        let err = CheckoutService::default()
            .checkout(&mut stripped, &mut customer, &cart, today())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::ProductNotFound(ref sku) if sku == "CHE-200"));
        assert_eq!(customer.balance(), Money::from_major_minor(1000, 0));
    }

    #[test]
    fn test_deserialized_cart_with_negative_quantity_is_rejected() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));

        // A cart arriving over the wire never went through Cart::add, so its
        // line invariants cannot be trusted. A negative quantity must not
        // reach the commit phase, where it would credit stock and balance.
        let cart: Cart =
            serde_json::from_str(r#"{"lines":[{"sku":"CHE-200","quantity":-5}]}"#).unwrap();

        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InvalidQuantity { requested: -5 }
        ));

        assert_eq!(catalog.get("CHE-200").unwrap().stock, 10);
        assert_eq!(customer.balance(), Money::from_major_minor(1000, 0));
    }

    #[test]
    fn test_deserialized_cart_with_zero_quantity_is_rejected() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));

        let cart: Cart =
            serde_json::from_str(r#"{"lines":[{"sku":"BOOK-1","quantity":0}]}"#).unwrap();

        let err = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::InvalidQuantity { requested: 0 }
        ));
        assert_eq!(catalog.get("BOOK-1").unwrap().stock, 5);
    }

    #[test]
    fn test_outcome_serializes_for_transport() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(1000, 0));
        let cart = demo_cart(&catalog);

        let outcome = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();

        // The outcome is a data transfer object; presentation layers consume
        // it as JSON
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["receipt"]["subtotal"], 25000);
        assert_eq!(json["receipt"]["lines"][0]["name"], "Cheese");
        assert_eq!(json["shipment"]["total_weight"], 400);
    }

    #[test]
    fn test_exact_balance_succeeds() {
        let mut catalog = demo_catalog();
        let mut customer = Customer::new("Ali", Money::from_major_minor(280, 0));
        let cart = demo_cart(&catalog);

        let outcome = CheckoutService::default()
            .checkout(&mut catalog, &mut customer, &cart, today())
            .unwrap();
        assert_eq!(outcome.receipt.remaining_balance, Money::zero());
        assert_eq!(customer.balance(), Money::zero());
    }
}
