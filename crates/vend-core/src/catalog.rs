//! # Catalog Module
//!
//! In-memory product table, keyed by SKU.
//!
//! ## Why SKU Keys?
//! Carts must not hash live `Product` values: stock mutates during checkout,
//! and hashing mutable state is a classic aliasing pitfall. The catalog
//! keeps the products; everything else refers to them by their stable
//! business key.
//!
//! Insertion order is preserved, so catalog iteration is deterministic.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Product;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku, validate_stock};

/// The product table for one store.
///
/// Owns every [`Product`]; carts and checkout reach products through
/// [`Catalog::get`] / [`Catalog::get_mut`] by SKU.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
        }
    }

    /// Inserts a product after validating its SKU, name, price, and stock.
    ///
    /// ## Errors
    /// - [`ValidationError::Duplicate`] if a product with the same SKU exists
    /// - Field validators reject malformed SKUs, empty names, negative
    ///   prices, and negative stock
    pub fn insert(&mut self, product: Product) -> Result<(), ValidationError> {
        validate_sku(&product.sku)?;
        validate_product_name(&product.name)?;
        validate_price_cents(product.price_cents)?;
        validate_stock(product.stock)?;

        if self.get(&product.sku).is_some() {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: product.sku,
            });
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks up a product by SKU.
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// Looks up a product by SKU for mutation (checkout commit only).
    pub fn get_mut(&mut self, sku: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.sku == sku)
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
