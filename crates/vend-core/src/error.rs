//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  vend-core errors (this file)                                       │
//! │  ├── CheckoutError    - Cart and checkout rule violations           │
//! │  └── ValidationError  - Catalog input validation failures           │
//! │                                                                     │
//! │  Flow: ValidationError → CheckoutError → presentation layer         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts)
//! 3. Errors are enum variants, never String
//! 4. The core never logs or prints; callers surface these to users

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Checkout Error
// =============================================================================

/// Cart and checkout business rule violations.
///
/// Every failure aborts the current operation synchronously: a failed
/// `Cart::add` leaves the cart unchanged, and a failed checkout leaves all
/// product stock and the customer balance untouched (all-or-nothing).
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// `Cart::add` called with a non-positive quantity.
    #[error("quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// `Cart::add` requested more than is currently available.
    ///
    /// Distinct from [`CheckoutError::OutOfStock`], which is the re-check at
    /// checkout time after stock may have moved.
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A cart line would exceed the maximum per-line quantity.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout called on a cart with zero lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A cart line references a SKU no longer present in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// A cart line's product has passed its expiry date as of checkout time.
    #[error("product expired: {name}")]
    ProductExpired { name: String },

    /// A cart line's requested quantity exceeds current stock at checkout
    /// time (stock is shared mutable state and may have changed since the
    /// line was added).
    #[error("product out of stock: {name}: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The customer cannot afford the checkout total.
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Money,
        available: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when catalog input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid SKU characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU in the catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
