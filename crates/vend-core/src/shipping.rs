//! # Shipping Module
//!
//! Aggregates shippable units into a shipment summary.
//!
//! The service is a pure function of its input: it never touches the catalog
//! or the cart, and it produces data only. The terminal renderer owns the
//! legacy "** Shipment notice **" formatting.

use serde::{Deserialize, Serialize};

use crate::types::{ShipmentItem, Weight};

// =============================================================================
// Shipment Report
// =============================================================================

/// One display row of a shipment notice.
///
/// Checkout expands shippable cart lines by individual unit, so a report
/// carries one row per unit, not per distinct product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    /// Product name.
    pub name: String,

    /// Unit weight in grams.
    pub grams: i64,
}

/// The computed shipment summary handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentReport {
    /// One row per shippable unit, in checkout order.
    pub lines: Vec<ShipmentLine>,

    /// Total package weight.
    pub total_weight: Weight,
}

// =============================================================================
// Shipping Service
// =============================================================================

/// Builds shipment summaries from checkout's per-unit item list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingService;

impl ShippingService {
    /// Builds a shipment summary: one display line per item plus the
    /// accumulated total weight.
    pub fn build_summary(items: &[ShipmentItem]) -> ShipmentReport {
        let mut lines = Vec::with_capacity(items.len());
        let mut total_weight = Weight::zero();

        for item in items {
            lines.push(ShipmentLine {
                name: item.name.clone(),
                grams: item.weight.grams(),
            });
            total_weight += item.weight;
        }

        ShipmentReport {
            lines,
            total_weight,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
