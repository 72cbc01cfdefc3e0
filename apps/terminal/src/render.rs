//! # Receipt and Shipment Rendering
//!
//! The legacy fixed-width output contract:
//!
//! ```text
//! ** Shipment notice **
//! 1x Cheese       200g
//! 1x Cheese       200g
//! Total package weight 0.4kg
//!
//! ** Checkout receipt **
//! 2x Cheese       200
//! 1x Book         50
//! ----------------------
//! Subtotal         250
//! Shipping         30
//! Amount           280
//! Remaining Balance 720
//! ```
//!
//! Names are left-padded to 12 columns, amounts are printed as whole
//! currency units, weights per unit in grams, total weight in kilograms to
//! one decimal place. The core only guarantees the numbers; the layout is
//! owned here.

use vend_core::{Money, Receipt, ShipmentReport};

/// Formats a money amount as whole currency units, the way the legacy
/// receipt printed `%.0f` of a double.
fn units(amount: Money) -> String {
    format!("{:.0}", amount.cents() as f64 / 100.0)
}

/// Renders the shipment notice.
pub fn render_shipment(report: &ShipmentReport) -> String {
    let mut out = String::from("** Shipment notice **\n");
    for line in &report.lines {
        out.push_str(&format!("1x {:<12} {}g\n", line.name, line.grams));
    }
    out.push_str(&format!(
        "Total package weight {:.1}kg\n",
        report.total_weight.kilograms()
    ));
    out
}

/// Renders the checkout receipt.
pub fn render_receipt(receipt: &Receipt) -> String {
    let mut out = String::from("** Checkout receipt **\n");
    for line in &receipt.lines {
        out.push_str(&format!(
            "{}x {:<12} {}\n",
            line.quantity,
            line.name,
            units(line.line_total)
        ));
    }
    out.push_str("----------------------\n");
    out.push_str(&format!("Subtotal         {}\n", units(receipt.subtotal)));
    out.push_str(&format!("Shipping         {}\n", units(receipt.shipping_fee)));
    out.push_str(&format!("Amount           {}\n", units(receipt.total)));
    out.push_str(&format!(
        "Remaining Balance {}\n",
        units(receipt.remaining_balance)
    ));
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
