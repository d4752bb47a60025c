use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{format_gbp, Pence};

/// Which pricing path produced the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingMode {
    Fixed,
    Zone,
    Variable,
    Hourly,
}

/// The auditable output of the pricing engine.
///
/// All monetary fields are integer pence. The pre-surge component fields
/// always sum to the pre-surge subtotal: for fixed and zone quotes the
/// flat route price is carried in `base_fare` and the per-unit components
/// are zero. `subtotal_before_discount` is the post-surge amount the
/// discounts are taken from, and
/// `total = max(0, subtotal_before_discount - corporate - return)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub mode: PricingMode,
    pub base_fare: Pence,
    pub distance_charge: Pence,
    pub wait_time_charge: Pence,
    pub hourly_charge: Pence,
    pub surge_multiplier: Decimal,
    pub applied_surge_rule_ids: Vec<String>,
    pub subtotal_before_discount: Pence,
    pub corporate_discount_amount: Pence,
    pub return_discount_amount: Pence,
    pub total: Pence,
    pub currency: String,
}

impl PriceBreakdown {
    /// Display rendering of the final price, e.g. `£15.00`.
    pub fn total_display(&self) -> String {
        format_gbp(self.total)
    }
}
