use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Monetary amount in integer minor units (pence).
///
/// All charges, rates and discounts in the engine are carried as integer
/// pence. `rust_decimal` is used only for intermediate multiplication so
/// that fractional rates (e.g. 10.777 miles at 100p/mile) are exact before
/// the single rounding step.
pub type Pence = i64;

/// ISO 4217 code attached to every price breakdown.
pub const CURRENCY_CODE: &str = "GBP";

/// Round a decimal amount to whole pence, half-up.
///
/// This is the one rounding primitive in the crate. Every percentage or
/// rate multiplication goes through it so the rounding behaviour is
/// identical across all charge components.
pub fn round_half_up(value: Decimal) -> Pence {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// `amount * percent / 100`, rounded half-up.
pub fn percentage(amount: Pence, percent: u32) -> Pence {
    round_half_up(Decimal::from(amount) * Decimal::from(percent) / Decimal::from(100))
}

/// A per-unit rate applied to a fractional quantity, rounded half-up.
pub fn times_rate(quantity: Decimal, rate: Pence) -> Pence {
    round_half_up(quantity * Decimal::from(rate))
}

/// Apply a surge multiplier to a whole-pence amount, rounded half-up.
pub fn apply_multiplier(amount: Pence, multiplier: Decimal) -> Pence {
    round_half_up(Decimal::from(amount) * multiplier)
}

/// Format pence for display, e.g. `1500` -> `£15.00`.
pub fn format_gbp(amount: Pence) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}£{}.{:02}", sign, abs / 100, abs % 100)
}
