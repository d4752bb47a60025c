use rust_decimal::Decimal;

use crate::core::money::{
    apply_multiplier, percentage, times_rate, Pence, CURRENCY_CODE,
};
use crate::core::{PricingError, Result};
use crate::modules::quotes::models::PriceBreakdown;
use crate::modules::quotes::services::mode_selector::ModeCharge;
use crate::modules::rates::models::RateCard;
use crate::modules::surge::services::SurgeOutcome;

/// Compose the final price breakdown from the selected mode, the rate
/// card, the surge outcome and the resolved discounts.
///
/// Ordering: mode subtotal, then surge on the whole subtotal, then the
/// corporate and return discounts each computed on the post-surge amount
/// and subtracted independently (they do not compound), then the floor at
/// zero. Surge applies uniformly across all modes, fixed and zone prices
/// included.
pub fn compose(
    charge: &ModeCharge,
    rate_card: &RateCard,
    surge: &SurgeOutcome,
    corporate_discount_percent: Option<u32>,
    is_return: bool,
) -> Result<PriceBreakdown> {
    let mut base_fare: Pence = 0;
    let mut distance_charge: Pence = 0;
    let mut wait_time_charge: Pence = 0;
    let mut hourly_charge: Pence = 0;

    let subtotal: Pence = match charge {
        ModeCharge::Variable {
            distance_miles,
            wait_minutes,
            ..
        } => {
            base_fare = rate_card.base_fare;
            distance_charge = times_rate(decimal_miles(*distance_miles)?, rate_card.per_mile);
            wait_time_charge = times_rate(Decimal::from(*wait_minutes), rate_card.per_minute);
            base_fare + distance_charge + wait_time_charge
        }
        ModeCharge::Hourly { hours } => {
            hourly_charge = Pence::from(*hours) * rate_card.per_hour;
            hourly_charge
        }
        // Flat prices are fully determined by the route; carried in
        // base_fare so the component fields still sum to the subtotal
        ModeCharge::Fixed { price, .. } | ModeCharge::Zone { price } => {
            base_fare = *price;
            *price
        }
    };

    let subtotal_after_surge = apply_multiplier(subtotal, surge.multiplier);

    let corporate_discount_amount = corporate_discount_percent
        .map(|percent| percentage(subtotal_after_surge, percent))
        .unwrap_or(0);

    let return_discount_amount = if is_return && rate_card.return_discount_percent > 0 {
        percentage(subtotal_after_surge, rate_card.return_discount_percent)
    } else {
        0
    };

    let total =
        (subtotal_after_surge - corporate_discount_amount - return_discount_amount).max(0);

    Ok(PriceBreakdown {
        mode: charge.mode(),
        base_fare,
        distance_charge,
        wait_time_charge,
        hourly_charge,
        surge_multiplier: surge.multiplier,
        applied_surge_rule_ids: surge.applied_rule_ids.clone(),
        subtotal_before_discount: subtotal_after_surge,
        corporate_discount_amount,
        return_discount_amount,
        total,
        currency: CURRENCY_CODE.to_string(),
    })
}

fn decimal_miles(miles: f64) -> Result<Decimal> {
    if !miles.is_finite() || miles < 0.0 {
        return Err(PricingError::lookup(format!(
            "Distance oracle returned an invalid distance: {}",
            miles
        )));
    }
    Decimal::try_from(miles)
        .map_err(|_| PricingError::lookup(format!("Distance out of range: {}", miles)))
}
