use tracing::info;

use crate::core::{CivilInstant, PricingError, Result};
use crate::modules::accounts::services::DiscountResolver;
use crate::modules::quotes::models::{PriceBreakdown, QuoteRequest};
use crate::modules::quotes::services::charge_composer::compose;
use crate::modules::quotes::services::mode_selector::ModeSelector;
use crate::modules::rates::services::RateService;
use crate::modules::surge::services::SurgeService;

/// Orchestrates a quote: validate, price, surge, discount, compose.
///
/// Stateless per request; all shared state is the read-only reference
/// data behind the injected services, so concurrent quotes are fully
/// independent.
pub struct QuoteEngine {
    rates: RateService,
    surge: SurgeService,
    selector: ModeSelector,
    discounts: DiscountResolver,
}

impl QuoteEngine {
    pub fn new(
        rates: RateService,
        surge: SurgeService,
        selector: ModeSelector,
        discounts: DiscountResolver,
    ) -> Self {
        Self {
            rates,
            surge,
            selector,
            discounts,
        }
    }

    pub async fn quote(&self, request: &QuoteRequest) -> Result<PriceBreakdown> {
        request.validate()?;

        let rate_card = self.rates.rate_card(&request.vehicle_class).await?;

        if request.passengers > rate_card.capacity {
            return Err(PricingError::validation(format!(
                "Vehicle class '{}' seats {} passengers, got {}",
                rate_card.vehicle_class, rate_card.capacity, request.passengers
            )));
        }

        let charge = self.selector.select(request).await?;

        let pickup_instant = CivilInstant::new(request.pickup_at);
        let surge = self.surge.evaluate_at(&pickup_instant).await;

        let corporate_discount = self
            .discounts
            .resolve(request.corporate_account.as_deref())
            .await;

        let breakdown = compose(
            &charge,
            &rate_card,
            &surge,
            corporate_discount,
            request.is_return(),
        )?;

        info!(
            mode = ?breakdown.mode,
            total = %breakdown.total_display(),
            surge = %breakdown.surge_multiplier,
            "quote priced"
        );

        Ok(breakdown)
    }
}
