use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::cache::{Clock, TtlMap};
use crate::core::{PricingError, Result};
use crate::modules::rates::models::{RateCard, VehicleClassId};
use crate::modules::rates::repositories::RateCatalog;

/// Caching read-through over the rate catalog.
///
/// Catalog failures are recovered locally: the service falls back to the
/// hardcoded default catalog so the quote flow degrades gracefully instead
/// of failing. Only a vehicle class unknown to both the store and the
/// fallback surfaces as an error.
pub struct RateService {
    source: Arc<dyn RateCatalog>,
    clock: Arc<dyn Clock>,
    cache: TtlMap<VehicleClassId, RateCard>,
}

impl RateService {
    pub fn new(source: Arc<dyn RateCatalog>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            cache: TtlMap::new(ttl),
        }
    }

    pub async fn rate_card(&self, vehicle_class: &VehicleClassId) -> Result<RateCard> {
        if let Some(card) = self.cache.get(self.clock.as_ref(), vehicle_class).await {
            return Ok(card);
        }

        match self.source.rate_card(vehicle_class).await {
            Ok(Some(card)) => {
                card.validate()?;
                self.cache
                    .put(self.clock.as_ref(), vehicle_class.clone(), card.clone())
                    .await;
                Ok(card)
            }
            Ok(None) => {
                debug!(class = %vehicle_class, "vehicle class not in catalog");
                fallback_rate_card(vehicle_class).ok_or_else(|| {
                    PricingError::not_serviceable(format!(
                        "No rates available for vehicle class '{}'",
                        vehicle_class
                    ))
                })
            }
            Err(err) => {
                warn!(class = %vehicle_class, error = %err, "rate catalog unreachable, using fallback rates");
                fallback_rate_card(vehicle_class).ok_or_else(|| {
                    PricingError::not_serviceable(format!(
                        "No rates available for vehicle class '{}'",
                        vehicle_class
                    ))
                })
            }
        }
    }
}

/// Fully specified default rates, used whenever the catalog store cannot
/// answer. Values mirror the seeded production catalog.
pub fn fallback_catalog() -> Vec<RateCard> {
    vec![
        RateCard {
            vehicle_class: "saloon".into(),
            display_name: "Saloon".to_string(),
            description: "Standard saloon car, up to 4 passengers".to_string(),
            base_fare: 500,
            per_mile: 100,
            per_minute: 10,
            per_hour: 2500,
            return_discount_percent: 15,
            capacity: 4,
        },
        RateCard {
            vehicle_class: "estate".into(),
            display_name: "Estate".to_string(),
            description: "Estate car with extra luggage space".to_string(),
            base_fare: 600,
            per_mile: 120,
            per_minute: 12,
            per_hour: 3000,
            return_discount_percent: 15,
            capacity: 4,
        },
        RateCard {
            vehicle_class: "executive".into(),
            display_name: "Executive".to_string(),
            description: "Executive class vehicle".to_string(),
            base_fare: 900,
            per_mile: 180,
            per_minute: 15,
            per_hour: 4500,
            return_discount_percent: 10,
            capacity: 3,
        },
        RateCard {
            vehicle_class: "minibus".into(),
            display_name: "Minibus".to_string(),
            description: "8 seat minibus".to_string(),
            base_fare: 1200,
            per_mile: 220,
            per_minute: 20,
            per_hour: 6000,
            return_discount_percent: 10,
            capacity: 8,
        },
    ]
}

fn fallback_rate_card(vehicle_class: &VehicleClassId) -> Option<RateCard> {
    fallback_catalog()
        .into_iter()
        .find(|card| &card.vehicle_class == vehicle_class)
}
