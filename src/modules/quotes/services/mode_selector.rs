use std::sync::Arc;
use tracing::{debug, warn};

use crate::core::{Pence, Result};
use crate::modules::distance::DistanceOracle;
use crate::modules::quotes::models::quote_request::{BookingType, QuoteRequest};
use crate::modules::quotes::models::PricingMode;
use crate::modules::routes::repositories::{FixedRouteLookup, ZoneDirectory, ZoneRouteLookup};

/// The selected pricing path with the data the composer needs for it.
/// Fixed and zone quotes short-circuit per-mile/per-minute charging
/// entirely.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeCharge {
    Fixed {
        price: Pence,
        distance_miles: f64,
        duration_minutes: u32,
    },
    Zone {
        price: Pence,
    },
    Variable {
        distance_miles: f64,
        duration_minutes: u32,
        wait_minutes: u32,
    },
    Hourly {
        hours: u32,
    },
}

impl ModeCharge {
    pub fn mode(&self) -> PricingMode {
        match self {
            ModeCharge::Fixed { .. } => PricingMode::Fixed,
            ModeCharge::Zone { .. } => PricingMode::Zone,
            ModeCharge::Variable { .. } => PricingMode::Variable,
            ModeCharge::Hourly { .. } => PricingMode::Hourly,
        }
    }
}

/// Resolves which pricing mode applies to a request.
///
/// Precedence: hourly booking type first (no lookups at all), then an
/// exact fixed-route match, then zone flat pricing, then variable pricing
/// via the distance oracle. Route-lookup failures degrade to "no override
/// found" so a flaky override store cannot take quoting down; only a
/// distance oracle failure is fatal, and only for variable quotes.
pub struct ModeSelector {
    fixed_routes: Arc<dyn FixedRouteLookup>,
    zone_routes: Arc<dyn ZoneRouteLookup>,
    zones: Arc<dyn ZoneDirectory>,
    oracle: Arc<dyn DistanceOracle>,
}

impl ModeSelector {
    pub fn new(
        fixed_routes: Arc<dyn FixedRouteLookup>,
        zone_routes: Arc<dyn ZoneRouteLookup>,
        zones: Arc<dyn ZoneDirectory>,
        oracle: Arc<dyn DistanceOracle>,
    ) -> Self {
        Self {
            fixed_routes,
            zone_routes,
            zones,
            oracle,
        }
    }

    pub async fn select(&self, request: &QuoteRequest) -> Result<ModeCharge> {
        if let BookingType::Hourly { hours } = request.booking {
            return Ok(ModeCharge::Hourly { hours });
        }

        if let Some(charge) = self.find_fixed(request).await {
            return Ok(charge);
        }

        if let Some(charge) = self.find_zone(request).await {
            return Ok(charge);
        }

        let waypoints = request.waypoint_places();
        let estimate = self
            .oracle
            .estimate(&request.pickup, &request.dropoff, &waypoints)
            .await?;

        Ok(ModeCharge::Variable {
            distance_miles: estimate.distance_miles,
            duration_minutes: estimate.duration_minutes,
            wait_minutes: request.total_wait_minutes(),
        })
    }

    async fn find_fixed(&self, request: &QuoteRequest) -> Option<ModeCharge> {
        let lookup = self
            .fixed_routes
            .find(
                &request.pickup.place_id,
                &request.dropoff.place_id,
                &request.vehicle_class,
            )
            .await;

        let route = match lookup {
            Ok(route) => route?,
            Err(err) => {
                warn!(error = %err, "fixed route lookup failed, treating as no override");
                return None;
            }
        };

        if !route.active {
            return None;
        }

        debug!(origin = %route.origin, destination = %route.destination, "fixed route override applies");
        Some(ModeCharge::Fixed {
            price: route.price,
            distance_miles: route.distance_miles,
            duration_minutes: route.duration_minutes,
        })
    }

    async fn find_zone(&self, request: &QuoteRequest) -> Option<ModeCharge> {
        let postcode = request.pickup.postcode.as_deref()?;

        let zone = match self.zones.zone_for(postcode).await {
            Ok(zone) => zone?,
            Err(err) => {
                warn!(error = %err, "zone resolution failed, treating as no override");
                return None;
            }
        };

        let route = match self
            .zone_routes
            .find(&zone, &request.dropoff.place_id)
            .await
        {
            Ok(route) => route?,
            Err(err) => {
                warn!(error = %err, "zone route lookup failed, treating as no override");
                return None;
            }
        };

        if !route.active {
            return None;
        }

        let price = route.price_for(&request.vehicle_class)?;
        let price = if request.is_return() {
            price.return_price
        } else {
            price.outbound
        };

        debug!(zone = %zone, destination = %request.dropoff.place_id, "zone route applies");
        Some(ModeCharge::Zone { price })
    }
}
