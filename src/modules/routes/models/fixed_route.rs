use serde::{Deserialize, Serialize};

use crate::core::{Pence, PlaceId, PricingError, Result};
use crate::modules::rates::models::VehicleClassId;

/// Administrator-defined flat price for an exact
/// origin/destination/vehicle triple. Takes precedence over all computed
/// pricing while active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRoute {
    pub origin: PlaceId,
    pub destination: PlaceId,
    pub vehicle_class: VehicleClassId,
    pub price: Pence,
    pub distance_miles: f64,
    pub duration_minutes: u32,
    pub active: bool,
}

impl FixedRoute {
    pub fn validate(&self) -> Result<()> {
        if self.price <= 0 {
            return Err(PricingError::configuration(format!(
                "Fixed route {} -> {} must have a positive price",
                self.origin, self.destination
            )));
        }

        if self.origin == self.destination {
            return Err(PricingError::configuration(
                "Fixed route origin and destination must differ",
            ));
        }

        if !self.distance_miles.is_finite() || self.distance_miles < 0.0 {
            return Err(PricingError::configuration(format!(
                "Fixed route {} -> {} has an invalid distance",
                self.origin, self.destination
            )));
        }

        Ok(())
    }
}
