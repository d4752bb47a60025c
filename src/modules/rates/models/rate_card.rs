use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Pence, PricingError, Result};

/// Identifier for a bookable vehicle class (e.g. "saloon", "executive").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleClassId(String);

impl VehicleClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VehicleClassId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Per-vehicle-class pricing parameters, administered out-of-band.
///
/// All rates are integer pence. A card is immutable for the duration of a
/// quote; the catalog may refresh between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    pub vehicle_class: VehicleClassId,
    pub display_name: String,
    pub description: String,
    /// Flag-fall for variable-mode journeys
    pub base_fare: Pence,
    pub per_mile: Pence,
    /// Applied to explicit waypoint wait minutes
    pub per_minute: Pence,
    pub per_hour: Pence,
    /// Discount on the return leg of a round trip, 0-100
    pub return_discount_percent: u32,
    pub capacity: u32,
}

impl RateCard {
    /// Administrator-boundary validation: bad rate data is rejected where
    /// it enters the system, not inside the evaluator.
    pub fn validate(&self) -> Result<()> {
        if self.base_fare < 0 || self.per_mile < 0 || self.per_minute < 0 || self.per_hour < 0 {
            return Err(PricingError::configuration(format!(
                "Rate card '{}' has a negative rate",
                self.vehicle_class
            )));
        }

        if self.return_discount_percent > 100 {
            return Err(PricingError::configuration(format!(
                "Rate card '{}' return discount must be 0-100, got {}",
                self.vehicle_class, self.return_discount_percent
            )));
        }

        if self.capacity == 0 {
            return Err(PricingError::configuration(format!(
                "Rate card '{}' capacity must be at least 1",
                self.vehicle_class
            )));
        }

        Ok(())
    }
}
