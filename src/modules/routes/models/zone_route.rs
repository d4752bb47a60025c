use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::core::{Pence, PlaceId, PricingError, Result};
use crate::modules::rates::models::VehicleClassId;

/// Identifier for a named pickup zone (a set of postcode prefixes).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Flat prices for one zone/destination pair, per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRoutePrice {
    pub outbound: Pence,
    #[serde(rename = "return")]
    pub return_price: Pence,
}

/// Flat pricing from a pickup zone to a destination, per vehicle class.
/// Yields to an exact fixed-route match, beats variable pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRoute {
    pub zone: ZoneId,
    pub destination: PlaceId,
    pub prices: HashMap<VehicleClassId, ZoneRoutePrice>,
    pub active: bool,
}

impl ZoneRoute {
    pub fn price_for(&self, vehicle_class: &VehicleClassId) -> Option<ZoneRoutePrice> {
        self.prices.get(vehicle_class).copied()
    }

    pub fn validate(&self) -> Result<()> {
        if self.prices.is_empty() {
            return Err(PricingError::configuration(format!(
                "Zone route {} -> {} prices no vehicle classes",
                self.zone, self.destination
            )));
        }

        for (class, price) in &self.prices {
            if price.outbound <= 0 || price.return_price <= 0 {
                return Err(PricingError::configuration(format!(
                    "Zone route {} -> {} has a non-positive price for '{}'",
                    self.zone, self.destination, class
                )));
            }
        }

        Ok(())
    }
}
