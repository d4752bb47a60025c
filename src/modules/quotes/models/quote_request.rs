use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{Place, PricingError, Result};
use crate::modules::rates::models::VehicleClassId;

pub const MAX_WAYPOINTS: usize = 5;
pub const MAX_WAIT_MINUTES: u32 = 480;
pub const MAX_PASSENGERS: u32 = 16;
pub const MIN_HOURLY_HOURS: u32 = 2;
pub const MAX_HOURLY_HOURS: u32 = 12;

/// An intermediate stop, optionally with a driver wait at the kerb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub place: Place,
    /// Minutes the driver waits at this stop, 0-480
    #[serde(default)]
    pub wait_minutes: u32,
}

/// How the journey is booked: a point-to-point transfer (optionally the
/// return leg of a round trip) or a by-the-hour hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "booking_type", rename_all = "snake_case")]
pub enum BookingType {
    Transfer {
        #[serde(default)]
        is_return: bool,
    },
    Hourly {
        /// Whole hours, 2-12 inclusive
        hours: u32,
    },
}

/// A customer quote request, validated at the boundary before the engine
/// runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub pickup: Place,
    pub dropoff: Place,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    /// Localized civil pickup instant (the system quotes in a single,
    /// explicitly stated timezone)
    pub pickup_at: NaiveDateTime,
    pub passengers: u32,
    pub vehicle_class: VehicleClassId,
    #[serde(flatten)]
    pub booking: BookingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate_account: Option<String>,
}

impl QuoteRequest {
    /// Boundary validation. Out-of-range fields are rejected here, never
    /// silently coerced.
    pub fn validate(&self) -> Result<()> {
        if self.pickup.place_id == self.dropoff.place_id {
            return Err(PricingError::validation(
                "Pickup and dropoff must be different places",
            ));
        }

        if self.passengers == 0 || self.passengers > MAX_PASSENGERS {
            return Err(PricingError::validation(format!(
                "Passenger count must be 1-{}, got {}",
                MAX_PASSENGERS, self.passengers
            )));
        }

        if self.waypoints.len() > MAX_WAYPOINTS {
            return Err(PricingError::validation(format!(
                "At most {} waypoints are supported, got {}",
                MAX_WAYPOINTS,
                self.waypoints.len()
            )));
        }

        for waypoint in &self.waypoints {
            if waypoint.wait_minutes > MAX_WAIT_MINUTES {
                return Err(PricingError::validation(format!(
                    "Waypoint wait time must be 0-{} minutes, got {}",
                    MAX_WAIT_MINUTES, waypoint.wait_minutes
                )));
            }
        }

        if let BookingType::Hourly { hours } = self.booking {
            if !(MIN_HOURLY_HOURS..=MAX_HOURLY_HOURS).contains(&hours) {
                return Err(PricingError::validation(format!(
                    "Hourly bookings must be {}-{} hours, got {}",
                    MIN_HOURLY_HOURS, MAX_HOURLY_HOURS, hours
                )));
            }
        }

        Ok(())
    }

    pub fn is_return(&self) -> bool {
        matches!(self.booking, BookingType::Transfer { is_return: true })
    }

    /// Sum of explicit waypoint wait minutes.
    pub fn total_wait_minutes(&self) -> u32 {
        self.waypoints.iter().map(|w| w.wait_minutes).sum()
    }

    pub fn waypoint_places(&self) -> Vec<Place> {
        self.waypoints.iter().map(|w| w.place.clone()).collect()
    }
}
