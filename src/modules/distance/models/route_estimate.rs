use serde::{Deserialize, Serialize};

/// Distance and duration for a journey chain, as reported by the mapping
/// provider. The engine never computes geometry itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_miles: f64,
    pub duration_minutes: u32,
}
