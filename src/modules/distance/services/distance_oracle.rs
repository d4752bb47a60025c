use async_trait::async_trait;

use crate::core::{DistanceOracleError, Place};
use crate::modules::distance::models::RouteEstimate;

/// The mapping provider, seen by the engine as a distance/duration oracle
/// over an origin -> waypoints -> destination chain.
///
/// This is the only potentially slow external dependency; any timeout or
/// cancellation is enforced by the caller around this trait. Failure is
/// fatal to variable-mode pricing only, and must never be silently
/// substituted with zero distance.
#[async_trait]
pub trait DistanceOracle: Send + Sync {
    async fn estimate(
        &self,
        origin: &Place,
        destination: &Place,
        waypoints: &[Place],
    ) -> Result<RouteEstimate, DistanceOracleError>;
}
