use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::{PlaceId, Result};
use crate::modules::rates::models::VehicleClassId;
use crate::modules::routes::models::{FixedRoute, ZoneId, ZoneRoute};

/// Exact-match lookup of fixed-price routes by
/// (origin, destination, vehicle class).
#[async_trait]
pub trait FixedRouteLookup: Send + Sync {
    async fn find(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
        vehicle_class: &VehicleClassId,
    ) -> Result<Option<FixedRoute>>;
}

/// Lookup of zone-to-destination flat pricing by (zone, destination).
#[async_trait]
pub trait ZoneRouteLookup: Send + Sync {
    async fn find(&self, zone: &ZoneId, destination: &PlaceId) -> Result<Option<ZoneRoute>>;
}

type FixedRouteKey = (PlaceId, PlaceId, VehicleClassId);

/// In-memory route override index, used as the reference implementation
/// and in tests.
pub struct InMemoryRouteIndex {
    fixed: RwLock<HashMap<FixedRouteKey, FixedRoute>>,
    zoned: RwLock<HashMap<(ZoneId, PlaceId), ZoneRoute>>,
}

impl InMemoryRouteIndex {
    pub fn new(fixed_routes: Vec<FixedRoute>, zone_routes: Vec<ZoneRoute>) -> Self {
        let fixed = fixed_routes
            .into_iter()
            .map(|route| {
                (
                    (
                        route.origin.clone(),
                        route.destination.clone(),
                        route.vehicle_class.clone(),
                    ),
                    route,
                )
            })
            .collect();

        let zoned = zone_routes
            .into_iter()
            .map(|route| ((route.zone.clone(), route.destination.clone()), route))
            .collect();

        Self {
            fixed: RwLock::new(fixed),
            zoned: RwLock::new(zoned),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub async fn upsert_fixed(&self, route: FixedRoute) -> Result<()> {
        route.validate()?;
        let key = (
            route.origin.clone(),
            route.destination.clone(),
            route.vehicle_class.clone(),
        );
        let mut fixed = self.fixed.write().await;
        fixed.insert(key, route);
        Ok(())
    }

    pub async fn upsert_zone(&self, route: ZoneRoute) -> Result<()> {
        route.validate()?;
        let key = (route.zone.clone(), route.destination.clone());
        let mut zoned = self.zoned.write().await;
        zoned.insert(key, route);
        Ok(())
    }
}

#[async_trait]
impl FixedRouteLookup for InMemoryRouteIndex {
    async fn find(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
        vehicle_class: &VehicleClassId,
    ) -> Result<Option<FixedRoute>> {
        let fixed = self.fixed.read().await;
        let key = (origin.clone(), destination.clone(), vehicle_class.clone());
        Ok(fixed.get(&key).cloned())
    }
}

#[async_trait]
impl ZoneRouteLookup for InMemoryRouteIndex {
    async fn find(&self, zone: &ZoneId, destination: &PlaceId) -> Result<Option<ZoneRoute>> {
        let zoned = self.zoned.read().await;
        let key = (zone.clone(), destination.clone());
        Ok(zoned.get(&key).cloned())
    }
}
