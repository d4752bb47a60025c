use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::rates::models::{RateCard, VehicleClassId};

/// Read-only rate catalog source, backed by the external entity store in
/// production.
#[async_trait]
pub trait RateCatalog: Send + Sync {
    /// `Ok(None)` means the vehicle class is unknown to the store;
    /// `Err` means the store itself could not be reached.
    async fn rate_card(&self, vehicle_class: &VehicleClassId) -> Result<Option<RateCard>>;
}

/// In-memory catalog, used as the reference implementation and in tests.
pub struct InMemoryRateCatalog {
    cards: RwLock<HashMap<VehicleClassId, RateCard>>,
}

impl InMemoryRateCatalog {
    pub fn new(cards: Vec<RateCard>) -> Self {
        let cards = cards
            .into_iter()
            .map(|card| (card.vehicle_class.clone(), card))
            .collect();
        Self {
            cards: RwLock::new(cards),
        }
    }

    pub async fn upsert(&self, card: RateCard) -> Result<()> {
        card.validate()?;
        let mut cards = self.cards.write().await;
        cards.insert(card.vehicle_class.clone(), card);
        Ok(())
    }
}

#[async_trait]
impl RateCatalog for InMemoryRateCatalog {
    async fn rate_card(&self, vehicle_class: &VehicleClassId) -> Result<Option<RateCard>> {
        let cards = self.cards.read().await;
        Ok(cards.get(vehicle_class).cloned())
    }
}
