use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::Result;
use crate::modules::routes::models::ZoneId;

/// Resolves a pickup postcode to at most one named zone.
///
/// Zone membership is administered as sets of postcode prefixes; a pickup
/// belongs to the zone holding the longest matching prefix.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    async fn zone_for(&self, postcode: &str) -> Result<Option<ZoneId>>;
}

/// In-memory postcode-prefix directory.
pub struct PostcodePrefixDirectory {
    /// Normalized prefix -> zone
    prefixes: HashMap<String, ZoneId>,
}

impl PostcodePrefixDirectory {
    pub fn new(zones: Vec<(ZoneId, Vec<&str>)>) -> Self {
        let mut prefixes = HashMap::new();
        for (zone, zone_prefixes) in zones {
            for prefix in zone_prefixes {
                prefixes.insert(normalize(prefix), zone.clone());
            }
        }
        Self { prefixes }
    }
}

fn normalize(postcode: &str) -> String {
    postcode
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

#[async_trait]
impl ZoneDirectory for PostcodePrefixDirectory {
    async fn zone_for(&self, postcode: &str) -> Result<Option<ZoneId>> {
        let normalized = normalize(postcode);

        // Longest matching prefix wins so "CB1" beats "CB" for CB1 2AB
        let mut best: Option<(usize, &ZoneId)> = None;
        for (prefix, zone) in &self.prefixes {
            if normalized.starts_with(prefix.as_str()) {
                if best.map_or(true, |(len, _)| prefix.len() > len) {
                    best = Some((prefix.len(), zone));
                }
            }
        }

        Ok(best.map(|(_, zone)| zone.clone()))
    }
}
