use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::core::cache::{Clock, TtlCell};
use crate::core::CivilInstant;
use crate::modules::surge::repositories::SurgeRuleSource;
use crate::modules::surge::services::surge_evaluator::{evaluate, SurgeOutcome};

/// Cached surge evaluation.
///
/// Rules are fetched through a short-TTL read-through cache so admin
/// changes propagate quickly. If the source fails and no snapshot is held,
/// evaluation degrades to the neutral multiplier rather than failing the
/// quote.
pub struct SurgeService {
    source: Arc<dyn SurgeRuleSource>,
    clock: Arc<dyn Clock>,
    cache: TtlCell<Vec<crate::modules::surge::models::SurgeRule>>,
}

impl SurgeService {
    pub fn new(source: Arc<dyn SurgeRuleSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            cache: TtlCell::new(ttl),
        }
    }

    pub async fn evaluate_at(&self, instant: &CivilInstant) -> SurgeOutcome {
        let rules = self
            .cache
            .get_or_refresh(self.clock.as_ref(), || self.source.active_rules())
            .await;

        match rules {
            Ok(rules) => evaluate(&rules, instant),
            Err(err) => {
                warn!(error = %err, "surge rule source unavailable, pricing without surge");
                SurgeOutcome::neutral()
            }
        }
    }
}
