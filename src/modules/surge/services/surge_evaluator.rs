use rust_decimal::Decimal;
use tracing::debug;

use crate::core::CivilInstant;
use crate::modules::surge::models::surge_rule::{max_multiplier, min_multiplier};
use crate::modules::surge::models::SurgeRule;

/// Result of evaluating the rule set against a pickup instant.
#[derive(Debug, Clone, PartialEq)]
pub struct SurgeOutcome {
    /// Combined multiplier, 1.0 when nothing matched, capped at 3.0
    pub multiplier: Decimal,
    pub applied_rule_ids: Vec<String>,
    /// True when the uncapped product exceeded the cap
    pub was_capped: bool,
}

impl SurgeOutcome {
    pub fn neutral() -> Self {
        Self {
            multiplier: Decimal::ONE,
            applied_rule_ids: Vec::new(),
            was_capped: false,
        }
    }
}

/// Evaluate the active surge rules at a localized pickup instant.
///
/// Pure function: the instant is supplied by the caller, never read from a
/// clock, so identical inputs always produce identical output.
///
/// Matching rules stack by multiplication (compounding peak-demand
/// pricing), then the product is capped at 3.0. Each rule's multiplier is
/// clamped to the legal [1.0, 3.0] band first so a misconfigured rule that
/// slipped past admin validation cannot produce an impossible total.
pub fn evaluate(rules: &[SurgeRule], instant: &CivilInstant) -> SurgeOutcome {
    let mut multiplier = Decimal::ONE;
    let mut applied_rule_ids = Vec::new();

    for rule in rules {
        if !rule.active {
            continue;
        }

        if rule.predicate.matches(instant) {
            let clamped = rule.multiplier.clamp(min_multiplier(), max_multiplier());
            multiplier *= clamped;
            applied_rule_ids.push(rule.id.clone());
            debug!(rule = %rule.id, multiplier = %clamped, "surge rule matched");
        }
    }

    let was_capped = multiplier > max_multiplier();
    if was_capped {
        multiplier = max_multiplier();
    }

    SurgeOutcome {
        multiplier,
        applied_rule_ids,
        was_capped,
    }
}
