use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::civil::{CivilInstant, DateRange, DayOfWeek, TimeWindow};
use crate::core::{PricingError, Result};

/// Lowest legal surge multiplier (neutral).
pub fn min_multiplier() -> Decimal {
    Decimal::ONE
}

/// Highest legal multiplier, also the cap on the stacked product.
pub fn max_multiplier() -> Decimal {
    Decimal::from(3)
}

/// An administrator-authored peak-demand pricing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeRule {
    pub id: String,
    pub name: String,
    /// 1.0-3.0 inclusive
    pub multiplier: Decimal,
    pub active: bool,
    #[serde(flatten)]
    pub predicate: SurgePredicate,
}

/// The four mutually exclusive time-predicate shapes.
///
/// Tagged-union representation: each variant carries only the fields its
/// rule type uses, and matching is exhaustive, so an unhandled rule type
/// cannot slip through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule_type", rename_all = "snake_case")]
pub enum SurgePredicate {
    /// Matches an explicit set of calendar dates (bank holidays etc.)
    SpecificDates { dates: BTreeSet<chrono::NaiveDate> },

    /// Matches every date in an inclusive range
    DateRange {
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
    },

    /// Matches listed weekdays, optionally narrowed by a date range
    /// and/or a time-of-day window
    DayOfWeek {
        days: BTreeSet<DayOfWeek>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_range: Option<DateRange>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_window: Option<TimeWindow>,
    },

    /// Matches a daily time window, optionally narrowed to listed weekdays
    TimeOfDay {
        time_window: TimeWindow,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        days: Option<BTreeSet<DayOfWeek>>,
    },
}

impl SurgePredicate {
    pub fn matches(&self, instant: &CivilInstant) -> bool {
        match self {
            SurgePredicate::SpecificDates { dates } => dates.contains(&instant.date()),

            SurgePredicate::DateRange {
                start_date,
                end_date,
            } => *start_date <= instant.date() && instant.date() <= *end_date,

            SurgePredicate::DayOfWeek {
                days,
                date_range,
                time_window,
            } => {
                days.contains(&instant.day_of_week())
                    && date_range.map_or(true, |range| range.contains(instant.date()))
                    && time_window.map_or(true, |window| window.contains(instant.time()))
            }

            SurgePredicate::TimeOfDay { time_window, days } => {
                time_window.contains(instant.time())
                    && days
                        .as_ref()
                        .map_or(true, |days| days.contains(&instant.day_of_week()))
            }
        }
    }
}

impl SurgeRule {
    /// Administrator-boundary validation; the evaluator assumes rules
    /// that reach it have passed this.
    pub fn validate(&self) -> Result<()> {
        if self.multiplier < min_multiplier() || self.multiplier > max_multiplier() {
            return Err(PricingError::configuration(format!(
                "Surge rule '{}' multiplier must be 1.0-3.0, got {}",
                self.id, self.multiplier
            )));
        }

        match &self.predicate {
            SurgePredicate::SpecificDates { dates } => {
                if dates.is_empty() {
                    return Err(PricingError::configuration(format!(
                        "Surge rule '{}' has no dates",
                        self.id
                    )));
                }
            }
            SurgePredicate::DateRange {
                start_date,
                end_date,
            } => {
                if start_date > end_date {
                    return Err(PricingError::configuration(format!(
                        "Surge rule '{}' date range is inverted",
                        self.id
                    )));
                }
            }
            SurgePredicate::DayOfWeek {
                days,
                date_range,
                time_window,
            } => {
                if days.is_empty() {
                    return Err(PricingError::configuration(format!(
                        "Surge rule '{}' has no weekdays",
                        self.id
                    )));
                }
                if let Some(range) = date_range {
                    if !range.is_valid() {
                        return Err(PricingError::configuration(format!(
                            "Surge rule '{}' date range is inverted",
                            self.id
                        )));
                    }
                }
                if let Some(window) = time_window {
                    if !window.is_valid() {
                        return Err(PricingError::configuration(format!(
                            "Surge rule '{}' time window is inverted",
                            self.id
                        )));
                    }
                }
            }
            SurgePredicate::TimeOfDay { time_window, days } => {
                if !time_window.is_valid() {
                    return Err(PricingError::configuration(format!(
                        "Surge rule '{}' time window is inverted",
                        self.id
                    )));
                }
                if let Some(days) = days {
                    if days.is_empty() {
                        return Err(PricingError::configuration(format!(
                            "Surge rule '{}' weekday narrowing is empty",
                            self.id
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
