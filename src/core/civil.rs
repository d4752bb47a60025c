//! Civil-time primitives used by surge rule evaluation.
//!
//! Surge rules are authored by administrators in a single, explicitly
//! stated local timezone. The engine never does offset arithmetic: the
//! caller supplies an already-localized instant and the evaluator only
//! derives the calendar date, HH:MM time-of-day and weekday from it.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A localized pickup instant, as experienced on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilInstant(NaiveDateTime);

impl CivilInstant {
    pub fn new(local: NaiveDateTime) -> Self {
        Self(local)
    }

    /// Calendar date (ISO `YYYY-MM-DD`)
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Time-of-day at minute precision (`HH:MM`)
    pub fn time(&self) -> NaiveTime {
        // Seconds are dropped so inclusive HH:MM window ends behave as
        // authored: 18:00:59 still falls inside a window ending 18:00.
        NaiveTime::from_hms_opt(self.0.hour(), self.0.minute(), 0)
            .unwrap_or_else(|| self.0.time())
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.0.weekday().into()
    }
}

impl From<NaiveDateTime> for CivilInstant {
    fn from(local: NaiveDateTime) -> Self {
        Self::new(local)
    }
}

/// Weekday names as administrators author them in rule predicates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn is_valid(&self) -> bool {
        self.start_date <= self.end_date
    }
}

/// Inclusive-both-ends local time window, authored as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl TimeWindow {
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    pub fn is_valid(&self) -> bool {
        self.start_time <= self.end_time
    }
}

/// Serde adapter for `HH:MM` strings (rules are authored without seconds).
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}
