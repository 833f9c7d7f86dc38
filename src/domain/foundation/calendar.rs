//! Calendar day and time-of-day value objects.
//!
//! Both are derived from the same local wall clock so that "today" and
//! "morning" never disagree about which day it is.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// A local calendar date, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The date of `instant` in the instant's own offset.
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self(instant.date_naive())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DAY_FORMAT)
            .map(Self)
            .map_err(|e| ValidationError::invalid_format("date", e.to_string()))
    }
}

impl Serialize for CalendarDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Coarse part of the day, used to colour the generated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Hours 0-11 are morning, 12-17 afternoon, the rest evening.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }

    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self::from_hour(instant.hour())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn day_displays_zero_padded() {
        let day = CalendarDay::from_ymd(2024, 3, 7).unwrap();
        assert_eq!(day.to_string(), "2024-03-07");
    }

    #[test]
    fn day_parses_and_rejects_garbage() {
        let day: CalendarDay = "2024-12-31".parse().unwrap();
        assert_eq!(day, CalendarDay::from_ymd(2024, 12, 31).unwrap());
        assert!("31/12/2024".parse::<CalendarDay>().is_err());
    }

    #[test]
    fn day_uses_local_offset_not_utc() {
        // 23:30 UTC on the 29th is already the 1st in UTC+8.
        let plus_eight = FixedOffset::east_opt(8 * 3600).unwrap();
        let local = plus_eight.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap();
        assert_eq!(CalendarDay::of(&local).to_string(), "2024-03-01");
    }

    #[test]
    fn day_serializes_as_plain_string() {
        let day = CalendarDay::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2025-01-02\"");
        let back: CalendarDay = serde_json::from_str("\"2025-01-02\"").unwrap();
        assert_eq!(back, day);
    }

    #[test]
    fn time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn time_of_day_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TimeOfDay::Afternoon).unwrap(),
            "\"afternoon\""
        );
        let parsed: TimeOfDay = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(parsed, TimeOfDay::Evening);
    }
}
