//! Time-of-day values used for departures, arrivals and congestion windows.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{Error, Minutes};

/// Clock time as minutes since midnight, always in `[0, 1440)`.
///
/// Arithmetic wraps around midnight, so adding 90 minutes to `23:00`
/// yields `00:30`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(Minutes);

impl ClockTime {
    pub const MINUTES_PER_DAY: Minutes = 24.0 * 60.0;
    pub const MIDNIGHT: ClockTime = ClockTime(0.0);

    /// Wraps any minute offset into a clock time.
    pub fn from_minutes(minutes: Minutes) -> Self {
        let wrapped = minutes.rem_euclid(Self::MINUTES_PER_DAY);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if wrapped >= Self::MINUTES_PER_DAY {
            Self::MIDNIGHT
        } else {
            Self(wrapped)
        }
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self::from)
    }

    /// Parses `HH:MM`, `H:MM` or `HH:MM:SS`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::from)
            .map_err(|e| Error::InvalidTime(format!("'{s}': {e}")))
    }

    pub fn minutes(self) -> Minutes {
        self.0
    }

    /// Hour of day, 0-23
    pub fn hour(self) -> u32 {
        (self.0 / 60.0).floor() as u32 % 24
    }

    #[must_use]
    pub fn add_minutes(self, minutes: Minutes) -> Self {
        Self::from_minutes(self.0 + minutes)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        let seconds = (self.0 * 60.0).round() as u32 % 86_400;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default()
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self(f64::from(time.num_seconds_from_midnight()) / 60.0)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = (self.0.round() as u32) % 1440;
        write!(f, "{:02}:{:02}", total / 60, total % 60)
    }
}

/// Inclusive time window written as `HH:MM-HH:MM`.
///
/// A window whose end precedes its start wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: ClockTime) -> bool {
        if self.start <= self.end {
            self.start <= at && at <= self.end
        } else {
            at >= self.start || at <= self.end
        }
    }
}

impl FromStr for TimeWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidTime(format!("'{s}' is not a HH:MM-HH:MM window")))?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

impl TryFrom<String> for TimeWindow {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeWindow> for String {
    fn from(window: TimeWindow) -> Self {
        window.to_string()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_formats() {
        assert_eq!(ClockTime::parse("08:00").unwrap().minutes(), 480.0);
        assert_eq!(ClockTime::parse("7:05").unwrap().minutes(), 425.0);
        assert_eq!(ClockTime::parse("16:30:30").unwrap().minutes(), 990.5);
        assert!(ClockTime::parse("25:00").is_err());
        assert!(ClockTime::parse("noon").is_err());
    }

    #[test]
    fn wraps_past_midnight() {
        let late = ClockTime::from_hm(23, 0).unwrap();
        let next = late.add_minutes(90.0);
        assert_eq!(next.to_string(), "00:30");
        assert_eq!(next.hour(), 0);
        assert_eq!(ClockTime::from_minutes(-30.0).to_string(), "23:30");
    }

    #[test]
    fn converts_to_naive_time() {
        let time = ClockTime::from_hm(14, 45).unwrap();
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_opt(14, 45, 0).unwrap()
        );
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window: TimeWindow = "07:00-09:00".parse().unwrap();
        assert!(window.contains(ClockTime::from_hm(7, 0).unwrap()));
        assert!(window.contains(ClockTime::from_hm(9, 0).unwrap()));
        assert!(!window.contains(ClockTime::from_hm(9, 1).unwrap()));
        assert_eq!(window.to_string(), "07:00-09:00");
    }

    #[test]
    fn window_can_wrap_midnight() {
        let window: TimeWindow = "22:00-02:00".parse().unwrap();
        assert!(window.contains(ClockTime::from_hm(23, 30).unwrap()));
        assert!(window.contains(ClockTime::from_hm(1, 0).unwrap()));
        assert!(!window.contains(ClockTime::from_hm(12, 0).unwrap()));
    }

    #[test]
    fn rejects_malformed_window() {
        assert!("07:00".parse::<TimeWindow>().is_err());
        assert!("07:00-xx".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let time: ClockTime = serde_json::from_str("\"06:15\"").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"06:15\"");
    }
}
