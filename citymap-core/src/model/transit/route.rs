//! Bus routes and their service attributes

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cost::speed::{DEFAULT_FARE, DEFAULT_FREQUENCY_MINUTES};
use crate::model::{ClockTime, TimeWindow};
use crate::{LocationId, Minutes, RouteId};

/// A transit line serving an ordered list of stops in both directions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    pub id: RouteId,
    pub name: String,
    /// Public line number, e.g. `"44"`
    pub number: String,
    #[serde(default)]
    pub color: Option<String>,
    pub stops: Vec<LocationId>,
    /// Minutes between consecutive departures,
    /// [`DEFAULT_FREQUENCY_MINUTES`] when absent
    #[serde(default = "default_frequency")]
    pub frequency: Minutes,
    /// Flat fare charged per ridden segment, [`DEFAULT_FARE`] when absent
    #[serde(default = "default_fare")]
    pub fare: f64,
    /// Nominal vehicle speed in km/h
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub operating_hours: Option<TimeWindow>,
}

fn default_frequency() -> Minutes {
    debug!("Route has no frequency, using {DEFAULT_FREQUENCY_MINUTES} min");
    DEFAULT_FREQUENCY_MINUTES
}

fn default_fare() -> f64 {
    debug!("Route has no fare, using {DEFAULT_FARE}");
    DEFAULT_FARE
}

impl TransitRoute {
    pub fn new(
        id: impl Into<RouteId>,
        number: impl Into<String>,
        stops: &[&str],
        frequency: Minutes,
        fare: f64,
    ) -> Self {
        let number = number.into();
        Self {
            id: id.into(),
            name: format!("Route {number}"),
            number,
            color: None,
            stops: stops.iter().map(|s| (*s).to_string()).collect(),
            frequency,
            fare,
            speed: None,
            operating_hours: None,
        }
    }

    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_operating_hours(mut self, hours: TimeWindow) -> Self {
        self.operating_hours = Some(hours);
        self
    }

    /// Consecutive stop pairs along the route
    pub fn segments(&self) -> impl Iterator<Item = (&LocationId, &LocationId)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Routes without configured hours are treated as always running
    pub fn is_active(&self, at: ClockTime) -> bool {
        self.operating_hours
            .is_none_or(|hours| hours.contains(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_follow_stop_order() {
        let route = TransitRoute::new("R1", "1", &["a", "b", "c"], 10.0, 5000.0);
        let pairs: Vec<_> = route
            .segments()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "b"), ("b", "c")]);
    }

    #[test]
    fn operating_hours_limit_activity() {
        let route = TransitRoute::new("R1", "1", &["a", "b"], 10.0, 5000.0)
            .with_operating_hours("05:00-19:30".parse().unwrap());
        assert!(route.is_active(ClockTime::from_hm(5, 0).unwrap()));
        assert!(route.is_active(ClockTime::from_hm(19, 30).unwrap()));
        assert!(!route.is_active(ClockTime::from_hm(20, 0).unwrap()));

        let always = TransitRoute::new("R2", "2", &["a", "b"], 10.0, 5000.0);
        assert!(always.is_active(ClockTime::from_hm(3, 0).unwrap()));
    }

    #[test]
    fn missing_fare_and_frequency_take_defaults() {
        let route: TransitRoute = serde_json::from_str(
            r#"{"id": "R9", "name": "Route 9", "number": "9", "stops": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(route.frequency, DEFAULT_FREQUENCY_MINUTES);
        assert_eq!(route.fare, DEFAULT_FARE);
        assert_eq!(route.speed, None);
    }
}
