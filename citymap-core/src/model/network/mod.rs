//! Static network description: locations, roads, transit routes, walking
//! links and congestion rules.
//!
//! A [`Network`] is immutable reference data. Every query derives its own
//! [`RouteGraph`](crate::RouteGraph) from it.

pub mod components;

use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

pub use components::{
    CongestionSegment, DistanceMetric, Location, RoadSegment, RoadType, SegmentCost,
    TrafficStatus, WalkingConnection,
};

use crate::cost::{self, TrafficModel};
use crate::model::TransitRoute;
use crate::{Error, Kilometers};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    #[serde(default)]
    pub metric: DistanceMetric,
    pub locations: Vec<Location>,
    #[serde(default)]
    pub roads: Vec<RoadSegment>,
    #[serde(default)]
    pub routes: Vec<TransitRoute>,
    #[serde(default)]
    pub walking: Vec<WalkingConnection>,
    #[serde(default)]
    pub congestion: Vec<CongestionSegment>,
    #[serde(default)]
    pub traffic: TrafficModel,
}

impl Network {
    pub fn new(name: impl Into<String>, metric: DistanceMetric) -> Self {
        Self {
            name: name.into(),
            metric,
            ..Self::default()
        }
    }

    /// Parses and validates a network description
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the network fails
    /// [`Network::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let network: Network = serde_json::from_str(json)?;
        network.validate()?;
        Ok(network)
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.location(id).is_some()
    }

    pub fn route(&self, id: &str) -> Option<&TransitRoute> {
        self.routes.iter().find(|route| route.id == id)
    }

    /// Distance between two known locations under the network metric
    pub fn distance_between(&self, from: &str, to: &str) -> Option<Kilometers> {
        let from = self.location(from)?;
        let to = self.location(to)?;
        Some(cost::distance(self.metric, from.geometry, to.geometry))
    }

    /// Checks that every referenced location exists and that numeric
    /// attributes are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        let mut ids = HashSet::with_capacity(self.locations.len());
        for location in &self.locations {
            if !ids.insert(location.id.as_str()) {
                return Err(Error::InvalidData(format!(
                    "duplicate location id '{}'",
                    location.id
                )));
            }
        }

        let known = |id: &str, context: &str| {
            if ids.contains(id) {
                Ok(())
            } else {
                Err(Error::InvalidData(format!(
                    "{context} references unknown location '{id}'"
                )))
            }
        };

        for road in &self.roads {
            known(road.from.as_str(), "road segment")?;
            known(road.to.as_str(), "road segment")?;
            let cost = match road.cost {
                SegmentCost::BaseTime(value) | SegmentCost::Distance(value) => value,
                SegmentCost::Measured => 0.0,
            };
            ensure_non_negative(cost, "road segment cost")?;
        }

        for route in &self.routes {
            for stop in &route.stops {
                known(stop.as_str(), &format!("route {}", route.id))?;
            }
            ensure_non_negative(route.frequency, "route frequency")?;
            ensure_non_negative(route.fare, "route fare")?;
            if route.speed.is_none() {
                debug!("Route {} has no speed, default speed will be used", route.id);
            }
        }

        for connection in &self.walking {
            known(connection.from.as_str(), "walking connection")?;
            known(connection.to.as_str(), "walking connection")?;
            ensure_non_negative(connection.distance, "walking distance")?;
            if let Some(time) = connection.walking_time {
                ensure_non_negative(time, "walking time")?;
            }
        }

        for segment in &self.congestion {
            known(segment.from.as_str(), "congestion segment")?;
            known(segment.to.as_str(), "congestion segment")?;
            ensure_non_negative(segment.multiplier, "congestion multiplier")?;
        }

        Ok(())
    }
}

fn ensure_non_negative(value: f64, what: &str) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "{what} must be a non-negative number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_network() -> Network {
        let mut network = Network::new("small", DistanceMetric::Euclidean);
        network.locations = vec![
            Location::new("a", "A", 0.0, 0.0),
            Location::new("b", "B", 3.0, 4.0),
        ];
        network.roads = vec![RoadSegment::new(
            "a",
            "b",
            SegmentCost::BaseTime(5.0),
            RoadType::Main,
        )];
        network
    }

    #[test]
    fn valid_network_passes() {
        assert!(small_network().validate().is_ok());
    }

    #[test]
    fn unknown_reference_is_rejected() {
        let mut network = small_network();
        network.routes = vec![TransitRoute::new("R1", "1", &["a", "z"], 10.0, 1.0)];
        let err = network.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidData(msg) if msg.contains("'z'")));
    }

    #[test]
    fn duplicate_location_is_rejected() {
        let mut network = small_network();
        network.locations.push(Location::new("a", "Again", 1.0, 1.0));
        assert!(network.validate().is_err());
    }

    #[test]
    fn negative_cost_is_rejected() {
        let mut network = small_network();
        network.roads[0].cost = SegmentCost::BaseTime(-1.0);
        assert!(network.validate().is_err());
    }

    #[test]
    fn distance_uses_network_metric() {
        let network = small_network();
        assert_eq!(network.distance_between("a", "b"), Some(5.0));
        assert_eq!(network.distance_between("a", "missing"), None);
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "name": "json",
            "metric": "euclidean",
            "locations": [
                {"id": "a", "name": "A", "geometry": {"x": 0.0, "y": 0.0}},
                {"id": "b", "name": "B", "geometry": {"x": 1.0, "y": 0.0}}
            ],
            "roads": [
                {"from": "a", "to": "b", "cost": {"base_time": 2.0}, "road_type": "dirt_track"}
            ]
        }"#;
        let network = Network::from_json_str(json).unwrap();
        assert_eq!(network.roads[0].road_type, RoadType::Unknown);
        assert_eq!(network.traffic, TrafficModel::Free);
        assert!(network.contains("b"));
    }

    #[test]
    fn routes_load_without_fare_or_frequency() {
        let json = r#"{
            "name": "sparse",
            "locations": [
                {"id": "a", "name": "A", "geometry": {"x": 0.0, "y": 0.0}},
                {"id": "b", "name": "B", "geometry": {"x": 1.0, "y": 0.0}}
            ],
            "routes": [
                {"id": "R1", "name": "Route 1", "number": "1", "stops": ["a", "b"]}
            ]
        }"#;
        let network = Network::from_json_str(json).unwrap();
        let route = network.route("R1").unwrap();
        assert_eq!(route.fare, cost::speed::DEFAULT_FARE);
        assert_eq!(route.frequency, cost::speed::DEFAULT_FREQUENCY_MINUTES);
    }
}
