//! Static network components - locations, road segments, walking links
//! and congestion rules

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::model::{ClockTime, TimeWindow};
use crate::{Kilometers, LocationId, Minutes};

/// A named place on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Planar `x/y` or geographic `lng/lat`, depending on the network metric
    pub geometry: Point<f64>,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geometry: Point::new(x, y),
        }
    }

    /// Geographic location from latitude and longitude
    pub fn from_lat_lng(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self::new(id, name, lng, lat)
    }
}

/// How distances between location coordinates are measured.
///
/// A network uses exactly one metric for every segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Straight-line distance on planar coordinates, in coordinate units
    #[default]
    Euclidean,
    /// Great-circle distance on `lng/lat` coordinates
    Haversine,
    /// Degree-to-km linear approximation on `lng/lat` coordinates
    Equirectangular,
}

/// Road classification, used to pick a nominal speed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadType {
    Highway,
    #[default]
    Main,
    Local,
    /// Anything the speed table does not know about
    #[serde(other)]
    Unknown,
}

/// Observed congestion on a single road segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficStatus {
    #[default]
    Green,
    Yellow,
    Red,
}

/// Base traversal cost of a road segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentCost {
    /// Nominal traversal time, used as-is
    BaseTime(Minutes),
    /// Segment length, converted to time with the road type speed
    Distance(Kilometers),
    /// Length derived from the endpoint coordinates
    Measured,
}

/// Undirected road between two locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub from: LocationId,
    pub to: LocationId,
    pub cost: SegmentCost,
    #[serde(default)]
    pub road_type: RoadType,
    #[serde(default)]
    pub traffic_status: Option<TrafficStatus>,
}

impl RoadSegment {
    pub fn new(
        from: impl Into<LocationId>,
        to: impl Into<LocationId>,
        cost: SegmentCost,
        road_type: RoadType,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
            road_type,
            traffic_status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: TrafficStatus) -> Self {
        self.traffic_status = Some(status);
        self
    }
}

/// Pedestrian link between two nearby stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkingConnection {
    pub from: LocationId,
    pub to: LocationId,
    pub distance: Kilometers,
    /// Explicit walking time; derived from the distance when absent
    #[serde(default)]
    pub walking_time: Option<Minutes>,
}

impl WalkingConnection {
    pub fn new(
        from: impl Into<LocationId>,
        to: impl Into<LocationId>,
        distance: Kilometers,
        walking_time: Minutes,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            walking_time: Some(walking_time),
        }
    }
}

/// Congestion rule bound to one segment, in either direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionSegment {
    pub from: LocationId,
    pub to: LocationId,
    #[serde(default)]
    pub condition: Option<String>,
    pub multiplier: f64,
    pub active_hours: Vec<TimeWindow>,
}

impl CongestionSegment {
    pub fn matches(&self, from: &str, to: &str) -> bool {
        (self.from == from && self.to == to) || (self.from == to && self.to == from)
    }

    pub fn is_active(&self, at: ClockTime) -> bool {
        self.active_hours.iter().any(|window| window.contains(at))
    }
}
