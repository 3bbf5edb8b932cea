//! Directed, weighted arcs of the search graph

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::RoadType;
use crate::{Error, Kilometers, Minutes, RouteId};

/// Optimization objective of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[default]
    Time,
    Fare,
    Transfers,
}

impl Criterion {
    pub const ALL: [Criterion; 3] = [Criterion::Time, Criterion::Fare, Criterion::Transfers];
}

impl FromStr for Criterion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(Criterion::Time),
            "fare" => Ok(Criterion::Fare),
            "transfers" => Ok(Criterion::Transfers),
            other => Err(Error::InvalidConfig(format!("unknown criterion '{other}'"))),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Time => "time",
            Criterion::Fare => "fare",
            Criterion::Transfers => "transfers",
        };
        f.write_str(name)
    }
}

/// Realized weight of an arc under each criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcWeights {
    pub time: f64,
    pub fare: f64,
    pub transfers: f64,
}

impl ArcWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Time => self.time,
            Criterion::Fare => self.fare,
            Criterion::Transfers => self.transfers,
        }
    }
}

/// What traversing an arc means for the traveller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ArcKind {
    Walk {
        distance: Kilometers,
        time: Minutes,
    },
    Ride {
        route_id: RouteId,
        fare: f64,
        distance: Kilometers,
        /// In-vehicle time, traffic included
        time: Minutes,
        /// Expected wait before boarding, uncapped
        wait_time: Minutes,
        traffic_multiplier: f64,
    },
    Drive {
        road_type: RoadType,
        distance: Option<Kilometers>,
        time: Minutes,
        traffic_multiplier: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphArc {
    pub kind: ArcKind,
    pub weights: ArcWeights,
}

impl GraphArc {
    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.weights.get(criterion)
    }

    pub fn travel_time(&self) -> Minutes {
        match &self.kind {
            ArcKind::Walk { time, .. }
            | ArcKind::Ride { time, .. }
            | ArcKind::Drive { time, .. } => *time,
        }
    }

    pub fn distance(&self) -> Option<Kilometers> {
        match &self.kind {
            ArcKind::Walk { distance, .. } | ArcKind::Ride { distance, .. } => Some(*distance),
            ArcKind::Drive { distance, .. } => *distance,
        }
    }

    pub fn fare(&self) -> f64 {
        match &self.kind {
            ArcKind::Ride { fare, .. } => *fare,
            ArcKind::Walk { .. } | ArcKind::Drive { .. } => 0.0,
        }
    }

    /// Route of a ride arc, `None` for every other kind
    pub fn route_id(&self) -> Option<&str> {
        match &self.kind {
            ArcKind::Ride { route_id, .. } => Some(route_id),
            ArcKind::Walk { .. } | ArcKind::Drive { .. } => None,
        }
    }

    pub fn wait_time(&self) -> Minutes {
        match &self.kind {
            ArcKind::Ride { wait_time, .. } => *wait_time,
            ArcKind::Walk { .. } | ArcKind::Drive { .. } => 0.0,
        }
    }

    pub fn is_walk(&self) -> bool {
        matches!(self.kind, ArcKind::Walk { .. })
    }
}
