use std::fmt;
use std::str::FromStr;

use citymap_core::data::{bus_system, city_roads, planar_demo};
use citymap_core::{DistanceMetric, Network};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Networks shipped with the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkKind {
    PlanarDemo,
    CityRoads,
    BusSystem,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 3] = [
        NetworkKind::PlanarDemo,
        NetworkKind::CityRoads,
        NetworkKind::BusSystem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NetworkKind::PlanarDemo => "planar-demo",
            NetworkKind::CityRoads => "city-roads",
            NetworkKind::BusSystem => "bus-system",
        }
    }

    pub fn load(self) -> Network {
        match self {
            NetworkKind::PlanarDemo => planar_demo(),
            NetworkKind::CityRoads => city_roads(),
            NetworkKind::BusSystem => bus_system(),
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownNetwork(s.to_string()))
    }
}

/// Parses a custom network description
///
/// # Errors
///
/// Returns an error if the JSON is malformed or describes an inconsistent
/// network.
pub fn load_network_json(json: &str) -> Result<Network, Error> {
    Ok(Network::from_json_str(json)?)
}

/// Overview of a network for pickers and map legends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub name: String,
    pub metric: DistanceMetric,
    pub locations: Vec<LocationEntry>,
    pub routes: Vec<RouteEntry>,
    pub road_count: usize,
    pub walking_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationEntry {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub id: String,
    pub number: String,
    pub name: String,
    pub color: Option<String>,
    pub stops: Vec<String>,
}

impl From<&Network> for NetworkSummary {
    fn from(network: &Network) -> Self {
        Self {
            name: network.name.clone(),
            metric: network.metric,
            locations: network
                .locations
                .iter()
                .map(|location| LocationEntry {
                    id: location.id.clone(),
                    name: location.name.clone(),
                    x: location.geometry.x(),
                    y: location.geometry.y(),
                })
                .collect(),
            routes: network
                .routes
                .iter()
                .map(|route| RouteEntry {
                    id: route.id.clone(),
                    number: route.number.clone(),
                    name: route.name.clone(),
                    color: route.color.clone(),
                    stops: route.stops.clone(),
                })
                .collect(),
            road_count: network.roads.len(),
            walking_count: network.walking.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in NetworkKind::ALL {
            assert_eq!(kind.to_string().parse::<NetworkKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
        assert_eq!(
            " Bus-System ".parse::<NetworkKind>().unwrap(),
            NetworkKind::BusSystem
        );
        assert!(matches!(
            "metro".parse::<NetworkKind>(),
            Err(Error::UnknownNetwork(name)) if name == "metro"
        ));
    }

    #[test]
    fn builtin_networks_load() {
        for kind in NetworkKind::ALL {
            let network = kind.load();
            assert!(network.validate().is_ok(), "{kind} does not validate");
            assert!(!network.locations.is_empty());
        }
    }

    #[test]
    fn custom_network_from_json() {
        let json = serde_json::to_string(&NetworkKind::BusSystem.load()).unwrap();
        let network = load_network_json(&json).unwrap();
        let summary = NetworkSummary::from(&network);
        assert_eq!(summary.locations.len(), 17);
        assert_eq!(summary.routes.len(), 8);
        assert_eq!(summary.walking_count, 8);

        assert!(matches!(
            load_network_json("{\"locations\": 3}"),
            Err(Error::Core(_))
        ));
    }
}
