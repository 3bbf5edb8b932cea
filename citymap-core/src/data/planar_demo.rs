use crate::cost::TrafficModel;
use crate::model::{DistanceMetric, Location, Network, RoadSegment, RoadType, SegmentCost};

const NODES: [(&str, f64, f64); 8] = [
    ("A", 100.0, 80.0),
    ("B", 300.0, 100.0),
    ("C", 120.0, 260.0),
    ("D", 350.0, 260.0),
    ("E", 500.0, 150.0),
    ("F", 200.0, 350.0),
    ("G", 450.0, 320.0),
    ("H", 550.0, 250.0),
];

const ROADS: [(&str, &str, f64, RoadType); 10] = [
    ("A", "B", 5.0, RoadType::Main),
    ("A", "C", 4.0, RoadType::Local),
    ("B", "D", 3.0, RoadType::Main),
    ("B", "E", 6.0, RoadType::Highway),
    ("C", "D", 6.0, RoadType::Local),
    ("C", "F", 5.0, RoadType::Local),
    ("D", "G", 4.0, RoadType::Main),
    ("E", "H", 3.0, RoadType::Highway),
    ("F", "G", 7.0, RoadType::Local),
    ("G", "H", 4.0, RoadType::Main),
];

/// Eight points on a canvas joined by roads with literal base times.
///
/// Traffic follows the hour-of-day table, adjusted by road type.
pub fn planar_demo() -> Network {
    let mut network = Network::new("planar-demo", DistanceMetric::Euclidean);
    network.locations = NODES
        .iter()
        .map(|(id, x, y)| Location::new(*id, format!("Point {id}"), *x, *y))
        .collect();
    network.roads = ROADS
        .iter()
        .map(|(from, to, minutes, road_type)| {
            RoadSegment::new(*from, *to, SegmentCost::BaseTime(*minutes), road_type.clone())
        })
        .collect();
    network.traffic = TrafficModel::HourOfDay {
        road_type_sensitivity: true,
    };
    network
}
