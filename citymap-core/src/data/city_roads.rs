use crate::model::{
    DistanceMetric, Location, Network, RoadSegment, RoadType, SegmentCost, TrafficStatus,
};

const NODES: [(&str, f64, f64); 16] = [
    ("A", 10.762622, 106.660172),
    ("B", 10.772622, 106.680172),
    ("C", 10.752622, 106.670172),
    ("D", 10.782622, 106.690172),
    ("E", 10.792622, 106.700172),
    ("F", 10.742622, 106.660172),
    ("G", 10.802622, 106.710172),
    ("H", 10.812622, 106.720172),
    ("I", 10.732622, 106.650172),
    ("J", 10.722622, 106.640172),
    ("K", 10.752622, 106.630172),
    ("L", 10.792622, 106.650172),
    ("M", 10.812622, 106.680172),
    ("N", 10.822622, 106.700172),
    ("O", 10.742622, 106.690172),
    ("P", 10.772622, 106.640172),
];

#[rustfmt::skip]
const ROADS: [(&str, &str, f64, RoadType, TrafficStatus); 25] = [
    ("A", "B", 2.5, RoadType::Main, TrafficStatus::Green),
    ("A", "C", 1.8, RoadType::Local, TrafficStatus::Yellow),
    ("A", "I", 2.2, RoadType::Local, TrafficStatus::Green),
    ("B", "D", 1.5, RoadType::Main, TrafficStatus::Green),
    ("B", "E", 3.2, RoadType::Highway, TrafficStatus::Green),
    ("B", "L", 2.8, RoadType::Main, TrafficStatus::Yellow),
    ("C", "D", 2.8, RoadType::Local, TrafficStatus::Red),
    ("C", "F", 2.0, RoadType::Local, TrafficStatus::Yellow),
    ("C", "K", 1.5, RoadType::Local, TrafficStatus::Green),
    ("D", "G", 2.2, RoadType::Main, TrafficStatus::Green),
    ("D", "O", 1.8, RoadType::Local, TrafficStatus::Yellow),
    ("E", "H", 1.8, RoadType::Highway, TrafficStatus::Green),
    ("E", "M", 2.0, RoadType::Main, TrafficStatus::Green),
    ("F", "G", 3.5, RoadType::Local, TrafficStatus::Red),
    ("F", "I", 1.2, RoadType::Local, TrafficStatus::Green),
    ("G", "H", 2.0, RoadType::Main, TrafficStatus::Yellow),
    ("G", "N", 2.5, RoadType::Main, TrafficStatus::Green),
    ("H", "N", 1.5, RoadType::Highway, TrafficStatus::Green),
    ("I", "J", 1.3, RoadType::Local, TrafficStatus::Yellow),
    ("I", "K", 2.0, RoadType::Local, TrafficStatus::Green),
    ("J", "K", 1.8, RoadType::Local, TrafficStatus::Red),
    ("K", "P", 2.2, RoadType::Local, TrafficStatus::Yellow),
    ("L", "P", 1.5, RoadType::Main, TrafficStatus::Green),
    ("M", "N", 1.2, RoadType::Main, TrafficStatus::Green),
    ("O", "F", 1.0, RoadType::Local, TrafficStatus::Yellow),
];

/// Sixteen intersections in Ho Chi Minh City with measured road lengths and
/// the traffic status observed on each road.
pub fn city_roads() -> Network {
    let mut network = Network::new("city-roads", DistanceMetric::Equirectangular);
    network.locations = NODES
        .iter()
        .map(|(id, lat, lng)| Location::from_lat_lng(*id, format!("Point {id}"), *lat, *lng))
        .collect();
    network.roads = ROADS
        .iter()
        .map(|(from, to, km, road_type, status)| {
            RoadSegment::new(*from, *to, SegmentCost::Distance(*km), road_type.clone())
                .with_status(*status)
        })
        .collect();
    network
}
