//! Data model: static networks, clock values and the derived search graph

pub mod clock;
pub mod graph;
pub mod network;
pub mod transit;

pub use clock::{ClockTime, TimeWindow};
pub use graph::{ArcKind, ArcWeights, Criterion, GraphArc, GraphView, RouteGraph};
pub use network::{
    CongestionSegment, DistanceMetric, Location, Network, RoadSegment, RoadType, SegmentCost,
    TrafficStatus, WalkingConnection,
};
pub use transit::TransitRoute;
