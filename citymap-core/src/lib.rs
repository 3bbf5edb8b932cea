//! Multi-criteria route search over small hand-authored city networks.
//!
//! A query flows through four stages: the static [`Network`] is turned into
//! a weighted [`RouteGraph`] for one optimization [`Criterion`] and departure
//! time, the graph is searched with Dijkstra (or one of the alternative-route
//! searches), and the resulting path is compiled into a step-by-step
//! [`Itinerary`]. [`RoutePlanner`] wires the stages together.

pub mod cost;
pub mod data;
mod error;
pub mod loading;
pub mod model;
pub mod planner;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{BuildOptions, build_graph, build_multi_weight_graph};
pub use model::{
    ArcKind, ArcWeights, ClockTime, Criterion, DistanceMetric, GraphArc, GraphView, Location,
    Network, RouteGraph, TimeWindow, TransitRoute,
};
pub use planner::{
    Alternative, AlternativeStrategy, ComparedRoute, PlannedRoute, PlannerConfig, RouteDifference,
    RoutePlanner,
};
pub use routing::{
    Itinerary, ItineraryStep, MultiCriteriaResult, PathResult, RouteSummary, StepKind,
    compile_itinerary, enumerate_simple_paths, k_shortest_paths, path_weight, shortest_path,
    shortest_path_multi_criteria,
};

/// Identifier of a location (stop, intersection, landmark)
pub type LocationId = String;
/// Identifier of a transit route
pub type RouteId = String;
/// Durations and clock offsets, in minutes
pub type Minutes = f64;
/// Distances, in kilometres
pub type Kilometers = f64;
