//! Everything needed to run a query in one import

pub use crate::data::{bus_system, city_roads, planar_demo};
pub use crate::loading::{BuildOptions, build_graph, build_multi_weight_graph};
pub use crate::model::{ClockTime, Criterion, Network, RouteGraph, TimeWindow};
pub use crate::planner::{AlternativeStrategy, PlannedRoute, PlannerConfig, RoutePlanner};
pub use crate::routing::{
    Itinerary, ItineraryStep, MultiCriteriaResult, PathResult, RouteSummary, StepKind,
    compile_itinerary, enumerate_simple_paths, k_shortest_paths, shortest_path,
    shortest_path_multi_criteria,
};
pub use crate::{Error, Kilometers, LocationId, Minutes, RouteId};
