//! Path searches over a [`RouteGraph`](crate::RouteGraph) and the
//! itineraries compiled from their results.

pub mod dijkstra;
mod enumerate;
pub mod itinerary;
mod k_shortest;
mod path;

pub use dijkstra::{shortest_path, shortest_path_multi_criteria};
pub use enumerate::enumerate_simple_paths;
pub use itinerary::{Itinerary, ItineraryStep, RouteSummary, StepKind, compile_itinerary};
pub use k_shortest::k_shortest_paths;
pub use path::{MultiCriteriaResult, PathResult, path_weight};
