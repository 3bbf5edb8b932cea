//! Presentation boundary of the route planner: built-in networks,
//! serializable requests and responses, and JSON entry points for map
//! front ends.

mod error;
pub mod model;
pub mod routing;

pub use citymap_core::prelude;
pub use error::Error;
pub use model::{NetworkKind, NetworkSummary, load_network_json};
pub use routing::{RouteRequest, RouteResponse, compare_routes, find_route, find_route_json};
