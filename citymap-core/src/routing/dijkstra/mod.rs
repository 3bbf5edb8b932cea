//! Dijkstra searches over a [`RouteGraph`](crate::RouteGraph)

mod multi_criteria;
mod single;
mod state;

pub use multi_criteria::shortest_path_multi_criteria;
pub(crate) use single::dijkstra_arcs;
pub use single::shortest_path;
