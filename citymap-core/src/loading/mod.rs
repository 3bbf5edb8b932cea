//! Turns a static [`Network`](crate::Network) into a weighted search graph
//! for one query.

mod builder;
mod config;

pub use builder::{build_graph, build_multi_weight_graph};
pub use config::BuildOptions;
