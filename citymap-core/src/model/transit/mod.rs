//! Transit routes served by the network

pub mod route;

pub use route::TransitRoute;
