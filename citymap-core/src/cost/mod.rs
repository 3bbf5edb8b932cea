//! Pure cost functions: distances, travel and wait times, traffic multipliers

pub mod distance;
pub mod speed;
pub mod traffic;

pub use distance::distance;
pub use speed::{capped_wait_time, travel_time, wait_time, walking_time};
pub use traffic::{TrafficLevel, TrafficModel, traffic_multiplier};
