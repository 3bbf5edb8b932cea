use log::debug;

use crate::model::RoadType;
use crate::{Kilometers, Minutes};

pub const HIGHWAY_SPEED: f64 = 100.0;
pub const MAIN_ROAD_SPEED: f64 = 60.0;
pub const LOCAL_ROAD_SPEED: f64 = 40.0;
/// Vehicle speed for routes without a configured one
pub const DEFAULT_VEHICLE_SPEED: f64 = 40.0;
/// Headway in minutes for routes without a configured frequency
pub const DEFAULT_FREQUENCY_MINUTES: Minutes = 15.0;
/// Fare for routes without a configured one
pub const DEFAULT_FARE: f64 = 0.0;
pub const WALKING_SPEED: f64 = 5.0;

impl RoadType {
    /// Nominal speed in km/h; unknown road types drive like main roads
    pub fn speed(&self) -> f64 {
        match self {
            RoadType::Highway => HIGHWAY_SPEED,
            RoadType::Main => MAIN_ROAD_SPEED,
            RoadType::Local => LOCAL_ROAD_SPEED,
            RoadType::Unknown => {
                debug!("No speed configured for road type, using main road speed");
                MAIN_ROAD_SPEED
            }
        }
    }
}

/// Minutes needed to cover `distance` at `speed` km/h.
///
/// Non-positive or non-finite speeds fall back to [`DEFAULT_VEHICLE_SPEED`].
pub fn travel_time(distance: Kilometers, speed: f64) -> Minutes {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        debug!("Invalid speed {speed}, using default {DEFAULT_VEHICLE_SPEED} km/h");
        DEFAULT_VEHICLE_SPEED
    };
    distance / speed * 60.0
}

pub fn walking_time(distance: Kilometers) -> Minutes {
    travel_time(distance, WALKING_SPEED)
}

/// Expected wait for a service running every `frequency` minutes,
/// assuming passengers arrive uniformly.
pub fn wait_time(frequency: Minutes) -> Minutes {
    frequency / 2.0
}

/// Wait time as displayed to the user, clamped to the configured maximum
pub fn capped_wait_time(wait: Minutes, max_wait: Option<Minutes>) -> Minutes {
    match max_wait {
        Some(max) => wait.min(max),
        None => wait,
    }
}
