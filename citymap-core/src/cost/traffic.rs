//! Time-dependent traffic multipliers.
//!
//! A segment's multiplier comes from the first active congestion rule bound
//! to it; otherwise the network-wide [`TrafficModel`] decides.

use serde::{Deserialize, Serialize};

use crate::model::{ClockTime, Network, RoadType, TimeWindow, TrafficStatus};

/// Slowdown applied inside the default rush-hour bands
pub const RUSH_HOUR_MULTIPLIER: f64 = 1.35;

/// Network-wide traffic behaviour when no congestion rule applies
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum TrafficModel {
    /// No time-dependent slowdown
    #[default]
    Free,
    /// Flat multiplier inside fixed clock bands
    RushHour {
        bands: Vec<TimeWindow>,
        multiplier: f64,
    },
    /// Hour-of-day table with morning/evening peaks, lunch, late evening
    /// and a quiet night
    HourOfDay {
        #[serde(default)]
        road_type_sensitivity: bool,
    },
}

impl TrafficModel {
    /// Rush hour between 07:00-09:00 and 16:00-18:00
    pub fn rush_hour() -> Self {
        let band = |start, end| {
            TimeWindow::new(
                ClockTime::from_minutes(f64::from(start) * 60.0),
                ClockTime::from_minutes(f64::from(end) * 60.0),
            )
        };
        TrafficModel::RushHour {
            bands: vec![band(7, 9), band(16, 18)],
            multiplier: RUSH_HOUR_MULTIPLIER,
        }
    }

    pub fn base_multiplier(&self, at: ClockTime, road_type: Option<&RoadType>) -> f64 {
        match self {
            TrafficModel::Free => 1.0,
            TrafficModel::RushHour { bands, multiplier } => {
                if bands.iter().any(|band| band.contains(at)) {
                    *multiplier
                } else {
                    1.0
                }
            }
            TrafficModel::HourOfDay {
                road_type_sensitivity,
            } => {
                let base = hour_of_day_multiplier(at.hour());
                match road_type {
                    Some(road_type) if *road_type_sensitivity => {
                        base * road_type_factor(road_type)
                    }
                    _ => base,
                }
            }
        }
    }
}

/// Multiplier for a given hour of the day (0-23)
pub fn hour_of_day_multiplier(hour: u32) -> f64 {
    match hour {
        7..=9 => 1.8,
        17..=19 => 2.0,
        12..=13 => 1.3,
        20..=22 => 1.2,
        0..=5 => 0.8,
        _ => 1.0,
    }
}

/// Highways suffer less from congestion than local streets
pub fn road_type_factor(road_type: &RoadType) -> f64 {
    match road_type {
        RoadType::Highway => 0.9,
        RoadType::Local => 1.1,
        RoadType::Main | RoadType::Unknown => 1.0,
    }
}

impl TrafficStatus {
    pub fn multiplier(self) -> f64 {
        match self {
            TrafficStatus::Green => 1.0,
            TrafficStatus::Yellow => 1.5,
            TrafficStatus::Red => 2.5,
        }
    }
}

/// Traffic multiplier for the segment `from`-`to` at the given clock time
pub fn traffic_multiplier(
    network: &Network,
    from: &str,
    to: &str,
    at: ClockTime,
    road_type: Option<&RoadType>,
) -> f64 {
    network
        .congestion
        .iter()
        .find(|segment| segment.matches(from, to) && segment.is_active(at))
        .map_or_else(
            || network.traffic.base_multiplier(at, road_type),
            |segment| segment.multiplier,
        )
}

/// Human readable congestion level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Light,
    Normal,
    Heavy,
    VeryHeavy,
}

impl TrafficLevel {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier >= 1.8 {
            TrafficLevel::VeryHeavy
        } else if multiplier >= 1.3 {
            TrafficLevel::Heavy
        } else if multiplier >= 1.0 {
            TrafficLevel::Normal
        } else {
            TrafficLevel::Light
        }
    }
}
