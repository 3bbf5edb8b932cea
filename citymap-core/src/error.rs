use thiserror::Error;

use crate::LocationId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown location: {0}")]
    InvalidEndpoint(LocationId),
    #[error("No path found from {from} to {to}")]
    NoPathFound { from: LocationId, to: LocationId },
    #[error("Cannot compile itinerary from {from} to {to}")]
    CompilationFailure { from: LocationId, to: LocationId },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid time value: {0}")]
    InvalidTime(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
