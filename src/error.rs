use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] citymap_core::Error),
    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
}
