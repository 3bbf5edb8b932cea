use serde::{Deserialize, Serialize};

use crate::{Kilometers, Minutes};

/// Default cap on the expected wait at a stop
pub const DEFAULT_MAX_WAIT: Minutes = 15.0;
/// Default upper bound for walking connections
pub const DEFAULT_MAX_WALK_DISTANCE: Kilometers = 1.0;

/// Knobs that decide which arcs make it into a search graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Ride arcs whose expected wait exceeds this value are left out.
    /// `None` keeps every ride arc.
    pub max_wait: Option<Minutes>,
    /// Walking connections longer than this are left out.
    /// `None` keeps every connection.
    pub max_walk_distance: Option<Kilometers>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_wait: Some(DEFAULT_MAX_WAIT),
            max_walk_distance: Some(DEFAULT_MAX_WALK_DISTANCE),
        }
    }
}

impl BuildOptions {
    /// Options that keep every arc of the network
    pub fn unrestricted() -> Self {
        Self {
            max_wait: None,
            max_walk_distance: None,
        }
    }

    #[must_use]
    pub fn with_max_wait(mut self, max_wait: Option<Minutes>) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Whether a ride with the given expected wait stays in the graph.
    ///
    /// A wait equal to the cap is still accepted.
    pub fn accepts_wait(&self, wait: Minutes) -> bool {
        self.max_wait.is_none_or(|max| wait <= max)
    }

    pub fn accepts_walk(&self, distance: Kilometers) -> bool {
        self.max_walk_distance.is_none_or(|max| distance <= max)
    }
}
