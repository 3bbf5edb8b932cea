use serde::{Deserialize, Serialize};

use crate::loading::BuildOptions;
use crate::{Error, Kilometers, Minutes};

/// How alternatives to the best route are searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlternativeStrategy {
    /// Loopless deviation search, paths in weight order
    #[default]
    Deviation,
    /// Depth-first enumeration capped at `max_routes` paths
    Enumerate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Cap on the expected wait at a stop, in minutes. Rides waiting longer
    /// are left out of the search graph and displayed waits are clamped to
    /// it. `None` disables the cap.
    pub max_wait: Option<Minutes>,
    pub max_walk_distance: Option<Kilometers>,
    /// Number of routes returned, the best one included
    pub max_routes: usize,
    pub alternative_strategy: AlternativeStrategy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let options = BuildOptions::default();
        Self {
            max_wait: options.max_wait,
            max_walk_distance: options.max_walk_distance,
            max_routes: 3,
            alternative_strategy: AlternativeStrategy::default(),
        }
    }
}

impl PlannerConfig {
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for negative or non-finite limits and
    /// for `max_routes == 0`.
    pub fn validate(&self) -> Result<(), Error> {
        check_limit(self.max_wait, "max_wait")?;
        check_limit(self.max_walk_distance, "max_walk_distance")?;
        if self.max_routes == 0 {
            return Err(Error::InvalidConfig(
                "max_routes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            max_wait: self.max_wait,
            max_walk_distance: self.max_walk_distance,
        }
    }
}

fn check_limit(value: Option<f64>, name: &str) -> Result<(), Error> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(Error::InvalidConfig(format!(
            "{name} must be a non-negative number, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_build_options() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_wait, Some(15.0));
        assert_eq!(config.max_walk_distance, Some(1.0));
        assert_eq!(config.max_routes, 3);
        assert_eq!(config.alternative_strategy, AlternativeStrategy::Deviation);
        assert_eq!(config.build_options(), BuildOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: PlannerConfig =
            serde_json::from_str(r#"{"max_routes": 5, "alternative_strategy": "enumerate"}"#)
                .unwrap();
        assert_eq!(config.max_routes, 5);
        assert_eq!(config.alternative_strategy, AlternativeStrategy::Enumerate);
        assert_eq!(config.max_wait, Some(15.0));

        let uncapped: PlannerConfig = serde_json::from_str(r#"{"max_wait": null}"#).unwrap();
        assert_eq!(uncapped.max_wait, None);
        assert_eq!(uncapped.build_options().max_wait, None);
    }

    #[test]
    fn rejects_unusable_limits() {
        let negative = PlannerConfig {
            max_wait: Some(-1.0),
            ..PlannerConfig::default()
        };
        assert!(matches!(negative.validate(), Err(Error::InvalidConfig(_))));

        let nan = PlannerConfig {
            max_walk_distance: Some(f64::NAN),
            ..PlannerConfig::default()
        };
        assert!(matches!(nan.validate(), Err(Error::InvalidConfig(_))));

        let none = PlannerConfig {
            max_routes: 0,
            ..PlannerConfig::default()
        };
        assert!(matches!(none.validate(), Err(Error::InvalidConfig(_))));
    }
}
