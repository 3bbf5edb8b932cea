//! Route planning service: builds the search graph for a query, finds the
//! best path with alternatives and compiles them into itineraries.

mod config;

pub use config::{AlternativeStrategy, PlannerConfig};

use log::{debug, info};
use serde::Serialize;

use crate::cost::capped_wait_time;
use crate::loading::{build_graph, build_multi_weight_graph};
use crate::model::{ClockTime, Criterion, Network, RouteGraph};
use crate::routing::{
    Itinerary, PathResult, compile_itinerary, enumerate_simple_paths, k_shortest_paths,
    shortest_path_multi_criteria,
};
use crate::{Error, Minutes};

/// Summary deltas of an alternative relative to the best route.
///
/// Deltas compare the compiled itinerary summaries, where a wait is charged
/// once per route change. Alternatives are ranked by the search weight of
/// the planning criterion instead, which charges a wait on every ride arc
/// and scores walks under [`Criterion::Transfers`], so any delta can be
/// negative even for a lower ranked alternative. Positive values mean the
/// alternative is worse on that measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteDifference {
    pub time: Minutes,
    pub fare: f64,
    pub transfers: i64,
}

impl RouteDifference {
    #[allow(clippy::cast_possible_wrap)]
    fn between(best: &Itinerary, other: &Itinerary) -> Self {
        let (best, other) = (&best.summary, &other.summary);
        Self {
            time: other.total_time - best.total_time,
            fare: other.total_fare - best.total_fare,
            transfers: other.transfers as i64 - best.transfers as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternative {
    pub itinerary: Itinerary,
    pub difference: RouteDifference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedRoute {
    pub criterion: Criterion,
    pub best: Itinerary,
    pub alternatives: Vec<Alternative>,
}

/// Best itinerary under one criterion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparedRoute {
    pub criterion: Criterion,
    pub itinerary: Itinerary,
}

/// Answers route queries against one immutable network.
///
/// Every query builds its own search graph; the planner holds no state
/// besides the network and its configuration.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    network: Network,
    config: PlannerConfig,
}

impl RoutePlanner {
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if the network does not validate and
    /// [`Error::InvalidConfig`] for unusable settings.
    pub fn new(network: Network, config: PlannerConfig) -> Result<Self, Error> {
        network.validate()?;
        config.validate()?;
        Ok(Self { network, config })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Best route from `start` to `end` under `criterion`, with up to
    /// `max_routes - 1` alternatives. Alternatives that repeat the best
    /// route are dropped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEndpoint`] for unknown locations,
    /// [`Error::NoPathFound`] when the locations are not connected and
    /// [`Error::CompilationFailure`] when the best path yields no steps.
    pub fn find_optimal_route(
        &self,
        start: &str,
        end: &str,
        criterion: Criterion,
        departure: ClockTime,
    ) -> Result<PlannedRoute, Error> {
        self.ensure_known(start)?;
        self.ensure_known(end)?;

        let graph = build_graph(
            &self.network,
            criterion,
            departure,
            &self.config.build_options(),
        )?;

        let result = shortest_path_multi_criteria(&graph, start, end, criterion);
        if !result.is_reachable() {
            return Err(no_path(start, end));
        }
        let best = self.compile(&result.path, start, end, departure)?;

        let alternatives = self
            .alternative_paths(&graph, start, end)
            .into_iter()
            .filter(|path| !path.same_itinerary(&result.path))
            .take(self.config.max_routes - 1)
            .filter_map(|path| {
                let itinerary =
                    compile_itinerary(&self.network, &path, departure, self.config.max_wait)?;
                Some(Alternative {
                    difference: RouteDifference::between(&best, &itinerary),
                    itinerary,
                })
            })
            .collect::<Vec<_>>();

        info!(
            "Planned {start} -> {end} by {criterion} at {departure}: {:.1} min, {} alternatives",
            best.summary.total_time,
            alternatives.len()
        );

        Ok(PlannedRoute {
            criterion,
            best,
            alternatives,
        })
    }

    /// Best itinerary for each criterion, all searched on one multi-weight
    /// graph.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RoutePlanner::find_optimal_route`].
    pub fn compare_criteria(
        &self,
        start: &str,
        end: &str,
        departure: ClockTime,
    ) -> Result<Vec<ComparedRoute>, Error> {
        self.ensure_known(start)?;
        self.ensure_known(end)?;

        let graph =
            build_multi_weight_graph(&self.network, departure, &self.config.build_options())?;

        Criterion::ALL
            .into_iter()
            .map(|criterion| {
                let result = shortest_path_multi_criteria(&graph, start, end, criterion);
                if !result.is_reachable() {
                    return Err(no_path(start, end));
                }
                let itinerary = self.compile(&result.path, start, end, departure)?;
                Ok(ComparedRoute {
                    criterion,
                    itinerary,
                })
            })
            .collect()
    }

    /// Whether the route runs at `at`. Unknown routes never run.
    pub fn is_route_active(&self, route_id: &str, at: ClockTime) -> bool {
        self.network
            .route(route_id)
            .is_some_and(|route| route.is_active(at))
    }

    /// Wait time as shown to the user, clamped to the configured cap
    pub fn wait_time_for_display(&self, raw: Minutes) -> Minutes {
        capped_wait_time(raw, self.config.max_wait)
    }

    fn alternative_paths(&self, graph: &RouteGraph, start: &str, end: &str) -> Vec<PathResult> {
        let wanted = self.config.max_routes;
        if wanted < 2 {
            return Vec::new();
        }
        debug!(
            "Searching alternatives {start} -> {end} with {:?}",
            self.config.alternative_strategy
        );
        match self.config.alternative_strategy {
            AlternativeStrategy::Deviation => k_shortest_paths(graph, start, end, wanted),
            AlternativeStrategy::Enumerate => enumerate_simple_paths(graph, start, end, wanted),
        }
    }

    fn compile(
        &self,
        path: &PathResult,
        start: &str,
        end: &str,
        departure: ClockTime,
    ) -> Result<Itinerary, Error> {
        compile_itinerary(&self.network, path, departure, self.config.max_wait).ok_or_else(|| {
            Error::CompilationFailure {
                from: start.to_string(),
                to: end.to_string(),
            }
        })
    }

    fn ensure_known(&self, id: &str) -> Result<(), Error> {
        if self.network.contains(id) {
            Ok(())
        } else {
            Err(Error::InvalidEndpoint(id.to_string()))
        }
    }
}

fn no_path(start: &str, end: &str) -> Error {
    Error::NoPathFound {
        from: start.to_string(),
        to: end.to_string(),
    }
}
