use itertools::Itertools;
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde::Serialize;

use crate::model::{Criterion, GraphArc, RouteGraph};
use crate::{Kilometers, LocationId, Minutes};

/// A path through a [`RouteGraph`].
///
/// `nodes` always holds one more element than `arcs`, unless the path is
/// unreachable, in which case both are empty and `total_weight` is
/// infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub nodes: Vec<LocationId>,
    pub arcs: Vec<GraphArc>,
    /// Graph identities of `arcs`, distinguishing parallel arcs
    #[serde(skip)]
    pub(crate) arc_ids: Vec<EdgeIndex>,
    pub total_weight: f64,
}

impl PathResult {
    /// Sentinel returned when no path exists
    pub fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),
            arc_ids: Vec::new(),
            total_weight: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.nodes.is_empty()
    }

    pub fn arc_ids(&self) -> &[EdgeIndex] {
        &self.arc_ids
    }

    /// Builds a path from `start` following `arc_ids`, weighing every arc
    /// under `criterion`.
    pub(crate) fn from_arcs(
        graph: &RouteGraph,
        start: NodeIndex,
        arc_ids: Vec<EdgeIndex>,
        criterion: Criterion,
    ) -> Self {
        let mut nodes = Vec::with_capacity(arc_ids.len() + 1);
        let mut arcs = Vec::with_capacity(arc_ids.len());
        let mut total_weight = 0.0;

        nodes.push(graph.location_id(start).to_string());
        for &edge in &arc_ids {
            let (Some((_, target)), Some(arc)) =
                (graph.graph.edge_endpoints(edge), graph.arc(edge))
            else {
                continue;
            };
            nodes.push(graph.location_id(target).to_string());
            total_weight += arc.weight(criterion);
            arcs.push(arc.clone());
        }

        Self {
            nodes,
            arcs,
            arc_ids,
            total_weight,
        }
    }

    /// Node indices along the path, in travel order
    pub(crate) fn node_indices(&self, graph: &RouteGraph) -> Vec<NodeIndex> {
        self.nodes
            .iter()
            .filter_map(|id| graph.node_index(id))
            .collect()
    }

    /// Same stops visited with the same mode and route on every hop
    pub fn same_itinerary(&self, other: &PathResult) -> bool {
        self.nodes == other.nodes
            && self.arcs.len() == other.arcs.len()
            && self
                .arcs
                .iter()
                .zip(&other.arcs)
                .all(|(a, b)| {
                    std::mem::discriminant(&a.kind) == std::mem::discriminant(&b.kind)
                        && a.route_id() == b.route_id()
                })
    }
}

/// Outcome of a multi-criteria search.
///
/// `path.total_weight` is the minimized quantity. The totals are derived
/// from the arcs of the path: time counts in-vehicle and walking time plus
/// the expected wait whenever the ride changes to a different route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiCriteriaResult {
    pub criterion: Criterion,
    pub path: PathResult,
    pub total_time: Minutes,
    pub total_fare: f64,
    pub total_distance: Kilometers,
    /// Number of changes between distinct routes, `usize::MAX` when
    /// unreachable
    pub transfers: usize,
}

impl MultiCriteriaResult {
    pub fn unreachable(criterion: Criterion) -> Self {
        Self {
            criterion,
            path: PathResult::unreachable(),
            total_time: f64::INFINITY,
            total_fare: f64::INFINITY,
            total_distance: f64::INFINITY,
            transfers: usize::MAX,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.path.is_reachable()
    }

    pub(crate) fn from_path(criterion: Criterion, path: PathResult) -> Self {
        let mut total_time = 0.0;
        let mut total_fare = 0.0;
        let mut total_distance = 0.0;
        let mut transfers = 0;
        let mut current_route: Option<&str> = None;

        for arc in &path.arcs {
            if let Some(route_id) = arc.route_id() {
                if current_route.is_some_and(|current| current != route_id) {
                    transfers += 1;
                    total_time += arc.wait_time();
                }
                current_route = Some(route_id);
            }
            total_time += arc.travel_time();
            total_fare += arc.fare();
            total_distance += arc.distance().unwrap_or_default();
        }

        Self {
            criterion,
            path,
            total_time,
            total_fare,
            total_distance,
            transfers,
        }
    }
}

/// Total weight of an explicit node sequence, taking the cheapest arc
/// between each pair of consecutive nodes under the graph's criterion.
///
/// Returns `None` when two consecutive nodes are not connected.
pub fn path_weight<S: AsRef<str>>(graph: &RouteGraph, path: &[S]) -> Option<f64> {
    let criterion = graph.criterion();
    path.iter()
        .tuple_windows()
        .map(|(from, to)| {
            graph
                .arc_between(from.as_ref(), to.as_ref(), criterion)
                .map(|arc| arc.weight(criterion))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArcKind, ArcWeights};

    fn ride(route_id: &str, time: f64, wait: f64) -> GraphArc {
        GraphArc {
            kind: ArcKind::Ride {
                route_id: route_id.into(),
                fare: 6000.0,
                distance: 1.0,
                time,
                wait_time: wait,
                traffic_multiplier: 1.0,
            },
            weights: ArcWeights {
                time: time + wait,
                fare: 6000.0,
                transfers: 1.0,
            },
        }
    }

    fn walk(time: f64) -> GraphArc {
        GraphArc {
            kind: ArcKind::Walk {
                distance: 0.2,
                time,
            },
            weights: ArcWeights {
                time,
                fare: 0.0,
                transfers: 0.5,
            },
        }
    }

    fn path_of(arcs: Vec<GraphArc>) -> PathResult {
        let nodes = (0..=arcs.len()).map(|i| format!("n{i}")).collect();
        PathResult {
            nodes,
            arcs,
            arc_ids: Vec::new(),
            total_weight: 0.0,
        }
    }

    #[test]
    fn unreachable_sentinel() {
        let path = PathResult::unreachable();
        assert!(!path.is_reachable());
        assert!(path.total_weight.is_infinite());

        let result = MultiCriteriaResult::unreachable(Criterion::Fare);
        assert!(!result.is_reachable());
        assert_eq!(result.transfers, usize::MAX);
    }

    #[test]
    fn totals_charge_waits_on_route_changes() {
        let path = path_of(vec![
            ride("R1", 4.0, 7.5),
            ride("R1", 3.0, 7.5),
            walk(2.0),
            ride("R2", 5.0, 10.0),
        ]);
        let result = MultiCriteriaResult::from_path(Criterion::Time, path);
        assert_eq!(result.transfers, 1);
        assert_eq!(result.total_time, 4.0 + 3.0 + 2.0 + 10.0 + 5.0);
        assert_eq!(result.total_fare, 18000.0);
        assert!((result.total_distance - 3.2).abs() < 1e-9);
    }

    #[test]
    fn itinerary_identity_ignores_weights() {
        let a = path_of(vec![ride("R1", 4.0, 7.5), walk(2.0)]);
        let mut b = path_of(vec![ride("R1", 9.0, 7.5), walk(3.0)]);
        assert!(a.same_itinerary(&b));
        b.arcs[0] = ride("R2", 4.0, 7.5);
        assert!(!a.same_itinerary(&b));
    }
}
