use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, hash_map::Entry};
use log::{debug, warn};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::single::dijkstra_arcs;
use super::state::State;
use crate::model::{Criterion, RouteGraph};
use crate::routing::{MultiCriteriaResult, PathResult};

/// Best path between two locations under `criterion`, with time, fare,
/// distance and transfer totals.
///
/// Time and fare are minimized additively over the arc weights. Transfers
/// count route changes: a ride arc costs one when the previous ride on the
/// path used a different route, every other arc is free. Walking between
/// rides keeps the previous route.
///
/// Unknown endpoints yield [`MultiCriteriaResult::unreachable`] without
/// searching.
pub fn shortest_path_multi_criteria(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> MultiCriteriaResult {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        warn!("Route requested between unknown locations {start} and {end}");
        return MultiCriteriaResult::unreachable(criterion);
    };

    let found = match criterion {
        Criterion::Time | Criterion::Fare => {
            dijkstra_arcs(&graph.view(), source, target, criterion)
        }
        Criterion::Transfers => fewest_transfers(graph, source, target),
    };

    let Some((cost, arcs)) = found else {
        debug!("No {criterion} path from {start} to {end}");
        return MultiCriteriaResult::unreachable(criterion);
    };

    let mut path = PathResult::from_arcs(graph, source, arcs, criterion);
    path.total_weight = cost;
    MultiCriteriaResult::from_path(criterion, path)
}

/// Search label: a location together with the route of the last ride
/// taken to reach it
type Label<'a> = (NodeIndex, Option<&'a str>);

/// Dijkstra over labels rather than bare locations, so that reaching a stop
/// on one route never hides a cheaper continuation on another.
fn fewest_transfers(
    graph: &RouteGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(f64, Vec<EdgeIndex>)> {
    let mut labels: Vec<Label<'_>> = vec![(start, None)];
    let mut label_ids: HashMap<Label<'_>, usize> = HashMap::new();
    label_ids.insert((start, None), 0);
    let mut costs: Vec<f64> = vec![0.0];
    let mut predecessors: HashMap<usize, (usize, EdgeIndex)> = HashMap::new();
    let mut settled = FixedBitSet::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::new();

    heap.push(State::new(0.0, NodeIndex::new(0)));

    while let Some(State { cost, node: label }) = heap.pop() {
        let label = label.index();
        let (node, arrived_on) = labels[label];

        if node == target {
            let mut arcs = Vec::new();
            let mut current = label;
            while let Some(&(previous, edge)) = predecessors.get(&current) {
                arcs.push(edge);
                current = previous;
            }
            arcs.reverse();
            return Some((cost.0, arcs));
        }

        settled.grow(labels.len());
        if settled.put(label) {
            continue;
        }

        for edge in graph.graph.edges(node) {
            let ride = edge.weight().route_id();
            let change =
                matches!((arrived_on, ride), (Some(previous), Some(route)) if previous != route);
            let next_cost = cost.0 + if change { 1.0 } else { 0.0 };
            let next_label = (edge.target(), ride.or(arrived_on));

            let next = match label_ids.entry(next_label) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => {
                    labels.push(next_label);
                    costs.push(f64::INFINITY);
                    *entry.insert(labels.len() - 1)
                }
            };

            if settled.contains(next) || next_cost >= costs[next] {
                continue;
            }
            costs[next] = next_cost;
            predecessors.insert(next, (label, edge.id()));
            heap.push(State::new(next_cost, NodeIndex::new(next)));
        }
    }

    None
}
