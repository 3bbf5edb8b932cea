use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, hash_map::Entry};
use log::{debug, warn};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::state::State;
use crate::model::{Criterion, GraphView, RouteGraph};
use crate::routing::PathResult;

/// Shortest path between two locations under the graph's criterion.
///
/// Unknown endpoints and disconnected pairs both yield
/// [`PathResult::unreachable`]. A location reaches itself with an empty arc
/// list and zero weight.
pub fn shortest_path(graph: &RouteGraph, start: &str, end: &str) -> PathResult {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        warn!("Shortest path requested between unknown locations {start} and {end}");
        return PathResult::unreachable();
    };

    let criterion = graph.criterion();
    match dijkstra_arcs(&graph.view(), source, target, criterion) {
        Some((_, arcs)) => PathResult::from_arcs(graph, source, arcs, criterion),
        None => {
            debug!("No path from {start} to {end}");
            PathResult::unreachable()
        }
    }
}

/// Dijkstra from `start` to `target` over the visible part of `view`.
///
/// Returns the total cost and the arcs of the path, or `None` once the
/// frontier is exhausted without settling `target`.
pub(crate) fn dijkstra_arcs(
    view: &GraphView<'_>,
    start: NodeIndex,
    target: NodeIndex,
    criterion: Criterion,
) -> Option<(f64, Vec<EdgeIndex>)> {
    let node_count = view.graph().node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(node_count);
    let mut predecessors: HashMap<NodeIndex, (NodeIndex, EdgeIndex)> =
        HashMap::with_capacity(node_count);
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::new();

    distances.insert(start, 0.0);
    heap.push(State::new(0.0, start));

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            return Some((cost.0, walk_back(&predecessors, start, target)));
        }

        // Stale heap entry for an already finalized node
        if settled.put(node.index()) {
            continue;
        }

        for edge in view.outgoing(node) {
            let next = edge.target();
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost.0 + edge.weight().weight(criterion);

            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State::new(next_cost, next));
                    predecessors.insert(next, (node, edge.id()));
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State::new(next_cost, next));
                        predecessors.insert(next, (node, edge.id()));
                    }
                }
            }
        }
    }

    None
}

/// Follows the predecessor map from `target` back to `start`
fn walk_back(
    predecessors: &HashMap<NodeIndex, (NodeIndex, EdgeIndex)>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<EdgeIndex> {
    let mut arcs = Vec::new();
    let mut current = target;
    while current != start {
        let Some(&(previous, edge)) = predecessors.get(&current) else {
            break;
        };
        arcs.push(edge);
        current = previous;
    }
    arcs.reverse();
    arcs
}
