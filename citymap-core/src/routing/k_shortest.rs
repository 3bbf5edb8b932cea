use log::{trace, warn};

use crate::model::RouteGraph;
use crate::routing::PathResult;
use crate::routing::dijkstra::dijkstra_arcs;

/// Up to `k` loopless paths from `start` to `end` in non-decreasing weight
/// order, weighed under the graph's criterion.
///
/// Deviation search: every prefix of the most recently accepted path is
/// tried as a root. Arcs leaving the spur node on accepted paths sharing
/// that root are hidden, as are the root's earlier nodes, and the spur is
/// searched on that private view. The cheapest candidate not yet accepted
/// becomes the next path. The first path equals [`shortest_path`].
///
/// [`shortest_path`]: crate::shortest_path
pub fn k_shortest_paths(graph: &RouteGraph, start: &str, end: &str, k: usize) -> Vec<PathResult> {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        warn!("Alternative paths requested between unknown locations {start} and {end}");
        return Vec::new();
    };
    if k == 0 {
        return Vec::new();
    }

    let criterion = graph.criterion();
    let Some((_, first)) = dijkstra_arcs(&graph.view(), source, target, criterion) else {
        return Vec::new();
    };

    let mut accepted = vec![PathResult::from_arcs(graph, source, first, criterion)];
    let mut candidates: Vec<PathResult> = Vec::new();

    while accepted.len() < k {
        let Some(previous) = accepted.last() else {
            break;
        };
        let previous_nodes = previous.node_indices(graph);
        let previous_arcs = previous.arc_ids.clone();

        for (depth, &spur) in previous_nodes.iter().enumerate().take(previous_arcs.len()) {
            let root = &previous_arcs[..depth];

            let mut view = graph.view();
            for path in &accepted {
                if path.arc_ids.len() > depth && path.arc_ids[..depth] == *root {
                    view.remove_arc(path.arc_ids[depth]);
                }
            }
            for &node in &previous_nodes[..depth] {
                view.remove_node(node);
            }

            let Some((_, spur_arcs)) = dijkstra_arcs(&view, spur, target, criterion) else {
                trace!("No deviation from {} at depth {depth}", graph.location_id(spur));
                continue;
            };

            let mut arcs = root.to_vec();
            arcs.extend(spur_arcs);

            let known = accepted
                .iter()
                .chain(candidates.iter())
                .any(|path| path.arc_ids == arcs);
            if !known {
                trace!(
                    "Deviation from {} at depth {depth} with {} arcs",
                    graph.location_id(spur),
                    arcs.len()
                );
                candidates.push(PathResult::from_arcs(graph, source, arcs, criterion));
            }
        }

        let best = candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_weight.total_cmp(&b.total_weight))
            .map(|(index, _)| index);
        let Some(best) = best else {
            break;
        };
        accepted.push(candidates.remove(best));
    }

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::planar_demo;
    use crate::model::{ClockTime, Criterion};
    use crate::routing::shortest_path;
    use crate::{BuildOptions, build_graph};

    fn planar_graph() -> RouteGraph {
        build_graph(
            &planar_demo(),
            Criterion::Time,
            ClockTime::from_hm(10, 0).unwrap(),
            &BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn first_path_is_the_shortest() {
        let graph = planar_graph();
        let paths = k_shortest_paths(&graph, "A", "G", 3);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], shortest_path(&graph, "A", "G"));
    }

    #[test]
    fn paths_come_in_weight_order() {
        let graph = planar_graph();
        let paths = k_shortest_paths(&graph, "A", "H", 6);
        assert!(paths.len() > 1);
        for pair in paths.windows(2) {
            assert!(pair[0].total_weight <= pair[1].total_weight);
        }
    }

    #[test]
    fn paths_are_distinct_and_loopless() {
        let graph = planar_graph();
        let paths = k_shortest_paths(&graph, "A", "G", 10);
        for (i, path) in paths.iter().enumerate() {
            let mut nodes = path.nodes.clone();
            nodes.sort();
            nodes.dedup();
            assert_eq!(nodes.len(), path.nodes.len(), "loop in {:?}", path.nodes);
            for other in &paths[i + 1..] {
                assert_ne!(path.nodes, other.nodes);
            }
        }
    }

    #[test]
    fn second_best_route_to_g() {
        let graph = planar_graph();
        let paths = k_shortest_paths(&graph, "A", "G", 2);
        // local roads are 10% slower than their base time at 10:00
        assert_eq!(paths[1].nodes, vec!["A", "C", "D", "G"]);
        assert!((paths[1].total_weight - 15.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_requests() {
        let graph = planar_graph();
        assert!(k_shortest_paths(&graph, "A", "G", 0).is_empty());
        assert!(k_shortest_paths(&graph, "A", "Q", 3).is_empty());
        assert!(k_shortest_paths(&graph, "Q", "G", 3).is_empty());
        assert!(k_shortest_paths(&graph, "Q", "Q", 3).is_empty());

        let own = k_shortest_paths(&graph, "C", "C", 3);
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].nodes, vec!["C"]);
    }

    #[test]
    fn shared_graph_is_left_untouched() {
        let graph = planar_graph();
        let before = graph.clone();
        let _ = k_shortest_paths(&graph, "A", "H", 5);
        assert_eq!(graph, before);
    }
}
