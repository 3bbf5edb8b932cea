use fixedbitset::FixedBitSet;
use log::warn;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::model::RouteGraph;
use crate::routing::PathResult;

/// Simple paths from `start` to `end` found by depth-first search, sorted
/// by weight under the graph's criterion.
///
/// The search stops as soon as `max_paths` paths have been collected, so
/// the result is not necessarily the `max_paths` cheapest paths. Meant for
/// small road networks.
pub fn enumerate_simple_paths(
    graph: &RouteGraph,
    start: &str,
    end: &str,
    max_paths: usize,
) -> Vec<PathResult> {
    let (Some(source), Some(target)) = (graph.node_index(start), graph.node_index(end)) else {
        warn!("Path enumeration requested between unknown locations {start} and {end}");
        return Vec::new();
    };

    let mut search = Enumeration {
        graph,
        target,
        max_paths,
        visited: FixedBitSet::with_capacity(graph.node_count()),
        arcs: Vec::new(),
        found: Vec::new(),
    };
    search.visited.insert(source.index());
    search.visit(source);

    let criterion = graph.criterion();
    let mut paths: Vec<PathResult> = search
        .found
        .into_iter()
        .map(|arcs| PathResult::from_arcs(graph, source, arcs, criterion))
        .collect();
    paths.sort_by(|a, b| a.total_weight.total_cmp(&b.total_weight));
    paths
}

struct Enumeration<'a> {
    graph: &'a RouteGraph,
    target: NodeIndex,
    max_paths: usize,
    visited: FixedBitSet,
    arcs: Vec<EdgeIndex>,
    found: Vec<Vec<EdgeIndex>>,
}

impl Enumeration<'_> {
    fn visit(&mut self, node: NodeIndex) {
        if self.found.len() >= self.max_paths {
            return;
        }
        if node == self.target {
            self.found.push(self.arcs.clone());
            return;
        }

        let graph = self.graph;
        for edge in graph.graph.edges(node) {
            let next = edge.target();
            if self.visited.contains(next.index()) {
                continue;
            }
            self.visited.insert(next.index());
            self.arcs.push(edge.id());
            self.visit(next);
            self.arcs.pop();
            self.visited.set(next.index(), false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::planar_demo;
    use crate::model::{ClockTime, Criterion};
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
    fn collection_is_capped() {
        let graph = planar_graph();
        for cap in 0..5 {
            assert!(enumerate_simple_paths(&graph, "A", "H", cap).len() <= cap);
        }
        assert_eq!(enumerate_simple_paths(&graph, "A", "H", 3).len(), 3);
    }

    #[test]
    fn results_are_sorted_simple_paths() {
        let graph = planar_graph();
        let paths = enumerate_simple_paths(&graph, "A", "G", 50);
        assert!(paths.len() > 3);
        for pair in paths.windows(2) {
            assert!(pair[0].total_weight <= pair[1].total_weight);
        }
        for path in &paths {
            assert_eq!(path.nodes.first().map(String::as_str), Some("A"));
            assert_eq!(path.nodes.last().map(String::as_str), Some("G"));
            let mut nodes = path.nodes.clone();
            nodes.sort();
            nodes.dedup();
            assert_eq!(nodes.len(), path.nodes.len());
        }
        // with a generous cap every simple path is found, the best included
        assert_eq!(paths[0].nodes, vec!["A", "B", "D", "G"]);
    }

    #[test]
    fn unknown_endpoint_yields_nothing() {
        let graph = planar_graph();
        assert!(enumerate_simple_paths(&graph, "A", "nowhere", 3).is_empty());
        assert!(enumerate_simple_paths(&graph, "nowhere", "A", 3).is_empty());
    }
}
