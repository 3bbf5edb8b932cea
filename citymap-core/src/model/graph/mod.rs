//! Per-query search graph derived from a [`Network`](crate::Network)

pub mod arc;

use hashbrown::{HashMap, HashSet};
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;

pub use arc::{ArcKind, ArcWeights, Criterion, GraphArc};

use crate::model::{ClockTime, Location};
use crate::{Error, LocationId};

/// Adjacency structure with one node per location and two directed arcs
/// per undirected connection.
///
/// Built for one criterion and departure time; every arc still carries the
/// weights of all criteria, so a multi-weight graph is the same structure
/// queried with different criteria.
#[derive(Debug, Clone)]
pub struct RouteGraph {
    pub(crate) graph: DiGraph<LocationId, GraphArc>,
    index: HashMap<LocationId, NodeIndex>,
    criterion: Criterion,
    departure: ClockTime,
}

impl RouteGraph {
    pub(crate) fn with_locations<'a>(
        locations: impl IntoIterator<Item = &'a Location>,
        criterion: Criterion,
        departure: ClockTime,
    ) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();
        for location in locations {
            let node = graph.add_node(location.id.clone());
            index.insert(location.id.clone(), node);
        }
        Self {
            graph,
            index,
            criterion,
            departure,
        }
    }

    /// Adds `from -> to` and `to -> from`, both carrying `arc`
    pub(crate) fn add_arc_pair(
        &mut self,
        from: &str,
        to: &str,
        arc: GraphArc,
    ) -> Result<(), Error> {
        let source = self
            .node_index(from)
            .ok_or_else(|| Error::InvalidData(format!("unknown location '{from}'")))?;
        let target = self
            .node_index(to)
            .ok_or_else(|| Error::InvalidData(format!("unknown location '{to}'")))?;
        self.graph.add_edge(source, target, arc.clone());
        self.graph.add_edge(target, source, arc);
        Ok(())
    }

    /// Criterion used by single-criterion searches on this graph
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn location_id(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn arc(&self, edge: EdgeIndex) -> Option<&GraphArc> {
        self.graph.edge_weight(edge)
    }

    /// Outgoing arcs of a location together with their target ids
    pub fn arcs_from(&self, id: &str) -> impl Iterator<Item = (&str, &GraphArc)> {
        self.node_index(id)
            .into_iter()
            .flat_map(|node| self.graph.edges(node))
            .map(|edge| (self.graph[edge.target()].as_str(), edge.weight()))
    }

    /// Cheapest arc from `from` to `to` under `criterion`
    pub fn arc_between(&self, from: &str, to: &str, criterion: Criterion) -> Option<&GraphArc> {
        self.arcs_from(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, arc)| arc)
            .min_by(|a, b| a.weight(criterion).total_cmp(&b.weight(criterion)))
    }

    /// Unfiltered view, the starting point for spur searches
    pub fn view(&self) -> GraphView<'_> {
        GraphView {
            graph: self,
            removed_arcs: HashSet::new(),
            removed_nodes: HashSet::new(),
        }
    }
}

impl PartialEq for RouteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.criterion == other.criterion
            && self.departure == other.departure
            && self.graph.raw_nodes().len() == other.graph.raw_nodes().len()
            && self
                .graph
                .raw_nodes()
                .iter()
                .zip(other.graph.raw_nodes())
                .all(|(a, b)| a.weight == b.weight)
            && self.graph.raw_edges().len() == other.graph.raw_edges().len()
            && self
                .graph
                .raw_edges()
                .iter()
                .zip(other.graph.raw_edges())
                .all(|(a, b)| {
                    a.source() == b.source() && a.target() == b.target() && a.weight == b.weight
                })
    }
}

/// Filtered view of a [`RouteGraph`] with some arcs and nodes hidden.
///
/// Spur searches hide arcs on a private view instead of mutating the shared
/// graph, so no restore step is needed.
#[derive(Debug, Clone)]
pub struct GraphView<'a> {
    graph: &'a RouteGraph,
    removed_arcs: HashSet<EdgeIndex>,
    removed_nodes: HashSet<NodeIndex>,
}

impl<'a> GraphView<'a> {
    pub fn graph(&self) -> &'a RouteGraph {
        self.graph
    }

    pub fn remove_arc(&mut self, edge: EdgeIndex) {
        self.removed_arcs.insert(edge);
    }

    pub fn remove_node(&mut self, node: NodeIndex) {
        self.removed_nodes.insert(node);
    }

    pub fn is_node_removed(&self, node: NodeIndex) -> bool {
        self.removed_nodes.contains(&node)
    }

    /// Outgoing arcs of `node` that are still visible
    pub(crate) fn outgoing(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = EdgeReference<'a, GraphArc>> + '_ {
        self.graph.graph.edges(node).filter(move |edge| {
            !self.removed_arcs.contains(&edge.id()) && !self.is_node_removed(edge.target())
        })
    }
}
