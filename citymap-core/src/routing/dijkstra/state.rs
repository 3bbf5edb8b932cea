use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: OrderedFloat<f64>,
    pub(super) node: NodeIndex,
}

impl State {
    pub(super) fn new(cost: f64, node: NodeIndex) -> Self {
        Self {
            cost: OrderedFloat(cost),
            node,
        }
    }
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap),
        // equal costs pop the lower node index first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_cheapest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(State::new(3.0, NodeIndex::new(0)));
        heap.push(State::new(1.5, NodeIndex::new(4)));
        heap.push(State::new(1.5, NodeIndex::new(2)));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|state| state.node.index())
            .collect();
        assert_eq!(order, vec![2, 4, 0]);
    }
}
