use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Frontier candidate of the A* search
#[derive(Copy, Clone, Debug)]
pub(super) struct FrontierEntry {
    pub(super) node: NodeIndex,
    pub(super) parent: Option<NodeIndex>,
    /// Accumulated cost from the start
    pub(super) cost: f64,
    /// `cost` plus the heuristic estimate to the goal
    pub(super) estimate: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.estimate.total_cmp(&other.estimate) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// Implement Ord for FrontierEntry to use in BinaryHeap
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by estimate (reversed from standard Rust BinaryHeap)
        other.estimate.total_cmp(&self.estimate)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
