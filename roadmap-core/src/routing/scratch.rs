use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::RoadGraph;

/// Working state of one node during a single search or traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeScratch {
    /// Predecessor on the best known path
    pub parent: Option<NodeIndex>,
    /// Best known cost to reach the node
    pub cost: f64,
    /// Discovery depth in the articulation traversal
    pub depth: Option<usize>,
    /// Smallest depth reachable from the node's subtree
    pub low_link: Option<usize>,
}

impl Default for NodeScratch {
    fn default() -> Self {
        Self {
            parent: None,
            cost: f64::INFINITY,
            depth: None,
            low_link: None,
        }
    }
}

/// Per-run side table holding the state searches would otherwise keep on
/// the graph nodes.
///
/// Every search entry point resets the table before it starts, so one table
/// can be reused across runs without stale values leaking between them.
#[derive(Debug, Clone, Default)]
pub struct SearchScratch {
    visited: FixedBitSet,
    nodes: Vec<NodeScratch>,
}

impl SearchScratch {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(node_count),
            nodes: vec![NodeScratch::default(); node_count],
        }
    }

    pub fn for_graph(graph: &RoadGraph) -> Self {
        Self::new(graph.node_count())
    }

    /// Clear visited flags, parents, costs, depths and low-links, resizing
    /// the table to `node_count` entries
    pub fn reset(&mut self, node_count: usize) {
        if self.visited.len() == node_count {
            self.visited.clear();
        } else {
            self.visited = FixedBitSet::with_capacity(node_count);
        }
        self.nodes.clear();
        self.nodes.resize(node_count, NodeScratch::default());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, node: NodeIndex) -> Option<&NodeScratch> {
        self.nodes.get(node.index())
    }

    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.contains(node.index())
    }

    pub fn visited_count(&self) -> usize {
        self.visited.count_ones(..)
    }

    pub fn cost(&self, node: NodeIndex) -> f64 {
        self.node(node).map_or(f64::INFINITY, |n| n.cost)
    }

    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.node(node).and_then(|n| n.parent)
    }

    pub fn depth(&self, node: NodeIndex) -> Option<usize> {
        self.node(node).and_then(|n| n.depth)
    }

    pub fn low_link(&self, node: NodeIndex) -> Option<usize> {
        self.node(node).and_then(|n| n.low_link)
    }

    pub(crate) fn mark_visited(&mut self, node: NodeIndex) {
        self.visited.insert(node.index());
    }

    /// Accept `cost` as the best known cost of `node`, reached from `parent`
    pub(crate) fn settle(&mut self, node: NodeIndex, parent: Option<NodeIndex>, cost: f64) {
        self.mark_visited(node);
        if let Some(entry) = self.nodes.get_mut(node.index()) {
            entry.parent = parent;
            entry.cost = cost;
        }
    }

    pub(crate) fn discover(&mut self, node: NodeIndex, parent: Option<NodeIndex>, depth: usize) {
        self.mark_visited(node);
        if let Some(entry) = self.nodes.get_mut(node.index()) {
            entry.parent = parent;
            entry.depth = Some(depth);
            entry.low_link = Some(depth);
        }
    }

    pub(crate) fn set_low_link(&mut self, node: NodeIndex, low_link: usize) {
        if let Some(entry) = self.nodes.get_mut(node.index()) {
            entry.low_link = Some(low_link);
        }
    }
}
