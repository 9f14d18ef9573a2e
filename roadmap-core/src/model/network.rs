//! Road graph with lookup tables and a spatial index over intersections

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::{
    Direction,
    graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex},
    visit::EdgeRef,
};
use rstar::{RTree, primitives::GeomWithData};

use super::components::{Intersection, Road, Segment};
use crate::{Error, NodeId};

/// Intersection location stored in the R-tree, tagged with its graph index
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Directed road network
///
/// Built once by [`RoadGraphBuilder`](super::RoadGraphBuilder) or the map
/// loader; read-only afterwards, so any number of searches may borrow it.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    pub(crate) graph: DiGraph<Intersection, Segment>,
    pub(crate) roads: Vec<Road>,
    pub(crate) node_lookup: HashMap<NodeId, NodeIndex>,
    rtree: RTree<IndexedPoint>,
}

impl RoadGraph {
    pub(crate) fn from_parts(
        graph: DiGraph<Intersection, Segment>,
        roads: Vec<Road>,
        node_lookup: HashMap<NodeId, NodeIndex>,
    ) -> Self {
        let points = graph
            .node_indices()
            .map(|idx| {
                let geometry = graph[idx].geometry;
                IndexedPoint::new([geometry.x(), geometry.y()], idx)
            })
            .collect();

        Self {
            graph,
            roads,
            node_lookup,
            rtree: RTree::bulk_load(points),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Resolve a map data ID to its graph index
    pub fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.node_lookup
            .get(&id)
            .copied()
            .ok_or(Error::InvalidNodeId(id))
    }

    pub fn intersection(&self, node: NodeIndex) -> Result<&Intersection, Error> {
        self.graph.node_weight(node).ok_or(Error::InvalidNodeIndex)
    }

    pub fn node_id(&self, node: NodeIndex) -> Result<NodeId, Error> {
        self.intersection(node).map(|n| n.id)
    }

    pub fn intersections(&self) -> impl Iterator<Item = (NodeIndex, &Intersection)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn segment(&self, edge: EdgeIndex) -> Option<&Segment> {
        self.graph.edge_weight(edge)
    }

    pub fn endpoints(&self, edge: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(edge)
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn road(&self, segment: &Segment) -> Option<&Road> {
        self.roads.get(segment.road)
    }

    pub fn road_name(&self, segment: &Segment) -> &str {
        self.road(segment).map_or("", |road| road.name.as_str())
    }

    /// Outgoing segments of `node`, in the order they were added
    pub fn outgoing(&self, node: NodeIndex) -> Vec<EdgeReference<'_, Segment>> {
        // petgraph prepends to its adjacency lists
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.reverse();
        edges
    }

    /// Incoming segments of `node`, in the order they were added
    pub fn incoming(&self, node: NodeIndex) -> Vec<EdgeReference<'_, Segment>> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .collect();
        edges.reverse();
        edges
    }

    /// Nodes reachable over one outgoing segment.
    ///
    /// Parallel segments yield the same neighbour more than once.
    pub fn neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.outgoing(node).iter().map(EdgeRef::target).collect()
    }

    /// Nodes joined to `node` by a segment in either direction, each listed once
    pub(crate) fn undirected_neighbors(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let incoming = self.incoming(node);
        self.outgoing(node)
            .iter()
            .map(EdgeRef::target)
            .chain(incoming.iter().map(EdgeRef::source))
            .unique()
            .collect()
    }

    /// Segment leading from `from` to `to`.
    ///
    /// Among parallel segments the shortest one is returned, the first added
    /// one on equal lengths.
    pub fn edge_between(&self, from: NodeIndex, to: NodeIndex) -> Option<EdgeIndex> {
        self.graph
            .edges_connecting(from, to)
            .map(|edge| (edge.id(), edge.weight().length))
            .min_by(|(a_id, a_len), (b_id, b_len)| {
                a_len.total_cmp(b_len).then_with(|| a_id.cmp(b_id))
            })
            .map(|(id, _)| id)
    }

    /// Closest intersection to `point` and its distance in kilometres
    pub fn nearest_node(&self, point: &Point<f64>) -> Option<(NodeIndex, f64)> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|nearest| {
                let [x, y] = *nearest.geom();
                let distance = (x - point.x()).hypot(y - point.y());
                (nearest.data, distance)
            })
    }

    /// Closest intersection, provided it lies within `max_distance` of `point`
    pub fn node_near(&self, point: &Point<f64>, max_distance: f64) -> Option<NodeIndex> {
        self.nearest_node(point)
            .filter(|&(_, distance)| distance < max_distance)
            .map(|(node, _)| node)
    }

    /// Distinct names of the roads meeting at `node`, sorted
    pub fn road_names_at(&self, node: NodeIndex) -> Vec<&str> {
        let incoming = self.incoming(node);
        self.outgoing(node)
            .iter()
            .chain(incoming.iter())
            .map(|edge| self.road_name(edge.weight()))
            .filter(|name| !name.is_empty())
            .sorted_unstable()
            .dedup()
            .collect()
    }
}
