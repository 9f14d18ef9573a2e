use geo::{LineString, Point};
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use super::components::{Intersection, Road, Segment};
use super::network::RoadGraph;
use crate::{Error, Length, NodeId, RoadId};

/// Incremental construction of a [`RoadGraph`]
#[derive(Debug, Default)]
pub struct RoadGraphBuilder {
    graph: DiGraph<Intersection, Segment>,
    roads: Vec<Road>,
    road_lookup: HashMap<RoadId, usize>,
    node_lookup: HashMap<NodeId, NodeIndex>,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, segments: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, segments),
            node_lookup: HashMap::with_capacity(nodes),
            ..Self::default()
        }
    }

    pub fn add_intersection(&mut self, id: NodeId, geometry: Point<f64>) -> Result<NodeIndex, Error> {
        if self.node_lookup.contains_key(&id) {
            return Err(Error::InvalidData(format!("Duplicate intersection id {id}")));
        }
        let idx = self.graph.add_node(Intersection { id, geometry });
        self.node_lookup.insert(id, idx);
        Ok(idx)
    }

    /// Register a road and return the index segments refer to it by
    pub fn add_road(&mut self, road: Road) -> Result<usize, Error> {
        if self.road_lookup.contains_key(&road.id) {
            return Err(Error::InvalidData(format!("Duplicate road id {}", road.id)));
        }
        let idx = self.roads.len();
        self.road_lookup.insert(road.id, idx);
        self.roads.push(road);
        Ok(idx)
    }

    pub fn road_index(&self, id: RoadId) -> Option<usize> {
        self.road_lookup.get(&id).copied()
    }

    pub fn road(&self, idx: usize) -> Option<&Road> {
        self.roads.get(idx)
    }

    pub fn contains_intersection(&self, id: NodeId) -> bool {
        self.node_lookup.contains_key(&id)
    }

    /// Add a one-way segment `from -> to`.
    ///
    /// Without an explicit geometry the segment is drawn as a straight line
    /// between its endpoints.
    pub fn add_segment(
        &mut self,
        road: usize,
        from: NodeId,
        to: NodeId,
        length: Length,
        geometry: Option<LineString<f64>>,
    ) -> Result<EdgeIndex, Error> {
        // NaN fails this check as well
        if !(length >= 0.0) {
            return Err(Error::InvalidData(format!(
                "Segment {from} -> {to} has invalid length {length}"
            )));
        }
        if road >= self.roads.len() {
            return Err(Error::InvalidData(format!(
                "Segment {from} -> {to} refers to unknown road index {road}"
            )));
        }

        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        let geometry = geometry.unwrap_or_else(|| {
            LineString::from(vec![
                self.graph[source].geometry.0,
                self.graph[target].geometry.0,
            ])
        });

        Ok(self.graph.add_edge(
            source,
            target,
            Segment {
                road,
                length,
                geometry,
            },
        ))
    }

    /// Add a segment in both directions, returning `(forward, backward)`
    pub fn add_two_way_segment(
        &mut self,
        road: usize,
        a: NodeId,
        b: NodeId,
        length: Length,
        geometry: Option<LineString<f64>>,
    ) -> Result<(EdgeIndex, EdgeIndex), Error> {
        let reversed = geometry.as_ref().map(|line| {
            let mut coords = line.0.clone();
            coords.reverse();
            LineString::new(coords)
        });
        let forward = self.add_segment(road, a, b, length, geometry)?;
        let backward = self.add_segment(road, b, a, length, reversed)?;
        Ok((forward, backward))
    }

    pub fn build(self) -> RoadGraph {
        RoadGraph::from_parts(self.graph, self.roads, self.node_lookup)
    }

    fn lookup(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.node_lookup
            .get(&id)
            .copied()
            .ok_or(Error::InvalidNodeId(id))
    }
}
