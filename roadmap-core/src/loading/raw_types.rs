use serde::Deserialize;

use crate::{Length, NodeId, RoadId};

/// Row of the intersections file: `id lat lon`
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub node_id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

/// Row of the road information file
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoad {
    pub road_id: RoadId,
    pub road_type: i64,
    pub label: String,
    pub city: String,
    pub oneway: u8,
    pub speed: u8,
    pub road_class: u8,
    pub not_for_car: u8,
    pub not_for_pedestrian: u8,
    pub not_for_bicycle: u8,
}

/// Row of the segments file: `road length node1 node2` followed by the
/// latitude/longitude pairs of the segment shape
#[derive(Debug, Clone)]
pub struct RawSegment {
    pub road_id: RoadId,
    pub length: Length,
    pub from: NodeId,
    pub to: NodeId,
    pub coords: Vec<(f64, f64)>,
}
