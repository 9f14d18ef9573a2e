//! Road network components - intersections, roads and segments

use geo::{LineString, Point};

use crate::{Length, NodeId, RoadId};

/// Road graph node
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Map data ID of the intersection
    pub id: NodeId,
    /// Planar location in kilometres, used by the search heuristic
    pub geometry: Point<f64>,
}

/// Metadata shared by all segments of one road
#[derive(Debug, Clone, Default)]
pub struct Road {
    pub id: RoadId,
    pub name: String,
    pub city: String,
    pub one_way: bool,
    pub speed: u8,
    pub road_class: u8,
}

impl Road {
    pub fn new(id: RoadId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Display label: road name followed by the city when one is known
    pub fn label(&self) -> String {
        if self.city.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.city)
        }
    }
}

/// Road graph edge (directed piece of road)
#[derive(Debug, Clone)]
pub struct Segment {
    /// Index of the owning road in [`RoadGraph`](super::RoadGraph)
    pub road: usize,
    /// Physical length in kilometres, never negative
    pub length: Length,
    /// Shape of the segment, from its source to its target
    pub geometry: LineString<f64>,
}

impl Segment {
    pub fn length(&self) -> Length {
        self.length
    }
}
