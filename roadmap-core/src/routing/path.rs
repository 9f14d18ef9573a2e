use petgraph::graph::EdgeIndex;
use serde::Serialize;

use crate::{Length, NodeId};

/// One segment of a found route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSegment {
    #[serde(skip)]
    pub edge: EdgeIndex,
    pub from: NodeId,
    pub to: NodeId,
    pub road_name: String,
    pub length: Length,
}

/// Consecutive segments travelled on the same road
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub road_name: String,
    pub length: Length,
    pub segments: usize,
}

/// Route from `start` to `goal`, segments ordered from start to goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePath {
    pub start: NodeId,
    pub goal: NodeId,
    pub total_cost: Length,
    pub segments: Vec<PathSegment>,
}

impl RoutePath {
    pub(crate) fn empty(at: NodeId) -> Self {
        Self {
            start: at,
            goal: at,
            total_cost: 0.0,
            segments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Intersections visited by the route, start and goal included
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.segments.len() + 1);
        nodes.push(self.start);
        nodes.extend(self.segments.iter().map(|s| s.to));
        nodes
    }

    pub fn road_names(&self) -> Vec<&str> {
        self.segments.iter().map(|s| s.road_name.as_str()).collect()
    }

    /// Merge runs of segments on the same road into legs
    pub fn legs(&self) -> Vec<RouteLeg> {
        let mut legs: Vec<RouteLeg> = Vec::new();
        for segment in &self.segments {
            match legs.last_mut() {
                Some(leg) if leg.road_name == segment.road_name => {
                    leg.length += segment.length;
                    leg.segments += 1;
                }
                _ => legs.push(RouteLeg {
                    road_name: segment.road_name.clone(),
                    length: segment.length,
                    segments: 1,
                }),
            }
        }
        legs
    }
}

/// Result of a route search
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(RoutePath),
    /// The goal cannot be reached from the start
    Unreachable,
}

impl PathOutcome {
    /// Route length, infinite when unreachable
    pub fn total_cost(&self) -> Length {
        match self {
            PathOutcome::Found(route) => route.total_cost,
            PathOutcome::Unreachable => f64::INFINITY,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, PathOutcome::Unreachable)
    }

    pub fn route(&self) -> Option<&RoutePath> {
        match self {
            PathOutcome::Found(route) => Some(route),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn into_route(self) -> Option<RoutePath> {
        match self {
            PathOutcome::Found(route) => Some(route),
            PathOutcome::Unreachable => None,
        }
    }

    /// Segments of the route, empty when unreachable
    pub fn segments(&self) -> &[PathSegment] {
        self.route().map_or(&[], |route| route.segments.as_slice())
    }
}
