pub use crate::MAX_CLICKED_DISTANCE;

// Re-export key components
pub use crate::algo::articulation::{
    find_all_articulation_points, find_articulation_points, find_articulation_points_with,
};
pub use crate::loading::{RoadGraphConfig, create_road_graph};
pub use crate::model::{Intersection, Road, RoadGraph, RoadGraphBuilder, Segment};
pub use crate::routing::{
    Heuristic, PathOutcome, PathSegment, RouteLeg, RoutePath, SearchScratch, find_path,
    find_path_with,
};

// Core identifier types
pub use crate::Length; // kilometres
pub use crate::NodeId;
pub use crate::RoadId;

pub use crate::Error;
