//! Route search over the road graph

pub mod astar;
mod heuristic;
mod path;
mod scratch;
mod to_geojson;

pub use astar::{find_path, find_path_with};
pub use heuristic::Heuristic;
pub use path::{PathOutcome, PathSegment, RouteLeg, RoutePath};
pub use scratch::{NodeScratch, SearchScratch};
