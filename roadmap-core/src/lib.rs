//! Road network engine: graph model, A* route search and cut-vertex analysis
//!
//! The graph is built once (from map files or programmatically) and stays
//! read-only afterwards. Every search keeps its working state in a
//! [`SearchScratch`] side table instead of on the graph itself.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Intersection, Road, RoadGraph, Segment};
pub use routing::{PathOutcome, RoutePath, SearchScratch};

/// Identifier of an intersection as it appears in map data
pub type NodeId = i64;
/// Identifier of a road as it appears in map data
pub type RoadId = i64;
/// Physical length of a segment, in kilometres
pub type Length = f64;

/// How far away from an intersection (in km) a point can be and still select it
pub const MAX_CLICKED_DISTANCE: f64 = 0.15;
