//! Data model of the road network
//!
//! Intersections are graph nodes, segments are directed graph edges and
//! roads group segments under a shared name.

pub mod builder;
pub mod components;
pub mod network;

pub use builder::RoadGraphBuilder;
pub use components::{Intersection, Road, Segment};
pub use network::{IndexedPoint, RoadGraph};
