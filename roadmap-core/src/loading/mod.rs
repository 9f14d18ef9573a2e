//! This module is responsible for loading road map data from tab-separated
//! files and building a road graph.

mod builder;
mod config;
pub mod parser;
pub mod raw_types;

pub use builder::{build_road_graph, create_road_graph, read_road_graph};
pub use config::{NODES_FILE, Projection, ROADS_FILE, RoadGraphConfig, SEGMENTS_FILE};
