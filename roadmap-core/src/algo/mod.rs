//! Structural analysis of the road network

pub mod articulation;

pub use articulation::{
    find_all_articulation_points, find_articulation_points, find_articulation_points_with,
};
