use std::path::{Path, PathBuf};

use geo::Point;

pub const NODES_FILE: &str = "nodeID-lat-lon.tab";
pub const ROADS_FILE: &str = "roadID-roadInfo.tab";
pub const SEGMENTS_FILE: &str = "roadSeg-roadID-length-nodeID-nodeID-coords.tab";

/// Equirectangular projection of latitude/longitude onto a plane in
/// kilometres, centred on a fixed point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub centre_lat: f64,
    pub centre_lon: f64,
    pub km_per_degree: f64,
}

impl Default for Projection {
    /// Centred on Auckland
    fn default() -> Self {
        Self {
            centre_lat: -36.847_622,
            centre_lon: 174.763_444,
            km_per_degree: 111.0,
        }
    }
}

impl Projection {
    /// `x` grows eastwards and `y` northwards
    pub fn project(&self, lat: f64, lon: f64) -> Point<f64> {
        let y = (lat - self.centre_lat) * self.km_per_degree;
        let x = (lon - self.centre_lon)
            * (self.km_per_degree * (lat - self.centre_lat).to_radians().cos());
        Point::new(x, y)
    }
}

/// Locations of the three map files plus the projection applied to them
#[derive(Debug, Clone)]
pub struct RoadGraphConfig {
    pub nodes_path: PathBuf,
    pub roads_path: PathBuf,
    pub segments_path: PathBuf,
    pub projection: Projection,
}

impl RoadGraphConfig {
    /// Expect the standard file names inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            nodes_path: dir.join(NODES_FILE),
            roads_path: dir.join(ROADS_FILE),
            segments_path: dir.join(SEGMENTS_FILE),
            projection: Projection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_projects_to_origin() {
        let projection = Projection::default();
        let origin = projection.project(projection.centre_lat, projection.centre_lon);
        assert!(origin.x().abs() < 1e-9);
        assert!(origin.y().abs() < 1e-9);

        let north = projection.project(projection.centre_lat + 1.0, projection.centre_lon);
        assert!((north.y() - 111.0).abs() < 1e-9);
    }

    #[test]
    fn from_dir_uses_standard_names() {
        let config = RoadGraphConfig::from_dir("/data/auckland");
        assert!(config.nodes_path.ends_with(NODES_FILE));
        assert!(config.roads_path.ends_with(ROADS_FILE));
        assert!(config.segments_path.ends_with(SEGMENTS_FILE));
    }
}
