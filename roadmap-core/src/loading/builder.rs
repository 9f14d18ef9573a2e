use std::io::Read;

use geo::LineString;
use log::{info, warn};

use super::config::{Projection, RoadGraphConfig};
use super::parser::{open_map_file, read_nodes, read_roads, read_segments};
use super::raw_types::{RawNode, RawRoad, RawSegment};
use crate::{Error, Road, RoadGraph, model::RoadGraphBuilder};

/// Creates a road graph from the map files named in the configuration
///
/// # Errors
///
/// Returns an error if a file is missing or cannot be read
pub fn create_road_graph(config: &RoadGraphConfig) -> Result<RoadGraph, Error> {
    validate_config(config)?;

    info!("Loading road map from {}", config.nodes_path.display());
    let graph = read_road_graph(
        open_map_file(&config.nodes_path)?,
        open_map_file(&config.roads_path)?,
        open_map_file(&config.segments_path)?,
        &config.projection,
    )?;

    info!("Road graph created successfully");
    Ok(graph)
}

/// Same as [`create_road_graph`] but reading from arbitrary sources
pub fn read_road_graph<N, R, S>(
    nodes: N,
    roads: R,
    segments: S,
    projection: &Projection,
) -> Result<RoadGraph, Error>
where
    N: Read,
    R: Read,
    S: Read,
{
    let nodes = read_nodes(nodes)?;
    let roads = read_roads(roads)?;
    let segments = read_segments(segments)?;
    Ok(build_road_graph(&nodes, &roads, &segments, projection))
}

/// Assemble parsed rows into a graph.
///
/// Duplicate ids, segments on unknown roads or between unknown intersections
/// and segments with invalid lengths are skipped with a warning. Segments of
/// two-way roads are added in both directions.
pub fn build_road_graph(
    nodes: &[RawNode],
    roads: &[RawRoad],
    segments: &[RawSegment],
    projection: &Projection,
) -> RoadGraph {
    let mut builder = RoadGraphBuilder::with_capacity(nodes.len(), segments.len() * 2);

    for node in nodes {
        let location = projection.project(node.lat, node.lon);
        if let Err(e) = builder.add_intersection(node.node_id, location) {
            warn!("Skipping intersection: {e}");
        }
    }

    for raw in roads {
        let road = Road {
            id: raw.road_id,
            name: raw.label.clone(),
            city: raw.city.clone(),
            one_way: raw.oneway == 1,
            speed: raw.speed,
            road_class: raw.road_class,
        };
        if let Err(e) = builder.add_road(road) {
            warn!("Skipping road: {e}");
        }
    }

    let mut skipped = 0usize;
    for segment in segments {
        let Some(road_idx) = builder.road_index(segment.road_id) else {
            log::trace!(
                "Segment {} -> {} refers to unknown road {}",
                segment.from,
                segment.to,
                segment.road_id
            );
            skipped += 1;
            continue;
        };
        let one_way = builder.road(road_idx).is_some_and(|road| road.one_way);

        let geometry = (segment.coords.len() >= 2).then(|| {
            segment
                .coords
                .iter()
                .map(|&(lat, lon)| projection.project(lat, lon).0)
                .collect::<LineString<f64>>()
        });

        let added = if one_way {
            builder
                .add_segment(road_idx, segment.from, segment.to, segment.length, geometry)
                .map(|_| ())
        } else {
            builder
                .add_two_way_segment(road_idx, segment.from, segment.to, segment.length, geometry)
                .map(|_| ())
        };
        if let Err(e) = added {
            log::trace!("Skipping segment: {e}");
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!(
            "{skipped} of {} segments refer to unknown roads or intersections, or have invalid lengths, and were skipped",
            segments.len()
        );
    }

    let graph = builder.build();
    info!(
        "Built road graph with {} intersections, {} roads and {} directed segments",
        graph.node_count(),
        graph.road_count(),
        graph.segment_count()
    );
    graph
}

fn validate_config(config: &RoadGraphConfig) -> Result<(), Error> {
    for path in [
        &config.nodes_path,
        &config.roads_path,
        &config.segments_path,
    ] {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "Map file not found: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::find_path;

    const NODES: &str = "1\t-36.8476\t174.7634\n\
                         2\t-36.8486\t174.7634\n\
                         3\t-36.8496\t174.7634\n\
                         4\t-36.8496\t174.7644\n";
    const ROADS: &str = "roadid\ttype\tlabel\tcity\toneway\tspeed\troadclass\tnotforcar\tnotforpede\tnotforbicy\n\
                         100\t0\tqueen street\tauckland city\t0\t4\t3\t0\t0\t0\n\
                         200\t0\tvictoria street\tauckland city\t1\t4\t3\t0\t0\t0\n";
    const SEGMENTS: &str = "roadID\tlength\tnodeID1\tnodeID2\tcoords\n\
                            100\t0.111\t1\t2\t-36.8476\t174.7634\t-36.8486\t174.7634\n\
                            100\t0.111\t2\t3\n\
                            200\t0.089\t3\t4\n\
                            300\t1.0\t1\t4\n\
                            100\t1.0\t1\t99\n";

    fn load() -> RoadGraph {
        read_road_graph(
            NODES.as_bytes(),
            ROADS.as_bytes(),
            SEGMENTS.as_bytes(),
            &Projection::default(),
        )
        .unwrap()
    }

    #[test]
    fn loads_two_way_and_one_way_segments() {
        let graph = load();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.road_count(), 2);
        // two two-way segments and one one-way segment
        assert_eq!(graph.segment_count(), 5);

        let three = graph.node_index(3).unwrap();
        let four = graph.node_index(4).unwrap();
        assert!(graph.edge_between(three, four).is_some());
        assert!(graph.edge_between(four, three).is_none());
    }

    #[test]
    fn loaded_graph_is_routable() {
        let graph = load();
        let route = find_path(&graph, 1, 4).unwrap().into_route().unwrap();
        assert_eq!(route.nodes(), vec![1, 2, 3, 4]);
        assert!((route.total_cost - 0.311).abs() < 1e-9);
        assert_eq!(
            route.road_names(),
            vec!["queen street", "queen street", "victoria street"]
        );
        assert!(find_path(&graph, 4, 1).unwrap().is_unreachable());
    }

    #[test]
    fn projected_locations_are_in_kilometres() {
        let graph = load();
        let one = graph.intersection(graph.node_index(1).unwrap()).unwrap();
        let two = graph.intersection(graph.node_index(2).unwrap()).unwrap();
        let dy = one.geometry.y() - two.geometry.y();
        assert!((dy - 0.111).abs() < 1e-6);
    }

    #[test]
    fn missing_files_are_reported() {
        let config = RoadGraphConfig::from_dir("/nonexistent/road/map");
        assert!(matches!(
            create_road_graph(&config),
            Err(Error::InvalidData(_))
        ));
    }
}
