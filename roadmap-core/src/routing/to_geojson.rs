use geojson::{Feature, FeatureCollection, Geometry, GeometryValue};
use serde_json::json;

use super::{PathSegment, RoutePath};
use crate::{Error, RoadGraph};

impl RoutePath {
    /// Converts the route to a `GeoJSON` `FeatureCollection` with one
    /// `LineString` feature per segment.
    pub fn to_geojson(&self, graph: &RoadGraph) -> Result<FeatureCollection, Error> {
        let features = self
            .segments
            .iter()
            .enumerate()
            .map(|(idx, segment)| create_segment_feature(graph, idx, segment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, graph: &RoadGraph) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(graph)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn create_segment_feature(
    graph: &RoadGraph,
    segment_idx: usize,
    path_segment: &PathSegment,
) -> Result<Feature, Error> {
    let segment = graph.segment(path_segment.edge).ok_or_else(|| {
        Error::GeoJsonError(format!(
            "Segment {} -> {} is not part of this graph",
            path_segment.from, path_segment.to
        ))
    })?;

    let geometry = Geometry::new(GeometryValue::from(&segment.geometry));

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "segment_index": segment_idx,
            "road_name": path_segment.road_name,
            "length": path_segment.length,
            "from": path_segment.from,
            "to": path_segment.to,
        }
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use crate::model::{Road, RoadGraphBuilder};
    use crate::routing::find_path;

    #[test]
    fn route_exports_one_feature_per_segment() {
        let mut builder = RoadGraphBuilder::new();
        builder.add_intersection(1, Point::new(0.0, 0.0)).unwrap();
        builder.add_intersection(2, Point::new(3.0, 0.0)).unwrap();
        builder.add_intersection(3, Point::new(3.0, 4.0)).unwrap();
        let road = builder.add_road(Road::new(1, "Dominion Road")).unwrap();
        builder.add_two_way_segment(road, 1, 2, 3.0, None).unwrap();
        builder.add_two_way_segment(road, 2, 3, 4.0, None).unwrap();
        let graph = builder.build();

        let route = find_path(&graph, 1, 3).unwrap().into_route().unwrap();
        let collection = route.to_geojson(&graph).unwrap();
        assert_eq!(collection.features.len(), 2);

        let json: serde_json::Value =
            serde_json::from_str(&route.to_geojson_string(&graph).unwrap()).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][1]["properties"]["road_name"], "Dominion Road");
        assert_eq!(json["features"][1]["properties"]["segment_index"], 1);
        assert_eq!(json["features"][0]["geometry"]["type"], "LineString");
    }
}
