//! Readers for the tab-separated map files.
//!
//! Rows that cannot be parsed are skipped with a warning; only I/O failures
//! abort reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use csv::{ByteRecord, ErrorKind, ReaderBuilder, Trim};
use itertools::Itertools;
use log::{trace, warn};
use serde::de::DeserializeOwned;

use super::raw_types::{RawNode, RawRoad, RawSegment};
use crate::{Error, Length, NodeId, RoadId};

pub(crate) fn open_map_file(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(BufReader::new(file))
}

fn tab_reader<R: Read>(reader: R, has_headers: bool) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

/// Deserialize every row by column position, skipping rows that don't fit `T`
fn deserialize_rows<R, T>(reader: R, has_headers: bool, kind: &str) -> Result<Vec<T>, Error>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = tab_reader(reader, has_headers);
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in reader.byte_records().enumerate() {
        let Some(record) = usable_record(record, line, kind)? else {
            skipped += 1;
            continue;
        };
        match record.deserialize::<T>(None) {
            Ok(row) => rows.push(row),
            Err(e) => {
                trace!("Skipping {kind} row {line}: {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} malformed {kind} rows");
    }
    Ok(rows)
}

/// Intersections file, no header line
pub fn read_nodes<R: Read>(reader: R) -> Result<Vec<RawNode>, Error> {
    deserialize_rows(reader, false, "intersection")
}

/// Road information file, one header line
pub fn read_roads<R: Read>(reader: R) -> Result<Vec<RawRoad>, Error> {
    deserialize_rows(reader, true, "road")
}

/// Segments file, one header line
pub fn read_segments<R: Read>(reader: R) -> Result<Vec<RawSegment>, Error> {
    let mut reader = tab_reader(reader, true);
    let mut segments = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in reader.byte_records().enumerate() {
        let Some(record) = usable_record(record, line, "segment")? else {
            skipped += 1;
            continue;
        };
        match parse_segment(&record) {
            Some(segment) => segments.push(segment),
            None => {
                trace!("Skipping segment row {line}: {record:?}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} malformed segment rows");
    }
    Ok(segments)
}

/// Only I/O failures are fatal; a row the reader cannot split is skipped
fn usable_record(
    record: Result<ByteRecord, csv::Error>,
    line: usize,
    kind: &str,
) -> Result<Option<ByteRecord>, Error> {
    match record {
        Ok(record) => Ok(Some(record)),
        Err(e) if matches!(e.kind(), ErrorKind::Io(_)) => Err(e.into()),
        Err(e) => {
            trace!("Skipping {kind} row {line}: {e}");
            Ok(None)
        }
    }
}

fn parse_field<T: FromStr>(field: &[u8]) -> Option<T> {
    std::str::from_utf8(field).ok()?.parse().ok()
}

fn parse_segment(record: &ByteRecord) -> Option<RawSegment> {
    let road_id: RoadId = parse_field(record.get(0)?)?;
    let length: Length = parse_field(record.get(1)?)?;
    let from: NodeId = parse_field(record.get(2)?)?;
    let to: NodeId = parse_field(record.get(3)?)?;

    let values = record
        .iter()
        .skip(4)
        .filter(|field| !field.is_empty())
        .map(parse_field::<f64>)
        .collect::<Option<Vec<_>>>()?;
    if values.len() % 2 != 0 {
        return None;
    }
    let coords = values.into_iter().tuples::<(f64, f64)>().collect();

    Some(RawSegment {
        road_id,
        length,
        from,
        to,
        coords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_without_header() {
        let data = "10\t-36.84\t174.76\n11\t-36.85\t174.77\nbroken\tline\n";
        let nodes = read_nodes(data.as_bytes()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].node_id, 11);
        assert!((nodes[0].lat + 36.84).abs() < 1e-12);
    }

    #[test]
    fn roads_skip_header() {
        let data = "roadid\ttype\tlabel\tcity\toneway\tspeed\troadclass\tnotforcar\tnotforpede\tnotforbicy\n\
                    7\t0\tqueen street\tauckland city\t0\t4\t3\t0\t0\t0\n\
                    8\t0\tsh1\tauckland\t1\t6\t4\t0\t1\t1\n";
        let roads = read_roads(data.as_bytes()).unwrap();
        assert_eq!(roads.len(), 2);
        assert_eq!(roads[0].label, "queen street");
        assert_eq!(roads[1].oneway, 1);
        assert_eq!(roads[1].not_for_bicycle, 1);
    }

    #[test]
    fn latin1_label_skips_only_its_row() {
        let mut data = b"roadid\ttype\tlabel\tcity\toneway\tspeed\troadclass\tnotforcar\tnotforpede\tnotforbicy\n\
                         7\t0\tqueen street\tauckland city\t0\t4\t3\t0\t0\t0\n"
            .to_vec();
        data.extend_from_slice(b"8\t0\tcaf\xe9 lane\tauckland\t0\t4\t3\t0\t0\t0\n");
        data.extend_from_slice(b"9\t0\tk road\tauckland\t0\t4\t3\t0\t0\t0\n");

        let roads = read_roads(data.as_slice()).unwrap();
        let ids: Vec<_> = roads.iter().map(|road| road.road_id).collect();
        assert_eq!(ids, vec![7, 9]);
    }

    #[test]
    fn invalid_utf8_segment_row_is_skipped() {
        let mut data = b"roadID\tlength\tnodeID1\tnodeID2\tcoords\n7\t0.25\t10\t11\n".to_vec();
        data.extend_from_slice(b"7\t0.\xe21\t11\t12\n");
        data.extend_from_slice(b"7\t0.1\t12\t13\n");

        let segments = read_segments(data.as_slice()).unwrap();
        let hops: Vec<_> = segments.iter().map(|s| (s.from, s.to)).collect();
        assert_eq!(hops, vec![(10, 11), (12, 13)]);
    }

    #[test]
    fn segments_with_shape() {
        let data = "roadID\tlength\tnodeID1\tnodeID2\tcoords\n\
                    7\t0.25\t10\t11\t-36.84\t174.76\t-36.845\t174.765\t-36.85\t174.77\n\
                    7\t0.1\t11\t12\n\
                    7\tx\t11\t12\n\
                    7\t0.1\t11\t12\t-36.84\n";
        let segments = read_segments(data.as_bytes()).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].coords.len(), 3);
        assert_eq!(segments[0].coords[1], (-36.845, 174.765));
        assert!(segments[1].coords.is_empty());
    }
}
