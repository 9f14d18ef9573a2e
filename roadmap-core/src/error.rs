use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown intersection id {0}")]
    InvalidNodeId(NodeId),
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("Graph inconsistency: no segment between {from} and {to}")]
    GraphInconsistency { from: NodeId, to: NodeId },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
