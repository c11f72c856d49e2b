//! Controllers bridging UI events and the algorithm registries
//!
//! - [`ClusterController`]: cached clustering, label colouring
//! - [`MapperController`]: axis visibility, vector edits, projection

mod cluster;
mod mapper;

pub use cluster::{
    ClusterConfig, ClusterController, CLUSTERING_COLOR_COLUMN, DEFAULT_LABEL_COLORS,
};
pub use mapper::{MapperConfig, MapperController};

use thiserror::Error;

use crate::algorithm::AlgorithmError;
use crate::table::TableError;

/// Errors raised by the controllers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("the number of clusters must be greater than 2, received {0}")]
    InvalidClusterCount(usize),

    /// `classes()` asked for a key that was never computed
    #[error("no clustering computed for algorithm '{algorithm}' with {n_clusters} clusters")]
    MissingClustering {
        algorithm: String,
        n_clusters: usize,
    },

    #[error("label {label} has no colour, palette has {palette_len} entries")]
    LabelOutOfPalette { label: usize, palette_len: usize },

    #[error("{labels} labels for {rows} rows")]
    LabelCount { labels: usize, rows: usize },

    #[error("unknown axis: {0}")]
    UnknownAxis(String),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;
