//! Algorithm error types

use thiserror::Error;

use crate::table::TableError;

/// Errors raised while selecting or running an algorithm
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgorithmError {
    /// No algorithm registered under this id
    #[error("unknown algorithm '{id}', expected one of: {known}")]
    UnknownAlgorithm { id: String, known: String },

    /// Registry was built without any algorithms
    #[error("algorithm registry is empty")]
    EmptyRegistry,

    /// Input the algorithm cannot work with
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Dimension values carry an axis with no vector
    #[error("axis '{0}' has no vector")]
    MissingVector(String),

    /// A vector has no matching dimension column
    #[error("vector '{0}' has no dimension column")]
    MissingDimension(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for algorithm operations
pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
