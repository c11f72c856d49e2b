//! CLI error types

use std::path::PathBuf;

use starplot_core::{ControllerError, TableError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid dataset: {0}")]
    Dataset(#[from] TableError),

    #[error(transparent)]
    Controller(#[from] ControllerError),
}

pub type Result<T> = std::result::Result<T, CliError>;
