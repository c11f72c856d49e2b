//! Run configuration
//!
//! Read from an optional JSON file; command-line flags override it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use starplot_core::{AxisConfig, ClusterConfig, MapperConfig};

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub mapper: MapperConfig,
    pub axes: AxisConfig,
    /// Axes hidden before the first mapping
    pub hidden_axes: Vec<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
