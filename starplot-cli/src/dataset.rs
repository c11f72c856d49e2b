//! Dataset file format
//!
//! ```json
//! {
//!   "axes": ["a", "b"],
//!   "samples": [{ "id": "s1", "values": [1.0, 2.0] }],
//!   "vectors": [{ "axis": "a", "x": 1.0, "y": 0.0 }]
//! }
//! ```
//!
//! `vectors` is optional; a star layout is generated when it is missing.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use starplot_core::{AxisConfig, AxisGenerator, DimensionValues, Point, Vectors};
use tracing::info;

use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct Sample {
    id: String,
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct AxisVector {
    axis: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
pub struct Dataset {
    axes: Vec<String>,
    samples: Vec<Sample>,
    #[serde(default)]
    vectors: Option<Vec<AxisVector>>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CliError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Split into the two tables the mapper starts from
    pub fn into_tables(self, axis_config: &AxisConfig) -> Result<(DimensionValues, Vectors)> {
        let vectors = match self.vectors {
            Some(vectors) => {
                Vectors::new(vectors.into_iter().map(|v| (v.axis, Point::new(v.x, v.y))))?
            }
            None => {
                info!("No vectors in dataset, generating star axes for {} axes", self.axes.len());
                let segments =
                    AxisGenerator::generate_star_axis_with_config(&self.axes, axis_config);
                AxisGenerator::to_vectors(&segments)?
            }
        };

        let (index, rows) = self.samples.into_iter().map(|s| (s.id, s.values)).unzip();
        let values = DimensionValues::new(index, self.axes, rows)?;

        Ok((values, vectors))
    }
}
