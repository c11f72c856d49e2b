//! Tabular data exchanged between the controllers and the algorithms
//!
//! - [`DimensionValues`]: samples × named axes
//! - [`Vectors`]: named axes × {x, y} endpoint
//! - [`MappedPoints`]: samples × {x, y}, the projection result
//! - [`Labels`]: cluster index per sample

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cluster index per sample, aligned with [`DimensionValues`] row order.
pub type Labels = Vec<usize>;

/// Errors raised while building or editing tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("index has {index} entries but there are {rows} rows")]
    IndexLength { index: usize, rows: usize },

    #[error("duplicate axis: {0}")]
    DuplicateAxis(String),

    #[error("duplicate sample: {0}")]
    DuplicateSample(String),

    #[error("unknown axis: {0}")]
    UnknownAxis(String),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// A 2-D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn check_unique<'a, I>(names: I, err: fn(String) -> TableError) -> TableResult<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(err(name.clone()));
        }
    }
    Ok(())
}

/// Samples × named axes.
///
/// Values are stored row-major; `rows[i][j]` is sample `index[i]` on axis
/// `axes[j]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionValues {
    index: Vec<String>,
    axes: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DimensionValues {
    /// Build a table, checking that every row is as wide as `axes` and that
    /// sample ids and axis names are unique.
    pub fn new(index: Vec<String>, axes: Vec<String>, rows: Vec<Vec<f64>>) -> TableResult<Self> {
        if index.len() != rows.len() {
            return Err(TableError::IndexLength {
                index: index.len(),
                rows: rows.len(),
            });
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != axes.len() {
                return Err(TableError::RowWidth {
                    row,
                    expected: axes.len(),
                    found: values.len(),
                });
            }
        }
        check_unique(&axes, TableError::DuplicateAxis)?;
        check_unique(&index, TableError::DuplicateSample)?;

        Ok(Self { index, axes, rows })
    }

    /// Sample ids in row order
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Axis names in column order
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    pub fn n_axes(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_axis(&self, axis_id: &str) -> bool {
        self.axes.iter().any(|a| a == axis_id)
    }

    /// Values of one axis, in row order
    pub fn column(&self, axis_id: &str) -> Option<Vec<f64>> {
        let j = self.axes.iter().position(|a| a == axis_id)?;
        Some(self.rows.iter().map(|row| row[j]).collect())
    }

    /// Copy of the table with the given axes dropped as columns.
    ///
    /// Names in `hidden` that are not columns of this table are skipped.
    pub fn without_axes(&self, hidden: &BTreeSet<String>) -> Self {
        if hidden.is_empty() {
            return self.clone();
        }

        let keep: Vec<usize> = self
            .axes
            .iter()
            .enumerate()
            .filter(|(_, axis)| !hidden.contains(*axis))
            .map(|(j, _)| j)
            .collect();

        Self {
            index: self.index.clone(),
            axes: keep.iter().map(|&j| self.axes[j].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&j| row[j]).collect())
                .collect(),
        }
    }
}

/// Axis endpoints in projection space, one row per axis.
///
/// Every axis is assumed to start at the origin, so the endpoint is also the
/// direction and length of the axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Vectors {
    axes: Vec<String>,
    endpoints: Vec<Point>,
}

impl Vectors {
    pub fn new<I>(entries: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = (String, Point)>,
    {
        let (axes, endpoints): (Vec<String>, Vec<Point>) = entries.into_iter().unzip();
        check_unique(&axes, TableError::DuplicateAxis)?;
        Ok(Self { axes, endpoints })
    }

    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn contains_axis(&self, axis_id: &str) -> bool {
        self.position(axis_id).is_some()
    }

    pub fn get(&self, axis_id: &str) -> Option<Point> {
        self.position(axis_id).map(|i| self.endpoints[i])
    }

    /// Move the endpoint of an existing axis
    pub fn set(&mut self, axis_id: &str, endpoint: Point) -> TableResult<()> {
        let i = self
            .position(axis_id)
            .ok_or_else(|| TableError::UnknownAxis(axis_id.to_string()))?;
        self.endpoints[i] = endpoint;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.axes
            .iter()
            .zip(self.endpoints.iter())
            .map(|(axis, p)| (axis.as_str(), *p))
    }

    /// Copy of the table with the given axes dropped as rows
    pub fn without_axes(&self, hidden: &BTreeSet<String>) -> Self {
        let (axes, endpoints) = self
            .iter()
            .filter(|(axis, _)| !hidden.contains(*axis))
            .map(|(axis, p)| (axis.to_string(), p))
            .unzip();
        Self { axes, endpoints }
    }

    fn position(&self, axis_id: &str) -> Option<usize> {
        self.axes.iter().position(|a| a == axis_id)
    }
}

/// Projection result: one 2-D point per sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MappedPoints {
    index: Vec<String>,
    points: Vec<Point>,
}

impl MappedPoints {
    pub fn new(index: Vec<String>, points: Vec<Point>) -> TableResult<Self> {
        if index.len() != points.len() {
            return Err(TableError::IndexLength {
                index: index.len(),
                rows: points.len(),
            });
        }
        Ok(Self { index, points })
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}
