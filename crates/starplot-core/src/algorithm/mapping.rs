//! Built-in star coordinate mappings

use super::{Algorithm, AlgorithmError, AlgorithmResult, Mapper};
use crate::table::{DimensionValues, MappedPoints, Point, Vectors};

/// Mapping registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingMethod {
    /// `p = Σ value_j · vector_j` over raw values
    StarCoordinates,
    /// Same sum after scaling every column to `[0, 1]`
    NormalizedStarCoordinates,
}

impl MappingMethod {
    pub const DEFAULT_ID: &'static str = "star_coordinates";
    pub const NORMALIZED_ID: &'static str = "normalized_star_coordinates";

    /// Every built-in mapping, default first
    pub fn all() -> Vec<Self> {
        vec![Self::StarCoordinates, Self::NormalizedStarCoordinates]
    }
}

impl Algorithm for MappingMethod {
    fn id(&self) -> &str {
        match self {
            Self::StarCoordinates => Self::DEFAULT_ID,
            Self::NormalizedStarCoordinates => Self::NORMALIZED_ID,
        }
    }
}

impl Mapper for MappingMethod {
    fn map(&self, values: &DimensionValues, vectors: &Vectors) -> AlgorithmResult<MappedPoints> {
        let axis_vectors = aligned_vectors(values, vectors)?;

        let scales: Vec<(f64, f64)> = match self {
            Self::StarCoordinates => vec![(0.0, 1.0); values.n_axes()],
            Self::NormalizedStarCoordinates => column_ranges(values),
        };

        let points = values
            .rows()
            .iter()
            .map(|row| {
                row.iter().zip(&scales).zip(&axis_vectors).fold(
                    Point::ORIGIN,
                    |acc, ((value, (min, range)), v)| {
                        let t = (value - min) / range;
                        Point::new(acc.x + t * v.x, acc.y + t * v.y)
                    },
                )
            })
            .collect();

        Ok(MappedPoints::new(values.index().to_vec(), points)?)
    }
}

/// Vector per dimension column, in column order. Both tables must describe
/// the same set of axes.
fn aligned_vectors(values: &DimensionValues, vectors: &Vectors) -> AlgorithmResult<Vec<Point>> {
    if let Some(extra) = vectors.axes().iter().find(|a| !values.contains_axis(a)) {
        return Err(AlgorithmError::MissingDimension(extra.clone()));
    }

    values
        .axes()
        .iter()
        .map(|axis| {
            vectors
                .get(axis)
                .ok_or_else(|| AlgorithmError::MissingVector(axis.clone()))
        })
        .collect()
}

/// `(min, max - min)` per column; constant columns get a range of 1 so they
/// map to zero instead of NaN.
fn column_ranges(values: &DimensionValues) -> Vec<(f64, f64)> {
    (0..values.n_axes())
        .map(|j| {
            let (min, max) = values
                .rows()
                .iter()
                .map(|row| row[j])
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
            let range = max - min;
            if range > 0.0 {
                (min, range)
            } else {
                (min, 1.0)
            }
        })
        .collect()
}
