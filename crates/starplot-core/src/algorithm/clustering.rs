//! Built-in clustering algorithms

use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::{Algorithm, AlgorithmError, AlgorithmResult, Clusterer};
use crate::table::{DimensionValues, Labels};

/// Lloyd iterations before giving up on convergence
const KMEANS_MAX_ITER: u64 = 300;

const KMEANS_TOLERANCE: f64 = 1e-4;

/// Fixed seed so the same data always yields the same labels
const KMEANS_SEED: u64 = 0x5EED;

/// Clustering registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusteringMethod {
    /// Round-robin labels (`row % k`), useful as a placeholder
    Dummy,
    /// k-means (`linfa-clustering`) over unit-scaled values
    KMeans,
}

impl ClusteringMethod {
    pub const DUMMY_ID: &'static str = "dummy";
    pub const KMEANS_ID: &'static str = "kmeans";

    /// Every built-in clustering algorithm, default first
    pub fn all() -> Vec<Self> {
        vec![Self::Dummy, Self::KMeans]
    }
}

impl Algorithm for ClusteringMethod {
    fn id(&self) -> &str {
        match self {
            Self::Dummy => Self::DUMMY_ID,
            Self::KMeans => Self::KMEANS_ID,
        }
    }
}

impl Clusterer for ClusteringMethod {
    fn cluster(&self, data: &DimensionValues, n_clusters: usize) -> AlgorithmResult<Labels> {
        if n_clusters == 0 {
            return Err(AlgorithmError::InvalidInput(
                "number of clusters must be positive".to_string(),
            ));
        }

        match self {
            Self::Dummy => Ok((0..data.n_samples()).map(|i| i % n_clusters).collect()),
            Self::KMeans => kmeans(data, n_clusters),
        }
    }
}

/// Scale every value by the largest magnitude so squared distances stay
/// finite. k-means assignments do not change under uniform scaling.
fn unit_scaled(data: &DimensionValues) -> AlgorithmResult<Vec<f64>> {
    let mut max_abs = 0.0_f64;
    for v in data.rows().iter().flatten() {
        if !v.is_finite() {
            return Err(AlgorithmError::InvalidInput(format!(
                "k-means needs finite values, got {}",
                v
            )));
        }
        max_abs = max_abs.max(v.abs());
    }

    let scale = if max_abs > 0.0 { max_abs } else { 1.0 };
    Ok(data.rows().iter().flatten().map(|v| v / scale).collect())
}

fn kmeans(data: &DimensionValues, k: usize) -> AlgorithmResult<Labels> {
    if data.n_samples() < k {
        return Err(AlgorithmError::InvalidInput(format!(
            "need at least {} samples for {} clusters, got {}",
            k,
            k,
            data.n_samples()
        )));
    }

    let records = Array2::from_shape_vec((data.n_samples(), data.n_axes()), unit_scaled(data)?)
        .map_err(|e| AlgorithmError::InvalidInput(format!("bad record shape: {}", e)))?;
    let dataset = DatasetBase::from(records.clone());

    let model = KMeans::params_with_rng(k, StdRng::seed_from_u64(KMEANS_SEED))
        .max_n_iterations(KMEANS_MAX_ITER)
        .tolerance(KMEANS_TOLERANCE)
        .fit(&dataset)
        .map_err(|e| AlgorithmError::InvalidInput(format!("k-means fit failed: {}", e)))?;

    let assigned: Array1<usize> = model.predict(&records);
    let labels: Labels = assigned.to_vec();
    debug!("k-means assigned {} samples to {} clusters", labels.len(), k);
    Ok(labels)
}
