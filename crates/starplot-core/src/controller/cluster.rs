//! Clustering controller

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ControllerError, ControllerResult};
use crate::algorithm::{AlgorithmSelector, Clusterer, ClusteringMethod};
use crate::source::{Column, SharedSource};
use crate::table::{DimensionValues, Labels};

/// Source column the label colours are written to
pub const CLUSTERING_COLOR_COLUMN: &str = "color";

/// Palette indexed by label value
pub const DEFAULT_LABEL_COLORS: &[&str] =
    &["red", "navy", "green", "orange", "grey", "yellow", "black"];

const MIN_CLUSTERS: usize = 3;

/// Clustering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Active algorithm id; the registry default when unset
    pub algorithm: Option<String>,
    pub n_clusters: usize,
    pub label_colors: Vec<String>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            n_clusters: 4,
            label_colors: DEFAULT_LABEL_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Clusters dimension values and colours the shared source by label.
///
/// Labels are memoized per `(algorithm id, number of clusters)`. The cache is
/// not tied to the data passed to [`update_clusters`](Self::update_clusters):
/// call [`clear_cache`](Self::clear_cache) after replacing the data.
pub struct ClusterController<C = ClusteringMethod> {
    selector: AlgorithmSelector<C>,
    clustering_cache: HashMap<(String, usize), Labels>,
    label_colors: Vec<String>,
    source: Option<SharedSource>,
    n_clusters: usize,
}

impl ClusterController<ClusteringMethod> {
    /// Controller over the built-in clustering registry
    pub fn new(config: ClusterConfig) -> ControllerResult<Self> {
        Self::with_algorithms(ClusteringMethod::DUMMY_ID, ClusteringMethod::all(), config)
    }
}

impl<C: Clusterer> ClusterController<C> {
    /// Controller over a caller-supplied registry
    pub fn with_algorithms(
        default_id: &str,
        algorithms: Vec<C>,
        config: ClusterConfig,
    ) -> ControllerResult<Self> {
        let selector = AlgorithmSelector::new(default_id, algorithms, config.algorithm.as_deref())?;

        let label_colors = if config.label_colors.is_empty() {
            ClusterConfig::default().label_colors
        } else {
            config.label_colors
        };

        let mut controller = Self {
            selector,
            clustering_cache: HashMap::new(),
            label_colors,
            source: None,
            n_clusters: MIN_CLUSTERS,
        };
        controller.update_number_of_clusters(config.n_clusters)?;
        Ok(controller)
    }

    /// Write label colours into `source` on every update
    pub fn with_source(mut self, source: SharedSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Cluster `data` (or reuse the cached labels for the current key) and
    /// colour the source rows by label. Labels that do not cover every row
    /// are rejected and never cached.
    pub fn update_clusters(&mut self, data: &DimensionValues) -> ControllerResult<()> {
        let key = self.cache_key();

        let fresh = match self.clustering_cache.get(&key) {
            Some(labels) => {
                debug!("Reusing clustering for ({}, {})", key.0, key.1);
                check_label_count(labels, data)?;
                None
            }
            None => {
                let labels = self
                    .selector
                    .active_algorithm()
                    .cluster(data, self.n_clusters)?;
                check_label_count(&labels, data)?;
                info!(
                    "Clustered {} samples with {} into {} clusters",
                    data.n_samples(),
                    key.0,
                    key.1
                );
                Some(labels)
            }
        };
        if let Some(labels) = fresh {
            self.clustering_cache.insert(key.clone(), labels);
        }
        let labels = &self.clustering_cache[&key];

        let colors = labels
            .iter()
            .map(|&label| {
                self.label_colors
                    .get(label)
                    .cloned()
                    .ok_or(ControllerError::LabelOutOfPalette {
                        label,
                        palette_len: self.label_colors.len(),
                    })
            })
            .collect::<ControllerResult<Vec<String>>>()?;

        if let Some(source) = &self.source {
            source
                .write()
                .set_column(CLUSTERING_COLOR_COLUMN, Column::Text(colors));
        }
        Ok(())
    }

    /// Fails for fewer than 3 clusters
    pub fn update_number_of_clusters(&mut self, n_clusters: usize) -> ControllerResult<()> {
        if n_clusters < MIN_CLUSTERS {
            return Err(ControllerError::InvalidClusterCount(n_clusters));
        }
        debug!("Updating number of clusters to {}", n_clusters);
        self.n_clusters = n_clusters;
        Ok(())
    }

    pub fn number_of_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Labels computed for the current algorithm and cluster count
    pub fn classes(&self) -> ControllerResult<&[usize]> {
        let key = self.cache_key();
        self.clustering_cache
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(ControllerError::MissingClustering {
                algorithm: key.0,
                n_clusters: key.1,
            })
    }

    pub fn active_algorithm_id(&self) -> &str {
        self.selector.active_algorithm_id()
    }

    pub fn set_active_algorithm(&mut self, id: &str) -> ControllerResult<()> {
        debug!("Switching clustering algorithm to '{}'", id);
        Ok(self.selector.set_active_algorithm(id)?)
    }

    pub fn algorithm_ids(&self) -> Vec<&str> {
        self.selector.algorithm_ids()
    }

    pub fn label_colors(&self) -> &[String] {
        &self.label_colors
    }

    /// Forget every memoized clustering
    pub fn clear_cache(&mut self) {
        debug!("Clearing {} cached clusterings", self.clustering_cache.len());
        self.clustering_cache.clear();
    }

    fn cache_key(&self) -> (String, usize) {
        (self.active_algorithm_id().to_string(), self.n_clusters)
    }
}

fn check_label_count(labels: &Labels, data: &DimensionValues) -> ControllerResult<()> {
    if labels.len() != data.n_samples() {
        return Err(ControllerError::LabelCount {
            labels: labels.len(),
            rows: data.n_samples(),
        });
    }
    Ok(())
}
