//! Algorithm registries and active-algorithm selection
//!
//! Each algorithm family is a closed set of variants ([`ClusteringMethod`],
//! [`MappingMethod`]) dispatched by `match`. Callers that need something else
//! implement [`Clusterer`] or [`Mapper`] on their own type and hand a list of
//! them to the controller.

mod clustering;
mod error;
mod mapping;

pub use clustering::ClusteringMethod;
pub use error::{AlgorithmError, AlgorithmResult};
pub use mapping::MappingMethod;

use crate::table::{DimensionValues, Labels, MappedPoints, Vectors};

/// Anything that can be registered under an id
pub trait Algorithm {
    fn id(&self) -> &str;
}

/// Assigns a cluster label to every sample
pub trait Clusterer: Algorithm {
    fn cluster(&self, data: &DimensionValues, n_clusters: usize) -> AlgorithmResult<Labels>;
}

/// Projects samples into 2-D using the axis vectors
pub trait Mapper: Algorithm {
    fn map(&self, values: &DimensionValues, vectors: &Vectors) -> AlgorithmResult<MappedPoints>;
}

/// A registry of algorithms with one of them active.
#[derive(Debug, Clone)]
pub struct AlgorithmSelector<A> {
    algorithms: Vec<A>,
    active: usize,
}

impl<A: Algorithm> AlgorithmSelector<A> {
    /// Build a selector. `active_id` falls back to `default_id` when absent.
    pub fn new(
        default_id: &str,
        algorithms: Vec<A>,
        active_id: Option<&str>,
    ) -> AlgorithmResult<Self> {
        if algorithms.is_empty() {
            return Err(AlgorithmError::EmptyRegistry);
        }

        let mut selector = Self {
            algorithms,
            active: 0,
        };
        selector.set_active_algorithm(active_id.unwrap_or(default_id))?;
        Ok(selector)
    }

    pub fn active_algorithm_id(&self) -> &str {
        self.algorithms[self.active].id()
    }

    pub fn active_algorithm(&self) -> &A {
        &self.algorithms[self.active]
    }

    pub fn set_active_algorithm(&mut self, id: &str) -> AlgorithmResult<()> {
        let index = self
            .algorithms
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| AlgorithmError::UnknownAlgorithm {
                id: id.to_string(),
                known: self.algorithm_ids().join(", "),
            })?;
        self.active = index;
        Ok(())
    }

    /// Registered ids in registration order
    pub fn algorithm_ids(&self) -> Vec<&str> {
        self.algorithms.iter().map(Algorithm::id).collect()
    }
}
