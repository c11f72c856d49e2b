//! Mapping controller
//!
//! Keeps the canonical dimension values and axis vectors, the set of axes
//! the user has hidden, and the last projection. Hidden axes are removed as
//! columns from the dimension values and as rows from the vectors before the
//! active mapping runs.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ControllerError, ControllerResult};
use crate::algorithm::{AlgorithmSelector, Mapper, MappingMethod};
use crate::animator::Animator;
use crate::source::{Column, SharedSource};
use crate::table::{DimensionValues, MappedPoints, Point, Vectors};

/// Mapping settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Active algorithm id; the registry default when unset
    pub algorithm: Option<String>,
}

/// Projects samples through the active mapping and publishes the result.
pub struct MapperController<M = MappingMethod> {
    selector: AlgorithmSelector<M>,
    dimension_values: DimensionValues,
    vectors: Vectors,
    source_points: Option<SharedSource>,
    animator: Option<Box<dyn Animator>>,
    last_mapped_points: Option<MappedPoints>,
    ignored_axis_ids: BTreeSet<String>,
}

impl MapperController<MappingMethod> {
    /// Controller over the built-in mapping registry
    pub fn new(
        dimension_values: DimensionValues,
        vectors: Vectors,
        config: MapperConfig,
    ) -> ControllerResult<Self> {
        Self::with_algorithms(
            MappingMethod::DEFAULT_ID,
            MappingMethod::all(),
            dimension_values,
            vectors,
            config,
        )
    }
}

impl<M: Mapper> MapperController<M> {
    /// Controller over a caller-supplied registry
    pub fn with_algorithms(
        default_id: &str,
        algorithms: Vec<M>,
        dimension_values: DimensionValues,
        vectors: Vectors,
        config: MapperConfig,
    ) -> ControllerResult<Self> {
        let selector = AlgorithmSelector::new(default_id, algorithms, config.algorithm.as_deref())?;
        Ok(Self {
            selector,
            dimension_values,
            vectors,
            source_points: None,
            animator: None,
            last_mapped_points: None,
            ignored_axis_ids: BTreeSet::new(),
        })
    }

    /// Write `x`/`y` into `source` after each mapping (unless animated)
    pub fn with_source(mut self, source: SharedSource) -> Self {
        self.source_points = Some(source);
        self
    }

    pub fn with_animator(mut self, animator: Box<dyn Animator>) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Hide (`visible == false`) or show an axis. The axis may come from
    /// either table, so a dimension column without a vector can be hidden.
    pub fn update_axis_status(&mut self, axis_id: &str, visible: bool) -> ControllerResult<()> {
        if !self.vectors.contains_axis(axis_id) && !self.dimension_values.contains_axis(axis_id) {
            return Err(ControllerError::UnknownAxis(axis_id.to_string()));
        }

        if visible {
            debug!("Updating axis '{}' to visible", axis_id);
            self.ignored_axis_ids.remove(axis_id);
        } else {
            debug!("Updating axis '{}' to NOT visible", axis_id);
            self.ignored_axis_ids.insert(axis_id.to_string());
        }
        Ok(())
    }

    pub fn is_axis_visible(&self, axis_id: &str) -> bool {
        !self.ignored_axis_ids.contains(axis_id)
    }

    /// `(axis_id, visible)` for every axis: vector table order, then
    /// dimension columns that have no vector
    pub fn axis_status(&self) -> Vec<(String, bool)> {
        let unpaired = self
            .dimension_values
            .axes()
            .iter()
            .filter(|axis| !self.vectors.contains_axis(axis));
        self.vectors
            .axes()
            .iter()
            .chain(unpaired)
            .map(|axis| (axis.clone(), self.is_axis_visible(axis)))
            .collect()
    }

    /// Vector table without hidden axes
    pub fn vectors(&self) -> Vectors {
        self.vectors.without_axes(&self.ignored_axis_ids)
    }

    /// Dimension values without hidden axes
    pub fn dimension_values(&self) -> DimensionValues {
        self.dimension_values.without_axes(&self.ignored_axis_ids)
    }

    /// Both filtered tables
    pub fn filtered_tables(&self) -> (DimensionValues, Vectors) {
        (self.dimension_values(), self.vectors())
    }

    /// Rerun the active mapping over the visible axes.
    ///
    /// With an animator the previous and new points are handed to it;
    /// otherwise the `x`/`y` source columns are replaced directly.
    pub fn execute_mapping(&mut self) -> ControllerResult<MappedPoints> {
        debug!("Mapping with {}", self.active_algorithm_id());

        let (values, vectors) = if self.ignored_axis_ids.is_empty() {
            (
                Cow::Borrowed(&self.dimension_values),
                Cow::Borrowed(&self.vectors),
            )
        } else {
            let (values, vectors) = self.filtered_tables();
            (Cow::Owned(values), Cow::Owned(vectors))
        };

        let mapped_points = self.selector.active_algorithm().map(&values, &vectors)?;

        if let Some(animator) = self.animator.as_mut() {
            debug!("Executing animation");
            animator.animation_sequence(self.last_mapped_points.as_ref(), &mapped_points);
        } else if let Some(source) = &self.source_points {
            let mut source = source.write();
            source.set_column("x", Column::Numeric(mapped_points.xs()));
            source.set_column("y", Column::Numeric(mapped_points.ys()));
        }

        self.last_mapped_points = Some(mapped_points.clone());
        Ok(mapped_points)
    }

    /// Last computed projection
    pub fn mapped_points(&self) -> Option<&MappedPoints> {
        self.last_mapped_points.as_ref()
    }

    pub fn update_dimension_values(&mut self, dimension_values: DimensionValues) {
        debug!("Updating dimension values");
        self.dimension_values = dimension_values;
    }

    /// Overwrite the endpoints of the listed axes. Every axis must already
    /// exist; nothing changes when one does not.
    pub fn update_vector_values(&mut self, vectors: &Vectors) -> ControllerResult<()> {
        debug!("Updating vector values");
        if let Some((unknown, _)) = vectors
            .iter()
            .find(|(axis, _)| !self.vectors.contains_axis(axis))
        {
            return Err(ControllerError::UnknownAxis(unknown.to_string()));
        }
        for (axis, endpoint) in vectors.iter() {
            self.vectors.set(axis, endpoint)?;
        }
        Ok(())
    }

    /// Move one axis endpoint, typically after the user resized it.
    pub fn update_single_vector(
        &mut self,
        axis_id: &str,
        x1: f64,
        y1: f64,
    ) -> ControllerResult<()> {
        // all axes start at (0,0), so the endpoint is the vector
        debug!("Updating vector '{}'", axis_id);
        self.vectors
            .set(axis_id, Point::new(x1, y1))
            .map_err(|_| ControllerError::UnknownAxis(axis_id.to_string()))
    }

    pub fn update_animator(&mut self, animator: Box<dyn Animator>) {
        debug!("Updating animator");
        self.animator = Some(animator);
    }

    pub fn active_algorithm_id(&self) -> &str {
        self.selector.active_algorithm_id()
    }

    pub fn set_active_algorithm(&mut self, id: &str) -> ControllerResult<()> {
        debug!("Switching mapping algorithm to '{}'", id);
        Ok(self.selector.set_active_algorithm(id)?)
    }

    pub fn algorithm_ids(&self) -> Vec<&str> {
        self.selector.algorithm_ids()
    }
}
