//! starplot core
//!
//! Controllers that sit between a plotting front-end and two algorithm
//! families: clustering (label colouring) and star coordinate mapping
//! (projecting samples onto user-adjustable 2-D axes).
//!
//! # Example
//!
//! ```rust
//! use starplot_core::{
//!     AxisGenerator, ClusterConfig, ClusterController, ColumnDataSource, DimensionValues,
//!     MapperConfig, MapperController,
//! };
//!
//! let values = DimensionValues::new(
//!     vec!["s1".into(), "s2".into(), "s3".into()],
//!     vec!["a".into(), "b".into(), "c".into()],
//!     vec![vec![1.0, 0.0, 2.0], vec![0.5, 1.5, 0.0], vec![2.0, 2.0, 2.0]],
//! )
//! .unwrap();
//!
//! let segments = AxisGenerator::generate_star_axis(values.axes());
//! let vectors = AxisGenerator::to_vectors(&segments).unwrap();
//!
//! let source = ColumnDataSource::shared();
//! let mut mapper = MapperController::new(values.clone(), vectors, MapperConfig::default())
//!     .unwrap()
//!     .with_source(source.clone());
//! mapper.update_axis_status("c", false).unwrap();
//! let points = mapper.execute_mapping().unwrap();
//! assert_eq!(points.len(), 3);
//!
//! let mut clusters = ClusterController::new(ClusterConfig::default())
//!     .unwrap()
//!     .with_source(source.clone());
//! clusters.update_clusters(&values).unwrap();
//! assert!(source.read().column("color").is_some());
//! ```

pub mod algorithm;
pub mod animator;
pub mod axis;
pub mod controller;
pub mod source;
pub mod table;

// Re-export main types at crate root
pub use algorithm::{
    Algorithm, AlgorithmError, AlgorithmSelector, Clusterer, ClusteringMethod, Mapper,
    MappingMethod,
};
pub use animator::Animator;
pub use axis::{AxisConfig, AxisGenerator, AxisSegment};
pub use controller::{
    ClusterConfig, ClusterController, ControllerError, MapperConfig, MapperController,
};
pub use source::{Column, ColumnDataSource, SharedSource};
pub use table::{DimensionValues, Labels, MappedPoints, Point, TableError, Vectors};
