//! Controller behaviour through the public API

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use starplot_core::algorithm::AlgorithmResult;
use starplot_core::{
    Algorithm, Animator, AxisGenerator, ClusterConfig, ClusterController, Clusterer, Column,
    ColumnDataSource, ControllerError, DimensionValues, Labels, MappedPoints, MapperConfig,
    MapperController, Point, Vectors,
};

/// Clusterer that counts how often it actually runs
struct CountingClusterer {
    id: &'static str,
    calls: Rc<Cell<usize>>,
}

impl Algorithm for CountingClusterer {
    fn id(&self) -> &str {
        self.id
    }
}

impl Clusterer for CountingClusterer {
    fn cluster(&self, data: &DimensionValues, n_clusters: usize) -> AlgorithmResult<Labels> {
        self.calls.set(self.calls.get() + 1);
        Ok((0..data.n_samples()).map(|i| i % n_clusters).collect())
    }
}

type Transitions = Rc<RefCell<Vec<(Option<MappedPoints>, MappedPoints)>>>;

/// Animator that records every transition it is asked to play
struct RecordingAnimator {
    transitions: Transitions,
}

impl Animator for RecordingAnimator {
    fn animation_sequence(&mut self, previous: Option<&MappedPoints>, next: &MappedPoints) {
        self.transitions
            .borrow_mut()
            .push((previous.cloned(), next.clone()));
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn dimension_values() -> DimensionValues {
    DimensionValues::new(
        names(&["s1", "s2", "s3"]),
        names(&["a", "b", "c"]),
        vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ],
    )
    .unwrap()
}

fn vectors() -> Vectors {
    Vectors::new(vec![
        ("a".to_string(), Point::new(1.0, 0.0)),
        ("b".to_string(), Point::new(0.0, 1.0)),
        ("c".to_string(), Point::new(-1.0, -1.0)),
    ])
    .unwrap()
}

fn counting_controller(calls: &Rc<Cell<usize>>) -> ClusterController<CountingClusterer> {
    let algorithms = vec![
        CountingClusterer {
            id: "first",
            calls: calls.clone(),
        },
        CountingClusterer {
            id: "second",
            calls: calls.clone(),
        },
    ];
    ClusterController::with_algorithms("first", algorithms, ClusterConfig::default()).unwrap()
}

#[test]
fn test_same_key_runs_algorithm_once() {
    let calls = Rc::new(Cell::new(0));
    let mut controller = counting_controller(&calls);
    let data = dimension_values();

    controller.update_clusters(&data).unwrap();
    controller.update_clusters(&data).unwrap();
    assert_eq!(calls.get(), 1);

    // new k is a new key
    controller.update_number_of_clusters(5).unwrap();
    controller.update_clusters(&data).unwrap();
    assert_eq!(calls.get(), 2);

    // back to the old k hits the cache again
    controller.update_number_of_clusters(4).unwrap();
    controller.update_clusters(&data).unwrap();
    assert_eq!(calls.get(), 2);

    // other algorithm, same k
    controller.set_active_algorithm("second").unwrap();
    controller.update_clusters(&data).unwrap();
    controller.update_clusters(&data).unwrap();
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_cluster_count_below_three_always_fails() {
    let calls = Rc::new(Cell::new(0));
    let mut controller = counting_controller(&calls);

    for n in [0, 1, 2] {
        let err = controller.update_number_of_clusters(n).unwrap_err();
        assert_eq!(err, ControllerError::InvalidClusterCount(n));
    }
    controller.update_number_of_clusters(3).unwrap();
    assert_eq!(controller.number_of_clusters(), 3);
}

#[test]
fn test_classes_follow_current_key() {
    let calls = Rc::new(Cell::new(0));
    let mut controller = counting_controller(&calls);
    controller.update_clusters(&dimension_values()).unwrap();
    assert_eq!(controller.classes().unwrap(), &[0, 1, 2]);

    controller.update_number_of_clusters(6).unwrap();
    assert!(matches!(
        controller.classes(),
        Err(ControllerError::MissingClustering { n_clusters: 6, .. })
    ));
}

#[test]
fn test_hiding_axis_filters_both_tables() {
    let mut mapper =
        MapperController::new(dimension_values(), vectors(), MapperConfig::default()).unwrap();

    mapper.update_axis_status("b", false).unwrap();
    assert!(!mapper.is_axis_visible("b"));

    let (values, vectors) = mapper.filtered_tables();
    assert_eq!(values.axes(), &names(&["a", "c"])[..]);
    assert_eq!(values.rows()[1], vec![4.0, 6.0]);
    assert_eq!(vectors.axes(), &names(&["a", "c"])[..]);
    assert_eq!(
        mapper.axis_status(),
        vec![
            ("a".to_string(), true),
            ("b".to_string(), false),
            ("c".to_string(), true),
        ]
    );

    mapper.update_axis_status("b", true).unwrap();
    assert_eq!(mapper.dimension_values(), dimension_values());
    assert_eq!(mapper.vectors(), self::vectors());
}

#[test]
fn test_mapping_ignores_hidden_axes() {
    let source = ColumnDataSource::shared();
    let mut mapper = MapperController::new(dimension_values(), vectors(), MapperConfig::default())
        .unwrap()
        .with_source(source.clone());

    mapper.update_axis_status("c", false).unwrap();
    let points = mapper.execute_mapping().unwrap();

    assert_eq!(
        points.points(),
        &[
            Point::new(1.0, 2.0),
            Point::new(4.0, 5.0),
            Point::new(7.0, 8.0)
        ][..]
    );
    assert_eq!(mapper.mapped_points(), Some(&points));
    assert_eq!(
        source.read().column("x"),
        Some(&Column::Numeric(vec![1.0, 4.0, 7.0]))
    );
}

#[test]
fn test_animator_receives_previous_and_next() {
    let transitions: Transitions = Rc::new(RefCell::new(Vec::new()));
    let source = ColumnDataSource::shared();
    let mut mapper = MapperController::new(dimension_values(), vectors(), MapperConfig::default())
        .unwrap()
        .with_source(source.clone())
        .with_animator(Box::new(RecordingAnimator {
            transitions: transitions.clone(),
        }));

    let first = mapper.execute_mapping().unwrap();
    mapper.update_single_vector("a", 2.0, 0.0).unwrap();
    let second = mapper.execute_mapping().unwrap();

    let recorded = transitions.borrow();
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0], (None, first.clone()));
    assert_eq!(recorded[1], (Some(first), second));

    // the animator owns the source updates
    assert!(source.read().column("x").is_none());
}

#[test]
fn test_update_animator_switches_output() {
    let transitions: Transitions = Rc::new(RefCell::new(Vec::new()));
    let source = ColumnDataSource::shared();
    let mut mapper = MapperController::new(dimension_values(), vectors(), MapperConfig::default())
        .unwrap()
        .with_source(source.clone());

    mapper.execute_mapping().unwrap();
    assert!(source.read().column("x").is_some());

    mapper.update_animator(Box::new(RecordingAnimator {
        transitions: transitions.clone(),
    }));
    mapper.execute_mapping().unwrap();
    assert_eq!(transitions.borrow().len(), 1);
    assert!(transitions.borrow()[0].0.is_some());
}

#[test]
fn test_replacing_dimension_values() {
    let mut mapper =
        MapperController::new(dimension_values(), vectors(), MapperConfig::default()).unwrap();

    let replacement = DimensionValues::new(
        names(&["t1"]),
        names(&["a", "b", "c"]),
        vec![vec![1.0, 1.0, 1.0]],
    )
    .unwrap();
    mapper.update_dimension_values(replacement);

    let points = mapper.execute_mapping().unwrap();
    assert_eq!(points.index(), &names(&["t1"])[..]);
    assert_eq!(points.points(), &[Point::new(0.0, 0.0)][..]);
}

#[test]
fn test_star_axis_four_labels() {
    let segments = AxisGenerator::generate_star_axis(&["a", "b", "c", "d"]);
    assert_eq!(segments.len(), 4);

    let expected_degrees = [0.0_f64, 90.0, 180.0, 270.0];
    for (segment, degrees) in segments.iter().zip(expected_degrees) {
        assert_eq!((segment.x0, segment.y0), (0.0, 0.0));
        let angle = segment.y1.atan2(segment.x1).to_degrees().rem_euclid(360.0);
        assert!(
            (angle - degrees).abs() < 1e-9,
            "segment {} at {} degrees, expected {}",
            segment.label,
            angle,
            degrees
        );
    }
}

#[test]
fn test_generated_star_drives_mapper() {
    let values = dimension_values();
    let segments = AxisGenerator::generate_star_axis(values.axes());
    let vectors = AxisGenerator::to_vectors(&segments).unwrap();

    let mut mapper = MapperController::new(values, vectors, MapperConfig::default()).unwrap();
    let points = mapper.execute_mapping().unwrap();
    assert_eq!(points.len(), 3);
    assert!(points.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}
