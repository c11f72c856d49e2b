//! Star axis layout
//!
//! Lays N axes out evenly around a circle centred on the origin. Each axis
//! gets a random integer length in `[1, 9]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::table::{Point, TableResult, Vectors};

/// cos/sin values this close to zero are snapped to exactly zero
const SNAP_EPSILON: f64 = 1e-9;

const MIN_RADIUS: u32 = 1;
const MAX_RADIUS: u32 = 9;

/// Axis layout settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Seed for axis lengths; random when unset
    pub seed: Option<u64>,
}

/// One axis drawn from `(x0, y0)` to `(x1, y1)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub label: String,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl AxisSegment {
    /// Endpoint relative to the segment start
    pub fn vector(&self) -> Point {
        Point::new(self.x1 - self.x0, self.y1 - self.y0)
    }

    pub fn length(&self) -> f64 {
        let v = self.vector();
        v.x.hypot(v.y)
    }
}

/// Static helpers for generating axis layouts
pub struct AxisGenerator;

impl AxisGenerator {
    /// Star layout with thread-local randomness
    pub fn generate_star_axis<S: AsRef<str>>(labels: &[S]) -> Vec<AxisSegment> {
        Self::generate_star_axis_with_rng(labels, &mut rand::thread_rng())
    }

    /// Star layout driven by `config` (seeded when a seed is set)
    pub fn generate_star_axis_with_config<S: AsRef<str>>(
        labels: &[S],
        config: &AxisConfig,
    ) -> Vec<AxisSegment> {
        match config.seed {
            Some(seed) => {
                Self::generate_star_axis_with_rng(labels, &mut StdRng::seed_from_u64(seed))
            }
            None => Self::generate_star_axis(labels),
        }
    }

    /// Star layout using the caller's RNG for axis lengths
    pub fn generate_star_axis_with_rng<S, R>(labels: &[S], rng: &mut R) -> Vec<AxisSegment>
    where
        S: AsRef<str>,
        R: Rng,
    {
        let segments: Vec<AxisSegment> = Self::subdivide_circle(Point::ORIGIN, labels.len(), rng)
            .into_iter()
            .zip(labels)
            .map(|([x0, x1, y0, y1], label)| AxisSegment {
                label: label.as_ref().to_string(),
                x0,
                x1,
                y0,
                y1,
            })
            .collect();

        for s in &segments {
            debug!(
                "axis '{}': ({}, {}) -> ({}, {})",
                s.label, s.x0, s.y0, s.x1, s.y1
            );
        }
        segments
    }

    /// Turn a layout into the vector table the mapper works on
    pub fn to_vectors(segments: &[AxisSegment]) -> TableResult<Vectors> {
        Vectors::new(segments.iter().map(|s| (s.label.clone(), s.vector())))
    }

    /// `[x0, x1, y0, y1]` per line, line `i` at `i * 360 / n` degrees
    fn subdivide_circle<R: Rng>(centre: Point, n_lines: usize, rng: &mut R) -> Vec<[f64; 4]> {
        (0..n_lines)
            .map(|i| {
                let angle = (i as f64 * (360.0 / n_lines as f64)).to_radians();
                let cos = snap(angle.cos());
                let sin = snap(angle.sin());
                let r = f64::from(rng.gen_range(MIN_RADIUS..=MAX_RADIUS));
                [centre.x, centre.x + r * cos, centre.y, centre.y + r * sin]
            })
            .collect()
    }
}

fn snap(v: f64) -> f64 {
    if v.abs() < SNAP_EPSILON {
        0.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn four_axes_at_right_angles() {
        let segments =
            AxisGenerator::generate_star_axis_with_rng(&["a", "b", "c", "d"], &mut seeded());
        assert_eq!(segments.len(), 4);

        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (segment, (cx, cy)) in segments.iter().zip(expected) {
            assert_eq!((segment.x0, segment.y0), (0.0, 0.0));
            let r = segment.length();
            // snapped components are exact
            assert_eq!(segment.x1, cx * r, "segment {}", segment.label);
            assert_eq!(segment.y1, cy * r, "segment {}", segment.label);
        }
    }

    #[test]
    fn radius_in_range_and_integral() {
        let labels: Vec<String> = (0..50).map(|i| format!("axis{}", i)).collect();
        for segment in AxisGenerator::generate_star_axis(&labels) {
            let r = segment.length();
            assert!((1.0 - 1e-9..=9.0 + 1e-9).contains(&r), "radius {}", r);
            assert!((r - r.round()).abs() < 1e-9, "radius {} not integral", r);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = AxisConfig { seed: Some(42) };
        let a = AxisGenerator::generate_star_axis_with_config(&["x", "y", "z"], &config);
        let b = AxisGenerator::generate_star_axis_with_config(&["x", "y", "z"], &config);
        assert_eq!(a, b);
    }

    #[test]
    fn no_labels_no_segments() {
        let labels: [&str; 0] = [];
        assert!(AxisGenerator::generate_star_axis(&labels).is_empty());
    }

    #[test]
    fn layout_converts_to_vectors() {
        let segments = AxisGenerator::generate_star_axis_with_rng(&["a", "b"], &mut seeded());
        let vectors = AxisGenerator::to_vectors(&segments).unwrap();
        assert_eq!(vectors.axes(), &["a".to_string(), "b".to_string()][..]);
        assert_eq!(vectors.get("a"), Some(segments[0].vector()));
    }
}
