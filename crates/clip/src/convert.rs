//! Conversion between public rings and the engine's integer point records.
//!
//! The clipping engine computes on an integer grid for numerical robustness.
//! Coordinates are quantized by multiplying with a scale factor and rounding
//! before submission, and divided by the same factor on the way back. The
//! scale factor must keep every scaled coordinate within `i32` range; no
//! bounds checking is performed here.
//!
//! All transforms are pure: inputs are never modified, point order and count
//! are preserved exactly.

use i_overlay::i_float::int::point::IntPoint;
use polyset_core::{Paths, Ring};

/// Quantizes a single vertex onto the engine's integer grid.
#[inline]
pub fn to_engine_point(point: (f64, f64), scale: f64) -> IntPoint {
    IntPoint::new(
        (point.0 * scale).round() as i32,
        (point.1 * scale).round() as i32,
    )
}

/// Maps an engine grid point back into caller coordinates.
#[inline]
pub fn from_engine_point(point: IntPoint, scale: f64) -> (f64, f64) {
    (point.x as f64 / scale, point.y as f64 / scale)
}

/// Converts a ring into an engine path at the given scale.
pub fn ring_to_engine(ring: &[(f64, f64)], scale: f64) -> Vec<IntPoint> {
    ring.iter().map(|&p| to_engine_point(p, scale)).collect()
}

/// Converts an engine path back into a ring at the given scale.
pub fn ring_from_engine(path: &[IntPoint], scale: f64) -> Ring {
    path.iter().map(|&p| from_engine_point(p, scale)).collect()
}

/// Converts a whole path collection into engine paths.
pub fn paths_to_engine(paths: &[Ring], scale: f64) -> Vec<Vec<IntPoint>> {
    paths.iter().map(|ring| ring_to_engine(ring, scale)).collect()
}

/// Converts engine paths back into a public path collection.
pub fn paths_from_engine(paths: &[Vec<IntPoint>], scale: f64) -> Paths {
    paths
        .iter()
        .map(|path| ring_from_engine(path, scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::DEFAULT_SCALE;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_round_trip() {
        let p = (12.5, -3.25);
        let back = from_engine_point(to_engine_point(p, DEFAULT_SCALE), DEFAULT_SCALE);
        assert_relative_eq!(back.0, p.0);
        assert_relative_eq!(back.1, p.1);
    }

    #[test]
    fn test_ring_round_trip_preserves_order_and_count() {
        let ring = vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let back = ring_from_engine(&ring_to_engine(&ring, DEFAULT_SCALE), DEFAULT_SCALE);
        assert_eq!(back, ring);
    }

    #[test]
    fn test_quantization_rounds_to_grid() {
        // 10^-7 is below the default grid resolution and rounds away
        let p = to_engine_point((1.000_000_04, 0.0), DEFAULT_SCALE);
        assert_eq!(p.x, 1_000_000);
        assert_eq!(p.y, 0);
    }

    #[test]
    fn test_custom_scale() {
        let p = to_engine_point((2.5, -2.5), 100.0);
        assert_eq!((p.x, p.y), (250, -250));
        let back = from_engine_point(p, 100.0);
        assert_relative_eq!(back.0, 2.5);
        assert_relative_eq!(back.1, -2.5);
    }

    #[test]
    fn test_paths_round_trip() {
        let paths = vec![
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            vec![(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)],
        ];
        let back = paths_from_engine(&paths_to_engine(&paths, DEFAULT_SCALE), DEFAULT_SCALE);
        assert_eq!(back, paths);
    }
}
