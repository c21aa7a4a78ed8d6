//! Ring-level predicates and measures.
//!
//! All functions operate on raw vertex slices so they can be used both on
//! caller-supplied rings and on rings coming back from the clipping engine.
//! Numeric computation is delegated to the `geo` crate.

use geo::{Area, Intersects, LineString, Point, Polygon as GeoPolygon};

/// Converts a vertex slice into a `geo` polygon with no interior rings.
pub fn to_geo_polygon(ring: &[(f64, f64)]) -> GeoPolygon<f64> {
    GeoPolygon::new(LineString::from(ring.to_vec()), vec![])
}

/// Computes the signed area of a ring under the shoelace convention.
///
/// Positive for counter-clockwise rings, negative for clockwise ones,
/// zero for degenerate rings.
pub fn signed_area(ring: &[(f64, f64)]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    to_geo_polygon(ring).signed_area()
}

/// Computes the unsigned area enclosed by a ring.
pub fn area(ring: &[(f64, f64)]) -> f64 {
    signed_area(ring).abs()
}

/// Returns true if the ring has a counter-clockwise winding.
///
/// By the clipping engine's convention, counter-clockwise rings are outer
/// boundaries and clockwise rings are holes. Degenerate rings (fewer than
/// three vertices, or zero area) are not counter-clockwise.
pub fn is_counter_clockwise(ring: &[(f64, f64)]) -> bool {
    signed_area(ring) > 0.0
}

/// Returns true if `point` lies strictly inside the ring or on its boundary.
pub fn contains_point(ring: &[(f64, f64)], point: (f64, f64)) -> bool {
    to_geo_polygon(ring).intersects(&Point::new(point.0, point.1))
}

/// Returns true if every vertex of `inner` lies inside or on `outer`.
///
/// This is a per-vertex test, not a full polygon-in-polygon test: a ring
/// whose vertices all touch the boundary of `outer` passes even if its edges
/// leave the outer region, and the result is precision-sensitive for
/// vertices that fall exactly on an edge. Hole grouping after clipping
/// relies on exactly these semantics.
pub fn contains_ring(outer: &[(f64, f64)], inner: &[(f64, f64)]) -> bool {
    inner.iter().all(|&p| contains_point(outer, p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f64) -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)]
    }

    #[test]
    fn test_signed_area_ccw() {
        assert_relative_eq!(signed_area(&square(10.0)), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_signed_area_cw() {
        let cw: Vec<(f64, f64)> = square(10.0).into_iter().rev().collect();
        assert_relative_eq!(signed_area(&cw), -100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orientation() {
        assert!(is_counter_clockwise(&square(1.0)));
        let cw: Vec<(f64, f64)> = square(1.0).into_iter().rev().collect();
        assert!(!is_counter_clockwise(&cw));
    }

    #[test]
    fn test_degenerate_ring_is_not_ccw() {
        assert!(!is_counter_clockwise(&[]));
        assert!(!is_counter_clockwise(&[(0.0, 0.0), (1.0, 1.0)]));
        // Collinear points enclose no area
        assert!(!is_counter_clockwise(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
    }

    #[test]
    fn test_contains_point() {
        let ring = square(10.0);
        assert!(contains_point(&ring, (5.0, 5.0)));
        assert!(contains_point(&ring, (0.0, 0.0))); // on the boundary
        assert!(contains_point(&ring, (10.0, 5.0))); // on an edge
        assert!(!contains_point(&ring, (15.0, 5.0)));
        assert!(!contains_point(&ring, (-0.1, 5.0)));
    }

    #[test]
    fn test_contains_ring() {
        let outer = square(10.0);
        let inner = vec![(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)];
        assert!(contains_ring(&outer, &inner));

        let straddling = vec![(5.0, 5.0), (15.0, 5.0), (15.0, 8.0), (5.0, 8.0)];
        assert!(!contains_ring(&outer, &straddling));
    }
}
