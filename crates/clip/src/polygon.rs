//! The structured polygon entity and its boolean set operations.

use geo::{Area, LineString, Polygon as GeoPolygon};
use polyset_core::geom::polygon as geom_polygon;
use polyset_core::{Error, Paths, Result, Ring};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clip::{clip, ClipType};

/// A polygon with one outer boundary and zero or more holes.
///
/// The outer ring is stored first and always wound counter-clockwise; hole
/// rings follow and are always wound clockwise. Windings are normalized at
/// construction time, and winding is the only signal distinguishing the two
/// roles. Construction does *not* verify that holes actually lie inside the
/// shape; that relationship is only established when polygons are rebuilt
/// from clipping output.
///
/// Polygons are immutable after construction: every operation returns new
/// values and leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Outer boundary followed by hole rings.
    paths: Paths,
}

impl Polygon {
    /// Creates a polygon from an outer ring and its holes.
    ///
    /// The shape ring is reversed if it is not counter-clockwise; each hole
    /// ring is reversed if it is counter-clockwise.
    ///
    /// # Errors
    /// Returns [`Error::InvalidGeometry`] if any ring has fewer than three
    /// vertices.
    pub fn new(shape: Ring, holes: Vec<Ring>) -> Result<Self> {
        validate_ring(&shape)?;
        for hole in &holes {
            validate_ring(hole)?;
        }

        let mut paths = Paths::with_capacity(holes.len() + 1);
        paths.push(wind(shape, true));
        for hole in holes {
            paths.push(wind(hole, false));
        }

        Ok(Self { paths })
    }

    /// Creates a polygon without holes.
    pub fn from_shape(shape: Ring) -> Result<Self> {
        Self::new(shape, Vec::new())
    }

    /// Returns the full ring list: the shape followed by its holes.
    pub fn paths(&self) -> &[Ring] {
        &self.paths
    }

    /// Returns the outer boundary.
    pub fn shape(&self) -> &Ring {
        &self.paths[0]
    }

    /// Returns the hole rings.
    pub fn holes(&self) -> &[Ring] {
        &self.paths[1..]
    }

    /// Consumes the polygon, yielding its ring list.
    pub fn into_paths(self) -> Paths {
        self.paths
    }

    /// Computes the enclosed area: the shape area minus the hole areas.
    pub fn area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }

    /// Converts to a `geo` crate polygon.
    pub fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let exterior = LineString::from(self.paths[0].clone());
        let interiors = self.paths[1..]
            .iter()
            .map(|hole| LineString::from(hole.clone()))
            .collect();
        GeoPolygon::new(exterior, interiors)
    }

    /// Returns true if the ring has a counter-clockwise winding.
    pub fn is_counter_clockwise(ring: &[(f64, f64)]) -> bool {
        geom_polygon::is_counter_clockwise(ring)
    }

    /// Returns true if every vertex of `inner` lies inside or on `outer`.
    ///
    /// See [`geom_polygon::contains_ring`] for the exact (per-vertex,
    /// precision-sensitive) semantics.
    pub fn contains(outer: &[(f64, f64)], inner: &[(f64, f64)]) -> bool {
        geom_polygon::contains_ring(outer, inner)
    }

    /// Clips this polygon against a set of operand polygons.
    ///
    /// `self` is the subject; the operands together form the clip set. On
    /// success the engine's flat output rings are reassembled into
    /// well-formed polygons: counter-clockwise rings become shapes,
    /// clockwise rings become the holes of whichever shape contains them.
    ///
    /// Returns `None` when the engine cannot produce a solution; an empty
    /// vector when the result region is empty.
    ///
    /// # Errors
    /// Returns [`Error::InvalidClip`] if `operands` is empty.
    pub fn clip_against(&self, operands: &[Polygon], op: ClipType) -> Result<Option<Vec<Polygon>>> {
        let clip_set: Vec<Paths> = operands.iter().map(|p| p.paths.clone()).collect();
        match clip(&self.paths, &clip_set, op)? {
            Some(solution) => Ok(Some(assemble_polygons(solution)?)),
            None => Ok(None),
        }
    }

    /// Unites this polygon with another.
    pub fn union(&self, other: &Polygon) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(std::slice::from_ref(other), ClipType::Union)
    }

    /// Intersects this polygon with another.
    pub fn intersect(&self, other: &Polygon) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(std::slice::from_ref(other), ClipType::Intersection)
    }

    /// Subtracts another polygon from this one.
    pub fn difference(&self, other: &Polygon) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(std::slice::from_ref(other), ClipType::Difference)
    }

    /// Computes the symmetric difference with another polygon.
    pub fn xor(&self, other: &Polygon) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(std::slice::from_ref(other), ClipType::Xor)
    }

    /// Unites this polygon with a set of operands.
    pub fn union_multiple(&self, others: &[Polygon]) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(others, ClipType::Union)
    }

    /// Intersects this polygon with a set of operands.
    pub fn intersect_multiple(&self, others: &[Polygon]) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(others, ClipType::Intersection)
    }

    /// Subtracts a set of operands from this polygon.
    pub fn difference_multiple(&self, others: &[Polygon]) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(others, ClipType::Difference)
    }

    /// Computes the symmetric difference with a set of operands.
    pub fn xor_multiple(&self, others: &[Polygon]) -> Result<Option<Vec<Polygon>>> {
        self.clip_against(others, ClipType::Xor)
    }
}

/// Candidate role assigned to an output ring during reassembly.
enum RingRole {
    Shape(Ring),
    Hole(Ring),
}

/// Rebuilds structured polygons from a flat, unordered ring collection.
///
/// Two passes: classification tags every ring as a candidate shape or hole
/// from its winding alone, then grouping hands each candidate shape the
/// candidate holes it contains. Holes claimed by no shape are dropped; a
/// topologically null result can legitimately leave such orphans behind.
fn assemble_polygons(mut paths: Paths) -> Result<Vec<Polygon>> {
    paths.retain(|ring| ring.len() >= 3);

    let mut shapes: Vec<Ring> = Vec::new();
    let mut holes: Vec<Ring> = Vec::new();
    for ring in paths {
        let role = if geom_polygon::is_counter_clockwise(&ring) {
            RingRole::Shape(ring)
        } else {
            RingRole::Hole(ring)
        };
        match role {
            RingRole::Shape(ring) => shapes.push(ring),
            RingRole::Hole(ring) => holes.push(ring),
        }
    }

    let mut claimed = vec![false; holes.len()];
    let mut polygons = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let mut matched: Vec<Ring> = Vec::new();
        for (i, hole) in holes.iter().enumerate() {
            if geom_polygon::contains_ring(&shape, hole) {
                claimed[i] = true;
                matched.push(hole.clone());
            }
        }
        polygons.push(Polygon::new(shape, matched)?);
    }

    let orphans = claimed.iter().filter(|&&c| !c).count();
    if orphans > 0 {
        log::debug!("dropped {} orphan hole ring(s) during reassembly", orphans);
    }

    Ok(polygons)
}

/// Forces the requested winding on a ring.
fn wind(mut ring: Ring, counter_clockwise: bool) -> Ring {
    if geom_polygon::is_counter_clockwise(&ring) != counter_clockwise {
        ring.reverse();
    }
    ring
}

fn validate_ring(ring: &[(f64, f64)]) -> Result<()> {
    if ring.len() < 3 {
        return Err(Error::InvalidGeometry(format!(
            "ring must have at least 3 vertices, got {}",
            ring.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(origin: (f64, f64), size: f64) -> Ring {
        let (x, y) = origin;
        vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size)]
    }

    #[test]
    fn test_construction_normalizes_windings() {
        let cw_shape: Ring = square((0.0, 0.0), 10.0).into_iter().rev().collect();
        let ccw_hole = square((2.0, 2.0), 4.0);

        let polygon = Polygon::new(cw_shape, vec![ccw_hole]).unwrap();
        assert!(Polygon::is_counter_clockwise(polygon.shape()));
        for hole in polygon.holes() {
            assert!(!Polygon::is_counter_clockwise(hole));
        }
    }

    #[test]
    fn test_construction_keeps_correct_windings() {
        let shape = square((0.0, 0.0), 10.0);
        let hole: Ring = square((2.0, 2.0), 4.0).into_iter().rev().collect();

        let polygon = Polygon::new(shape.clone(), vec![hole.clone()]).unwrap();
        assert_eq!(polygon.shape(), &shape);
        assert_eq!(polygon.holes(), &[hole]);
    }

    #[test]
    fn test_construction_rejects_short_rings() {
        assert!(matches!(
            Polygon::from_shape(vec![(0.0, 0.0), (1.0, 0.0)]),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            Polygon::new(square((0.0, 0.0), 1.0), vec![vec![(0.0, 0.0)]]),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_accessors() {
        let polygon =
            Polygon::new(square((0.0, 0.0), 10.0), vec![square((1.0, 1.0), 2.0)]).unwrap();
        assert_eq!(polygon.paths().len(), 2);
        assert_eq!(polygon.shape().len(), 4);
        assert_eq!(polygon.holes().len(), 1);
        assert_eq!(polygon.into_paths().len(), 2);
    }

    #[test]
    fn test_area_subtracts_holes() {
        let polygon =
            Polygon::new(square((0.0, 0.0), 10.0), vec![square((2.0, 2.0), 4.0)]).unwrap();
        assert_relative_eq!(polygon.area(), 84.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contains() {
        let outer = square((0.0, 0.0), 10.0);
        assert!(Polygon::contains(&outer, &square((2.0, 2.0), 4.0)));
        assert!(!Polygon::contains(&outer, &square((8.0, 8.0), 4.0)));
    }

    #[test]
    fn test_assemble_groups_holes_under_their_shape() {
        // Two shapes, one hole inside the first; flat and unordered, as the
        // engine would hand them back.
        let shape_a = square((0.0, 0.0), 10.0);
        let hole_a: Ring = square((2.0, 2.0), 4.0).into_iter().rev().collect();
        let shape_b = square((20.0, 0.0), 5.0);

        let polygons =
            assemble_polygons(vec![hole_a.clone(), shape_b.clone(), shape_a.clone()]).unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].shape(), &shape_b);
        assert!(polygons[0].holes().is_empty());
        assert_eq!(polygons[1].shape(), &shape_a);
        assert_eq!(polygons[1].holes(), &[hole_a]);
    }

    #[test]
    fn test_assemble_drops_orphan_holes() {
        let shape = square((0.0, 0.0), 10.0);
        let orphan: Ring = square((20.0, 20.0), 4.0).into_iter().rev().collect();

        let polygons = assemble_polygons(vec![shape, orphan]).unwrap();
        assert_eq!(polygons.len(), 1);
        assert!(polygons[0].holes().is_empty());
    }

    #[test]
    fn test_empty_operand_list_is_rejected() {
        let polygon = Polygon::from_shape(square((0.0, 0.0), 10.0)).unwrap();
        assert!(matches!(
            polygon.union_multiple(&[]),
            Err(Error::InvalidClip(_))
        ));
    }
}
