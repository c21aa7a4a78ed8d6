//! Shared geometric types and helpers.

pub mod polygon;

/// A single closed boundary, stored as an ordered vertex list.
///
/// Rings are implicitly closed: the last vertex connects back to the first.
/// Orientation (clockwise or counter-clockwise) is always derived from the
/// vertex order, never stored alongside it.
pub type Ring = Vec<(f64, f64)>;

/// An ordered collection of rings, the wire format of the clipping layer.
pub type Paths = Vec<Ring>;
