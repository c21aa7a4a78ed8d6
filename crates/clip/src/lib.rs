//! # Polyset Clip
//!
//! Boolean set operations on structured 2D polygons, backed by the
//! `i_overlay` clipping engine.
//!
//! A [`Polygon`] is one outer boundary plus zero or more holes, with ring
//! windings normalized at construction (counter-clockwise shape, clockwise
//! holes). Boolean operations hand the rings to the engine on a fixed-point
//! integer grid and rebuild well-formed polygons from its output by
//! classifying rings by winding and grouping holes by containment.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyset_clip::Polygon;
//!
//! let plate = Polygon::from_shape(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap();
//! let cutout = Polygon::from_shape(vec![(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)]).unwrap();
//!
//! let result = plate.difference(&cutout).unwrap().expect("solution");
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].holes().len(), 1);
//! ```
//!
//! ## Failure Channels
//!
//! Caller contract violations (empty clip operand list, rings with fewer
//! than three vertices) surface as [`Error`]. Geometric non-solutions are
//! not errors: every boolean operation returns `Ok(None)` when the engine
//! cannot produce a solution, and an empty result collection when the
//! result region is empty. Callers must check for both.
//!
//! ## Raw Path Operations
//!
//! The [`clip`] / [`clip_with`] functions (and the fixed-operator wrappers
//! [`intersect`], [`union`], [`difference`], [`xor`]) operate on raw path
//! collections and return flat, ungrouped ring collections for callers that
//! manage polygon structure themselves.

pub mod clip;
pub mod convert;
pub mod polygon;

// Re-exports
pub use clip::{
    clip, clip_with, difference, intersect, union, xor, ClipOptions, ClipType, FillType,
    DEFAULT_SCALE,
};
pub use polygon::Polygon;
pub use polyset_core::{Error, Paths, Result, Ring};
