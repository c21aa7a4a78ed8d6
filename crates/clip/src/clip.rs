//! The clip orchestrator: boolean operations on raw path collections.
//!
//! Each invocation drives one fresh engine instance: the subject paths are
//! registered under the engine's subject role, every clip operand under the
//! clip role (multiple operands accumulate into one combined clip set), and
//! the chosen boolean operator is executed under a single fill rule applied
//! to both roles.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay::{Overlay, ShapeType};
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::i_float::int::point::IntPoint;
use polyset_core::{Error, Paths, Result, Ring};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert;

/// Default fixed-point scale factor: a 10^-6 coordinate grid.
pub const DEFAULT_SCALE: f64 = 1_000_000.0;

/// Boolean operator applied by [`clip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClipType {
    /// Regions covered by both subject and clip set.
    Intersection,
    /// Regions covered by the subject or the clip set.
    Union,
    /// Regions covered by the subject but not the clip set.
    Difference,
    /// Regions covered by exactly one of subject and clip set.
    Xor,
}

impl From<ClipType> for OverlayRule {
    fn from(op: ClipType) -> Self {
        match op {
            ClipType::Intersection => OverlayRule::Intersect,
            ClipType::Union => OverlayRule::Union,
            ClipType::Difference => OverlayRule::Difference,
            ClipType::Xor => OverlayRule::Xor,
        }
    }
}

/// Fill rule resolving overlapping path coverage into in/out regions.
///
/// Applied identically to the subject and the clip set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillType {
    /// A point is filled if it is enclosed an odd number of times.
    EvenOdd,
    /// A point is filled if its winding number is non-zero.
    NonZero,
    /// A point is filled if its winding number is negative.
    Negative,
    /// A point is filled if its winding number is positive.
    Positive,
}

impl From<FillType> for FillRule {
    fn from(fill: FillType) -> Self {
        match fill {
            FillType::EvenOdd => FillRule::EvenOdd,
            FillType::NonZero => FillRule::NonZero,
            FillType::Negative => FillRule::Negative,
            FillType::Positive => FillRule::Positive,
        }
    }
}

/// Options for a clip invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipOptions {
    /// Fixed-point scale factor; must keep scaled coordinates in `i32` range.
    pub scale: f64,

    /// Fill rule for subject and clip paths.
    pub fill_type: FillType,
}

impl ClipOptions {
    /// Sets the fixed-point scale factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the fill rule.
    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            fill_type: FillType::NonZero,
        }
    }
}

/// Clips `subject` against one or more clip operands with default options.
///
/// See [`clip_with`] for the full contract.
pub fn clip(subject: &[Ring], clips: &[Paths], op: ClipType) -> Result<Option<Paths>> {
    clip_with(subject, clips, op, &ClipOptions::default())
}

/// Clips `subject` against one or more clip operands.
///
/// Returns the result as a flat ring collection: outer boundaries wound
/// counter-clockwise, holes clockwise, with no grouping between them. An
/// empty collection is a valid outcome and means the result region is empty
/// (for example the intersection of disjoint inputs); `None` means the
/// engine could not produce a solution because the subject degenerates to
/// nothing on the integer grid.
///
/// # Errors
/// Returns [`Error::InvalidClip`] if `clips` is empty.
pub fn clip_with(
    subject: &[Ring],
    clips: &[Paths],
    op: ClipType,
    options: &ClipOptions,
) -> Result<Option<Paths>> {
    if clips.is_empty() {
        return Err(Error::InvalidClip(
            "at least one clip operand is required".into(),
        ));
    }

    let subject_paths = quantize(subject, options.scale);
    if subject_paths.is_empty() {
        return Ok(None);
    }

    let capacity = subject_paths.len() + clips.iter().map(Vec::len).sum::<usize>();
    let mut overlay = Overlay::new(capacity);
    for path in &subject_paths {
        overlay.add_path(path, ShapeType::Subject);
    }
    for operand in clips {
        for path in &quantize(operand, options.scale) {
            overlay.add_path(path, ShapeType::Clip);
        }
    }

    let graph = overlay.into_graph(options.fill_type.into());
    let shapes = graph.extract_shapes(op.into());

    // Flatten the engine's hole grouping; the polygon layer regroups holes
    // geometrically from winding and containment.
    let mut solution = Paths::new();
    for shape in shapes {
        for path in shape {
            solution.push(convert::ring_from_engine(&path, options.scale));
        }
    }

    Ok(Some(solution))
}

/// [`clip`] with the operator fixed to intersection.
pub fn intersect(subject: &[Ring], clips: &[Paths]) -> Result<Option<Paths>> {
    clip(subject, clips, ClipType::Intersection)
}

/// [`clip`] with the operator fixed to union.
pub fn union(subject: &[Ring], clips: &[Paths]) -> Result<Option<Paths>> {
    clip(subject, clips, ClipType::Union)
}

/// [`clip`] with the operator fixed to difference.
pub fn difference(subject: &[Ring], clips: &[Paths]) -> Result<Option<Paths>> {
    clip(subject, clips, ClipType::Difference)
}

/// [`clip`] with the operator fixed to symmetric difference.
pub fn xor(subject: &[Ring], clips: &[Paths]) -> Result<Option<Paths>> {
    clip(subject, clips, ClipType::Xor)
}

/// Scales a path collection onto the integer grid, dropping rings that
/// cannot form a closed boundary.
fn quantize(paths: &[Ring], scale: f64) -> Vec<Vec<IntPoint>> {
    let mut engine_paths = convert::paths_to_engine(paths, scale);
    let before = engine_paths.len();
    engine_paths.retain(|path| path.len() >= 3);
    if engine_paths.len() < before {
        log::debug!(
            "dropped {} degenerate ring(s) before clipping",
            before - engine_paths.len()
        );
    }
    engine_paths
}
