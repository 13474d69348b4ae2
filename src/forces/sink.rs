//! Where computed forces go.
//!
//! Force laws are pure; the `apply_*` functions hand their results to a
//! [`ForceSink`], which stands in for the physics engine's
//! "apply force F at point P on body B". A `Vec<AppliedForce>` is the
//! default sink and is what the engine returns to JavaScript.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::Vector;

/// One force application: `force` at world point `point` on block `block`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedForce {
    pub block: usize,
    pub point: Vector,
    pub force: Vector,
}

/// Receiver of force applications.
pub trait ForceSink {
    fn apply_force(&mut self, block: usize, point: Vector, force: Vector);
}

impl ForceSink for Vec<AppliedForce> {
    fn apply_force(&mut self, block: usize, point: Vector, force: Vector) {
        self.push(AppliedForce {
            block,
            point,
            force,
        });
    }
}

/// Apply a single force, rejecting non-finite values. Zero forces are dropped.
pub(crate) fn apply_checked<S: ForceSink + ?Sized>(
    sink: &mut S,
    block: usize,
    point: Vector,
    force: Vector,
) -> Result<()> {
    if !force.is_finite() || !point.is_finite() {
        return Err(LayoutError::NonFiniteForce { block });
    }
    if !force.is_zero() {
        sink.apply_force(block, point, force);
    }
    Ok(())
}

/// Apply `force_on_tgt` to `tgt` and its negation to `src`.
///
/// Both halves are checked before either is emitted.
pub(crate) fn apply_pair<S: ForceSink + ?Sized>(
    sink: &mut S,
    (src, src_point): (usize, Vector),
    (tgt, tgt_point): (usize, Vector),
    force_on_tgt: Vector,
) -> Result<()> {
    if !force_on_tgt.is_finite() || !tgt_point.is_finite() {
        return Err(LayoutError::NonFiniteForce { block: tgt });
    }
    if !src_point.is_finite() {
        return Err(LayoutError::NonFiniteForce { block: src });
    }
    if force_on_tgt.is_zero() {
        return Ok(());
    }
    sink.apply_force(tgt, tgt_point, force_on_tgt);
    sink.apply_force(src, src_point, -force_on_tgt);
    Ok(())
}

/// Sum of all forces applied to `block`.
pub fn net_force(forces: &[AppliedForce], block: usize) -> Vector {
    forces
        .iter()
        .filter(|f| f.block == block)
        .fold(Vector::ZERO, |acc, f| acc + f.force)
}
