//! Inverse-square "antigravity" repulsion.
//!
//! Every law returns the force on `tgt`; the force on `src` is its negation.
//! Coincident centres give a zero force rather than a division by zero.

use crate::error::Result;
use crate::forces::sink::{ForceSink, apply_pair};
use crate::geometry::{Axis, Block, Vector};
use crate::graph::DisjointSet;
use crate::layout::LayoutParams;

/// Average of the two blocks' `sqrt(area)`.
#[inline]
pub fn characteristic_size(a: &Block, b: &Block) -> f64 {
    0.5 * (a.characteristic_size() + b.characteristic_size())
}

/// `coeff / d²` along the unit vector from `src` to `tgt`.
///
/// Zero when the centres are so close that `d²` underflows.
pub fn anti_gravity(src: &Block, tgt: &Block, coeff: f64) -> Vector {
    let Some(unit) = Vector::unit_towards(src.position, tgt.position) else {
        return Vector::ZERO;
    };
    let d = Vector::dist_euclid(src.position, tgt.position);
    let d2 = d * d;
    if !(d2 > 0.0 && d2.is_finite()) {
        return Vector::ZERO;
    }
    let force = unit * (coeff / d2);
    if force.is_finite() { force } else { Vector::ZERO }
}

/// [`anti_gravity`], cut off beyond `range_factor` characteristic sizes.
pub fn anti_gravity_ranged(src: &Block, tgt: &Block, coeff: f64, range_factor: f64) -> Vector {
    let d = Vector::dist_euclid(src.position, tgt.position);
    if d < range_factor * characteristic_size(src, tgt) {
        anti_gravity(src, tgt, coeff)
    } else {
        Vector::ZERO
    }
}

/// Independent per-axis falloff `coeff / (1000 + d_axis²)`.
///
/// Each component is zero beyond 1.5 characteristic sizes on its axis and
/// points from `src` towards `tgt` on that axis (zero if level).
pub fn anti_gravity_manhattan(src: &Block, tgt: &Block, coeff: f64) -> Vector {
    let cutoff = 1.5 * characteristic_size(src, tgt);
    let component = |axis: Axis| {
        let delta = axis.component(tgt.position) - axis.component(src.position);
        let d = delta.abs();
        if d < cutoff && delta != 0.0 {
            delta.signum() * coeff / (1000.0 + d * d)
        } else {
            0.0
        }
    };
    Vector::new(component(Axis::X), component(Axis::Y))
}

/// Ranged repulsion between every pair of movable blocks, applied at centres.
pub fn apply_repulsion<S: ForceSink + ?Sized>(
    blocks: &[Block],
    params: &LayoutParams,
    sink: &mut S,
) -> Result<()> {
    for (i, src) in blocks.iter().enumerate() {
        for (j, tgt) in blocks.iter().enumerate().skip(i + 1) {
            if src.is_static || tgt.is_static {
                continue;
            }
            let force = anti_gravity_ranged(src, tgt, params.repulsion_coeff, params.repulsion_range);
            apply_pair(sink, (i, src.position), (j, tgt.position), force)?;
        }
    }
    Ok(())
}

/// Ranged repulsion with the aligned axis switched off.
///
/// For each movable pair, the X component is zeroed if the pair is connected
/// in `uf_x`, the Y component if connected in `uf_y`.
pub fn apply_disjoint_repulsion<S: ForceSink + ?Sized>(
    blocks: &[Block],
    params: &LayoutParams,
    uf_x: &mut DisjointSet<usize>,
    uf_y: &mut DisjointSet<usize>,
    sink: &mut S,
) -> Result<()> {
    for (i, src) in blocks.iter().enumerate() {
        for (j, tgt) in blocks.iter().enumerate().skip(i + 1) {
            if src.is_static || tgt.is_static {
                continue;
            }
            let mut force =
                anti_gravity_ranged(src, tgt, params.repulsion_coeff, params.repulsion_range);
            if uf_x.are_connected(&i, &j) {
                force.x = 0.0;
            }
            if uf_y.are_connected(&i, &j) {
                force.y = 0.0;
            }
            apply_pair(sink, (i, src.position), (j, tgt.position), force)?;
        }
    }
    Ok(())
}
