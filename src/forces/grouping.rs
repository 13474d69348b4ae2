//! Size-class grouping.
//!
//! Movable blocks repel each other with plain antigravity, except that the
//! force flips to attraction when the two blocks share a width or a height.
//! Same-sized blocks drift together while different sizes push apart.

use crate::error::Result;
use crate::forces::repulsion::anti_gravity;
use crate::forces::sink::{ForceSink, apply_pair};
use crate::geometry::{Block, Vector, same_height, same_width};
use crate::layout::LayoutParams;

/// Grouping force on `tgt` from `src`.
pub fn grouping_force(src: &Block, tgt: &Block, coeff: f64) -> Vector {
    let force = anti_gravity(src, tgt, coeff);
    if same_width(src, tgt) || same_height(src, tgt) {
        -force
    } else {
        force
    }
}

/// Apply the grouping force between every pair of movable blocks, at centres.
pub fn apply_grouping<S: ForceSink + ?Sized>(
    blocks: &[Block],
    params: &LayoutParams,
    sink: &mut S,
) -> Result<()> {
    for (i, src) in blocks.iter().enumerate() {
        for (j, tgt) in blocks.iter().enumerate().skip(i + 1) {
            if src.is_static || tgt.is_static {
                continue;
            }
            let force = grouping_force(src, tgt, params.grouping_coeff);
            apply_pair(sink, (i, src.position), (j, tgt.position), force)?;
        }
    }
    Ok(())
}
