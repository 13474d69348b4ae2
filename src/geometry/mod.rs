//! Geometric primitives.
//!
//! This module provides the 2-D vector value type and the block snapshot
//! the force layer reads each tick. Blocks are owned by the external physics
//! engine; here they are plain read-only copies referenced by index.

mod block;
mod vector;

pub use block::{Axis, Block, Bounds, closest_boundary_pair, same_height, same_width};
pub use vector::Vector;
