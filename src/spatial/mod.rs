//! Spatial indexing for the alignment broad phase.
//!
//! This module provides an R-tree based index of block boundary lines so the
//! per-axis proximity graph only examines block pairs that can be in range.

mod rtree;

pub use rtree::{BoundaryIndex, BoundaryLine};
