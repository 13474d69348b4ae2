//! 1-D clustering of boundary coordinates.
//!
//! This module provides the fixed-radius clustering used to find shared
//! alignment lines ("attractors"), along with the sorted-search and
//! permutation helpers it is built on.

mod fixed_radius;
mod search;

pub use fixed_radius::{attractors, boundary_attractors, fixed_radius_clustering};
pub use search::{argsort, argsort_f64, dedup_sorted, lower_bound, mean, undo_sort_by, upper_bound};
