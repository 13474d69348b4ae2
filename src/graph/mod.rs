//! Graph data structures and algorithms.
//!
//! This module provides the generic weighted graph used for alignment
//! sparsification, Kruskal's minimum spanning forest, and the disjoint-set
//! that backs both Kruskal and the per-axis repulsion exemption.

mod mst;
mod pair;
mod union_find;

pub use mst::{Edge, Graph, kruskal};
pub use pair::UnorderedPair;
pub use union_find::DisjointSet;
