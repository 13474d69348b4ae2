//! R-tree over block boundary lines using the rstar crate.
//!
//! Along one axis every block contributes two boundary lines (its low and
//! high extreme coordinates). A line is stored as the point `[coord, 0]`, so
//! a radius query finds all lines within a 1-D distance. Two blocks are
//! alignment candidates if any of their lines are within range of each
//! other; this prunes the O(N²) pair scan to the pairs that can possibly
//! produce an edge.

use std::collections::BTreeSet;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::geometry::{Axis, Block};

/// One boundary line of one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLine {
    /// Index of the owning block.
    pub block: usize,
    /// Coordinate of the line along the indexed axis.
    pub coord: f64,
}

impl RTreeObject for BoundaryLine {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.coord, 0.0])
    }
}

impl PointDistance for BoundaryLine {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d = self.coord - point[0];
        d * d + point[1] * point[1]
    }
}

/// Spatial index of boundary lines along one axis.
pub struct BoundaryIndex {
    axis: Axis,
    tree: RTree<BoundaryLine>,
}

impl BoundaryIndex {
    /// Bulk-load the boundary lines of `blocks` along `axis`.
    pub fn build(blocks: &[Block], axis: Axis) -> Self {
        let lines: Vec<BoundaryLine> = blocks
            .iter()
            .enumerate()
            .flat_map(|(block, b)| {
                let (lo, hi) = b.boundary_coords(axis);
                [BoundaryLine { block, coord: lo }, BoundaryLine { block, coord: hi }]
            })
            .collect();

        Self {
            axis,
            tree: RTree::bulk_load(lines),
        }
    }

    /// Axis this index was built for.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of lines in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// All lines within `range` of `coord` (inclusive).
    pub fn lines_within(&self, coord: f64, range: f64) -> Vec<BoundaryLine> {
        self.tree
            .locate_within_distance([coord, 0.0], range * range)
            .copied()
            .collect()
    }

    /// Block pairs `(i, j)`, `i < j`, with some boundary lines within `range`.
    ///
    /// The set is ordered so callers iterate pairs in the same order as a
    /// nested `for i { for j > i }` scan.
    pub fn candidate_pairs(&self, range: f64) -> BTreeSet<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        if !(range >= 0.0) {
            return pairs;
        }
        for line in self.tree.iter() {
            for other in self.lines_within(line.coord, range) {
                if other.block != line.block {
                    pairs.insert((line.block.min(other.block), line.block.max(other.block)));
                }
            }
        }
        pairs
    }
}
