//! Block snapshot and boundary queries.
//!
//! A block is a (possibly rotated) rectangle described by its vertices.
//! Alignment works on "boundary points": along an axis, the low boundary
//! point is the centroid of the vertices attaining the minimum coordinate,
//! the high boundary point the centroid of those attaining the maximum.
//! For an axis-aligned rectangle these are the midpoints of its left/right
//! (or top/bottom) edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vector::Vector;
use crate::error::{LayoutError, Result};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Coordinate of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vector) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// A vector of length `magnitude` pointing along this axis.
    #[inline]
    pub fn along(self, magnitude: f64) -> Vector {
        match self {
            Axis::X => Vector::new(magnitude, 0.0),
            Axis::Y => Vector::new(0.0, magnitude),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of a point set, `None` if empty.
    pub fn of(points: &[Vector]) -> Option<Bounds> {
        let first = points.first()?;
        let mut b = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// `(min, max)` along an axis.
    #[inline]
    pub fn span(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        }
    }
}

/// Read-only snapshot of one rigid body.
///
/// The block's index is its position in the slice handed to the force
/// functions; it must stay stable for the duration of a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub position: Vector,
    pub vertices: Vec<Vector>,
    pub area: f64,
    pub is_static: bool,
}

impl Block {
    pub fn new(position: Vector, vertices: Vec<Vector>, area: f64, is_static: bool) -> Self {
        Self {
            position,
            vertices,
            area,
            is_static,
        }
    }

    /// Axis-aligned rectangle centred at `(x, y)`.
    ///
    /// Vertices are listed clockwise from the top-left corner.
    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            position: Vector::new(x, y),
            vertices: vec![
                Vector::new(x - hw, y - hh),
                Vector::new(x + hw, y - hh),
                Vector::new(x + hw, y + hh),
                Vector::new(x - hw, y + hh),
            ],
            area: width * height,
            is_static: false,
        }
    }

    /// Same block, marked immovable.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Check the block can take part in force computation.
    pub fn validate(&self, index: usize) -> Result<()> {
        if self.vertices.is_empty() {
            return Err(LayoutError::EmptyBlock { index });
        }
        let finite = self.position.is_finite()
            && self.area.is_finite()
            && self.vertices.iter().all(|v| v.is_finite());
        if !finite {
            return Err(LayoutError::NonFiniteGeometry { index });
        }
        Ok(())
    }

    /// Bounding box of the vertices (degenerate at the centre if there are none).
    pub fn bounds(&self) -> Bounds {
        Bounds::of(&self.vertices).unwrap_or(Bounds {
            min_x: self.position.x,
            min_y: self.position.y,
            max_x: self.position.x,
            max_y: self.position.y,
        })
    }

    /// `sqrt(area)`, the block's contribution to the pair's characteristic size.
    #[inline]
    pub fn characteristic_size(&self) -> f64 {
        self.area.max(0.0).sqrt()
    }

    /// Low and high boundary coordinates along `axis`.
    pub fn boundary_coords(&self, axis: Axis) -> (f64, f64) {
        self.bounds().span(axis)
    }

    /// Low and high boundary points along `axis` (vertex-cluster centroids).
    pub fn boundary_points(&self, axis: Axis) -> (Vector, Vector) {
        let (lo, hi) = self.boundary_coords(axis);
        (self.extreme_centroid(axis, lo), self.extreme_centroid(axis, hi))
    }

    fn extreme_centroid(&self, axis: Axis, coord: f64) -> Vector {
        let extreme: Vec<Vector> = self
            .vertices
            .iter()
            .copied()
            .filter(|&v| axis.component(v) == coord)
            .collect();
        Vector::mean(&extreme).unwrap_or(self.position)
    }
}

/// Nearest pair of boundary points between two blocks along `axis`.
///
/// Tries (low, low), (low, high), (high, low), (high, high) in that order and
/// keeps the first pair with the smallest axial distance. Returns
/// `(pos_src, pos_tgt, distance)`.
pub fn closest_boundary_pair(src: &Block, tgt: &Block, axis: Axis) -> (Vector, Vector, f64) {
    let (src_lo, src_hi) = src.boundary_points(axis);
    let (tgt_lo, tgt_hi) = tgt.boundary_points(axis);

    let mut best = (src_lo, tgt_lo, f64::INFINITY);
    for (s, t) in [(src_lo, tgt_lo), (src_lo, tgt_hi), (src_hi, tgt_lo), (src_hi, tgt_hi)] {
        let d = (axis.component(t) - axis.component(s)).abs();
        if d < best.2 {
            best = (s, t, d);
        }
    }
    best
}

/// True if the two blocks have exactly the same bounding-box width.
pub fn same_width(a: &Block, b: &Block) -> bool {
    a.bounds().width() == b.bounds().width()
}

/// True if the two blocks have exactly the same bounding-box height.
pub fn same_height(a: &Block, b: &Block) -> bool {
    a.bounds().height() == b.bounds().height()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_bounds() {
        let b = Block::rectangle(100.0, 50.0, 40.0, 20.0);
        let bounds = b.bounds();
        assert_eq!(bounds.min_x, 80.0);
        assert_eq!(bounds.max_x, 120.0);
        assert_eq!(bounds.min_y, 40.0);
        assert_eq!(bounds.max_y, 60.0);
        assert_eq!(b.area, 800.0);
        assert!(!b.is_static);
    }

    #[test]
    fn test_boundary_points_are_edge_midpoints() {
        let b = Block::rectangle(0.0, 0.0, 10.0, 4.0);
        let (left, right) = b.boundary_points(Axis::X);
        assert_eq!(left, Vector::new(-5.0, 0.0));
        assert_eq!(right, Vector::new(5.0, 0.0));
        let (top, bottom) = b.boundary_points(Axis::Y);
        assert_eq!(top, Vector::new(0.0, -2.0));
        assert_eq!(bottom, Vector::new(0.0, 2.0));
    }

    #[test]
    fn test_boundary_points_rotated() {
        // Diamond: each extreme is attained by exactly one vertex.
        let b = Block::new(
            Vector::ZERO,
            vec![
                Vector::new(0.0, -1.0),
                Vector::new(1.0, 0.0),
                Vector::new(0.0, 1.0),
                Vector::new(-1.0, 0.0),
            ],
            2.0,
            false,
        );
        assert_eq!(
            b.boundary_points(Axis::X),
            (Vector::new(-1.0, 0.0), Vector::new(1.0, 0.0))
        );
    }

    #[test]
    fn test_closest_boundary_pair() {
        // Right edge of a (x=10) is 2 px from left edge of b (x=12).
        let a = Block::rectangle(5.0, 0.0, 10.0, 10.0);
        let b = Block::rectangle(17.0, 40.0, 10.0, 10.0);
        let (ps, pt, d) = closest_boundary_pair(&a, &b, Axis::X);
        assert_eq!(ps, Vector::new(10.0, 0.0));
        assert_eq!(pt, Vector::new(12.0, 40.0));
        assert_eq!(d, 2.0);
    }

    #[test]
    fn test_closest_boundary_pair_prefers_first_on_tie() {
        let a = Block::rectangle(0.0, 0.0, 10.0, 10.0);
        let b = Block::rectangle(0.0, 30.0, 10.0, 10.0);
        // low-low and high-high both at distance 0; low-low wins.
        let (ps, pt, d) = closest_boundary_pair(&a, &b, Axis::X);
        assert_eq!(d, 0.0);
        assert_eq!(ps.x, -5.0);
        assert_eq!(pt.x, -5.0);
    }

    #[test]
    fn test_same_size() {
        let a = Block::rectangle(0.0, 0.0, 30.0, 60.0);
        let b = Block::rectangle(100.0, 0.0, 30.0, 20.0);
        let c = Block::rectangle(0.0, 100.0, 50.0, 20.0);
        assert!(same_width(&a, &b));
        assert!(!same_height(&a, &b));
        assert!(same_height(&b, &c));
        assert!(!same_width(&a, &c));
    }

    #[test]
    fn test_validate() {
        let ok = Block::rectangle(0.0, 0.0, 1.0, 1.0);
        assert!(ok.validate(0).is_ok());

        let empty = Block::new(Vector::ZERO, Vec::new(), 1.0, false);
        assert_eq!(empty.validate(3), Err(LayoutError::EmptyBlock { index: 3 }));

        let mut nan = Block::rectangle(0.0, 0.0, 1.0, 1.0);
        nan.vertices[2].x = f64::NAN;
        assert_eq!(nan.validate(1), Err(LayoutError::NonFiniteGeometry { index: 1 }));
    }
}
