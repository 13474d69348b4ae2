//! Vector value type.
//!
//! Positions, boundary points and forces are all `Vector`s. Arithmetic is
//! closed-form; the only partial operation is normalisation, which returns
//! `None` for a zero-length vector instead of producing NaN.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2-D vector in engine space (pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// The zero vector.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` when the vector has zero (or non-finite) length.
    pub fn normalized(self) -> Option<Vector> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(Vector::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Unit vector pointing from `from` to `to`, or `None` if they coincide.
    #[inline]
    pub fn unit_towards(from: Vector, to: Vector) -> Option<Vector> {
        (to - from).normalized()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn dist_euclid(a: Vector, b: Vector) -> f64 {
        (b - a).length()
    }

    /// Horizontal distance between two points.
    #[inline]
    pub fn dist_horiz(a: Vector, b: Vector) -> f64 {
        (b.x - a.x).abs()
    }

    /// Vertical distance between two points.
    #[inline]
    pub fn dist_verti(a: Vector, b: Vector) -> f64 {
        (b.y - a.y).abs()
    }

    /// Mean of a set of points, `None` if the set is empty.
    pub fn mean(points: &[Vector]) -> Option<Vector> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let sum = points.iter().fold(Vector::ZERO, |acc, &p| acc + p);
        Some(Vector::new(sum.x / n, sum.y / n))
    }

    /// True if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True if both components are exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}
