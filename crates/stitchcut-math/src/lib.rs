#![warn(missing_docs)]

//! Math types for the stitchcut tool.
//!
//! Thin wrappers around nalgebra providing the handful of geometric
//! types the cut solver works with: 3D points, vectors, unit
//! directions, and a linear tolerance for coincidence checks.

use nalgebra::{Unit, Vector3};

/// A point in 3D space (coordinates in millimeters).
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Linear tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
}

impl Tolerance {
    /// Default linear tolerance (1e-6 mm).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two scalar distances are equal within tolerance.
    pub fn distances_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_zero() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(1e-9));
        assert!(tol.is_zero(-1e-9));
        assert!(!tol.is_zero(1e-3));
    }

    #[test]
    fn test_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0 + 1e-8, 2.0, 3.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point3::new(1.001, 2.0, 3.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_distances_equal() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.distances_equal(2.4, 2.4 + 1e-9));
        assert!(!tol.distances_equal(2.4, 2.5));
    }
}
