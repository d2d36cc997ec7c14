//! The line being cut, as an immutable value.

use stitchcut_math::{Dir3, Point3, Tolerance};

use crate::error::{Result, StitchError};

/// A straight line segment with its derived length and direction.
///
/// Created once from externally selected geometry and never mutated;
/// all cut positions are expressed as distances from `start` along
/// `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    start: Point3,
    end: Point3,
    length: f64,
    direction: Dir3,
}

impl LineSpec {
    /// Build a line spec from two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::DegenerateLine`] if the endpoints are
    /// coincident within the default linear tolerance.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        let v = end - start;
        let length = v.norm();
        if Tolerance::DEFAULT.is_zero(length) {
            return Err(StitchError::DegenerateLine(length));
        }
        Ok(Self {
            start,
            end,
            length,
            direction: Dir3::new_normalize(v),
        })
    }

    /// Start point.
    pub fn start(&self) -> Point3 {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Point3 {
        self.end
    }

    /// Euclidean length of the line.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Unit direction from start to end.
    pub fn direction(&self) -> Dir3 {
        self.direction
    }

    /// Point at parametric distance `dist` from the start.
    pub fn point_at(&self, dist: f64) -> Point3 {
        self.start + dist * self.direction.as_ref()
    }
}
