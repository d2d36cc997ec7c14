//! Error types for the cut solver.

use thiserror::Error;

/// Errors from solving and generating stitch cuts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StitchError {
    /// The selected line has effectively zero length.
    #[error("line is degenerate: length {0:.6} mm")]
    DegenerateLine(f64),

    /// A parameter field holds a value that is not a usable number.
    ///
    /// This is a boundary condition (bad text, negative scalar, zero
    /// count), distinct from [`StitchError::Infeasible`] which is
    /// reserved for numerically valid parameters that cannot fit.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending parameter field.
        field: &'static str,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Valid parameters that leave no usable length on the line.
    #[error("cuts do not fit: usable length {usable:.3} mm on a {length:.3} mm line")]
    Infeasible {
        /// Total length of the line.
        length: f64,
        /// Computed usable length (zero or negative).
        usable: f64,
    },
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, StitchError>;
