#![warn(missing_docs)]

//! Cut layout solver and segment generator for the stitchcut tool.
//!
//! Given a straight line, an edge offset, a gap and a cut count, this
//! crate computes the per-cut length and the replacement segments that
//! divide the line into evenly spaced stitch cuts. Everything here is
//! pure computation; reading selections and writing geometry are the
//! host adapter's job.
//!
//! # Example
//!
//! ```
//! use stitchcut_core::{generate, solve, CutParameters, LineSpec};
//! use stitchcut_math::Point3;
//!
//! let line = LineSpec::new(Point3::origin(), Point3::new(30.0, 0.0, 0.0)).unwrap();
//! let params = CutParameters::new(3.0, 3.0, 5).unwrap();
//!
//! let solved = solve(line.length(), &params).unwrap();
//! assert!((solved.cut_length - 2.4).abs() < 1e-12);
//!
//! let segments = generate(&line, &params, &solved);
//! assert_eq!(segments.len(), 5);
//! ```

pub mod error;
pub mod generate;
pub mod line;
pub mod params;
pub mod preview;
pub mod solve;

pub use error::{Result, StitchError};
pub use generate::{generate, Segment};
pub use line::LineSpec;
pub use params::CutParameters;
pub use preview::{preview, Preview};
pub use solve::{solve, SolvedCuts};
