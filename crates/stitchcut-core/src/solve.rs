//! Feasibility check and cut-length computation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StitchError};
use crate::params::CutParameters;

/// The solved cut layout for a given line length and parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedCuts {
    /// Length left for cutting after both edge offsets and all gaps (mm).
    pub usable_length: f64,
    /// Length of each individual cut (mm), always strictly positive.
    pub cut_length: f64,
}

/// Solve the cut layout for a line of the given length.
///
/// `usable = length - 2*edge_offset - (count - 1)*gap`. Feasibility is
/// an exact comparison: `usable <= 0.0` is infeasible, with no partial
/// or best-effort result. Pure and O(1), safe to re-invoke on every
/// field edit.
///
/// # Errors
///
/// * [`StitchError::InvalidInput`] if `length` is not a positive finite
///   number.
/// * [`StitchError::Infeasible`] if the requested offsets, gap and
///   count leave no usable length.
pub fn solve(length: f64, params: &CutParameters) -> Result<SolvedCuts> {
    if !length.is_finite() || length <= 0.0 {
        return Err(StitchError::InvalidInput {
            field: "length",
            reason: format!("{} is not a positive length", length),
        });
    }
    // CutParameters fields are public; guard the count - 1 underflow
    if params.count == 0 {
        return Err(StitchError::InvalidInput {
            field: "count",
            reason: "must be at least 1".into(),
        });
    }
    let usable = length - 2.0 * params.edge_offset - (params.count - 1) as f64 * params.gap;
    if usable <= 0.0 {
        return Err(StitchError::Infeasible { length, usable });
    }
    Ok(SolvedCuts {
        usable_length: usable,
        cut_length: usable / params.count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_basic() {
        // length 30, offset 3, gap 3, 5 cuts: usable 30 - 6 - 12 = 12
        let params = CutParameters::new(3.0, 3.0, 5).unwrap();
        let solved = solve(30.0, &params).unwrap();
        assert_relative_eq!(solved.usable_length, 12.0, epsilon = 1e-12);
        assert_relative_eq!(solved.cut_length, 2.4, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_no_offset_no_gap() {
        let params = CutParameters::new(0.0, 0.0, 4).unwrap();
        let solved = solve(20.0, &params).unwrap();
        assert_relative_eq!(solved.usable_length, 20.0, epsilon = 1e-12);
        assert_relative_eq!(solved.cut_length, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_infeasible() {
        // length 10, offset 3, gap 3, 3 cuts: usable 10 - 6 - 6 = -2
        let params = CutParameters::new(3.0, 3.0, 3).unwrap();
        let result = solve(10.0, &params);
        assert!(matches!(result, Err(StitchError::Infeasible { .. })));
    }

    #[test]
    fn test_solve_exact_zero_usable_is_infeasible() {
        // length 10, offset 5, gap 0, 1 cut: usable exactly 0
        let params = CutParameters::new(5.0, 0.0, 1).unwrap();
        let result = solve(10.0, &params);
        match result {
            Err(StitchError::Infeasible { usable, .. }) => {
                assert_relative_eq!(usable, 0.0, epsilon = 1e-12);
            }
            other => panic!("expected Infeasible, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_is_pure() {
        let params = CutParameters::new(2.0, 1.0, 7).unwrap();
        let a = solve(50.0, &params).unwrap();
        let b = solve(50.0, &params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_solve_rejects_non_positive_length() {
        let params = CutParameters::default();
        assert!(matches!(
            solve(0.0, &params),
            Err(StitchError::InvalidInput {
                field: "length",
                ..
            })
        ));
        assert!(matches!(
            solve(f64::NAN, &params),
            Err(StitchError::InvalidInput {
                field: "length",
                ..
            })
        ));
    }
}
