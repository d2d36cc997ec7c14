//! Live preview of the cut length while parameters are being edited.

use std::fmt;

use crate::error::StitchError;
use crate::params::CutParameters;
use crate::solve::solve;

/// Outcome of recomputing the preview for the current field contents.
///
/// Distinguishes unparseable text from valid-but-impossible geometry,
/// so the dialog can show "Error" for the former and "N/A" for the
/// latter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Parameters parse and fit; the per-cut length in mm.
    CutLength(f64),
    /// Parameters parse but leave no usable length.
    Infeasible,
    /// One or more fields hold text that is not a usable number.
    Invalid,
}

impl Preview {
    /// Whether the current field contents can be accepted.
    pub fn is_feasible(&self) -> bool {
        matches!(self, Preview::CutLength(_))
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preview::CutLength(len) => write!(f, "{:.3}", len),
            Preview::Infeasible => write!(f, "N/A"),
            Preview::Invalid => write!(f, "Error"),
        }
    }
}

/// Recompute the preview from the raw text of the three parameter
/// fields.
///
/// Pure function over the field contents; the dialog calls it on every
/// edit event.
pub fn preview(length: f64, offset_text: &str, gap_text: &str, count_text: &str) -> Preview {
    let params = match CutParameters::parse(offset_text, gap_text, count_text) {
        Ok(params) => params,
        Err(_) => return Preview::Invalid,
    };
    match solve(length, &params) {
        Ok(solved) => Preview::CutLength(solved.cut_length),
        Err(StitchError::Infeasible { .. }) => Preview::Infeasible,
        Err(_) => Preview::Invalid,
    }
}
