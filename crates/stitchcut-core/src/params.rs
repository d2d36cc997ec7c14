//! User-supplied cut parameters and their entry-boundary parsing.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StitchError};

/// Parameters describing the requested cut layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutParameters {
    /// Distance reserved at each end of the line before the first and
    /// after the last cut (mm).
    pub edge_offset: f64,
    /// Gap between consecutive cuts (mm).
    pub gap: f64,
    /// Number of cuts to produce.
    pub count: u32,
}

impl CutParameters {
    /// Build validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::InvalidInput`] when `edge_offset` or
    /// `gap` is negative or non-finite, or `count` is zero.
    pub fn new(edge_offset: f64, gap: f64, count: u32) -> Result<Self> {
        check_scalar("edge offset", edge_offset)?;
        check_scalar("gap", gap)?;
        if count == 0 {
            return Err(StitchError::InvalidInput {
                field: "count",
                reason: "must be at least 1".into(),
            });
        }
        Ok(Self {
            edge_offset,
            gap,
            count,
        })
    }

    /// Parse parameters from raw text fields.
    ///
    /// This is the entry boundary for interactive input: unparseable
    /// text becomes [`StitchError::InvalidInput`] naming the field,
    /// never a panic or an [`StitchError::Infeasible`].
    pub fn parse(offset_text: &str, gap_text: &str, count_text: &str) -> Result<Self> {
        let edge_offset = parse_scalar("edge offset", offset_text)?;
        let gap = parse_scalar("gap", gap_text)?;
        let count = count_text
            .trim()
            .parse::<u32>()
            .map_err(|_| StitchError::InvalidInput {
                field: "count",
                reason: format!("{:?} is not a positive integer", count_text),
            })?;
        Self::new(edge_offset, gap, count)
    }
}

impl Default for CutParameters {
    /// The interactive dialog's pre-filled values.
    fn default() -> Self {
        Self {
            edge_offset: 3.0,
            gap: 3.0,
            count: 5,
        }
    }
}

fn check_scalar(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(StitchError::InvalidInput {
            field,
            reason: format!("{} is not a finite number", value),
        });
    }
    if value < 0.0 {
        return Err(StitchError::InvalidInput {
            field,
            reason: format!("{} is negative", value),
        });
    }
    Ok(())
}

fn parse_scalar(field: &'static str, text: &str) -> Result<f64> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| StitchError::InvalidInput {
            field,
            reason: format!("{:?} is not a number", text),
        })?;
    check_scalar(field, value)?;
    Ok(value)
}
