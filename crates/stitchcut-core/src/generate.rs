//! Replacement segment generation.

use serde::{Deserialize, Serialize};
use stitchcut_math::Point3;

use crate::line::LineSpec;
use crate::params::CutParameters;
use crate::solve::SolvedCuts;

/// One replacement segment, collinear with the original line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point (closer to the line's start).
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

impl Segment {
    /// Euclidean length of this segment.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Generate the replacement segments for a solved cut layout.
///
/// Cut `i` starts at distance `edge_offset + i*(cut_length + gap)` from
/// the line's start and extends by `cut_length`. The last end distance
/// is clamped to `length - edge_offset` so floating-point accumulation
/// over many cuts cannot push it past the reserved end offset; the
/// clamp does not re-check feasibility, which [`crate::solve`] settled
/// beforehand.
///
/// Always returns exactly `params.count` segments, ordered by
/// increasing distance from the line's start.
pub fn generate(line: &LineSpec, params: &CutParameters, solved: &SolvedCuts) -> Vec<Segment> {
    let far_limit = line.length() - params.edge_offset;
    let mut segments = Vec::with_capacity(params.count as usize);
    for i in 0..params.count {
        let start_dist = params.edge_offset + i as f64 * (solved.cut_length + params.gap);
        let end_dist = (start_dist + solved.cut_length).min(far_limit);
        segments.push(Segment {
            start: line.point_at(start_dist),
            end: line.point_at(end_dist),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::solve::solve;

    fn x_line(length: f64) -> LineSpec {
        LineSpec::new(Point3::origin(), Point3::new(length, 0.0, 0.0)).unwrap()
    }

    #[test]
    fn test_generate_offset_and_gap() {
        // length 30, offset 3, gap 3, 5 cuts of 2.4
        let line = x_line(30.0);
        let params = CutParameters::new(3.0, 3.0, 5).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);

        assert_eq!(segments.len(), 5);
        for seg in &segments {
            assert_relative_eq!(seg.length(), 2.4, epsilon = 1e-9);
        }
        assert_relative_eq!(segments[0].start.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(segments[4].end.x, 27.0, epsilon = 1e-9);
    }

    #[test]
    fn test_generate_tight_layout() {
        // length 20, no offset, no gap, 4 cuts: [0,5][5,10][10,15][15,20]
        let line = x_line(20.0);
        let params = CutParameters::new(0.0, 0.0, 4).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);

        assert_eq!(segments.len(), 4);
        for (i, seg) in segments.iter().enumerate() {
            assert_relative_eq!(seg.start.x, 5.0 * i as f64, epsilon = 1e-9);
            assert_relative_eq!(seg.end.x, 5.0 * (i + 1) as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_generate_ordered_and_non_overlapping() {
        let line = x_line(100.0);
        let params = CutParameters::new(7.0, 2.5, 9).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);

        assert_eq!(segments.len(), 9);
        for pair in segments.windows(2) {
            // Gap between consecutive cuts, never overlap
            assert!(pair[1].start.x - pair[0].end.x > 2.5 - 1e-9);
        }
        // All within [offset, length - offset]
        for seg in &segments {
            assert!(seg.start.x >= 7.0 - 1e-9);
            assert!(seg.end.x <= 93.0 + 1e-9);
        }
    }

    #[test]
    fn test_generate_single_cut_spans_usable_length() {
        let line = x_line(10.0);
        let params = CutParameters::new(2.0, 0.0, 1).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);

        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0].start.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(segments[0].end.x, 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_generate_off_axis_line() {
        let line = LineSpec::new(Point3::new(1.0, 1.0, 1.0), Point3::new(4.0, 5.0, 1.0)).unwrap();
        let params = CutParameters::new(0.5, 0.5, 3).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);

        assert_eq!(segments.len(), 3);
        let dir = line.direction();
        for seg in &segments {
            assert_relative_eq!(seg.length(), solved.cut_length, epsilon = 1e-9);
            // Still collinear with the original line
            let v = (seg.end - seg.start).normalize();
            assert_relative_eq!(v.dot(dir.as_ref()), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_generate_last_end_clamped() {
        let line = x_line(30.0);
        let params = CutParameters::new(3.0, 3.0, 5).unwrap();
        let solved = solve(line.length(), &params).unwrap();
        let segments = generate(&line, &params, &solved);
        let last = segments.last().unwrap();
        assert!(last.end.x <= line.length() - params.edge_offset + 1e-12);
    }
}
