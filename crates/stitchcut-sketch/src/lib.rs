#![warn(missing_docs)]

//! In-memory sketch document and selection model for the stitchcut tool.
//!
//! This crate is the adapter surface between the pure solver in
//! `stitchcut-core` and whatever owns the actual geometry. It provides
//! a [`Document`] of named objects, a [`Sketch`] geometry container,
//! selection validation that insists on exactly one straight edge, and
//! the atomic replace-in-place operation that swaps the selected line
//! for its stitch cuts and triggers a single recompute.
//!
//! # Example
//!
//! ```
//! use stitchcut_core::{generate, solve, CutParameters};
//! use stitchcut_math::Point3;
//! use stitchcut_sketch::{
//!     apply_cuts, resolve_selected_line, Document, DocumentObject, Selection, Sketch,
//!     SketchGeometry,
//! };
//!
//! let mut sketch = Sketch::new("Sketch");
//! let edge = sketch.add_geometry(SketchGeometry::LineSegment {
//!     start: Point3::origin(),
//!     end: Point3::new(30.0, 0.0, 0.0),
//! });
//! let mut doc = Document::new();
//! let object = doc.add_object(DocumentObject::Sketch(sketch));
//!
//! let target = resolve_selected_line(&doc, &Selection::single_edge(object, edge)).unwrap();
//! let params = CutParameters::new(3.0, 3.0, 5).unwrap();
//! let solved = solve(target.line.length(), &params).unwrap();
//! let segments = generate(&target.line, &params, &solved);
//!
//! apply_cuts(&mut doc, &target, &segments).unwrap();
//! assert_eq!(doc.object(object).unwrap().as_sketch().unwrap().edge_count(), 5);
//! ```

mod apply;
mod document;
mod geometry;
mod selection;

pub use apply::apply_cuts;
pub use document::{Document, DocumentObject};
pub use geometry::{Sketch, SketchGeometry};
pub use selection::{resolve_selected_line, SelectedLine, Selection, SelectionItem};

use stitchcut_core::StitchError;
use thiserror::Error;

/// Errors from selection validation and geometry replacement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// The selection does not hold exactly one object.
    #[error("select exactly one object, got {0}")]
    ObjectCountMismatch(usize),

    /// The selection names an object index the document does not have.
    #[error("document has no object {0}")]
    ObjectOutOfRange(usize),

    /// The selected object is not a sketch.
    #[error("selected object {0:?} is not a sketch")]
    NotASketch(String),

    /// The selection does not hold exactly one edge.
    #[error("select exactly one edge, got {0}")]
    EdgeCountMismatch(usize),

    /// The selected edge index is outside the sketch's geometry list.
    #[error("sketch {sketch:?} has no edge {edge}")]
    EdgeOutOfRange {
        /// Name of the sketch.
        sketch: String,
        /// The out-of-range edge index.
        edge: usize,
    },

    /// The selected edge is not a straight line segment.
    #[error("edge {edge} of sketch {sketch:?} is not a straight line")]
    NotALine {
        /// Name of the sketch.
        sketch: String,
        /// The offending edge index.
        edge: usize,
    },

    /// The selected edge failed to produce a usable line.
    #[error(transparent)]
    Stitch(#[from] StitchError),
}
