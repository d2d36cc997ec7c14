//! Selection model and validation.

use stitchcut_core::LineSpec;

use crate::document::Document;
use crate::SelectionError;

/// One selected object and its selected sub-edges.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionItem {
    /// Index of the object in the document.
    pub object: usize,
    /// Selected edge indices within that object.
    pub edges: Vec<usize>,
}

/// The current selection, mirroring the host's object + sub-edge model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected objects, in selection order.
    pub items: Vec<SelectionItem>,
}

impl Selection {
    /// A selection of exactly one edge of one object.
    pub fn single_edge(object: usize, edge: usize) -> Self {
        Self {
            items: vec![SelectionItem {
                object,
                edges: vec![edge],
            }],
        }
    }
}

/// A validated selection: the sketch and edge indices plus the line
/// derived from the edge's endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLine {
    /// Index of the sketch object in the document.
    pub object: usize,
    /// Index of the edge within the sketch.
    pub edge: usize,
    /// The edge as an immutable line value.
    pub line: LineSpec,
}

/// Validate that the selection is exactly one straight edge of one
/// sketch, and derive its [`LineSpec`].
///
/// # Errors
///
/// Rejects, in order: a selection without exactly one object, an
/// object index outside the document, a non-sketch object, a selection
/// without exactly one edge, an edge index outside the sketch, a
/// non-line edge, and a degenerate (zero-length) edge. The document is
/// never touched.
pub fn resolve_selected_line(
    doc: &Document,
    selection: &Selection,
) -> Result<SelectedLine, SelectionError> {
    if selection.items.len() != 1 {
        return Err(SelectionError::ObjectCountMismatch(selection.items.len()));
    }
    let item = &selection.items[0];
    let object = doc
        .object(item.object)
        .ok_or(SelectionError::ObjectOutOfRange(item.object))?;
    let sketch = object
        .as_sketch()
        .ok_or_else(|| SelectionError::NotASketch(object.name().to_string()))?;
    if item.edges.len() != 1 {
        return Err(SelectionError::EdgeCountMismatch(item.edges.len()));
    }
    let edge = item.edges[0];
    let geometry = sketch
        .geometry(edge)
        .ok_or_else(|| SelectionError::EdgeOutOfRange {
            sketch: sketch.name().to_string(),
            edge,
        })?;
    let (start, end) = geometry
        .line_endpoints()
        .ok_or_else(|| SelectionError::NotALine {
            sketch: sketch.name().to_string(),
            edge,
        })?;
    let line = LineSpec::new(start, end)?;
    Ok(SelectedLine {
        object: item.object,
        edge,
        line,
    })
}
