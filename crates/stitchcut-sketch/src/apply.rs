//! Replace-in-place of the selected line with its stitch cuts.

use stitchcut_core::Segment;

use crate::document::Document;
use crate::geometry::SketchGeometry;
use crate::selection::SelectedLine;
use crate::SelectionError;

/// Replace the selected line with the generated cut segments.
///
/// Re-validates the target against the document's current state, then
/// deletes the original edge, inserts one line segment per cut in
/// order, and signals a single recompute. Validation happens entirely
/// before the first mutation, so a failure leaves the document
/// untouched.
///
/// # Errors
///
/// Returns a [`SelectionError`] if the target no longer names a
/// straight line edge of a sketch in this document.
pub fn apply_cuts(
    doc: &mut Document,
    target: &SelectedLine,
    segments: &[Segment],
) -> Result<(), SelectionError> {
    // Validation pass, no mutation
    {
        let object = doc
            .object(target.object)
            .ok_or(SelectionError::ObjectOutOfRange(target.object))?;
        let sketch = object
            .as_sketch()
            .ok_or_else(|| SelectionError::NotASketch(object.name().to_string()))?;
        let geometry =
            sketch
                .geometry(target.edge)
                .ok_or_else(|| SelectionError::EdgeOutOfRange {
                    sketch: sketch.name().to_string(),
                    edge: target.edge,
                })?;
        if !geometry.is_line_segment() {
            return Err(SelectionError::NotALine {
                sketch: sketch.name().to_string(),
                edge: target.edge,
            });
        }
    }

    {
        // Validated above, lookups cannot fail here
        let sketch = doc
            .object_mut(target.object)
            .and_then(|object| object.as_sketch_mut())
            .ok_or(SelectionError::ObjectOutOfRange(target.object))?;
        sketch.del_geometry(target.edge)?;
        for segment in segments {
            sketch.add_geometry(SketchGeometry::LineSegment {
                start: segment.start,
                end: segment.end,
            });
        }
    }
    doc.recompute();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentObject;
    use crate::geometry::Sketch;
    use crate::selection::{resolve_selected_line, Selection};
    use approx::assert_relative_eq;
    use stitchcut_core::{generate, solve, CutParameters};
    use stitchcut_math::Point3;

    fn doc_with_line(length: f64) -> (Document, usize, usize) {
        let mut sketch = Sketch::new("Sketch");
        let edge = sketch.add_geometry(SketchGeometry::LineSegment {
            start: Point3::origin(),
            end: Point3::new(length, 0.0, 0.0),
        });
        let mut doc = Document::new();
        let object = doc.add_object(DocumentObject::Sketch(sketch));
        (doc, object, edge)
    }

    #[test]
    fn test_apply_replaces_line_with_cuts() {
        let (mut doc, object, edge) = doc_with_line(30.0);
        let target = resolve_selected_line(&doc, &Selection::single_edge(object, edge)).unwrap();
        let params = CutParameters::new(3.0, 3.0, 5).unwrap();
        let solved = solve(target.line.length(), &params).unwrap();
        let segments = generate(&target.line, &params, &solved);

        apply_cuts(&mut doc, &target, &segments).unwrap();

        let sketch = doc.object(object).unwrap().as_sketch().unwrap();
        assert_eq!(sketch.edge_count(), 5);
        for geometry in sketch.iter() {
            let (start, end) = geometry.line_endpoints().unwrap();
            assert_relative_eq!((end - start).norm(), 2.4, epsilon = 1e-9);
        }
        assert_eq!(doc.recompute_count(), 1);
    }

    #[test]
    fn test_apply_stale_edge_leaves_document_unchanged() {
        let (mut doc, object, edge) = doc_with_line(30.0);
        let target = resolve_selected_line(&doc, &Selection::single_edge(object, edge)).unwrap();
        let params = CutParameters::new(3.0, 3.0, 5).unwrap();
        let solved = solve(target.line.length(), &params).unwrap();
        let segments = generate(&target.line, &params, &solved);

        // Edge deleted out from under the target
        doc.object_mut(object)
            .unwrap()
            .as_sketch_mut()
            .unwrap()
            .del_geometry(edge)
            .unwrap();
        let before = doc.clone();

        let result = apply_cuts(&mut doc, &target, &segments);
        assert!(matches!(
            result,
            Err(SelectionError::EdgeOutOfRange { .. })
        ));
        assert_eq!(doc, before);
        assert_eq!(doc.recompute_count(), 0);
    }

    #[test]
    fn test_apply_preserves_other_geometry() {
        let (mut doc, object, edge) = doc_with_line(30.0);
        let other = doc
            .object_mut(object)
            .unwrap()
            .as_sketch_mut()
            .unwrap()
            .add_geometry(SketchGeometry::LineSegment {
                start: Point3::new(0.0, 10.0, 0.0),
                end: Point3::new(5.0, 10.0, 0.0),
            });
        assert_eq!(other, 1);

        let target = resolve_selected_line(&doc, &Selection::single_edge(object, edge)).unwrap();
        let params = CutParameters::new(0.0, 0.0, 2).unwrap();
        let solved = solve(target.line.length(), &params).unwrap();
        let segments = generate(&target.line, &params, &solved);

        apply_cuts(&mut doc, &target, &segments).unwrap();

        let sketch = doc.object(object).unwrap().as_sketch().unwrap();
        // Untouched edge plus the two cuts
        assert_eq!(sketch.edge_count(), 3);
        let (start, _) = sketch.geometry(0).unwrap().line_endpoints().unwrap();
        assert_relative_eq!(start.y, 10.0, epsilon = 1e-12);
    }
}
