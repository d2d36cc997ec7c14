//! Sketch geometry container.

use stitchcut_math::Point3;

use crate::SelectionError;

/// A geometry element inside a sketch.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchGeometry {
    /// A straight line segment.
    LineSegment {
        /// Start point.
        start: Point3,
        /// End point.
        end: Point3,
    },
    /// A circular arc. Present so non-straight edges are a real case
    /// the selection validator must reject; the cutter never produces
    /// arcs.
    ArcOfCircle {
        /// Start point.
        start: Point3,
        /// End point.
        end: Point3,
        /// Center of the arc's circle.
        center: Point3,
    },
}

impl SketchGeometry {
    /// Endpoints if this element is a straight line segment.
    pub fn line_endpoints(&self) -> Option<(Point3, Point3)> {
        match self {
            SketchGeometry::LineSegment { start, end } => Some((*start, *end)),
            SketchGeometry::ArcOfCircle { .. } => None,
        }
    }

    /// Whether this element is a straight line segment.
    pub fn is_line_segment(&self) -> bool {
        matches!(self, SketchGeometry::LineSegment { .. })
    }
}

/// A named, ordered container of sketch geometry.
///
/// Edge indices are positions in the geometry list; deleting an
/// element shifts the indices of everything after it, so callers must
/// not hold indices across a deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    name: String,
    geometry: Vec<SketchGeometry>,
}

impl Sketch {
    /// Create an empty sketch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            geometry: Vec::new(),
        }
    }

    /// Name of this sketch.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a geometry element, returning its edge index.
    pub fn add_geometry(&mut self, geometry: SketchGeometry) -> usize {
        self.geometry.push(geometry);
        self.geometry.len() - 1
    }

    /// Remove and return the element at `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::EdgeOutOfRange`] if `edge` is not a
    /// valid index.
    pub fn del_geometry(&mut self, edge: usize) -> Result<SketchGeometry, SelectionError> {
        if edge >= self.geometry.len() {
            return Err(SelectionError::EdgeOutOfRange {
                sketch: self.name.clone(),
                edge,
            });
        }
        Ok(self.geometry.remove(edge))
    }

    /// The element at `edge`, if any.
    pub fn geometry(&self, edge: usize) -> Option<&SketchGeometry> {
        self.geometry.get(edge)
    }

    /// Number of geometry elements.
    pub fn edge_count(&self) -> usize {
        self.geometry.len()
    }

    /// Iterate over the geometry elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &SketchGeometry> {
        self.geometry.iter()
    }
}
