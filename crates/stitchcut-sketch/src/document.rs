//! Document holding sketches and other objects.

use crate::geometry::Sketch;

/// An object in a document. The cutter only operates on sketches;
/// other object kinds exist so "selected object is not a sketch" is a
/// reachable condition.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentObject {
    /// A sketch containing editable geometry.
    Sketch(Sketch),
    /// An opaque solid body.
    Body {
        /// Name of the body.
        name: String,
    },
}

impl DocumentObject {
    /// Name of this object.
    pub fn name(&self) -> &str {
        match self {
            DocumentObject::Sketch(sketch) => sketch.name(),
            DocumentObject::Body { name } => name,
        }
    }

    /// This object as a sketch, if it is one.
    pub fn as_sketch(&self) -> Option<&Sketch> {
        match self {
            DocumentObject::Sketch(sketch) => Some(sketch),
            DocumentObject::Body { .. } => None,
        }
    }

    /// This object as a mutable sketch, if it is one.
    pub fn as_sketch_mut(&mut self) -> Option<&mut Sketch> {
        match self {
            DocumentObject::Sketch(sketch) => Some(sketch),
            DocumentObject::Body { .. } => None,
        }
    }
}

/// An ordered collection of document objects with a recompute signal.
///
/// The recompute counter stands in for the host application's model
/// refresh; tests observe it to check that a successful replacement
/// triggers exactly one recompute and a failed one triggers none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    objects: Vec<DocumentObject>,
    recomputes: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object, returning its index.
    pub fn add_object(&mut self, object: DocumentObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// The object at `index`, if any.
    pub fn object(&self, index: usize) -> Option<&DocumentObject> {
        self.objects.get(index)
    }

    /// The object at `index`, mutably, if any.
    pub fn object_mut(&mut self, index: usize) -> Option<&mut DocumentObject> {
        self.objects.get_mut(index)
    }

    /// Number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Signal that geometry changed and the model must refresh.
    pub fn recompute(&mut self) {
        self.recomputes += 1;
    }

    /// How many recomputes have been signalled.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
