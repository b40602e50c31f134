use std::fmt;

use crate::builder::{combine, Policy};

use super::{Edge, EdgeSource};

/// A shape composed of multiple child sources.
///
/// Producing edges runs the symmetrical builder over the children, so
/// boundaries shared between any two of them cancel on both sides.
#[derive(Default)]
pub struct CompoundShape {
    sources: Vec<Box<dyn EdgeSource>>,
}

impl CompoundShape {
    /// Creates an empty compound shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child source.
    pub fn add(&mut self, source: impl EdgeSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Adds a child source, for chaining.
    #[must_use]
    pub fn with(mut self, source: impl EdgeSource + 'static) -> Self {
        self.add(source);
        self
    }

    /// Number of child sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the compound has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl EdgeSource for CompoundShape {
    fn edges(&self) -> Vec<Edge> {
        let sources: Vec<&dyn EdgeSource> = self.sources.iter().map(|source| source.as_ref()).collect();
        combine(&sources, Policy::Symmetrical).edges
    }
}

impl fmt::Debug for CompoundShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompoundShape({} sources)", self.sources.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn single_child_passes_edges_through() {
        let compound = CompoundShape::new().with(Rect::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(compound.edges().len(), 4);
    }

    #[test]
    fn adjacent_children_lose_the_shared_boundary() {
        let compound = CompoundShape::new()
            .with(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with(Rect::new(10.0, 0.0, 10.0, 10.0));

        assert_eq!(compound.edges().len(), 6);
    }

    #[test]
    fn separate_children_keep_every_edge() {
        let mut compound = CompoundShape::new();
        compound.add(Rect::new(0.0, 0.0, 10.0, 10.0));
        compound.add(Rect::new(20.0, 0.0, 10.0, 10.0));

        assert_eq!(compound.len(), 2);
        assert_eq!(compound.edges().len(), 8);
    }

    #[test]
    fn compounds_nest() {
        let inner = CompoundShape::new()
            .with(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with(Rect::new(10.0, 0.0, 10.0, 10.0));
        let outer = CompoundShape::new().with(inner);

        assert_eq!(outer.edges().len(), 6);
    }

    #[test]
    fn debug_reports_child_count() {
        let compound = CompoundShape::new().with(Rect::sized(1.0, 1.0));

        assert_eq!(format!("{compound:?}"), "CompoundShape(1 sources)");
    }
}
