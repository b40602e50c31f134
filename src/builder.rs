use crate::geometry::{Edge, EdgeSource, Shape};

/// Overlap cancellation policy for combining edge sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Sources earlier in the list take unconditional priority: their
    /// edges are never trimmed by later sources.
    Ordered,
    /// Cancellation is fully mutual; rearranging the source list yields
    /// the same edge multiset.
    Symmetrical,
}

/// Combines an ordered list of edge sources into one shape, cancelling
/// colinear overlaps between their boundaries.
#[derive(Debug)]
pub struct ShapeBuilder<'a> {
    sources: Vec<&'a dyn EdgeSource>,
    policy: Policy,
}

impl<'a> ShapeBuilder<'a> {
    /// Creates an empty builder with the given policy.
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self {
            sources: Vec::new(),
            policy,
        }
    }

    /// Appends a source.
    pub fn push(&mut self, source: &'a dyn EdgeSource) {
        self.sources.push(source);
    }

    /// Appends a source, for chaining.
    #[must_use]
    pub fn with(mut self, source: &'a dyn EdgeSource) -> Self {
        self.push(source);
        self
    }

    /// Builds the combined shape.
    #[must_use]
    pub fn build(&self) -> Shape {
        match self.policy {
            Policy::Ordered => build_ordered(&self.sources),
            Policy::Symmetrical => build_symmetrical(&self.sources),
        }
    }
}

/// Combines the given sources in one call.
#[must_use]
pub fn combine(sources: &[&dyn EdgeSource], policy: Policy) -> Shape {
    match policy {
        Policy::Ordered => build_ordered(sources),
        Policy::Symmetrical => build_symmetrical(sources),
    }
}

/// Each edge is cancelled against everything accepted before it, then its
/// remaining fragments are appended. Earlier sources are never trimmed
/// retroactively.
fn build_ordered(sources: &[&dyn EdgeSource]) -> Shape {
    let mut accepted: Vec<Edge> = Vec::new();

    for source in sources {
        for edge in source.edges() {
            let mut fragments = vec![edge];
            for kept in &accepted {
                fragments = fragments
                    .iter()
                    .flat_map(|fragment| fragment.subtract(kept))
                    .collect();
            }
            accepted.extend(fragments);
        }
    }

    Shape::new(accepted)
}

/// Every edge is whittled sequentially against every other edge in the
/// flattened list, so one edge can be cut into arbitrarily many fragments
/// across successive opposing edges. The result multiset does not depend
/// on source order.
fn build_symmetrical(sources: &[&dyn EdgeSource]) -> Shape {
    let all: Vec<Edge> = sources.iter().flat_map(|source| source.edges()).collect();

    let mut result = Vec::new();
    for (i, edge) in all.iter().enumerate() {
        let mut fragments = vec![*edge];
        for (j, other) in all.iter().enumerate() {
            if i == j {
                continue;
            }
            fragments = fragments
                .iter()
                .flat_map(|fragment| fragment.subtract(other))
                .collect();
        }
        result.extend(fragments);
    }

    Shape::new(result)
}
