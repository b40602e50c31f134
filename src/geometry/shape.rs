use std::collections::HashMap;

use crate::math::Vector2;

use super::{Edge, EdgeSource, Point};

/// A finalized shape composed of edges.
///
/// The edge sequence preserves insertion order. It can be replaced
/// wholesale by [`Shape::translate`], the one opt-in mutation; individual
/// edges are replaced, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// The edges that define the shape.
    pub edges: Vec<Edge>,
}

impl Shape {
    /// Creates a shape from an edge sequence.
    #[must_use]
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Creates a shape from the edges of any source.
    #[must_use]
    pub fn from_source(source: &dyn EdgeSource) -> Self {
        Self::new(source.edges())
    }

    /// Creates a shape by chaining consecutive points into straight edges.
    ///
    /// When `closed`, a final edge connects the last point back to the
    /// first, unless the list already revisits its first point.
    #[must_use]
    pub fn from_points(points: &[Point], closed: bool) -> Self {
        let mut edges: Vec<Edge> = points.windows(2).map(|pair| Edge::new(pair[0], pair[1])).collect();
        if closed && points.len() >= 2 && points[points.len() - 1] != points[0] {
            edges.push(Edge::new(points[points.len() - 1], points[0]));
        }
        Self::new(edges)
    }

    /// Reconstructs closed point loops from the edge sequence.
    ///
    /// Walks greedily from the first unconsumed edge, always taking the
    /// earliest-inserted unconsumed edge incident to the cursor that leads
    /// to a different point, until the walk returns to its anchor or dead
    /// ends. A loop of more than two points that returns to its first
    /// point has the duplicated trailing point dropped; closure back to
    /// the first point is implicit for the caller.
    ///
    /// The walk assumes the edges decompose into simple loops and does not
    /// verify it: open chains come back as-is, and at vertices touched by
    /// more than two edges the split between loops follows insertion
    /// order rather than any planar decomposition.
    #[must_use]
    pub fn closed_paths(&self) -> Vec<Vec<Point>> {
        let mut incident: HashMap<Point, Vec<usize>> = HashMap::new();
        for (i, edge) in self.edges.iter().enumerate() {
            incident.entry(edge.start).or_default().push(i);
            incident.entry(edge.end).or_default().push(i);
        }

        let mut consumed = vec![false; self.edges.len()];
        let mut paths = Vec::new();

        for first in 0..self.edges.len() {
            if consumed[first] {
                continue;
            }
            consumed[first] = true;

            let anchor = self.edges[first].start;
            let mut cursor = self.edges[first].end;
            let mut path = vec![anchor];

            loop {
                path.push(cursor);
                if cursor == anchor {
                    break;
                }

                let next = incident.get(&cursor).and_then(|bucket| {
                    bucket
                        .iter()
                        .copied()
                        .find(|&i| !consumed[i] && self.edges[i].endpoint_opposite(cursor) != cursor)
                });

                match next {
                    Some(i) => {
                        consumed[i] = true;
                        cursor = self.edges[i].endpoint_opposite(cursor);
                    }
                    None => break,
                }
            }

            if path.len() > 2 && path.first() == path.last() {
                path.pop();
            }
            paths.push(path);
        }

        paths
    }

    /// Moves every edge by the given offset, replacing the edge sequence.
    ///
    /// This is the explicit in-place mutation used by document fitting;
    /// every alias of the shape observes it.
    pub fn translate(&mut self, offset: Vector2) {
        self.edges = self
            .edges
            .iter()
            .map(|edge| {
                Edge::new(
                    Point::new(edge.start.x + offset.x, edge.start.y + offset.y),
                    Point::new(edge.end.x + offset.x, edge.end.y + offset.y),
                )
            })
            .collect();
    }

    /// Returns the corners of the axis-aligned bounding box over all edge
    /// endpoints, or `None` for a shape without edges.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        if self.edges.is_empty() {
            return None;
        }

        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for edge in &self.edges {
            for point in [edge.start, edge.end] {
                min = Point::new(min.x.min(point.x), min.y.min(point.y));
                max = Point::new(max.x.max(point.x), max.y.max(point.y));
            }
        }
        Some((min, max))
    }
}

impl EdgeSource for Shape {
    fn edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }
}

/// Value equality: same multiset of edges, ignoring sequence order and
/// edge direction.
impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        if self.edges.len() != other.edges.len() {
            return false;
        }
        let mut used = vec![false; other.edges.len()];
        'edges: for edge in &self.edges {
            for (i, candidate) in other.edges.iter().enumerate() {
                if !used[i] && edge.same_segment(candidate) {
                    used[i] = true;
                    continue 'edges;
                }
            }
            return false;
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_square_edges() -> Vec<Edge> {
        vec![
            Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Edge::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
            Edge::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            Edge::new(Point::new(0.0, 10.0), Point::new(0.0, 0.0)),
        ]
    }

    #[test]
    fn closed_paths_square_yields_single_loop() {
        let shape = Shape::new(unit_square_edges());

        let paths = shape.closed_paths();

        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0],
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn closed_paths_square_in_shuffled_order() {
        let edges = unit_square_edges();
        let shuffled = vec![edges[2], edges[0], edges[3], edges[1]];
        let shape = Shape::new(shuffled);

        let paths = shape.closed_paths();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4);
    }

    #[test]
    fn closed_paths_reversed_edges_still_close() {
        let edges = vec![
            Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Edge::new(Point::new(10.0, 10.0), Point::new(10.0, 0.0)),
            Edge::new(Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            Edge::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
        ];

        let paths = Shape::new(edges).closed_paths();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4);
    }

    #[test]
    fn closed_paths_two_separate_loops() {
        let mut edges = unit_square_edges();
        edges.extend(
            Shape::from_points(
                &[
                    Point::new(20.0, 0.0),
                    Point::new(30.0, 0.0),
                    Point::new(30.0, 10.0),
                    Point::new(20.0, 10.0),
                ],
                true,
            )
            .edges,
        );

        let paths = Shape::new(edges).closed_paths();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].len(), 4);
        assert_eq!(paths[1].len(), 4);
    }

    #[test]
    fn closed_paths_open_chain_returns_points_so_far() {
        let edges = vec![
            Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Edge::new(Point::new(10.0, 0.0), Point::new(10.0, 10.0)),
        ];

        let paths = Shape::new(edges).closed_paths();

        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0],
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
        );
    }

    #[test]
    fn from_points_closed_chains_back_to_first() {
        let shape = Shape::from_points(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            true,
        );

        assert_eq!(shape.edges.len(), 3);
        assert_eq!(shape.edges[2], Edge::new(Point::new(10.0, 10.0), Point::new(0.0, 0.0)));
    }

    #[test]
    fn from_points_closed_skips_degenerate_closing_edge() {
        let shape = Shape::from_points(
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 0.0),
            ],
            true,
        );

        assert_eq!(shape.edges.len(), 3);
    }

    #[test]
    fn from_points_open_has_no_closing_edge() {
        let shape = Shape::from_points(
            &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            false,
        );

        assert_eq!(shape.edges.len(), 2);
    }

    #[test]
    fn translate_moves_every_edge() {
        let mut shape = Shape::new(unit_square_edges());

        shape.translate(Vector2::new(5.0, -2.0));

        assert_eq!(shape.edges[0].start, Point::new(5.0, -2.0));
        assert_eq!(shape.edges[2].end, Point::new(5.0, 8.0));
    }

    #[test]
    fn bounding_box_covers_all_endpoints() {
        let shape = Shape::new(vec![
            Edge::new(Point::new(2.0, 3.0), Point::new(12.0, 3.0)),
            Edge::new(Point::new(12.0, 3.0), Point::new(12.0, 9.0)),
        ]);

        let (min, max) = shape.bounding_box().unwrap();

        assert_eq!(min, Point::new(2.0, 3.0));
        assert_eq!(max, Point::new(12.0, 9.0));
    }

    #[test]
    fn bounding_box_empty_shape_is_none() {
        assert!(Shape::default().bounding_box().is_none());
    }

    #[test]
    fn equality_ignores_order_and_direction() {
        let a = Shape::new(unit_square_edges());
        let mut edges = unit_square_edges();
        edges.reverse();
        let flipped: Vec<Edge> = edges.iter().map(|e| Edge::new(e.end, e.start)).collect();
        let b = Shape::new(flipped);

        assert_eq!(a, b);
    }

    #[test]
    fn equality_counts_duplicates() {
        let edge = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let other = Edge::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));

        assert_ne!(Shape::new(vec![edge, edge]), Shape::new(vec![edge, other]));
    }
}
