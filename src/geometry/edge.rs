use crate::math::span::Span;
use crate::math::Vector2;

use super::Point;

/// A directed straight edge between two points.
///
/// An edge and its reverse are distinct values under `==`; use
/// [`Edge::same_segment`] for the order-insensitive comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Whether `other` covers the same segment, ignoring direction.
    ///
    /// Used only for duplicate detection in shape value equality, never
    /// for cancellation.
    #[must_use]
    pub fn same_segment(&self, other: &Edge) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// Returns the endpoint opposite the given one.
    ///
    /// If `point` is neither endpoint, the start point is returned.
    #[must_use]
    pub fn endpoint_opposite(&self, point: Point) -> Point {
        if self.start == point {
            self.end
        } else {
            self.start
        }
    }

    /// Subtracts the overlapping portion of another colinear edge from
    /// this edge, returning the zero, one, or two remaining parts.
    ///
    /// Cancellation is defined only for pairs that are both horizontal or
    /// both vertical and lie on the same shared line. Diagonal edges,
    /// mixed-axis pairs, and pairs on different lines pass through
    /// unchanged, as do pairs whose spans merely touch at an endpoint.
    #[must_use]
    pub fn subtract(&self, other: &Edge) -> Vec<Edge> {
        let horizontal = self.start.y == self.end.y && other.start.y == other.end.y;
        let vertical = self.start.x == self.end.x && other.start.x == other.end.x;

        if !horizontal && !vertical {
            return vec![*self];
        }
        if horizontal && self.start.y != other.start.y {
            return vec![*self];
        }
        if vertical && self.start.x != other.start.x {
            return vec![*self];
        }

        let (own, others) = if horizontal {
            (
                Span::new(self.start.x, self.end.x),
                Span::new(other.start.x, other.end.x),
            )
        } else {
            (
                Span::new(self.start.y, self.end.y),
                Span::new(other.start.y, other.end.y),
            )
        };

        let Some(overlap) = own.overlap(&others) else {
            return vec![*self];
        };

        let mut remaining = Vec::new();
        if overlap.min > own.min {
            remaining.push(self.respan(horizontal, own.min, overlap.min));
        }
        if overlap.max < own.max {
            remaining.push(self.respan(horizontal, overlap.max, own.max));
        }
        remaining
    }

    /// Re-expresses a sub-interval of this edge's span as an edge on the
    /// same fixed coordinate.
    fn respan(&self, horizontal: bool, from: f64, to: f64) -> Edge {
        if horizontal {
            Edge::new(Point::new(from, self.start.y), Point::new(to, self.start.y))
        } else {
            Edge::new(Point::new(self.start.x, from), Point::new(self.start.x, to))
        }
    }

    /// Returns `count` points evenly spaced along the edge within
    /// `[start_margin, length - end_margin]`.
    ///
    /// With `include_endpoints` the spacing uses `count - 1` divisions so
    /// the first and last point land exactly on the margin boundaries;
    /// without it the spacing uses `count + 1` divisions and all points
    /// lie strictly inside the margins. A zero `count` yields no points;
    /// a single point, or a usable length of zero or less, yields the
    /// midpoint of the usable span.
    #[must_use]
    pub fn distributed_points(
        &self,
        count: u32,
        start_margin: f64,
        end_margin: f64,
        include_endpoints: bool,
    ) -> Vec<Point> {
        if count == 0 {
            return Vec::new();
        }

        let direction = self.direction();
        let total = direction.norm();
        let usable = total - start_margin - end_margin;

        let along = |ratio: f64| {
            Point::new(
                self.start.x + direction.x * (ratio / total),
                self.start.y + direction.y * (ratio / total),
            )
        };

        if usable <= 0.0 || count == 1 {
            return vec![along(start_margin + usable / 2.0)];
        }

        let mut points = Vec::with_capacity(count as usize);
        for i in 0..count {
            let t = if include_endpoints {
                f64::from(i) / f64::from(count - 1)
            } else {
                f64::from(i + 1) / f64::from(count + 1)
            };
            points.push(along(start_margin + t * usable));
        }
        points
    }

    fn direction(&self) -> Vector2 {
        Vector2::new(self.end.x - self.start.x, self.end.y - self.start.y)
    }
}
