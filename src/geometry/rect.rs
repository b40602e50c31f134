use super::{Edge, EdgeSource, Point, Shape};

/// A side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// The point of a rectangle to align with a target position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// An axis-aligned rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of the given size at the origin.
    #[must_use]
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Creates a rectangle of the given size with the anchor point placed
    /// at `(x, y)`.
    #[must_use]
    pub fn anchored(x: f64, y: f64, width: f64, height: f64, anchor: Anchor) -> Self {
        Self::sized(width, height).at(x, y, anchor)
    }

    /// Repositions the rectangle so the anchor point lands on `(x, y)`.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64, anchor: Anchor) -> Self {
        let (dx, dy) = match anchor {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (self.width / 2.0, 0.0),
            Anchor::TopRight => (self.width, 0.0),
            Anchor::CenterLeft => (0.0, self.height / 2.0),
            Anchor::Center => (self.width / 2.0, self.height / 2.0),
            Anchor::CenterRight => (self.width, self.height / 2.0),
            Anchor::BottomLeft => (0.0, self.height),
            Anchor::BottomCenter => (self.width / 2.0, self.height),
            Anchor::BottomRight => (self.width, self.height),
        };
        self.x = x - dx;
        self.y = y - dy;
        self
    }

    /// Moves the rectangle by the given offsets.
    #[must_use]
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    /// Returns the edge of the given side, wound clockwise from the
    /// top-left corner.
    #[must_use]
    pub fn edge(&self, side: Side) -> Edge {
        let top_left = Point::new(self.x, self.y);
        let top_right = Point::new(self.x + self.width, self.y);
        let bottom_right = Point::new(self.x + self.width, self.y + self.height);
        let bottom_left = Point::new(self.x, self.y + self.height);

        match side {
            Side::Top => Edge::new(top_left, top_right),
            Side::Right => Edge::new(top_right, bottom_right),
            Side::Bottom => Edge::new(bottom_right, bottom_left),
            Side::Left => Edge::new(bottom_left, top_left),
        }
    }

    /// Places a copy of this rectangle at every point, aligned by the
    /// given anchor.
    #[must_use]
    pub fn place_copies(&self, points: &[Point], anchor: Anchor) -> Vec<Rect> {
        points.iter().map(|point| self.at(point.x, point.y, anchor)).collect()
    }

    /// Returns a shape with the same edges as this rectangle.
    #[must_use]
    pub fn to_shape(&self) -> Shape {
        Shape::from_source(self)
    }
}

impl EdgeSource for Rect {
    fn edges(&self) -> Vec<Edge> {
        vec![
            self.edge(Side::Top),
            self.edge(Side::Right),
            self.edge(Side::Bottom),
            self.edge(Side::Left),
        ]
    }
}
