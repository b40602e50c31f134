pub mod span;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;
