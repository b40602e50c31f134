pub mod attributes;
pub mod document;
pub mod path;

pub use attributes::{DocumentAttributes, Scalar, ViewBox};
pub use document::{Insert, ShapeId, SvgDocument};
pub use path::{write_path_data, PathData, PathReader};
