pub mod builder;
pub mod error;
pub mod geometry;
pub mod math;
pub mod svg;

pub use error::{KerfisError, Result};
