//! Geographic coordinate types and the forecast-grid projection.

pub mod model;
pub mod projector;

pub use model::{Coordinate, GridCoordinate};
pub use projector::{to_coordinate, to_grid};
