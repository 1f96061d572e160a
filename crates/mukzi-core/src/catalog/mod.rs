//! The fixed food category catalog and its keyword trigger table.

pub mod keywords;
pub mod model;
pub mod table;

pub use model::{FoodCategory, ServeTemperature};
