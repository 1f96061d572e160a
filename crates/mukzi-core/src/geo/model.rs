//! Geographic and grid coordinate value types.

use crate::error::{MukziError, Result};
use serde::{Deserialize, Serialize};

/// Southern edge of the supported bounding box, degrees latitude.
pub const LAT_MIN: f64 = 33.0;
/// Northern edge of the supported bounding box, degrees latitude.
pub const LAT_MAX: f64 = 38.9;
/// Western edge of the supported bounding box, degrees longitude.
pub const LNG_MIN: f64 = 124.0;
/// Eastern edge of the supported bounding box, degrees longitude.
pub const LNG_MAX: f64 = 132.0;

/// Horizontal extent of the forecast grid, in cells.
pub const GRID_X_MAX: i32 = 149;
/// Vertical extent of the forecast grid, in cells.
pub const GRID_Y_MAX: i32 = 253;

/// A geographic coordinate (latitude/longitude, WGS84 degrees).
///
/// Immutable value type. The supported domain is the bounding box
/// covering the forecast grid: lat ∈ [33.0, 38.9], lng ∈ [124.0, 132.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new validated coordinate.
    ///
    /// Returns `MukziError::OutOfDomain` if the coordinate lies outside
    /// the supported bounding box.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !(LAT_MIN..=LAT_MAX).contains(&lat) || !(LNG_MIN..=LNG_MAX).contains(&lng) {
            return Err(MukziError::out_of_domain(lat, lng));
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without validation. Use with trusted inputs only.
    #[inline]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether this coordinate lies inside the supported bounding box.
    pub fn is_in_domain(&self) -> bool {
        (LAT_MIN..=LAT_MAX).contains(&self.lat) && (LNG_MIN..=LNG_MAX).contains(&self.lng)
    }
}

/// A discrete cell address on the weather source's forecast grid
/// (≈5 km resolution).
///
/// Valid cells lie in [1, 149] × [1, 253]. Not independently constructed
/// except from trusted external data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    /// Creates a new validated grid coordinate.
    ///
    /// Returns `MukziError::ProjectionRange` if the cell lies outside the
    /// forecast grid.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if !(1..=GRID_X_MAX).contains(&x) || !(1..=GRID_Y_MAX).contains(&y) {
            return Err(MukziError::projection_range(x, y));
        }
        Ok(Self { x, y })
    }

    /// Whether this cell lies inside the forecast grid.
    pub fn is_in_grid(&self) -> bool {
        (1..=GRID_X_MAX).contains(&self.x) && (1..=GRID_Y_MAX).contains(&self.y)
    }
}
