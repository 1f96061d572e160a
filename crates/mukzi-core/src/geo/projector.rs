//! Lambert Conformal Conic projection between geographic coordinates and
//! the weather source's forecast grid.
//!
//! The projection uses two standard parallels (30°N, 60°N) and is anchored
//! at 38°N / 126°E, which maps to grid cell (43, 136). One grid cell spans
//! roughly 5 km, so a forward/inverse round trip may move a coordinate by
//! up to ≈0.03° per axis.
//!
//! Both operations are pure and side-effect-free; they are safe to call
//! from any thread without synchronization.

use crate::error::{MukziError, Result};
use crate::geo::model::{Coordinate, GridCoordinate};
use once_cell::sync::Lazy;
use std::f64::consts::PI;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.00877;
/// Grid cell spacing in kilometers.
const GRID_SPACING_KM: f64 = 5.0;
/// First standard parallel, degrees.
const STANDARD_PARALLEL_1: f64 = 30.0;
/// Second standard parallel, degrees.
const STANDARD_PARALLEL_2: f64 = 60.0;
/// Reference longitude, degrees.
const REF_LNG: f64 = 126.0;
/// Reference latitude, degrees.
const REF_LAT: f64 = 38.0;
/// Grid x of the reference point.
const REF_X: f64 = 43.0;
/// Grid y of the reference point.
const REF_Y: f64 = 136.0;

/// Derived projection parameters, computed once per process.
struct LambertParams {
    /// Earth radius expressed in grid cells.
    re: f64,
    /// Cone constant.
    sn: f64,
    /// Scale factor at the first standard parallel.
    sf: f64,
    /// Radial distance of the reference latitude.
    ro: f64,
    /// Reference longitude in radians.
    olon: f64,
}

static PARAMS: Lazy<LambertParams> = Lazy::new(|| {
    let re = EARTH_RADIUS_KM / GRID_SPACING_KM;
    let slat1 = STANDARD_PARALLEL_1.to_radians();
    let slat2 = STANDARD_PARALLEL_2.to_radians();
    let olon = REF_LNG.to_radians();
    let olat = REF_LAT.to_radians();

    let sn = (PI * 0.25 + slat2 * 0.5).tan() / (PI * 0.25 + slat1 * 0.5).tan();
    let sn = (slat1.cos() / slat2.cos()).ln() / sn.ln();
    let sf = (PI * 0.25 + slat1 * 0.5).tan();
    let sf = sf.powf(sn) * slat1.cos() / sn;
    let ro = (PI * 0.25 + olat * 0.5).tan();
    let ro = re * sf / ro.powf(sn);

    LambertParams {
        re,
        sn,
        sf,
        ro,
        olon,
    }
});

/// Projects a geographic coordinate onto the forecast grid.
///
/// # Errors
///
/// - `MukziError::OutOfDomain` if the coordinate lies outside the
///   supported bounding box.
/// - `MukziError::ProjectionRange` if the projected cell falls outside
///   [1, 149] × [1, 253]. This can only happen for a handful of corner
///   cells of the bounding box that the forecast grid does not cover.
pub fn to_grid(coord: Coordinate) -> Result<GridCoordinate> {
    if !coord.is_in_domain() {
        return Err(MukziError::out_of_domain(coord.lat, coord.lng));
    }

    let p = &*PARAMS;

    let ra = (PI * 0.25 + coord.lat.to_radians() * 0.5).tan();
    let ra = p.re * p.sf / ra.powf(p.sn);

    let mut theta = coord.lng.to_radians() - p.olon;
    if theta > PI {
        theta -= 2.0 * PI;
    }
    if theta < -PI {
        theta += 2.0 * PI;
    }
    theta *= p.sn;

    let x = (ra * theta.sin() + REF_X + 0.5).floor() as i32;
    let y = (p.ro - ra * theta.cos() + REF_Y + 0.5).floor() as i32;

    let grid = GridCoordinate { x, y };
    if !grid.is_in_grid() {
        return Err(MukziError::projection_range(x, y));
    }
    Ok(grid)
}

/// Projects a forecast grid cell back to a geographic coordinate.
///
/// Inverse of [`to_grid`] up to grid quantization: the result is the cell
/// center, which may differ from the original coordinate by up to ≈0.03°
/// per axis.
///
/// # Errors
///
/// - `MukziError::ProjectionRange` if the cell lies outside the forecast
///   grid.
pub fn to_coordinate(grid: GridCoordinate) -> Result<Coordinate> {
    if !grid.is_in_grid() {
        return Err(MukziError::projection_range(grid.x, grid.y));
    }

    let p = &*PARAMS;

    let xn = grid.x as f64 - REF_X;
    let yn = p.ro - grid.y as f64 + REF_Y;
    let mut ra = (xn * xn + yn * yn).sqrt();
    if p.sn < 0.0 {
        ra = -ra;
    }

    let alat = (p.re * p.sf / ra).powf(1.0 / p.sn);
    let alat = 2.0 * alat.atan() - PI * 0.5;

    let theta = if xn.abs() <= 0.0 {
        0.0
    } else if yn.abs() <= 0.0 {
        if xn < 0.0 { -PI * 0.5 } else { PI * 0.5 }
    } else {
        xn.atan2(yn)
    };
    let alon = theta / p.sn + p.olon;

    Ok(Coordinate {
        lat: alat.to_degrees(),
        lng: alon.to_degrees(),
    })
}
