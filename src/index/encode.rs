use crate::coord::Coordinate;
use crate::error::JapanMeshError;
use crate::index::constants::{LNG_ORIGIN, is_level1_code};
use crate::index::level::GridLevel;

/// Splits `value` into the number of whole `unit`s it holds and the remainder.
fn split(value: f64, unit: f64) -> (f64, f64) {
    ((value / unit).floor(), value.rem_euclid(unit))
}

/// Combines a row bit and a column bit into a quadrant digit (1 = SW, 2 = SE, 3 = NW, 4 = NE).
fn quadrant(row_bit: f64, col_bit: f64) -> u8 {
    (row_bit * 2.0 + (col_bit + 1.0)) as u8
}

/// Index digits of one axis, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisIndices {
    level1: i64,
    level2: u8,
    level3: u8,
    half: f64,
    quarter: f64,
    eighth: f64,
}

/// Decomposes a latitude into mesh indices, working in minutes.
fn latitude_indices(lat: f64) -> AxisIndices {
    let (p, a) = split(lat * 60.0, 40.0);
    let (q, b) = split(a, 5.0);
    let (r, c) = split(b * 60.0, 30.0);
    let (s, d) = split(c, 15.0);
    let (t, e) = split(d, 7.5);
    let (u, _) = split(e, 3.75);

    AxisIndices {
        level1: p as i64,
        level2: q as u8,
        level3: r as u8,
        half: s,
        quarter: t,
        eighth: u,
    }
}

/// Decomposes a longitude into mesh indices, counting degrees from 100°E.
fn longitude_indices(lng: f64) -> AxisIndices {
    let u = (lng - LNG_ORIGIN).floor();
    let f = lng - LNG_ORIGIN - u;
    let (v, g) = split(f * 60.0, 7.5);
    let (w, h) = split(g * 60.0, 45.0);
    let (x, i) = split(h, 22.5);
    let (y, j) = split(i, 11.25);
    let (z, _) = split(j, 5.625);

    AxisIndices {
        level1: u as i64,
        level2: v as u8,
        level3: w as u8,
        half: x,
        quarter: y,
        eighth: z,
    }
}

/// Converts a longitude/latitude coordinate to the mesh code containing it.
///
/// The full 1/8 mesh code is computed first and then cut down to `level`, so a
/// coarser code is always a prefix of a finer one for the same coordinate.
///
/// Fails with [`JapanMeshError::InvalidArea`] when the primary mesh is not one
/// of the meshes covering Japan.
///
/// # Example
/// ```
/// use japanmesh_rs::{GridLevel, LatLng, to_code};
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// let shinjuku = LatLng::new(35.70078, 139.71475);
/// assert_eq!(to_code(&shinjuku, GridLevel::Level3)?, "53394547");
///
/// // (lng, lat) tuples work too
/// assert_eq!(to_code(&(139.71475, 35.70078), GridLevel::OneEighth)?, "53394547112");
/// # Ok(())
/// # }
/// ```
pub fn to_code<C: Coordinate>(coord: &C, level: GridLevel) -> Result<String, JapanMeshError> {
    let lat = latitude_indices(coord.y());
    let lng = longitude_indices(coord.x());

    let level1 = format!("{:02}{:02}", lat.level1, lng.level1);
    if !is_level1_code(&level1) {
        tracing::debug!(
            lat = coord.y(),
            lng = coord.x(),
            level1 = level1.as_str(),
            "coordinate outside the primary meshes of Japan"
        );
        return Err(JapanMeshError::InvalidArea);
    }

    let mut code = format!(
        "{}{}{}{}{}{}{}{}",
        level1,
        lat.level2,
        lng.level2,
        lat.level3,
        lng.level3,
        quadrant(lat.half, lng.half),
        quadrant(lat.quarter, lng.quarter),
        quadrant(lat.eighth, lng.eighth),
    );
    code.truncate(level.digit_count());

    tracing::trace!(code = code.as_str(), level = level.label(), "encoded mesh code");
    Ok(code)
}
