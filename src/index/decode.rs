use crate::error::JapanMeshError;
use crate::index::code::{get_level, parse_digits};
use crate::index::constants::{LEVEL1_MIN_COL, LEVEL1_MIN_LAT, LEVEL1_MIN_LNG, LEVEL1_MIN_ROW};
use crate::index::level::GridLevel;
use geo_types::{Rect, coord};

/// Running min/max bounds while walking down the levels of a code.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_lng: f64,
    max_lng: f64,
    min_lat: f64,
    max_lat: f64,
}

impl Bounds {
    /// Moves the south-west corner by whole cells of `level`, then sizes the box to one cell.
    fn step(&mut self, level: GridLevel, col: f64, row: f64) {
        self.min_lng += col * level.lng_span();
        self.max_lng = self.min_lng + level.lng_span();
        self.min_lat += row * level.lat_span();
        self.max_lat = self.min_lat + level.lat_span();
    }
}

/// Maps a quadrant digit to its `(col, row)` offset within the parent cell.
///
/// Anything other than `1`, `2` or `3` falls back to the north-east quadrant.
fn quadrant_offset(digit: u8) -> (f64, f64) {
    match digit {
        b'1' => (0.0, 0.0),
        b'2' => (1.0, 0.0),
        b'3' => (0.0, 1.0),
        _ => (1.0, 1.0),
    }
}

/// Reconstructs the bounding rectangle of a mesh code.
///
/// The rectangle's x axis is longitude and its y axis latitude, and its size is
/// exactly one cell of the code's own level.
///
/// # Example
/// ```
/// use japanmesh_rs::to_bounding_rect;
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// let rect = to_bounding_rect("5438")?;
/// assert_eq!((rect.min().x, rect.max().x), (138.0, 139.0));
/// assert_eq!((rect.min().y, rect.max().y), (36.0, 36.666666666666664));
/// # Ok(())
/// # }
/// ```
pub fn to_bounding_rect(code: &str) -> Result<Rect<f64>, JapanMeshError> {
    let level = get_level(code)?;
    let bytes = code.as_bytes();

    let row1 = parse_digits(code, 0, 2)?;
    let col1 = parse_digits(code, 2, 4)?;
    let level1 = GridLevel::Level1;
    let min_lng =
        LEVEL1_MIN_LNG + (f64::from(col1) - f64::from(LEVEL1_MIN_COL)) * level1.lng_span();
    let min_lat =
        LEVEL1_MIN_LAT + (f64::from(row1) - f64::from(LEVEL1_MIN_ROW)) * level1.lat_span();
    let mut bounds = Bounds {
        min_lng,
        max_lng: min_lng + level1.lng_span(),
        min_lat,
        max_lat: min_lat + level1.lat_span(),
    };

    if level >= GridLevel::Level2 {
        let row = parse_digits(code, 4, 5)?;
        let col = parse_digits(code, 5, 6)?;
        bounds.step(GridLevel::Level2, f64::from(col), f64::from(row));
    }

    if level >= GridLevel::Level3 {
        let row = parse_digits(code, 6, 7)?;
        let col = parse_digits(code, 7, 8)?;
        bounds.step(GridLevel::Level3, f64::from(col), f64::from(row));
    }

    for quadrant_level in [GridLevel::Half, GridLevel::Quarter, GridLevel::OneEighth] {
        if level < quadrant_level {
            break;
        }
        let (col, row) = quadrant_offset(bytes[quadrant_level.digit_count() - 1]);
        bounds.step(quadrant_level, col, row);
    }

    Ok(Rect::new(
        coord! { x: bounds.min_lng, y: bounds.min_lat },
        coord! { x: bounds.max_lng, y: bounds.max_lat },
    ))
}
