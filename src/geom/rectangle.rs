use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds a closed polygon from a mesh bounding rectangle.
///
/// The ring runs north-east, north-west, south-west, south-east and back to
/// north-east, which is the vertex order mesh polygons are published in.
pub fn rect_to_polygon(rect: &Rect<f64>) -> Polygon<f64> {
    let (min, max) = (rect.min(), rect.max());
    let coords = vec![
        Coord { x: max.x, y: max.y },
        Coord { x: min.x, y: max.y },
        Coord { x: min.x, y: min.y },
        Coord { x: max.x, y: min.y },
        Coord { x: max.x, y: max.y },
    ];

    Polygon::new(LineString::from(coords), vec![])
}
