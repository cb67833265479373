use crate::error::JapanMeshError;
use crate::geom::rectangle::rect_to_polygon;
use crate::index::to_bounding_rect;
use geo_types::{Polygon, Rect};
use geojson::{Feature, Geometry, JsonObject, Value};
use wkt::ToWkt;

/// Wraps a bounding rectangle into a GeoJSON polygon feature.
///
/// `properties` is passed through untouched.
pub fn rect_to_feature(rect: &Rect<f64>, properties: Option<JsonObject>) -> Feature {
    let polygon = rect_to_polygon(rect);
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&polygon))),
        id: None,
        properties,
        foreign_members: None,
    }
}

/// Returns the polygon outline of a mesh code.
pub fn to_polygon(code: &str) -> Result<Polygon<f64>, JapanMeshError> {
    let rect = to_bounding_rect(code)?;
    Ok(rect_to_polygon(&rect))
}

/// Returns a mesh code's outline as a GeoJSON polygon feature carrying `properties`.
///
/// # Example
/// ```
/// use japanmesh_rs::to_feature;
/// use serde_json::json;
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// let mut properties = serde_json::Map::new();
/// properties.insert("population".to_string(), json!(1200));
///
/// let feature = to_feature("5438", Some(properties))?;
/// assert_eq!(feature.property("population"), Some(&json!(1200)));
/// # Ok(())
/// # }
/// ```
pub fn to_feature(code: &str, properties: Option<JsonObject>) -> Result<Feature, JapanMeshError> {
    let rect = to_bounding_rect(code)?;
    Ok(rect_to_feature(&rect, properties))
}

/// Returns a mesh code's outline as a WKT `POLYGON`.
pub fn to_wkt(code: &str) -> Result<String, JapanMeshError> {
    Ok(to_polygon(code)?.wkt_string())
}
