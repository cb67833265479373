use crate::coord::Coordinate;
use crate::error::JapanMeshError;
use crate::geom::{rect_to_feature, rect_to_polygon};
use crate::index::{
    GridLevel, get_ancestor_chain, get_children, get_level, get_parent, to_bounding_rect, to_code,
};
use crate::io::MeshCellsToGeoJson;
use geo::Intersects;
use geo_types::{Point, Polygon, Rect, coord};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

/// A single cell of the regional mesh.
///
/// Each `MeshCell` pairs a mesh code with its grid level. The geometry is
/// derived from the code on demand.
///
/// # Example
///
/// ```
/// use japanmesh_rs::{GridLevel, LatLng, MeshCell};
///
/// # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
/// let cell = MeshCell::from_coordinate(&LatLng::new(35.70078, 139.71475), GridLevel::Level3)?;
/// assert_eq!(cell.code, "53394547");
///
/// // Outline for drawing on a map
/// let polygon = cell.to_polygon()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshCell {
    /// Mesh code, 4 to 11 digits
    pub code: String,
    /// Grid level implied by the code length
    pub level: GridLevel,
}

impl MeshCell {
    /// Create a MeshCell for the cell containing a coordinate.
    pub fn from_coordinate(
        coord: &impl Coordinate,
        level: GridLevel,
    ) -> Result<Self, JapanMeshError> {
        let code = to_code(coord, level)?;
        Ok(Self { code, level })
    }

    /// Create a MeshCell from an existing mesh code.
    ///
    /// Only the code length is validated.
    pub fn from_code(code: &str) -> Result<Self, JapanMeshError> {
        let level = get_level(code)?;
        Ok(Self {
            code: code.to_string(),
            level,
        })
    }

    /// Returns the cell bounds, x being longitude and y latitude.
    pub fn bounding_rect(&self) -> Result<Rect<f64>, JapanMeshError> {
        to_bounding_rect(&self.code)
    }

    /// Returns the cell center as a `(lng, lat)` point.
    pub fn center(&self) -> Result<Point<f64>, JapanMeshError> {
        Ok(self.bounding_rect()?.center().into())
    }

    /// Returns `true` if the coordinate lies inside the cell or on its edge.
    pub fn contains(&self, coord: &impl Coordinate) -> Result<bool, JapanMeshError> {
        let c = coord! { x: coord.x(), y: coord.y() };
        Ok(self.bounding_rect()?.intersects(&c))
    }

    /// Converts this cell to a polygon ring (NE, NW, SW, SE, NE).
    pub fn to_polygon(&self) -> Result<Polygon<f64>, JapanMeshError> {
        Ok(rect_to_polygon(&self.bounding_rect()?))
    }

    /// Converts this cell to a GeoJSON feature carrying `properties`.
    pub fn to_feature(&self, properties: Option<JsonObject>) -> Result<Feature, JapanMeshError> {
        Ok(rect_to_feature(&self.bounding_rect()?, properties))
    }

    /// Converts this cell to a one-feature GeoJSON FeatureCollection.
    pub fn to_feature_collection(&self) -> Result<FeatureCollection, JapanMeshError> {
        std::slice::from_ref(self).to_feature_collection()
    }

    /// Converts this cell to a WKT polygon string.
    pub fn to_wkt(&self) -> Result<String, JapanMeshError> {
        Ok(self.to_polygon()?.wkt_string())
    }

    /// Returns the cells one level finer, empty for a 1/8 mesh.
    pub fn children(&self) -> Result<Vec<Self>, JapanMeshError> {
        get_children(&self.code)?
            .iter()
            .map(|code| Self::from_code(code))
            .collect()
    }

    /// Returns the enclosing cell one level coarser, `None` for a primary mesh.
    pub fn parent(&self) -> Result<Option<Self>, JapanMeshError> {
        get_parent(&self.code)?
            .map(|code| Self::from_code(&code))
            .transpose()
    }

    /// Returns this cell and every enclosing cell, coarsest first.
    pub fn ancestors(&self) -> Result<Vec<Self>, JapanMeshError> {
        get_ancestor_chain(&self.code)
            .iter()
            .map(|code| Self::from_code(code))
            .collect()
    }
}
