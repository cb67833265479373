use crate::cell::MeshCell;
use crate::error::JapanMeshError;
use geo::BoundingRect;
use geo_types::{MultiPolygon, Polygon};
use geojson::{Feature, FeatureCollection, JsonObject};
use rayon::prelude::*;
use serde_json::Value;

/// Trait for converting collections of [`MeshCell`]s to GeoJSON.
///
/// Implemented for `[MeshCell]` and, through deref, `Vec<MeshCell>`.
pub trait MeshCellsToGeoJson {
    /// Converts cells to their polygon outlines.
    fn to_polygons(&self) -> Result<Vec<Polygon<f64>>, JapanMeshError>;
    /// Converts cells to a FeatureCollection whose features carry `code` and `level`.
    fn to_feature_collection(&self) -> Result<FeatureCollection, JapanMeshError>;
    /// Serializes the FeatureCollection to a GeoJSON string.
    fn to_geojson_string(&self) -> Result<String, JapanMeshError>;
}

fn cell_properties(cell: &MeshCell) -> JsonObject {
    let mut properties = JsonObject::new();
    properties.insert("code".to_string(), Value::String(cell.code.clone()));
    properties.insert(
        "level".to_string(),
        Value::String(cell.level.label().to_string()),
    );
    properties
}

impl MeshCellsToGeoJson for [MeshCell] {
    fn to_polygons(&self) -> Result<Vec<Polygon<f64>>, JapanMeshError> {
        self.par_iter().map(MeshCell::to_polygon).collect()
    }

    fn to_feature_collection(&self) -> Result<FeatureCollection, JapanMeshError> {
        let features = self
            .par_iter()
            .map(|cell| cell.to_feature(Some(cell_properties(cell))))
            .collect::<Result<Vec<Feature>, JapanMeshError>>()?;

        let bbox = MultiPolygon::new(self.to_polygons()?)
            .bounding_rect()
            .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

        Ok(FeatureCollection {
            bbox,
            features,
            foreign_members: None,
        })
    }

    fn to_geojson_string(&self) -> Result<String, JapanMeshError> {
        Ok(serde_json::to_string(&self.to_feature_collection()?)?)
    }
}
