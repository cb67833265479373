pub mod collection;

pub use collection::MeshCellsToGeoJson;
