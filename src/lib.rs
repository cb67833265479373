//! # japanmesh-rs
//!
//! Japan's standard regional mesh codes (地域メッシュ, JIS X 0410), from the primary
//! mesh (40' x 1°) down to the 1/8 mesh (3.75" x 5.625").
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Codes as strings
//!
//! ```
//! use japanmesh_rs::{GridLevel, LatLng, get_children, to_bounding_rect, to_code};
//!
//! # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
//! let code = to_code(&LatLng::new(35.70078, 139.71475), GridLevel::Level3)?;
//! assert_eq!(code, "53394547");
//!
//! let rect = to_bounding_rect(&code)?;
//! println!("{:?} - {:?}", rect.min(), rect.max());
//!
//! let quadrants = get_children(&code)?;
//! assert_eq!(quadrants.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `MeshCell` - Single Cell Operations
//!
//! ```
//! use japanmesh_rs::{GridLevel, MeshCell};
//!
//! # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
//! let cell = MeshCell::from_coordinate(&(139.71475, 35.70078), GridLevel::Half)?;
//! println!("{} at level {}", cell.code, cell.level);
//! let polygon = cell.to_polygon()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `MeshCellsToGeoJson` - Collections of Cells
//!
//! ```
//! use japanmesh_rs::{MeshCell, MeshCellsToGeoJson};
//!
//! # fn main() -> Result<(), japanmesh_rs::JapanMeshError> {
//! let cells = MeshCell::from_code("533945")?.children()?;
//! let geojson = cells.to_geojson_string()?;
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod io;

pub use cell::MeshCell;
pub use coord::{Coordinate, LatLng};
pub use error::JapanMeshError;
pub use geom::{rect_to_feature, rect_to_polygon, to_feature, to_polygon, to_wkt};
pub use index::{
    GRID_SPECS, GridLevel, GridSpec, LEVEL1_CODES, get_ancestor_chain, get_children, get_level,
    get_parent, is_in_japan, is_level1_code, is_valid, to_bounding_rect, to_code, truncate_code,
};
pub use io::MeshCellsToGeoJson;

pub use geo_types;
pub use geojson;
