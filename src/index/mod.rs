pub mod constants;
mod code;
mod decode;
mod encode;
mod hierarchy;
mod level;

pub use code::{get_level, is_in_japan, is_valid, truncate_code};
pub use constants::{GRID_SPECS, GridSpec, LEVEL1_CODES, is_level1_code};
pub use decode::to_bounding_rect;
pub use encode::to_code;
pub use hierarchy::{get_ancestor_chain, get_children, get_parent};
pub use level::GridLevel;
