mod feature;
mod rectangle;

pub use feature::{rect_to_feature, to_feature, to_polygon, to_wkt};
pub use rectangle::rect_to_polygon;
