pub use bounding_box::BoundingBox;
pub use line::Line;
pub use point::Point;

mod bounding_box;
mod line;
mod point;
