mod line;
mod point;
mod polygon;
mod segment;

pub use line::Line;
pub use point::{Ccw, Point};
pub use polygon::Polygon;
pub use segment::Segment;
