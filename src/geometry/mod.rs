pub mod bounds;
pub mod point_in_polygon;

pub use bounds::Bounds;
pub use point_in_polygon::inside;
