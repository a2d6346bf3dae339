pub mod polygon;
pub mod vertex;

pub use polygon::Polygon;
pub use vertex::Vertex;
