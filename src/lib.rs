//! pnpoly - Even-odd point-in-polygon test and brute-force polygon rasterization

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod raster;

pub use config::RasterConfig;
pub use domain::{Polygon, Vertex};
pub use error::RasterError;
pub use geometry::{Bounds, inside};
pub use raster::{Grid, Raster, rasterize};
