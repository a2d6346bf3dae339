use serde::{Deserialize, Serialize};

/// A 2D coordinate, used both for polygon corners and query points
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the vertex by (dx, dy)
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<geo::Coord<f64>> for Vertex {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

impl From<Vertex> for geo::Coord<f64> {
    fn from(v: Vertex) -> Self {
        geo::coord! { x: v.x, y: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        let v = Vertex::new(1.0, 2.0).translate(-3.0, 0.5);
        assert_eq!(v, Vertex::new(-2.0, 2.5));
    }

    #[test]
    fn test_geo_coord_conversion() {
        let v = Vertex::from(geo::coord! { x: 4.0, y: -1.5 });
        assert_eq!(v, Vertex::new(4.0, -1.5));

        let c: geo::Coord<f64> = v.into();
        assert_eq!(c.x, 4.0);
        assert_eq!(c.y, -1.5);
    }

    #[test]
    fn test_toml_round_trip() {
        let v = Vertex::new(1.5, -2.0);
        let text = toml::to_string(&v).unwrap();
        assert!(text.contains("x = 1.5"));

        let back: Vertex = toml::from_str(&text).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vertex::new(0.0, 1.0).is_finite());
        assert!(!Vertex::new(f64::NAN, 1.0).is_finite());
        assert!(!Vertex::new(0.0, f64::INFINITY).is_finite());
    }
}
