use crate::domain::Vertex;

/// Axis-aligned bounding box of a vertex set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of vertices, `None` if the set is empty
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        bounds.expand(rest);

        Some(bounds)
    }

    /// Expand bounds to include another set of vertices
    pub fn expand(&mut self, vertices: &[Vertex]) {
        for v in vertices {
            self.min_x = self.min_x.min(v.x);
            self.max_x = self.max_x.max(v.x);
            self.min_y = self.min_y.min(v.y);
            self.max_y = self.max_y.max(v.y);
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Vertex {
        Vertex::new(self.min_x, self.min_y)
    }
}
