use super::Vertex;
use crate::geometry::{Bounds, inside};

/// A simple polygon stored as an open ring of vertices
///
/// The last vertex implicitly connects back to the first. Construction never
/// validates: degenerate polygons (fewer than 3 vertices) are representable
/// and can still be queried, see [`Polygon::is_valid`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Build a polygon from a ring that may repeat its first vertex at the end
    ///
    /// GIS formats close rings explicitly. The duplicate would add a
    /// zero-length edge, so it is dropped.
    pub fn from_closed_ring(mut vertices: Vec<Vertex>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Even-odd containment test, see [`inside`]
    pub fn contains(&self, point: Vertex) -> bool {
        inside(&self.vertices, point)
    }

    /// Same polygon with the opposite winding order
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| v.translate(dx, dy))
                .collect(),
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_vertices(&self.vertices)
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Vertex::from).collect())
    }
}

impl From<&geo::LineString<f64>> for Polygon {
    fn from(ring: &geo::LineString<f64>) -> Self {
        Self::from_closed_ring(ring.coords().map(|&c| Vertex::from(c)).collect())
    }
}

/// Only the exterior ring is kept; interior rings are ignored
impl From<&geo::Polygon<f64>> for Polygon {
    fn from(polygon: &geo::Polygon<f64>) -> Self {
        Self::from(polygon.exterior())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, polygon};

    fn square() -> Polygon {
        Polygon::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
    }

    #[test]
    fn test_is_valid() {
        assert!(square().is_valid());
        assert!(!Polygon::default().is_valid());
        assert!(!Polygon::from(vec![(0.0, 0.0), (1.0, 1.0)]).is_valid());
    }

    #[test]
    fn test_contains() {
        let sq = square();
        assert!(sq.contains(Vertex::new(5.0, 5.0)));
        assert!(!sq.contains(Vertex::new(15.0, 5.0)));
    }

    #[test]
    fn test_from_closed_ring_drops_duplicate() {
        let ring = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 0.0),
        ];
        let p = Polygon::from_closed_ring(ring);
        assert_eq!(p.len(), 3);

        let single = Polygon::from_closed_ring(vec![Vertex::new(2.0, 2.0)]);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_from_geo_line_string() {
        let ring: LineString<f64> = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)].into();
        // geo closes rings on demand; make sure both forms agree.
        let mut closed = ring.clone();
        closed.close();

        let open = Polygon::from(&ring);
        let shut = Polygon::from(&closed);
        assert_eq!(open, shut);
        assert_eq!(shut.len(), 4);
    }

    #[test]
    fn test_from_geo_polygon_ignores_holes() {
        let with_hole = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 10.0, y: 0.0),
                (x: 10.0, y: 10.0),
                (x: 0.0, y: 10.0),
            ],
            interiors: [
                [
                    (x: 4.0, y: 4.0),
                    (x: 6.0, y: 4.0),
                    (x: 6.0, y: 6.0),
                    (x: 4.0, y: 6.0),
                ],
            ],
        );

        let p = Polygon::from(&with_hole);
        assert_eq!(p.len(), 4);
        assert!(p.contains(Vertex::new(5.0, 5.0)));
    }

    #[test]
    fn test_reversed_and_translated() {
        let sq = square();
        let rev = sq.reversed();
        assert_eq!(rev.vertices()[0], Vertex::new(0.0, 10.0));
        assert_eq!(rev.len(), sq.len());

        let moved = sq.translated(100.0, -100.0);
        assert_eq!(moved.vertices()[2], Vertex::new(110.0, -90.0));
        assert!(moved.contains(Vertex::new(105.0, -95.0)));
    }

    #[test]
    fn test_bounds() {
        let b = square().bounds().unwrap();
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 10.0);
        assert!(Polygon::default().bounds().is_none());
    }
}
