use crate::domain::Vertex;

/// Test whether `point` lies inside `polygon` using the even-odd rule
///
/// A horizontal ray is cast from the point towards -x and every edge it
/// crosses toggles the result. The polygon is a closed loop: the last vertex
/// connects back to the first, so the closing vertex must not be repeated.
///
/// Points exactly on an edge may report either `true` or `false`. The answer
/// is deterministic for a given input, but which answer depends on edge
/// orientation and floating-point rounding.
///
/// Callers must supply at least 3 vertices. Fewer vertices still return a
/// boolean without panicking, but the value has no geometric meaning. The
/// result for NaN or infinite coordinates is unspecified.
pub fn inside(polygon: &[Vertex], point: Vertex) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };

    let mut odd_nodes = false;
    let mut prev = last;

    for &vertex in polygon {
        // One endpoint strictly below the scan line, the other at or above.
        // This must be checked before the division: it guarantees vertex.y != prev.y.
        if (vertex.y < point.y && prev.y >= point.y) || (prev.y < point.y && vertex.y >= point.y) {
            let x_cross =
                vertex.x + (point.y - vertex.y) / (prev.y - vertex.y) * (prev.x - vertex.x);
            if x_cross < point.x {
                odd_nodes = !odd_nodes;
            }
        }
        prev = vertex;
    }

    odd_nodes
}
