//! Brute-force polygon rasterization
//!
//! Every sample of a [`Grid`] is tested against the polygon on its own, so
//! rows are evaluated in parallel with rayon. No acceleration structure is
//! built: the cost is one `O(N)` predicate call per sample.

pub mod grid;

pub use grid::Grid;

use log::debug;
use rayon::prelude::*;
use std::fmt;

use crate::domain::Vertex;
use crate::geometry::inside;

/// Inside/outside verdicts for every sample of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    columns: usize,
    rows: usize,
    /// Row-major, row 0 is the lowest y
    cells: Vec<bool>,
}

impl Raster {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Verdict at (column, row), `None` when out of range
    pub fn get(&self, column: usize, row: usize) -> Option<bool> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    pub fn count_inside(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Render as text, highest row first, cells separated by a space
    pub fn render(&self, inside_char: char, outside_char: char) -> String {
        let mut out = String::with_capacity(self.rows * (self.columns * 2 + 1));

        for row in self.cells.chunks(self.columns).rev() {
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(if cell { inside_char } else { outside_char });
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('+', '.'))
    }
}

/// Evaluate the even-odd predicate at every sample of `grid`
///
/// Degenerate polygons are accepted and produce a meaningless but
/// well-formed raster.
pub fn rasterize(polygon: &[Vertex], grid: &Grid) -> Raster {
    debug!(
        "rasterizing {}-vertex polygon over {}x{} grid (step {})",
        polygon.len(),
        grid.columns(),
        grid.rows(),
        grid.step()
    );

    let cells: Vec<bool> = (0..grid.rows())
        .into_par_iter()
        .flat_map_iter(|row| {
            (0..grid.columns()).map(move |column| inside(polygon, grid.sample(column, row)))
        })
        .collect();

    let raster = Raster {
        columns: grid.columns(),
        rows: grid.rows(),
        cells,
    };

    debug!(
        "rasterized {} of {} samples inside",
        raster.count_inside(),
        raster.cells.len()
    );

    raster
}
