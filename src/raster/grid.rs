use crate::domain::Vertex;
use crate::error::RasterError;
use crate::geometry::Bounds;

/// Regular lattice of sample points
///
/// Sample `(column, row)` sits at `origin + (column * step, row * step)`.
/// Row 0 is the lowest y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Vertex,
    columns: usize,
    rows: usize,
    step: f64,
}

impl Grid {
    pub fn new(
        origin: Vertex,
        columns: usize,
        rows: usize,
        step: f64,
    ) -> Result<Self, RasterError> {
        if columns == 0 || rows == 0 {
            return Err(RasterError::EmptyGrid { columns, rows });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(RasterError::InvalidStep(step));
        }
        if !origin.is_finite() {
            return Err(RasterError::NonFiniteOrigin {
                x: origin.x,
                y: origin.y,
            });
        }

        Ok(Self {
            origin,
            columns,
            rows,
            step,
        })
    }

    /// Smallest grid with the given step that starts at the bounds' minimum
    /// corner and reaches at least its maximum corner
    pub fn covering(bounds: &Bounds, step: f64) -> Result<Self, RasterError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(RasterError::InvalidStep(step));
        }

        let origin = bounds.min();
        if !origin.is_finite() {
            return Err(RasterError::NonFiniteOrigin {
                x: origin.x,
                y: origin.y,
            });
        }

        let too_large = || RasterError::GridTooLarge {
            width: bounds.width(),
            height: bounds.height(),
            step,
        };
        let columns = samples_along(bounds.width(), step).ok_or_else(too_large)?;
        let rows = samples_along(bounds.height(), step).ok_or_else(too_large)?;

        Self::new(origin, columns, rows, step)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn origin(&self) -> Vertex {
        self.origin
    }

    /// Position of the sample at (column, row)
    pub fn sample(&self, column: usize, row: usize) -> Vertex {
        Vertex::new(
            self.origin.x + column as f64 * self.step,
            self.origin.y + row as f64 * self.step,
        )
    }
}

/// Number of samples needed to span `extent`, including both ends
fn samples_along(extent: f64, step: f64) -> Option<usize> {
    let intervals = (extent / step).ceil();
    // usize::MAX as f64 rounds up to 2^64, so equality is already out of range.
    if !intervals.is_finite() || intervals < 0.0 || intervals >= usize::MAX as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}
