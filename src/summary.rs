//! Scalar statistics of a filled stress grid.

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

/// Extremes and mean of a stress grid, in pascals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    /// Number of rows sampled across the section height.
    pub rows: usize,
    /// Number of columns sampled along the span.
    pub cols: usize,
    /// Smallest sampled stress.
    pub min: f64,
    /// Largest sampled stress.
    pub max: f64,
    /// Arithmetic mean of all samples.
    pub mean: f64,
}

impl GridSummary {
    /// Summarise `grid`, or return `None` when it has no cells.
    ///
    /// # Examples
    /// ```
    /// use beamstress::GridSummary;
    /// use ndarray::array;
    ///
    /// let grid = array![[1.0, -2.0], [3.0, 2.0]];
    /// let summary = GridSummary::of(grid.view()).expect("non-empty grid");
    /// assert_eq!(summary.min, -2.0);
    /// assert_eq!(summary.max, 3.0);
    /// assert_eq!(summary.mean, 1.0);
    /// ```
    #[must_use]
    pub fn of(grid: ArrayView2<'_, f64>) -> Option<Self> {
        let (rows, cols) = grid.dim();
        let mean = grid.mean()?;
        let (min, max) = grid
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            });
        Some(Self {
            rows,
            cols,
            min,
            max,
            mean,
        })
    }

    /// Difference between the largest and smallest sample.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}
