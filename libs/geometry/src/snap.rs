//! Snapping utilities (eg. snap to a grid).
//!
//! Ties are rounded to the even grid step.

use serde::{Deserialize, Serialize};

/// Snaps `pos` to the nearest multiple of `grid`.
///
/// # Examples
///
/// ```
/// use geometry::snap::snap_to_grid;
///
/// assert_eq!(snap_to_grid(2.104, 0.01), 2.1);
/// assert_eq!(snap_to_grid(-0.006, 0.01), -0.01);
/// assert_eq!(snap_to_grid(0.0, 0.01), 0.0);
/// ```
///
/// # Panics
///
/// Panics if `grid` is not a positive, finite number.
pub fn snap_to_grid(pos: f64, grid: f64) -> f64 {
    assert!(
        grid.is_finite() && grid > 0.,
        "grid resolution must be positive and finite (got {grid})"
    );

    let steps = (pos / grid).round_ties_even();
    let inv = 1. / grid;
    let inv_rounded = inv.round();
    // Dividing by an integral step count gives the correctly rounded decimal,
    // so snapped values compare equal to their literals.
    if (inv - inv_rounded).abs() <= 1e-9 * inv {
        steps / inv_rounded
    } else {
        steps * grid
    }
}

/// Snaps `pos` to the nearest multiple of `2 * grid`.
///
/// Half of the result is guaranteed to lie on `grid`.
///
/// # Examples
///
/// ```
/// use geometry::snap::snap_to_grid2x;
///
/// assert_eq!(snap_to_grid2x(25.35, 0.01), 25.36);
/// assert_eq!(snap_to_grid2x(2.0, 0.01), 2.0);
/// ```
#[inline]
pub fn snap_to_grid2x(pos: f64, grid: f64) -> f64 {
    snap_to_grid(pos, 2. * grid)
}

/// A manufacturing grid.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Grid(f64);

impl Grid {
    /// Creates a grid with the given resolution.
    ///
    /// # Panics
    ///
    /// Panics if `resolution` is not a positive, finite number.
    pub fn new(resolution: f64) -> Self {
        assert!(
            resolution.is_finite() && resolution > 0.,
            "grid resolution must be positive and finite (got {resolution})"
        );
        Self(resolution)
    }

    /// The grid resolution.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.0
    }

    /// Snaps `pos` to the nearest grid point.
    #[inline]
    pub fn snap(&self, pos: f64) -> f64 {
        snap_to_grid(pos, self.0)
    }

    /// Snaps `pos` to the nearest even multiple of the grid resolution.
    #[inline]
    pub fn snap2x(&self, pos: f64) -> f64 {
        snap_to_grid2x(pos, self.0)
    }

    /// Returns `true` if `pos` lies on this grid.
    pub fn contains(&self, pos: f64) -> bool {
        let steps = pos / self.0;
        (steps - steps.round()).abs() <= 1e-6
    }
}
