//! 2-D points.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::snap::snap_to_grid;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A point in two-dimensional space.
///
/// Coordinates are in micrometers.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0., 0.));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Creates a point at distance `radius` from `center`, at `angle` radians
    /// measured counterclockwise from the +x axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// # use approx::assert_abs_diff_eq;
    /// let p = Point::polar(Point::new(0., 10.), 2., std::f64::consts::FRAC_PI_2);
    /// assert_abs_diff_eq!(p, Point::new(0., 12.), epsilon = 1e-12);
    /// ```
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }

    /// The Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point reflected across the vertical axis `x = 0`.
    #[inline]
    pub fn reflect_horiz(&self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Snaps the x and y coordinates of this point to the nearest multiple of `grid`.
    #[inline]
    pub fn snap_to_grid(&self, grid: f64) -> Self {
        Self::new(snap_to_grid(self.x, grid), snap_to_grid(self.y, grid))
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl TransformMut for Point {
    fn transform_mut(&mut self, trans: Transformation) {
        self.translate_mut(trans.offset_point());
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    /// Scales both coordinates by `rhs`.
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_arithmetic_works() {
        let a = Point::new(1.5, -2.);
        let b = Point::new(0.5, 4.);
        assert_eq!(a + b, Point::new(2., 2.));
        assert_eq!(a - b, Point::new(1., -6.));
        assert_eq!(-a, Point::new(-1.5, 2.));
        assert_eq!(b * 2., Point::new(1., 8.));
    }

    #[test]
    fn polar_points_lie_on_circle() {
        let center = Point::new(3., 4.);
        for i in 0..16 {
            let angle = i as f64 * std::f64::consts::PI / 8.;
            let p = Point::polar(center, 5., angle);
            assert_relative_eq!(p.distance(center), 5., epsilon = 1e-12);
        }
    }

    #[test]
    fn snap_point_to_grid() {
        let p = Point::new(1.234, -0.006);
        assert_eq!(p.snap_to_grid(0.01), Point::new(1.23, -0.01));
    }
}
