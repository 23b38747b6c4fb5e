//! Polygons.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A polygon, given as a closed ring of vertices.
///
/// The first vertex is not repeated at the end.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Polygon {
    /// Vector of points that make up the polygon.
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with given vertices.
    pub fn from_verts(vec: Vec<Point>) -> Self {
        Self { points: vec }
    }

    /// Returns the bottom y-coordinate in the polygon.
    ///
    /// Returns [`None`] if the polygon has no vertices.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let points = vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(-4., 5.),
    /// ];
    /// let polygon = Polygon::from_verts(points);
    /// assert_eq!(polygon.bot(), Some(0.));
    /// ```
    pub fn bot(&self) -> Option<f64> {
        self.points.iter().map(|point| point.y).reduce(f64::min)
    }

    /// Returns the top y-coordinate in the polygon.
    pub fn top(&self) -> Option<f64> {
        self.points.iter().map(|point| point.y).reduce(f64::max)
    }

    /// Returns the leftmost x-coordinate in the polygon.
    pub fn left(&self) -> Option<f64> {
        self.points.iter().map(|point| point.x).reduce(f64::min)
    }

    /// Returns the rightmost x-coordinate in the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let points = vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(-4., 5.),
    /// ];
    /// let polygon = Polygon::from_verts(points);
    /// assert_eq!(polygon.right(), Some(1.));
    /// ```
    pub fn right(&self) -> Option<f64> {
        self.points.iter().map(|point| point.x).reduce(f64::max)
    }

    /// Returns a the vector of points representing the polygon.
    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns the vertex centroid of the polygon.
    ///
    /// This is the average of all vertices, not the area centroid.
    /// Returns [`None`] if the polygon has no vertices.
    pub fn center(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Point::zero(), |acc, point| acc + *point);
        Some(Point::new(sum.x / n, sum.y / n))
    }

    /// The signed area of the polygon (shoelace formula).
    ///
    /// Positive for counterclockwise vertex order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.
    }

    /// The (unsigned) area of the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let square = Rect::from_sides(0., 0., 2., 3.).to_polygon();
    /// assert_eq!(square.area(), 6.);
    /// ```
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        Rect::from_sides_option(self.left()?, self.bot()?, self.right()?, self.top()?)
    }
}

impl TranslateMut for Polygon {
    fn translate_mut(&mut self, p: Point) {
        self.points.translate_mut(p);
    }
}

impl TransformMut for Polygon {
    fn transform_mut(&mut self, trans: Transformation) {
        self.points.transform_mut(trans);
    }
}

impl AbsDiffEq for Polygon {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Polygon {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_polygon_has_no_bbox() {
        let polygon = Polygon::default();
        assert_eq!(polygon.bbox(), None);
        assert_eq!(polygon.center(), None);
        assert_eq!(polygon.area(), 0.);
    }

    #[test]
    fn clockwise_polygon_has_negative_signed_area() {
        let polygon = Polygon::from_verts(vec![
            Point::new(0., 0.),
            Point::new(0., 1.),
            Point::new(1., 1.),
            Point::new(1., 0.),
        ]);
        assert_eq!(polygon.signed_area(), -1.);
        assert_eq!(polygon.area(), 1.);
    }

    #[test]
    fn vertex_centroid() {
        let polygon = Rect::from_sides(-2., 0., 2., 6.).to_polygon();
        assert_eq!(polygon.center(), Some(Point::new(0., 3.)));
    }
}
