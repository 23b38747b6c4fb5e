//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle with corners `(0, 0), (w, h)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_size(100., 200.);
    /// assert_eq!(rect.top(), 200.);
    /// assert_eq!(rect.bot(), 0.);
    /// assert_eq!(rect.left(), 0.);
    /// assert_eq!(rect.right(), 100.);
    /// ```
    pub fn from_size(w: f64, h: f64) -> Self {
        Self::new(Point::zero(), Point::new(w, h))
    }

    /// Creates a rectangle of width `w` and height `h` centered on `center`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_center_size(Point::zero(), 80., 40.);
    /// assert_eq!(rect, Rect::from_sides(-40., -20., 40., 20.));
    /// ```
    pub fn from_center_size(center: Point, w: f64, h: f64) -> Self {
        Self::new(
            Point::new(center.x - w / 2., center.y - h / 2.),
            Point::new(center.x + w / 2., center.y + h / 2.),
        )
    }

    /// Returns the center point of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 55., 45.);
    /// assert_eq!(rect.center(), Point::new(27.5, 22.5));
    /// ```
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    ///
    /// If you want sides to be sorted for you, consider using [`Rect::new`] instead.
    #[inline]
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({}) <= right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({}) <= top ({})",
            bot,
            top
        );
        Self::new(Point::new(left, bot), Point::new(right, top))
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// Returns [`None`] if `left > right` or if `bot > top`.
    pub fn from_sides_option(left: f64, bot: f64, right: f64, top: f64) -> Option<Self> {
        if left > right || bot > top {
            None
        } else {
            Some(Self::new(Point::new(left, bot), Point::new(right, top)))
        }
    }

    /// Creates a new rectangle from the given opposite corner points.
    ///
    /// The corners are sorted, so any two opposite corners may be given.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            p1: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// The bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// The left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// The right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// The horizontal width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The vertical height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The lower-left corner.
    #[inline]
    pub fn lower_left(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    #[inline]
    pub fn upper_right(&self) -> Point {
        self.p1
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self::new(
            Point::new(self.left().min(other.left()), self.bot().min(other.bot())),
            Point::new(
                self.right().max(other.right()),
                self.top().max(other.top()),
            ),
        )
    }

    /// The rectangle's vertices in counterclockwise order,
    /// starting at the lower-left corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.p0,
            Point::new(self.p1.x, self.p0.y),
            self.p1,
            Point::new(self.p0.x, self.p1.y),
        ]
    }

    /// Converts the rectangle to an equivalent 4-vertex [`Polygon`].
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_verts(self.corners().to_vec())
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl TranslateMut for Rect {
    fn translate_mut(&mut self, p: Point) {
        self.p0.translate_mut(p);
        self.p1.translate_mut(p);
    }
}

impl TransformMut for Rect {
    fn transform_mut(&mut self, trans: Transformation) {
        self.translate_mut(trans.offset_point());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_corners() {
        let rect = Rect::new(Point::new(3., -1.), Point::new(-2., 4.));
        assert_eq!(rect, Rect::from_sides(-2., -1., 3., 4.));
        assert_eq!(rect.width(), 5.);
        assert_eq!(rect.height(), 5.);
    }

    #[test]
    fn union_works() {
        let a = Rect::from_sides(0., 0., 10., 10.);
        let b = Rect::from_sides(-5., 2., 4., 20.);
        assert_eq!(a.union(b), Rect::from_sides(-5., 0., 10., 20.));
    }

    #[test]
    fn from_sides_option_rejects_inverted_sides() {
        assert_eq!(Rect::from_sides_option(1., 0., 0., 1.), None);
    }

    #[test]
    fn to_polygon_is_counterclockwise() {
        let poly = Rect::from_size(2., 1.).to_polygon();
        assert_eq!(poly.points().len(), 4);
        assert!(poly.signed_area() > 0.);
        assert_eq!(poly.area(), 2.);
    }
}
