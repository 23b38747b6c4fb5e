//! Placement of geometry by translation.

use impl_trait_for_tuples::impl_for_tuples;
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Where a piece of geometry is placed relative to its parent.
///
/// Instances are only ever placed by translation, so a transformation
/// is fully described by its offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    pub(crate) b: Point,
}

impl Transformation {
    /// The transformation that leaves geometry in place.
    pub fn identity() -> Self {
        Self { b: Point::zero() }
    }

    /// A shift by `x` horizontally and `y` vertically.
    pub fn translate(x: f64, y: f64) -> Self {
        Self::from_offset(Point::new(x, y))
    }

    /// A shift by `offset`.
    pub fn from_offset(offset: Point) -> Self {
        Self { b: offset }
    }

    /// Composes a `child` placement nested inside a `parent` placement.
    ///
    /// The result maps child coordinates directly to the parent's parent.
    pub fn cascade(parent: Transformation, child: Transformation) -> Transformation {
        Self::from_offset(parent.b + child.b)
    }

    /// The offset applied by this transformation.
    pub fn offset_point(&self) -> Point {
        self.b
    }

    /// The transformation that undoes `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let shift = Transformation::translate(5., 10.);
    /// assert_eq!(
    ///     Transformation::cascade(shift.inv(), shift),
    ///     Transformation::identity()
    /// );
    /// ```
    pub fn inv(&self) -> Transformation {
        Self::from_offset(-self.b)
    }
}

impl From<Point> for Transformation {
    fn from(offset: Point) -> Self {
        Self::from_offset(offset)
    }
}

/// Geometry that can be moved in place by a [`Transformation`].
#[impl_for_tuples(32)]
pub trait TransformMut {
    /// Applies `trans` to `self`.
    fn transform_mut(&mut self, trans: Transformation);
}

impl<T: TransformMut> TransformMut for Vec<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        self.iter_mut().for_each(|item| item.transform_mut(trans));
    }
}

impl<T: TransformMut> TransformMut for Option<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        if let Some(item) = self {
            item.transform_mut(trans);
        }
    }
}

/// By-value counterpart of [`TransformMut`].
pub trait Transform: TransformMut + Sized {
    /// Returns `self` with `trans` applied.
    #[inline]
    fn transform(mut self, trans: Transformation) -> Self {
        self.transform_mut(trans);
        self
    }
}

impl<T: TransformMut> Transform for T {}

/// Geometry that can be shifted in place by a [`Point`].
#[impl_for_tuples(32)]
pub trait TranslateMut {
    /// Shifts `self` by `p`.
    fn translate_mut(&mut self, p: Point);
}

impl<T: TranslateMut> TranslateMut for Vec<T> {
    fn translate_mut(&mut self, p: Point) {
        self.iter_mut().for_each(|item| item.translate_mut(p));
    }
}

impl<T: TranslateMut> TranslateMut for Option<T> {
    fn translate_mut(&mut self, p: Point) {
        if let Some(item) = self {
            item.translate_mut(p);
        }
    }
}

/// By-value counterpart of [`TranslateMut`].
pub trait Translate: TranslateMut + Sized {
    /// Returns `self` shifted by `p`.
    #[inline]
    fn translate(mut self, p: Point) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<T: TranslateMut> Translate for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect::Rect;

    #[test]
    fn cascade_with_identity_is_noop() {
        let shift = Transformation::translate(520., 130.);
        assert_eq!(
            Transformation::cascade(shift, Transformation::identity()),
            shift
        );
        assert_eq!(
            Transformation::cascade(Transformation::identity(), shift),
            shift
        );
    }

    #[test]
    fn cascade_adds_offsets() {
        let parent = Transformation::translate(100., 0.);
        let child = Transformation::translate(-20., 5.5);
        let pt = Point::new(1., 1.).transform(Transformation::cascade(parent, child));
        assert_eq!(pt, Point::new(81., 6.5));
    }

    #[test]
    fn tuples_translate_elementwise() {
        let pair = (
            Rect::from_sides(0., 0., 100., 200.),
            Rect::from_sides(50., -50., 150., 0.),
        )
            .translate(Point::new(5., 10.));
        assert_eq!(pair.0, Rect::from_sides(5., 10., 105., 210.));
        assert_eq!(pair.1, Rect::from_sides(55., -40., 155., 10.));
    }

    #[test]
    fn collections_transform_elementwise() {
        let mut pts = vec![Point::new(0., 0.), Point::new(1., 2.)];
        pts.transform_mut(Transformation::translate(-1., 1.));
        assert_eq!(pts, vec![Point::new(-1., 1.), Point::new(0., 3.)]);

        let mut none: Option<Point> = None;
        none.translate_mut(Point::new(1., 1.));
        assert_eq!(none, None);
    }
}
