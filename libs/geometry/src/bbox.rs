//! Bounding rectangles.

use impl_trait_for_tuples::impl_for_tuples;

use crate::rect::Rect;

/// Geometry with an axis-aligned bounding rectangle.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let rect = Rect::from_sides(0., 0., 100., 200.);
/// assert_eq!(rect.bbox(), Some(Rect::from_sides(0., 0., 100., 200.)));
/// ```
pub trait Bbox {
    /// The smallest rectangle enclosing `self`, or [`None`] if `self` is empty.
    ///
    /// Degenerate geometry such as a single point is not empty.
    fn bbox(&self) -> Option<Rect>;

    /// Like [`Bbox::bbox`], but panics on empty geometry.
    fn bbox_rect(&self) -> Rect {
        self.bbox().unwrap()
    }
}

/// The bounding union of two optional rectangles.
///
/// An empty side contributes nothing.
pub fn union_option(a: Option<Rect>, b: Option<Rect>) -> Option<Rect> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.union(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl<T> Bbox for &T
where
    T: Bbox,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

#[impl_for_tuples(64)]
impl Bbox for TupleIdentifier {
    #[allow(clippy::let_and_return)]
    fn bbox(&self) -> Option<Rect> {
        let mut bbox = None;
        for_tuples!( #( bbox = union_option(bbox, TupleIdentifier.bbox()); )* );
        bbox
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        self.as_slice().bbox()
    }
}

impl<T: Bbox> Bbox for [T] {
    fn bbox(&self) -> Option<Rect> {
        self.iter()
            .fold(None, |bbox, item| union_option(bbox, item.bbox()))
    }
}

impl Bbox for Option<Rect> {
    fn bbox(&self) -> Option<Rect> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point::Point, polygon::Polygon};

    fn triangle() -> Polygon {
        Polygon::from_verts(vec![
            Point::new(-10., 25.),
            Point::new(0., 16.),
            Point::new(40., -20.),
        ])
    }

    #[test]
    fn union_of_mixed_tuple() {
        let pair = (Rect::from_sides(0., 0., 100., 200.), triangle());
        assert_eq!(pair.bbox(), Some(Rect::from_sides(-10., -20., 100., 200.)));
    }

    #[test]
    fn union_of_collections() {
        let rects = vec![
            Rect::from_sides(0., 0., 100., 200.),
            Rect::from_sides(-50., 20., 90., 250.),
        ];
        assert_eq!(rects.bbox(), Some(Rect::from_sides(-50., 0., 100., 250.)));
        assert_eq!(Vec::<Rect>::new().bbox(), None);
        assert_eq!(triangle().bbox(), Some(Rect::from_sides(-10., -20., 40., 25.)));
    }

    #[test]
    fn empty_sides_are_ignored() {
        let r = Rect::from_size(1., 1.);
        assert_eq!(union_option(None, Some(r)), Some(r));
        assert_eq!(union_option(Some(r), None), Some(r));
        assert_eq!(union_option(None, None), None);
    }
}
