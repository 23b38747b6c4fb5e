//! Open centerline paths and their extrusion into polygons.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// Points closer than this (in micrometers) are considered coincident.
const COINCIDENT_TOL: f64 = 1e-9;

/// An open path through an ordered sequence of points.
///
/// Consecutive points are always distinct.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Creates a path through the given points.
    ///
    /// Consecutive coincident points are merged.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let path = Path::new(vec![
    ///     Point::new(0., 0.),
    ///     Point::new(0., 0.),
    ///     Point::new(5., 0.),
    /// ]);
    /// assert_eq!(path.points().len(), 2);
    /// ```
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut out: Vec<Point> = Vec::new();
        for p in points {
            match out.last() {
                Some(last) if last.distance(p) <= COINCIDENT_TOL => {}
                _ => out.push(p),
            }
        }
        Self { points: out }
    }

    /// The points of the path's centerline.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The total length of the centerline.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|seg| seg[0].distance(seg[1]))
            .sum()
    }

    /// Extrudes the path into a ribbon polygon of constant `width`.
    ///
    /// Interior vertices are mitered and the two ends are cut flush,
    /// perpendicular to the first and last segments.
    /// Paths with fewer than two points extrude to an empty polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let path = Path::new(vec![Point::new(0., 0.), Point::new(10., 0.)]);
    /// let polygon = path.extrude(2.);
    /// assert_eq!(polygon.bbox(), Some(Rect::from_sides(0., -1., 10., 1.)));
    /// ```
    pub fn extrude(&self, width: f64) -> Polygon {
        let n = self.points.len();
        if n < 2 {
            return Polygon::default();
        }

        let half = width / 2.;
        let normals: Vec<Point> = self
            .points
            .windows(2)
            .map(|seg| left_normal(seg[1] - seg[0]))
            .collect();

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for (i, p) in self.points.iter().enumerate() {
            let offset = if i == 0 {
                normals[0] * half
            } else if i == n - 1 {
                normals[n - 2] * half
            } else {
                miter(normals[i - 1], normals[i], half)
            };
            left.push(*p + offset);
            right.push(*p - offset);
        }

        left.extend(right.into_iter().rev());
        Polygon::from_verts(left)
    }
}

/// The unit vector perpendicular to `dir`, rotated 90 degrees counterclockwise.
fn left_normal(dir: Point) -> Point {
    let len = dir.x.hypot(dir.y);
    Point::new(-dir.y / len, dir.x / len)
}

/// The offset from a vertex to the corner of a mitered join of half-width `half`
/// between segments with unit normals `n0` and `n1`.
fn miter(n0: Point, n1: Point, half: f64) -> Point {
    let sum = n0 + n1;
    let len = sum.x.hypot(sum.y);
    // A full reversal has no miter; keep the outgoing normal.
    if len <= COINCIDENT_TOL {
        return n1 * half;
    }
    let m = Point::new(sum.x / len, sum.y / len);
    let cos = m.x * n1.x + m.y * n1.y;
    m * (half / cos)
}

impl Bbox for Path {
    fn bbox(&self) -> Option<Rect> {
        self.points.iter().fold(None, |acc: Option<Rect>, p| {
            let r = Rect::new(*p, *p);
            Some(match acc {
                Some(acc) => acc.union(r),
                None => r,
            })
        })
    }
}

impl TranslateMut for Path {
    fn translate_mut(&mut self, p: Point) {
        self.points.translate_mut(p);
    }
}

impl TransformMut for Path {
    fn transform_mut(&mut self, trans: Transformation) {
        self.points.transform_mut(trans);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    /// Distance from `p` to the infinite line through `a` and `b`.
    fn line_distance(p: Point, a: Point, b: Point) -> f64 {
        let d = b - a;
        ((p.x - a.x) * d.y - (p.y - a.y) * d.x).abs() / d.x.hypot(d.y)
    }

    #[test]
    fn extrude_l_shape() {
        let path = Path::new(vec![
            Point::new(0., 0.),
            Point::new(10., 0.),
            Point::new(10., 10.),
        ]);
        let polygon = path.extrude(2.);
        let expected = Polygon::from_verts(vec![
            Point::new(0., 1.),
            Point::new(9., 1.),
            Point::new(9., 10.),
            Point::new(11., 10.),
            Point::new(11., -1.),
            Point::new(0., -1.),
        ]);
        assert_abs_diff_eq!(polygon, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(polygon.area(), path.length() * 2., epsilon = 1e-9);
    }

    #[test]
    fn extruded_edges_keep_constant_width() {
        let pts: Vec<Point> = (0..8)
            .map(|i| {
                let angle = (i as f64 * 45. + 22.5).to_radians();
                Point::polar(Point::new(0., 30.), 14.78, angle)
            })
            .collect();
        let path = Path::new(pts.clone());
        let width = 2.;
        let polygon = path.extrude(width);
        let n = pts.len();
        let verts = polygon.points();
        assert_eq!(verts.len(), 2 * n);
        for i in 0..n - 1 {
            let (a, b) = (pts[i], pts[i + 1]);
            // Left boundary vertices i and i + 1 bound segment i.
            assert_abs_diff_eq!(line_distance(verts[i], a, b), width / 2., epsilon = 1e-9);
            assert_abs_diff_eq!(
                line_distance(verts[i + 1], a, b),
                width / 2.,
                epsilon = 1e-9
            );
            // Right boundary is stored in reverse.
            let ri = 2 * n - 1 - i;
            assert_abs_diff_eq!(line_distance(verts[ri], a, b), width / 2., epsilon = 1e-9);
            assert_abs_diff_eq!(
                line_distance(verts[ri - 1], a, b),
                width / 2.,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn degenerate_paths_extrude_to_nothing() {
        assert!(Path::new(vec![]).extrude(1.).points().is_empty());
        let single = Path::new(vec![Point::new(1., 1.), Point::new(1., 1.)]);
        assert_eq!(single.points().len(), 1);
        assert!(single.extrude(1.).points().is_empty());
    }

    #[test]
    fn reversal_does_not_produce_nan() {
        let path = Path::new(vec![
            Point::new(0., 0.),
            Point::new(5., 0.),
            Point::new(0., 0.),
        ]);
        let polygon = path.extrude(1.);
        assert!(polygon.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
