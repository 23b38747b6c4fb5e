//! Primitive shape constructors centered on the origin.

use std::f64::consts::PI;

use geometry::prelude::{Point, Polygon, Rect};

/// Angular step of [`circle`] approximations, in degrees.
pub const CIRCLE_ANGLE_RESOLUTION: f64 = 2.5;

/// A `w` by `h` rectangle.
///
/// The lower-left corner lies at the origin unless `centered` is set,
/// in which case the rectangle is centered on the origin.
pub fn rectangle((w, h): (f64, f64), centered: bool) -> Rect {
    if centered {
        Rect::from_center_size(Point::zero(), w, h)
    } else {
        Rect::new(Point::zero(), Point::new(w, h))
    }
}

/// A regular octagon with sides of length `side_length`.
///
/// The top, bottom, left and right sides are axis aligned,
/// so the flat-to-flat width is `side_length * (1 + √2)`.
pub fn octagon(side_length: f64) -> Polygon {
    regular_polygon(8, side_length)
}

/// A regular polygon with `sides` sides of length `side_length`.
///
/// The first vertex lies at angle `180° / sides`, so the bottom side is horizontal.
pub fn regular_polygon(sides: usize, side_length: f64) -> Polygon {
    let half_angle = PI / sides as f64;
    let radius = side_length / 2. / half_angle.sin();
    Polygon::from_verts(
        (0..sides)
            .map(|k| Point::polar(Point::zero(), radius, half_angle * (2 * k + 1) as f64))
            .collect(),
    )
}

/// A polygonal approximation of a circle of the given radius.
pub fn circle(radius: f64) -> Polygon {
    let n = (360. / CIRCLE_ANGLE_RESOLUTION).round() as usize;
    Polygon::from_verts(
        (0..n)
            .map(|k| {
                Point::polar(
                    Point::zero(),
                    radius,
                    (k as f64 * CIRCLE_ANGLE_RESOLUTION).to_radians(),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use geometry::prelude::Bbox;

    use super::*;

    #[test]
    fn octagon_has_equal_sides() {
        let oct = octagon(10.);
        let pts = oct.points();
        assert_eq!(pts.len(), 8);
        for i in 0..8 {
            assert_relative_eq!(pts[i].distance(pts[(i + 1) % 8]), 10., epsilon = 1e-9);
        }
        let bbox = oct.bbox_rect();
        assert_relative_eq!(bbox.width(), 10. * (1. + 2f64.sqrt()), epsilon = 1e-9);
        assert_relative_eq!(bbox.height(), bbox.width(), epsilon = 1e-9);
    }

    #[test]
    fn circle_vertices_lie_on_radius() {
        let c = circle(40.);
        assert_eq!(c.points().len(), 144);
        for p in c.points() {
            assert_relative_eq!(p.distance(Point::zero()), 40., epsilon = 1e-9);
        }
    }

    #[test]
    fn rectangles_anchor_at_origin_or_center() {
        assert_eq!(rectangle((2., 4.), false), Rect::from_sides(0., 0., 2., 4.));
        assert_eq!(rectangle((2., 4.), true), Rect::from_sides(-1., -2., 1., 2.));
    }
}
