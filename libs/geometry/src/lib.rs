//! Planar geometry for mask layout.
//!
//! Coordinates are floating point micrometers.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect):
//!
//! ```
//! # use geometry::prelude::*;
//! let rect = Rect::from_sides(10., 20., 30., 40.);
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod path;
pub mod point;
pub mod polygon;
pub mod prelude;
pub mod rect;
pub mod shape;
pub mod snap;
pub mod transform;

/// Normalizes an angle in degrees to `[0, 360)`.
///
/// ```
/// use geometry::wrap_angle;
///
/// assert_eq!(wrap_angle(270.), 270.);
/// assert_eq!(wrap_angle(-90.), 270.);
/// assert_eq!(wrap_angle(450.), 90.);
/// assert_eq!(wrap_angle(-720.), 0.);
/// assert_eq!(wrap_angle(360.), 0.);
/// ```
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.)
}
