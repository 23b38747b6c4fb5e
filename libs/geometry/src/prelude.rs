//! An import prelude that re-exports commonly used items.

pub use crate::bbox::Bbox;
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::polygon::Polygon;
pub use crate::rect::Rect;
pub use crate::shape::Shape;
pub use crate::snap::{snap_to_grid, snap_to_grid2x, Grid};
pub use crate::transform::{Transform, TransformMut, Transformation, Translate, TranslateMut};
