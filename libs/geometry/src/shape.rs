//! Shapes that can be drawn on a layer.

use serde::{Deserialize, Serialize};

use crate::{
    bbox::Bbox,
    point::Point,
    polygon::Polygon,
    rect::Rect,
    transform::{TransformMut, Transformation, TranslateMut},
};

/// A rectangle or a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A rectangle.
    Rect(Rect),
    /// A polygon.
    Polygon(Polygon),
}

impl Shape {
    /// The rectangle, if this shape is one.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(*r),
            _ => None,
        }
    }

    /// The polygon, if this shape is one.
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// The shape's vertices as a closed ring.
    pub fn to_polygon(&self) -> Polygon {
        match self {
            Self::Rect(r) => r.to_polygon(),
            Self::Polygon(p) => p.clone(),
        }
    }

    /// The area enclosed by the shape.
    pub fn area(&self) -> f64 {
        match self {
            Self::Rect(r) => r.area(),
            Self::Polygon(p) => p.area(),
        }
    }
}

impl TranslateMut for Shape {
    fn translate_mut(&mut self, p: Point) {
        match self {
            Shape::Rect(rect) => rect.translate_mut(p),
            Shape::Polygon(polygon) => polygon.translate_mut(p),
        };
    }
}

impl TransformMut for Shape {
    fn transform_mut(&mut self, trans: Transformation) {
        match self {
            Shape::Rect(rect) => rect.transform_mut(trans),
            Shape::Polygon(polygon) => polygon.transform_mut(trans),
        }
    }
}

impl Bbox for Shape {
    fn bbox(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => rect.bbox(),
            Shape::Polygon(polygon) => polygon.bbox(),
        }
    }
}

impl From<Rect> for Shape {
    #[inline]
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Polygon> for Shape {
    #[inline]
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}
