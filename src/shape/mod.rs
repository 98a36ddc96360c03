use crate::Vec2;

mod aabb;
mod circle;
mod rect;
mod segment;
mod triangle;

pub use aabb::*;
pub use circle::*;
pub use rect::*;
pub use segment::*;
pub use triangle::*;

/// Boolean overlap test between two shapes.
///
/// Only implemented for the pairs this crate knows how to answer, so asking for an
/// unsupported combination does not compile.
pub trait Intersect<T> {
    fn intersects(&self, shape: T) -> bool;
}

/// Overlap test that also tells how to get out of it.
///
/// `penetration` returns the minimum translation vector to apply to `self` so that it stops
/// overlapping `shape`, or `None` if they do not overlap.
pub trait Penetrate<T>: Intersect<T> {
    fn penetration(&self, shape: T) -> Option<Vec2>;
}

pub trait Shape: Copy + Intersect<AARect> {
    /// Smallest axis-aligned rectangle containing the shape.
    fn bbox(&self) -> AARect;
}

impl Shape for Vec2 {
    fn bbox(&self) -> AARect {
        AARect {
            left_top: *self,
            right_bottom: *self,
        }
    }
}

impl Intersect<AARect> for Vec2 {
    fn intersects(&self, aabb: AARect) -> bool {
        aabb.contains(*self)
    }
}

/// Bounding box of a set of points. Callers guarantee at least one point.
pub(crate) fn bbox_of(points: &[Vec2]) -> AARect {
    let mut left_top = points[0];
    let mut right_bottom = points[0];
    for p in &points[1..] {
        left_top.x = left_top.x.min(p.x);
        left_top.y = left_top.y.min(p.y);
        right_bottom.x = right_bottom.x.max(p.x);
        right_bottom.y = right_bottom.y.max(p.y);
    }
    AARect {
        left_top,
        right_bottom,
    }
}
