use super::*;
use crate::intersect::{segment_intersection, segment_rect_intersections};
use crate::sat::rect_segment_penetration;

/// Directed segment going from `start` to `end`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// `end - start`
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }

    /// Unit direction from `start` to `end`. NaN for a degenerate segment.
    pub fn direction(&self) -> Vec2 {
        self.vector().normalize()
    }

    pub fn length(&self) -> f32 {
        self.vector().length()
    }

    pub fn reversed(&self) -> Segment {
        Segment {
            start: self.end,
            end: self.start,
        }
    }

    /// Whether `p` lies on the segment, allowing it to be up to `tolerance` away from it.
    /// See [`crate::POINT_ON_SEGMENT_TOLERANCE`] for a sensible default.
    pub fn contains_point(&self, p: impl Into<Vec2>, tolerance: f32) -> bool {
        let p = p.into();
        let v = self.vector();
        let w = p - self.start;
        let len = v.length();

        if len <= tolerance {
            return w.length() <= tolerance;
        }

        let distance_to_line = v.cross(w).abs() / len;
        let along = v.dot(w) / len;

        distance_to_line <= tolerance && along >= -tolerance && along <= len + tolerance
    }
}

impl Shape for Segment {
    fn bbox(&self) -> AARect {
        AARect::new(self.start, self.end)
    }
}

impl Intersect<Segment> for Segment {
    fn intersects(&self, s: Segment) -> bool {
        segment_intersection(self, &s).is_some()
    }
}

impl Intersect<AARect> for Segment {
    fn intersects(&self, aabb: AARect) -> bool {
        aabb.contains(self.start)
            || aabb.contains(self.end)
            || aabb.edges().iter().any(|e| e.intersects(*self))
    }
}

impl Intersect<OrientedRect> for Segment {
    fn intersects(&self, rect: OrientedRect) -> bool {
        rect_segment_penetration(&rect, self).is_some()
    }
}

impl Penetrate<OrientedRect> for Segment {
    fn penetration(&self, rect: OrientedRect) -> Option<Vec2> {
        rect_segment_penetration(&rect, self).map(|mtv| -mtv)
    }
}

impl Segment {
    /// Number of times the segment crosses the rectangle boundary (0, 1 or 2).
    pub fn count_rect_crossings(&self, rect: &OrientedRect) -> usize {
        segment_rect_intersections(self, rect).len()
    }
}
