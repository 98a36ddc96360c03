use super::*;
use crate::contain::{rect_contains_point, rect_contains_segment};
use crate::sat::{
    rect_aarect_penetration, rect_penetration, rect_segment_penetration, rect_triangle_penetration,
};

/// Rectangle rotated around its center.
///
/// `width` and `height` are full edge lengths measured along the rectangle's own axes, before
/// the rotation (in radians, counter-clockwise) is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientedRect {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    pub rotation: f32,
}

impl OrientedRect {
    pub fn new(center: impl Into<Vec2>, width: f32, height: f32, rotation: f32) -> Self {
        Self {
            center: center.into(),
            width,
            height,
            rotation,
        }
    }

    /// The four corners, in boundary order.
    ///
    /// With no rotation they are: (-w, -h), (-w, +h), (+w, +h), (+w, -h) around the center,
    /// so `v0 -> v1` runs along the height vector and `v0 -> v3` along the width vector.
    pub fn vertices(&self) -> [Vec2; 4] {
        let to_v0 = Vec2::new(-self.width * 0.5, -self.height * 0.5).rotated(self.rotation);
        let to_v3 = Vec2::new(self.width * 0.5, -self.height * 0.5).rotated(self.rotation);

        [
            self.center + to_v0,
            self.center - to_v3,
            self.center - to_v0,
            self.center + to_v3,
        ]
    }

    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.vertices();
        [
            Segment { start: a, end: b },
            Segment { start: b, end: c },
            Segment { start: c, end: d },
            Segment { start: d, end: a },
        ]
    }

    /// Full-length local x axis, rotated.
    pub fn width_vector(&self) -> Vec2 {
        Vec2::new(self.width, 0.0).rotated(self.rotation)
    }

    /// Full-length local y axis, rotated.
    pub fn height_vector(&self) -> Vec2 {
        Vec2::new(0.0, self.height).rotated(self.rotation)
    }

    /// Unit vectors along the local x and y axes, rotated. Unlike [`OrientedRect::width_vector`]
    /// and [`OrientedRect::height_vector`] they stay usable when a side has zero length.
    pub fn axes(&self) -> [Vec2; 2] {
        [Vec2::X.rotated(self.rotation), Vec2::Y.rotated(self.rotation)]
    }

    /// Boundary exclusive.
    pub fn contains(&self, p: impl Into<Vec2>) -> bool {
        rect_contains_point(p.into(), self)
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        rect_contains_segment(self, segment)
    }
}

impl Shape for OrientedRect {
    fn bbox(&self) -> AARect {
        bbox_of(&self.vertices())
    }
}

impl Intersect<OrientedRect> for OrientedRect {
    fn intersects(&self, other: OrientedRect) -> bool {
        self.penetration(other).is_some()
    }
}

impl Penetrate<OrientedRect> for OrientedRect {
    fn penetration(&self, other: OrientedRect) -> Option<Vec2> {
        rect_penetration(self, &other)
    }
}

impl Intersect<AARect> for OrientedRect {
    fn intersects(&self, aabb: AARect) -> bool {
        self.penetration(aabb).is_some()
    }
}

impl Penetrate<AARect> for OrientedRect {
    fn penetration(&self, aabb: AARect) -> Option<Vec2> {
        rect_aarect_penetration(self, &aabb)
    }
}

impl Intersect<Segment> for OrientedRect {
    fn intersects(&self, segment: Segment) -> bool {
        self.penetration(segment).is_some()
    }
}

impl Penetrate<Segment> for OrientedRect {
    fn penetration(&self, segment: Segment) -> Option<Vec2> {
        rect_segment_penetration(self, &segment)
    }
}

impl Intersect<Triangle> for OrientedRect {
    fn intersects(&self, triangle: Triangle) -> bool {
        self.penetration(triangle).is_some()
    }
}

impl Penetrate<Triangle> for OrientedRect {
    fn penetration(&self, triangle: Triangle) -> Option<Vec2> {
        rect_triangle_penetration(self, &triangle)
    }
}

impl Intersect<Vec2> for OrientedRect {
    fn intersects(&self, p: Vec2) -> bool {
        self.contains(p)
    }
}
