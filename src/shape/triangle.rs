use super::*;
use crate::contain::convex_polygon_contains_point;
use crate::sat::rect_triangle_penetration;
use crate::ShapeError;

/// Order in which a triangle's vertices go around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise in a y-up frame (clockwise on a y-down screen).
    CounterClockwise,
    Clockwise,
    /// Zero area.
    Degenerate,
}

/// Triangle given by its three vertices.
///
/// Any winding is accepted, none of the queries depend on it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    pub vertices: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: impl Into<Vec2>, b: impl Into<Vec2>, c: impl Into<Vec2>) -> Self {
        Triangle {
            vertices: [a.into(), b.into(), c.into()],
        }
    }

    /// Edges `v0 -> v1`, `v1 -> v2` and `v2 -> v0`.
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [
            Segment { start: a, end: b },
            Segment { start: b, end: c },
            Segment { start: c, end: a },
        ]
    }

    pub fn centroid(&self) -> Vec2 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }

    /// Positive for counter-clockwise vertices (in a y-up frame).
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a) * 0.5
    }

    pub fn winding(&self) -> Winding {
        let area = self.signed_area();
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Boundary inclusive.
    pub fn contains(&self, p: impl Into<Vec2>) -> bool {
        convex_polygon_contains_point(p.into(), &self.vertices)
    }
}

impl From<[Vec2; 3]> for Triangle {
    fn from(vertices: [Vec2; 3]) -> Self {
        Triangle { vertices }
    }
}

impl TryFrom<&[Vec2]> for Triangle {
    type Error = ShapeError;

    fn try_from(vertices: &[Vec2]) -> Result<Self, Self::Error> {
        let vertices: [Vec2; 3] = vertices
            .try_into()
            .map_err(|_| ShapeError::VertexCount {
                expected: 3,
                found: vertices.len(),
            })?;
        Ok(Triangle { vertices })
    }
}

impl Shape for Triangle {
    fn bbox(&self) -> AARect {
        bbox_of(&self.vertices)
    }
}

/// Full separating axis test, so a box lying inside the triangle is found too. See
/// [`crate::overlap::aarect_overlaps_triangle`] for the cheaper vertex-or-edge check.
impl Intersect<AARect> for Triangle {
    fn intersects(&self, aabb: AARect) -> bool {
        rect_triangle_penetration(&aabb.to_oriented(), self).is_some()
    }
}

impl Intersect<OrientedRect> for Triangle {
    fn intersects(&self, rect: OrientedRect) -> bool {
        rect.intersects(*self)
    }
}

impl Penetrate<OrientedRect> for Triangle {
    fn penetration(&self, rect: OrientedRect) -> Option<Vec2> {
        rect_triangle_penetration(&rect, self).map(|mtv| -mtv)
    }
}

impl Intersect<Vec2> for Triangle {
    fn intersects(&self, p: Vec2) -> bool {
        self.contains(p)
    }
}
