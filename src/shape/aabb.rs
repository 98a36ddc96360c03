use super::*;
use crate::contain::{
    aarect_contains_aarect, aarect_contains_circle, aarect_contains_point, aarect_contains_segment,
};
use crate::overlap::aarect_overlaps;
use crate::sat::rect_aarect_penetration;

/// Axis-aligned rectangle described by two opposite corners.
///
/// `left_top` is expected to be component-wise smaller than `right_bottom` (y grows
/// downwards, as in screen space). This is not enforced when building the struct
/// directly, use [`AARect::new`] to sort arbitrary corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AARect {
    pub left_top: Vec2,
    pub right_bottom: Vec2,
}

impl AARect {
    /// Builds the rectangle spanned by two arbitrary opposite corners.
    pub fn new(p1: impl Into<Vec2>, p2: impl Into<Vec2>) -> Self {
        let p1 = p1.into();
        let p2 = p2.into();
        AARect {
            left_top: Vec2 {
                x: p1.x.min(p2.x),
                y: p1.y.min(p2.y),
            },
            right_bottom: Vec2 {
                x: p1.x.max(p2.x),
                y: p1.y.max(p2.y),
            },
        }
    }

    pub fn from_center(center: impl Into<Vec2>, width: f32, height: f32) -> Self {
        let center = center.into();
        let half = Vec2::new(width * 0.5, height * 0.5);
        AARect {
            left_top: center - half,
            right_bottom: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.left_top + self.right_bottom) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.right_bottom.x - self.left_top.x
    }

    pub fn height(&self) -> f32 {
        self.right_bottom.y - self.left_top.y
    }

    /// Equivalent rectangle with a rotation of zero.
    pub fn to_oriented(&self) -> OrientedRect {
        OrientedRect {
            center: self.center(),
            width: self.width(),
            height: self.height(),
            rotation: 0.0,
        }
    }

    /// Corners in order: left-top, right-top, right-bottom, left-bottom.
    pub fn vertices(&self) -> [Vec2; 4] {
        let lt = self.left_top;
        let rb = self.right_bottom;
        [lt, Vec2::new(rb.x, lt.y), rb, Vec2::new(lt.x, rb.y)]
    }

    /// Boundary edges, each one going from a vertex to the next (see [`AARect::vertices`]).
    pub fn edges(&self) -> [Segment; 4] {
        let [a, b, c, d] = self.vertices();
        [
            Segment { start: a, end: b },
            Segment { start: b, end: c },
            Segment { start: c, end: d },
            Segment { start: d, end: a },
        ]
    }

    /// Boundary inclusive.
    pub fn contains(&self, p: impl Into<Vec2>) -> bool {
        aarect_contains_point(p.into(), self)
    }

    /// Strict on all sides: `inner` must not touch this rectangle's boundary.
    pub fn contains_aarect(&self, inner: &AARect) -> bool {
        aarect_contains_aarect(self, inner)
    }

    pub fn contains_segment(&self, segment: &Segment) -> bool {
        aarect_contains_segment(self, segment)
    }

    pub fn contains_circle(&self, circle: &Circle) -> bool {
        aarect_contains_circle(self, circle)
    }
}

impl Shape for AARect {
    fn bbox(&self) -> AARect {
        *self
    }
}

impl Intersect<AARect> for AARect {
    fn intersects(&self, b: AARect) -> bool {
        aarect_overlaps(self, &b)
    }
}

impl Intersect<Circle> for AARect {
    fn intersects(&self, shape: Circle) -> bool {
        shape.intersects(*self)
    }
}

impl Intersect<Segment> for AARect {
    fn intersects(&self, shape: Segment) -> bool {
        shape.intersects(*self)
    }
}

impl Intersect<Triangle> for AARect {
    fn intersects(&self, triangle: Triangle) -> bool {
        triangle.intersects(*self)
    }
}

impl Intersect<OrientedRect> for AARect {
    fn intersects(&self, rect: OrientedRect) -> bool {
        rect.intersects(*self)
    }
}

impl Penetrate<OrientedRect> for AARect {
    fn penetration(&self, rect: OrientedRect) -> Option<Vec2> {
        rect_aarect_penetration(&rect, self).map(|mtv| -mtv)
    }
}

impl Intersect<Vec2> for AARect {
    fn intersects(&self, p: Vec2) -> bool {
        self.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_corners() {
        let r = AARect::new([10.0, 0.0], [0.0, 10.0]);
        assert_eq!(r.left_top, Vec2::new(0.0, 0.0));
        assert_eq!(r.right_bottom, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_from_center() {
        let r = AARect::from_center([5.0, 5.0], 4.0, 2.0);
        assert_eq!(r, AARect::new([3.0, 4.0], [7.0, 6.0]));
        assert_eq!(r.center(), Vec2::new(5.0, 5.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
    }

    #[test]
    fn test_to_oriented() {
        let r = AARect::new([0.0, 0.0], [10.0, 4.0]).to_oriented();
        assert_eq!(r.center, Vec2::new(5.0, 2.0));
        assert_eq!(r.width, 10.0);
        assert_eq!(r.height, 4.0);
        assert_eq!(r.rotation, 0.0);
    }

    #[test]
    fn test_edges_are_closed() {
        let edges = AARect::new([0.0, 0.0], [2.0, 1.0]).edges();
        for i in 0..4 {
            assert_eq!(edges[i].end, edges[(i + 1) % 4].start);
        }
        assert_eq!(edges[0].end, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_contains_corners() {
        let r = AARect::new([0.0, 0.0], [10.0, 10.0]);
        for v in r.vertices() {
            assert!(r.contains(v));
        }
        assert!(r.contains([5.0, 10.0]));
        assert!(!r.contains([5.0, 10.1]));
        assert!(r.intersects(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_intersects() {
        let a = AARect::new([0.0, 0.0], [10.0, 10.0]);
        assert!(a.intersects(AARect::new([10.0, 10.0], [20.0, 20.0])));
        assert!(!a.intersects(AARect::new([10.5, 0.0], [20.0, 20.0])));
        assert!(a.intersects(Circle::new([12.0, 5.0], 2.5)));
        assert!(!a.intersects(Circle::new([12.0, 12.0], 2.5)));
        assert!(a.intersects(Segment::new([-1.0, 5.0], [1.0, 5.0])));
        assert!(a.intersects(OrientedRect::new([12.0, 5.0], 5.0, 2.0, 0.0)));
    }

    #[test]
    fn test_penetration_with_rect() {
        let a = AARect::new([0.0, 0.0], [10.0, 10.0]);
        let r = OrientedRect::new([12.0, 5.0], 6.0, 2.0, 0.0);

        // a is on the left of r, it has to go left
        let mtv = a.penetration(r).unwrap();
        assert!((mtv - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }
}
