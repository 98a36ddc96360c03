//! Point (and simple shape) containment predicates.
//!
//! Boundary handling differs on purpose: axis-aligned rectangles include their boundary,
//! oriented rectangles exclude it. Callers snapping things to a grid rely on the latter.

use crate::{AARect, Circle, OrientedRect, Segment, Vec2};

/// Whether `p` is strictly inside the parallelogram with vertex `a` and neighbours `b` and `d`.
///
/// `p - a` is projected on `ab` and `ad`, both projections have to fall strictly between
/// 0 and the squared edge length.
pub fn parallelogram_contains_point(p: Vec2, a: Vec2, b: Vec2, d: Vec2) -> bool {
    let ap = p - a;
    let ab = b - a;
    let ad = d - a;

    let ap_dot_ab = ap.dot(ab);
    let ap_dot_ad = ap.dot(ad);

    let between_ab_and_cd = ap_dot_ad > 0.0 && ap_dot_ad < ad.length_squared();
    let between_ad_and_bc = ap_dot_ab > 0.0 && ap_dot_ab < ab.length_squared();

    between_ab_and_cd && between_ad_and_bc
}

/// Strict: points on the boundary are not contained.
pub fn rect_contains_point(p: Vec2, rect: &OrientedRect) -> bool {
    let [v0, v1, _, v3] = rect.vertices();
    parallelogram_contains_point(p, v0, v1, v3)
}

/// Same as [`rect_contains_point`] for a rectangle given by its center, its diagonal before
/// rotation (`(width, height)`) and its rotation.
pub fn rect_contains_point_by_diagonal(
    p: Vec2,
    center: Vec2,
    base_diagonal: Vec2,
    rotation: f32,
) -> bool {
    let half = base_diagonal * 0.5;
    let a = center - half.rotated(rotation);
    let b = center + Vec2::new(-half.x, half.y).rotated(rotation);
    let d = center + Vec2::new(half.x, -half.y).rotated(rotation);

    parallelogram_contains_point(p, a, b, d)
}

/// Both endpoints strictly inside.
pub fn rect_contains_segment(rect: &OrientedRect, segment: &Segment) -> bool {
    rect_contains_point(segment.start, rect) && rect_contains_point(segment.end, rect)
}

/// Inclusive: points on the boundary are contained.
pub fn aarect_contains_point(p: Vec2, rect: &AARect) -> bool {
    let in_range_x = (p.x - rect.left_top.x) * (p.x - rect.right_bottom.x) <= 0.0;
    let in_range_y = (p.y - rect.left_top.y) * (p.y - rect.right_bottom.y) <= 0.0;

    in_range_x && in_range_y
}

/// Both endpoints inside, boundary included.
pub fn aarect_contains_segment(rect: &AARect, segment: &Segment) -> bool {
    aarect_contains_point(segment.start, rect) && aarect_contains_point(segment.end, rect)
}

/// `inner` must be strictly inside `outer`, touching edges do not count.
pub fn aarect_contains_aarect(outer: &AARect, inner: &AARect) -> bool {
    outer.left_top.x < inner.left_top.x
        && outer.left_top.y < inner.left_top.y
        && outer.right_bottom.x > inner.right_bottom.x
        && outer.right_bottom.y > inner.right_bottom.y
}

/// The circle's four extreme points must be inside the rectangle, boundary included.
pub fn aarect_contains_circle(rect: &AARect, circle: &Circle) -> bool {
    let c = circle.center;
    let r = circle.radius;

    rect.left_top.x <= c.x - r
        && rect.left_top.y <= c.y - r
        && rect.right_bottom.x >= c.x + r
        && rect.right_bottom.y >= c.y + r
}

/// Whether `p` is inside the convex polygon whose consecutive vertices are `vertices`.
///
/// For each edge, the sign of `edge × (p - edge.start)` tells on which side `p` is. The
/// point is inside when all non-zero signs agree, so both windings work and the boundary is
/// included. Fewer than 3 vertices never contain anything.
pub fn convex_polygon_contains_point(p: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        tracing::trace!(
            vertices = vertices.len(),
            "polygon has fewer than 3 vertices, nothing is inside"
        );
        return false;
    }

    let mut side = 0.0f32;
    for (i, &from) in vertices.iter().enumerate() {
        let to = vertices[(i + 1) % vertices.len()];
        let cross = (to - from).cross(p - from);

        if cross == 0.0 {
            continue;
        }
        if side == 0.0 {
            side = cross.signum();
        } else if cross.signum() != side {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn test_aarect_boundary_inclusive() {
        let r = AARect::new([0.0, 0.0], [10.0, 10.0]);
        assert!(aarect_contains_point(v(0.0, 0.0), &r));
        for corner in r.vertices() {
            assert!(aarect_contains_point(corner, &r));
        }
        assert!(aarect_contains_point(v(5.0, 0.0), &r));
        assert!(!aarect_contains_point(v(-0.01, 5.0), &r));
    }

    #[test]
    fn test_rect_boundary_exclusive() {
        let aa = AARect::new([0.0, 0.0], [10.0, 10.0]);
        let r = aa.to_oriented();

        assert!(!rect_contains_point(v(0.0, 0.0), &r));
        for corner in r.vertices() {
            assert!(!rect_contains_point(corner, &r));
        }
        for edge in r.edges() {
            assert!(!rect_contains_point(edge.midpoint(), &r));
        }
        assert!(rect_contains_point(v(0.01, 0.01), &r));
        assert!(rect_contains_point(v(5.0, 5.0), &r));
    }

    #[test]
    fn test_rect_rotated() {
        let r = OrientedRect::new([0.0, 0.0], 4.0, 1.0, std::f32::consts::FRAC_PI_2);
        // width now runs along y
        assert!(rect_contains_point(v(0.0, 1.9), &r));
        assert!(!rect_contains_point(v(1.9, 0.0), &r));
    }

    #[test]
    fn test_rect_by_diagonal() {
        let rng = fastrand::Rng::with_seed(21);

        for _ in 0..200 {
            let rect = OrientedRect::new(
                [rng.f32() * 10.0, rng.f32() * 10.0],
                1.0 + rng.f32() * 5.0,
                1.0 + rng.f32() * 5.0,
                rng.f32() * 6.0,
            );
            let p = v(rng.f32() * 16.0 - 3.0, rng.f32() * 16.0 - 3.0);
            let diagonal = v(rect.width, rect.height);

            assert_eq!(
                rect_contains_point_by_diagonal(p, rect.center, diagonal, rect.rotation),
                rect_contains_point(p, &rect),
                "{:?} {}",
                rect,
                p
            );
        }

        let diagonal = v(4.0, 2.0);
        assert!(rect_contains_point_by_diagonal(v(1.9, 0.0), Vec2::ZERO, diagonal, 0.0));
        assert!(!rect_contains_point_by_diagonal(v(2.0, 0.0), Vec2::ZERO, diagonal, 0.0));
        assert!(rect_contains_point_by_diagonal(
            v(0.0, 1.9),
            Vec2::ZERO,
            diagonal,
            std::f32::consts::FRAC_PI_2
        ));
    }

    #[test]
    fn test_parallelogram() {
        let a = v(0.0, 0.0);
        let b = v(1.0, 2.0);
        let d = v(3.0, 0.0);
        // c = b + d - a = (4, 2)
        assert!(parallelogram_contains_point(v(2.0, 1.0), a, b, d));
        assert!(!parallelogram_contains_point(v(0.0, 1.5), a, b, d));
    }

    #[test]
    fn test_contains_segment() {
        let aa = AARect::new([0.0, 0.0], [10.0, 10.0]);
        let edge = Segment::new([0.0, 0.0], [10.0, 0.0]);
        assert!(aarect_contains_segment(&aa, &edge));
        assert!(!rect_contains_segment(&aa.to_oriented(), &edge));
        assert!(rect_contains_segment(
            &aa.to_oriented(),
            &Segment::new([1.0, 1.0], [9.0, 9.0])
        ));
    }

    #[test]
    fn test_aarect_contains_aarect() {
        let outer = AARect::new([0.0, 0.0], [10.0, 10.0]);
        assert!(aarect_contains_aarect(&outer, &AARect::new([1.0, 1.0], [9.0, 9.0])));
        assert!(!aarect_contains_aarect(&outer, &AARect::new([0.0, 1.0], [9.0, 9.0])));
        assert!(!aarect_contains_aarect(&outer, &outer));
    }

    #[test]
    fn test_aarect_contains_circle() {
        let r = AARect::new([0.0, 0.0], [10.0, 10.0]);
        assert!(aarect_contains_circle(&r, &Circle::new([5.0, 5.0], 5.0)));
        assert!(!aarect_contains_circle(&r, &Circle::new([5.0, 5.0], 5.1)));
        assert!(!aarect_contains_circle(&r, &Circle::new([1.0, 5.0], 2.0)));
    }

    #[test]
    fn test_convex_polygon_both_windings() {
        let square = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        let mut reversed = square;
        reversed.reverse();

        assert!(convex_polygon_contains_point(v(5.0, 5.0), &square));
        assert!(convex_polygon_contains_point(v(5.0, 5.0), &reversed));
        assert!(!convex_polygon_contains_point(v(15.0, 5.0), &square));
        assert!(!convex_polygon_contains_point(v(15.0, 5.0), &reversed));
    }

    #[test]
    fn test_convex_polygon_boundary_and_zero_cross() {
        let square = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        assert!(convex_polygon_contains_point(v(5.0, 0.0), &square));
        assert!(convex_polygon_contains_point(v(0.0, 0.0), &square));
        // collinear with the bottom edge but outside: the zero cross must not hide the
        // disagreement between the other edges
        assert!(!convex_polygon_contains_point(v(-5.0, 0.0), &square));
    }

    #[test]
    fn test_convex_polygon_too_few_vertices() {
        assert!(!convex_polygon_contains_point(v(0.0, 0.0), &[]));
        assert!(!convex_polygon_contains_point(
            v(0.5, 0.0),
            &[v(0.0, 0.0), v(1.0, 0.0)]
        ));
    }
}
