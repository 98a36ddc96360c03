//! Overlap tests that do not go through the separating axis theorem: circles, and the cheap
//! boolean tests between axis-aligned rectangles and other shapes.

use crate::contain::aarect_contains_point;
use crate::intersect::segment_intersection;
use crate::{AARect, Circle, Triangle, Vec2};

/// MTV pushing `a` away from `b`, `None` if they do not overlap.
///
/// The circles overlap when their centers are closer than the sum of the radii. The MTV goes
/// from the center of `b` towards the center of `a` and is as long as the overlap.
///
/// Concentric circles have no such direction, they are pushed apart along +x.
pub fn circle_penetration(a: &Circle, b: &Circle) -> Option<Vec2> {
    let d = a.center - b.center;
    let distance = d.length();
    let radius_sum = a.radius + b.radius;

    if distance >= radius_sum {
        return None;
    }

    let depth = radius_sum - distance;
    if distance == 0.0 {
        tracing::trace!(depth, "concentric circles, resolving along +x");
        return Some(Vec2::X * depth);
    }

    Some(d / distance * depth)
}

/// Per-axis interval test, touching rectangles overlap.
pub fn aarect_overlaps(a: &AARect, b: &AARect) -> bool {
    let overlap_x = a.left_top.x <= b.right_bottom.x && a.right_bottom.x >= b.left_top.x;
    let overlap_y = a.left_top.y <= b.right_bottom.y && a.right_bottom.y >= b.left_top.y;

    overlap_x && overlap_y
}

/// True when a vertex of `triangle` is inside `rect` or when their edges cross.
///
/// This does not catch a rectangle lying entirely inside the triangle: no vertex of the
/// triangle is in the rectangle and no edges cross. The `Intersect` impls between `AARect`
/// and `Triangle` run the full separating axis test instead.
pub fn aarect_overlaps_triangle(rect: &AARect, triangle: &Triangle) -> bool {
    if triangle
        .vertices
        .iter()
        .any(|&v| aarect_contains_point(v, rect))
    {
        return true;
    }

    let triangle_edges = triangle.edges();
    rect.edges().iter().any(|rect_edge| {
        triangle_edges
            .iter()
            .any(|tri_edge| segment_intersection(rect_edge, tri_edge).is_some())
    })
}
