//! Separating axis tests between oriented rectangles and other convex shapes.
//!
//! Each test walks a fixed list of candidate axes. As soon as the projections of both shapes
//! on one axis are disjoint the shapes are separated and the test returns `None`. Otherwise the
//! axis with the smallest penetration depth (first one on ties) gives the minimum translation
//! vector (MTV).
//!
//! The returned MTV is the translation to apply to the rectangle (first argument) to push it
//! out of the other shape. Axis directions never depend on vertex winding: the sign of the
//! MTV is chosen from the relative position of the shapes.

use crate::contain::rect_contains_segment;
use crate::intersect::segment_rect_intersections;
use crate::{AARect, OrientedRect, Segment, Triangle, Vec2, EPSILON, PENETRATION_DEPTH_OFFSET};


/// Runs the axis loop over `(axis, extra)` candidates. `measure` returns the depth along an
/// axis and the unit direction the first shape must move along to reduce it.
fn shallowest_axis<A, const N: usize>(
    candidates: [(Vec2, A); N],
    mut measure: impl FnMut(Vec2, A) -> (f32, Vec2),
) -> Option<Vec2> {
    let mut best: Option<(f32, Vec2)> = None;

    for (axis, extra) in candidates {
        // rectangle axes are unit vectors, only segment and triangle edges get here
        if axis.length_squared() < EPSILON * EPSILON {
            tracing::trace!(x = axis.x, y = axis.y, "skipping degenerate separating axis");
            continue;
        }

        let (depth, direction) = measure(axis, extra);
        let depth = depth + PENETRATION_DEPTH_OFFSET;
        if depth < 0.0 {
            return None;
        }

        if best.map_or(true, |(best_depth, _)| depth < best_depth) {
            best = Some((depth, direction));
        }
    }

    best.map(|(depth, direction)| direction * depth)
}

/// Unit vector along `axis`, flipped if needed so that it points the same way as `d`.
fn oriented_unit(axis: Vec2, d: Vec2) -> Vec2 {
    let unit = axis.normalize();
    if unit.dot(d) < 0.0 {
        -unit
    } else {
        unit
    }
}

fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    vertices.iter().fold((f32::MAX, f32::MIN), |(min, max), v| {
        let p = v.dot(axis);
        (min.min(p), max.max(p))
    })
}

/// MTV pushing `a` out of `b`, `None` if they do not overlap.
///
/// Candidate axes are the unit axes of `a` then of `b`. Along a unit axis `u` of `a`, where
/// `a` has half extent `e`, the depth is `e + (|u·w_b| + |u·h_b|) / 2 - |u·(c_a - c_b)|`.
///
/// The axes come from the rotation rather than from the edge vectors, so a rectangle with a
/// zero width or height still gets its separating axis.
pub fn rect_penetration(a: &OrientedRect, b: &OrientedRect) -> Option<Vec2> {
    let d = a.center - b.center;
    let [xa, ya] = a.axes();
    let [xb, yb] = b.axes();
    let (wa, ha) = (a.width_vector(), a.height_vector());
    let (wb, hb) = (b.width_vector(), b.height_vector());

    // (own half extent, edge vectors of the other rectangle)
    let candidates = [
        (xa, (a.width * 0.5, wb, hb)),
        (ya, (a.height * 0.5, wb, hb)),
        (xb, (b.width * 0.5, wa, ha)),
        (yb, (b.height * 0.5, wa, ha)),
    ];

    shallowest_axis(candidates, |u, (own, w, h)| {
        let other = (u.dot(w).abs() + u.dot(h).abs()) * 0.5;
        let distance = u.dot(d).abs();
        (own + other - distance, oriented_unit(u, d))
    })
}

/// [`rect_penetration`] against the rotation-free equivalent of `aabb`.
pub fn rect_aarect_penetration(rect: &OrientedRect, aabb: &AARect) -> Option<Vec2> {
    rect_penetration(rect, &aabb.to_oriented())
}

/// MTV pushing `rect` away from `segment`, `None` if they do not overlap.
///
/// Candidate axes: the rectangle unit axes, the segment vector and its normal.
/// Along `v` the depth is
/// `((|v·w| + |v·h|) / 2 + |v·s| / 2 - |v·(c_rect - c_segment)|) / |v|`.
///
/// A segment lying fully inside the rectangle always overlaps it. If rounding makes the axis
/// test miss such a segment, the result is `Some(Vec2::ZERO)`: an overlap, but applying that
/// MTV does not separate anything.
pub fn rect_segment_penetration(rect: &OrientedRect, segment: &Segment) -> Option<Vec2> {
    let d = rect.center - segment.midpoint();
    let w = rect.width_vector();
    let h = rect.height_vector();
    let s = segment.vector();
    let [x, y] = rect.axes();

    let candidates = [(x, ()), (y, ()), (s, ()), (s.perp(), ())];

    let resolution = shallowest_axis(candidates, |v, ()| {
        let rect_extent = (v.dot(w).abs() + v.dot(h).abs()) * 0.5;
        let segment_extent = v.dot(s).abs() * 0.5;
        let distance = v.dot(d).abs();
        (
            (rect_extent + segment_extent - distance) / v.length(),
            oriented_unit(v, d),
        )
    });

    match resolution {
        Some(mtv) => Some(mtv),
        // rounding can make a contained segment look separated along one axis
        None if rect_contains_segment(rect, segment) => Some(Vec2::ZERO),
        None => None,
    }
}

/// Boolean rectangle/segment test: the segment is inside the rectangle or crosses its boundary.
///
/// Cheaper than [`rect_segment_penetration`] when no resolution is needed. Unlike the SAT
/// version, a segment lying exactly on an edge does not count (parallel edges never cross).
pub fn rect_overlaps_segment(rect: &OrientedRect, segment: &Segment) -> bool {
    rect_contains_segment(rect, segment) || !segment_rect_intersections(segment, rect).is_empty()
}

/// MTV pushing `rect` out of `triangle`, `None` if they do not overlap.
///
/// Candidate axes: the two rectangle unit axes then the normals of the triangle edges
/// `v0 -> v1`, `v1 -> v2`, `v2 -> v0`, all normalized. Both shapes are projected on each
/// axis; the depth is how far the rectangle has to move along it so that the two intervals
/// only touch. When neither interval contains the other this is the length of their
/// intersection.
pub fn rect_triangle_penetration(rect: &OrientedRect, triangle: &Triangle) -> Option<Vec2> {
    let rect_vertices = rect.vertices();
    let [a, b, c] = triangle.vertices;
    let [x, y] = rect.axes();

    let candidates = [
        (x, ()),
        (y, ()),
        ((b - a).perp(), ()),
        ((c - b).perp(), ()),
        ((a - c).perp(), ()),
    ];

    shallowest_axis(candidates, |axis, ()| {
        let axis = axis.normalize();
        let (rect_min, rect_max) = project(&rect_vertices, axis);
        let (tri_min, tri_max) = project(&triangle.vertices, axis);

        let forward = tri_max - rect_min;
        let backward = rect_max - tri_min;

        if forward <= backward {
            (forward, axis)
        } else {
            (backward, -axis)
        }
    })
}
