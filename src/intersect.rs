//! Crossing points between segments and rectangle boundaries.

use crate::{AARect, OrientedRect, Segment, Vec2, EPSILON};

/// Intersection point of two segments, if any.
///
/// Solves `a.start + s * (a.end - a.start) = b.start + t * (b.end - b.start)` and accepts
/// `s, t` in `[0, 1]`.
///
/// Segments whose directions are parallel within [`EPSILON`] never intersect, even when
/// they are collinear and overlapping. Degenerate (zero length) segments fall in that case.
pub fn segment_intersection(a: &Segment, b: &Segment) -> Option<Vec2> {
    let ab = a.end - a.start;
    let cd = b.end - b.start;
    let det = ab.cross(cd);
    if det.abs() < EPSILON {
        return None;
    }

    let ac = b.start - a.start;
    let s = ac.cross(cd) / det;
    let t = ac.cross(ab) / det;

    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
        Some(a.start + ab * s)
    } else {
        None
    }
}

/// Up to two points where a segment crosses a rectangle boundary, along with the boundary
/// edges that were crossed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectCrossings {
    len: usize,
    points: [Vec2; 2],
    edges: [Segment; 2],
}

impl RectCrossings {
    fn push(&mut self, point: Vec2, edge: Segment) {
        self.points[self.len] = point;
        self.edges[self.len] = edge;
        self.len += 1;
    }

    fn is_full(&self) -> bool {
        self.len == 2
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    pub fn edges(&self) -> &[Segment] {
        &self.edges[..self.len]
    }

    /// Crossing points paired with the edge they lie on, in boundary order.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, Segment)> + '_ {
        self.points().iter().copied().zip(self.edges().iter().copied())
    }
}

fn crossings_with_edges(segment: &Segment, edges: &[Segment; 4]) -> RectCrossings {
    let mut crossings = RectCrossings::default();

    // A convex boundary is crossed at most twice by a segment
    for edge in edges {
        if let Some(p) = segment_intersection(segment, edge) {
            crossings.push(p, *edge);
        }
        if crossings.is_full() {
            break;
        }
    }

    crossings
}

/// Points where `segment` crosses the boundary of `rect`, edges tested in vertex order
/// (see [`OrientedRect::vertices`]).
pub fn segment_rect_intersections(segment: &Segment, rect: &OrientedRect) -> RectCrossings {
    crossings_with_edges(segment, &rect.edges())
}

/// Points where `segment` crosses the boundary of `rect`, edges tested in the order
/// top, right, bottom, left.
pub fn segment_aarect_intersections(segment: &Segment, rect: &AARect) -> RectCrossings {
    crossings_with_edges(segment, &rect.edges())
}
