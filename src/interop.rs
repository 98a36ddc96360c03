//! Conversions to [parry2d](https://docs.rs/parry2d) shapes, to hand the same geometry over to
//! a physics engine or to check results against it.

use parry2d::math::{Isometry, Point, Real, Vector};
use parry2d::shape;

use crate::{AARect, Circle, OrientedRect, Segment, Triangle, Vec2};

/// A shape that can be expressed as a parry2d shape placed by an isometry.
pub trait ToParry {
    type Shape: shape::Shape;

    fn to_parry(&self) -> (Isometry<Real>, Self::Shape);
}

impl From<Vec2> for Point<Real> {
    fn from(v: Vec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point<Real>> for Vec2 {
    fn from(p: Point<Real>) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector<Real> {
    fn from(v: Vec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl ToParry for OrientedRect {
    type Shape = shape::Cuboid;

    fn to_parry(&self) -> (Isometry<Real>, shape::Cuboid) {
        let half_extents = Vector::new(self.width * 0.5, self.height * 0.5);
        (
            Isometry::new(self.center.into(), self.rotation),
            shape::Cuboid::new(half_extents),
        )
    }
}

impl ToParry for AARect {
    type Shape = shape::Cuboid;

    fn to_parry(&self) -> (Isometry<Real>, shape::Cuboid) {
        self.to_oriented().to_parry()
    }
}

impl ToParry for Circle {
    type Shape = shape::Ball;

    fn to_parry(&self) -> (Isometry<Real>, shape::Ball) {
        (
            Isometry::translation(self.center.x, self.center.y),
            shape::Ball::new(self.radius),
        )
    }
}

impl ToParry for Triangle {
    type Shape = shape::Triangle;

    fn to_parry(&self) -> (Isometry<Real>, shape::Triangle) {
        let [a, b, c] = self.vertices;
        (
            Isometry::identity(),
            shape::Triangle::new(a.into(), b.into(), c.into()),
        )
    }
}

impl ToParry for Segment {
    type Shape = shape::Segment;

    fn to_parry(&self) -> (Isometry<Real>, shape::Segment) {
        (
            Isometry::identity(),
            shape::Segment::new(self.start.into(), self.end.into()),
        )
    }
}
