use super::*;
use crate::overlap::circle_penetration;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: impl Into<Vec2>, radius: f32) -> Self {
        Circle {
            center: center.into(),
            radius,
        }
    }
}

impl Shape for Circle {
    fn bbox(&self) -> AARect {
        AARect {
            left_top: Vec2 {
                x: self.center.x - self.radius,
                y: self.center.y - self.radius,
            },
            right_bottom: Vec2 {
                x: self.center.x + self.radius,
                y: self.center.y + self.radius,
            },
        }
    }
}

impl Intersect<AARect> for Circle {
    fn intersects(&self, b: AARect) -> bool {
        if b.contains(self.center) {
            return true;
        }

        let nearest = Vec2 {
            x: self.center.x.max(b.left_top.x).min(b.right_bottom.x),
            y: self.center.y.max(b.left_top.y).min(b.right_bottom.y),
        };

        (nearest - self.center).length_squared() < self.radius * self.radius
    }
}

impl Intersect<Circle> for Circle {
    fn intersects(&self, c: Circle) -> bool {
        let v = self.center - c.center;

        v.length_squared() < (self.radius + c.radius).powi(2)
    }
}

impl Penetrate<Circle> for Circle {
    fn penetration(&self, c: Circle) -> Option<Vec2> {
        circle_penetration(self, &c)
    }
}

impl Intersect<Vec2> for Circle {
    fn intersects(&self, p: Vec2) -> bool {
        (self.center - p).length_squared() < self.radius.powi(2)
    }
}
