use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use mint::{Point2, Vector2};

/// A 2D vector (or point) of f32.
///
/// Every shape in this crate is built out of these. Conversions exist from `[f32; 2]`,
/// `(f32, f32)` and the `mint` point/vector types, so most constructors take
/// `impl Into<Vec2>`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 2]", into = "[f32; 2]"))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Unit vector along x
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    /// Unit vector along y
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product, i.e. twice the signed area of the triangle
    /// (0, self, other). Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates counter-clockwise by `theta` radians. A zero angle returns `self` untouched.
    pub fn rotated(self, theta: f32) -> Vec2 {
        if theta == 0.0 {
            return self;
        }
        let (sin, cos) = theta.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Quarter turn counter-clockwise, exact (no trigonometry involved).
    #[inline]
    pub fn perp(self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Returns the unit vector with the same direction.
    /// The zero vector is not special-cased and yields NaN components.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        self / self.length()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Keeps only the x component
    #[inline]
    pub fn x_only(self) -> Vec2 {
        Vec2 { x: self.x, y: 0.0 }
    }

    /// Keeps only the y component
    #[inline]
    pub fn y_only(self) -> Vec2 {
        Vec2 { x: 0.0, y: self.y }
    }

    pub fn round_i32(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }

    pub fn floor_i32(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    pub fn ceil_i32(self) -> (i32, i32) {
        (self.x.ceil() as i32, self.y.ceil() as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Component-wise product
impl Mul for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2 { x, y }
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2 { x, y }
    }
}

impl From<Point2<f32>> for Vec2 {
    #[inline]
    fn from(p: Point2<f32>) -> Self {
        Vec2 { x: p.x, y: p.y }
    }
}

impl From<Vec2> for Point2<f32> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Point2 { x: v.x, y: v.y }
    }
}

impl From<Vector2<f32>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f32>) -> Self {
        Vec2 { x: v.x, y: v.y }
    }
}

impl From<Vec2> for Vector2<f32> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(feature = "euclid")]
mod euclid_impls {
    use super::Vec2;

    impl<U> From<euclid::Vector2D<f32, U>> for Vec2 {
        fn from(v: euclid::Vector2D<f32, U>) -> Self {
            Vec2 { x: v.x, y: v.y }
        }
    }

    impl<U> From<Vec2> for euclid::Vector2D<f32, U> {
        fn from(v: Vec2) -> Self {
            euclid::Vector2D::new(v.x, v.y)
        }
    }

    impl<U> From<euclid::Point2D<f32, U>> for Vec2 {
        fn from(p: euclid::Point2D<f32, U>) -> Self {
            Vec2 { x: p.x, y: p.y }
        }
    }

    impl<U> From<Vec2> for euclid::Point2D<f32, U> {
        fn from(v: Vec2) -> Self {
            euclid::Point2D::new(v.x, v.y)
        }
    }
}
