use core::ops::{Add, Mul, Sub};

use lison_format::Point;

/// 2D vector in device pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Point at parameter `t` on the segment `self -> to`.
    #[inline]
    pub fn lerp(self, to: Vec2, t: f64) -> Vec2 {
        self + (to - self) * t
    }

    /// Component-wise closeness, for comparisons after float arithmetic.
    #[inline]
    pub fn approx_eq(self, other: Vec2, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(4.0, 2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(2.0, 6.0));
    }

    #[test]
    fn from_point() {
        assert_eq!(Vec2::from(Point::new(1.5, -2.0)), Vec2::new(1.5, -2.0));
    }
}
