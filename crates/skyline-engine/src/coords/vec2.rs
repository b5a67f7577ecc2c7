use core::ops::{Add, AddAssign, Mul, Sub};

/// 2D vector in logical pixels. Used for both positions and sizes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Half extents of a size vector.
    #[inline]
    pub fn half(self) -> Self {
        self * 0.5
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
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
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Component-wise product, used to scale unit vertex layouts by a size.
impl Mul<Vec2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_divides_both_components() {
        assert_eq!(Vec2::new(10.0, 4.0).half(), Vec2::new(5.0, 2.0));
    }

    #[test]
    fn component_mul_scales_unit_layout() {
        let unit = Vec2::new(-0.5, 0.5);
        assert_eq!(unit * Vec2::new(40.0, 20.0), Vec2::new(-20.0, 10.0));
    }

    #[test]
    fn add_assign_translates() {
        let mut p = Vec2::new(1.0, 2.0);
        p += Vec2::new(-1.5, 0.0);
        assert_eq!(p, Vec2::new(-0.5, 2.0));
    }

    #[test]
    fn sub_is_componentwise() {
        assert_eq!(Vec2::new(3.0, 7.0) - Vec2::new(1.0, 9.0), Vec2::new(2.0, -2.0));
    }
}
