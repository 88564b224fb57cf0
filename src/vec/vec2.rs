use crate::*;
use core::fmt;

#[allow(non_camel_case_types)] pub type fx64v2 = Vec2<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32v2 = Vec2<Fixed32>;
#[allow(non_camel_case_types)] pub type det64v2 = Vec2<Det64>;

impl<T: DetReal> Vec2<T> {
    /// Get the 2D cross product (z-component of the 3D cross product)
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Get the vector rotated 90° counter-clockwise
    #[inline]
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    /// Extend the vector into a `Vec3`
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z }
    }
}

impl<T: DetReal> From<Vec3<T>> for Vec2<T> {
    fn from(vec: Vec3<T>) -> Self {
        vec.shrink()
    }
}

impl<T: DetReal> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_and_perpendicular() {
        let a = fx64v2::from_i32_array([1, 0]);
        let b = fx64v2::from_i32_array([0, 1]);
        assert_eq!(a.cross(b), Fixed64::one());
        assert_eq!(b.cross(a), -Fixed64::one());
        assert_eq!(a.perpendicular(), b);
    }

    #[test]
    fn extend() {
        let v = fx64v2::new(Fixed64::from_i64(2), Fixed64::from_i64(3));
        assert_eq!(v.extend(Fixed64::from_i64(4)),
                   Vec3::from_i32_array([2, 3, 4]));
    }
}
