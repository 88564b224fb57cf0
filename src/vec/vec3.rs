use crate::*;
use core::fmt;

#[allow(non_camel_case_types)] pub type fx64v3 = Vec3<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32v3 = Vec3<Fixed32>;
#[allow(non_camel_case_types)] pub type det64v3 = Vec3<Det64>;

impl<T: DetReal> Vec3<T> {
    /// Unit vector along the forward (+x) axis
    #[inline]
    #[must_use]
    pub fn forward() -> Self {
        Self { x: T::one(), y: T::zero(), z: T::zero() }
    }

    /// Unit vector along the right (+y) axis
    #[inline]
    #[must_use]
    pub fn right() -> Self {
        Self { x: T::zero(), y: T::one(), z: T::zero() }
    }

    /// Unit vector along the up (+z) axis
    #[inline]
    #[must_use]
    pub fn up() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::one() }
    }

    /// Get the cross product of 2 vectors
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Extend the vector into a `Vec4`
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 { x: self.x, y: self.y, z: self.z, w }
    }

    /// Shrink the vector into a `Vec2`, dropping `z`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }
}

impl<T: DetReal> From<Vec4<T>> for Vec3<T> {
    fn from(vec: Vec4<T>) -> Self {
        vec.shrink()
    }
}

impl<T: DetReal> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_cross() {
        let x = fx64v3::forward();
        let y = fx64v3::right();
        let z = fx64v3::up();
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(x.dot(y), Fixed64::zero());
        assert_eq!(x.dot(x), Fixed64::one());
    }

    #[test]
    fn length_is_exact_for_pythagorean_triples() {
        let v = fx64v3::from_i32_array([3, 4, 0]);
        assert_eq!(v.len(), Fixed64::from_i64(5));
        assert_eq!(v.len_sq(), Fixed64::from_i64(25));
        assert_eq!(v.dist(fx64v3::zero()), Fixed64::from_i64(5));
    }

    #[test]
    fn safe_normal_degenerate_input() {
        let tiny = fx64v3::splat(Fixed64::from_raw(1));
        assert_eq!(tiny.safe_normal(Fixed64::KINDA_SMALL), fx64v3::zero());

        let fallback = fx64v3::up();
        assert_eq!(tiny.safe_normal_or(Fixed64::KINDA_SMALL, fallback), fallback);

        let v = fx64v3::from_i32_array([3, 4, 0]).safe_normal(Fixed64::KINDA_SMALL);
        assert!(v.is_normalized());
    }

    #[test]
    fn clamped_to_max_len() {
        let v = fx64v3::from_i32_array([6, 8, 0]);
        let clamped = v.clamped_to_max_len(Fixed64::from_i64(5));
        // the raw sqrt quantizes to 2^-(FRAC/2), and the reciprocal divide
        // floors once more
        assert!(clamped.len().is_close_to(Fixed64::from_i64(5), Fixed64::from_ratio(1, 256)));

        let short = fx64v3::from_i32_array([1, 0, 0]);
        assert_eq!(short.clamped_to_max_len(Fixed64::from_i64(5)), short);
    }

    #[test]
    fn component_ops() {
        let v = fx64v3::from_i32_array([-2, 5, 0]);
        assert_eq!(v.abs(), fx64v3::from_i32_array([2, 5, 0]));
        assert_eq!(v.sign(), fx64v3::from_i32_array([-1, 1, 0]));
        assert_eq!(v.min(fx64v3::zero()), fx64v3::from_i32_array([-2, 0, 0]));
        assert!(v.has_negative_component());
        assert!(!v.abs().has_negative_component());
    }
}
