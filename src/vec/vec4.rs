use crate::*;
use core::fmt;

#[allow(non_camel_case_types)] pub type fx64v4 = Vec4<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32v4 = Vec4<Fixed32>;
#[allow(non_camel_case_types)] pub type det64v4 = Vec4<Det64>;

impl<T: DetReal> Vec4<T> {
    /// Shrink the vector into a `Vec3`, dropping `w`
    #[inline]
    #[must_use]
    pub fn shrink(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

impl<T: DetReal> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_shrink() {
        let v = fx64v3::from_i32_array([1, 2, 3]);
        let ext = v.extend(Fixed64::one());
        assert_eq!(ext, fx64v4::from_i32_array([1, 2, 3, 1]));
        assert_eq!(ext.shrink(), v);
    }

    #[test]
    fn dot() {
        let a = fx64v4::from_i32_array([1, 2, 3, 4]);
        let b = fx64v4::from_i32_array([5, 6, 7, 8]);
        assert_eq!(a.dot(b), Fixed64::from_i64(70));
    }
}
