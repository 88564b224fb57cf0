use crate::*;

use core::fmt;

use serde::{Deserialize, Serialize};

/// Plane in 3D space, stored as `normal . p == w`.
///
/// Layout-compatible with [`Vec4`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Plane<T: DetReal> {
    pub normal: Vec3<T>,
    pub w: T,
}

#[allow(non_camel_case_types)] pub type fx64plane = Plane<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32plane = Plane<Fixed32>;
#[allow(non_camel_case_types)] pub type det64plane = Plane<Det64>;

impl<T: DetReal> Plane<T> {
    /// Create a plane from a normal and the distance along it
    #[inline(always)]
    #[must_use]
    pub fn new(normal: Vec3<T>, w: T) -> Self {
        Self { normal, w }
    }

    /// Create a plane through `point` with the given normal
    #[inline]
    #[must_use]
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        Self { normal, w: point.dot(normal) }
    }

    /// Reinterpret the plane as a `Vec4`
    #[inline]
    #[must_use]
    pub fn to_vec4(self) -> Vec4<T> {
        self.normal.extend(self.w)
    }

    /// Get the signed distance from a point to the plane
    #[inline]
    #[must_use]
    pub fn plane_dot(self, point: Vec3<T>) -> T {
        self.normal.dot(point) - self.w
    }

    /// Check if a point lies on the positive side of the plane
    #[inline]
    #[must_use]
    pub fn is_above(self, point: Vec3<T>) -> bool {
        self.plane_dot(point) > T::zero()
    }

    /// Get the plane facing the opposite way
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        Self { normal: -self.normal, w: -self.w }
    }

    /// Transform the plane by a matrix with an orthonormal rotation part
    #[must_use]
    pub fn transform_by(self, mat: &Mat4<T>) -> Self {
        let point = mat.transform_position(self.normal * self.w);
        let normal = mat.transform_vector(self.normal).safe_normal(T::SMALL);
        Self::from_point_normal(point, normal)
    }
}

impl<T: DetReal> From<Vec4<T>> for Plane<T> {
    fn from(vec: Vec4<T>) -> Self {
        Self { normal: vec.shrink(), w: vec.w }
    }
}

impl<T: DetReal> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("(n: {}, w: {})", self.normal, self.w))
    }
}

//------------------------------------------------------------------------------------------------------------------------------
