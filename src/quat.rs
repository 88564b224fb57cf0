use crate::*;

use core::{
    fmt,
    ops::*,
};

use serde::{Deserialize, Serialize};

/// Rotation quaternion.
///
/// `a * b` composes right-to-left: applied to a vector it first rotates by
/// `b`, then by `a`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(C)]
pub struct Quat<T: DetReal> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

#[allow(non_camel_case_types)] pub type fx64quat = Quat<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32quat = Quat<Fixed32>;
#[allow(non_camel_case_types)] pub type det64quat = Quat<Det64>;

impl<T: DetReal> Quat<T> {
    /// Create a quaternion from its components
    #[inline(always)]
    #[must_use]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Get the identity quaternion (no rotation)
    #[inline(always)]
    #[must_use]
    pub fn identity() -> Self {
        Self { x: T::zero(), y: T::zero(), z: T::zero(), w: T::one() }
    }

    /// Create a quaternion from a normalized axis and an angle in radians
    #[must_use]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        debug_assert!(axis.is_normalized());
        let (sin, cos) = (angle / T::from_i32(2)).sin_cos();
        Self { x: axis.x * sin, y: axis.y * sin, z: axis.z * sin, w: cos }
    }

    /// Create a quaternion from the rotation part of a matrix.
    ///
    /// Positive trace takes the direct path; otherwise the largest diagonal
    /// entry picks the numerically stable formula, compared with strict `>` in
    /// a fixed order so ties resolve identically on every replica.
    #[must_use]
    pub fn from_matrix(mat: &Mat4<T>) -> Self {
        let two = T::from_i32(2);
        let quarter = T::from_ratio(1, 4);

        let trace = mat[(0, 0)] + mat[(1, 1)] + mat[(2, 2)];
        if trace > T::zero() {
            let s = (trace + T::one()).sqrt() * two;
            return Self {
                x: (mat[(1, 2)] - mat[(2, 1)]) / s,
                y: (mat[(2, 0)] - mat[(0, 2)]) / s,
                z: (mat[(0, 1)] - mat[(1, 0)]) / s,
                w: s * quarter,
            };
        }

        let mut i = 0;
        if mat[(1, 1)] > mat[(0, 0)] {
            i = 1;
        }
        if mat[(2, 2)] > mat[(i, i)] {
            i = 2;
        }
        match i {
            0 => {
                let s = (T::one() + mat[(0, 0)] - mat[(1, 1)] - mat[(2, 2)]).sqrt() * two;
                Self {
                    x: s * quarter,
                    y: (mat[(0, 1)] + mat[(1, 0)]) / s,
                    z: (mat[(0, 2)] + mat[(2, 0)]) / s,
                    w: (mat[(1, 2)] - mat[(2, 1)]) / s,
                }
            },
            1 => {
                let s = (T::one() + mat[(1, 1)] - mat[(0, 0)] - mat[(2, 2)]).sqrt() * two;
                Self {
                    x: (mat[(0, 1)] + mat[(1, 0)]) / s,
                    y: s * quarter,
                    z: (mat[(1, 2)] + mat[(2, 1)]) / s,
                    w: (mat[(2, 0)] - mat[(0, 2)]) / s,
                }
            },
            _ => {
                let s = (T::one() + mat[(2, 2)] - mat[(0, 0)] - mat[(1, 1)]).sqrt() * two;
                Self {
                    x: (mat[(0, 2)] + mat[(2, 0)]) / s,
                    y: (mat[(1, 2)] + mat[(2, 1)]) / s,
                    z: s * quarter,
                    w: (mat[(0, 1)] - mat[(1, 0)]) / s,
                }
            },
        }
    }

    /// Create a quaternion from `f32` components (ingestion boundary, NOT deterministic)
    #[inline]
    #[must_use]
    pub fn from_f32_array(arr: [f32; 4]) -> Self {
        let [x, y, z, w] = arr;
        Self { x: T::from_f32(x), y: T::from_f32(y), z: T::from_f32(z), w: T::from_f32(w) }
    }

    /// Convert the components to `f64` (display/debug boundary)
    #[inline]
    #[must_use]
    pub fn to_f64_array(self) -> [f64; 4] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64(), self.w.to_f64()]
    }

    /// Get the vector part of the quaternion
    #[inline]
    #[must_use]
    pub fn vector_part(self) -> Vec3<T> {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }

    /// Get the dot product of 2 quaternions
    #[inline]
    #[must_use]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Get the square magnitude of the quaternion
    #[inline]
    #[must_use]
    pub fn size_sq(self) -> T {
        self.dot(self)
    }

    /// Get the magnitude of the quaternion
    #[inline]
    #[must_use]
    pub fn size(self) -> T {
        self.size_sq().sqrt()
    }

    /// Check if the quaternion is normalized, within the normalization threshold
    #[inline]
    #[must_use]
    pub fn is_normalized(self) -> bool {
        (self.size_sq() - T::one()).abs() <= T::THRESH_QUAT_NORMALIZED
    }

    /// Get the normalized quaternion, or the identity when the square
    /// magnitude is below `tolerance`
    #[must_use]
    pub fn normalize(self, tolerance: T) -> Self {
        let size_sq = self.size_sq();
        if size_sq >= tolerance {
            self * size_sq.rsqrt()
        } else {
            Self::identity()
        }
    }

    /// Get the conjugate of the quaternion
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    /// Get the inverse of the quaternion, which expects it to be normalized
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        debug_assert!(self.is_normalized());
        self.conjugate()
    }

    /// Rotate a vector by the quaternion
    #[must_use]
    pub fn rotate_vector(self, vec: Vec3<T>) -> Vec3<T> {
        // v' = v + w*t + q x t, with t = 2 * (q x v)
        let q = self.vector_part();
        let t = q.cross(vec) * T::from_i32(2);
        vec + t * self.w + q.cross(t)
    }

    /// Rotate a vector by the inverse of the quaternion
    #[must_use]
    pub fn unrotate_vector(self, vec: Vec3<T>) -> Vec3<T> {
        let q = -self.vector_part();
        let t = q.cross(vec) * T::from_i32(2);
        vec + t * self.w + q.cross(t)
    }

    /// Linearly interpolate towards `rhs`, biased onto the shorter arc.
    ///
    /// The result is NOT normalized.
    #[must_use]
    pub fn fast_lerp(self, rhs: Self, alpha: T) -> Self {
        let bias = if self.dot(rhs) >= T::zero() { T::one() } else { -T::one() };
        rhs * alpha + self * (bias * (T::one() - alpha))
    }

    /// Linearly interpolate towards `rhs` along the shorter arc and normalize
    #[must_use]
    pub fn lerp(self, rhs: Self, alpha: T) -> Self {
        self.fast_lerp(rhs, alpha).normalize(T::SMALL)
    }

    /// Get the angle in radians between the orientations of 2 quaternions
    #[must_use]
    pub fn angular_distance(self, rhs: Self) -> T {
        let dot = self.dot(rhs);
        (dot * dot * T::from_i32(2) - T::one()).acos()
    }

    /// Check if 2 quaternions represent the same rotation, within `tolerance`
    /// per component (`q` and `-q` are the same rotation)
    #[must_use]
    pub fn equals(self, rhs: Self, tolerance: T) -> bool {
        let diff = self - rhs;
        let sum = self + rhs;
        (diff.x.abs() <= tolerance && diff.y.abs() <= tolerance &&
         diff.z.abs() <= tolerance && diff.w.abs() <= tolerance) ||
        (sum.x.abs() <= tolerance && sum.y.abs() <= tolerance &&
         sum.z.abs() <= tolerance && sum.w.abs() <= tolerance)
    }

    /// Convert the quaternion to euler angles in degrees.
    ///
    /// Near the gimbal poles (pitch ±90°) the direct formulas blow up, so past
    /// the singularity threshold the pitch is pinned and the roll is derived
    /// from the yaw instead.
    #[must_use]
    pub fn rotator(self) -> Rotator<T> {
        let two = T::from_i32(2);
        let singularity = self.z * self.x - self.w * self.y;
        let yaw_y = (self.w * self.z + self.x * self.y) * two;
        let yaw_x = T::one() - (self.y * self.y + self.z * self.z) * two;
        let threshold = T::from_ratio(4_999_995, 10_000_000);

        let yaw = T::atan2(yaw_y, yaw_x) * T::RAD_TO_DEG;
        if singularity < -threshold {
            Rotator {
                pitch: T::from_i32(-90),
                yaw,
                roll: funcs::normalize_axis(-yaw - T::atan2(self.x, self.w) * two * T::RAD_TO_DEG),
            }
        } else if singularity > threshold {
            Rotator {
                pitch: T::from_i32(90),
                yaw,
                roll: funcs::normalize_axis(yaw - T::atan2(self.x, self.w) * two * T::RAD_TO_DEG),
            }
        } else {
            Rotator {
                pitch: (singularity * two).asin() * T::RAD_TO_DEG,
                yaw,
                roll: T::atan2(
                    -(self.w * self.x + self.y * self.z) * two,
                    T::one() - (self.x * self.x + self.y * self.y) * two,
                ) * T::RAD_TO_DEG,
            }
        }
    }
}

impl<T: DetReal> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl<T: DetReal> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Component-wise operators, used by the blend and accumulate paths. None of
// these keep the quaternion normalized.

impl<T: DetReal> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z, w: self.w + rhs.w }
    }
}

impl<T: DetReal> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z, w: self.w - rhs.w }
    }
}

impl<T: DetReal> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs, z: self.z * rhs, w: self.w * rhs }
    }
}

impl<T: DetReal> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

impl<T: DetReal> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("({}, {}, {}, {})", self.x, self.y, self.z, self.w))
    }
}

//------------------------------------------------------------------------------------------------------------------------------
