use crate::*;

use core::{
    fmt,
    ops::*,
};

use serde::{Deserialize, Serialize};

/// Rotation as euler angles in degrees.
///
/// Pitch rotates around the right axis, yaw around the up axis, roll around
/// the forward axis; applied in yaw-pitch-roll (intrinsic) order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rotator<T: DetReal> {
    pub pitch: T,
    pub yaw: T,
    pub roll: T,
}

#[allow(non_camel_case_types)] pub type fx64rot = Rotator<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32rot = Rotator<Fixed32>;
#[allow(non_camel_case_types)] pub type det64rot = Rotator<Det64>;

impl<T: DetReal> Rotator<T> {
    /// Create a rotator from its angles
    #[inline(always)]
    #[must_use]
    pub fn new(pitch: T, yaw: T, roll: T) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Get the zero rotator (no rotation)
    #[inline(always)]
    #[must_use]
    pub fn zero_rotator() -> Self {
        Self { pitch: T::zero(), yaw: T::zero(), roll: T::zero() }
    }

    /// Create a rotator from whole-degree angles (exact)
    #[inline]
    #[must_use]
    pub fn from_i32_angles(pitch: i32, yaw: i32, roll: i32) -> Self {
        Self { pitch: T::from_i32(pitch), yaw: T::from_i32(yaw), roll: T::from_i32(roll) }
    }

    /// Create a rotator from `f32` angles (ingestion boundary, NOT deterministic)
    #[inline]
    #[must_use]
    pub fn from_f32_angles(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch: T::from_f32(pitch), yaw: T::from_f32(yaw), roll: T::from_f32(roll) }
    }

    /// Get the angles as `f64` (display/debug boundary)
    #[inline]
    #[must_use]
    pub fn to_f64_array(self) -> [f64; 3] {
        [self.pitch.to_f64(), self.yaw.to_f64(), self.roll.to_f64()]
    }

    /// Get the rotator with each axis reduced into `[0, 360)`
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            pitch: funcs::clamp_axis(self.pitch),
            yaw: funcs::clamp_axis(self.yaw),
            roll: funcs::clamp_axis(self.roll),
        }
    }

    /// Get the rotator with each axis reduced into `(-180, 180]`
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            pitch: funcs::normalize_axis(self.pitch),
            yaw: funcs::normalize_axis(self.yaw),
            roll: funcs::normalize_axis(self.roll),
        }
    }

    /// Check if the rotator represents no rotation, within `tolerance` per axis
    #[must_use]
    pub fn is_nearly_zero(self, tolerance: T) -> bool {
        let norm = self.normalized();
        norm.pitch.abs() <= tolerance && norm.yaw.abs() <= tolerance && norm.roll.abs() <= tolerance
    }

    /// Check if 2 rotators represent the same orientation, within `tolerance`
    /// per axis (angles are compared modulo 360°)
    #[must_use]
    pub fn equals(self, rhs: Self, tolerance: T) -> bool {
        (self - rhs).is_nearly_zero(tolerance)
    }

    /// Convert the rotator to a quaternion
    #[must_use]
    pub fn quaternion(self) -> Quat<T> {
        let half = T::DEG_TO_RAD / T::from_i32(2);
        let (sp, cp) = (self.pitch * half).sin_cos();
        let (sy, cy) = (self.yaw * half).sin_cos();
        let (sr, cr) = (self.roll * half).sin_cos();

        Quat {
            x: cr * sp * sy - sr * cp * cy,
            y: -cr * sp * cy - sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    /// Rotate a vector by the rotator
    #[inline]
    #[must_use]
    pub fn rotate_vector(self, vec: Vec3<T>) -> Vec3<T> {
        self.quaternion().rotate_vector(vec)
    }

    /// Rotate a vector by the inverse of the rotator
    #[inline]
    #[must_use]
    pub fn unrotate_vector(self, vec: Vec3<T>) -> Vec3<T> {
        self.quaternion().unrotate_vector(vec)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Add for Rotator<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { pitch: self.pitch + rhs.pitch, yaw: self.yaw + rhs.yaw, roll: self.roll + rhs.roll }
    }
}

impl<T: DetReal> AddAssign for Rotator<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: DetReal> Sub for Rotator<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { pitch: self.pitch - rhs.pitch, yaw: self.yaw - rhs.yaw, roll: self.roll - rhs.roll }
    }
}

impl<T: DetReal> SubAssign for Rotator<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: DetReal> Mul<T> for Rotator<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { pitch: self.pitch * rhs, yaw: self.yaw * rhs, roll: self.roll * rhs }
    }
}

impl<T: DetReal> Neg for Rotator<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { pitch: -self.pitch, yaw: -self.yaw, roll: -self.roll }
    }
}

impl<T: DetReal> fmt::Display for Rotator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("P={} Y={} R={}", self.pitch, self.yaw, self.roll))
    }
}

//------------------------------------------------------------------------------------------------------------------------------
