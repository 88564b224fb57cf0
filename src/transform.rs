use crate::*;

use core::{
    fmt,
    ops::*,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Affine transform as separate rotation, translation, and scale.
///
/// Applied to a point as scale first, then rotation, then translation.
/// `a * b` composes left-to-right: applying the result is the same as
/// applying `a`, then `b`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transform<T: DetReal> {
    pub rotation: Quat<T>,
    pub translation: Vec3<T>,
    pub scale3d: Vec3<T>,
}

#[allow(non_camel_case_types)] pub type fx64transform = Transform<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32transform = Transform<Fixed32>;
#[allow(non_camel_case_types)] pub type det64transform = Transform<Det64>;

/// Failed parse of the `"Tx,Ty,Tz|Pitch,Yaw,Roll|Sx,Sy,Sz"` text form
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum TransformParseError {
    #[error("expected 3 '|'-separated parts, found {0}")]
    PartCount(usize),
    #[error("expected 3 comma-separated numbers in `{0}`")]
    ComponentCount(String),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
}

impl<T: DetReal> Transform<T> {
    /// Create a transform from its parts
    #[inline(always)]
    #[must_use]
    pub fn new(rotation: Quat<T>, translation: Vec3<T>, scale3d: Vec3<T>) -> Self {
        Self { rotation, translation, scale3d }
    }

    /// Get the identity transform
    #[inline(always)]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            rotation: Quat::identity(),
            translation: Vec3::zero(),
            scale3d: Vec3::one(),
        }
    }

    /// Create a transform that only translates
    #[inline]
    #[must_use]
    pub fn from_translation(translation: Vec3<T>) -> Self {
        Self { translation, ..Self::identity() }
    }

    /// Create a transform that only rotates
    #[inline]
    #[must_use]
    pub fn from_rotation(rotation: Quat<T>) -> Self {
        Self { rotation, ..Self::identity() }
    }

    /// Extract a transform from an affine matrix.
    ///
    /// A negative determinant means an odd number of mirrored axes; the
    /// mirror is folded into the x scale so the rotation stays proper.
    #[must_use]
    pub fn from_matrix(mat: &Mat4<T>) -> Self {
        let mut mat = *mat;
        let mut scale = mat.extract_scaling(T::SMALL);
        if mat.determinant() < T::zero() {
            scale.x = -scale.x;
            let axis = -mat.scaled_axis(0);
            mat.set_axis(0, axis);
        }
        Self {
            rotation: mat.to_quat().normalize(T::SMALL),
            translation: mat.origin(),
            scale3d: scale,
        }
    }

    /// Convert the transform to its matrix form
    #[inline]
    #[must_use]
    pub fn to_matrix(&self) -> Mat4<T> {
        Mat4::from_scale_rotation_translation(self.scale3d, self.rotation, self.translation)
    }

    /// Transform a position: scale, rotate, then translate
    #[inline]
    #[must_use]
    pub fn transform_position(&self, pos: Vec3<T>) -> Vec3<T> {
        self.rotation.rotate_vector(self.scale3d * pos) + self.translation
    }

    /// Transform a position, ignoring scale
    #[inline]
    #[must_use]
    pub fn transform_position_no_scale(&self, pos: Vec3<T>) -> Vec3<T> {
        self.rotation.rotate_vector(pos) + self.translation
    }

    /// Transform a direction: scale and rotate, no translation
    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vec: Vec3<T>) -> Vec3<T> {
        self.rotation.rotate_vector(self.scale3d * vec)
    }

    /// Transform a direction, ignoring scale
    #[inline]
    #[must_use]
    pub fn transform_vector_no_scale(&self, vec: Vec3<T>) -> Vec3<T> {
        self.rotation.rotate_vector(vec)
    }

    /// Map a world-space position back into local space
    #[inline]
    #[must_use]
    pub fn inverse_transform_position(&self, pos: Vec3<T>) -> Vec3<T> {
        self.rotation.unrotate_vector(pos - self.translation) * Self::safe_scale_reciprocal(self.scale3d, T::SMALL)
    }

    /// Map a world-space position back into local space, ignoring scale
    #[inline]
    #[must_use]
    pub fn inverse_transform_position_no_scale(&self, pos: Vec3<T>) -> Vec3<T> {
        self.rotation.unrotate_vector(pos - self.translation)
    }

    /// Map a world-space direction back into local space
    #[inline]
    #[must_use]
    pub fn inverse_transform_vector(&self, vec: Vec3<T>) -> Vec3<T> {
        self.rotation.unrotate_vector(vec) * Self::safe_scale_reciprocal(self.scale3d, T::SMALL)
    }

    /// Per-component reciprocal of a scale; components within `tolerance` of
    /// zero map to 0 instead of dividing
    #[must_use]
    pub fn safe_scale_reciprocal(scale: Vec3<T>, tolerance: T) -> Vec3<T> {
        let mut recip = Vec3::zero();
        for i in 0..3 {
            if scale[i].abs() > tolerance {
                recip[i] = scale[i].rcp();
            }
        }
        recip
    }

    /// Get the inverse of the transform.
    ///
    /// Exact for uniform scale; with non-uniform scale the scale and rotation
    /// do not commute and this stays the conventional component-wise inverse.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        let scale3d = Self::safe_scale_reciprocal(self.scale3d, T::SMALL);
        let translation = rotation.rotate_vector(scale3d * -self.translation);
        Self { rotation, translation, scale3d }
    }

    /// Compose through the matrix form; handles mirrored (negative) scale
    fn multiply_using_matrix(a: &Self, b: &Self) -> Self {
        let mut mat = a.to_matrix() * b.to_matrix();
        let desired_scale = a.scale3d * b.scale3d;

        mat.remove_scaling(T::SMALL);
        for i in 0..3 {
            if desired_scale[i] < T::zero() {
                let axis = -mat.scaled_axis(i);
                mat.set_axis(i, axis);
            }
        }
        Self {
            rotation: mat.to_quat().normalize(T::SMALL),
            translation: mat.origin(),
            scale3d: desired_scale,
        }
    }

    /// Set this transform to the blend of `a` and `b`.
    ///
    /// Weights within 1e-5 of 0 or 1 copy the endpoint outright; in between,
    /// translation and scale interpolate linearly and the rotation goes
    /// through the shortest-arc lerp plus a renormalize.
    pub fn blend(&mut self, a: &Self, b: &Self, alpha: T) {
        debug_assert!(a.rotation.is_normalized());
        debug_assert!(b.rotation.is_normalized());

        let thresh = T::from_ratio(1, 100_000);
        if alpha <= thresh {
            *self = *a;
        } else if alpha >= T::one() - thresh {
            *self = *b;
        } else {
            self.rotation = a.rotation.fast_lerp(b.rotation, alpha).normalize(T::SMALL);
            self.translation = a.translation.lerp(b.translation, alpha);
            self.scale3d = a.scale3d.lerp(b.scale3d, alpha);
        }
    }

    /// Blend this transform towards `other`
    pub fn blend_with(&mut self, other: &Self, alpha: T) {
        let base = *self;
        self.blend(&base, other, alpha);
    }

    /// Compose a weighted delta onto this transform, flipping the delta
    /// rotation onto the shorter arc first.
    ///
    /// The accumulated rotation is NOT normalized; callers normalize once
    /// after the last accumulation.
    pub fn accumulate_with_shortest_rotation(&mut self, delta: &Self, weight: T) {
        let atom_rotation = delta.rotation * weight;
        if atom_rotation.dot(self.rotation) < T::zero() {
            self.rotation = self.rotation - atom_rotation;
        } else {
            self.rotation = self.rotation + atom_rotation;
        }
        self.translation += delta.translation * weight;
        self.scale3d += delta.scale3d * weight;
    }

    /// Compose a full-weight delta onto this transform
    pub fn accumulate(&mut self, delta: &Self) {
        debug_assert!(delta.rotation.is_normalized());
        if delta.rotation.w * delta.rotation.w < T::one() {
            self.rotation = delta.rotation * self.rotation;
        }
        self.translation += delta.translation;
        self.scale3d *= delta.scale3d;
    }

    /// Check if 2 transforms are equal within `tolerance` per component
    /// (rotations compare as orientations)
    #[must_use]
    pub fn equals(&self, rhs: &Self, tolerance: T) -> bool {
        self.rotation.equals(rhs.rotation, tolerance) &&
        self.translation.is_close_to(rhs.translation, tolerance) &&
        self.scale3d.is_close_to(rhs.scale3d, tolerance)
    }
}

impl<T: DetReal> Default for Transform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Mul for Transform<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.scale3d.has_negative_component() || rhs.scale3d.has_negative_component() {
            return Self::multiply_using_matrix(&self, &rhs);
        }
        Self {
            rotation: rhs.rotation * self.rotation,
            translation: rhs.rotation.rotate_vector(rhs.scale3d * self.translation) + rhs.translation,
            scale3d: self.scale3d * rhs.scale3d,
        }
    }
}

impl<T: DetReal> MulAssign for Transform<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> fmt::Display for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.translation;
        let r = self.rotation.rotator();
        let s = self.scale3d;
        f.write_fmt(format_args!(
            "{},{},{}|{},{},{}|{},{},{}",
            t.x, t.y, t.z, r.pitch, r.yaw, r.roll, s.x, s.y, s.z,
        ))
    }
}

fn parse_triple(part: &str) -> Result<[f64; 3], TransformParseError> {
    let mut pieces = part.split(',');
    let mut vals = [0.0f64; 3];
    for val in &mut vals {
        let piece = pieces
            .next()
            .ok_or_else(|| TransformParseError::ComponentCount(part.to_string()))?
            .trim();
        *val = piece
            .parse()
            .map_err(|_| TransformParseError::InvalidNumber(piece.to_string()))?;
    }
    if pieces.next().is_some() {
        return Err(TransformParseError::ComponentCount(part.to_string()));
    }
    Ok(vals)
}

impl<T: DetReal> FromStr for Transform<T> {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('|');
        let (translation, rotator, scale) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(t), Some(r), Some(sc), None) => {
                (parse_triple(t)?, parse_triple(r)?, parse_triple(sc)?)
            },
            (a, b, c, d) => {
                let found = [a, b, c, d].iter().filter(|part| part.is_some()).count();
                return Err(TransformParseError::PartCount(found));
            },
        };

        let rotator = Rotator::new(
            T::from_f64(rotator[0]),
            T::from_f64(rotator[1]),
            T::from_f64(rotator[2]),
        );
        Ok(Self {
            rotation: rotator.quaternion(),
            translation: Vec3::from_f64_array(translation),
            scale3d: Vec3::from_f64_array(scale),
        })
    }
}

//------------------------------------------------------------------------------------------------------------------------------
