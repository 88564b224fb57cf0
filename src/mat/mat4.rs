use crate::*;

use core::ops::*;

impl<T: DetReal> Mat4<T> {
    /// Get the identity matrix
    #[must_use]
    pub fn identity() -> Self {
        let o = T::one();
        let z = T::zero();
        Self::from_array([
            o, z, z, z,
            z, o, z, z,
            z, z, o, z,
            z, z, z, o,
        ])
    }

    /// Create a matrix from its rows
    #[inline]
    #[must_use]
    pub fn from_rows(r0: Vec4<T>, r1: Vec4<T>, r2: Vec4<T>, r3: Vec4<T>) -> Self {
        Self::from_array([
            r0.x, r0.y, r0.z, r0.w,
            r1.x, r1.y, r1.z, r1.w,
            r2.x, r2.y, r2.z, r2.w,
            r3.x, r3.y, r3.z, r3.w,
        ])
    }

    /// Create a rotation matrix from a normalized quaternion
    #[must_use]
    pub fn from_quat(quat: Quat<T>) -> Self {
        let two = T::from_i32(2);
        let (x, y, z, w) = (quat.x, quat.y, quat.z, quat.w);

        let xx = x * x * two;
        let yy = y * y * two;
        let zz = z * z * two;
        let xy = x * y * two;
        let xz = x * z * two;
        let yz = y * z * two;
        let wx = w * x * two;
        let wy = w * y * two;
        let wz = w * z * two;

        let o = T::one();
        let n = T::zero();
        Self::from_array([
            o - (yy + zz), xy + wz,       xz - wy,       n,
            xy - wz,       o - (xx + zz), yz + wx,       n,
            xz + wy,       yz - wx,       o - (xx + yy), n,
            n,             n,             n,             o,
        ])
    }

    /// Create a rotation matrix from euler angles
    #[inline]
    #[must_use]
    pub fn from_rotator(rot: Rotator<T>) -> Self {
        Self::from_quat(rot.quaternion())
    }

    /// Create an affine matrix applying scale, then rotation, then translation
    #[must_use]
    pub fn from_scale_rotation_translation(scale: Vec3<T>, rotation: Quat<T>, translation: Vec3<T>) -> Self {
        let mut res = Self::from_quat(rotation);
        for i in 0..3 {
            let axis = res.scaled_axis(i) * scale[i];
            res.set_axis(i, axis);
        }
        res.set_origin(translation);
        res
    }

    /// Create a translation matrix
    #[must_use]
    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut res = Self::identity();
        res.set_origin(translation);
        res
    }

    /// Get a row of the matrix
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self[(index, 0)], self[(index, 1)], self[(index, 2)], self[(index, 3)])
    }

    /// Set a row of the matrix
    #[inline]
    pub fn set_row(&mut self, index: usize, row: Vec4<T>) {
        debug_assert!(index < 4);
        self[(index, 0)] = row.x;
        self[(index, 1)] = row.y;
        self[(index, 2)] = row.z;
        self[(index, 3)] = row.w;
    }

    /// Get a column of the matrix
    #[inline]
    #[must_use]
    pub fn column(&self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self[(0, index)], self[(1, index)], self[(2, index)], self[(3, index)])
    }

    /// Get a scaled basis axis (the first 3 components of rows 0 to 2)
    #[inline]
    #[must_use]
    pub fn scaled_axis(&self, index: usize) -> Vec3<T> {
        debug_assert!(index < 3);
        Vec3::new(self[(index, 0)], self[(index, 1)], self[(index, 2)])
    }

    /// Set a basis axis, leaving the rest of the row alone
    #[inline]
    pub fn set_axis(&mut self, index: usize, axis: Vec3<T>) {
        debug_assert!(index < 3);
        self[(index, 0)] = axis.x;
        self[(index, 1)] = axis.y;
        self[(index, 2)] = axis.z;
    }

    /// Get the translation part of the matrix
    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec3<T> {
        Vec3::new(self[(3, 0)], self[(3, 1)], self[(3, 2)])
    }

    /// Set the translation part of the matrix
    #[inline]
    pub fn set_origin(&mut self, origin: Vec3<T>) {
        self[(3, 0)] = origin.x;
        self[(3, 1)] = origin.y;
        self[(3, 2)] = origin.z;
    }

    /// Get the transpose of the matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut res = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                res[(c, r)] = self[(r, c)];
            }
        }
        res
    }

    /// Determinant of the 3x3 matrix left after removing `row` and `col`
    fn minor(&self, row: usize, col: usize) -> T {
        let mut sub = [T::zero(); 9];
        let mut idx = 0;
        for r in 0..4 {
            if r == row {
                continue;
            }
            for c in 0..4 {
                if c == col {
                    continue;
                }
                sub[idx] = self.vals[r * 4 + c];
                idx += 1;
            }
        }
        sub[0] * (sub[4] * sub[8] - sub[5] * sub[7]) -
        sub[1] * (sub[3] * sub[8] - sub[5] * sub[6]) +
        sub[2] * (sub[3] * sub[7] - sub[4] * sub[6])
    }

    /// Get the determinant, by cofactor expansion along the first column
    #[must_use]
    pub fn determinant(&self) -> T {
        self.vals[0] * self.minor(0, 0) -
        self.vals[4] * self.minor(1, 0) +
        self.vals[8] * self.minor(2, 0) -
        self.vals[12] * self.minor(3, 0)
    }

    /// Get the adjugate of the matrix (transposed cofactor matrix)
    #[must_use]
    pub fn adjugate(&self) -> Self {
        let mut res = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                let cof = self.minor(r, c);
                res[(c, r)] = if (r + c) % 2 == 1 { -cof } else { cof };
            }
        }
        res
    }

    /// Get the inverse of the matrix, which expects it to be invertible
    #[must_use]
    pub fn inverse_fast(&self) -> Self {
        debug_assert!(
            !(self.scaled_axis(0).is_nearly_zero(T::SMALL) &&
              self.scaled_axis(1).is_nearly_zero(T::SMALL) &&
              self.scaled_axis(2).is_nearly_zero(T::SMALL))
        );
        self.adjugate() / self.determinant()
    }

    /// Get the inverse of the matrix, or the identity when the matrix is
    /// singular or all basis axes are near zero
    #[must_use]
    pub fn inverse(&self) -> Self {
        if self.scaled_axis(0).is_nearly_zero(T::SMALL) &&
           self.scaled_axis(1).is_nearly_zero(T::SMALL) &&
           self.scaled_axis(2).is_nearly_zero(T::SMALL)
        {
            return Self::identity();
        }
        let det = self.determinant();
        if det == T::zero() {
            Self::identity()
        } else {
            self.adjugate() / det
        }
    }

    /// Transform a `Vec4` by the matrix
    #[must_use]
    pub fn transform_vector4(&self, vec: Vec4<T>) -> Vec4<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z + self.row(3) * vec.w
    }

    /// Transform a position by the matrix (w assumed 1)
    #[must_use]
    pub fn transform_position(&self, pos: Vec3<T>) -> Vec3<T> {
        self.scaled_axis(0) * pos.x + self.scaled_axis(1) * pos.y + self.scaled_axis(2) * pos.z + self.origin()
    }

    /// Transform a direction by the matrix, ignoring translation (w assumed 0)
    #[must_use]
    pub fn transform_vector(&self, vec: Vec3<T>) -> Vec3<T> {
        self.scaled_axis(0) * vec.x + self.scaled_axis(1) * vec.y + self.scaled_axis(2) * vec.z
    }

    /// Normalize the basis axes in place; rows with a square length below
    /// `tolerance` are left untouched
    pub fn remove_scaling(&mut self, tolerance: T) {
        for i in 0..3 {
            let len_sq = self.scaled_axis(i).len_sq();
            if len_sq > tolerance {
                let axis = self.scaled_axis(i) * len_sq.rsqrt();
                self.set_axis(i, axis);
            }
        }
    }

    /// Normalize the basis axes in place and return the scale that was
    /// removed; rows below `tolerance` report a scale of 0
    pub fn extract_scaling(&mut self, tolerance: T) -> Vec3<T> {
        let mut scale = Vec3::zero();
        for i in 0..3 {
            let len_sq = self.scaled_axis(i).len_sq();
            if len_sq > tolerance {
                let len = len_sq.sqrt();
                scale[i] = len;
                let axis = self.scaled_axis(i) * len.rcp();
                self.set_axis(i, axis);
            }
        }
        scale
    }

    /// Convert the rotation part of the matrix to a quaternion; the basis axes
    /// are expected to be normalized
    #[inline]
    #[must_use]
    pub fn to_quat(&self) -> Quat<T> {
        Quat::from_matrix(self)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                res[(r, c)] = self[(r, 0)] * rhs[(0, c)] +
                              self[(r, 1)] * rhs[(1, c)] +
                              self[(r, 2)] * rhs[(2, c)] +
                              self[(r, 3)] * rhs[(3, c)];
            }
        }
        res
    }
}

impl<T: DetReal> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

//------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn mat_close<T: DetReal>(a: Mat4<T>, b: Mat4<T>, tolerance: T) {
        for i in 0..16 {
            assert!(a[i].is_close_to(b[i], tolerance), "element {i}: {} != {}", a[i], b[i]);
        }
    }

    fn scale_mat(x: i32, y: i32, z: i32) -> fx64mat4 {
        let mut m = fx64mat4::identity();
        m[(0, 0)] = Fixed64::from_i32(x);
        m[(1, 1)] = Fixed64::from_i32(y);
        m[(2, 2)] = Fixed64::from_i32(z);
        m
    }

    #[test]
    fn identity_transforms() {
        let m = fx64mat4::identity();
        let v = fx64v3::from_i32_array([4, -1, 9]);
        assert_eq!(m.transform_position(v), v);
        assert_eq!(m.transform_vector(v), v);
        assert_eq!(m.determinant(), Fixed64::one());
        assert_eq!(m * m, m);
    }

    #[test]
    fn determinant_of_diagonal() {
        assert_eq!(scale_mat(2, 3, 4).determinant(), Fixed64::from_i64(24));
        assert_eq!(scale_mat(2, 0, 4).determinant(), Fixed64::zero());
        assert_eq!((-fx64mat4::identity()).determinant(), Fixed64::one());
    }

    #[test]
    fn inverse_of_affine() {
        let m = scale_mat(2, 4, 8);
        let inv = m.inverse_fast();
        assert_eq!(m * inv, fx64mat4::identity());

        let mut m = fx64mat4::from_translation(fx64v3::from_i32_array([5, -2, 3]));
        m[(0, 0)] = Fixed64::from_i32(2);
        let roundtrip = m * m.inverse_fast();
        mat_close(roundtrip, fx64mat4::identity(), Fixed64::KINDA_SMALL);
    }

    #[test]
    fn singular_inverse_is_identity() {
        assert_eq!(scale_mat(1, 0, 1).inverse(), fx64mat4::identity());
        assert_eq!(fx64mat4::zero().inverse(), fx64mat4::identity());
    }

    #[test]
    fn translation_affects_positions_only() {
        let m = fx64mat4::from_translation(fx64v3::from_i32_array([1, 2, 3]));
        let v = fx64v3::from_i32_array([10, 0, 0]);
        assert_eq!(m.transform_position(v), fx64v3::from_i32_array([11, 2, 3]));
        assert_eq!(m.transform_vector(v), v);
    }

    #[test]
    fn quat_matrix_roundtrip() {
        let q = det64quat::from_axis_angle(det64v3::up(), Det64::from_ratio(1, 2));
        let m = det64mat4::from_quat(q);
        let v = det64v3::from_i32_array([1, 2, 3]);
        assert!(m.transform_position(v).is_close_to(q.rotate_vector(v), Det64::from_ratio(1, 1000)));

        let back = m.to_quat();
        assert!(back.equals(q, Det64::KINDA_SMALL));
    }

    #[test]
    fn trace_branches_of_to_quat() {
        // 180° rotations have trace -1 and exercise the diagonal branches
        for axis in [det64v3::forward(), det64v3::right(), det64v3::up()] {
            let q = det64quat::from_axis_angle(axis, Det64::PI);
            let back = det64mat4::from_quat(q).to_quat();
            assert!(back.equals(q, Det64::KINDA_SMALL), "axis {axis}");
        }
    }

    #[test]
    fn remove_scaling_normalizes_axes() {
        let mut m = det64mat4::from_scale_rotation_translation(
            det64v3::from_i32_array([2, 3, 4]),
            det64quat::from_axis_angle(det64v3::up(), Det64::from_ratio(1, 4)),
            det64v3::from_i32_array([7, 8, 9]),
        );
        let scale = m.extract_scaling(Det64::SMALL);
        assert!(scale.is_close_to(det64v3::from_i32_array([2, 3, 4]), Det64::KINDA_SMALL));
        for i in 0..3 {
            assert!(m.scaled_axis(i).is_normalized());
        }
        assert_eq!(m.origin(), det64v3::from_i32_array([7, 8, 9]));

        // rows below the tolerance stay untouched
        let mut degenerate = det64mat4::zero();
        degenerate.remove_scaling(Det64::SMALL);
        assert_eq!(degenerate, det64mat4::zero());
    }
}
