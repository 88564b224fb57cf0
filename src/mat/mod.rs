use crate::*;

use core::{
    mem,
    ops::*,
};

use serde::{Deserialize, Serialize};

mod mat4;
pub use mat4::*;

/// 4x4 matrix (row-major order), acting on row vectors from the left:
/// `v' = v * M`, translation in the last row
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(C)]
pub struct Mat4<T: DetReal> {
    vals: [T; 16],
}

#[allow(non_camel_case_types)] pub type fx64mat4 = Mat4<Fixed64>;
#[allow(non_camel_case_types)] pub type fx32mat4 = Mat4<Fixed32>;
#[allow(non_camel_case_types)] pub type det64mat4 = Mat4<Det64>;

impl<T: DetReal> Mat4<T> {
    /// Create a matrix from an array of 16 scalars, in row-major order
    #[inline(always)]
    #[must_use]
    pub fn from_array(vals: [T; 16]) -> Self {
        Self { vals }
    }

    /// Get the content of the matrix as an array
    #[inline(always)]
    #[must_use]
    pub fn to_array(self) -> [T; 16] {
        self.vals
    }

    /// Interpret a reference to a matrix as a reference to an array
    #[inline(always)]
    #[must_use]
    pub fn as_array(&self) -> &[T; 16] {
        unsafe { mem::transmute(self) }
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Index<usize> for Mat4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 16);
        &self.vals[index]
    }
}

impl<T: DetReal> IndexMut<usize> for Mat4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 16);
        &mut self.vals[index]
    }
}

impl<T: DetReal> Index<(usize, usize)> for Mat4<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        debug_assert!(index.0 < 4);
        debug_assert!(index.1 < 4);
        &self.vals[index.0 * 4 + index.1]
    }
}

impl<T: DetReal> IndexMut<(usize, usize)> for Mat4<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        debug_assert!(index.0 < 4);
        debug_assert!(index.1 < 4);
        &mut self.vals[index.0 * 4 + index.1]
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Neg for Mat4<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..16 {
            res[i] = -self[i];
        }
        res
    }
}

impl<T: DetReal> Add for Mat4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..16 {
            res[i] = self[i] + rhs[i];
        }
        res
    }
}

impl<T: DetReal> Sub for Mat4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..16 {
            res[i] = self[i] - rhs[i];
        }
        res
    }
}

impl<T: DetReal> Mul<T> for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..16 {
            res[i] = self[i] * rhs;
        }
        res
    }
}

impl<T: DetReal> Div<T> for Mat4<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        let mut res = Self::zero();
        for i in 0..16 {
            res[i] = self[i] / rhs;
        }
        res
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<T: DetReal> Zero for Mat4<T> {
    fn zero() -> Self {
        Self { vals: [T::zero(); 16] }
    }
}

impl<T: DetReal> Default for Mat4<T> {
    fn default() -> Self {
        Self::identity()
    }
}
