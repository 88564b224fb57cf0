use crate::*;

use core::{
    mem,
    ops::*,
};

use serde::{Deserialize, Serialize};

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;

mod vec4;
pub use vec4::*;

macro_rules! vec_pre_multiplication {
    {$name:ident, $($ty:ty),*} => {
        $(
            impl Mul<$name<$ty>> for $ty {
                type Output = $name<$ty>;

                fn mul(self, rhs: $name<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

macro_rules! generic_vec {
    {$docs:meta; $name:ident, $n:literal, $($comp:ident),+} => {
        #[$docs]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
        #[repr(C)]
        pub struct $name<T: DetReal> {
            $(pub $comp: T),+
        }

        impl<T: DetReal> $name<T> {
            /// Create a vector from its components
            #[inline(always)]
            #[must_use]
            pub fn new($($comp: T),+) -> Self {
                Self { $($comp),+ }
            }

            /// Create a vector with all components set to `val`
            #[inline(always)]
            #[must_use]
            pub fn splat(val: T) -> Self {
                Self { $($comp: val),+ }
            }

            /// Create a vector from an array
            #[inline(always)]
            #[must_use]
            pub fn from_array(arr: [T; $n]) -> Self {
                let [$($comp),+] = arr;
                Self { $($comp),+ }
            }

            /// Get the content of the vector as an array
            #[inline(always)]
            #[must_use]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$comp),+]
            }

            /// Interpret a reference to a vector as a reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_array(&self) -> &[T; $n] {
                unsafe { mem::transmute(self) }
            }

            /// Interpret a mutable reference to a vector as a mutable reference to an array
            #[inline(always)]
            #[must_use]
            pub fn as_mut_array(&mut self) -> &mut [T; $n] {
                unsafe { mem::transmute(self) }
            }

            /// Create a vector from whole-number components (exact)
            #[inline(always)]
            #[must_use]
            pub fn from_i32_array(arr: [i32; $n]) -> Self {
                let [$($comp),+] = arr;
                Self { $($comp: T::from_i32($comp)),+ }
            }

            /// Create a vector from `f32` components (ingestion boundary, NOT deterministic)
            #[inline(always)]
            #[must_use]
            pub fn from_f32_array(arr: [f32; $n]) -> Self {
                let [$($comp),+] = arr;
                Self { $($comp: T::from_f32($comp)),+ }
            }

            /// Create a vector from `f64` components (ingestion boundary, NOT deterministic)
            #[inline(always)]
            #[must_use]
            pub fn from_f64_array(arr: [f64; $n]) -> Self {
                let [$($comp),+] = arr;
                Self { $($comp: T::from_f64($comp)),+ }
            }

            /// Convert the components to `f64` (display/debug boundary)
            #[inline(always)]
            #[must_use]
            pub fn to_f64_array(self) -> [f64; $n] {
                [$(self.$comp.to_f64()),+]
            }

            /// Get the dot product of 2 vectors
            #[inline]
            #[must_use]
            pub fn dot(self, rhs: Self) -> T {
                utils::strip_plus!($(+ self.$comp * rhs.$comp)+)
            }

            /// Get the square length of the vector
            #[inline]
            #[must_use]
            pub fn len_sq(self) -> T {
                self.dot(self)
            }

            /// Get the length of the vector
            #[inline]
            #[must_use]
            pub fn len(self) -> T {
                self.len_sq().sqrt()
            }

            /// Get the square distance between 2 points
            #[inline]
            #[must_use]
            pub fn dist_sq(self, rhs: Self) -> T {
                (rhs - self).len_sq()
            }

            /// Get the distance between 2 points
            #[inline]
            #[must_use]
            pub fn dist(self, rhs: Self) -> T {
                (rhs - self).len()
            }

            /// Check if the vector has a length of 1, within a small tolerance
            #[inline]
            #[must_use]
            pub fn is_normalized(self) -> bool {
                (self.len_sq() - T::one()).abs() <= T::KINDA_SMALL
            }

            /// Get the normalized vector, or the zero vector when the square
            /// length is below `tolerance`
            #[must_use]
            pub fn safe_normal(self, tolerance: T) -> Self {
                self.safe_normal_or(tolerance, Self::zero())
            }

            /// Get the normalized vector, or `fallback` when the square length
            /// is below `tolerance`
            #[must_use]
            pub fn safe_normal_or(self, tolerance: T, fallback: Self) -> Self {
                let len_sq = self.len_sq();
                if len_sq == T::one() {
                    self
                } else if len_sq < tolerance {
                    fallback
                } else {
                    self * len_sq.rsqrt()
                }
            }

            /// Get the vector clamped to a maximum length
            #[must_use]
            pub fn clamped_to_max_len(self, max_len: T) -> Self {
                let len_sq = self.len_sq();
                if len_sq > max_len * max_len {
                    self * (max_len * len_sq.rsqrt())
                } else {
                    self
                }
            }

            /// Linearly interpolate between 2 vectors
            #[inline]
            #[must_use]
            pub fn lerp(self, rhs: Self, alpha: T) -> Self {
                self + (rhs - self) * alpha
            }

            /// Get the component-wise minimum of 2 vectors
            #[inline]
            #[must_use]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.min(rhs.$comp)),+ }
            }

            /// Get the component-wise maximum of 2 vectors
            #[inline]
            #[must_use]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($comp: self.$comp.max(rhs.$comp)),+ }
            }

            /// Clamp the components between the corresponding components of `min` and `max`
            #[inline]
            #[must_use]
            pub fn clamp(self, min: Self, max: Self) -> Self {
                Self { $($comp: self.$comp.clamp(min.$comp, max.$comp)),+ }
            }

            /// Get a vector with the absolute value of each component
            #[inline]
            #[must_use]
            pub fn abs(self) -> Self {
                Self { $($comp: self.$comp.abs()),+ }
            }

            /// Get a vector with the sign of each component
            #[inline]
            #[must_use]
            pub fn sign(self) -> Self {
                Self { $($comp: self.$comp.sign()),+ }
            }

            /// Round each component towards negative infinity
            #[inline]
            #[must_use]
            pub fn floor(self) -> Self {
                Self { $($comp: self.$comp.floor()),+ }
            }

            /// Round each component towards positive infinity
            #[inline]
            #[must_use]
            pub fn ceil(self) -> Self {
                Self { $($comp: self.$comp.ceil()),+ }
            }

            /// Round each component to the nearest integer
            #[inline]
            #[must_use]
            pub fn round(self) -> Self {
                Self { $($comp: self.$comp.round()),+ }
            }

            /// Snap each component to the closest multiple of `grid`
            #[inline]
            #[must_use]
            pub fn grid_snap(self, grid: T) -> Self {
                Self { $($comp: self.$comp.grid_snap(grid)),+ }
            }

            /// Check if all components are 0, within `tolerance`
            #[inline]
            #[must_use]
            pub fn is_nearly_zero(self, tolerance: T) -> bool {
                self.is_close_to_zero(tolerance)
            }

            /// Check if any component is negative
            #[inline]
            #[must_use]
            pub fn has_negative_component(self) -> bool {
                $(self.$comp < T::zero())||+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: DetReal> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                debug_assert!(index < $n);
                &self.as_array()[index]
            }
        }

        impl<T: DetReal> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                debug_assert!(index < $n);
                &mut self.as_mut_array()[index]
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: DetReal> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { $($comp: -self.$comp),+ }
            }
        }

        impl<T: DetReal> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { $($comp: self.$comp + rhs.$comp),+ }
            }
        }

        impl<T: DetReal> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$comp += rhs.$comp;)+
            }
        }

        impl<T: DetReal> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($comp: self.$comp - rhs.$comp),+ }
            }
        }

        impl<T: DetReal> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$comp -= rhs.$comp;)+
            }
        }

        impl<T: DetReal> Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self { $($comp: self.$comp * rhs.$comp),+ }
            }
        }

        impl<T: DetReal> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$comp *= rhs.$comp;)+
            }
        }

        impl<T: DetReal> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { $($comp: self.$comp * rhs),+ }
            }
        }

        impl<T: DetReal> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$comp *= rhs;)+
            }
        }

        impl<T: DetReal> Div for $name<T> {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self { $($comp: self.$comp / rhs.$comp),+ }
            }
        }

        impl<T: DetReal> DivAssign for $name<T> {
            fn div_assign(&mut self, rhs: Self) {
                $(self.$comp /= rhs.$comp;)+
            }
        }

        impl<T: DetReal> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { $($comp: self.$comp / rhs),+ }
            }
        }

        impl<T: DetReal> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$comp /= rhs;)+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        impl<T: DetReal> Zero for $name<T> {
            fn zero() -> Self {
                Self { $($comp: T::zero()),+ }
            }
        }

        impl<T: DetReal> One for $name<T> {
            fn one() -> Self {
                Self { $($comp: T::one()),+ }
            }
        }

        impl<T: DetReal> ApproxEq<T> for $name<T> {
            const EPSILON: T = <T as MathConsts>::EPSILON;

            fn is_close_to(self, rhs: Self, epsilon: T) -> bool {
                $(self.$comp.is_close_to(rhs.$comp, epsilon))&&+
            }
        }

        impl<T: DetReal> ApproxZero<T> for $name<T> {
            const ZERO_EPSILON: T = <T as ApproxZero>::ZERO_EPSILON;

            fn is_close_to_zero(self, epsilon: T) -> bool {
                $(self.$comp.is_close_to_zero(epsilon))&&+
            }
        }

        //------------------------------------------------------------------------------------------------------------------------------

        vec_pre_multiplication!{$name, Fixed64, Fixed32, Det64}
    };
}

generic_vec!{doc = "2D vector"; Vec2, 2, x, y}
generic_vec!{doc = "3D vector"; Vec3, 3, x, y, z}
generic_vec!{doc = "4D vector"; Vec4, 4, x, y, z, w}
