use crate::*;

use core::{
    fmt,
    hash::Hash,
    ops::*,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw integer backing a fixed-point value.
///
/// Multiplication and division widen into the next integer size (`i32` into
/// `i64`, `i64` into `i128`) so intermediates never lose bits; addition and
/// subtraction wrap in two's complement. Every operation here is exact integer
/// arithmetic, which is what makes the fixed backends bit-reproducible.
pub trait FixedRaw: Copy + Clone + Eq + Ord + Hash + fmt::Debug + Default + 'static {
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn wrapping_abs(self) -> Self;
    fn is_negative(self) -> bool;

    /// Arithmetic shift left
    fn shl(self, bits: u32) -> Self;
    /// Arithmetic shift right (rounds towards negative infinity)
    fn shr(self, bits: u32) -> Self;

    /// Widen, multiply, shift the product right by `frac_bits`, narrow
    fn mul_shifted(self, rhs: Self, frac_bits: u32) -> Self;
    /// Widen, pre-shift the dividend left by `frac_bits`, divide, narrow.
    ///
    /// Panics on a zero divisor the way the backing integer division does.
    fn div_shifted(self, rhs: Self, frac_bits: u32) -> Self;
    /// Remainder of the raw division
    fn rem(self, rhs: Self) -> Self;
    /// `(num << frac_bits) / den` in widened arithmetic
    fn ratio_shifted(num: i64, den: i64, frac_bits: u32) -> Self;

    /// Integer Newton-Raphson square root of the raw value, re-aligned to the
    /// binary point by a final left shift of `frac_bits / 2`.
    ///
    /// Non-positive input yields 0.
    fn sqrt_raw(self, frac_bits: u32) -> Self;

    fn from_i64(val: i64) -> Self;
    fn to_i64(self) -> i64;
    fn from_f64_scaled(val: f64, frac_bits: u32) -> Self;
    fn to_f64_scaled(self, frac_bits: u32) -> f64;
}

macro_rules! impl_fixed_raw {
    {$($ty:ty => $wide:ty),*} => {
        $(
            impl FixedRaw for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }

                #[inline(always)]
                fn wrapping_abs(self) -> Self {
                    <$ty>::wrapping_abs(self)
                }

                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn shl(self, bits: u32) -> Self {
                    self << bits
                }

                #[inline(always)]
                fn shr(self, bits: u32) -> Self {
                    self >> bits
                }

                #[inline(always)]
                fn mul_shifted(self, rhs: Self, frac_bits: u32) -> Self {
                    ((self as $wide * rhs as $wide) >> frac_bits) as $ty
                }

                #[inline(always)]
                fn div_shifted(self, rhs: Self, frac_bits: u32) -> Self {
                    (((self as $wide) << frac_bits) / rhs as $wide) as $ty
                }

                #[inline(always)]
                fn rem(self, rhs: Self) -> Self {
                    self % rhs
                }

                #[inline(always)]
                fn ratio_shifted(num: i64, den: i64, frac_bits: u32) -> Self {
                    (((num as $wide) << frac_bits) / den as $wide) as $ty
                }

                fn sqrt_raw(self, frac_bits: u32) -> Self {
                    if self <= 0 {
                        return 0;
                    }
                    let mut cur = self;
                    let mut next = (cur + self / cur) >> 1;
                    while next < cur {
                        cur = next;
                        next = (cur + self / cur) >> 1;
                    }
                    cur << (frac_bits / 2)
                }

                #[inline(always)]
                fn from_i64(val: i64) -> Self {
                    val as $ty
                }

                #[inline(always)]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline(always)]
                fn from_f64_scaled(val: f64, frac_bits: u32) -> Self {
                    (val * (1u64 << frac_bits) as f64) as $ty
                }

                #[inline(always)]
                fn to_f64_scaled(self, frac_bits: u32) -> f64 {
                    self as f64 / (1u64 << frac_bits) as f64
                }
            }
        )*
    };
}
impl_fixed_raw!{i32 => i64, i64 => i128}

//------------------------------------------------------------------------------------------------------------------------------

/// Signed fixed-point value: `raw / 2^FRAC`.
///
/// Equality, ordering, and hashing all act on the raw integer, so two values
/// are equal exactly when they are bit-identical. Addition and subtraction
/// wrap; multiplication and division use widened intermediates.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Fixed<R: FixedRaw, const FRAC: u32>(R);

/// Fixed-point value with 64 stored bits, 20 of them fractional
pub type Fixed64 = Fixed<i64, 20>;
/// Fixed-point value with 32 stored bits, 16 of them fractional
pub type Fixed32 = Fixed<i32, 16>;

impl<R: FixedRaw, const FRAC: u32> Fixed<R, FRAC> {
    pub const FRAC_BITS: u32 = FRAC;

    /// Create a value from an already-scaled raw integer (exact).
    ///
    /// This is the only supported path for compile-time constants.
    #[inline(always)]
    #[must_use]
    pub const fn from_raw(raw: R) -> Self {
        Self(raw)
    }

    /// Get the backing raw integer
    #[inline(always)]
    #[must_use]
    pub const fn raw(self) -> R {
        self.0
    }

    /// Create a value from a whole number (exact, wraps outside the representable range)
    #[inline(always)]
    #[must_use]
    pub fn from_i64(val: i64) -> Self {
        Self(R::from_i64(val << FRAC))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<R: FixedRaw, const FRAC: u32> Add for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<R: FixedRaw, const FRAC: u32> AddAssign for Fixed<R, FRAC> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl<R: FixedRaw, const FRAC: u32> Sub for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<R: FixedRaw, const FRAC: u32> SubAssign for Fixed<R, FRAC> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl<R: FixedRaw, const FRAC: u32> Mul for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0.mul_shifted(rhs.0, FRAC))
    }
}

impl<R: FixedRaw, const FRAC: u32> MulAssign for Fixed<R, FRAC> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: FixedRaw, const FRAC: u32> Div for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0.div_shifted(rhs.0, FRAC))
    }
}

impl<R: FixedRaw, const FRAC: u32> DivAssign for Fixed<R, FRAC> {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<R: FixedRaw, const FRAC: u32> Rem for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0.rem(rhs.0))
    }
}

impl<R: FixedRaw, const FRAC: u32> Neg for Fixed<R, FRAC> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<R: FixedRaw, const FRAC: u32> Zero for Fixed<R, FRAC> {
    fn zero() -> Self {
        Self(R::ZERO)
    }
}

impl<R: FixedRaw, const FRAC: u32> One for Fixed<R, FRAC> {
    fn one() -> Self {
        Self(R::from_i64(1i64 << FRAC))
    }
}

impl<R: FixedRaw, const FRAC: u32> ApproxEq for Fixed<R, FRAC> where
    Self: MathConsts
{
    const EPSILON: Self = <Self as MathConsts>::EPSILON;

    fn is_close_to(self, rhs: Self, epsilon: Self) -> bool {
        Self(self.0.wrapping_sub(rhs.0).wrapping_abs()) <= epsilon
    }
}

impl<R: FixedRaw, const FRAC: u32> ApproxZero for Fixed<R, FRAC> where
    Self: MathConsts
{
    const ZERO_EPSILON: Self = <Self as MathConsts>::SMALL;

    fn is_close_to_zero(self, epsilon: Self) -> bool {
        Self(self.0.wrapping_abs()) <= epsilon
    }
}

impl<R: FixedRaw, const FRAC: u32> fmt::Display for Fixed<R, FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.to_f64_scaled(FRAC), f)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl<R: FixedRaw, const FRAC: u32> DetReal for Fixed<R, FRAC> where
    Self: MathConsts
{
    fn from_i32(val: i32) -> Self {
        Self::from_i64(val as i64)
    }

    fn from_ratio(num: i64, den: i64) -> Self {
        Self(R::ratio_shifted(num, den, FRAC))
    }

    fn from_f32(val: f32) -> Self {
        Self(R::from_f64_scaled(val as f64, FRAC))
    }

    fn from_f64(val: f64) -> Self {
        Self(R::from_f64_scaled(val, FRAC))
    }

    fn to_f32(self) -> f32 {
        self.0.to_f64_scaled(FRAC) as f32
    }

    fn to_f64(self) -> f64 {
        self.0.to_f64_scaled(FRAC)
    }

    fn to_i32(self) -> i32 {
        self.trunc().0.shr(FRAC).to_i64() as i32
    }

    fn sqrt(self) -> Self {
        Self(self.0.sqrt_raw(FRAC))
    }

    fn floor(self) -> Self {
        Self(self.0.shr(FRAC).shl(FRAC))
    }

    fn ceil(self) -> Self {
        let frac_mask = R::from_i64((1i64 << FRAC) - 1);
        Self(self.0.wrapping_add(frac_mask).shr(FRAC).shl(FRAC))
    }

    fn trunc(self) -> Self {
        if self.0.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    fn round(self) -> Self {
        let half = R::from_i64(1i64 << (FRAC - 1));
        Self(self.0.wrapping_add(half).shr(FRAC).shl(FRAC))
    }
}

//------------------------------------------------------------------------------------------------------------------------------

// Serialized state carries the raw integer, keeping persisted values bit-reproducible.
impl<R: FixedRaw + Serialize, const FRAC: u32> Serialize for Fixed<R, FRAC> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, R: FixedRaw + Deserialize<'de>, const FRAC: u32> Deserialize<'de> for Fixed<R, FRAC> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        R::deserialize(deserializer).map(Self::from_raw)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

macro_rules! impl_fixed_consts {
    {$($ty:ty => $raw:ty, $frac:literal)*} => {
        $(
            impl MathConsts for $ty {
                const MIN: Self = Self::from_raw(<$raw>::MIN);
                const MAX: Self = Self::from_raw(<$raw>::MAX);
                const EPSILON: Self = Self::from_raw(1);

                const SMALL: Self = Self::from_raw(1);
                const KINDA_SMALL: Self = Self::from_raw((1.0e-4 * (1u64 << $frac) as f64) as $raw);
                const THRESH_QUAT_NORMALIZED: Self = Self::from_raw((0.01 * (1u64 << $frac) as f64) as $raw);

                const PI: Self = Self::from_raw((core::f64::consts::PI * (1u64 << $frac) as f64) as $raw);
                const TWO_PI: Self = Self::from_raw((core::f64::consts::TAU * (1u64 << $frac) as f64) as $raw);
                const HALF_PI: Self = Self::from_raw((core::f64::consts::FRAC_PI_2 * (1u64 << $frac) as f64) as $raw);
                const QUARTER_PI: Self = Self::from_raw((core::f64::consts::FRAC_PI_4 * (1u64 << $frac) as f64) as $raw);

                const DEG_TO_RAD: Self = Self::from_raw((core::f64::consts::PI / 180.0 * (1u64 << $frac) as f64) as $raw);
                const RAD_TO_DEG: Self = Self::from_raw((180.0 / core::f64::consts::PI * (1u64 << $frac) as f64) as $raw);
            }
        )*
    };
}
impl_fixed_consts!{
    Fixed64 => i64, 20
    Fixed32 => i32, 16
}

//------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let val = Fixed64::from_raw(0x1234_5678);
        assert_eq!(val.raw(), 0x1234_5678);
        assert_eq!(Fixed64::from_raw(val.raw()), val);
    }

    #[test]
    fn whole_number_construction_is_exact() {
        assert_eq!(Fixed64::from_i64(7).raw(), 7 << 20);
        assert_eq!(Fixed32::from_i32(-3).raw(), -3 << 16);
        assert_eq!(Fixed64::one() + Fixed64::one(), Fixed64::from_i64(2));
    }

    #[test]
    fn mul_div() {
        let a = Fixed64::from_i64(6);
        let b = Fixed64::from_i64(4);
        assert_eq!(a * b, Fixed64::from_i64(24));
        assert_eq!(a / b, Fixed64::from_ratio(3, 2));

        let half = Fixed32::from_ratio(1, 2);
        assert_eq!(half * Fixed32::from_i32(10), Fixed32::from_i32(5));
    }

    #[test]
    fn mul_shift_rounds_towards_negative_infinity() {
        let eps = Fixed64::from_raw(1);
        let neg_eps = -eps;
        assert_eq!((neg_eps * eps).raw(), -1);
        assert_eq!((eps * eps).raw(), 0);
    }

    #[test]
    fn add_sub_wrap() {
        let max = Fixed64::from_raw(i64::MAX);
        assert_eq!((max + Fixed64::from_raw(1)).raw(), i64::MIN);
        assert_eq!((Fixed64::from_raw(i64::MIN) - Fixed64::from_raw(1)).raw(), i64::MAX);
    }

    #[test]
    fn sqrt_of_perfect_square_is_exact() {
        assert_eq!(Fixed64::from_i64(16).sqrt(), Fixed64::from_i64(4));
        assert_eq!(Fixed32::from_i32(16).sqrt(), Fixed32::from_i32(4));
        assert_eq!(Fixed64::from_i64(144).sqrt(), Fixed64::from_i64(12));
        assert_eq!(Fixed64::from_i64(-4).sqrt(), Fixed64::zero());
        assert_eq!(Fixed64::zero().sqrt(), Fixed64::zero());
    }

    #[test]
    fn rounding_modes() {
        let val = Fixed64::from_ratio(-11, 2); // -5.5
        assert_eq!(val.ceil(), Fixed64::from_i64(-5));
        assert_eq!(val.floor(), Fixed64::from_i64(-6));
        assert_eq!(val.trunc(), Fixed64::from_i64(-5));
        assert_eq!(val.round(), Fixed64::from_i64(-5));

        let val = Fixed64::from_ratio(11, 2); // 5.5
        assert_eq!(val.ceil(), Fixed64::from_i64(6));
        assert_eq!(val.floor(), Fixed64::from_i64(5));
        assert_eq!(val.trunc(), Fixed64::from_i64(5));
        assert_eq!(val.round(), Fixed64::from_i64(6));
    }

    #[test]
    fn ordering_follows_raw() {
        let a = Fixed64::from_ratio(-3, 2);
        let b = Fixed64::from_ratio(1, 4);
        assert!(a < b);
        // Ord and DetReal both supply max/clamp on the concrete type
        assert_eq!(DetReal::max(a, b), b);
        assert_eq!(DetReal::clamp(b, Fixed64::zero(), Fixed64::from_i64(1)), b);
    }

    #[test]
    fn grid_snap() {
        let grid = Fixed64::from_ratio(1, 4);
        assert_eq!(Fixed64::from_ratio(3, 8).grid_snap(grid), Fixed64::from_ratio(1, 2));
        assert_eq!(Fixed64::from_i64(7).grid_snap(Fixed64::zero()), Fixed64::from_i64(7));
    }
}
