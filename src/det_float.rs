use crate::*;

use core::{
    fmt,
    ops::*,
};

use serde::{Deserialize, Serialize};

/// Deterministic double-precision scalar.
///
/// Wraps an `f64` and restricts itself to IEEE-754 base operations (add, sub,
/// mul, div, rem, compare), which are exactly specified and bit-identical on
/// conforming hardware. Transcendentals and the square root never touch the
/// platform libm: they run the same shared algorithms the fixed backends use.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Det64(f64);

impl Det64 {
    /// Create a value from a double (exact)
    #[inline(always)]
    #[must_use]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    /// Get the backing double
    #[inline(always)]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl Add for Det64 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Det64 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Det64 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Det64 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul for Det64 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl MulAssign for Det64 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Div for Det64 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl DivAssign for Det64 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        self.0 /= rhs.0;
    }
}

impl Rem for Det64 {
    type Output = Self;

    #[inline(always)]
    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Det64 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl Zero for Det64 {
    fn zero() -> Self {
        Self(0.0)
    }
}

impl One for Det64 {
    fn one() -> Self {
        Self(1.0)
    }
}

impl ApproxEq for Det64 {
    const EPSILON: Self = Self(f64::EPSILON);

    fn is_close_to(self, rhs: Self, epsilon: Self) -> bool {
        (self.0 - rhs.0).abs() <= epsilon.0
    }
}

impl ApproxZero for Det64 {
    const ZERO_EPSILON: Self = <Self as MathConsts>::SMALL;

    fn is_close_to_zero(self, epsilon: Self) -> bool {
        self.0.abs() <= epsilon.0
    }
}

impl MathConsts for Det64 {
    const MIN: Self = Self(f64::MIN);
    const MAX: Self = Self(f64::MAX);
    const EPSILON: Self = Self(f64::EPSILON);

    const SMALL: Self = Self(1.0e-8);
    const KINDA_SMALL: Self = Self(1.0e-4);
    const THRESH_QUAT_NORMALIZED: Self = Self(0.01);

    const PI: Self = Self(core::f64::consts::PI);
    const TWO_PI: Self = Self(core::f64::consts::TAU);
    const HALF_PI: Self = Self(core::f64::consts::FRAC_PI_2);
    const QUARTER_PI: Self = Self(core::f64::consts::FRAC_PI_4);

    const DEG_TO_RAD: Self = Self(core::f64::consts::PI / 180.0);
    const RAD_TO_DEG: Self = Self(180.0 / core::f64::consts::PI);
}

impl fmt::Display for Det64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//------------------------------------------------------------------------------------------------------------------------------

impl DetReal for Det64 {
    fn from_i32(val: i32) -> Self {
        Self(val as f64)
    }

    // Both operands convert exactly and the divide is correctly rounded, so
    // this is reproducible even though it goes through floats.
    fn from_ratio(num: i64, den: i64) -> Self {
        Self(num as f64 / den as f64)
    }

    fn from_f32(val: f32) -> Self {
        Self(val as f64)
    }

    fn from_f64(val: f64) -> Self {
        Self(val)
    }

    fn to_f32(self) -> f32 {
        self.0 as f32
    }

    fn to_f64(self) -> f64 {
        self.0
    }

    fn to_i32(self) -> i32 {
        self.0 as i32
    }

    fn sqrt(self) -> Self {
        if self.0 <= 0.0 {
            return Self(0.0);
        }
        // Seed at or above the root so the iterates decrease monotonically.
        let mut cur = if self.0 >= 1.0 { self.0 } else { 1.0 };
        let mut next = (cur + self.0 / cur) * 0.5;
        while next < cur {
            cur = next;
            next = (cur + self.0 / cur) * 0.5;
        }
        Self(cur)
    }

    fn floor(self) -> Self {
        Self(self.0.floor())
    }

    fn ceil(self) -> Self {
        Self(self.0.ceil())
    }

    fn trunc(self) -> Self {
        Self(self.0.trunc())
    }

    fn round(self) -> Self {
        Self((self.0 + 0.5).floor())
    }
}

//------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_matches_exact_squares() {
        assert_eq!(Det64::new(16.0).sqrt(), Det64::new(4.0));
        assert_eq!(Det64::new(0.25).sqrt(), Det64::new(0.5));
        assert_eq!(Det64::new(-9.0).sqrt(), Det64::zero());
    }

    #[test]
    fn round_is_floor_of_half_up() {
        assert_eq!(Det64::new(-5.5).round(), Det64::new(-5.0));
        assert_eq!(Det64::new(5.5).round(), Det64::new(6.0));
        assert_eq!(Det64::new(2.49).round(), Det64::new(2.0));
    }

    #[test]
    fn ratio_construction() {
        assert_eq!(Det64::from_ratio(1, 2), Det64::new(0.5));
        assert_eq!(Det64::from_ratio(-3, 4), Det64::new(-0.75));
    }
}
