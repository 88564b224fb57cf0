use crate::{funcs, MathConsts};
use core::{
    fmt::{Debug, Display},
    ops::*,
};

/// Defines the additive identity for `Self`
pub trait Zero: Sized {
    /// Get the additive identity (0)
    fn zero() -> Self;
}

/// Defines the multiplicative identity for `Self`
pub trait One: Sized {
    /// Get the multiplicative identity (1)
    fn one() -> Self;
}

/// Approximate equality within a given epsilon
pub trait ApproxEq<T = Self>: Sized + Copy {
    const EPSILON: T;

    /// Check if `self` is approximately equal to `rhs` using the given epsilon
    fn is_close_to(self, rhs: Self, epsilon: T) -> bool;

    /// Check if `self` is approximately equal to `rhs` using the default epsilon
    fn is_approx_eq(self, rhs: Self) -> bool {
        self.is_close_to(rhs, Self::EPSILON)
    }
}

/// Approximate comparison with 0 within a given epsilon
pub trait ApproxZero<T = Self>: Sized + Copy {
    const ZERO_EPSILON: T;

    /// Check if `self` is approximately equal to 0 using the given epsilon
    fn is_close_to_zero(self, epsilon: T) -> bool;

    /// Check if `self` is approximately equal to 0 using the default epsilon
    fn is_approx_zero(self) -> bool {
        self.is_close_to_zero(Self::ZERO_EPSILON)
    }
}

/// A deterministic real scalar.
///
/// Every type implementing this trait promises bit-identical results for the
/// same sequence of operations on any conforming platform: fixed-point
/// backends get this from integer arithmetic, the double backend from IEEE-754
/// base operations. All transcendentals go through the shared algorithms in
/// [`funcs`], never a platform libm.
pub trait DetReal:
    Sized + Copy + Clone + Debug + Display + Default +
    PartialEq + PartialOrd +
    Zero + One + MathConsts +
    ApproxEq + ApproxZero +
    Add<Output = Self> + Sub<Output = Self> +
    Mul<Output = Self> + Div<Output = Self> + Rem<Output = Self> +
    AddAssign + SubAssign + MulAssign + DivAssign +
    Neg<Output = Self> +
    'static
{
    /// Create a value from a whole number (exact)
    fn from_i32(val: i32) -> Self;

    /// Create a value from an integer ratio `num / den` (deterministic on all backends).
    ///
    /// This is the supported way of spelling non-integral constants, e.g.
    /// polynomial coefficients, so fixed and double backends share the same
    /// decimal literals.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// Create a value from an `f32` (ingestion boundary, NOT deterministic across replicas)
    fn from_f32(val: f32) -> Self;

    /// Create a value from an `f64` (ingestion boundary, NOT deterministic across replicas)
    fn from_f64(val: f64) -> Self;

    /// Convert to `f32` (display/debug boundary)
    fn to_f32(self) -> f32;

    /// Convert to `f64` (display/debug boundary)
    fn to_f64(self) -> f64;

    /// Convert to `i32`, truncating toward zero
    fn to_i32(self) -> i32;

    /// Get the minimum of 2 values
    #[must_use]
    fn min(self, rhs: Self) -> Self {
        if self <= rhs { self } else { rhs }
    }

    /// Get the maximum of 2 values
    #[must_use]
    fn max(self, rhs: Self) -> Self {
        if self >= rhs { self } else { rhs }
    }

    /// Clamp the value between `min` and `max`
    #[must_use]
    fn clamp(self, min: Self, max: Self) -> Self {
        debug_assert!(min <= max);
        self.max(min).min(max)
    }

    /// Get the absolute value
    #[must_use]
    fn abs(self) -> Self {
        if self < Self::zero() { -self } else { self }
    }

    /// Get the sign of the value (0 maps to 0)
    #[must_use]
    fn sign(self) -> Self {
        if self > Self::zero() {
            Self::one()
        } else if self < Self::zero() {
            -Self::one()
        } else {
            Self::zero()
        }
    }

    /// Get the square root of the value (Newton-Raphson, 0 for negative input)
    #[must_use]
    fn sqrt(self) -> Self;

    /// Get the reciprocal of the square root
    #[must_use]
    fn rsqrt(self) -> Self {
        Self::one() / self.sqrt()
    }

    /// Get the reciprocal
    #[must_use]
    fn rcp(self) -> Self {
        Self::one() / self
    }

    /// Round the value towards negative infinity
    #[must_use]
    fn floor(self) -> Self;

    /// Round the value towards positive infinity
    #[must_use]
    fn ceil(self) -> Self;

    /// Round the value towards zero
    #[must_use]
    fn trunc(self) -> Self;

    /// Round the value to the nearest integer, as `floor(self + 1/2)`
    #[must_use]
    fn round(self) -> Self;

    /// Get the fractional part, as `self - self.floor()`
    #[must_use]
    fn fract(self) -> Self {
        self - self.floor()
    }

    /// Get the sine of the value (radians)
    #[must_use]
    fn sin(self) -> Self {
        funcs::sin(self)
    }

    /// Get the cosine of the value (radians)
    #[must_use]
    fn cos(self) -> Self {
        funcs::cos(self)
    }

    /// Get the sine and cosine of the value (radians)
    #[must_use]
    fn sin_cos(self) -> (Self, Self) {
        funcs::sin_cos(self)
    }

    /// Get the tangent of the value (radians)
    #[must_use]
    fn tan(self) -> Self {
        funcs::tan(self)
    }

    /// Get the arcsine of the value, in radians in `[-π/2, π/2]`
    #[must_use]
    fn asin(self) -> Self {
        funcs::asin(self)
    }

    /// Get the arccosine of the value, in radians in `[0, π]`
    #[must_use]
    fn acos(self) -> Self {
        funcs::acos(self)
    }

    /// Get the arctangent of the value, in radians in `(-π/2, π/2)`
    #[must_use]
    fn atan(self) -> Self {
        funcs::atan2(self, Self::one())
    }

    /// Get the angle of the vector `(x, y)`, in radians in `(-π, π]`; `atan2(0, 0) == 0`
    #[must_use]
    fn atan2(y: Self, x: Self) -> Self {
        funcs::atan2(y, x)
    }

    /// Linearly interpolate between `self` and `rhs`
    #[must_use]
    fn lerp(self, rhs: Self, alpha: Self) -> Self {
        self + (rhs - self) * alpha
    }

    /// Snap the value to the closest multiple of `grid`; a zero grid passes the value through
    #[must_use]
    fn grid_snap(self, grid: Self) -> Self {
        if grid == Self::zero() {
            self
        } else {
            (self / grid).round() * grid
        }
    }

    /// Unwind an angle in degrees into `(-180, 180]`
    #[must_use]
    fn unwind_degrees(self) -> Self {
        funcs::unwind(self, Self::from_i32(180), Self::from_i32(360))
    }

    /// Unwind an angle in radians into `(-π, π]`
    #[must_use]
    fn unwind_radians(self) -> Self {
        funcs::unwind(self, Self::PI, Self::TWO_PI)
    }
}
