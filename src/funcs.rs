//! Deterministic transcendental algorithms shared by every scalar backend.
//!
//! Everything here is built from add/sub/mul/div, compares, and the backend's
//! Newton-Raphson square root, so fixed and double backends run the exact same
//! reduction and polynomial steps. None of it calls into a platform libm.

use crate::{DetReal, Zero, One};

/// Reduce an angle into `[0, range)`.
///
/// Negative input is walked up by a bounded loop (one iteration per whole
/// period below zero), then a single modulo handles the positive side. Callers
/// are expected to feed angles within a few periods of zero.
fn normalize_angle<T: DetReal>(mut value: T, range: T) -> T {
    while value < T::zero() {
        value += range;
    }
    if value >= range {
        value = value % range;
    }
    value
}

/// Series sine on `[0, π/2)` plus the quadrant the input reduced into
fn reduced_sin<T: DetReal>(value: T) -> (T, i32) {
    let wrapped = normalize_angle(value, T::TWO_PI);

    // Constant rounding can leave wrapped/HALF_PI a hair above 3 on fixed
    // backends, so pin the quadrant into 0..=3.
    let quadrant = (wrapped / T::HALF_PI).to_i32().min(3);
    let mut theta = wrapped - T::HALF_PI * T::from_i32(quadrant);

    // Mirror the 2nd and 4th quadrant, flip the sign of the lower half circle
    if quadrant == 1 || quadrant == 3 {
        theta = T::HALF_PI - theta;
    }
    let sin = maclaurin_sin(theta);
    (if quadrant >= 2 { -sin } else { sin }, quadrant)
}

/// 7th-order Maclaurin series, evaluated by repeated multiplication with θ²
fn maclaurin_sin<T: DetReal>(theta: T) -> T {
    let theta_sq = theta * theta;
    let mut term = theta;
    let mut result = theta;

    term = term * theta_sq;
    result = result - term / T::from_i32(6);
    term = term * theta_sq;
    result = result + term / T::from_i32(120);
    term = term * theta_sq;
    result - term / T::from_i32(5040)
}

pub fn sin<T: DetReal>(value: T) -> T {
    reduced_sin(value).0
}

pub fn cos<T: DetReal>(value: T) -> T {
    sin_cos(value).1
}

/// Sine and cosine of an angle; the cosine comes from `sqrt(1 - sin²)` with
/// its sign taken from the quadrant
pub fn sin_cos<T: DetReal>(value: T) -> (T, T) {
    let (sin, quadrant) = reduced_sin(value);
    let cos = (T::one() - sin * sin).max(T::zero()).sqrt();
    if quadrant == 1 || quadrant == 2 {
        (sin, -cos)
    } else {
        (sin, cos)
    }
}

/// Tangent; saturates where the cosine is exactly zero
pub fn tan<T: DetReal>(value: T) -> T {
    let (sin, cos) = sin_cos(value);
    if cos == T::zero() {
        if sin >= T::zero() { T::MAX } else { T::MIN }
    } else {
        sin / cos
    }
}

/// Arccosine via a 4-coefficient minimax polynomial times `sqrt(1 - |x|)`,
/// valid over `[-1, 1]`, result in `[0, π]`
pub fn acos<T: DetReal>(value: T) -> T {
    let negate = value < T::zero();
    let x = value.abs().min(T::one());

    let mut result = T::from_ratio(-187_293, 10_000_000);
    result = result * x + T::from_ratio(742_610, 10_000_000);
    result = result * x - T::from_ratio(2_121_144, 10_000_000);
    result = result * x + T::from_ratio(15_707_288, 10_000_000);
    result = result * (T::one() - x).sqrt();

    if negate { T::PI - result } else { result }
}

/// Arcsine as `π/2 - acos`, result in `[-π/2, π/2]`
pub fn asin<T: DetReal>(value: T) -> T {
    T::HALF_PI - acos(value)
}

/// Angle of the vector `(x, y)` in `(-π, π]`, with `atan2(0, 0) == 0`.
///
/// A 7-term minimax polynomial in the smaller/larger ratio of |x| and |y|
/// covers the first octant; conditional corrections fold the result back into
/// the right one.
pub fn atan2<T: DetReal>(y: T, x: T) -> T {
    if x == T::zero() && y == T::zero() {
        return T::zero();
    }

    let abs_x = x.abs();
    let abs_y = y.abs();
    let y_larger = abs_y > abs_x;
    let ratio = if y_larger { abs_x / abs_y } else { abs_y / abs_x };
    let ratio_sq = ratio * ratio;

    let mut poly = T::from_ratio(72_128_854, 10_000_000_000);
    poly = poly * ratio_sq - T::from_ratio(350_596_808, 10_000_000_000);
    poly = poly * ratio_sq + T::from_ratio(816_758_829, 10_000_000_000);
    poly = poly * ratio_sq - T::from_ratio(1_337_465_733, 10_000_000_000);
    poly = poly * ratio_sq + T::from_ratio(1_985_656_351, 10_000_000_000);
    poly = poly * ratio_sq - T::from_ratio(3_332_499_858, 10_000_000_000);
    poly = poly * ratio_sq + T::one();

    let mut result = poly * ratio;
    if y_larger {
        result = T::HALF_PI - result;
    }
    if x < T::zero() {
        result = T::PI - result;
    }
    if y < T::zero() {
        result = -result;
    }
    result
}

/// Unwind an angle into `(-half, half]` by whole periods of `full`
pub fn unwind<T: DetReal>(mut angle: T, half: T, full: T) -> T {
    while angle > half {
        angle -= full;
    }
    while angle <= -half {
        angle += full;
    }
    angle
}

/// Reduce an angle in degrees into `[0, 360)`
pub fn clamp_axis<T: DetReal>(angle: T) -> T {
    let full = T::from_i32(360);
    let mut result = angle % full;
    if result < T::zero() {
        result += full;
    }
    result
}

/// Reduce an angle in degrees into `(-180, 180]`
pub fn normalize_axis<T: DetReal>(angle: T) -> T {
    let result = clamp_axis(angle);
    if result > T::from_i32(180) {
        result - T::from_i32(360)
    } else {
        result
    }
}

//------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Det64, Fixed64, MathConsts, DetReal};

    // The truncated series is good to ~1.6e-4 at the worst point of the range
    fn close<T: DetReal>(a: T, b: T) {
        assert!(a.is_close_to(b, T::from_ratio(3, 10_000)), "{a} != {b}");
    }

    #[test]
    fn sin_quadrants() {
        close(sin(Det64::zero()), Det64::zero());
        close(sin(Det64::HALF_PI), Det64::one());
        close(sin(Det64::PI), Det64::zero());
        close(sin(Det64::PI + Det64::HALF_PI), -Det64::one());
        close(sin(-Det64::HALF_PI), -Det64::one());

        close(sin(Fixed64::HALF_PI), Fixed64::one());
        close(sin(Fixed64::PI + Fixed64::HALF_PI), -Fixed64::one());
    }

    #[test]
    fn cos_sign_follows_quadrant() {
        close(cos(Det64::zero()), Det64::one());
        close(cos(Det64::PI), -Det64::one());
        // right at a quadrant boundary the identity-derived cosine pays
        // sqrt(2 * series error), around 0.018
        assert!(cos(Det64::HALF_PI).abs() < Det64::from_ratio(2, 100));
        assert!(cos(Det64::PI - Det64::from_ratio(1, 10)) < Det64::zero());
        assert!(cos(Det64::TWO_PI - Det64::from_ratio(1, 10)) > Det64::zero());
    }

    #[test]
    fn pythagorean_identity() {
        let mut angle = -Det64::TWO_PI;
        while angle < Det64::TWO_PI {
            let (s, c) = sin_cos(angle);
            close(s * s + c * c, Det64::one());
            angle += Det64::from_ratio(1, 8);
        }
    }

    #[test]
    fn inverse_trig() {
        close(acos(Det64::one()), Det64::zero());
        close(acos(-Det64::one()), Det64::PI);
        close(acos(Det64::zero()), Det64::HALF_PI);
        close(asin(Det64::one()), Det64::HALF_PI);
        close(asin(-Det64::one()), -Det64::HALF_PI);
        close(Fixed64::acos(Fixed64::zero()), Fixed64::HALF_PI);
    }

    #[test]
    fn atan2_octants() {
        let one = Det64::one();
        assert_eq!(atan2(Det64::zero(), Det64::zero()), Det64::zero());
        close(atan2(Det64::zero(), one), Det64::zero());
        close(atan2(one, one), Det64::QUARTER_PI);
        close(atan2(one, Det64::zero()), Det64::HALF_PI);
        close(atan2(one, -one), Det64::PI - Det64::QUARTER_PI);
        close(atan2(-one, one), -Det64::QUARTER_PI);
        close(atan2(Det64::zero(), -one), Det64::PI);
    }

    #[test]
    fn axis_reduction() {
        close(clamp_axis(Det64::from_i32(-90)), Det64::from_i32(270));
        close(clamp_axis(Det64::from_i32(725)), Det64::from_i32(5));
        close(normalize_axis(Det64::from_i32(270)), Det64::from_i32(-90));
        close(Det64::from_i32(540).unwind_degrees(), Det64::from_i32(180));
        close((Det64::PI * Det64::from_i32(3)).unwind_radians(), Det64::PI);
    }
}
