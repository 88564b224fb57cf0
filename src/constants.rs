/// Mathematical and tolerance constants for a deterministic scalar backend.
///
/// Fixed backends define these from precomputed raw integers, the double
/// backend from plain literals, so the constant a replica sees never depends
/// on runtime float conversion.
pub trait MathConsts: Sized {
    /// Smallest representable value
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// Smallest representable increment above 0
    const EPSILON: Self;

    /// Tolerance used to detect degenerate lengths and scales
    const SMALL: Self;
    /// General-purpose comparison tolerance
    const KINDA_SMALL: Self;
    /// Squared-size slack within which a quaternion counts as normalized
    const THRESH_QUAT_NORMALIZED: Self;

    /// π
    const PI: Self;
    /// 2π
    const TWO_PI: Self;
    /// π/2
    const HALF_PI: Self;
    /// π/4
    const QUARTER_PI: Self;

    /// Multiply by this to convert degrees to radians
    const DEG_TO_RAD: Self;
    /// Multiply by this to convert radians to degrees
    const RAD_TO_DEG: Self;
}
