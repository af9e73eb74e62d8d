use std::ops::Mul;
use num_traits::AsPrimitive;

/// Multiply by this to go from degrees to radians.
pub const DEG_TO_RAD_FACTOR: f64 = std::f64::consts::PI / 180.0;

/// Multiply by this to go from radians to degrees.
pub const RAD_TO_DEG_FACTOR: f64 = 180.0 / std::f64::consts::PI;

/// A full turn in radians.
pub const TAU: f64 = 2.0 * std::f64::consts::PI;

/// Convert an angle in degrees to radians.
/// The product is computed in `f64` and cast back to `T`,
/// so integer inputs are truncated toward zero.
pub fn degrees_to_radians<T>(angle: T) -> T
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    (angle.as_() * DEG_TO_RAD_FACTOR).as_()
}

/// Convert an angle in radians to degrees.
/// Same casting rule as `degrees_to_radians`.
pub fn radians_to_degrees<T>(angle: T) -> T
where
    T: AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    (angle.as_() * RAD_TO_DEG_FACTOR).as_()
}

/// Square of a value.
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}
