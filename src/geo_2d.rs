use std::fmt;

use crate::angle::{self, AngleUnit};
use crate::math;

/// A vector in 2D space.
/// Plain value type, the components are free to be any `f64` (including NaN).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2D {
    pub x: f64,
    pub y: f64,
}
impl Vec2D {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Vec2D{x, y}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        Vec2D{x: 0.0, y: 0.0}
    }

    /// Get the angle from the positive x-axis in the process default unit.
    /// The default is read at call time, see `angle::set_default_angle_unit`.
    pub fn angle(&self) -> f64 {
        self.angle_in(angle::default_angle_unit())
    }

    /// Get the angle from the positive x-axis in the given unit.
    /// Radians lie in `[-π, π]`: a signed zero `y` picks the sign on the negative x-axis.
    /// The zero vector gives `0` (or `±π` when `x` is `-0.0`).
    pub fn angle_in(&self, unit: AngleUnit) -> f64 {
        let radians = self.y.atan2(self.x);
        match unit {
            AngleUnit::Degrees => math::radians_to_degrees(radians),
            AngleUnit::Radians => radians,
        }
    }

    /// Get the magnitude of the vector.
    pub fn magnitude(&self) -> f64 {
        (math::square(self.x) + math::square(self.y)).sqrt()
    }
}
impl From<(f64, f64)> for Vec2D {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2D{x, y}
    }
}
impl fmt::Display for Vec2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, FRAC_PI_2};

    const EPS: f64 = 1e-12;

    #[test]
    fn default_is_zero() {
        let v = Vec2D::default();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
        assert_eq!(v, Vec2D::new(0.0, 0.0));
        assert_eq!(v, Vec2D::zero());
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vec2D::new(0.0, 0.0).magnitude(), 0.0);
        assert_eq!(Vec2D::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vec2D::new(-3.0, -4.0).magnitude(), 5.0);
        assert!(Vec2D::new(f64::MAX, 1.0).magnitude().is_infinite());
    }

    #[test]
    fn angle_in_radians() {
        assert_eq!(Vec2D::new(1.0, 0.0).angle_in(AngleUnit::Radians), 0.0);
        assert!((Vec2D::new(0.0, 1.0).angle_in(AngleUnit::Radians) - FRAC_PI_2).abs() < EPS);
        assert!((Vec2D::new(-1.0, 0.0).angle_in(AngleUnit::Radians) - PI).abs() < EPS);
        assert!((Vec2D::new(0.0, -1.0).angle_in(AngleUnit::Radians) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn angle_in_degrees() {
        assert_eq!(Vec2D::new(1.0, 0.0).angle_in(AngleUnit::Degrees), 0.0);
        assert!((Vec2D::new(0.0, 1.0).angle_in(AngleUnit::Degrees) - 90.0).abs() < 1e-9);
        assert!((Vec2D::new(-1.0, -1.0).angle_in(AngleUnit::Degrees) + 135.0).abs() < 1e-9);
        assert!((Vec2D::new(1.0, 1.0).angle_in(AngleUnit::Degrees) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn zero_vector_angle() {
        assert_eq!(Vec2D::zero().angle_in(AngleUnit::Radians), 0.0);
        assert_eq!(Vec2D::zero().angle_in(AngleUnit::Degrees), 0.0);
    }

    #[test]
    fn signed_zero_on_negative_x_axis() {
        assert_eq!(Vec2D::new(-1.0, 0.0).angle_in(AngleUnit::Radians), PI);
        assert_eq!(Vec2D::new(-1.0, -0.0).angle_in(AngleUnit::Radians), -PI);
        assert_eq!(Vec2D::new(-0.0, -0.0).angle_in(AngleUnit::Radians), -PI);
        assert_eq!(Vec2D::new(-0.0, 0.0).angle_in(AngleUnit::Radians), PI);
        assert!((Vec2D::new(-1.0, -0.0).angle_in(AngleUnit::Degrees) + 180.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_components_do_not_panic() {
        let v = Vec2D::new(f64::NAN, 1.0);
        assert!(v.magnitude().is_nan());
        assert!(v.angle_in(AngleUnit::Radians).is_nan());
    }

    #[test]
    fn display() {
        assert_eq!(Vec2D::new(3.0, -4.0).to_string(), "(3.000, -4.000)");
        assert_eq!(format!("{:.1}", Vec2D::from((0.26, 1.0))), "(0.3, 1.0)");
    }
}
