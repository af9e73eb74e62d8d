use std::sync::atomic::{AtomicU8, Ordering};
use clap::ValueEnum;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, FromRepr};

/// Unit an angle is reported in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, ValueEnum, Display, EnumIter, FromRepr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum AngleUnit {
    /// Degrees, a full turn is 360.
    #[default]
    Degrees,
    /// Radians, a full turn is 2π.
    Radians,
}
impl AngleUnit {
    /// The unit an angle in this unit converts to.
    pub fn other(&self) -> AngleUnit {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }
}

// Process-wide default used by `Vec2D::angle`.
static DEFAULT_ANGLE_UNIT: AtomicU8 = AtomicU8::new(AngleUnit::Degrees as u8);

/// Get the process-wide default angle unit (starts as `Degrees`).
pub fn default_angle_unit() -> AngleUnit {
    AngleUnit::from_repr(DEFAULT_ANGLE_UNIT.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Set the process-wide default angle unit.
/// Returns the previous default.
///
/// The store is atomic, but readers on other threads may still see either value,
/// so threaded code should pass the unit explicitly with `Vec2D::angle_in`.
pub fn set_default_angle_unit(unit: AngleUnit) -> AngleUnit {
    let previous = DEFAULT_ANGLE_UNIT.swap(unit as u8, Ordering::Relaxed);
    AngleUnit::from_repr(previous).unwrap_or_default()
}
