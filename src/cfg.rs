use serde::{Serialize, Deserialize};

use crate::angle::{self, AngleUnit};
use crate::geo_2d::Vec2D;
use crate::io;

/// Angle settings owned by a caller.
/// Carry one of these instead of leaning on the process-wide default
/// when the unit has to be the same across threads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleCfg {
    /// Unit used when no unit is given.
    #[serde(default, alias = "unit", alias = "default")]
    pub default_unit: AngleUnit,
}
impl AngleCfg {
    pub fn new(default_unit: AngleUnit) -> Self {
        AngleCfg{default_unit}
    }

    /// Load the settings from a `.yaml`/`.yml`, `.json` or `.toml` file.
    pub fn from_cfg_file(path: &str) -> io::IoResult<Self> {
        io::read_cfg_file(path)
    }

    /// Angle of a vector in this config's unit.
    pub fn angle(&self, vector: &Vec2D) -> f64 {
        vector.angle_in(self.default_unit)
    }

    /// Make this config's unit the process-wide default.
    /// Returns the default it replaced.
    pub fn install(&self) -> AngleUnit {
        angle::set_default_angle_unit(self.default_unit)
    }
}
