pub mod angle;
pub mod args;
pub mod cfg;
pub mod geo_2d;
pub mod io;
pub mod math;
mod crate_errors;

pub use angle::{
    AngleUnit,
    default_angle_unit,
    set_default_angle_unit,
};
pub use cfg::AngleCfg;
pub use crate_errors::{
    VecError,
    VecResult,
    err_str,
};
pub use geo_2d::Vec2D;
pub use math::{
    degrees_to_radians,
    radians_to_degrees,
    square,
    DEG_TO_RAD_FACTOR,
    RAD_TO_DEG_FACTOR,
    TAU,
};

/// Run a parsed CLI command.
/// Returns the text to print on success.
pub fn run_command(command: args::Command) -> VecResult<String> {
    match command {
        args::Command::Angle(angle_args) => {
            if let Some(cfg_path) = angle_args.cfg_path.as_ref() {
                println!("Loading angle config file: {}...", cfg_path);
                AngleCfg::from_cfg_file(cfg_path)?.install();
            }
            let vector = angle_args.vector_args.vector();
            let angle = match angle_args.unit {
                Some(unit) => vector.angle_in(unit),
                None => vector.angle(),
            };
            Ok(angle.to_string())
        },
        args::Command::Magnitude(vector_args) => {
            Ok(vector_args.vector().magnitude().to_string())
        },
        args::Command::Convert(convert_args) => {
            println!("Converting {} {} to {}...", convert_args.value, convert_args.from, convert_args.from.other());
            let converted = match convert_args.from {
                AngleUnit::Degrees => degrees_to_radians(convert_args.value),
                AngleUnit::Radians => radians_to_degrees(convert_args.value),
            };
            Ok(converted.to_string())
        },
        args::Command::Example(example_args) => {
            Ok(io::cfg_to_string(&AngleCfg::default(), example_args.format)?)
        },
    }
}
