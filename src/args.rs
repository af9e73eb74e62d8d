mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::angle::AngleUnit;
use crate::geo_2d::Vec2D;
use crate::io::Format;

pub use proc_errors::{
    ArgError,
    ProcResult,
    err_str,
};

/// Angle and magnitude queries for 2D vectors.
#[derive(Debug, Parser)]
pub struct VectorCli {
    #[clap(subcommand)]
    pub command: Command,
}

/// Parser for the subcommands of the simple_vector binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "angle")]
    /// Print the angle of a vector from the positive x-axis.
    Angle(AngleArgs),

    #[command(name = "magnitude")]
    /// Print the magnitude of a vector.
    Magnitude(VectorArgs),

    #[command(name = "convert")]
    /// Convert an angle between degrees and radians.
    Convert(ConvertArgs),

    #[command(name = "example")]
    /// Print an example angle config file.
    Example(ExampleArgs),
}

/// Vector components, shared by the vector commands.
#[derive(Debug, Args)]
pub struct VectorArgs {
    #[arg(short, long, allow_hyphen_values = true)]
    /// X component.
    pub x: f64,

    #[arg(short, long, allow_hyphen_values = true)]
    /// Y component.
    pub y: f64,
}
impl VectorArgs {
    pub fn vector(&self) -> Vec2D {
        Vec2D::new(self.x, self.y)
    }
}

/// Arguments for the angle command.
#[derive(Debug, Args)]
pub struct AngleArgs {
    #[command(flatten)]
    pub vector_args: VectorArgs,

    #[arg(short, long, value_enum)]
    /// Unit to report the angle in (overrides the config file).
    pub unit: Option<AngleUnit>,

    #[arg(short, long = "cfg")]
    /// Config file (.yaml/.yml, .json, .toml) providing the default unit.
    pub cfg_path: Option<String>,
}

/// Arguments for the convert command.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[arg(allow_hyphen_values = true)]
    /// Angle value to convert.
    pub value: f64,

    #[arg(short, long, value_enum)]
    /// Unit the value is given in. It is converted to the other unit.
    pub from: AngleUnit,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    #[arg(short, long, value_enum, default_value = "yaml")]
    /// Format of the example config.
    pub format: Format,
}

/// Parse the command line arguments, exiting with usage on failure.
pub fn parse_cli_args() -> VectorCli {
    VectorCli::parse()
}

/// Parse arguments from an iterator, returning clap's error instead of exiting.
pub fn try_parse_from<I, T>(args: I) -> ProcResult<VectorCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(VectorCli::try_parse_from(args)?)
}

/// Check the argument values clap cannot check on its own.
pub fn validate(cli: &VectorCli) -> ProcResult<()> {
    if let Command::Angle(angle_args) = &cli.command {
        if let Some(cfg_path) = &angle_args.cfg_path {
            if Format::from_path(cfg_path).is_none() {
                err_str(&format!("Config file must end with .yaml, .yml, .json or .toml: {}", cfg_path))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_angle_with_negative_component() {
        let cli = try_parse_from(["simple_vector", "angle", "--x", "-1", "-y", "0", "--unit", "radians"]).unwrap();
        match cli.command {
            Command::Angle(args) => {
                assert_eq!(args.vector_args.vector(), Vec2D::new(-1.0, 0.0));
                assert_eq!(args.unit, Some(AngleUnit::Radians));
                assert!(args.cfg_path.is_none());
            },
            other => panic!("parsed the wrong command: {:?}", other),
        }
    }

    #[test]
    fn parse_convert() {
        let cli = try_parse_from(["simple_vector", "convert", "-90", "--from", "degrees"]).unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.value, -90.0);
                assert_eq!(args.from, AngleUnit::Degrees);
            },
            other => panic!("parsed the wrong command: {:?}", other),
        }
    }

    #[test]
    fn example_defaults_to_yaml() {
        let cli = try_parse_from(["simple_vector", "example"]).unwrap();
        assert!(matches!(cli.command, Command::Example(ExampleArgs{format: Format::Yaml})));
    }

    #[test]
    fn missing_component_is_a_clap_error() {
        let error = try_parse_from(["simple_vector", "magnitude", "--x", "3"]).unwrap_err();
        assert!(matches!(error, ArgError::ClapError(_)));
    }

    #[test]
    fn bad_cfg_extension_fails_validation() {
        let cli = try_parse_from(["simple_vector", "angle", "-x", "1", "-y", "1", "--cfg", "unit.ini"]).unwrap();
        match validate(&cli) {
            Err(ArgError::StringOnly(msg)) => assert!(msg.contains("unit.ini")),
            other => panic!("expected a config path error, got {:?}", other),
        }
    }

    #[test]
    fn validate_does_not_touch_the_cfg_file() {
        let cli = try_parse_from(["simple_vector", "angle", "-x", "1", "-y", "1", "--cfg", "tests/data/missing.yaml"]).unwrap();
        assert!(validate(&cli).is_ok());
    }
}
