use crate::{
    args,
    io,
};

/// Error-type enum for the `simple_vector` crate.
/// The vector math itself never fails, these come from the CLI and config layers.
#[derive(Debug)]
pub enum VecError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for VecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VecError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            VecError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            VecError::StringOnly(error) => write!(f, "! SIMPLE_VECTOR ERROR:\n- {}", error),
        }
    }
}
impl From<String> for VecError {
    fn from(error: String) -> Self {
        VecError::StringOnly(error)
    }
}
impl From<args::ArgError> for VecError {
    fn from(error: args::ArgError) -> Self {
        VecError::ArgError(error)
    }
}
impl From<io::IoError> for VecError {
    fn from(error: io::IoError) -> Self {
        VecError::IoError(error)
    }
}

/// Result type for the `simple_vector` crate.
pub type VecResult<T> = std::result::Result<T, VecError>;

/// Create a `VecResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::VecError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> VecResult<T> {
    Err(VecError::StringOnly(error_str.to_string()))
}
