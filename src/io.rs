use clap::ValueEnum;
use strum::EnumIter;

/// Config file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, EnumIter)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> Option<Format> {
        match std::path::Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(Format::Json),
            Some("toml") => Some(Format::Toml),
            Some("yaml") | Some("yml") => Some(Format::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Verbose IO error, carrying the file it happened on when there is one.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn on_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n- {}", file, self.cause),
            None => write!(f, "- {}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Read a file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::on_file(path, IoErrorType::File(error)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    match Format::from_path(path) {
        Some(Format::Json) => {
            serde_json::from_reader(open(path)?)
                .map_err(|error| IoError::on_file(path, IoErrorType::SerdeJson(error)))
        },
        Some(Format::Toml) => {
            toml::from_str(&read_to_string(path)?)
                .map_err(|error| IoError::on_file(path, IoErrorType::TomlDe(error)))
        },
        Some(Format::Yaml) => {
            serde_yaml::from_reader(open(path)?)
                .map_err(|error| IoError::on_file(path, IoErrorType::SerdeYaml(error)))
        },
        None => {
            let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
            let error_string = format!("Unsupported filetype for config file: {}\nSupported filetypes: {:?}", path, supported_filetypes);
            Err(IoError::on_file(path, IoErrorType::StringOnly(error_string)))
        },
    }
}

/// Render a cfg struct in the given format.
pub fn cfg_to_string<T>(cfg: &T, format: Format) -> IoResult<String>
where T: serde::Serialize
{
    let to_io_error = |cause: IoErrorType| IoError{file: None, cause};
    match format {
        Format::Yaml => serde_yaml::to_string(cfg).map_err(|error| to_io_error(IoErrorType::SerdeYaml(error))),
        Format::Json => serde_json::to_string_pretty(cfg).map_err(|error| to_io_error(IoErrorType::SerdeJson(error))),
        Format::Toml => toml::to_string_pretty(cfg).map_err(|error| to_io_error(IoErrorType::TomlSer(error))),
    }
}
