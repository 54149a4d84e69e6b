use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid kernel record #{index}: {reason}")]
    InvalidKernelError { index: usize, reason: String },
}

impl GeneratorError {
    /// Short message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GeneratorError::IoError(e) => format!("Could not access a file: {}", e),
            GeneratorError::JsonError(e) => format!("The parameters file is not valid JSON: {}", e),
            GeneratorError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            GeneratorError::ConfigError { message } => format!("Configuration problem: {}", message),
            GeneratorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            GeneratorError::InvalidKernelError { index, reason } => {
                format!("Kernel record #{} is invalid: {}", index, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GeneratorError::IoError(_) => {
                "Check that the base directory contains parameters_<GPU>.json and that the output location is writable"
            }
            GeneratorError::JsonError(_) => {
                "The parameters file must contain a JSON array of kernel objects"
            }
            GeneratorError::TomlError(_) | GeneratorError::ConfigError { .. } => {
                "Fix the configuration file or pass the options on the command line"
            }
            GeneratorError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
            GeneratorError::InvalidKernelError { .. } => {
                "Every kernel needs m, n, k, algorithm, threads, grouping, minblocks and the tile parameters its algorithm uses"
            }
        }
    }

    /// Process exit code: 1 for configuration, 2 for input data, 3 for I/O.
    pub fn exit_code(&self) -> i32 {
        match self {
            GeneratorError::TomlError(_)
            | GeneratorError::ConfigError { .. }
            | GeneratorError::InvalidConfigValueError { .. } => 1,
            GeneratorError::JsonError(_) | GeneratorError::InvalidKernelError { .. } => 2,
            GeneratorError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
