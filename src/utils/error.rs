use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl DemoError {
    /// Short message suitable for printing to the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read or write data: {}", e),
            DemoError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            DemoError::SerializationError(_) => "Failed to render the report".to_string(),
            DemoError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            DemoError::MissingConfigError { field } => {
                format!("Setting '{}' is required but missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the file exists and is readable",
            DemoError::TomlError(_) => "Fix the TOML syntax reported above and retry",
            DemoError::SerializationError(_) => "Re-run without --json",
            DemoError::ConfigError { .. } => "Drop the conflicting command-line flags and retry",
            DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => {
                "Edit the configuration file or remove --config to use the built-in demo"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
