use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the scenario file exists and is readable",
            DemoError::ConfigParseError { .. } => {
                "Make sure the scenario file is valid TOML and every shape has a known `kind`"
            }
            DemoError::InvalidConfigValueError { .. } => {
                "Fix the highlighted field in the scenario file, or run without --config"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read the scenario file: {}", e),
            DemoError::ConfigParseError { message } => {
                format!("The scenario file could not be parsed: {}", message)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Scenario field '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
