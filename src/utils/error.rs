use thiserror::Error;

#[derive(Error, Debug)]
pub enum TogglerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid page address: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Storage unavailable: {message}")]
    StoreUnavailable { message: String },
}

impl TogglerError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TogglerError::IoError(e) => format!("Could not read or write a file: {}", e),
            TogglerError::SerializationError(_) => {
                "The state file is not valid JSON".to_string()
            }
            TogglerError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            TogglerError::UrlError(e) => format!("The page address could not be parsed: {}", e),
            TogglerError::ConfigError { message } => format!("Configuration problem: {}", message),
            TogglerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            TogglerError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            TogglerError::StoreUnavailable { message } => {
                format!("Remembered state is unavailable: {}", message)
            }
        }
    }

    /// 建議的修復方式
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TogglerError::IoError(_) => "Check that the path exists and is readable/writable",
            TogglerError::SerializationError(_) => {
                "Delete the state file; it is recreated on the next run"
            }
            TogglerError::TomlError(_)
            | TogglerError::ConfigError { .. }
            | TogglerError::InvalidConfigValueError { .. }
            | TogglerError::MissingConfigError { .. } => {
                "Fix the configuration file and run again"
            }
            TogglerError::UrlError(_) => {
                "Pass an absolute address such as https://host/page.html?x"
            }
            TogglerError::StoreUnavailable { .. } => {
                "State will not be remembered; check storage permissions"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TogglerError>;
