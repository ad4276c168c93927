use std::error::Error;

/// Base trait for all application errors
pub trait HearthError: Error + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type HearthResult<T> = Result<T, Box<dyn HearthError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid profile color '{color}': expected '#RRGGBB,#RRGGBB'")]
    InvalidProfileColor { color: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl HearthError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidProfileColor { .. } => "INVALID_PROFILE_COLOR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidProfileColor { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}
