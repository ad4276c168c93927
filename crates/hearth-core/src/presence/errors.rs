use crate::errors::HearthError;

#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("Invalid color '{value}': expected '#RRGGBB,#RRGGBB'")]
    InvalidColor { value: String },
}

impl HearthError for PresenceError {
    fn error_code(&self) -> &'static str {
        match self {
            PresenceError::InvalidColor { .. } => "PRESENCE_INVALID_COLOR",
        }
    }
}
