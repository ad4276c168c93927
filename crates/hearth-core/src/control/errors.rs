use crate::errors::HearthError;

/// Error talking to an activity's control interface.
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Invalid activity address: {message}")]
    InvalidAddress { message: String },

    #[error("Activity is not running (socket not found at {path})")]
    NotRunning { path: String },

    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Activity returned error: {message}")]
    RemoteError { message: String },

    #[error("Control protocol error: {message}")]
    ProtocolError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HearthError for ControlError {
    fn error_code(&self) -> &'static str {
        match self {
            ControlError::InvalidAddress { .. } => "CONTROL_INVALID_ADDRESS",
            ControlError::NotRunning { .. } => "ACTIVITY_NOT_RUNNING",
            ControlError::ConnectionFailed { .. } => "CONTROL_CONNECTION_FAILED",
            ControlError::RemoteError { .. } => "ACTIVITY_REMOTE_ERROR",
            ControlError::ProtocolError { .. } => "CONTROL_PROTOCOL_ERROR",
            ControlError::Io(_) => "CONTROL_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ControlError::NotRunning { .. } | ControlError::InvalidAddress { .. }
        )
    }
}
