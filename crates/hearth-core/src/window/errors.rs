use crate::errors::HearthError;

use super::types::Xid;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window {xid} cannot be wrapped: it no longer exists")]
    ForeignWindowGone { xid: Xid },

    #[error("Failed to realize window: {message}")]
    RealizeFailed { message: String },
}

impl HearthError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::ForeignWindowGone { .. } => "FOREIGN_WINDOW_GONE",
            WindowError::RealizeFailed { .. } => "WINDOW_REALIZE_FAILED",
        }
    }
}
