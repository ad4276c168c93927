use crate::errors::HearthError;
use crate::host::HostError;
use crate::window::Xid;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Window {xid} is not tracked")]
    NotTracked { xid: Xid },

    #[error("Window {xid} is already tracked")]
    AlreadyTracked { xid: Xid },

    #[error("No activity is active")]
    NoActiveHost,
}

impl HearthError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Host(e) => e.error_code(),
            DispatchError::NotTracked { .. } => "WINDOW_NOT_TRACKED",
            DispatchError::AlreadyTracked { .. } => "WINDOW_ALREADY_TRACKED",
            DispatchError::NoActiveHost => "NO_ACTIVE_HOST",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Host(e) => e.is_user_error(),
            DispatchError::NotTracked { .. }
            | DispatchError::AlreadyTracked { .. }
            | DispatchError::NoActiveHost => true,
        }
    }
}
