use crate::control::ControlError;
use crate::errors::HearthError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Control(#[from] ControlError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error("No bundle installed for activity type '{activity_type}'")]
    BundleNotFound { activity_type: String },

    #[error("Buddy '{buddy}' does not announce a '{service_type}' service")]
    BuddyServiceNotFound { buddy: String, service_type: String },
}

impl HearthError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::Control(e) => e.error_code(),
            HostError::Window(e) => e.error_code(),
            HostError::BundleNotFound { .. } => "BUNDLE_NOT_FOUND",
            HostError::BuddyServiceNotFound { .. } => "BUDDY_SERVICE_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            HostError::Control(e) => e.is_user_error(),
            HostError::Window(e) => e.is_user_error(),
            HostError::BundleNotFound { .. } | HostError::BuddyServiceNotFound { .. } => true,
        }
    }
}
