use super::address::ActivityAddress;
use super::errors::ControlError;

/// Typed client for one activity's control interface.
///
/// All calls block until the activity answers or the transport gives up.
pub trait ActivityControl {
    fn get_id(&self) -> Result<String, ControlError>;
    fn get_type(&self) -> Result<String, ControlError>;
    fn get_shared(&self) -> Result<bool, ControlError>;
    fn share(&self) -> Result<(), ControlError>;
}

/// Opens control channels to activity processes.
pub trait ControlConnector {
    fn connect(&self, address: &ActivityAddress) -> Result<Box<dyn ActivityControl>, ControlError>;
}
