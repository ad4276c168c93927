use std::path::{Path, PathBuf};

use serde::Serialize;

use super::errors::ControlError;
use crate::window::Xid;

pub const ACTIVITY_SERVICE_NAME: &str = "org.laptop.Activity";
pub const ACTIVITY_SERVICE_PATH: &str = "/org/laptop/Activity";
pub const ACTIVITY_INTERFACE: &str = "org.laptop.Activity";

/// Where the control interface of the activity owning a window lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityAddress {
    xid: Xid,
    service_name: String,
    object_path: String,
}

impl ActivityAddress {
    /// Derive the address for the activity that owns window `xid`.
    ///
    /// Window id 0 never names a real window and is rejected.
    pub fn for_window(xid: Xid) -> Result<Self, ControlError> {
        if xid == 0 {
            return Err(ControlError::InvalidAddress {
                message: "window id 0 does not identify a window".to_string(),
            });
        }

        Ok(Self {
            xid,
            service_name: format!("{}{}", ACTIVITY_SERVICE_NAME, xid),
            object_path: format!("{}/{}", ACTIVITY_SERVICE_PATH, xid),
        })
    }

    pub fn xid(&self) -> Xid {
        self.xid
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn object_path(&self) -> &str {
        &self.object_path
    }

    pub fn interface(&self) -> &'static str {
        ACTIVITY_INTERFACE
    }

    /// Socket the activity listens on inside `socket_dir`.
    pub fn socket_path(&self, socket_dir: &Path) -> PathBuf {
        socket_dir.join(format!("{}.sock", self.service_name))
    }
}
