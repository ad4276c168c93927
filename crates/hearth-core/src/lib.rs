//! hearth-core: Core library for hosting activity windows in a desktop shell
//!
//! An activity is an end-user application running as its own process. The
//! shell tracks one [`host::ActivityHost`] per activity window and drives
//! presence, sharing, invites and the chat overlay through it.
//!
//! # Main Entry Points
//!
//! - [`host`] - The per-window activity facade
//! - [`shell`] - Tracking hosts and switching the active one
//! - [`control`] - Remote activity control channel
//! - [`bundles`] - Bundle registry lookups
//! - [`config`] - Configuration management

pub mod bundles;
pub mod chat;
pub mod config;
pub mod control;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod overlay;
pub mod peer;
pub mod presence;
pub mod shell;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root for convenience
pub use bundles::{BundleError, BundleInfo, BundleRegistry, FileBundleRegistry};
pub use config::HearthConfig;
pub use control::{ActivityAddress, ActivityControl, ControlConnector, ControlError};
pub use host::{ActivityHost, HostError, HostServices};
pub use presence::{Buddy, IconColor, PeerService, PresenceActivity, PresenceDirectory};
pub use shell::{Command, DispatchError, Event, ShellStore, Store};
pub use window::{Drawable, Timestamp, WindowHandle, WindowSystem, Xid};

// Re-export logging initialization
pub use logging::init_logging;
