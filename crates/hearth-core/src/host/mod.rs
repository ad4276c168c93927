//! The activity host: one shell-side facade per activity window.
//!
//! # Architecture
//!
//! - [`ActivityHost`] - Binds a window to its activity's control channel,
//!   presence entry, bundle metadata and chat overlay
//! - [`HostServices`] - The collaborators a host is built from
//! - [`HostError`] - Construction and remote-call failures

mod activity_host;
pub mod errors;
pub mod services;

pub use activity_host::ActivityHost;
pub use errors::HostError;
pub use services::{HostServices, HostSettings};
