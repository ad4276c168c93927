//! Remote activity control channel.
//!
//! Every activity process exposes a small control interface (`get_id`,
//! `get_type`, `get_shared`, `share`) at an address derived from the numeric
//! id of its top-level window.
//!
//! - [`ActivityAddress`] - Deterministic address derivation
//! - [`ActivityControl`] / [`ControlConnector`] - Typed client seam
//! - [`SocketConnector`] - JSONL over unix sockets

pub mod address;
pub mod client;
pub mod errors;
pub mod traits;

pub use address::{
    ACTIVITY_INTERFACE, ACTIVITY_SERVICE_NAME, ACTIVITY_SERVICE_PATH, ActivityAddress,
};
pub use client::{SocketActivityControl, SocketConnector};
pub use errors::ControlError;
pub use traits::{ActivityControl, ControlConnector};
