//! Peer-to-peer messaging used for activity invitations.
//!
//! Requests are fire-and-forget: a writer sends one line per request and
//! never waits for an answer.

pub mod errors;
pub mod stream;

pub use errors::PeerError;
pub use stream::{TcpPeerMessenger, TcpStreamWriter};

use crate::presence::PeerService;

/// Name of the custom request carrying an activity invitation.
pub const INVITE_REQUEST: &str = "invite";

/// A write-only stream to one peer endpoint.
pub trait StreamWriter {
    /// Send a named request with positional string arguments.
    fn custom_request(&mut self, method: &str, params: &[&str]) -> Result<(), PeerError>;
}

/// Opens outbound streams to peer endpoints.
pub trait PeerMessenger {
    fn open_writer(&self, service: &PeerService) -> Result<Box<dyn StreamWriter>, PeerError>;
}
