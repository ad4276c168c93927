//! Presence directory interfaces and value types.

pub mod color;
pub mod errors;
pub mod types;

pub use color::IconColor;
pub use errors::PresenceError;
pub use types::{Buddy, PeerService, PresenceActivity};

/// Directory of online buddies and their shared activities.
///
/// Only read from by the shell. Absence of an entry is a normal answer.
pub trait PresenceDirectory {
    /// The shared activity with `activity_id`, if anyone announced it.
    fn get_activity(&self, activity_id: &str) -> Option<PresenceActivity>;

    /// The local user.
    fn get_owner(&self) -> Buddy;
}
