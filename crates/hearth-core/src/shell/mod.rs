//! Shell-side tracking of activity hosts.
//!
//! The shell keeps one [`ActivityHost`](crate::host::ActivityHost) per
//! activity window and tells hosts when focus moves between them. Commands
//! go through [`Store::dispatch`]; each successful command reports what
//! changed as [`Event`]s.

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use dispatch::ShellStore;
pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
